//! Context-aware key mapping: the same key means different things depending
//! on which overlay is open, so the board state picks the table.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use ticketrail::action::Action;
use ticketrail::controller::BoardApp;
use ticketrail::form::FormField;
use ticketrail::overlay::Overlay;

pub fn map_key(key: KeyEvent, app: &BoardApp) -> Option<Action> {
    match app.overlay.current() {
        None => map_board_key(key),
        Some(Overlay::Help) => map_help_key(key),
        Some(Overlay::ConfirmDelete { .. }) => map_confirm_key(key),
        Some(Overlay::Add { form }) => map_form_key(key, form.focus == FormField::Column, false),
        Some(Overlay::Edit { form, .. }) => {
            map_form_key(key, form.focus == FormField::Column, true)
        }
    }
}

fn map_board_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Char('a') => Some(Action::OpenAdd),
        KeyCode::Char('e') | KeyCode::Enter => Some(Action::OpenEdit),
        KeyCode::Char('d') => Some(Action::RequestDelete),
        KeyCode::Char('h') | KeyCode::Left => Some(Action::FocusPrevLane),
        KeyCode::Char('l') | KeyCode::Right => Some(Action::FocusNextLane),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::SelectPrevCard),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::SelectNextCard),
        KeyCode::Char('[') => Some(Action::MoveCardPrevLane),
        KeyCode::Char(']') => Some(Action::MoveCardNextLane),
        _ => None,
    }
}

fn map_help_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q') => {
            Some(Action::ToggleHelp)
        }
        _ => None,
    }
}

fn map_confirm_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Char('n') | KeyCode::Esc => Some(Action::Deny),
        _ => None,
    }
}

fn map_form_key(key: KeyEvent, on_column_field: bool, is_edit: bool) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('d') if is_edit => Some(Action::DeleteFromEdit),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Esc => Some(Action::CloseOverlay),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Tab => Some(Action::NextField),
        KeyCode::BackTab => Some(Action::PrevField),
        KeyCode::Left if on_column_field => Some(Action::CycleColumnPrev),
        KeyCode::Right if on_column_field => Some(Action::CycleColumnNext),
        KeyCode::Left => Some(Action::InputLeft),
        KeyCode::Right => Some(Action::InputRight),
        KeyCode::Home => Some(Action::InputHome),
        KeyCode::End => Some(Action::InputEnd),
        KeyCode::Backspace => Some(Action::InputBackspace),
        KeyCode::Char(c) => Some(Action::InputChar(c)),
        _ => None,
    }
}
