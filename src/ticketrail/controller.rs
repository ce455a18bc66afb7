//! The event controller: board state plus the handlers that mutate it.
//!
//! [`BoardApp`] aggregates everything a session owns (api, projection,
//! overlay, focus, notice) and is passed by reference into the two entry
//! points: [`BoardApp::handle_action`] for semantic keyboard intents and
//! [`BoardApp::handle_pointer`] for the drag lifecycle. Every handler runs to
//! completion on the UI thread; nothing here blocks or suspends.
//!
//! ## The drag lifecycle
//!
//! Idle → Dragging → (Dropped | Cancelled) → Idle, carried by the store's
//! [`DragState`](crate::store::DragState):
//!
//! - press on a card records `{source: card, over: card's column}`
//! - each pointer move resolves the lane under the pointer by walking the
//!   region hit path; a path with no lane marker leaves the state untouched
//! - release takes the drag state; the move runs only when both source and
//!   over are present, otherwise the order keeps its column

use std::time::{Duration, Instant};
use uuid::Uuid;

use crate::action::{Action, PointerEvent, PointerKind};
use crate::api::BoardApi;
use crate::commands::{CmdResult, MessageLevel};
use crate::error::{BoardError, Result};
use crate::form::OrderForm;
use crate::model::Column;
use crate::overlay::{Overlay, OverlayState};
use crate::projection::BoardProjection;
use crate::regions::RegionFrame;
use crate::store::DragPatch;

const NOTICE_TTL: Duration = Duration::from_secs(3);

/// A transient status-bar message.
#[derive(Debug, Clone)]
pub struct Notice {
    pub level: MessageLevel,
    pub text: String,
    expires: Instant,
}

/// Keyboard focus on the board: a lane and a card index within it.
#[derive(Debug, Clone, Copy)]
pub struct Focus {
    pub lane: Column,
    pub index: usize,
}

impl Default for Focus {
    fn default() -> Self {
        Self {
            lane: Column::INITIAL,
            index: 0,
        }
    }
}

/// The full application state of one board session.
pub struct BoardApp {
    pub api: BoardApi,
    pub projection: BoardProjection,
    pub overlay: OverlayState,
    pub focus: Focus,
    pub should_quit: bool,
    notice: Option<Notice>,
}

impl Default for BoardApp {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardApp {
    pub fn new() -> Self {
        Self {
            api: BoardApi::new(),
            projection: BoardProjection::new(),
            overlay: OverlayState::new(),
            focus: Focus::default(),
            should_quit: false,
            notice: None,
        }
    }

    /// Seed demo orders and project them.
    pub fn seed(&mut self, count: usize) -> Result<()> {
        self.api.seed_demo(count)?;
        self.projection.rebuild(self.api.store());
        Ok(())
    }

    /// The card id under keyboard focus, if the focused lane has any.
    pub fn focused_card(&self) -> Option<Uuid> {
        self.projection
            .lane(self.focus.lane)
            .get(self.focus.index)
            .copied()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn notify_info(&mut self, text: impl Into<String>) {
        self.set_notice(MessageLevel::Info, text.into());
    }

    pub fn notify_error(&mut self, text: impl Into<String>) {
        self.set_notice(MessageLevel::Error, text.into());
    }

    fn set_notice(&mut self, level: MessageLevel, text: String) {
        self.notice = Some(Notice {
            level,
            text,
            expires: Instant::now() + NOTICE_TTL,
        });
    }

    /// Surface the first command message as the current notice.
    fn notify_result(&mut self, result: &CmdResult) {
        if let Some(message) = result.messages.first() {
            self.set_notice(message.level, message.content.clone());
        }
    }

    /// Clear the notice once its time is up.
    pub fn tick_notice(&mut self) {
        let expired = self
            .notice
            .as_ref()
            .map(|notice| Instant::now() >= notice.expires)
            .unwrap_or(false);
        if expired {
            self.notice = None;
        }
    }

    /// Keep the focused index inside the focused lane.
    pub fn clamp_focus(&mut self) {
        let len = self.projection.lane(self.focus.lane).len();
        if len == 0 {
            self.focus.index = 0;
        } else if self.focus.index >= len {
            self.focus.index = len - 1;
        }
    }

    fn focus_card(&mut self, id: Uuid, lane: Column) {
        self.focus.lane = lane;
        self.focus.index = self
            .projection
            .lane(lane)
            .iter()
            .position(|card| *card == id)
            .unwrap_or(0);
    }

    // -----------------------------------------------------------------------
    // Keyboard actions
    // -----------------------------------------------------------------------

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,

            Action::ToggleHelp => self.overlay.toggle_help(),
            Action::CloseOverlay | Action::Deny => {
                self.overlay.close();
            }
            Action::OpenAdd => self.overlay.open_add(),
            Action::OpenEdit => self.open_edit(),
            Action::RequestDelete => self.request_delete(),

            Action::FocusPrevLane
            | Action::FocusNextLane
            | Action::SelectPrevCard
            | Action::SelectNextCard => self.handle_navigation(action),

            Action::MoveCardPrevLane => self.move_focused_card(false),
            Action::MoveCardNextLane => self.move_focused_card(true),

            Action::Submit => self.submit_form(),
            Action::DeleteFromEdit => self.delete_from_edit(),
            Action::Confirm => self.confirm_delete(),

            Action::InputChar(_)
            | Action::InputBackspace
            | Action::InputLeft
            | Action::InputRight
            | Action::InputHome
            | Action::InputEnd
            | Action::NextField
            | Action::PrevField
            | Action::CycleColumnNext
            | Action::CycleColumnPrev => self.handle_form_input(action),
        }
    }

    fn handle_navigation(&mut self, action: Action) {
        match action {
            Action::FocusPrevLane => {
                if let Some(lane) = self.focus.lane.prev() {
                    self.focus.lane = lane;
                    self.clamp_focus();
                }
            }
            Action::FocusNextLane => {
                if let Some(lane) = self.focus.lane.next() {
                    self.focus.lane = lane;
                    self.clamp_focus();
                }
            }
            Action::SelectPrevCard => {
                if self.focus.index > 0 {
                    self.focus.index -= 1;
                }
            }
            Action::SelectNextCard => {
                let len = self.projection.lane(self.focus.lane).len();
                if self.focus.index + 1 < len {
                    self.focus.index += 1;
                }
            }
            _ => unreachable!(),
        }
    }

    fn open_edit(&mut self) {
        let Some(id) = self.focused_card() else {
            self.notify_info("No order selected");
            return;
        };
        let Some(order) = self.api.order(&id) else {
            return;
        };
        let form = OrderForm::edit(order);
        self.overlay.open_edit(id, form);
    }

    fn request_delete(&mut self) {
        match self.focused_card() {
            Some(id) => self.overlay.open_confirm_delete(id),
            None => self.notify_info("No order selected"),
        }
    }

    fn move_focused_card(&mut self, forward: bool) {
        let Some(id) = self.focused_card() else {
            return;
        };
        let target = if forward {
            self.focus.lane.next()
        } else {
            self.focus.lane.prev()
        };
        let Some(target) = target else {
            return;
        };
        match self.api.move_order(&id, target) {
            Ok(result) => {
                self.projection.move_card(id, target);
                self.focus_card(id, target);
                self.notify_result(&result);
            }
            Err(err) => self.notify_error(err.to_string()),
        }
    }

    fn submit_form(&mut self) {
        let (target, fields) = match self.overlay.current() {
            Some(Overlay::Add { form }) => (None, form.fields()),
            Some(Overlay::Edit { id, form }) => (Some(*id), form.fields()),
            _ => return,
        };

        match target {
            None => match self.api.create_order(fields) {
                Ok(result) => {
                    if let Some(order) = result.affected_orders.first() {
                        self.projection.append_card(order);
                    }
                    self.overlay.close();
                    self.notify_result(&result);
                }
                // Validation failed: the overlay stays open so the input
                // can be fixed.
                Err(err) => self.notify_error(err.to_string()),
            },
            Some(id) => match self.api.update_order(&id, fields) {
                Ok(result) => {
                    self.projection.rebuild(self.api.store());
                    self.clamp_focus();
                    self.overlay.close();
                    self.notify_result(&result);
                }
                Err(err @ BoardError::EmptyField(_)) => self.notify_error(err.to_string()),
                Err(err) => {
                    // The order vanished under the form; resync and report.
                    self.overlay.close();
                    self.projection.rebuild(self.api.store());
                    self.clamp_focus();
                    self.notify_error(err.to_string());
                }
            },
        }
    }

    fn confirm_delete(&mut self) {
        let Some(Overlay::ConfirmDelete { id }) = self.overlay.current() else {
            return;
        };
        let id = *id;
        self.overlay.close();
        self.delete_order(id);
    }

    fn delete_from_edit(&mut self) {
        let Some(Overlay::Edit { id, .. }) = self.overlay.current() else {
            return;
        };
        let id = *id;
        self.overlay.close();
        self.delete_order(id);
    }

    fn delete_order(&mut self, id: Uuid) {
        match self.api.delete_order(&id) {
            Ok(result) => {
                self.projection.rebuild(self.api.store());
                self.clamp_focus();
                self.notify_result(&result);
            }
            Err(err) => self.notify_error(err.to_string()),
        }
    }

    fn handle_form_input(&mut self, action: Action) {
        let form = match self.overlay.current_mut() {
            Some(Overlay::Add { form }) | Some(Overlay::Edit { form, .. }) => form,
            _ => return,
        };
        match action {
            Action::InputChar(c) => {
                if let Some(field) = form.active_mut() {
                    field.insert(c);
                }
            }
            Action::InputBackspace => {
                if let Some(field) = form.active_mut() {
                    field.backspace();
                }
            }
            Action::InputLeft => {
                if let Some(field) = form.active_mut() {
                    field.move_left();
                }
            }
            Action::InputRight => {
                if let Some(field) = form.active_mut() {
                    field.move_right();
                }
            }
            Action::InputHome => {
                if let Some(field) = form.active_mut() {
                    field.home();
                }
            }
            Action::InputEnd => {
                if let Some(field) = form.active_mut() {
                    field.end();
                }
            }
            Action::NextField => form.next_field(),
            Action::PrevField => form.prev_field(),
            Action::CycleColumnNext => form.cycle_column(true),
            Action::CycleColumnPrev => form.cycle_column(false),
            _ => unreachable!(),
        }
    }

    // -----------------------------------------------------------------------
    // Pointer handling: the drag state machine
    // -----------------------------------------------------------------------

    pub fn handle_pointer(&mut self, event: PointerEvent, regions: &RegionFrame) {
        // Overlays are keyboard-driven; pointer input only drives the board.
        // A release while a modal is up still ends any drag in progress,
        // without moving anything.
        if self.overlay.is_open() {
            if event.kind == PointerKind::Release {
                self.api.take_dragging();
            }
            return;
        }

        match event.kind {
            PointerKind::Press => {
                let Some(id) = regions.card_at(event.at) else {
                    return;
                };
                let Some(order) = self.api.order(&id) else {
                    return;
                };
                let column = order.column;
                self.api.update_dragging(DragPatch::begin(id, column));
                self.focus_card(id, column);
            }
            PointerKind::Move => {
                if self.api.dragging().source.is_none() {
                    return;
                }
                // No lane marker on the hit path: tolerated no-op, the drag
                // state stays as it was.
                if let Some(column) = regions.column_at(event.at) {
                    self.api.update_dragging(DragPatch::over(column));
                }
            }
            PointerKind::Release => {
                let drag = self.api.take_dragging();
                let (Some(source), Some(over)) = (drag.source, drag.over) else {
                    return;
                };
                match self.api.move_order(&source, over) {
                    Ok(result) => {
                        self.projection.move_card(source, over);
                        self.focus_card(source, over);
                        self.notify_result(&result);
                    }
                    Err(err) => self.notify_error(err.to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderFields;
    use crate::regions::Marker;
    use crate::store::DragState;
    use ratatui::layout::Rect;

    /// An app with three orders in Ordered and one in Ready.
    fn seeded_app() -> BoardApp {
        let mut app = BoardApp::new();
        for (title, table) in [("Burger", "4"), ("Soup", "2"), ("Salad", "7")] {
            app.api
                .create_order(OrderFields::draft(title, table))
                .unwrap();
        }
        app.api
            .create_order(OrderFields::draft("Pie", "1").with_column(Column::Ready))
            .unwrap();
        app.projection.rebuild(app.api.store());
        app
    }

    /// Board with an Ordered lane (x 0..20) holding one card, and a Ready
    /// lane (x 40..60). The gap between them is dead space.
    fn demo_regions(card: Uuid) -> RegionFrame {
        let mut regions = RegionFrame::new();
        regions.register(Rect::new(0, 0, 80, 24), Marker::Board);
        regions.register(Rect::new(0, 1, 20, 23), Marker::Lane(Column::Ordered));
        regions.register(Rect::new(40, 1, 20, 23), Marker::Lane(Column::Ready));
        regions.register(Rect::new(1, 2, 18, 2), Marker::Card(card));
        regions
    }

    fn press(x: u16, y: u16) -> PointerEvent {
        PointerEvent::new(PointerKind::Press, x, y)
    }

    fn drag(x: u16, y: u16) -> PointerEvent {
        PointerEvent::new(PointerKind::Move, x, y)
    }

    fn release(x: u16, y: u16) -> PointerEvent {
        PointerEvent::new(PointerKind::Release, x, y)
    }

    // -----------------------------------------------------------------------
    // Drag lifecycle
    // -----------------------------------------------------------------------

    #[test]
    fn press_on_card_starts_drag() {
        let mut app = seeded_app();
        let card = app.projection.lane(Column::Ordered)[0];
        let regions = demo_regions(card);

        app.handle_pointer(press(2, 3), &regions);

        assert_eq!(app.api.dragging().source, Some(card));
        assert_eq!(app.api.dragging().over, Some(Column::Ordered));
        assert_eq!(app.focus.lane, Column::Ordered);
    }

    #[test]
    fn press_on_empty_space_does_nothing() {
        let mut app = seeded_app();
        let card = app.projection.lane(Column::Ordered)[0];
        let regions = demo_regions(card);

        app.handle_pointer(press(45, 20), &regions);
        assert_eq!(app.api.dragging(), DragState::default());
    }

    #[test]
    fn drag_over_lane_retargets() {
        let mut app = seeded_app();
        let card = app.projection.lane(Column::Ordered)[0];
        let regions = demo_regions(card);

        app.handle_pointer(press(2, 3), &regions);
        app.handle_pointer(drag(45, 10), &regions);

        assert_eq!(app.api.dragging().source, Some(card));
        assert_eq!(app.api.dragging().over, Some(Column::Ready));
    }

    #[test]
    fn drag_outside_every_lane_is_ignored() {
        let mut app = seeded_app();
        let card = app.projection.lane(Column::Ordered)[0];
        let regions = demo_regions(card);

        app.handle_pointer(press(2, 3), &regions);
        let before = app.api.dragging();

        // Dead space between lanes, and fully off the board.
        app.handle_pointer(drag(30, 10), &regions);
        app.handle_pointer(drag(200, 200), &regions);

        assert_eq!(app.api.dragging(), before);
    }

    #[test]
    fn drop_moves_the_order_and_resets_drag() {
        let mut app = seeded_app();
        let card = app.projection.lane(Column::Ordered)[0];
        let regions = demo_regions(card);

        app.handle_pointer(press(2, 3), &regions);
        app.handle_pointer(drag(45, 10), &regions);
        app.handle_pointer(release(45, 10), &regions);

        assert_eq!(app.api.order(&card).unwrap().column, Column::Ready);
        assert_eq!(app.projection.column_of(card), Some(Column::Ready));
        assert_eq!(app.api.dragging(), DragState::default());
        assert_eq!(app.focus.lane, Column::Ready);
    }

    #[test]
    fn drop_without_resolved_column_skips_the_move() {
        let mut app = seeded_app();
        let card = app.projection.lane(Column::Ordered)[0];
        let regions = demo_regions(card);

        // A drag that never saw a lane: source set, over never resolved.
        app.api.update_dragging(DragPatch {
            source: Some(card),
            over: None,
        });
        app.handle_pointer(release(30, 10), &regions);

        assert_eq!(app.api.order(&card).unwrap().column, Column::Ordered);
        assert_eq!(app.api.dragging(), DragState::default());
    }

    #[test]
    fn release_without_drag_is_a_no_op() {
        let mut app = seeded_app();
        let card = app.projection.lane(Column::Ordered)[0];
        let regions = demo_regions(card);

        app.handle_pointer(release(45, 10), &regions);
        assert_eq!(app.api.order(&card).unwrap().column, Column::Ordered);
    }

    #[test]
    fn pointer_is_ignored_while_an_overlay_is_open() {
        let mut app = seeded_app();
        let card = app.projection.lane(Column::Ordered)[0];
        let regions = demo_regions(card);

        app.handle_action(Action::ToggleHelp);
        app.handle_pointer(press(2, 3), &regions);

        assert_eq!(app.api.dragging(), DragState::default());
    }

    #[test]
    fn opening_an_overlay_mid_drag_cancels_on_release() {
        let mut app = seeded_app();
        let card = app.projection.lane(Column::Ordered)[0];
        let regions = demo_regions(card);

        app.handle_pointer(press(2, 3), &regions);
        app.handle_pointer(drag(45, 10), &regions);
        app.handle_action(Action::ToggleHelp);
        app.handle_pointer(release(45, 10), &regions);

        // The drag ended without a move.
        assert_eq!(app.api.dragging(), DragState::default());
        assert_eq!(app.api.order(&card).unwrap().column, Column::Ordered);
    }

    // -----------------------------------------------------------------------
    // Add / edit / delete flows
    // -----------------------------------------------------------------------

    fn type_into_form(app: &mut BoardApp, text: &str) {
        for c in text.chars() {
            app.handle_action(Action::InputChar(c));
        }
    }

    #[test]
    fn add_flow_appends_to_the_initial_lane() {
        let mut app = BoardApp::new();
        app.handle_action(Action::OpenAdd);
        type_into_form(&mut app, "Burger");
        app.handle_action(Action::NextField);
        type_into_form(&mut app, "4");
        app.handle_action(Action::Submit);

        assert!(!app.overlay.is_open());
        assert_eq!(app.projection.lane(Column::Ordered).len(), 1);
        let id = app.projection.lane(Column::Ordered)[0];
        let order = app.api.order(&id).unwrap();
        assert_eq!(order.title, "Burger");
        assert_eq!(order.table, "4");
        assert_eq!(order.column, Column::Ordered);
    }

    #[test]
    fn add_with_empty_fields_surfaces_an_error_and_stays_open() {
        let mut app = BoardApp::new();
        app.handle_action(Action::OpenAdd);
        type_into_form(&mut app, "Burger");
        // Table left empty.
        app.handle_action(Action::Submit);

        assert!(app.overlay.is_open());
        assert!(app.api.store().is_empty());
        let notice = app.notice().expect("validation notice");
        assert_eq!(notice.level, MessageLevel::Error);
        assert!(notice.text.contains("Table"));
    }

    #[test]
    fn edit_flow_rewrites_fields_and_relocates_the_card() {
        let mut app = seeded_app();
        let id = app.projection.lane(Column::Ordered)[0];

        app.handle_action(Action::OpenEdit);
        // Focus starts on title; move to the column field and advance it.
        app.handle_action(Action::NextField);
        app.handle_action(Action::NextField);
        app.handle_action(Action::CycleColumnNext);
        app.handle_action(Action::CycleColumnNext);
        app.handle_action(Action::Submit);

        assert!(!app.overlay.is_open());
        assert_eq!(app.api.order(&id).unwrap().column, Column::Ready);
        assert_eq!(app.projection.column_of(id), Some(Column::Ready));
    }

    #[test]
    fn edit_submit_for_a_vanished_order_reports_and_closes() {
        let mut app = seeded_app();
        let id = app.projection.lane(Column::Ordered)[0];

        app.handle_action(Action::OpenEdit);
        // The order disappears while the form is open.
        app.api.delete_order(&id).unwrap();
        app.handle_action(Action::Submit);

        assert!(!app.overlay.is_open());
        let notice = app.notice().expect("error notice");
        assert_eq!(notice.level, MessageLevel::Error);
        assert!(app.projection.column_of(id).is_none());
    }

    #[test]
    fn delete_via_confirm_overlay() {
        let mut app = seeded_app();
        let id = app.projection.lane(Column::Ordered)[0];
        let before = app.api.store().len();

        app.handle_action(Action::RequestDelete);
        assert!(matches!(
            app.overlay.current(),
            Some(Overlay::ConfirmDelete { .. })
        ));

        app.handle_action(Action::Confirm);
        assert!(!app.overlay.is_open());
        assert!(app.api.order(&id).is_none());
        assert_eq!(app.api.store().len(), before - 1);
    }

    #[test]
    fn deny_keeps_the_order() {
        let mut app = seeded_app();
        let before = app.api.store().len();

        app.handle_action(Action::RequestDelete);
        app.handle_action(Action::Deny);

        assert!(!app.overlay.is_open());
        assert_eq!(app.api.store().len(), before);
    }

    #[test]
    fn delete_from_the_edit_overlay() {
        let mut app = seeded_app();
        let id = app.projection.lane(Column::Ordered)[0];

        app.handle_action(Action::OpenEdit);
        app.handle_action(Action::DeleteFromEdit);

        assert!(!app.overlay.is_open());
        assert!(app.api.order(&id).is_none());
    }

    #[test]
    fn help_toggle_round_trips() {
        let mut app = BoardApp::new();
        app.handle_action(Action::ToggleHelp);
        assert!(matches!(app.overlay.current(), Some(Overlay::Help)));
        app.handle_action(Action::ToggleHelp);
        assert!(!app.overlay.is_open());
        // Closing again stays closed.
        app.handle_action(Action::CloseOverlay);
        assert!(!app.overlay.is_open());
    }

    // -----------------------------------------------------------------------
    // Keyboard navigation and movement
    // -----------------------------------------------------------------------

    #[test]
    fn focus_moves_between_lanes_and_stops_at_the_ends() {
        let mut app = seeded_app();
        assert_eq!(app.focus.lane, Column::Ordered);

        app.handle_action(Action::FocusPrevLane);
        assert_eq!(app.focus.lane, Column::Ordered);

        for _ in 0..5 {
            app.handle_action(Action::FocusNextLane);
        }
        assert_eq!(app.focus.lane, Column::Delivered);
    }

    #[test]
    fn selection_clamps_to_lane_length() {
        let mut app = seeded_app();
        for _ in 0..5 {
            app.handle_action(Action::SelectNextCard);
        }
        assert_eq!(app.focus.index, 2);

        // Moving to the one-card Ready lane clamps the index.
        app.handle_action(Action::FocusNextLane);
        app.handle_action(Action::FocusNextLane);
        assert_eq!(app.focus.lane, Column::Ready);
        assert_eq!(app.focus.index, 0);
    }

    #[test]
    fn keyboard_move_follows_the_card() {
        let mut app = seeded_app();
        let id = app.focused_card().unwrap();

        app.handle_action(Action::MoveCardNextLane);

        assert_eq!(app.api.order(&id).unwrap().column, Column::Preparing);
        assert_eq!(app.focus.lane, Column::Preparing);
        assert_eq!(app.focused_card(), Some(id));
    }

    #[test]
    fn keyboard_move_at_the_edge_is_a_no_op() {
        let mut app = seeded_app();
        let id = app.focused_card().unwrap();

        app.handle_action(Action::MoveCardPrevLane);
        assert_eq!(app.api.order(&id).unwrap().column, Column::Ordered);
    }

    #[test]
    fn notice_expires_after_its_ttl() {
        let mut app = BoardApp::new();
        app.notify_info("hello");
        assert!(app.notice().is_some());

        // Not yet expired.
        app.tick_notice();
        assert!(app.notice().is_some());

        // Force expiry.
        if let Some(notice) = &mut app.notice {
            notice.expires = Instant::now() - Duration::from_millis(1);
        }
        app.tick_notice();
        assert!(app.notice().is_none());
    }
}
