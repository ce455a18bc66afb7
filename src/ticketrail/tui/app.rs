//! Terminal lifecycle and the event loop.

use std::io;
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton, MouseEvent,
    MouseEventKind,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use ticketrail::action::{PointerEvent, PointerKind};
use ticketrail::config::BoardConfig;
use ticketrail::controller::BoardApp;
use ticketrail::error::Result;
use ticketrail::regions::RegionFrame;

use super::{keymap, render};

pub fn run(mut app: BoardApp, config: &BoardConfig) -> Result<()> {
    let mut terminal = ratatui::init();
    if config.mouse {
        execute!(io::stdout(), EnableMouseCapture)?;
    }

    let result = event_loop(&mut terminal, &mut app, config);

    if config.mouse {
        let _ = execute!(io::stdout(), DisableMouseCapture);
    }
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut BoardApp,
    config: &BoardConfig,
) -> Result<()> {
    let mut regions = RegionFrame::new();
    let tick = Duration::from_millis(config.tick_rate_ms);

    while !app.should_quit {
        app.tick_notice();
        terminal.draw(|frame| render::draw(frame, app, &mut regions))?;

        if event::poll(tick)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = keymap::map_key(key, app) {
                        app.handle_action(action);
                    }
                }
                Event::Mouse(mouse) => {
                    // The hit regions from the frame just drawn are what the
                    // pointer was actually over.
                    if let Some(pointer) = pointer_event(&mouse) {
                        app.handle_pointer(pointer, &regions);
                    }
                }
                _ => {}
            }
        }
    }
    Ok(())
}

/// Reduce a mouse event to the three pointer phases the drag machine knows.
/// Everything but the left button is ignored.
fn pointer_event(mouse: &MouseEvent) -> Option<PointerEvent> {
    let kind = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => PointerKind::Press,
        MouseEventKind::Drag(MouseButton::Left) => PointerKind::Move,
        MouseEventKind::Up(MouseButton::Left) => PointerKind::Release,
        _ => return None,
    };
    Some(PointerEvent::new(kind, mouse.column, mouse.row))
}
