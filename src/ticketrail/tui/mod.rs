//! The terminal client: event loop, key mapping, and drawing.
//!
//! Everything crossterm- or ratatui-specific lives here; the library below
//! only ever sees `Action` and `PointerEvent` values.

mod app;
mod keymap;
mod render;

pub use app::run;
