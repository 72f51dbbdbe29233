//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events to [`crate::types::Command`] and provides a
//! non-blocking poll that yields at most one key press per frame.

pub mod map;
pub mod poll;

pub use tui_raycaster_types as types;

pub use map::{command_for_key, should_quit};
pub use poll::{poll_key, KeyPoller, TerminalKeys};
