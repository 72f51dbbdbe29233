//! Non-blocking keyboard poll.
//!
//! Each call returns immediately with at most one key press. Anything else
//! still queued in the terminal is left for later frames.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Source of at most one key press per frame.
pub trait KeyPoller {
    fn poll_key(&mut self) -> Result<Option<KeyEvent>>;
}

/// Read one pending key press from the terminal without waiting.
///
/// Non-key events (resize, mouse, focus) and key releases/repeats are
/// consumed and reported as "no key".
pub fn poll_key() -> Result<Option<KeyEvent>> {
    if !event::poll(Duration::ZERO)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
        _ => Ok(None),
    }
}

/// The real terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalKeys;

impl KeyPoller for TerminalKeys {
    fn poll_key(&mut self) -> Result<Option<KeyEvent>> {
        poll_key()
    }
}

/// Scripted key source: one entry per frame, `None` for an idle frame.
impl<I> KeyPoller for I
where
    I: Iterator<Item = Option<KeyEvent>>,
{
    fn poll_key(&mut self) -> Result<Option<KeyEvent>> {
        Ok(self.next().flatten())
    }
}
