//! Non-blocking terminal input, at most one event per frame.

use std::time::Duration;

use anyhow::Result;
use crossterm::event;

use crate::engine::InputSource;
use crate::map::map_event;
use crate::types::InputEvent;

/// Non-blocking crossterm input: at most one terminal event is read per frame.
///
/// Events that map to nothing still use up the frame's read.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> Result<Option<InputEvent>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }
        Ok(map_event(&event::read()?))
    }
}
