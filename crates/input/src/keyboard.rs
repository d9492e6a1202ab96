//! Non-blocking keyboard source backed by crossterm.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::trace;

use crate::engine::Input;
use crate::map::map_key_event;
use crate::types::Command;

/// Reads at most one key press per call without waiting.
///
/// Non-key events (resize, focus, mouse) and key release/repeat events are
/// skipped. A press consumes the call even when it maps to no command, so
/// each tick handles one key.
#[derive(Debug, Default)]
pub struct KeyboardInput;

impl KeyboardInput {
    pub fn new() -> Self {
        Self
    }
}

impl Input for KeyboardInput {
    fn read(&mut self) -> Result<Option<Command>> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let command = map_key_event(key);
                trace!(code = ?key.code, ?command, "key press");
                return Ok(command);
            }
        }
        Ok(None)
    }
}
