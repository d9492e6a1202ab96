//! Collaborator contracts the game loop drives.
//!
//! The loop only knows these two traits. The crossterm implementations live
//! in the `input` and `term` crates; tests plug in scripted fakes.

use anyhow::Result;

use crate::core::Grid;
use crate::types::Command;

/// Source of player commands.
///
/// `read` must not block: it returns `Ok(None)` straight away when no key is
/// waiting, so the tick keeps its timing.
pub trait Input {
    fn read(&mut self) -> Result<Option<Command>>;
}

/// Display that redraws the grid once per tick.
///
/// `start` acquires the display and `stop` releases it. The loop pairs them
/// through a guard, so `stop` runs even when a tick fails.
pub trait Renderer {
    fn start(&mut self) -> Result<()>;
    fn stop(&mut self) -> Result<()>;
    fn draw(&mut self, grid: &Grid) -> Result<()>;
}
