//! Terminal rendering for the game grid.
//!
//! The grid is laid out into a plain framebuffer by [`GridView`] and flushed
//! by [`TerminalRenderer`], which only writes cells that changed since the
//! previous frame. Each grid cell is two characters wide so the board keeps
//! a roughly square aspect ratio.

pub mod fb;
pub mod grid_view;
pub mod renderer;

pub use mini_tetris_core as core;
pub use mini_tetris_engine as engine;
pub use mini_tetris_types as types;

pub use fb::{CellStyle, FrameBuffer, Rgb, TermCell};
pub use grid_view::{GridView, Placement, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
