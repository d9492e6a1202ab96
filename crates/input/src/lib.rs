//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`] and provides
//! [`KeyboardInput`], the polling [`Input`](crate::engine::Input)
//! implementation the binary plugs into the game loop.

pub mod keyboard;
pub mod map;

pub use mini_tetris_engine as engine;
pub use mini_tetris_types as types;

pub use keyboard::KeyboardInput;
pub use map::map_key_event;
