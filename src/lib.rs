//! Mini Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, the
//! integration tests and the benches share a single import path:
//! `mini_tetris::{core, engine, input, term, types}`.

pub mod logging;

pub use mini_tetris_core as core;
pub use mini_tetris_engine as engine;
pub use mini_tetris_input as input;
pub use mini_tetris_term as term;
pub use mini_tetris_types as types;
