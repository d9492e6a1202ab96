//! Game engine: the fixed-tick loop and the contracts it drives.
//!
//! The engine owns a [`GameState`](core::GameState) and advances it one tick
//! at a time. It talks to the outside world only through the [`Input`] and
//! [`Renderer`] traits, so the loop runs the same against a real terminal or
//! against scripted fakes in tests.
//!
//! # Example
//!
//! ```
//! use anyhow::Result;
//! use mini_tetris_engine::{GameConfig, GameLoop, Input, Renderer};
//! use mini_tetris_engine::core::Grid;
//! use mini_tetris_engine::types::Command;
//!
//! struct QuitAtOnce;
//! impl Input for QuitAtOnce {
//!     fn read(&mut self) -> Result<Option<Command>> {
//!         Ok(Some(Command::Stop))
//!     }
//! }
//!
//! struct Headless;
//! impl Renderer for Headless {
//!     fn start(&mut self) -> Result<()> { Ok(()) }
//!     fn stop(&mut self) -> Result<()> { Ok(()) }
//!     fn draw(&mut self, _grid: &Grid) -> Result<()> { Ok(()) }
//! }
//!
//! let mut game = GameLoop::new(&GameConfig::default());
//! game.run(&mut QuitAtOnce, &mut Headless).unwrap();
//! assert_eq!(game.ticks(), 1);
//! ```

pub mod config;
pub mod game_loop;
pub mod io;

pub use mini_tetris_core as core;
pub use mini_tetris_types as types;

pub use config::GameConfig;
pub use game_loop::GameLoop;
pub use io::{Input, Renderer};
