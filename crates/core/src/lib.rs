//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the game and nothing else. It does no
//! I/O and never touches terminals, keyboards or clocks, which keeps it:
//!
//! - **Deterministic**: the same seed spawns the same piece sequence
//! - **Testable**: every action is a plain function over [`GameState`]
//! - **Allocation-free**: the grid and flag queue are fixed-size arrays
//!
//! # Module Structure
//!
//! - [`grid`]: 20x10 playfield of cells
//! - [`pieces`]: per-kind rotation tables and the active [`Piece`]
//! - [`collision`]: the single collision predicate
//! - [`actions`]: one transactional handler per [`Command`](types::Command)
//! - [`game_state`]: grid + active piece + running flag + pending flags
//! - [`rng`]: uniform, seeded piece selection
//!
//! # Example
//!
//! ```
//! use mini_tetris_core::{GameState, Outcome};
//! use mini_tetris_types::{Command, PieceKind};
//!
//! let mut game = GameState::new(12345);
//! game.spawn(PieceKind::I);
//!
//! assert_eq!(game.apply(Command::MoveDown), Outcome::Moved);
//! assert_eq!(
//!     game.active().unwrap().occupied_cells(),
//!     [(5, 3), (5, 4), (5, 5), (5, 6)]
//! );
//!
//! game.apply(Command::Stop);
//! assert!(!game.running());
//! ```

pub mod actions;
pub mod collision;
pub mod game_state;
pub mod grid;
pub mod pieces;
pub mod rng;

pub use mini_tetris_types as types;

// Re-export commonly used types for convenience
pub use actions::{apply, Outcome};
pub use collision::collides;
pub use game_state::GameState;
pub use grid::Grid;
pub use pieces::{rotation_states, Piece, RotationState, Spin};
pub use rng::SimpleRng;
