//! Terminal Tetris runner.
//!
//! Reads configuration from the environment, optionally opens the log file,
//! then runs the game loop with keyboard input and the terminal renderer
//! until `q` (or Ctrl-C) is pressed.

use anyhow::Result;
use tracing::info;

use mini_tetris::engine::{GameConfig, GameLoop};
use mini_tetris::input::KeyboardInput;
use mini_tetris::logging;
use mini_tetris::term::TerminalRenderer;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    if logging::init(&config)? {
        info!(seed = config.seed, "logging initialized at level {}", config.log_level);
    }

    let mut game = GameLoop::new(&config);
    let mut input = KeyboardInput::new();
    let mut renderer = TerminalRenderer::new();

    game.run(&mut input, &mut renderer)
}
