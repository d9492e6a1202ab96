//! Runtime configuration, read from environment variables.
//!
//! Every variable is optional. A missing or unparsable value falls back to
//! its default rather than failing startup.
//!
//! - `MINI_TETRIS_SEED`: randomizer seed (default: derived from the wall clock)
//! - `MINI_TETRIS_FPS`: ticks per second, fractional allowed (default: 60)
//! - `MINI_TETRIS_GRAVITY_TICKS`: ticks per automatic drop (default: 75)
//! - `MINI_TETRIS_LOG_PATH`: log file; logging is off when unset
//! - `MINI_TETRIS_LOG_LEVEL`: `trace` | `debug` | `info` | `warn` | `error` (default: `info`)

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tracing::Level;

use crate::types::{DEFAULT_TICKS_PER_SECOND, GRAVITY_TICKS};

pub const ENV_SEED: &str = "MINI_TETRIS_SEED";
pub const ENV_FPS: &str = "MINI_TETRIS_FPS";
pub const ENV_GRAVITY_TICKS: &str = "MINI_TETRIS_GRAVITY_TICKS";
pub const ENV_LOG_PATH: &str = "MINI_TETRIS_LOG_PATH";
pub const ENV_LOG_LEVEL: &str = "MINI_TETRIS_LOG_LEVEL";

/// Game loop configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub seed: u32,
    /// Time budget of one tick
    pub frame_interval: Duration,
    /// Ticks between automatic [`MoveDown`](crate::types::Command::MoveDown)s
    pub gravity_ticks: u32,
    pub log_path: Option<String>,
    pub log_level: Level,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            frame_interval: Duration::from_secs_f64(1.0 / DEFAULT_TICKS_PER_SECOND),
            gravity_ticks: GRAVITY_TICKS,
            log_path: None,
            log_level: Level::INFO,
        }
    }
}

impl GameConfig {
    /// Create from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (the environment, a map in tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup(ENV_SEED)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let frame_interval = lookup(ENV_FPS)
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|fps| fps.is_finite() && *fps > 0.0)
            .and_then(|fps| Duration::try_from_secs_f64(1.0 / fps).ok())
            .unwrap_or(defaults.frame_interval);

        let gravity_ticks = lookup(ENV_GRAVITY_TICKS)
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|ticks| *ticks >= 1)
            .unwrap_or(defaults.gravity_ticks);

        let log_path = lookup(ENV_LOG_PATH)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let log_level = lookup(ENV_LOG_LEVEL)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.log_level);

        Self {
            seed,
            frame_interval,
            gravity_ticks,
            log_path,
            log_level,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
