//! File logging for the binary.
//!
//! The terminal renderer owns stdout, so log lines can only go to a file.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

use crate::engine::GameConfig;

/// Install the global subscriber when `config.log_path` is set.
///
/// Returns false (and installs nothing) when logging is disabled.
pub fn init(config: &GameConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {path}"))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file)),
        )
        .with(LevelFilter::from_level(config.log_level))
        .try_init()
        .context("failed to install log subscriber")?;

    Ok(true)
}
