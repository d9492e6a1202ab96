//! Fixed-rate game loop.
//!
//! One tick runs, in order:
//!
//! 1. handle pending flags (spawns the next piece after a lock)
//! 2. read at most one command from [`Input`] and apply it
//! 3. advance the gravity counter; at the threshold apply `MoveDown`
//! 4. hand the grid to the [`Renderer`]
//!
//! [`GameLoop::run`] repeats ticks at the configured frame interval until a
//! `Stop` command clears the running flag. The flag is only checked between
//! ticks, so a tick that has started always finishes.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{error, info, trace};

use crate::config::GameConfig;
use crate::core::GameState;
use crate::io::{Input, Renderer};
use crate::types::{Command, Flag};

pub struct GameLoop {
    state: GameState,
    frame_interval: Duration,
    gravity_ticks: u32,
    gravity_counter: u32,
    ticks: u64,
}

impl GameLoop {
    /// Create a loop over a fresh game seeded from `config`
    pub fn new(config: &GameConfig) -> Self {
        Self::with_state(GameState::new(config.seed), config)
    }

    /// Create a loop over an existing state.
    ///
    /// Queues [`Flag::NewBlock`] so the first tick spawns a piece.
    pub fn with_state(mut state: GameState, config: &GameConfig) -> Self {
        state.push_flag(Flag::NewBlock);
        Self {
            state,
            frame_interval: config.frame_interval,
            gravity_ticks: config.gravity_ticks.max(1),
            gravity_counter: 0,
            ticks: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Ticks executed so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn gravity_counter(&self) -> u32 {
        self.gravity_counter
    }

    /// Run one tick.
    ///
    /// Collaborator errors abort the tick and are returned as is.
    pub fn tick<I, R>(&mut self, input: &mut I, renderer: &mut R) -> Result<()>
    where
        I: Input + ?Sized,
        R: Renderer + ?Sized,
    {
        self.state.handle_flags();

        if let Some(command) = input.read()? {
            let outcome = self.state.apply(command);
            trace!(command = command.as_str(), ?outcome, "input applied");
        }

        self.apply_gravity();

        renderer.draw(self.state.grid())?;
        self.ticks += 1;
        Ok(())
    }

    /// Run ticks until the game is stopped.
    ///
    /// The renderer is started first and stopped on every exit path: normal
    /// return, an error from a collaborator, or a panic unwinding through here.
    pub fn run<I, R>(&mut self, input: &mut I, renderer: &mut R) -> Result<()>
    where
        I: Input + ?Sized,
        R: Renderer + ?Sized,
    {
        let mut session = RenderSession::start(renderer)?;
        info!(
            frame_interval = ?self.frame_interval,
            gravity_ticks = self.gravity_ticks,
            "game loop started"
        );

        session.renderer.draw(self.state.grid())?;

        let mut deadline = Instant::now();
        while self.state.running() {
            self.tick(input, &mut *session.renderer)?;
            if self.state.running() {
                deadline = self.pace(deadline);
            }
        }

        info!(ticks = self.ticks, "game loop stopped");
        session.finish()
    }

    fn apply_gravity(&mut self) {
        self.gravity_counter += 1;
        if self.gravity_counter >= self.gravity_ticks {
            self.gravity_counter = 0;
            let outcome = self.state.apply(Command::MoveDown);
            trace!(?outcome, "gravity applied");
        }
    }

    /// Sleep until the next tick deadline and return it.
    ///
    /// A loop that has fallen behind resynchronises to now instead of
    /// running a burst of catch-up ticks.
    fn pace(&self, deadline: Instant) -> Instant {
        let next = deadline + self.frame_interval;
        let now = Instant::now();
        match next.checked_duration_since(now) {
            Some(wait) => {
                thread::sleep(wait);
                next
            }
            None => now,
        }
    }
}

/// Scoped hold on a started renderer; dropping it stops the renderer.
struct RenderSession<'a, R: Renderer + ?Sized> {
    renderer: &'a mut R,
    live: bool,
}

impl<'a, R: Renderer + ?Sized> RenderSession<'a, R> {
    fn start(renderer: &'a mut R) -> Result<Self> {
        renderer.start()?;
        Ok(Self {
            renderer,
            live: true,
        })
    }

    /// Stop the renderer and report its result.
    fn finish(mut self) -> Result<()> {
        self.live = false;
        self.renderer.stop()
    }
}

impl<R: Renderer + ?Sized> Drop for RenderSession<'_, R> {
    fn drop(&mut self) {
        if !self.live {
            return;
        }
        if let Err(err) = self.renderer.stop() {
            error!(error = %err, "failed to release renderer");
        }
    }
}
