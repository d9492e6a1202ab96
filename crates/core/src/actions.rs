//! Action handlers - one per [`Command`], dispatched by an exhaustive match.
//!
//! Every movement follows the same transaction: erase the footprint, apply
//! the transform, ask the collision oracle, then either keep the transform or
//! undo it, and repaint. The grid is never left half-moved.
//!
//! Actions are total. A blocked move is an ordinary [`Outcome`], not an error.

use tracing::debug;

use crate::collision::collides;
use crate::game_state::GameState;
use crate::pieces::{Piece, Spin};
use crate::types::{Command, Flag};

/// What an action did to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The transform fit and was committed
    Moved,
    /// The transform collided and was rolled back
    Blocked,
    /// A downward move was blocked; the piece is now terrain and a
    /// [`Flag::NewBlock`] is pending
    Locked,
    /// The running flag was cleared
    Stopped,
    /// Nothing to act on (no active piece, or a single-state rotation)
    Idle,
}

/// Apply one command to the game state
pub fn apply(state: &mut GameState, command: Command) -> Outcome {
    match command {
        Command::MoveLeft => shift(state, -1),
        Command::MoveRight => shift(state, 1),
        Command::MoveDown => move_down(state),
        Command::RotateCw => rotate(state, Spin::Cw),
        Command::RotateCcw => rotate(state, Spin::Ccw),
        Command::Stop => stop(state),
    }
}

fn shift(state: &mut GameState, dcol: i8) -> Outcome {
    transact(state, |p| p.translate(0, dcol), |p| p.translate(0, -dcol))
}

fn move_down(state: &mut GameState) -> Outcome {
    match transact(state, |p| p.translate(1, 0), |p| p.translate(-1, 0)) {
        Outcome::Blocked => {
            // Locking is detected here, not scheduled: the footprint was
            // repainted at its old position and stays as terrain.
            if let Some(piece) = state.active.take() {
                debug!(kind = ?piece.kind(), anchor = ?piece.anchor, "piece locked");
            }
            state.push_flag(Flag::NewBlock);
            Outcome::Locked
        }
        other => other,
    }
}

fn rotate(state: &mut GameState, spin: Spin) -> Outcome {
    let reverse = match spin {
        Spin::Cw => Spin::Ccw,
        Spin::Ccw => Spin::Cw,
    };
    let rotatable = state
        .active
        .as_ref()
        .is_some_and(|piece| piece.state_count() > 1);
    if !rotatable {
        return Outcome::Idle;
    }
    transact(state, |p| p.spin(spin), |p| p.spin(reverse))
}

fn stop(state: &mut GameState) -> Outcome {
    state.running = false;
    Outcome::Stopped
}

/// Erase, transform, test, then commit or roll back, and repaint.
fn transact(
    state: &mut GameState,
    forward: impl FnOnce(&mut Piece),
    back: impl FnOnce(&mut Piece),
) -> Outcome {
    let Some(piece) = state.active.as_mut() else {
        return Outcome::Idle;
    };
    let kind = piece.kind();

    state.grid.paint(&piece.occupied_cells(), None);
    forward(piece);
    let blocked = collides(piece, &state.grid);
    if blocked {
        back(piece);
    }
    state.grid.paint(&piece.occupied_cells(), Some(kind));

    if blocked {
        Outcome::Blocked
    } else {
        Outcome::Moved
    }
}
