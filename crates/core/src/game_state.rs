//! Game state module - the mutable aggregate every action works on
//!
//! Holds the grid, the active piece, the running flag and the pending flag
//! queue. Spawning is deferred through that queue: an action that locks a
//! piece only enqueues [`Flag::NewBlock`], and [`GameState::handle_flags`]
//! spawns the replacement at the start of the next tick.

use arrayvec::ArrayVec;
use tracing::{debug, warn};

use crate::actions::{self, Outcome};
use crate::collision::collides;
use crate::grid::Grid;
use crate::pieces::Piece;
use crate::rng::SimpleRng;
use crate::types::{Command, Flag, PieceKind};

/// Upper bound on queued flags; a flag is never queued twice, so this only
/// needs to cover the distinct [`Flag`] variants.
const PENDING_CAPACITY: usize = 4;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) grid: Grid,
    pub(crate) active: Option<Piece>,
    pub(crate) running: bool,
    pending: ArrayVec<Flag, PENDING_CAPACITY>,
    rng: SimpleRng,
}

impl GameState {
    /// Create a running game on an empty grid with the given RNG seed.
    ///
    /// No piece is active and no flag is pending yet.
    pub fn new(seed: u32) -> Self {
        Self::with_grid(Grid::new(), seed)
    }

    /// Create a running game on a pre-filled grid
    pub fn with_grid(grid: Grid, seed: u32) -> Self {
        Self {
            grid,
            active: None,
            running: true,
            pending: ArrayVec::new(),
            rng: SimpleRng::new(seed),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct grid access, for setting up terrain
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn running(&self) -> bool {
        self.running
    }

    /// Flags waiting for the next [`handle_flags`](Self::handle_flags), oldest first
    pub fn pending_flags(&self) -> &[Flag] {
        &self.pending
    }

    /// Queue a flag unless it is already pending.
    ///
    /// Returns true if the flag was added.
    pub fn push_flag(&mut self, flag: Flag) -> bool {
        if self.pending.contains(&flag) {
            return false;
        }
        if self.pending.try_push(flag).is_err() {
            warn!(flag = flag.as_str(), "flag queue full, dropping flag");
            return false;
        }
        true
    }

    /// Drain the pending queue in insertion order, running each handler.
    ///
    /// Flags queued by a handler wait for the next call.
    pub fn handle_flags(&mut self) {
        let flags = std::mem::take(&mut self.pending);
        for flag in flags {
            match flag {
                Flag::NewBlock => {
                    let kind = self.rng.choose_kind();
                    self.spawn(kind);
                }
            }
        }
    }

    /// Install a fresh piece of `kind` at the spawn anchor and paint it
    pub fn spawn(&mut self, kind: PieceKind) -> Piece {
        let piece = Piece::new(kind);
        self.place(piece);
        debug!(kind = kind.as_str(), anchor = ?piece.anchor, "piece spawned");
        piece
    }

    /// Make `piece` the active piece and paint its footprint.
    ///
    /// Not collision-checked: a piece placed over terrain overwrites it.
    pub fn place(&mut self, piece: Piece) {
        if collides(&piece, &self.grid) {
            warn!(
                kind = piece.kind().as_str(),
                anchor = ?piece.anchor,
                "piece placed over occupied cells"
            );
        }
        self.grid.paint(&piece.occupied_cells(), Some(piece.kind()));
        self.active = Some(piece);
    }

    /// Apply one player or gravity command
    pub fn apply(&mut self, command: Command) -> Outcome {
        actions::apply(self, command)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);
        assert!(state.running());
        assert!(state.active().is_none());
        assert!(state.pending_flags().is_empty());
        assert!(state.grid().is_empty());
    }

    #[test]
    fn test_push_flag_dedupes() {
        let mut state = GameState::new(1);
        assert!(state.push_flag(Flag::NewBlock));
        assert!(!state.push_flag(Flag::NewBlock));
        assert_eq!(state.pending_flags(), &[Flag::NewBlock]);
    }

    #[test]
    fn test_handle_flags_spawns_and_drains() {
        let mut state = GameState::new(12345);
        state.push_flag(Flag::NewBlock);
        state.handle_flags();

        assert!(state.pending_flags().is_empty());
        let piece = state.active().expect("spawned");
        assert_eq!(piece.anchor, (3, 3));
        assert_eq!(piece.state_index(), 0);
        assert_eq!(state.grid().filled_count(), 4);
    }

    #[test]
    fn test_handle_flags_empty_is_noop() {
        let mut state = GameState::new(1);
        state.spawn(PieceKind::T);
        let before = state.grid().clone();
        let active = state.active();

        state.handle_flags();

        assert_eq!(state.grid(), &before);
        assert_eq!(state.active(), active);
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let mut a = GameState::new(99);
        let mut b = GameState::new(99);
        for _ in 0..20 {
            a.push_flag(Flag::NewBlock);
            b.push_flag(Flag::NewBlock);
            a.handle_flags();
            b.handle_flags();
            assert_eq!(a.active().map(|p| p.kind()), b.active().map(|p| p.kind()));
        }
    }

    #[test]
    fn test_spawn_overwrites_terrain() {
        let mut state = GameState::new(1);
        state.grid_mut().set(4, 3, Some(PieceKind::Z));

        state.spawn(PieceKind::I);

        assert_eq!(state.grid().get(4, 3), Some(Some(PieceKind::I)));
        assert_eq!(state.grid().filled_count(), 4);
    }
}
