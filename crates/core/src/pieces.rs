//! Pieces module - tetromino rotation tables and the active piece
//!
//! Each kind owns a fixed table of rotation states. Rotating a piece moves an
//! index through that table; the table itself is `'static` and never changes.
//! There are no wall kicks: a rotation either fits at the current anchor or it
//! does not happen.

use crate::types::{PieceKind, SPAWN_ANCHOR};

/// Offset of a single mino relative to the piece anchor, as (row, col)
pub type MinoOffset = (i8, i8);

/// One orientation of a piece - 4 mino offsets from the anchor
pub type RotationState = [MinoOffset; 4];

const I_STATES: [RotationState; 4] = [
    [(1, 0), (1, 1), (1, 2), (1, 3)],
    [(0, 2), (1, 2), (2, 2), (3, 2)],
    [(2, 0), (2, 1), (2, 2), (2, 3)],
    [(0, 1), (1, 1), (2, 1), (3, 1)],
];

/// O has a single orientation; rotating it is a no-op
const O_STATES: [RotationState; 1] = [[(0, 0), (0, 1), (1, 0), (1, 1)]];

const Z_STATES: [RotationState; 4] = [
    [(0, 0), (0, 1), (1, 1), (1, 2)],
    [(0, 2), (1, 1), (1, 2), (2, 1)],
    [(1, 0), (1, 1), (2, 1), (2, 2)],
    [(0, 1), (1, 0), (1, 1), (2, 0)],
];

const L_STATES: [RotationState; 4] = [
    [(0, 2), (1, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (2, 2)],
    [(1, 0), (1, 1), (1, 2), (2, 0)],
    [(0, 0), (0, 1), (1, 1), (2, 1)],
];

const S_STATES: [RotationState; 4] = [
    [(0, 1), (0, 2), (1, 0), (1, 1)],
    [(0, 1), (1, 1), (1, 2), (2, 2)],
    [(1, 1), (1, 2), (2, 0), (2, 1)],
    [(0, 0), (1, 0), (1, 1), (2, 1)],
];

const J_STATES: [RotationState; 4] = [
    [(0, 0), (1, 0), (1, 1), (1, 2)],
    [(0, 1), (0, 2), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 2)],
    [(0, 1), (1, 1), (2, 0), (2, 1)],
];

const T_STATES: [RotationState; 4] = [
    [(0, 1), (1, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (1, 2), (2, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 1)],
    [(0, 1), (1, 0), (1, 1), (2, 1)],
];

/// Rotation table for a piece kind, state 0 first
pub fn rotation_states(kind: PieceKind) -> &'static [RotationState] {
    match kind {
        PieceKind::I => &I_STATES,
        PieceKind::O => &O_STATES,
        PieceKind::Z => &Z_STATES,
        PieceKind::L => &L_STATES,
        PieceKind::S => &S_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::T => &T_STATES,
    }
}

/// Direction to step through a rotation table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spin {
    Cw,
    Ccw,
}

/// The falling piece: kind, anchor and current rotation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    states: &'static [RotationState],
    pub anchor: (i8, i8),
    state: usize,
}

impl Piece {
    /// Create a piece at the spawn anchor in state 0
    pub fn new(kind: PieceKind) -> Self {
        Self::at(kind, SPAWN_ANCHOR)
    }

    /// Create a piece at an arbitrary anchor in state 0
    pub fn at(kind: PieceKind, anchor: (i8, i8)) -> Self {
        Self {
            kind,
            states: rotation_states(kind),
            anchor,
            state: 0,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Index of the current rotation state
    pub fn state_index(&self) -> usize {
        self.state
    }

    /// Number of rotation states (1 or 4)
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Offsets of the current rotation state
    pub fn offsets(&self) -> &'static RotationState {
        &self.states[self.state]
    }

    /// Absolute (row, col) of each mino
    pub fn occupied_cells(&self) -> [(i8, i8); 4] {
        let (row, col) = self.anchor;
        self.offsets().map(|(dr, dc)| (row + dr, col + dc))
    }

    /// Shift the anchor by (drow, dcol)
    pub fn translate(&mut self, drow: i8, dcol: i8) {
        self.anchor.0 += drow;
        self.anchor.1 += dcol;
    }

    /// Step the state index one place around the table
    pub fn spin(&mut self, spin: Spin) {
        let len = self.states.len();
        self.state = match spin {
            Spin::Cw => (self.state + 1) % len,
            Spin::Ccw => (self.state + len - 1) % len,
        };
    }
}
