//! Shared vocabulary of the workspace: grid constants, piece kinds, cells,
//! commands and flags.
//!
//! Plain data only, with no dependencies, so the core, the engine and both
//! terminal crates agree on one definition.
//!
//! # Grid Dimensions
//!
//! - **Rows**: 20 (indexed 0-19, row 0 at the top)
//! - **Columns**: 10 (indexed 0-9, column 0 at the left)
//! - **Spawn anchor**: row 3, column 3 for every piece
//!
//! # Timing
//!
//! The loop ticks `DEFAULT_TICKS_PER_SECOND` (60) times a second and applies
//! gravity every `GRAVITY_TICKS` (75) ticks, so an untouched piece falls one
//! row every 1.25 s.
//!
//! ```
//! use mini_tetris_types::{cell_glyph, PieceKind, GRID_COLS, GRID_ROWS};
//!
//! assert_eq!(cell_glyph(Some(PieceKind::T)), "TT");
//! assert_eq!(cell_glyph(None), "  ");
//! assert_eq!((GRID_ROWS, GRID_COLS), (20, 10));
//! ```

/// Grid height in cells (20 rows)
pub const GRID_ROWS: u8 = 20;

/// Grid width in cells (10 columns)
pub const GRID_COLS: u8 = 10;

/// Anchor (row, col) every new piece spawns at
pub const SPAWN_ANCHOR: (i8, i8) = (3, 3);

/// Number of ticks between automatic downward moves
pub const GRAVITY_TICKS: u32 = 75;

/// Default tick rate (frames per second)
pub const DEFAULT_TICKS_PER_SECOND: f64 = 60.0;

/// Glyph drawn for an empty cell (two terminal columns wide)
pub const EMPTY_GLYPH: &str = "  ";

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    Z,
    L,
    S,
    J,
    T,
}

impl PieceKind {
    /// Every kind, in spawn-table order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::Z,
        PieceKind::L,
        PieceKind::S,
        PieceKind::J,
        PieceKind::T,
    ];

    /// Lowercase name, used in log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::Z => "z",
            PieceKind::L => "l",
            PieceKind::S => "s",
            PieceKind::J => "j",
            PieceKind::T => "t",
        }
    }

    /// Two-character glyph used when drawing a cell of this kind
    ///
    /// ```
    /// use mini_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.glyph(), "II");
    /// assert_eq!(PieceKind::J.glyph(), "JJ");
    /// ```
    pub fn glyph(&self) -> &'static str {
        match self {
            PieceKind::I => "II",
            PieceKind::O => "OO",
            PieceKind::Z => "ZZ",
            PieceKind::L => "LL",
            PieceKind::S => "SS",
            PieceKind::J => "JJ",
            PieceKind::T => "TT",
        }
    }
}

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled with the specified piece kind
pub type Cell = Option<PieceKind>;

/// Glyph for any cell, empty or filled
pub fn cell_glyph(cell: Cell) -> &'static str {
    match cell {
        None => EMPTY_GLYPH,
        Some(kind) => kind.glyph(),
    }
}

/// Player commands produced by an input source
///
/// Each command maps to exactly one action handler in the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (locks it when blocked)
    MoveDown,
    /// Advance to the next rotation state
    RotateCw,
    /// Step back to the previous rotation state
    RotateCcw,
    /// End the game loop
    Stop,
}

impl Command {
    /// camelCase name, used in log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::MoveDown => "moveDown",
            Command::RotateCw => "rotateCw",
            Command::RotateCcw => "rotateCcw",
            Command::Stop => "stop",
        }
    }
}

/// Deferred work queued during a tick and handled at the start of the next one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    /// Spawn a fresh piece
    NewBlock,
}

impl Flag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Flag::NewBlock => "new_block",
        }
    }
}
