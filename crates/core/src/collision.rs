//! Collision oracle - the only geometric legality check in the engine.
//!
//! Translation, rotation and locking all ask this one predicate.

use crate::grid::Grid;
use crate::pieces::Piece;
use crate::types::{GRID_COLS, GRID_ROWS};

/// True if any mino of `piece` leaves the grid sideways, falls below the
/// floor, or lands on a filled cell.
///
/// Rows above the top edge do not collide.
pub fn collides(piece: &Piece, grid: &Grid) -> bool {
    piece
        .occupied_cells()
        .iter()
        .any(|&(row, col)| cell_blocked(grid, row, col))
}

/// Blocked test for a single absolute position
pub fn cell_blocked(grid: &Grid, row: i8, col: i8) -> bool {
    if col < 0 || col >= GRID_COLS as i8 || row >= GRID_ROWS as i8 {
        return true;
    }
    if row < 0 {
        return false;
    }
    grid.is_occupied(row, col)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_spawn_on_empty_grid_is_free() {
        let grid = Grid::new();
        for kind in PieceKind::ALL {
            assert!(!collides(&Piece::new(kind), &grid), "{:?}", kind);
        }
    }

    #[test]
    fn test_walls_and_floor() {
        let grid = Grid::new();

        // I state 0 spans columns anchor..anchor+3 on row anchor+1.
        assert!(collides(&Piece::at(PieceKind::I, (0, -1)), &grid));
        assert!(!collides(&Piece::at(PieceKind::I, (0, 0)), &grid));
        assert!(!collides(&Piece::at(PieceKind::I, (0, 6)), &grid));
        assert!(collides(&Piece::at(PieceKind::I, (0, 7)), &grid));

        assert!(!collides(&Piece::at(PieceKind::I, (18, 0)), &grid));
        assert!(collides(&Piece::at(PieceKind::I, (19, 0)), &grid));
    }

    #[test]
    fn test_ceiling_is_open() {
        let grid = Grid::new();
        // O minos at rows -2 and -1: above the grid, not a collision.
        assert!(!collides(&Piece::at(PieceKind::O, (-2, 4)), &grid));
    }

    #[test]
    fn test_overlap_with_terrain() {
        let mut grid = Grid::new();
        grid.set(4, 6, Some(PieceKind::T));
        assert!(collides(&Piece::new(PieceKind::I), &grid));

        grid.set(4, 6, None);
        grid.set(5, 6, Some(PieceKind::T));
        assert!(!collides(&Piece::new(PieceKind::I), &grid));
    }
}
