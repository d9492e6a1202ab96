//! Grid module - the playfield cell matrix
//!
//! The grid is 20 rows by 10 columns; each cell is empty or holds a piece kind.
//! Storage is a flat row-major array, cheap to clone and
//! compare, and never allocated.
//! Coordinates are (row, col): row 0 is the top, col 0 is the left.

use std::fmt;

use crate::types::{cell_glyph, Cell, GRID_COLS, GRID_ROWS};

/// Total number of cells on the grid
const GRID_SIZE: usize = (GRID_ROWS as usize) * (GRID_COLS as usize);

/// The playfield - 20 rows x 10 columns using flat array storage
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of cells, row-major order (row * COLS + col)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= GRID_ROWS as i8 || col < 0 || col >= GRID_COLS as i8 {
            return None;
        }
        Some((row as usize) * (GRID_COLS as usize) + (col as usize))
    }

    pub fn rows(&self) -> u8 {
        GRID_ROWS
    }

    pub fn cols(&self) -> u8 {
        GRID_COLS
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is on the grid and filled
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Write `cell` into every listed position.
    ///
    /// Positions off the grid are skipped.
    pub fn paint(&mut self, positions: &[(i8, i8)], cell: Cell) {
        for &(row, col) in positions {
            self.set(row, col, cell);
        }
    }

    /// True when no cell is filled
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Iterate rows top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(GRID_COLS as usize)
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the grid with the same two-character glyphs the terminal uses,
/// one line per row.
impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for row in self.iter_rows() {
            f.write_str("|")?;
            for &cell in row {
                f.write_str(cell_glyph(cell))?;
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_grid_index_calculation() {
        assert_eq!(Grid::index(0, 0), Some(0));
        assert_eq!(Grid::index(0, 9), Some(9));
        assert_eq!(Grid::index(1, 0), Some(10));
        assert_eq!(Grid::index(19, 9), Some(199));
        assert_eq!(Grid::index(-1, 0), None);
        assert_eq!(Grid::index(0, 10), None);
        assert_eq!(Grid::index(20, 0), None);
    }

    #[test]
    fn test_grid_flat_array() {
        let mut grid = Grid::new();

        grid.set(0, 0, Some(PieceKind::I));
        grid.set(10, 5, Some(PieceKind::T));

        assert_eq!(grid.get(0, 0), Some(Some(PieceKind::I)));
        assert_eq!(grid.get(10, 5), Some(Some(PieceKind::T)));

        assert_eq!(grid.cells[0], Some(PieceKind::I));
        assert_eq!(grid.cells[10 * 10 + 5], Some(PieceKind::T));
    }

    #[test]
    fn test_paint_skips_off_grid_positions() {
        let mut grid = Grid::new();
        grid.paint(&[(-1, 0), (0, 0), (0, 10), (20, 3)], Some(PieceKind::O));

        assert_eq!(grid.filled_count(), 1);
        assert!(grid.is_occupied(0, 0));
    }

    #[test]
    fn test_iter_rows_shape() {
        let grid = Grid::new();
        let rows: Vec<&[Cell]> = grid.iter_rows().collect();
        assert_eq!(rows.len(), GRID_ROWS as usize);
        assert!(rows.iter().all(|r| r.len() == GRID_COLS as usize));
    }

    #[test]
    fn test_debug_uses_glyphs() {
        let mut grid = Grid::new();
        grid.set(0, 1, Some(PieceKind::L));
        let text = format!("{:?}", grid);
        let first = text.lines().nth(1).unwrap();
        assert_eq!(first, format!("|  LL{}|", " ".repeat(16)));
    }
}
