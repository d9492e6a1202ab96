//! Grid tests

use mini_tetris::core::Grid;
use mini_tetris::types::{PieceKind, GRID_COLS, GRID_ROWS};

#[test]
fn new_grid_is_20_by_10_and_empty() {
    let grid = Grid::new();
    assert_eq!(grid.rows(), GRID_ROWS);
    assert_eq!(grid.cols(), GRID_COLS);
    assert!(grid.is_empty());
    assert_eq!(grid.iter_rows().count(), 20);
    assert!(grid.iter_rows().all(|row| row.len() == 10));
}

#[test]
fn off_grid_access_is_rejected() {
    let mut grid = Grid::new();
    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(20, 0), None);
    assert_eq!(grid.get(0, 10), None);
    assert!(!grid.set(0, -1, Some(PieceKind::T)));
    assert!(!grid.set(20, 9, Some(PieceKind::T)));
    assert!(grid.is_empty());
}

#[test]
fn paint_fills_and_erases() {
    let mut grid = Grid::new();
    let cells = [(4, 3), (4, 4), (4, 5), (4, 6)];

    grid.paint(&cells, Some(PieceKind::I));
    assert_eq!(grid.filled_count(), 4);
    for (row, col) in cells {
        assert_eq!(grid.get(row, col), Some(Some(PieceKind::I)));
    }

    grid.paint(&cells, None);
    assert!(grid.is_empty());
}

#[test]
fn rows_are_in_top_to_bottom_order() {
    let mut grid = Grid::new();
    grid.set(19, 0, Some(PieceKind::L));

    let last = grid.iter_rows().last().unwrap();
    assert_eq!(last[0], Some(PieceKind::L));
    assert!(grid.iter_rows().next().unwrap().iter().all(Option::is_none));
}
