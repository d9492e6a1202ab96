//! Property tests for the collision oracle and the action transaction.
//!
//! Invariants covered:
//! - `collides` is true iff some mino is left of col 0, right of col 9,
//!   below row 19, or on a filled on-grid cell. Rows above the grid are free.
//! - A blocked action leaves the grid exactly as it was.
//! - A committed action clears exactly the old footprint and paints exactly
//!   the new one.
//! - A blocked `MoveDown` locks the piece and queues exactly one spawn.

use proptest::prelude::*;

use mini_tetris::core::{collides, GameState, Grid, Outcome, Piece, Spin};
use mini_tetris::types::{Command, Flag, PieceKind};

fn kind_strategy() -> impl Strategy<Value = PieceKind> {
    (0..PieceKind::ALL.len()).prop_map(|i| PieceKind::ALL[i])
}

fn piece_strategy() -> impl Strategy<Value = Piece> {
    (kind_strategy(), 0usize..4, -4i8..22, -4i8..12).prop_map(|(kind, turns, row, col)| {
        let mut piece = Piece::at(kind, (row, col));
        for _ in 0..turns {
            piece.spin(Spin::Cw);
        }
        piece
    })
}

fn terrain_strategy() -> impl Strategy<Value = Grid> {
    prop::collection::vec((0i8..20, 0i8..10, kind_strategy()), 0..60).prop_map(|cells| {
        let mut grid = Grid::new();
        for (row, col, kind) in cells {
            grid.set(row, col, Some(kind));
        }
        grid
    })
}

fn command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        Just(Command::MoveLeft),
        Just(Command::MoveRight),
        Just(Command::MoveDown),
        Just(Command::RotateCw),
        Just(Command::RotateCcw),
    ]
}

fn expected_collision(piece: &Piece, grid: &Grid) -> bool {
    piece.occupied_cells().iter().any(|&(row, col)| {
        col < 0 || col > 9 || row > 19 || (row >= 0 && grid.get(row, col) != Some(None))
    })
}

proptest! {
    #[test]
    fn collides_matches_the_boundary_rule(piece in piece_strategy(), grid in terrain_strategy()) {
        prop_assert_eq!(collides(&piece, &grid), expected_collision(&piece, &grid));
    }

    #[test]
    fn actions_commit_or_roll_back_completely(
        piece in piece_strategy(),
        terrain in terrain_strategy(),
        command in command_strategy(),
    ) {
        prop_assume!(!collides(&piece, &terrain));

        let mut state = GameState::with_grid(terrain, 1);
        state.place(piece);
        let before = state.grid().clone();

        let outcome = state.apply(command);
        match outcome {
            Outcome::Blocked | Outcome::Idle => {
                prop_assert_eq!(state.grid(), &before);
                prop_assert_eq!(state.active(), Some(piece));
                prop_assert!(state.pending_flags().is_empty());
            }
            Outcome::Locked => {
                prop_assert_eq!(command, Command::MoveDown);
                prop_assert_eq!(state.grid(), &before);
                prop_assert!(state.active().is_none());
                prop_assert_eq!(state.pending_flags(), &[Flag::NewBlock][..]);
            }
            Outcome::Moved => {
                let moved = state.active().unwrap();
                prop_assert_ne!(moved, piece);

                let mut expected = before.clone();
                expected.paint(&piece.occupied_cells(), None);
                expected.paint(&moved.occupied_cells(), Some(piece.kind()));
                prop_assert_eq!(state.grid(), &expected);
                prop_assert!(state.pending_flags().is_empty());
            }
            Outcome::Stopped => prop_assert!(false, "movement command stopped the game"),
        }
    }
}
