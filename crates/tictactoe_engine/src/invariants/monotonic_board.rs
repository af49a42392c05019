//! Monotonic board invariant: marks are never overwritten.

use super::Invariant;
use crate::typestate::GameInProgress;
use crate::types::{Board, Cell};

/// Invariant: replaying the history onto an empty board never hits an
/// occupied cell and reproduces the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameInProgress> for MonotonicBoardInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            if reconstructed.get(mov.position) != Cell::Empty {
                return false;
            }
            reconstructed.set(mov.position, Cell::Occupied(mov.player));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
