//! Error types for board operations and game moves.
//!
//! Every error here is a contract violation by the caller. None of them is
//! retried; they surface immediately.

use crate::position::Position;
use crate::types::Player;
use derive_more::{Display, Error};

/// Error raised by board-level operations.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Row or column lies outside the grid.
    #[display("Coordinate ({row}, {col}) is off the board")]
    InvalidCoordinate {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// A mark was placed on a cell that already holds one.
    #[display("Cell ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Row of the occupied cell.
        row: usize,
        /// Column of the occupied cell.
        col: usize,
    },

    /// Board text could not be parsed.
    #[display("Invalid board notation: {message}")]
    InvalidNotation {
        /// What was wrong with the text.
        message: String,
    },
}

/// Error that can occur when validating or applying a move in a game.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The cell at the position is already occupied.
    #[display("Cell {position} is already occupied")]
    CellOccupied {
        /// Target of the rejected move.
        position: Position,
    },

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It is not this player's turn.
    #[display("It is not {player}'s turn")]
    WrongPlayer {
        /// The player who tried to move.
        player: Player,
    },

    /// The computer was asked to move on a full board.
    #[display("No legal move remains")]
    NoLegalMove,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {message}")]
    InvariantViolation {
        /// Which invariants failed.
        message: String,
    },
}
