//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here stores results: the outcome
//! is recomputed from the cells on every call.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINE_COUNT, check_win, lines};

use crate::types::{Board, GameOutcome, Player};

/// Derives the outcome of a board.
///
/// Player Two is checked first, so a corrupt board showing two winners
/// reports Player Two.
pub fn outcome(board: &Board) -> GameOutcome {
    if check_win(board, Player::Two) {
        GameOutcome::PlayerTwoWins
    } else if check_win(board, Player::One) {
        GameOutcome::PlayerOneWins
    } else if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
