//! Draw detection logic for tic-tac-toe.

use super::win::check_win;
use crate::types::{Board, Player};

/// Checks if the board is full (no empty cell remains).
pub fn is_full(board: &Board) -> bool {
    board.empty_positions().next().is_none()
}

/// A full board on which neither player has a line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && !check_win(board, Player::One) && !check_win(board, Player::Two)
}
