//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Cell, Player, SIZE};

/// Number of winning lines: every row, every column, both diagonals.
pub const LINE_COUNT: usize = 2 * SIZE + 2;

static LINES: [[Position; SIZE]; LINE_COUNT] = build_lines();

const fn build_lines() -> [[Position; SIZE]; LINE_COUNT] {
    let mut lines = [[Position::at(0, 0); SIZE]; LINE_COUNT];
    let mut i = 0;
    while i < SIZE {
        let mut j = 0;
        while j < SIZE {
            // Rows first, then columns.
            lines[i][j] = Position::at(i, j);
            lines[SIZE + i][j] = Position::at(j, i);
            j += 1;
        }
        lines[2 * SIZE][i] = Position::at(i, i);
        lines[2 * SIZE + 1][i] = Position::at(i, SIZE - 1 - i);
        i += 1;
    }
    lines
}

/// All winning lines: rows, columns, main diagonal, anti-diagonal.
pub fn lines() -> &'static [[Position; SIZE]; LINE_COUNT] {
    &LINES
}

/// Checks whether `player` owns every cell of some line.
///
/// Answers only for the given player; it does not reject boards on which
/// both players have a line.
pub fn check_win(board: &Board, player: Player) -> bool {
    let mark = Cell::Occupied(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == mark))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_eight_distinct_lines() {
        assert_eq!(lines().len(), 8);
        for (i, a) in lines().iter().enumerate() {
            for b in &lines()[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        for player in Player::iter() {
            assert!(!check_win(&board, player));
        }
    }

    #[test]
    fn test_every_line_wins_for_its_owner_only() {
        for player in Player::iter() {
            for line in lines() {
                let mut board = Board::new();
                for &pos in line {
                    board.apply(pos, player).unwrap();
                }
                assert!(check_win(&board, player), "line {:?}", line);
                assert!(!check_win(&board, player.opponent()));
            }
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board: Board = "OOX ... ...".parse().unwrap();
        assert!(!check_win(&board, Player::One));
        assert!(!check_win(&board, Player::Two));
    }

    #[test]
    fn test_win_iff_some_line_is_uniform() {
        // Walk every board reachable by filling cells one at a time with
        // alternating marks and compare against a direct scan.
        fn walk(board: &mut Board, to_move: Player) {
            for player in Player::iter() {
                let expected = lines()
                    .iter()
                    .any(|line| line.iter().all(|&p| board.get(p) == Cell::Occupied(player)));
                assert_eq!(check_win(board, player), expected);
            }
            if board.outcome().is_over() {
                return;
            }
            let empties: Vec<_> = board.empty_positions().collect();
            for pos in empties {
                board.apply(pos, to_move).unwrap();
                walk(board, to_move.opponent());
                board.set(pos, Cell::Empty);
            }
        }

        walk(&mut Board::new(), Player::One);
    }

    #[test]
    fn test_anti_diagonal() {
        let board: Board = "..X .X. X..".parse().unwrap();
        assert!(check_win(&board, Player::Two));
    }
}
