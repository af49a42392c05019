//! Exhaustive minimax search for the computer player.
//!
//! The computer always plays [`COMPUTER`] and maximizes; the human side
//! ([`HUMAN`]) minimizes. Every legal continuation is explored: no pruning,
//! no move ordering, no transposition table and no depth bound. A forced win
//! scores the same however many plies away it is, so the engine has no
//! preference for winning sooner.
//!
//! The search runs to completion once started. That is fine for a 3x3 grid
//! (at most 9! leaves from an empty board) but the recursion is not
//! interruptible, and a larger `SIZE` would need a different structure.

use crate::position::Position;
use crate::rules;
use crate::types::{Board, Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Minimax value of a position from the computer's point of view.
pub type Score = i32;

/// Score of a position the computer has won.
///
/// Larger in magnitude than any non-terminal value the search can produce.
pub const WIN_SCORE: Score = 1_000_000;

/// Score of a position the human has won.
pub const LOSS_SCORE: Score = -WIN_SCORE;

/// Score of a full board with no line.
pub const DRAW_SCORE: Score = 0;

/// The maximizing side.
pub const COMPUTER: Player = Player::Two;

/// The minimizing side.
pub const HUMAN: Player = Player::One;

/// A root candidate and its minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// Cell the computer would mark.
    pub position: Position,
    /// Value of the resulting position with the human to move.
    pub score: Score,
}

/// Everything one root search produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    best: Option<Position>,
    scores: Vec<ScoredMove>,
    nodes: u64,
}

impl SearchReport {
    /// Selected move: the first candidate, in row-major order, with the
    /// strictly greatest score. `None` only on a full board.
    pub fn best(&self) -> Option<Position> {
        self.best
    }

    /// Score of every empty cell, row-major.
    pub fn scores(&self) -> &[ScoredMove] {
        &self.scores
    }

    /// Positions visited below the root.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Score of a particular candidate, if it was one.
    pub fn score_of(&self, position: Position) -> Option<Score> {
        self.scores
            .iter()
            .find(|scored| scored.position == position)
            .map(|scored| scored.score)
    }
}

/// Searches a private copy of `board` and reports every root score.
///
/// The caller's board is never touched.
#[instrument(skip(board), fields(empty = board.empty_positions().count()))]
pub fn search(board: &Board) -> SearchReport {
    let mut scratch = *board;
    search_in_place(&mut scratch)
}

/// Picks the computer's move without mutating `board`.
pub fn compute_best_move(board: &Board) -> Option<Position> {
    search(board).best()
}

/// Root scores of every empty cell, row-major.
pub fn score_moves(board: &Board) -> Vec<ScoredMove> {
    search(board).scores
}

/// Picks the computer's move and commits it to `board`.
///
/// This couples search with mutation: on success exactly one new
/// [`COMPUTER`] mark is on the board. Use [`compute_best_move`] plus
/// [`Board::apply`] to keep the two steps apart. Returns `None`, leaving the
/// board alone, when no empty cell exists.
#[instrument(skip(board))]
pub fn best_move(board: &mut Board) -> Option<Position> {
    let before = *board;
    let report = search_in_place(board);
    debug_assert_eq!(*board, before, "speculative placements must be undone");

    let position = report.best()?;
    board.set(position, Cell::Occupied(COMPUTER));
    debug!(%position, "Computer committed move");
    Some(position)
}

/// Minimax value of `board` with `to_move` about to play.
///
/// Terminal positions score [`WIN_SCORE`], [`LOSS_SCORE`] or [`DRAW_SCORE`].
/// Otherwise every empty cell is tried for `to_move`, each probe undone
/// before the next, and the best child for that side is returned. The board
/// is identical on return.
pub fn evaluate(board: &mut Board, to_move: Player) -> Score {
    let mut nodes = 0;
    minimax(board, to_move, &mut nodes)
}

fn search_in_place(board: &mut Board) -> SearchReport {
    let mut nodes = 0;
    let mut scores = Vec::new();
    let mut best: Option<ScoredMove> = None;

    for position in Position::all() {
        if !board.is_empty(position) {
            continue;
        }

        board.set(position, Cell::Occupied(COMPUTER));
        let score = minimax(board, HUMAN, &mut nodes);
        board.set(position, Cell::Empty);

        let scored = ScoredMove { position, score };
        // Strict comparison keeps the earliest of equal scores.
        if best.is_none_or(|b| score > b.score) {
            best = Some(scored);
        }
        scores.push(scored);
    }

    debug!(
        best = ?best.map(|b| b.position),
        score = ?best.map(|b| b.score),
        candidates = scores.len(),
        nodes,
        "Search complete"
    );

    SearchReport {
        best: best.map(|b| b.position),
        scores,
        nodes,
    }
}

fn terminal_score(board: &Board) -> Option<Score> {
    if rules::check_win(board, COMPUTER) {
        Some(WIN_SCORE)
    } else if rules::check_win(board, HUMAN) {
        Some(LOSS_SCORE)
    } else if rules::is_full(board) {
        Some(DRAW_SCORE)
    } else {
        None
    }
}

fn minimax(board: &mut Board, to_move: Player, nodes: &mut u64) -> Score {
    *nodes += 1;
    if let Some(score) = terminal_score(board) {
        return score;
    }

    let maximizing = to_move == COMPUTER;
    let mut best = if maximizing { Score::MIN } else { Score::MAX };

    for position in Position::all() {
        if !board.is_empty(position) {
            continue;
        }

        board.set(position, Cell::Occupied(to_move));
        let score = minimax(board, to_move.opponent(), nodes);
        board.set(position, Cell::Empty);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_terminal_scores() {
        assert_eq!(evaluate(&mut board("XXX OO. ..."), HUMAN), WIN_SCORE);
        assert_eq!(evaluate(&mut board("OOO XX. X.."), COMPUTER), LOSS_SCORE);
        assert_eq!(evaluate(&mut board("OXO OXX XOO"), COMPUTER), DRAW_SCORE);
    }

    #[test]
    fn test_evaluate_restores_board() {
        let mut b = board("O.. .X. ...");
        let before = b;
        evaluate(&mut b, HUMAN);
        assert_eq!(b, before);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        assert_eq!(evaluate(&mut Board::new(), COMPUTER), DRAW_SCORE);
        assert_eq!(evaluate(&mut Board::new(), HUMAN), DRAW_SCORE);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut b = board("OXO OXX XOO");
        let before = b;
        assert_eq!(compute_best_move(&b), None);
        assert_eq!(best_move(&mut b), None);
        assert_eq!(b, before);
        assert!(search(&b).scores().is_empty());
    }

    #[test]
    fn test_takes_immediate_win() {
        // X to move with a line open on the bottom row.
        let b = board("OO. ... XX.");
        let report = search(&b);
        assert_eq!(report.score_of(pos(2, 2)), Some(WIN_SCORE));
        // Blocking at (0,2) also ends up winning, and comes first.
        assert_eq!(report.best(), Some(pos(0, 2)));
    }

    #[test]
    fn test_compute_does_not_mutate() {
        let b = board("O.. ... ...");
        let before = b;
        let _ = compute_best_move(&b);
        assert_eq!(b, before);
    }

    #[test]
    fn test_best_move_commits_one_mark() {
        let mut b = board("O.. ... ...");
        let before = b;
        let chosen = best_move(&mut b).unwrap();

        assert_eq!(b.get(chosen), Cell::Occupied(COMPUTER));
        for position in Position::all() {
            if position != chosen {
                assert_eq!(b.get(position), before.get(position));
            }
        }
    }

    #[test]
    fn test_always_returns_a_move_when_every_move_loses() {
        // Player One threatens both the top row and the left column.
        let b = board("OO. OX. ...");
        let report = search(&b);
        assert!(report.scores().iter().all(|s| s.score == LOSS_SCORE));
        assert_eq!(report.best(), Some(pos(0, 2)));
    }

    #[test]
    fn test_nodes_are_counted() {
        let report = search(&board("OXO XO. ..."));
        assert!(report.nodes() > 0);
        assert_eq!(report.scores().len(), 4);
    }
}
