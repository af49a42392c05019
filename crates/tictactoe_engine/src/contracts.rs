//! Contract-based validation for moves.
//!
//! Preconditions are checked on every move. Postconditions compare the game
//! before and after a move and run the invariant set; they are checked in
//! debug builds only.

use crate::action::Move;
use crate::error::MoveError;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::typestate::GameInProgress;
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects moves onto an occupied cell.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if game.board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied {
                position: mov.position,
            })
        }
    }
}

/// Precondition: it must be the moving player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects moves by the player who is not to move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if mov.player == game.to_move() {
            Ok(())
        } else {
            Err(MoveError::WrongPlayer { player: mov.player })
        }
    }
}

/// Composite precondition: empty target, right player.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        CellIsEmpty::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        Ok(())
    }
}

/// Contract for a move that leaves the game in progress.
///
/// Postconditions: the board gained exactly one mark, the history grew by
/// exactly that move, and every game invariant still holds.
pub struct MoveContract;

impl Contract<GameInProgress, Move> for MoveContract {
    fn pre(game: &GameInProgress, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameInProgress, after: &GameInProgress) -> Result<(), MoveError> {
        let changed: Vec<_> = before
            .board()
            .cells()
            .zip(after.board().cells())
            .filter(|(b, a)| b != a)
            .map(|(_, (pos, _))| pos)
            .collect();

        let appended = after.history().len() == before.history().len() + 1
            && after.history().starts_with(before.history());

        let recorded = after.history().last().map(|m| m.position);
        if changed.len() != 1 || !appended || recorded != changed.first().copied() {
            warn!(
                changed = changed.len(),
                history_before = before.history().len(),
                history_after = after.history().len(),
                "Move postcondition failed"
            );
            return Err(MoveError::InvariantViolation {
                message: "Postcondition failed: move must add exactly one recorded mark"
                    .to_string(),
            });
        }

        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation {
                message: format!("Postcondition failed: {}", descriptions),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typestate::{GameResult, GameSetup};
    use crate::{Cell, Player, Position};

    fn center() -> Position {
        Position::new(1, 1).unwrap()
    }

    #[test]
    fn test_precondition_empty_cell() {
        let game = GameSetup::new().start(Player::One);
        let action = Move::new(Player::One, center());
        assert!(MoveContract::pre(&game, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let game = GameSetup::new().start(Player::One);
        let Ok(GameResult::InProgress(game)) = game.make_move(Move::new(Player::One, center()))
        else {
            panic!("Expected in-progress game");
        };

        let action = Move::new(Player::Two, center());
        assert_eq!(
            MoveContract::pre(&game, &action),
            Err(MoveError::CellOccupied { position: center() })
        );
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let game = GameSetup::new().start(Player::One);
        let action = Move::new(Player::Two, center());
        assert_eq!(
            MoveContract::pre(&game, &action),
            Err(MoveError::WrongPlayer { player: Player::Two })
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let game = GameSetup::new().start(Player::One);
        let Ok(GameResult::InProgress(after)) =
            game.clone().make_move(Move::new(Player::One, center()))
        else {
            panic!("Expected in-progress game");
        };
        assert!(MoveContract::post(&game, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let game = GameSetup::new().start(Player::One);
        let Ok(GameResult::InProgress(mut after)) =
            game.clone().make_move(Move::new(Player::One, center()))
        else {
            panic!("Expected in-progress game");
        };

        // A second mark with no history entry.
        after
            .board
            .set(Position::new(0, 0).unwrap(), Cell::Occupied(Player::Two));
        assert!(matches!(
            MoveContract::post(&game, &after),
            Err(MoveError::InvariantViolation { .. })
        ));
    }

    #[test]
    fn test_postcondition_detects_unchanged_board() {
        let game = GameSetup::new().start(Player::One);
        assert!(MoveContract::post(&game, &game).is_err());
    }
}
