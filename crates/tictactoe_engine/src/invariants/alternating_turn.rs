//! Alternating turn invariant: sides take turns, starting with the chosen one.

use super::Invariant;
use crate::typestate::GameInProgress;

/// Invariant: the first recorded move belongs to the player chosen to start,
/// no player moves twice in a row, and the side to move is the one that did
/// not make the last move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameInProgress> for AlternatingTurnInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let history = game.history();

        let Some(first) = history.first() else {
            return game.to_move() == game.first_player();
        };

        if first.player != game.first_player() {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].player == pair[1].player) {
            return false;
        }

        history
            .last()
            .is_some_and(|last| game.to_move() == last.player.opponent())
    }

    fn description() -> &'static str {
        "Players alternate turns, starting with the chosen player"
    }
}
