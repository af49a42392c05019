//! History consistency invariant: one recorded move per occupied cell.

use super::Invariant;
use crate::typestate::GameInProgress;

/// Invariant: history length equals the number of occupied cells.
pub struct HistoryConsistentInvariant;

impl Invariant<GameInProgress> for HistoryConsistentInvariant {
    fn holds(game: &GameInProgress) -> bool {
        game.history().len() == game.board().occupied_count()
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}
