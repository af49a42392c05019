//! Session phases and opponent selection.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Where a session is in its lifecycle.
///
/// `AwaitingPlayerChoice -> InProgress -> GameOver -> AwaitingPlayerChoice`;
/// no other transitions exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Phase {
    /// Waiting for the choice of who moves first.
    #[display("Awaiting player choice")]
    AwaitingPlayerChoice,
    /// Marks are being placed.
    #[display("In progress")]
    InProgress,
    /// A line was completed or the board filled up.
    #[display("Game over")]
    GameOver,
}

/// Who plays Player Two.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Opponent {
    /// The minimax engine answers every human move.
    #[default]
    #[display("computer")]
    Computer,
    /// Two people share the board.
    #[display("human")]
    Human,
}
