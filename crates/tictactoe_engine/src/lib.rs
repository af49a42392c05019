//! Tic-tac-toe engine: board model, rules, minimax search and game lifecycle.
//!
//! # Architecture
//!
//! - **Board**: a 3x3 grid of [`Cell`]s addressed by validated [`Position`]s
//! - **Rules**: win and draw detection, recomputed from the board every time
//! - **Search**: exhaustive minimax for the computer, which plays Player Two
//! - **Lifecycle**: typestate phases ([`GameSetup`], [`GameInProgress`],
//!   [`GameFinished`]) guarded by move contracts and invariants
//! - **Session**: a runtime wrapper over the phases that a UI drives with
//!   [`Command`]s
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Command, Opponent, Phase, Player, Position, Session};
//!
//! let mut session = Session::new(Opponent::Computer);
//! session.handle(Command::ChooseFirst(Player::One))?;
//! session.handle(Command::Place(Position::new(1, 1)?))?;
//!
//! // The computer has already replied.
//! assert_eq!(session.history().len(), 2);
//! assert_eq!(session.phase(), Phase::InProgress);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod error;
mod invariants;
mod phases;
mod position;
pub mod rules;
pub mod search;
mod session;
mod typestate;
mod types;

pub use action::Move;
pub use contracts::{CellIsEmpty, Contract, LegalMove, MoveContract, PlayersTurn};
pub use error::{BoardError, MoveError};
pub use invariants::{
    AlternatingTurnInvariant, GameInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, MonotonicBoardInvariant,
};
pub use phases::{Opponent, Phase};
pub use position::Position;
pub use search::{
    COMPUTER, DRAW_SCORE, HUMAN, LOSS_SCORE, Score, ScoredMove, SearchReport, WIN_SCORE,
    best_move, compute_best_move, evaluate, score_moves,
};
pub use session::{Command, Session, SessionSnapshot, Transition};
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
pub use types::{Board, CELL_COUNT, Cell, GameOutcome, Player, SIZE};
