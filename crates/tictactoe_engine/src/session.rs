//! Runtime session driving the game lifecycle.
//!
//! The typestate phases can't live behind a single `&mut` handle, so the
//! session keeps whichever phase is current and moves between them in
//! response to [`Command`]s.

use crate::action::Move;
use crate::error::MoveError;
use crate::phases::{Opponent, Phase};
use crate::position::Position;
use crate::search::COMPUTER;
use crate::typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
use crate::types::{Board, GameOutcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Input the presentation layer feeds to a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Pick who moves first. Valid while awaiting the choice.
    ChooseFirst(Player),
    /// Place the mark of the player to move. Valid while in progress.
    Place(Position),
    /// Clear the board and ask again who starts. Valid once the game is over.
    Restart,
}

/// What a command did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// The command does not apply to the current phase; nothing changed.
    Ignored,
    /// A game began (and the computer may already have opened).
    Started,
    /// Marks were placed and the game goes on.
    Moved,
    /// The game ended with this outcome.
    Finished(GameOutcome),
    /// The board was cleared; the session awaits the first-player choice.
    Restarted,
}

#[derive(Debug, Clone)]
enum State {
    Setup(GameSetup),
    Playing(GameInProgress),
    Over(GameFinished),
}

impl From<GameResult> for State {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::InProgress(game) => State::Playing(game),
            GameResult::Finished(game) => State::Over(game),
        }
    }
}

/// One player's seat at the board, across any number of games.
#[derive(Debug, Clone)]
pub struct Session {
    opponent: Opponent,
    state: State,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Opponent::default())
    }
}

impl Session {
    /// Creates a session awaiting the first-player choice.
    #[instrument]
    pub fn new(opponent: Opponent) -> Self {
        info!(%opponent, "Session created");
        Self {
            opponent,
            state: State::Setup(GameSetup::new()),
        }
    }

    /// Who plays Player Two.
    pub fn opponent(&self) -> Opponent {
        self.opponent
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        match self.state {
            State::Setup(_) => Phase::AwaitingPlayerChoice,
            State::Playing(_) => Phase::InProgress,
            State::Over(_) => Phase::GameOver,
        }
    }

    /// The board of the current game.
    pub fn board(&self) -> &Board {
        match &self.state {
            State::Setup(game) => game.board(),
            State::Playing(game) => game.board(),
            State::Over(game) => game.board(),
        }
    }

    /// Outcome of the current game; in progress until it is over.
    pub fn outcome(&self) -> GameOutcome {
        match &self.state {
            State::Over(game) => game.outcome(),
            State::Setup(_) | State::Playing(_) => GameOutcome::InProgress,
        }
    }

    /// The player to move, while a game is in progress.
    pub fn to_move(&self) -> Option<Player> {
        match &self.state {
            State::Playing(game) => Some(game.to_move()),
            State::Setup(_) | State::Over(_) => None,
        }
    }

    /// Moves played so far in the current game.
    pub fn history(&self) -> &[Move] {
        match &self.state {
            State::Setup(_) => &[],
            State::Playing(game) => game.history(),
            State::Over(game) => game.history(),
        }
    }

    /// Applies a command.
    ///
    /// Commands that make no sense in the current phase are
    /// [`Transition::Ignored`]. A rejected move returns the error and leaves
    /// the session exactly as it was.
    #[instrument(skip(self), fields(phase = %self.phase()))]
    pub fn handle(&mut self, command: Command) -> Result<Transition, MoveError> {
        match Self::step(self.opponent, self.state.clone(), command) {
            Ok(Some((state, transition))) => {
                self.state = state;
                debug!(?transition, phase = %self.phase(), "Session advanced");
                Ok(transition)
            }
            Ok(None) => {
                debug!(?command, "Command ignored in this phase");
                Ok(Transition::Ignored)
            }
            Err(error) => {
                warn!(%error, ?command, "Command rejected");
                Err(error)
            }
        }
    }

    fn step(
        opponent: Opponent,
        state: State,
        command: Command,
    ) -> Result<Option<(State, Transition)>, MoveError> {
        let next = match (state, command) {
            (State::Setup(setup), Command::ChooseFirst(first)) => {
                let game = setup.start(first);
                let state = if opponent == Opponent::Computer && first == COMPUTER {
                    State::from(game.play_computer_turn()?)
                } else {
                    State::Playing(game)
                };
                (state, Transition::Started)
            }
            (State::Playing(game), Command::Place(position)) => {
                let action = Move::new(game.to_move(), position);
                let mut result = game.make_move(action)?;
                if opponent == Opponent::Computer {
                    result = match result {
                        GameResult::InProgress(game) if game.to_move() == COMPUTER => {
                            game.play_computer_turn()?
                        }
                        other => other,
                    };
                }
                match result {
                    GameResult::Finished(game) => {
                        let outcome = game.outcome();
                        (State::Over(game), Transition::Finished(outcome))
                    }
                    GameResult::InProgress(game) => (State::Playing(game), Transition::Moved),
                }
            }
            (State::Over(game), Command::Restart) => {
                (State::Setup(game.restart()), Transition::Restarted)
            }
            _ => return Ok(None),
        };
        Ok(Some(next))
    }

    /// Serializable view of the session.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase(),
            opponent: self.opponent,
            board: *self.board(),
            to_move: self.to_move(),
            outcome: self.outcome(),
            history: self.history().to_vec(),
        }
    }
}

/// Point-in-time copy of a session, for display or JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Lifecycle phase.
    pub phase: Phase,
    /// Who plays Player Two.
    pub opponent: Opponent,
    /// Board contents.
    pub board: Board,
    /// Player to move, while in progress.
    pub to_move: Option<Player>,
    /// Outcome so far.
    pub outcome: GameOutcome,
    /// Moves in play order.
    pub history: Vec<Move>,
}

impl SessionSnapshot {
    /// One-line status for display.
    pub fn status_string(&self) -> String {
        match self.phase {
            Phase::AwaitingPlayerChoice => "Waiting for the first-player choice".to_string(),
            Phase::InProgress => match self.to_move {
                Some(player) => format!("{} ({}) to move", player, player.symbol()),
                None => "In progress".to_string(),
            },
            Phase::GameOver => format!("Game over: {}", self.outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_new_session_awaits_choice() {
        let session = Session::new(Opponent::Computer);
        assert_eq!(session.phase(), Phase::AwaitingPlayerChoice);
        assert_eq!(*session.board(), Board::new());
        assert_eq!(session.to_move(), None);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_place_before_start_is_ignored() {
        let mut session = Session::new(Opponent::Computer);
        assert_eq!(
            session.handle(Command::Place(pos(1, 1))),
            Ok(Transition::Ignored)
        );
        assert_eq!(session.phase(), Phase::AwaitingPlayerChoice);
    }

    #[test]
    fn test_restart_only_after_game_over() {
        let mut session = Session::new(Opponent::Human);
        assert_eq!(session.handle(Command::Restart), Ok(Transition::Ignored));
        session.handle(Command::ChooseFirst(Player::One)).unwrap();
        assert_eq!(session.handle(Command::Restart), Ok(Transition::Ignored));
        assert_eq!(session.phase(), Phase::InProgress);
    }

    #[test]
    fn test_rejected_move_leaves_session_unchanged() {
        let mut session = Session::new(Opponent::Human);
        session.handle(Command::ChooseFirst(Player::One)).unwrap();
        session.handle(Command::Place(pos(0, 0))).unwrap();
        let before = session.snapshot();

        assert_eq!(
            session.handle(Command::Place(pos(0, 0))),
            Err(MoveError::CellOccupied { position: pos(0, 0) })
        );
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn test_snapshot_status() {
        let mut session = Session::new(Opponent::Human);
        assert_eq!(
            session.snapshot().status_string(),
            "Waiting for the first-player choice"
        );
        session.handle(Command::ChooseFirst(Player::Two)).unwrap();
        assert_eq!(session.snapshot().status_string(), "Player Two (X) to move");
    }
}
