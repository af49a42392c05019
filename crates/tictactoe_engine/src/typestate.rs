//! Phase-specific typestate structs for a single game.
//!
//! Each phase is its own type: a [`GameSetup`] has an empty board and no
//! history, a [`GameInProgress`] accepts moves, and a [`GameFinished`]
//! always carries a decided outcome. Transitions consume the old phase.

use crate::action::Move;
use crate::contracts::{Contract, MoveContract};
use crate::error::MoveError;
use crate::position::Position;
use crate::search::{self, COMPUTER};
use crate::types::{Board, Cell, GameOutcome, Player};
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game waiting for the choice of who moves first. The board is empty.
#[derive(Debug, Clone, Default)]
pub struct GameSetup {
    board: Board,
}

impl GameSetup {
    /// Creates a new game in setup phase.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the game with `first_player` to move.
    #[instrument(skip(self))]
    pub fn start(self, first_player: Player) -> GameInProgress {
        GameInProgress {
            board: self.board,
            history: Vec::new(),
            first_player,
            to_move: first_player,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress: nobody has won and empty cells remain.
#[derive(Debug, Clone)]
pub struct GameInProgress {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    first_player: Player,
    to_move: Player,
}

impl GameInProgress {
    /// Makes a move, consuming self and transitioning to the next phase.
    ///
    /// Preconditions are always checked; postconditions only in debug builds.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn make_move(self, action: Move) -> Result<GameResult, MoveError> {
        #[cfg(debug_assertions)]
        let before = self.clone();

        MoveContract::pre(&self, &action)?;

        let mut game = self;
        game.board.set(action.position, Cell::Occupied(action.player));
        game.history.push(action);
        game.to_move = game.to_move.opponent();

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &game)?;

        let outcome = game.board.outcome();
        if outcome.is_over() {
            info!(%outcome, moves = game.history.len(), "Game finished");
            return Ok(GameResult::Finished(GameFinished {
                board: game.board,
                history: game.history,
                outcome,
            }));
        }

        debug!(%action, "Move applied");
        Ok(GameResult::InProgress(game))
    }

    /// Lets the minimax engine choose and play the computer's move.
    ///
    /// Fails with [`MoveError::WrongPlayer`] when it is not the computer's
    /// turn.
    #[instrument(skip(self))]
    pub fn play_computer_turn(self) -> Result<GameResult, MoveError> {
        if self.to_move != COMPUTER {
            return Err(MoveError::WrongPlayer { player: COMPUTER });
        }
        let position = search::compute_best_move(&self.board).ok_or(MoveError::NoLegalMove)?;
        self.make_move(Move::new(COMPUTER, position))
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the player who was chosen to start.
    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the empty positions, row-major.
    pub fn valid_moves(&self) -> Vec<Position> {
        self.board.empty_positions().collect()
    }

    /// Replays moves from an empty board with `first_player` starting.
    ///
    /// Moves after the game has finished are rejected with
    /// [`MoveError::GameOver`].
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(first_player: Player, moves: &[Move]) -> Result<GameResult, MoveError> {
        let mut result = GameResult::InProgress(GameSetup::new().start(first_player));

        for action in moves {
            result = match result {
                GameResult::InProgress(game) => game.make_move(*action)?,
                GameResult::Finished(_) => return Err(MoveError::GameOver),
            };
        }

        Ok(result)
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game over: the outcome is decided and no move is accepted.
#[derive(Debug, Clone)]
pub struct GameFinished {
    board: Board,
    history: Vec<Move>,
    outcome: GameOutcome,
}

impl GameFinished {
    /// Returns the outcome; never [`GameOutcome::InProgress`].
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Restarts with an empty board (consumes finished, returns setup).
    #[instrument(skip(self))]
    pub fn restart(self) -> GameSetup {
        GameSetup::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}
