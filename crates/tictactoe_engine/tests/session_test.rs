//! Tests for the session state machine.

use tictactoe_engine::{
    Board, Command, GameOutcome, MoveError, Opponent, Phase, Player, Position, Session,
    SessionSnapshot, Transition,
};

fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col).unwrap()
}

#[test]
fn test_human_starts_and_computer_replies() {
    let mut session = Session::new(Opponent::Computer);
    assert_eq!(
        session.handle(Command::ChooseFirst(Player::One)),
        Ok(Transition::Started)
    );
    assert_eq!(session.to_move(), Some(Player::One));
    assert!(session.history().is_empty());

    assert_eq!(
        session.handle(Command::Place(pos(1, 1))),
        Ok(Transition::Moved)
    );
    let history = session.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].player, Player::One);
    assert_eq!(history[1].player, Player::Two);
    assert_eq!(session.to_move(), Some(Player::One));
}

#[test]
fn test_computer_opens_when_chosen_first() {
    let mut session = Session::new(Opponent::Computer);
    session.handle(Command::ChooseFirst(Player::Two)).unwrap();

    assert_eq!(session.phase(), Phase::InProgress);
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.board().count(Player::Two), 1);
    assert_eq!(session.to_move(), Some(Player::One));
}

#[test]
fn test_full_game_against_computer_is_never_lost() {
    let mut session = Session::new(Opponent::Computer);
    session.handle(Command::ChooseFirst(Player::One)).unwrap();

    while session.phase() == Phase::InProgress {
        let target = session
            .board()
            .empty_positions()
            .next()
            .expect("game in progress has an empty cell");
        session.handle(Command::Place(target)).unwrap();
    }

    assert_eq!(session.phase(), Phase::GameOver);
    assert_ne!(session.outcome(), GameOutcome::PlayerOneWins);
    assert_eq!(session.to_move(), None);
}

#[test]
fn test_hot_seat_game_to_a_win() {
    let mut session = Session::new(Opponent::Human);
    session.handle(Command::ChooseFirst(Player::One)).unwrap();

    for target in [pos(0, 0), pos(1, 0), pos(0, 1), pos(1, 1)] {
        assert_eq!(session.handle(Command::Place(target)), Ok(Transition::Moved));
    }
    assert_eq!(
        session.handle(Command::Place(pos(0, 2))),
        Ok(Transition::Finished(GameOutcome::PlayerOneWins))
    );
    assert_eq!(session.phase(), Phase::GameOver);
    assert_eq!(session.history().len(), 5);
}

#[test]
fn test_game_over_ignores_placement_until_restart() {
    let mut session = Session::new(Opponent::Human);
    session.handle(Command::ChooseFirst(Player::Two)).unwrap();
    for target in [pos(0, 0), pos(1, 0), pos(0, 1), pos(1, 1), pos(0, 2)] {
        session.handle(Command::Place(target)).unwrap();
    }
    assert_eq!(session.outcome(), GameOutcome::PlayerTwoWins);

    let finished = *session.board();
    assert_eq!(
        session.handle(Command::Place(pos(2, 2))),
        Ok(Transition::Ignored)
    );
    assert_eq!(
        session.handle(Command::ChooseFirst(Player::One)),
        Ok(Transition::Ignored)
    );
    assert_eq!(*session.board(), finished);

    assert_eq!(session.handle(Command::Restart), Ok(Transition::Restarted));
    assert_eq!(session.phase(), Phase::AwaitingPlayerChoice);
    assert_eq!(*session.board(), Board::new());
    assert_eq!(session.outcome(), GameOutcome::InProgress);
}

#[test]
fn test_occupied_cell_is_an_error() {
    let mut session = Session::new(Opponent::Computer);
    session.handle(Command::ChooseFirst(Player::Two)).unwrap();
    let taken = session.history()[0].position;

    assert_eq!(
        session.handle(Command::Place(taken)),
        Err(MoveError::CellOccupied { position: taken })
    );
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_snapshot_serializes() {
    let mut session = Session::new(Opponent::Computer);
    session.handle(Command::ChooseFirst(Player::One)).unwrap();
    session.handle(Command::Place(pos(0, 0))).unwrap();

    let snapshot = session.snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("\"opponent\":\"computer\""));
    let parsed: SessionSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, snapshot);
}
