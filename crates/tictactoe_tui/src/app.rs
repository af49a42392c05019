//! Application state and input handling.

use crate::input::move_cursor;
use crate::ui::{CELL_HEIGHT, CELL_WIDTH};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tictactoe_engine::{Command, Opponent, Phase, Player, Position, Session, Transition};
use tracing::{debug, info, instrument, warn};

/// Main application state.
pub struct App {
    session: Session,
    cursor: Position,
    message: Option<String>,
    board_area: Rect,
    should_quit: bool,
}

impl App {
    /// Creates a new application awaiting the first-player choice.
    pub fn new(opponent: Opponent) -> Self {
        Self {
            session: Session::new(opponent),
            cursor: Position::center(),
            message: None,
            board_area: Rect::default(),
            should_quit: false,
        }
    }

    /// The game session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records where the board was last drawn, for mouse hit-testing.
    pub fn set_board_area(&mut self, area: Rect) {
        self.board_area = area;
    }

    /// Status line text.
    pub fn status(&self) -> String {
        if let Some(message) = &self.message {
            return message.clone();
        }
        let snapshot = self.session.snapshot();
        match snapshot.phase {
            Phase::AwaitingPlayerChoice => match snapshot.opponent {
                Opponent::Computer => "Who starts? 1 = you (O), 2 = AI (X)".to_string(),
                Opponent::Human => {
                    "Who starts? 1 = Player One (O), 2 = Player Two (X)".to_string()
                }
            },
            Phase::InProgress => snapshot.status_string(),
            Phase::GameOver => {
                format!("{}. Press r to restart, q to quit", snapshot.status_string())
            }
        }
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            code => match self.session.phase() {
                Phase::AwaitingPlayerChoice => match code {
                    KeyCode::Char('1') => self.dispatch(Command::ChooseFirst(Player::One)),
                    KeyCode::Char('2') => self.dispatch(Command::ChooseFirst(Player::Two)),
                    _ => {}
                },
                Phase::InProgress => match code {
                    KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                        self.cursor = move_cursor(self.cursor, code);
                    }
                    KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
                    KeyCode::Char(c) if c.is_ascii_digit() => {
                        if let Some(position) = Position::from_label_or_number(&c.to_string()) {
                            self.place(position);
                        }
                    }
                    _ => {}
                },
                Phase::GameOver => {
                    if code == KeyCode::Char('r') {
                        self.dispatch(Command::Restart);
                    }
                }
            },
        }
    }

    /// Handles a mouse event; a left click on a cell places a mark there.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(position) = self.cell_at(mouse.column, mouse.row) {
            debug!(%position, "Click on cell");
            self.place(position);
        }
    }

    /// The cell drawn at a screen coordinate, if any.
    ///
    /// Uses the fixed cell size the board is drawn with; points in the part
    /// of the board clipped by a small terminal hit nothing.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        let x = column.checked_sub(self.board_area.x)?;
        let y = row.checked_sub(self.board_area.y)?;
        if x >= self.board_area.width || y >= self.board_area.height {
            return None;
        }
        Position::from_point(x, y, CELL_WIDTH, CELL_HEIGHT)
    }

    fn place(&mut self, position: Position) {
        if self.session.phase() != Phase::InProgress {
            return;
        }
        self.cursor = position;
        self.dispatch(Command::Place(position));
    }

    fn dispatch(&mut self, command: Command) {
        match self.session.handle(command) {
            Ok(Transition::Ignored) => {}
            Ok(transition) => {
                debug!(?transition, "Session transition");
                self.message = None;
                if transition == Transition::Restarted {
                    self.cursor = Position::center();
                }
            }
            Err(e) => {
                warn!(error = %e, "Move rejected");
                self.message = Some(e.to_string());
            }
        }
    }
}
