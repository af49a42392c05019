//! Core domain types for tic-tac-toe.

use crate::error::BoardError;
use crate::position::Position;
use crate::rules;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::EnumIter;
use tracing::instrument;

/// Side length of the square board.
pub const SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = SIZE * SIZE;

/// One of the two sides.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Player {
    /// The human side, drawn as `O`. Minimizes during search.
    #[display("Player One")]
    One,
    /// The computer side, drawn as `X`. Maximizes during search.
    #[display("Player Two")]
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Character used for this player's mark.
    pub fn symbol(self) -> char {
        match self {
            Player::One => 'O',
            Player::Two => 'X',
        }
    }
}

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Holds the given player's mark.
    Occupied(Player),
}

impl Cell {
    /// The player whose mark is here, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Character used in board notation (`.` when empty).
    pub fn symbol(self) -> char {
        self.player().map_or('.', Player::symbol)
    }
}

/// 3x3 tic-tac-toe board.
///
/// The only public mutation is placing a mark on an empty cell. Clearing a
/// cell is reserved to the search engine, which undoes every speculative
/// placement before returning, and to [`Board::clear`] on restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[row][col]`.
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Resets every cell to empty.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Overwrites a cell without any occupancy check.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row()][pos.col()] = cell;
    }

    /// Checks if the cell at a position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Checks if the cell at raw coordinates is empty.
    pub fn is_cell_empty(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        Ok(self.is_empty(Position::new(row, col)?))
    }

    /// Places `player`'s mark at raw coordinates.
    ///
    /// Fails with [`BoardError::InvalidCoordinate`] off the board and with
    /// [`BoardError::CellOccupied`] when the cell already holds a mark; the
    /// board is left untouched in both cases.
    pub fn place_mark(&mut self, row: usize, col: usize, player: Player) -> Result<(), BoardError> {
        self.apply(Position::new(row, col)?, player)
    }

    /// Places `player`'s mark at a position, refusing to overwrite.
    pub fn apply(&mut self, pos: Position, player: Player) -> Result<(), BoardError> {
        if !self.is_empty(pos) {
            return Err(BoardError::CellOccupied {
                row: pos.row(),
                col: pos.col(),
            });
        }
        self.set(pos, Cell::Occupied(player));
        Ok(())
    }

    /// Iterates over every cell with its position, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        Position::all().map(|pos| (pos, self.get(pos)))
    }

    /// Iterates over the empty positions, row-major.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(|&pos| self.is_empty(pos))
    }

    /// Number of marks `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.cells()
            .filter(|(_, cell)| *cell == Cell::Occupied(player))
            .count()
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        CELL_COUNT - self.empty_positions().count()
    }

    /// True when no empty cell remains.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// True when some line consists entirely of `player`'s mark.
    pub fn check_win(&self, player: Player) -> bool {
        rules::check_win(self, player)
    }

    /// The winning player, Player Two taking precedence on a corrupt board.
    pub fn winner(&self) -> Option<Player> {
        self.outcome().winner()
    }

    /// Derives the outcome from the current contents.
    pub fn outcome(&self) -> GameOutcome {
        rules::outcome(self)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, cell) in cells.iter().enumerate() {
                if col > 0 {
                    write!(f, "|")?;
                }
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for Board {
    type Err = BoardError;

    /// Parses the notation produced by `Display`.
    ///
    /// `O`/`o` is Player One, `X`/`x` is Player Two, and `.`, `-` or `_` is
    /// empty. Whitespace, `|` and `/` are separators and ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != '/')
            .collect();

        if symbols.len() != CELL_COUNT {
            return Err(BoardError::InvalidNotation {
                message: format!("expected {} cells, found {}", CELL_COUNT, symbols.len()),
            });
        }

        let mut board = Board::new();
        for (pos, symbol) in Position::all().zip(symbols) {
            let cell = match symbol {
                'O' | 'o' => Cell::Occupied(Player::One),
                'X' | 'x' => Cell::Occupied(Player::Two),
                '.' | '-' | '_' => Cell::Empty,
                other => {
                    return Err(BoardError::InvalidNotation {
                        message: format!("unexpected symbol '{}' at {}", other, pos),
                    });
                }
            };
            board.set(pos, cell);
        }
        Ok(board)
    }
}

/// Outcome of a board, always recomputed from its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum GameOutcome {
    /// Nobody has won and empty cells remain.
    #[display("In progress")]
    InProgress,
    /// Player One completed a line.
    #[display("Player One wins")]
    PlayerOneWins,
    /// Player Two completed a line.
    #[display("Player Two wins")]
    PlayerTwoWins,
    /// Full board, no line.
    #[display("Draw")]
    Draw,
}

impl GameOutcome {
    /// The outcome in which `player` has won.
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::One => GameOutcome::PlayerOneWins,
            Player::Two => GameOutcome::PlayerTwoWins,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::PlayerOneWins => Some(Player::One),
            GameOutcome::PlayerTwoWins => Some(Player::Two),
            GameOutcome::InProgress | GameOutcome::Draw => None,
        }
    }

    /// True once the game can no longer continue.
    pub fn is_over(self) -> bool {
        self != GameOutcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_is_an_involution() {
        for player in Player::iter() {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(Position::all().all(|pos| board.is_empty(pos)));
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(board.outcome(), GameOutcome::InProgress);
    }

    #[test]
    fn test_place_mark_sets_exactly_one_cell() {
        let mut board = Board::new();
        board.place_mark(1, 2, Player::One).unwrap();

        for (pos, cell) in board.cells() {
            if (pos.row(), pos.col()) == (1, 2) {
                assert_eq!(cell, Cell::Occupied(Player::One));
            } else {
                assert_eq!(cell, Cell::Empty);
            }
        }
    }

    #[test]
    fn test_place_mark_refuses_to_overwrite() {
        let mut board = Board::new();
        board.place_mark(0, 0, Player::One).unwrap();
        let before = board;

        assert_eq!(
            board.place_mark(0, 0, Player::Two),
            Err(BoardError::CellOccupied { row: 0, col: 0 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_invalid_coordinates_fail_fast() {
        let mut board = Board::new();
        assert_eq!(
            board.place_mark(3, 1, Player::One),
            Err(BoardError::InvalidCoordinate { row: 3, col: 1 })
        );
        assert_eq!(
            board.is_cell_empty(1, 3),
            Err(BoardError::InvalidCoordinate { row: 1, col: 3 })
        );
        assert_eq!(board.is_cell_empty(1, 1), Ok(true));
    }

    #[test]
    fn test_counts() {
        let board: Board = "OX. / .O. / ..X".parse().unwrap();
        assert_eq!(board.count(Player::One), 2);
        assert_eq!(board.count(Player::Two), 2);
        assert_eq!(board.occupied_count(), 4);
        assert_eq!(board.empty_positions().count(), 5);
    }

    #[test]
    fn test_display_parses_back() {
        let board: Board = "OX. / .O. / ..X".parse().unwrap();
        assert_eq!(board.to_string(), "O|X|.\n.|O|.\n.|.|X");
        assert_eq!(board.to_string().parse::<Board>(), Ok(board));
    }

    #[test]
    fn test_parse_rejects_bad_notation() {
        assert!(matches!(
            "OX".parse::<Board>(),
            Err(BoardError::InvalidNotation { .. })
        ));
        assert!(matches!(
            "OX. .Q. ...".parse::<Board>(),
            Err(BoardError::InvalidNotation { .. })
        ));
    }

    #[test]
    fn test_clear_resets() {
        let mut board: Board = "OXO XOX ...".parse().unwrap();
        board.clear();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_outcome_helpers() {
        assert_eq!(GameOutcome::win_for(Player::One), GameOutcome::PlayerOneWins);
        assert_eq!(GameOutcome::PlayerTwoWins.winner(), Some(Player::Two));
        assert_eq!(GameOutcome::Draw.winner(), None);
        assert!(GameOutcome::Draw.is_over());
        assert!(!GameOutcome::InProgress.is_over());
    }
}
