//! Cell coordinates on the board.

use crate::error::BoardError;
use crate::types::{CELL_COUNT, SIZE};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Human-readable names for every cell, indexed `[row][col]`.
const LABELS: [[&str; SIZE]; SIZE] = [
    ["Top-left", "Top-center", "Top-right"],
    ["Middle-left", "Center", "Middle-right"],
    ["Bottom-left", "Bottom-center", "Bottom-right"],
];

/// A `(row, col)` coordinate that is known to lie on the board.
///
/// Positions can only be built through [`Position::new`] (or the lookups that
/// call it), so an out-of-range coordinate is rejected once at the edge and
/// never reaches the board. Ordering is row-major, which is also the order in
/// which the search engine scans candidate moves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position, failing fast when either coordinate is off the board.
    pub fn new(row: usize, col: usize) -> Result<Self, BoardError> {
        if row < SIZE && col < SIZE {
            Ok(Self { row, col })
        } else {
            Err(BoardError::InvalidCoordinate { row, col })
        }
    }

    /// Builds a position the caller has already bounds-checked.
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        debug_assert!(row < SIZE && col < SIZE);
        Self { row, col }
    }

    /// Row index, `0..SIZE`.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index, `0..SIZE`.
    pub fn col(self) -> usize {
        self.col
    }

    /// The middle cell.
    pub fn center() -> Self {
        Self::at(SIZE / 2, SIZE / 2)
    }

    /// Every position in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).map(|index| Self::at(index / SIZE, index % SIZE))
    }

    /// Converts to a row-major index (`row * SIZE + col`).
    pub fn to_index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// Creates a position from a row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < CELL_COUNT).then(|| Self::at(index / SIZE, index % SIZE))
    }

    /// Label for display, e.g. "Top-left".
    pub fn label(self) -> &'static str {
        LABELS[self.row][self.col]
    }

    /// Parses keypad numbering (1 is top-left, 9 is bottom-right) or a label.
    ///
    /// Labels match case-insensitively, and spaces may stand in for hyphens.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(number) = s.parse::<usize>() {
            return number.checked_sub(1).and_then(Self::from_index);
        }

        let wanted = s.to_lowercase().replace(' ', "-");
        Self::all().find(|pos| pos.label().to_lowercase() == wanted)
    }

    /// Maps a point inside the board area to the cell under it.
    ///
    /// `x` and `y` are offsets from the board's top-left corner; each cell is
    /// `cell_width` by `cell_height`. The cell is found by integer division.
    /// Points beyond the grid, and degenerate cell sizes, yield `None`.
    pub fn from_point(x: u16, y: u16, cell_width: u16, cell_height: u16) -> Option<Position> {
        if cell_width == 0 || cell_height == 0 {
            return None;
        }
        let col = usize::from(x / cell_width);
        let row = usize::from(y / cell_height);
        Self::new(row, col).ok()
    }
}

impl TryFrom<(usize, usize)> for Position {
    type Error = BoardError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

impl From<Position> for (usize, usize) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
