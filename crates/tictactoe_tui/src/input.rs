//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictactoe_engine::{Position, SIZE};

/// Moves the cursor one cell for an arrow key, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(SIZE - 1), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(SIZE - 1)),
        _ => return cursor,
    };
    Position::new(row, col).unwrap_or(cursor)
}
