//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use rewind_tictactoe::Position;

/// Moves the board cursor based on arrow keys, clamping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (mut row, mut col) = (cursor.row(), cursor.column());
    match key {
        KeyCode::Up => row = row.saturating_sub(1).max(1),
        KeyCode::Down => row = (row + 1).min(3),
        KeyCode::Left => col = col.saturating_sub(1).max(1),
        KeyCode::Right => col = (col + 1).min(3),
        _ => {}
    }
    Position::from_index((row - 1) * 3 + (col - 1)).unwrap_or(cursor)
}
