//! Keyboard mapping for the board.

use crossterm::event::KeyCode;
use tictactoe_engine::Position;

/// Moves the cursor one square with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);
    let (row, col) = match key {
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// The square a key picks: digits 1-9 directly, Enter or space at the cursor.
pub fn selected_square(cursor: Position, key: KeyCode) -> Option<Position> {
    match key {
        KeyCode::Enter | KeyCode::Char(' ') => Some(cursor),
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|digit| Position::from_cell_number(digit as usize)),
        _ => None,
    }
}
