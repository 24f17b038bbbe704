//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;

/// Moves a row-major board cursor with arrow or `hjkl` keys.
///
/// The cursor stops at the edges; other keys leave it where it is.
pub fn move_cursor(cursor: usize, side: usize, key: KeyCode) -> usize {
    if side == 0 {
        return cursor;
    }
    let (row, col) = (cursor / side, cursor % side);
    let (row, col) = match key {
        KeyCode::Left | KeyCode::Char('h') => (row, col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => (row, (col + 1).min(side - 1)),
        KeyCode::Up | KeyCode::Char('k') => (row.saturating_sub(1), col),
        KeyCode::Down | KeyCode::Char('j') => ((row + 1).min(side - 1), col),
        _ => (row, col),
    };
    row * side + col
}

/// Moves a list selection up or down, clamped to `len`.
pub fn move_selection(selected: usize, len: usize, key: KeyCode) -> usize {
    match key {
        KeyCode::Up | KeyCode::Char('k') => selected.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => (selected + 1).min(len.saturating_sub(1)),
        KeyCode::Home => 0,
        KeyCode::End => len.saturating_sub(1),
        _ => selected,
    }
}
