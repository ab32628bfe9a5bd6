//! Board-fill and draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Indices of the empty squares, ascending. Empty when the board is full.
pub fn empty_cells(board: &Board) -> Vec<usize> {
    board
        .squares()
        .iter()
        .enumerate()
        .filter(|(_, s)| **s == Square::Empty)
        .map(|(idx, _)| idx)
        .collect()
}

/// A full board with no winner.
#[instrument(skip(board), fields(board = %board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
