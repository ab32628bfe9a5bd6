//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Square};
use tracing::instrument;

/// The eight index triples that win the game: rows, columns, diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns true if `mark` holds all three squares of any win line.
pub fn has_won(board: &Board, mark: Player) -> bool {
    let squares = board.squares();
    let target = Square::Occupied(mark);
    WIN_LINES
        .iter()
        .any(|[a, b, c]| squares[*a] == target && squares[*b] == target && squares[*c] == target)
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board), fields(board = %board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|player| has_won(board, *player))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    fn board_with_line(line: [usize; 3], mark: Player) -> Board {
        let mut squares = [Square::Empty; 9];
        for idx in line {
            squares[idx] = Square::Occupied(mark);
        }
        Board::from(squares)
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert!(!has_won(&board, Player::X));
        assert!(!has_won(&board, Player::O));
    }

    #[test]
    fn test_every_line_wins_for_its_mark_only() {
        for mark in [Player::X, Player::O] {
            for line in WIN_LINES {
                let board = board_with_line(line, mark);
                assert!(has_won(&board, mark), "{line:?} should win for {mark}");
                assert!(
                    !has_won(&board, mark.opponent()),
                    "{line:?} should not win for {}",
                    mark.opponent()
                );
                assert_eq!(check_winner(&board), Some(mark));
            }
        }
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));
        board.set(Position::BottomRight, Square::Occupied(Player::O));
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::O));
        assert_eq!(check_winner(&board), None);
    }
}
