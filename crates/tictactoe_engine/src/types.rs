//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X.
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Single-character symbol, `.` for an empty square.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Squares are stored in row-major order: indices 0-2 are the top row,
/// 3-5 the middle row and 6-8 the bottom row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    pub(crate) fn squares_mut(&mut self) -> &mut [Square; 9] {
        &mut self.squares
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty squares show their 1-based cell number so a player can tell
    /// which key selects them.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let idx = row * 3 + col;
                match self.squares[idx] {
                    Square::Empty => result.push_str(&(idx + 1).to_string()),
                    square => result.push(square.symbol()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl From<[Square; 9]> for Board {
    fn from(squares: [Square; 9]) -> Self {
        Self { squares }
    }
}

/// Compact one-line form, e.g. `XO.|.X.|..O`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, square) in self.squares.iter().enumerate() {
            if idx > 0 && idx % 3 == 0 {
                write!(f, "|")?;
            }
            write!(f, "{}", square.symbol())?;
        }
        Ok(())
    }
}

/// Error returned when a board string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseBoardError {
    /// The string did not contain exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),

    /// A character was neither a mark nor an empty marker.
    #[display("Invalid cell symbol {:?}", _0)]
    InvalidSymbol(char),
}

impl std::error::Error for ParseBoardError {}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cells in row-major order.
    ///
    /// `X` and `O` (any case) are marks; `.`, `_`, `-` and `0` are empty.
    /// Whitespace and `|` separators are ignored.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .map(|c| match c {
                'X' | 'x' => Ok(Square::Occupied(Player::X)),
                'O' | 'o' => Ok(Square::Occupied(Player::O)),
                '.' | '_' | '-' | '0' => Ok(Square::Empty),
                other => Err(ParseBoardError::InvalidSymbol(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let squares: [Square; 9] = cells
            .try_into()
            .map_err(|v: Vec<Square>| ParseBoardError::WrongLength(v.len()))?;
        Ok(Self { squares })
    }
}
