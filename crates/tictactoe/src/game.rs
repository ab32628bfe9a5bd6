//! Authoritative game state for one match.

use serde::{Deserialize, Serialize};
use tictactoe_engine::{Board, Player as Mark, Position, Square, check_winner, is_draw};
use tracing::{debug, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(mark) => write!(f, "{} wins", mark),
            GameStatus::Draw => write!(f, "Tie"),
        }
    }
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("{} is already taken", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Tic-tac-toe game: board, side to move and result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Mark,
    status: GameStatus,
}

impl Game {
    /// Creates a new game with `first` to move.
    #[instrument]
    pub fn new(first: Mark) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move. Meaningless once the game is over.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once someone has won or the board is full.
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// The winner, if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::Won(mark) => Some(mark),
            _ => None,
        }
    }

    /// Places the current side's mark at `position`.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn make_move(&mut self, position: Position) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }

        self.board.set(position, Square::Occupied(self.to_move));
        self.update_status();
        if !self.is_over() {
            self.to_move = self.to_move.opponent();
        }

        debug!(board = %self.board, status = %self.status, "Move applied");
        Ok(())
    }

    fn update_status(&mut self) {
        if let Some(winner) = check_winner(&self.board) {
            self.status = GameStatus::Won(winner);
        } else if is_draw(&self.board) {
            self.status = GameStatus::Draw;
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Mark::X)
    }
}
