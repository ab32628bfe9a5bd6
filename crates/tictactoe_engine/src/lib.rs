//! Tic-tac-toe engine: board model and minimax move selection.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`Square`], [`Player`], [`Position`] and the
//!   pure functions in [`rules`] (win lines, full board, empty squares).
//! - **Search**: [`evaluate`] scores a position with minimax and
//!   [`select_move`] picks a square, both parameterized by [`Difficulty`].
//! - **Opponent**: [`Opponent`] checks that the game is still open before
//!   running the search on a copy of the board.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Board, Difficulty, Player, select_move};
//!
//! // X threatens the top row; O must block at square 2.
//! let mut board: Board = "XX. .O. ...".parse().unwrap();
//! let before = board;
//! let index = select_move(&mut board, Player::O, Player::O, Difficulty::Hard);
//! assert_eq!(index, Some(2));
//! assert_eq!(board, before);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod difficulty;
mod error;
mod opponent;
mod position;
pub mod rules;
mod search;
mod types;

pub use difficulty::Difficulty;
pub use error::{SearchError, SearchErrorKind};
pub use opponent::{Decision, Opponent};
pub use position::Position;
pub use rules::{check_winner, empty_cells, has_won, is_draw, is_full};
pub use search::{
    Score, WIN_SCORE, best_move, evaluate, move_scores, select_move, select_move_with_rng,
};
pub use types::{Board, ParseBoardError, Player, Square};
