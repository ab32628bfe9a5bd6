//! CPU opponent: the checked entry point into the search.

use crate::error::{SearchError, SearchErrorKind};
use crate::rules::{check_winner, is_full};
use crate::search::{Score, best_move, move_scores, select_move_with_rng};
use crate::{Board, Difficulty, Player, Position};
use derive_new::new;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A computer player of fixed strength.
///
/// `mark` is the side the CPU plays. `player` is the side whose wins score
/// positive during the search; it may be the CPU itself or its opponent,
/// the chosen move is the same up to tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Opponent {
    mark: Player,
    player: Player,
    difficulty: Difficulty,
}

impl Opponent {
    /// A CPU that scores positions from its own side.
    #[instrument]
    pub fn playing(mark: Player, difficulty: Difficulty) -> Self {
        Self::new(mark, mark, difficulty)
    }

    /// The mark this CPU places.
    pub fn mark(&self) -> Player {
        self.mark
    }

    /// The side scored as the maximizer.
    pub fn player(&self) -> Player {
        self.player
    }

    /// The CPU's strength.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Picks the CPU's next move.
    ///
    /// Fails if the game on `board` is already decided. The search runs on
    /// a private copy, `board` itself is only read.
    pub fn choose(&self, board: &Board) -> Result<Position, SearchError> {
        self.choose_with_rng(board, &mut rand::rng())
    }

    /// [`Opponent::choose`] with an explicit random source for Easy.
    pub fn choose_with_rng<R: Rng + ?Sized>(
        &self,
        board: &Board,
        rng: &mut R,
    ) -> Result<Position, SearchError> {
        self.decide_with_rng(board, rng).map(|decision| decision.position)
    }

    /// Picks the next move and keeps the score of every candidate square.
    ///
    /// One search produces both; Easy does not search and leaves `scores`
    /// empty.
    #[instrument(skip(self, board, rng), fields(board = %board, mark = %self.mark, difficulty = %self.difficulty))]
    pub fn decide_with_rng<R: Rng + ?Sized>(
        &self,
        board: &Board,
        rng: &mut R,
    ) -> Result<Decision, SearchError> {
        if let Some(winner) = check_winner(board) {
            return Err(SearchError::new(SearchErrorKind::AlreadyWon(winner)));
        }
        if is_full(board) {
            return Err(SearchError::new(SearchErrorKind::BoardFull));
        }

        let mut scratch = *board;
        let (index, scores) = if self.difficulty == Difficulty::Easy {
            let index = select_move_with_rng(&mut scratch, self.player, self.mark, self.difficulty, rng);
            (index, Vec::new())
        } else {
            let scores = move_scores(&mut scratch, self.player, self.mark, self.difficulty);
            (best_move(&scores, self.player, self.mark), scores)
        };
        let position = index
            .and_then(Position::from_index)
            .ok_or_else(|| SearchError::new(SearchErrorKind::BoardFull))?;

        debug!(%position, "CPU chose move");
        Ok(Decision { position, scores })
    }
}

/// A chosen move together with the scores it was picked from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// The square to play.
    pub position: Position,
    /// `(index, score)` for every empty square, ascending; empty for Easy.
    pub scores: Vec<(usize, Score)>,
}
