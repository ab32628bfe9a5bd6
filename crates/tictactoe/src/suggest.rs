//! One-shot move suggestion for a given board.

use rand::Rng;
use serde::Serialize;
use tictactoe_engine::{Board, Difficulty, Opponent, Player as Mark, Score, SearchError};
use tracing::instrument;

/// The engine's pick for a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Board index, 0-8.
    pub index: usize,
    /// Cell number as shown to players, 1-9.
    pub cell: usize,
    /// Human-readable square name.
    pub label: &'static str,
    /// Score of every candidate square as `(index, score)`; empty for Easy.
    pub scores: Vec<(usize, Score)>,
}

/// Asks the engine which square `mover` should take on `board`.
///
/// `player` is the side scored as the maximizer.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn suggest<R: Rng + ?Sized>(
    board: &Board,
    mover: Mark,
    player: Mark,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<Suggestion, SearchError> {
    let decision = Opponent::new(mover, player, difficulty).decide_with_rng(board, rng)?;
    let position = decision.position;

    Ok(Suggestion {
        index: position.to_index(),
        cell: position.cell_number(),
        label: position.label(),
        scores: decision.scores,
    })
}

impl std::fmt::Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.cell, self.label)
    }
}
