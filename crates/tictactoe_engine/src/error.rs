//! Error types for CPU move selection.

use crate::Player;
use derive_more::{Display, Error};
use tracing::instrument;

/// Why the CPU could not pick a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SearchErrorKind {
    /// A player already holds a line.
    #[display("{} has already won", _0)]
    AlreadyWon(Player),

    /// No empty square is left.
    #[display("board is full")]
    BoardFull,
}

/// Move selection error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Search error: {} at {}:{}", kind, file, line)]
pub struct SearchError {
    /// What went wrong.
    pub kind: SearchErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SearchError {
    /// Creates a new search error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: SearchErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
