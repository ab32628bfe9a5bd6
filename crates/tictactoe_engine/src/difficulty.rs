//! CPU skill levels.

use serde::{Deserialize, Serialize};

/// How strongly the CPU plays.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Picks a random empty square. No search.
    Easy,
    /// Two-ply lookahead: wins and blocks immediate threats, nothing deeper.
    Medium,
    /// Exhaustive search. Never loses.
    #[default]
    Hard,
}

impl Difficulty {
    /// Deepest recursion depth at which the search still expands children.
    ///
    /// `None` means the tree is searched to the end. Easy never reaches the
    /// search so it reports `None` as well.
    pub fn search_horizon(self) -> Option<u32> {
        match self {
            Difficulty::Medium => Some(1),
            Difficulty::Easy | Difficulty::Hard => None,
        }
    }

    /// Whether a search node at `depth` generates children.
    pub fn expands_at(self, depth: u32) -> bool {
        self.search_horizon().is_none_or(|horizon| depth <= horizon)
    }
}
