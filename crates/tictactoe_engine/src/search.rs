//! Minimax search over tic-tac-toe positions.
//!
//! Scores are always taken from the viewpoint of a fixed `player` (the
//! maximizing side). A win for `player` found at recursion depth `d` scores
//! `10 - d`, a loss scores `d - 10` and a full board scores `0`, so the
//! search prefers the quickest win and the slowest loss.
//!
//! The board is explored in place. Every speculative placement is held by a
//! [`Speculation`] guard that clears the square again when it goes out of
//! scope, so the caller's board comes back exactly as it was passed in.

use crate::rules::{empty_cells, has_won, is_full};
use crate::{Board, Difficulty, Player, Square};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument};

/// Position score from the maximizing player's viewpoint.
pub type Score = i32;

/// Score of a win at depth zero.
pub const WIN_SCORE: Score = 10;

/// Initial best score for the top-level selector; outside any reachable score.
const SEED_SCORE: Score = 100;

/// A mark placed on the board for the lifetime of the guard.
struct Speculation<'a> {
    board: &'a mut Board,
    index: usize,
}

impl<'a> Speculation<'a> {
    fn place(board: &'a mut Board, index: usize, mark: Player) -> Self {
        board.squares_mut()[index] = Square::Occupied(mark);
        Self { board, index }
    }
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Speculation<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        self.board.squares_mut()[self.index] = Square::Empty;
    }
}

/// Scores `board` for `player` with `mover` to place the next mark.
///
/// `depth` is 0 at the root call and grows by one per ply. Terminal checks
/// run first, in order: `player` has a line, the opponent has a line, the
/// board is full. Otherwise every empty square is tried in ascending order
/// and the children are reduced with `max` when `mover == player` and `min`
/// otherwise.
///
/// On [`Difficulty::Medium`] nodes deeper than depth 1 generate no children
/// and score `0`.
///
/// The board is mutated during the call and restored before it returns.
pub fn evaluate(
    board: &mut Board,
    depth: u32,
    player: Player,
    mover: Player,
    difficulty: Difficulty,
) -> Score {
    let ply = depth as Score;
    if has_won(board, player) {
        return WIN_SCORE - ply;
    }
    if has_won(board, player.opponent()) {
        return ply - WIN_SCORE;
    }
    if is_full(board) {
        return 0;
    }
    if !difficulty.expands_at(depth) {
        return 0;
    }

    let maximizing = mover == player;
    let mut best: Option<Score> = None;
    for index in 0..board.squares().len() {
        if board.squares()[index] != Square::Empty {
            continue;
        }
        let score = {
            let mut next = Speculation::place(board, index, mover);
            evaluate(&mut next, depth + 1, player, mover.opponent(), difficulty)
        };
        best = Some(match best {
            None => score,
            Some(current) if maximizing => current.max(score),
            Some(current) => current.min(score),
        });
    }

    best.unwrap_or(0)
}

/// Scores every empty square as the next move for `mover`.
///
/// Each entry is `(index, score)` in ascending index order, where the score
/// is [`evaluate`] at depth 0 after `mover` takes the square.
#[instrument(level = "debug", skip(board), fields(board = %board))]
pub fn move_scores(
    board: &mut Board,
    player: Player,
    mover: Player,
    difficulty: Difficulty,
) -> Vec<(usize, Score)> {
    empty_cells(board)
        .into_iter()
        .map(|index| {
            let mut next = Speculation::place(board, index, mover);
            let score = evaluate(&mut next, 0, player, mover.opponent(), difficulty);
            (index, score)
        })
        .collect()
}

/// Picks the square `mover` should take.
///
/// Returns `None` only when the board has no empty square. Callers are
/// expected to check for a finished game first.
///
/// Easy chooses uniformly at random. Medium and Hard take the best-scoring
/// square for `mover`: highest when `mover == player`, lowest otherwise.
/// Ties go to the later square.
pub fn select_move(
    board: &mut Board,
    player: Player,
    mover: Player,
    difficulty: Difficulty,
) -> Option<usize> {
    select_move_with_rng(board, player, mover, difficulty, &mut rand::rng())
}

/// [`select_move`] with an explicit random source for Easy.
#[instrument(level = "debug", skip(board, rng), fields(board = %board))]
pub fn select_move_with_rng<R: Rng + ?Sized>(
    board: &mut Board,
    player: Player,
    mover: Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<usize> {
    debug_assert!(!is_full(board), "select_move called on a full board");

    if difficulty == Difficulty::Easy {
        let choice = empty_cells(board).choose(rng).copied();
        debug!(?choice, "Random move");
        return choice;
    }

    let scores = move_scores(board, player, mover, difficulty);
    best_move(&scores, player, mover)
}

/// Picks from `move_scores` output the square `mover` prefers.
///
/// Highest score when `mover == player`, lowest otherwise; ties go to the
/// later square. `None` only for an empty slice.
pub fn best_move(scores: &[(usize, Score)], player: Player, mover: Player) -> Option<usize> {
    let maximizing = mover == player;
    let mut best_score = if maximizing { -SEED_SCORE } else { SEED_SCORE };
    let mut best_move = None;
    for &(index, score) in scores {
        let replaces = if maximizing {
            score >= best_score
        } else {
            score <= best_score
        };
        if replaces {
            best_score = score;
            best_move = Some(index);
        }
    }

    debug!(?best_move, best_score, "Selected move");
    best_move
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_speculation_restores_square() {
        let mut b = Board::new();
        {
            let next = Speculation::place(&mut b, 4, Player::X);
            assert_eq!(next.squares()[4], Square::Occupied(Player::X));
        }
        assert_eq!(b, Board::new());
    }

    #[test]
    fn test_terminal_player_win() {
        let mut b = board("XXX OO. ...");
        assert_eq!(evaluate(&mut b, 0, Player::X, Player::O, Difficulty::Hard), 10);
        assert_eq!(evaluate(&mut b, 3, Player::X, Player::O, Difficulty::Hard), 7);
    }

    #[test]
    fn test_terminal_opponent_win() {
        let mut b = board("XXX OO. ...");
        assert_eq!(evaluate(&mut b, 0, Player::O, Player::O, Difficulty::Hard), -10);
        assert_eq!(evaluate(&mut b, 4, Player::O, Player::X, Difficulty::Hard), -6);
    }

    #[test]
    fn test_terminal_full_board_is_tie() {
        let mut b = board("XOX OXX OXO");
        for difficulty in [Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(evaluate(&mut b, 0, Player::X, Player::X, difficulty), 0);
            assert_eq!(evaluate(&mut b, 5, Player::O, Player::X, difficulty), 0);
        }
    }

    #[test]
    fn test_player_win_checked_before_opponent_win() {
        // Unreachable in play, but pins the terminal priority order.
        let mut b = board("XXX OOO ...");
        assert_eq!(evaluate(&mut b, 2, Player::X, Player::X, Difficulty::Hard), 8);
        assert_eq!(evaluate(&mut b, 2, Player::O, Player::X, Difficulty::Hard), 8);
    }

    #[test]
    fn test_evaluate_worked_example() {
        // X O X / O O . / . X .  with X to move: only square 5 holds the draw.
        let mut b = board("XOX OO. .X.");
        assert_eq!(evaluate(&mut b, 0, Player::X, Player::X, Difficulty::Hard), 0);

        let scores = move_scores(&mut b, Player::X, Player::X, Difficulty::Hard);
        assert_eq!(scores, vec![(5, 0), (6, -9), (8, -9)]);
        assert_eq!(
            select_move(&mut b, Player::X, Player::X, Difficulty::Hard),
            Some(5)
        );
    }

    #[test]
    fn test_medium_cutoff_scores_zero_below_depth_one() {
        // O cannot be stopped from winning in two of its own moves, but
        // Medium never looks that far.
        let mut b = board("O.. .X. ..O");
        assert_eq!(evaluate(&mut b, 2, Player::X, Player::X, Difficulty::Medium), 0);
        assert_eq!(evaluate(&mut b, 2, Player::X, Player::O, Difficulty::Medium), 0);
    }

    #[test]
    fn test_ties_go_to_later_square() {
        // Every reply draws with perfect play, so the last square wins the tie.
        let mut b = board("X........");
        let scores = move_scores(&mut b, Player::O, Player::O, Difficulty::Hard);
        let best = scores.iter().map(|(_, s)| *s).max().unwrap();
        let last_best = scores
            .iter()
            .filter(|(_, s)| *s == best)
            .map(|(i, _)| *i)
            .last();
        assert_eq!(
            select_move(&mut b, Player::O, Player::O, Difficulty::Hard),
            last_best
        );
    }

    #[test]
    fn test_best_move_follows_mover_and_prefers_later_ties() {
        let scores = [(1, 0), (4, -3), (6, 5), (8, -3)];
        assert_eq!(best_move(&scores, Player::X, Player::X), Some(6));
        assert_eq!(best_move(&scores, Player::X, Player::O), Some(8));
        assert_eq!(best_move(&[], Player::X, Player::X), None);
    }
}
