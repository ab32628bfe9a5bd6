//! Headless CPU-versus-CPU matches.

use crate::game::{Game, GameStatus};
use anyhow::Result;
use rand::Rng;
use serde::Serialize;
use tictactoe_engine::{Difficulty, Opponent, Player as Mark};
use tracing::{debug, info, instrument};

/// Results of a batch of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Tied games.
    pub draws: u32,
}

impl Tally {
    /// Total games recorded.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Mark::X) => self.x_wins += 1,
            GameStatus::Won(Mark::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: X won {}, O won {}, {} tied",
            self.games(),
            self.x_wins,
            self.o_wins,
            self.draws
        )
    }
}

/// Plays one game between two CPUs, X moving first, and returns its result.
///
/// Each side scores positions from its own perspective.
#[instrument(skip(rng))]
pub fn play_out<R: Rng + ?Sized>(x: Difficulty, o: Difficulty, rng: &mut R) -> Result<GameStatus> {
    let cpu_x = Opponent::playing(Mark::X, x);
    let cpu_o = Opponent::playing(Mark::O, o);
    let mut game = Game::new(Mark::X);

    while !game.is_over() {
        let cpu = match game.to_move() {
            Mark::X => &cpu_x,
            Mark::O => &cpu_o,
        };
        let position = cpu.choose_with_rng(game.board(), rng)?;
        game.make_move(position)?;
    }

    debug!(board = %game.board(), status = %game.status(), "Game finished");
    Ok(game.status())
}

/// Plays `games` CPU-versus-CPU games and tallies the results.
#[instrument(skip(rng))]
pub fn simulate<R: Rng + ?Sized>(
    x: Difficulty,
    o: Difficulty,
    games: u32,
    rng: &mut R,
) -> Result<Tally> {
    let mut tally = Tally::default();
    for _ in 0..games {
        tally.record(play_out(x, o, rng)?);
    }
    info!(%tally, "Simulation complete");
    Ok(tally)
}
