//! Computer player backed by the minimax engine.

use super::Player;
use crate::game::Game;
use anyhow::Result;
use std::time::Duration;
use tictactoe_engine::{Opponent, Position};
use tracing::{debug, instrument};

/// CPU player of fixed difficulty.
pub struct CpuPlayer {
    name: String,
    opponent: Opponent,
    delay: Duration,
}

impl CpuPlayer {
    /// Creates a new CPU player that pauses for `delay` before each move.
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub fn new(name: impl AsRef<str>, opponent: Opponent, delay: Duration) -> Self {
        Self {
            name: name.as_ref().to_string(),
            opponent,
            delay,
        }
    }
}

#[async_trait::async_trait]
impl Player for CpuPlayer {
    async fn get_move(&mut self, game: &Game) -> Result<Position> {
        debug!(
            cpu = %self.name,
            mark = %self.opponent.mark(),
            maximizer = %self.opponent.player(),
            difficulty = %self.opponent.difficulty(),
            "CPU making move"
        );

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        // Search runs on the blocking pool.
        let board = *game.board();
        let opponent = self.opponent;
        let position = tokio::task::spawn_blocking(move || opponent.choose(&board)).await??;

        debug!(cpu = %self.name, %position, "CPU chose position");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_cpu(&self) -> bool {
        true
    }
}
