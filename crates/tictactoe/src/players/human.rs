//! Human player fed by the terminal UI.

use super::Player;
use crate::game::Game;
use anyhow::Result;
use tictactoe_engine::Position;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Human player; the UI sends chosen squares over a channel.
pub struct HumanPlayer {
    name: String,
    input_rx: mpsc::UnboundedReceiver<Position>,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input_rx: mpsc::UnboundedReceiver<Position>) -> Self {
        Self {
            name: name.into(),
            input_rx,
        }
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn get_move(&mut self, game: &Game) -> Result<Position> {
        // Squares sent before this turn began are stale.
        let mut stale = 0;
        while self.input_rx.try_recv().is_ok() {
            stale += 1;
        }
        if stale > 0 {
            debug!(player = %self.name, stale, "Discarded input sent before the turn");
        }

        while let Some(position) = self.input_rx.recv().await {
            if game.board().is_empty(position) {
                debug!(player = %self.name, %position, "Human chose position");
                return Ok(position);
            }
            warn!(player = %self.name, %position, "Square already taken, waiting for another");
        }

        anyhow::bail!("Input channel closed")
    }

    fn name(&self) -> &str {
        &self.name
    }
}
