//! Game orchestration between players.

use crate::game::{Game, GameStatus};
use crate::players::Player;
use anyhow::Result;
use tictactoe_engine::{Player as Mark, Position};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// It is a player's turn.
    TurnStarted {
        /// Display name of the player.
        player: String,
        /// Their mark.
        mark: Mark,
        /// Whether a CPU is about to think.
        cpu: bool,
    },
    /// Move was made.
    MoveMade {
        /// Display name of the player.
        player: String,
        /// Their mark.
        mark: Mark,
        /// Where it was placed.
        position: Position,
    },
    /// Game ended.
    GameOver {
        /// Winning mark, `None` for a tie.
        winner: Option<Mark>,
    },
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    game: Game,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator; `first` places the first mark.
    pub fn new(
        first: Mark,
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            game: Game::new(first),
            player_x,
            player_o,
            event_tx,
        }
    }

    /// Runs the game loop until someone wins or the board fills up.
    #[instrument(skip(self), fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub async fn run(&mut self) -> Result<GameStatus> {
        info!(first = %self.game.to_move(), "Starting game orchestration");

        // Players are never asked to move on a finished board.
        while !self.game.is_over() {
            let mark = self.game.to_move();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            let name = player.name().to_string();

            self.event_tx.send(GameEvent::TurnStarted {
                player: name.clone(),
                mark,
                cpu: player.is_cpu(),
            })?;

            debug!(player = %name, "Waiting for move");
            let position = player.get_move(&self.game).await?;
            self.game.make_move(position)?;

            info!(player = %name, %mark, %position, "Move made");
            self.event_tx.send(GameEvent::MoveMade {
                player: name,
                mark,
                position,
            })?;
        }

        let status = self.game.status();
        info!(%status, "Game over");
        self.event_tx.send(GameEvent::GameOver {
            winner: self.game.winner(),
        })?;
        Ok(status)
    }
}
