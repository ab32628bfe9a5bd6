//! Player trait and implementations.

mod cpu;
mod human;

pub use cpu::CpuPlayer;
pub use human::HumanPlayer;

use crate::config::{GameConfig, OpponentKind};
use crate::game::Game;
use anyhow::Result;
use std::collections::HashMap;
use std::time::Duration;
use tictactoe_engine::{Opponent, Player as Mark, Position};
use tokio::sync::mpsc;
use tracing::{info, instrument};

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets a move from this player.
    async fn get_move(&mut self, game: &Game) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// True for computer players.
    fn is_cpu(&self) -> bool {
        false
    }
}

/// Both players of a match, plus the input channels of the human ones.
pub struct Seats {
    /// Plays X.
    pub player_x: Box<dyn Player>,
    /// Plays O.
    pub player_o: Box<dyn Player>,
    /// Where the UI sends chosen squares for each human-controlled mark.
    pub inputs: HashMap<Mark, mpsc::UnboundedSender<Position>>,
}

impl Seats {
    /// Seats the players described by `config`.
    #[instrument(skip(config), fields(opponent = %config.opponent(), human = %config.human_mark()))]
    pub fn from_config(config: &GameConfig) -> Self {
        let human_mark = *config.human_mark();
        let mut inputs = HashMap::new();

        let mut human = |mark: Mark, name: String| -> Box<dyn Player> {
            let (tx, rx) = mpsc::unbounded_channel();
            inputs.insert(mark, tx);
            Box::new(HumanPlayer::new(name, rx))
        };

        let (first, second): (Box<dyn Player>, Box<dyn Player>) = match config.opponent() {
            OpponentKind::Cpu => {
                let cpu = CpuPlayer::new(
                    format!("CPU ({})", config.difficulty()),
                    Self::cpu_opponent(config),
                    Duration::from_millis(*config.cpu_delay_ms()),
                );
                (human(human_mark, "You".to_string()), Box::new(cpu))
            }
            OpponentKind::Human => (
                human(human_mark, format!("Player {}", human_mark)),
                human(human_mark.opponent(), format!("Player {}", human_mark.opponent())),
            ),
        };

        let (player_x, player_o) = match human_mark {
            Mark::X => (first, second),
            Mark::O => (second, first),
        };
        info!(x = %player_x.name(), o = %player_o.name(), "Players seated");

        Self {
            player_x,
            player_o,
            inputs,
        }
    }

    /// Engine settings for the CPU seat.
    ///
    /// The CPU plays the other mark but scores positions from the human's
    /// side, so the human is the maximizing player of every search.
    pub fn cpu_opponent(config: &GameConfig) -> Opponent {
        let human_mark = *config.human_mark();
        Opponent::new(human_mark.opponent(), human_mark, *config.difficulty())
    }
}
