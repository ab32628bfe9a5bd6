//! Tic-tac-toe front-end: game state, players, orchestration and terminal UI.
//!
//! # Architecture
//!
//! - **Game**: [`Game`] holds the authoritative board and result.
//! - **Players**: [`HumanPlayer`] takes squares from the UI, [`CpuPlayer`]
//!   asks the [`tictactoe_engine`] search.
//! - **Orchestrator**: [`Orchestrator`] alternates turns and reports
//!   [`GameEvent`]s to the UI.
//! - **TUI**: [`tui::run_tui`] draws the board with ratatui.
//! - **Headless**: [`suggest()`] and [`simulate()`] for scripting and
//!   CPU-versus-CPU runs.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod game;
mod orchestrator;
mod players;
mod simulate;
mod suggest;
pub mod tui;

pub use config::{ConfigError, ConfigOverrides, FirstTurn, GameConfig, OpponentKind};
pub use game::{Game, GameStatus, MoveError};
pub use orchestrator::{GameEvent, Orchestrator};
pub use players::{CpuPlayer, HumanPlayer, Player, Seats};
pub use simulate::{Tally, play_out, simulate};
pub use suggest::{Suggestion, suggest};
