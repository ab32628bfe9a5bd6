//! Game configuration loaded from TOML, with command-line overrides.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_engine::{Difficulty, Player as Mark};
use tracing::{debug, info, instrument};

/// Who sits across the board from the human.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OpponentKind {
    /// The computer, at the configured difficulty.
    #[default]
    Cpu,
    /// A second human at the same keyboard.
    Human,
}

/// Which side places the first mark.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FirstTurn {
    /// Coin toss.
    #[default]
    Random,
    /// The human (or, with two humans, the one holding `human_mark`).
    Human,
    /// The CPU (or, with two humans, the other one).
    Cpu,
}

impl FirstTurn {
    /// Resolves to the mark that moves first.
    #[instrument(skip(rng))]
    pub fn resolve<R: Rng + ?Sized>(self, human_mark: Mark, rng: &mut R) -> Mark {
        match self {
            FirstTurn::Human => human_mark,
            FirstTurn::Cpu => human_mark.opponent(),
            FirstTurn::Random => {
                if rng.random_bool(0.5) {
                    human_mark
                } else {
                    human_mark.opponent()
                }
            }
        }
    }
}

/// Settings for an interactive game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// CPU strength.
    difficulty: Difficulty,

    /// The mark the (first) human plays.
    human_mark: Mark,

    /// CPU or second human.
    opponent: OpponentKind,

    /// Who moves first.
    first_turn: FirstTurn,

    /// Pause before each CPU move, in milliseconds.
    cpu_delay_ms: u64,

    /// Where the terminal UI writes its logs.
    log_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Hard,
            human_mark: Mark::X,
            opponent: OpponentKind::Cpu,
            first_turn: FirstTurn::Random,
            cpu_delay_ms: 1000,
            log_file: PathBuf::from("tictactoe.log"),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(difficulty = %config.difficulty, opponent = %config.opponent, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of the loaded values.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(difficulty) = overrides.difficulty {
            self.difficulty = difficulty;
        }
        if let Some(mark) = overrides.mark {
            self.human_mark = mark;
        }
        if let Some(opponent) = overrides.opponent {
            self.opponent = opponent;
        }
        if let Some(first) = overrides.first {
            self.first_turn = first;
        }
        if let Some(delay) = overrides.cpu_delay_ms {
            self.cpu_delay_ms = delay;
        }
        self
    }
}

/// Command-line flags that replace config file values.
#[derive(Debug, Clone, Default, PartialEq, Eq, clap::Args)]
pub struct ConfigOverrides {
    /// CPU strength (easy, medium, hard)
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Mark for the human player (x or o)
    #[arg(short, long)]
    pub mark: Option<Mark>,

    /// Opponent type (cpu or human)
    #[arg(long)]
    pub opponent: Option<OpponentKind>,

    /// Who moves first (random, human or cpu)
    #[arg(long)]
    pub first: Option<FirstTurn>,

    /// Pause before each CPU move in milliseconds
    #[arg(long)]
    pub cpu_delay_ms: Option<u64>,
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
