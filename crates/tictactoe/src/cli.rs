//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe::ConfigOverrides;
use tictactoe_engine::{Board, Difficulty, Player as Mark};

/// Tic Tac Toe against a minimax CPU or a friend
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Terminal tic-tac-toe with easy, medium and hard CPU opponents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Path to the game config file (defaults are used if it is missing)
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: PathBuf,

        /// Values that replace the config file
        #[command(flatten)]
        overrides: ConfigOverrides,
    },

    /// Print the CPU's move for a board, e.g. `suggest "XX. .O. ..." --mover o`
    Suggest {
        /// Nine cells in row-major order: X, O, and . for empty
        board: Board,

        /// The side about to move
        #[arg(long)]
        mover: Mark,

        /// The side scored as the maximizer (defaults to the mover)
        #[arg(long)]
        player: Option<Mark>,

        /// Search strength
        #[arg(short, long, default_value_t = Difficulty::Hard)]
        difficulty: Difficulty,

        /// Seed for the easy CPU's random choice
        #[arg(long)]
        seed: Option<u64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Play CPU against CPU and report the results
    Simulate {
        /// Number of games
        #[arg(short = 'n', long, default_value_t = 100)]
        games: u32,

        /// Strength of X (moves first)
        #[arg(long, default_value_t = Difficulty::Hard)]
        x: Difficulty,

        /// Strength of O
        #[arg(long, default_value_t = Difficulty::Hard)]
        o: Difficulty,

        /// Seed for reproducible easy-CPU games
        #[arg(long)]
        seed: Option<u64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
