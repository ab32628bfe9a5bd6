//! Tic Tac Toe - terminal game and engine CLI.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use tictactoe::{ConfigOverrides, GameConfig, simulate, suggest, tui};
use tictactoe_engine::{Board, Difficulty, Player as Mark};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

/// Log filter for the terminal UI when `RUST_LOG` is unset.
const PLAY_LOG_FILTER: &str = "info";

/// Log filter for headless commands when `RUST_LOG` is unset; stderr stays
/// quiet unless something goes wrong.
const HEADLESS_LOG_FILTER: &str = "warn";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, overrides } => run_play(config, overrides).await,
        Command::Suggest {
            board,
            mover,
            player,
            difficulty,
            seed,
            json,
        } => {
            initialize_stderr_tracing();
            run_suggest(board, mover, player.unwrap_or(mover), difficulty, seed, json)
        }
        Command::Simulate {
            games,
            x,
            o,
            seed,
            json,
        } => {
            initialize_stderr_tracing();
            run_simulate(games, x, o, seed, json)
        }
    }
}

/// Run an interactive game in the terminal
async fn run_play(config_path: PathBuf, overrides: ConfigOverrides) -> Result<()> {
    let config = GameConfig::load_or_default(&config_path)?.with_overrides(&overrides);
    initialize_file_tracing(config.log_file())?;

    info!(
        difficulty = %config.difficulty(),
        opponent = %config.opponent(),
        human = %config.human_mark(),
        "Starting interactive game"
    );
    tui::run_tui(config).await
}

/// Print the engine's move for a board
#[instrument(skip(board), fields(board = %board))]
fn run_suggest(
    board: Board,
    mover: Mark,
    player: Mark,
    difficulty: Difficulty,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let suggestion = suggest(&board, mover, player, difficulty, &mut rng_from(seed))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&suggestion)?);
    } else {
        println!("{}\n", board.display());
        println!("{} should play {}", mover, suggestion);
    }
    Ok(())
}

/// Play CPU against CPU and print the tally
#[instrument]
fn run_simulate(games: u32, x: Difficulty, o: Difficulty, seed: Option<u64>, json: bool) -> Result<()> {
    let tally = simulate(x, o, games, &mut rng_from(seed))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
    } else {
        println!("X ({}) vs O ({}): {}", x, o, tally);
    }
    Ok(())
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Logs go to a file so they do not draw over the terminal UI.
fn initialize_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(PLAY_LOG_FILTER)),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn initialize_stderr_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(HEADLESS_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();
}
