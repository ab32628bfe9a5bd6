//! Terminal UI for interactive games.

mod app;
mod input;
mod ui;

pub use app::{App, AppAction};
pub use input::{move_cursor, selected_square};

use crate::config::GameConfig;
use crate::orchestrator::{GameEvent, Orchestrator};
use crate::players::Seats;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::collections::HashMap;
use std::io::{self, Stdout};
use std::time::Duration;
use tictactoe_engine::{Player as Mark, Position};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs an interactive game until the user quits.
#[instrument(skip(config))]
pub async fn run_tui(config: GameConfig) -> Result<()> {
    info!("Starting Tic Tac Toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &config).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// A running game: the orchestrator task and the channel it reports on.
struct Match {
    handle: JoinHandle<()>,
    events: mpsc::UnboundedReceiver<GameEvent>,
}

impl Drop for Match {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Who moves first and which marks take keyboard input.
type Lineup = (Mark, HashMap<Mark, mpsc::UnboundedSender<Position>>);

/// Seats the players and spawns the orchestrator.
fn start_match(config: &GameConfig) -> (Match, Lineup) {
    let first = config.first_turn().resolve(*config.human_mark(), &mut rand::rng());
    let seats = Seats::from_config(config);
    let (event_tx, events) = mpsc::unbounded_channel();

    let mut orchestrator = Orchestrator::new(first, seats.player_x, seats.player_o, event_tx);
    let handle = tokio::spawn(async move {
        if let Err(e) = orchestrator.run().await {
            error!(error = %e, "Orchestrator error");
        }
    });

    (Match { handle, events }, (first, seats.inputs))
}

async fn run_app(terminal: &mut Tui, config: &GameConfig) -> Result<()> {
    let (mut current, (first, inputs)) = start_match(config);
    let mut app = App::new(config, first, inputs);

    loop {
        while let Ok(event) = current.events.try_recv() {
            app.handle_event(event);
        }

        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match app.handle_key(key.code) {
                AppAction::Continue => {}
                AppAction::Quit => {
                    info!("User quit");
                    return Ok(());
                }
                AppAction::Restart => {
                    debug!("Starting a new game");
                    let (next, (first, inputs)) = start_match(config);
                    current = next;
                    app.restart(first, inputs);
                }
            }
        }

        tokio::task::yield_now().await;
    }
}
