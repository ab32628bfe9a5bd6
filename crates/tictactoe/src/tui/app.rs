//! Application state and logic.

use super::input::{move_cursor, selected_square};
use crate::config::{GameConfig, OpponentKind};
use crate::game::Game;
use crate::orchestrator::GameEvent;
use crossterm::event::KeyCode;
use std::collections::HashMap;
use tictactoe_engine::{Player as Mark, Position};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep going.
    Continue,
    /// Start a new game.
    Restart,
    /// Leave the program.
    Quit,
}

/// Main application state.
pub struct App {
    game: Game,
    cursor: Position,
    status_message: String,
    human_mark: Mark,
    opponent: OpponentKind,
    inputs: HashMap<Mark, mpsc::UnboundedSender<Position>>,
}

impl App {
    /// Creates a new application for a game with `first` to move.
    pub fn new(
        config: &GameConfig,
        first: Mark,
        inputs: HashMap<Mark, mpsc::UnboundedSender<Position>>,
    ) -> Self {
        Self {
            game: Game::new(first),
            cursor: Position::Center,
            status_message: "Waiting for game to start...".to_string(),
            human_mark: *config.human_mark(),
            opponent: *config.opponent(),
            inputs,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// One-line description of the match, e.g. `You (X) vs CPU`.
    pub fn matchup(&self) -> String {
        match self.opponent {
            OpponentKind::Cpu => format!("You ({}) vs CPU ({})", self.human_mark, self.human_mark.opponent()),
            OpponentKind::Human => "Player X vs Player O".to_string(),
        }
    }

    /// Handles a game event from the orchestrator.
    pub fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::TurnStarted { player, mark, cpu } => {
                self.status_message = if cpu {
                    format!("{} is thinking...", player)
                } else if self.opponent == OpponentKind::Cpu {
                    "Your turn".to_string()
                } else {
                    format!("{}'s turn ({})", player, mark)
                };
            }
            GameEvent::MoveMade {
                player,
                mark,
                position,
            } => match self.game.make_move(position) {
                Ok(()) => {
                    self.status_message = format!("{} ({}) played {}", player, mark, position.label());
                }
                Err(e) => {
                    warn!(error = %e, "UI game state out of sync");
                    self.status_message = format!("Move error: {}", e);
                }
            },
            GameEvent::GameOver { winner } => {
                self.status_message = format!(
                    "{} Press 'r' to play again or 'q' to quit.",
                    self.outcome_message(winner)
                );
            }
        }
    }

    /// Result line for a finished game.
    pub fn outcome_message(&self, winner: Option<Mark>) -> String {
        match (winner, self.opponent) {
            (None, _) => "Tie!".to_string(),
            (Some(mark), OpponentKind::Cpu) if mark == self.human_mark => "You win!".to_string(),
            (Some(_), OpponentKind::Cpu) => "You lose!".to_string(),
            (Some(mark), OpponentKind::Human) => format!("Player {} wins!", mark),
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Char('r') if self.game.is_over() => return AppAction::Restart,
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = move_cursor(self.cursor, key);
            }
            _ => {
                if let Some(position) = selected_square(self.cursor, key) {
                    self.cursor = position;
                    self.submit(position);
                }
            }
        }
        AppAction::Continue
    }

    /// Sends `position` to whichever human is to move, if any.
    fn submit(&mut self, position: Position) {
        if self.game.is_over() {
            return;
        }
        let Some(input) = self.inputs.get(&self.game.to_move()) else {
            debug!("Ignoring input during CPU turn");
            return;
        };
        if !Position::valid_moves(self.game.board()).contains(&position) {
            self.status_message = format!("{} is taken. Choose an empty square.", position.label());
            return;
        }
        if input.send(position).is_err() {
            warn!("Human player input channel closed");
        }
    }

    /// Restarts with a fresh game.
    pub fn restart(&mut self, first: Mark, inputs: HashMap<Mark, mpsc::UnboundedSender<Position>>) {
        debug!(%first, "Restarting game");
        self.game = Game::new(first);
        self.inputs = inputs;
        self.cursor = Position::Center;
        self.status_message = "Game restarted.".to_string();
    }
}
