//! Tests for CPU matches, suggestions and the orchestrator.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use tictactoe::{
    ConfigOverrides, CpuPlayer, Game, GameConfig, GameEvent, GameStatus, HumanPlayer, OpponentKind,
    Orchestrator, Player, Seats, play_out, simulate, suggest,
};
use tictactoe_engine::{Board, Difficulty, Opponent, Player as Mark, Position};
use tokio::sync::mpsc;

#[test]
fn test_hard_vs_hard_always_draws() {
    let mut rng = StdRng::seed_from_u64(7);
    let tally = simulate(Difficulty::Hard, Difficulty::Hard, 3, &mut rng).unwrap();
    assert_eq!(tally.draws, 3);
    assert_eq!(tally.games(), 3);
}

#[test]
fn test_hard_never_loses_to_easy() {
    let mut rng = StdRng::seed_from_u64(42);

    let tally = simulate(Difficulty::Hard, Difficulty::Easy, 20, &mut rng).unwrap();
    assert_eq!(tally.o_wins, 0);

    let tally = simulate(Difficulty::Easy, Difficulty::Hard, 20, &mut rng).unwrap();
    assert_eq!(tally.x_wins, 0);
    assert_eq!(tally.games(), 20);
}

#[test]
fn test_play_out_finishes() {
    let mut rng = StdRng::seed_from_u64(3);
    let status = play_out(Difficulty::Medium, Difficulty::Easy, &mut rng).unwrap();
    assert_ne!(status, GameStatus::InProgress);
}

#[test]
fn test_suggest_blocks_open_line() {
    let board: Board = "XX. .O. ...".parse().unwrap();
    let mut rng = StdRng::seed_from_u64(0);

    let suggestion = suggest(&board, Mark::O, Mark::O, Difficulty::Hard, &mut rng).unwrap();
    assert_eq!(suggestion.index, 2);
    assert_eq!(suggestion.cell, 3);
    assert_eq!(suggestion.scores.len(), 6);
    // The pick is the best of the reported scores, later square on ties.
    let best = suggestion.scores.iter().max_by_key(|(_, score)| *score);
    assert_eq!(best.map(|(index, _)| *index), Some(2));
    assert_eq!(suggestion.to_string(), format!("3 ({})", suggestion.label));
}

#[test]
fn test_suggest_easy_has_no_scores() {
    let board: Board = "XX. .O. ...".parse().unwrap();
    let mut rng = StdRng::seed_from_u64(0);

    let suggestion = suggest(&board, Mark::O, Mark::O, Difficulty::Easy, &mut rng).unwrap();
    assert!(suggestion.scores.is_empty());
    assert!(board.is_empty(tictactoe_engine::Position::from_index(suggestion.index).unwrap()));
}

#[test]
fn test_suggest_rejects_finished_board() {
    let board: Board = "XXX OO. ...".parse().unwrap();
    let mut rng = StdRng::seed_from_u64(0);

    let err = suggest(&board, Mark::O, Mark::O, Difficulty::Hard, &mut rng).unwrap_err();
    assert!(err.to_string().contains("X has already won"));
}

#[tokio::test]
async fn test_orchestrator_runs_cpu_match() {
    let player_x = CpuPlayer::new(
        "CPU X",
        Opponent::playing(Mark::X, Difficulty::Hard),
        Duration::ZERO,
    );
    let player_o = CpuPlayer::new(
        "CPU O",
        Opponent::playing(Mark::O, Difficulty::Hard),
        Duration::ZERO,
    );
    let (event_tx, mut events) = mpsc::unbounded_channel();

    let mut orchestrator =
        Orchestrator::new(Mark::X, Box::new(player_x), Box::new(player_o), event_tx);
    let status = orchestrator.run().await.unwrap();
    assert_eq!(status, GameStatus::Draw);

    let mut received = Vec::new();
    while let Ok(event) = events.try_recv() {
        received.push(event);
    }

    assert_eq!(
        received.first(),
        Some(&GameEvent::TurnStarted {
            player: "CPU X".to_string(),
            mark: Mark::X,
            cpu: true,
        })
    );
    assert_eq!(received.last(), Some(&GameEvent::GameOver { winner: None }));
    let moves = received
        .iter()
        .filter(|e| matches!(e, GameEvent::MoveMade { .. }))
        .count();
    assert_eq!(moves, 9);
}

fn config_with(overrides: ConfigOverrides) -> GameConfig {
    GameConfig::default().with_overrides(&overrides)
}

#[test]
fn test_cpu_takes_x_when_human_plays_o() {
    let config = config_with(ConfigOverrides {
        mark: Some(Mark::O),
        difficulty: Some(Difficulty::Medium),
        ..Default::default()
    });
    let seats = Seats::from_config(&config);

    assert!(seats.player_x.is_cpu());
    assert_eq!(seats.player_x.name(), "CPU (medium)");
    assert!(!seats.player_o.is_cpu());
    assert_eq!(seats.player_o.name(), "You");
    assert_eq!(seats.inputs.keys().copied().collect::<Vec<_>>(), vec![Mark::O]);
}

#[test]
fn test_cpu_scores_from_the_human_side() {
    for human in [Mark::X, Mark::O] {
        let config = config_with(ConfigOverrides {
            mark: Some(human),
            ..Default::default()
        });
        let opponent = Seats::cpu_opponent(&config);
        assert_eq!(opponent.mark(), human.opponent());
        assert_eq!(opponent.player(), human);
        assert_eq!(opponent.difficulty(), Difficulty::Hard);
    }

    // Minimizing for the human still blocks the human's line.
    let board: Board = "XX. .O. ...".parse().unwrap();
    let opponent = Seats::cpu_opponent(&GameConfig::default());
    assert_eq!(opponent.choose(&board).unwrap(), Position::TopRight);
}

#[test]
fn test_two_humans_both_get_input() {
    let config = config_with(ConfigOverrides {
        opponent: Some(OpponentKind::Human),
        ..Default::default()
    });
    let seats = Seats::from_config(&config);

    assert!(!seats.player_x.is_cpu());
    assert!(!seats.player_o.is_cpu());
    assert_eq!(seats.player_x.name(), "Player X");
    assert_eq!(seats.player_o.name(), "Player O");
    assert_eq!(seats.inputs.len(), 2);
    assert!(seats.inputs.contains_key(&Mark::X));
    assert!(seats.inputs.contains_key(&Mark::O));
}

#[tokio::test]
async fn test_human_skips_taken_square() {
    let mut game = Game::new(Mark::X);
    game.make_move(Position::Center).unwrap();
    let (tx, rx) = mpsc::unbounded_channel();
    let mut human = HumanPlayer::new("Player O", rx);

    // Runs once get_move is waiting for input.
    tokio::spawn(async move {
        tx.send(Position::Center).unwrap();
        tx.send(Position::TopLeft).unwrap();
    });

    assert_eq!(human.get_move(&game).await.unwrap(), Position::TopLeft);
}

#[tokio::test]
async fn test_human_ignores_input_sent_before_turn() {
    let game = Game::new(Mark::X);
    let (tx, rx) = mpsc::unbounded_channel();
    let mut human = HumanPlayer::new("Player X", rx);

    tx.send(Position::TopLeft).unwrap();
    tokio::spawn(async move {
        tx.send(Position::BottomRight).unwrap();
    });

    assert_eq!(human.get_move(&game).await.unwrap(), Position::BottomRight);
}

#[tokio::test]
async fn test_human_fails_when_input_closes() {
    let game = Game::new(Mark::X);
    let (tx, rx) = mpsc::unbounded_channel::<Position>();
    let mut human = HumanPlayer::new("Player X", rx);
    drop(tx);

    assert!(human.get_move(&game).await.is_err());
}
