use super::*;
use chess_core::{Square, generate};
use std::time::Duration;

#[test]
fn minimax_engine_returns_generated_move() {
    let mut engine = MinimaxEngine::new();
    let board = Board::startpos();

    let result = engine.search(&board, Color::White, SearchLimits::depth(2));

    let mv = result.best_move.unwrap();
    assert!(generate(&board, Color::White).iter().any(|m| m.same_squares(&mv)));
    assert_eq!(result.score, mv.score);
    assert_eq!(result.depth, 2);
    assert_eq!(result.nodes, engine.nodes());
    assert!(!result.stopped);
}

#[test]
fn minimax_engine_handles_side_without_moves() {
    let mut engine = MinimaxEngine::new();
    let board = Board::from_fen("4k3/8/8/8/8/8/8/8").unwrap();

    let result = engine.search(&board, Color::White, SearchLimits::depth(3));

    assert!(result.best_move.is_none());
    assert_eq!(result.score, 0);
}

#[test]
fn minimax_engine_on_dedicated_pool() {
    let config = SearchConfig {
        threads: Some(2),
        ..SearchConfig::default()
    };
    let mut engine = MinimaxEngine::with_config(config).unwrap();
    let board = Board::from_fen("4k3/8/8/3q4/8/8/8/3RK3").unwrap();

    let result = engine.search(&board, Color::White, SearchLimits::depth(2));

    let mv = result.best_move.unwrap();
    assert_eq!(mv.to, Square::parse("d5").unwrap());
}

#[test]
fn minimax_engine_rejects_invalid_config() {
    let config = SearchConfig {
        threads: Some(0),
        ..SearchConfig::default()
    };
    assert!(matches!(
        MinimaxEngine::with_config(config),
        Err(EngineError::Config(_))
    ));
}

#[test]
fn minimax_engine_options() {
    let mut engine = MinimaxEngine::new();
    assert!(engine.set_option("Depth", "5"));
    assert_eq!(engine.config().depth, 5);
    assert!(!engine.set_option("Depth", "0"));
    assert!(engine.set_option("Parallel", "false"));
    assert!(!engine.config().parallel);
    assert!(engine.set_option("TieBreak", "first-found"));
    assert_eq!(engine.config().tie_break, TieBreak::FirstFound);
    assert!(engine.set_option("Threads", "2"));
    assert_eq!(engine.config().threads, Some(2));
    assert!(!engine.set_option("Hash", "64"));
}

#[test]
fn minimax_engine_depth_option_drives_default_limits() {
    let board = Board::startpos();
    let mut engine = MinimaxEngine::new();

    // 20 + 400 + 8902 nodes at the default three plies.
    let result = engine.search(&board, Color::White, SearchLimits::default());
    assert_eq!(result.depth, 3);
    assert_eq!(result.nodes, 9322);

    assert!(engine.set_option("Depth", "1"));
    let result = engine.search(&board, Color::White, SearchLimits::default());
    assert_eq!(result.depth, 1);
    assert_eq!(result.nodes, 20);

    // An explicit depth still wins over the option.
    let result = engine.search(&board, Color::White, SearchLimits::depth(2));
    assert_eq!(result.depth, 2);
    assert_eq!(result.nodes, 420);
}

#[test]
fn minimax_engine_reports_depth_zero_as_one() {
    let mut engine = MinimaxEngine::new();
    let result = engine.search(&Board::startpos(), Color::White, SearchLimits::depth(0));

    assert_eq!(result.depth, 1);
    assert_eq!(result.nodes, 20);
    assert!(result.best_move.is_some());
}

#[test]
fn minimax_engine_respects_move_time() {
    let mut engine = MinimaxEngine::new();
    let limits = SearchLimits::depth_and_time(8, Duration::from_millis(50));

    let result = engine.search(&Board::startpos(), Color::White, limits);

    assert!(result.best_move.is_some());
    assert!(result.stopped);
}
