use super::*;
use chess_core::Square;
use std::time::Duration;

fn board(fen: &str) -> Board {
    Board::from_fen(fen).unwrap()
}

fn sq(c: &str) -> Square {
    Square::parse(c).unwrap()
}

fn run(board: &Board, side: Color, depth: u8, config: &SearchConfig) -> SearchOutcome {
    let tc = TimeControl::default();
    search(board, side, depth, config, &tc)
}

#[test]
fn test_best_move_start_position() {
    let outcome = run(&Board::startpos(), Color::White, 3, &SearchConfig::default());
    assert!(!outcome.best_move.is_none());
    assert!(outcome.nodes > 0);
    assert!(!outcome.stopped);
}

#[test]
fn test_no_moves_returns_sentinel() {
    let b = board("4k3/8/8/8/8/8/8/8");
    let mv = best_move(&b, Color::White, 3);
    assert!(mv.is_none());
    assert_eq!(mv.from, Square::NONE);
    assert_eq!(mv.to, Square::NONE);
    assert_eq!(mv.score, i32::MIN);
}

#[test]
fn test_depth_one_picks_best_static_successor() {
    let positions = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R",
        "4k3/8/8/3q4/8/2N5/8/3RK3",
    ];
    let config = SearchConfig::sequential();

    for fen in positions {
        let b = board(fen);
        let expected = generate(&b, Color::White)
            .into_iter()
            .map(|mv| evaluate(&b.apply(mv)))
            .max()
            .unwrap();

        let chosen = run(&b, Color::White, 1, &config).best_move;
        assert_eq!(chosen.score, expected, "{fen}");
        assert_eq!(evaluate(&b.apply(chosen)), expected, "{fen}");
    }
}

#[test]
fn test_captures_hanging_queen() {
    let b = board("4k3/8/8/3q4/8/8/8/3RK3");
    for depth in 1..=3 {
        let mv = best_move(&b, Color::White, depth);
        assert_eq!((mv.from, mv.to), (sq("d1"), sq("d5")), "depth {depth}");
    }
}

#[test]
fn test_black_root_minimizes() {
    let b = board("3rk3/8/8/8/3Q4/8/8/4K3");
    for depth in 1..=3 {
        let mv = best_move(&b, Color::Black, depth);
        assert_eq!((mv.from, mv.to), (sq("d8"), sq("d4")), "depth {depth}");
        assert!(mv.score < 0);
    }
}

#[test]
fn test_parallel_and_sequential_agree() {
    let b = board("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R");
    let par = run(&b, Color::White, 3, &SearchConfig::default());
    let seq = run(&b, Color::White, 3, &SearchConfig::sequential());

    assert_eq!(par.best_move, seq.best_move);
    assert_eq!(par.nodes, seq.nodes);
}

#[test]
fn test_every_branch_is_explored() {
    // 20 root replies + 20 * 20 grandchildren, nothing pruned.
    let outcome = run(&Board::startpos(), Color::White, 2, &SearchConfig::default());
    assert_eq!(outcome.nodes, 420);
}

#[test]
fn test_lexicographic_tie_break_is_stable() {
    // Lone kings: d2, e2 and f2 all score the same.
    let b = board("k7/8/8/8/8/8/8/4K3");
    for _ in 0..10 {
        let mv = run(&b, Color::White, 1, &SearchConfig::default()).best_move;
        assert_eq!((mv.from, mv.to), (sq("e1"), sq("d2")));
    }
}

#[test]
fn test_first_found_tie_break_picks_a_top_move() {
    let b = board("k7/8/8/8/8/8/8/4K3");
    let config = SearchConfig {
        tie_break: TieBreak::FirstFound,
        ..SearchConfig::default()
    };
    let mv = run(&b, Color::White, 1, &config).best_move;
    assert!([sq("d2"), sq("e2"), sq("f2")].contains(&mv.to));

    let lex = run(&b, Color::White, 1, &SearchConfig::default()).best_move;
    assert_eq!(mv.score, lex.score);
}

#[test]
fn test_minimax_depth_zero_is_static_eval() {
    let b = Board::startpos();
    assert_eq!(minimax(&b, 0, Window::FULL, true), evaluate(&b));
}

#[test]
fn test_side_without_moves_is_scored_statically() {
    // Black has nothing at all; the search cannot tell this from mate.
    let b = board("8/8/8/8/8/8/8/4K3");
    assert_eq!(minimax(&b, 3, Window::FULL, false), evaluate(&b));
}

#[test]
fn test_minimax_matches_root_score() {
    let b = board("4k3/8/8/3q4/8/8/8/3RK3");
    let mv = best_move(&b, Color::White, 2);
    assert_eq!(minimax(&b, 2, Window::FULL, true), mv.score);
}

#[test]
fn test_stopped_search_still_returns_a_move() {
    let config = SearchConfig::default();
    let tc = TimeControl::new(Some(Duration::from_secs(60)));
    tc.start();
    tc.stop();

    let outcome = search(&Board::startpos(), Color::White, 6, &config, &tc);
    assert!(outcome.stopped);
    assert!(!outcome.best_move.is_none());
    // Only the root's children were visited before falling back to eval.
    assert_eq!(outcome.nodes, 20);
}
