//! Fixed-depth minimax with parallel fan-out across sibling moves.
//!
//! White always maximizes and black always minimizes; scores are
//! white-positive at every ply. Each candidate move is applied to its own
//! copy of the board, so workers never share a mutable board. Nodes below
//! `max_parallel_ply` iterate sequentially to keep nested rayon regions from
//! flooding the pool with tiny tasks.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Instant;

use chess_core::{generate, Board, Color, Move, TimeControl};
use rayon::prelude::*;
use tracing::{debug, info, trace};

use crate::config::{SearchConfig, TieBreak};
use crate::eval::evaluate;

/// Bound used for the full search window.
pub const SCORE_INF: i32 = 1_000_000;

/// Alpha/beta bounds threaded through the recursion.
///
/// The bounds are carried but never used to cut branches: every node is
/// searched to full depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub alpha: i32,
    pub beta: i32,
}

impl Window {
    pub const FULL: Window = Window {
        alpha: -SCORE_INF,
        beta: SCORE_INF,
    };
}

/// Result of a root search.
#[derive(Debug, Clone, Copy)]
pub struct SearchOutcome {
    /// Best move with its score, or `Move::NONE` if there were no moves
    pub best_move: Move,
    pub nodes: u64,
    /// True if the deadline expired before the tree was exhausted
    pub stopped: bool,
}

/// Per-search state shared by every worker.
pub struct Searcher<'a> {
    config: &'a SearchConfig,
    tc: &'a TimeControl,
    nodes: AtomicU64,
}

impl<'a> Searcher<'a> {
    pub fn new(config: &'a SearchConfig, tc: &'a TimeControl) -> Self {
        Self {
            config,
            tc,
            nodes: AtomicU64::new(0),
        }
    }

    pub fn nodes(&self) -> u64 {
        self.nodes.load(Ordering::Relaxed)
    }

    /// Scores every move of `side` and returns the best one, its score
    /// written into `Move::score`. White keeps the highest score, black the
    /// lowest. A depth of 0 is searched as depth 1.
    pub fn best_move(&self, board: &Board, side: Color, depth: u8) -> Move {
        self.best_of(board, side, depth, generate(board, side))
    }

    /// Root choice restricted to `moves`, e.g. a legality-filtered list.
    /// Returns `Move::NONE` if `moves` is empty.
    pub fn best_of(&self, board: &Board, side: Color, depth: u8, moves: Vec<Move>) -> Move {
        if moves.is_empty() {
            return Move::NONE;
        }

        let child_depth = depth.max(1) - 1;
        let child_maximizing = side.other() == Color::White;
        let forks = self.config.forks_at(0, moves.len());
        debug!(side = %side, candidates = moves.len(), forks, "scoring root moves");

        let score_move = |mv: Move| -> Move {
            let next = board.apply(mv);
            let score = self.minimax(&next, child_depth, 1, Window::FULL, child_maximizing);
            trace!(mv = %mv, score, "root move scored");
            Move { score, ..mv }
        };

        match self.config.tie_break {
            TieBreak::Lexicographic => {
                let pick = |a: Move, b: Move| prefer(side, a, b);
                let best = if forks {
                    moves.into_par_iter().map(score_move).reduce_with(pick)
                } else {
                    moves.into_iter().map(score_move).reduce(pick)
                };
                best.unwrap_or(Move::NONE)
            }
            TieBreak::FirstFound => {
                let best = Mutex::new(Move::NONE);
                let record = |mv: Move| {
                    let scored = score_move(mv);
                    let mut best = best.lock().unwrap_or_else(PoisonError::into_inner);
                    if best.is_none() || improves(side, scored.score, best.score) {
                        *best = scored;
                    }
                };
                if forks {
                    moves.into_par_iter().for_each(record);
                } else {
                    moves.into_iter().for_each(record);
                }
                best.into_inner().unwrap_or_else(PoisonError::into_inner)
            }
        }
    }

    /// Plain minimax value of `board`, white-positive.
    ///
    /// `ply` is the distance from the root and only drives the fan-out
    /// policy. A side without moves is scored statically, whether that is
    /// mate or stalemate.
    pub fn minimax(
        &self,
        board: &Board,
        depth: u8,
        ply: u8,
        window: Window,
        maximizing: bool,
    ) -> i32 {
        let nodes = self.nodes.fetch_add(1, Ordering::Relaxed) + 1;

        if depth == 0 {
            return evaluate(board);
        }
        if self.tc.is_stopped() || (self.tc.should_check_time(nodes) && self.tc.check_time()) {
            return evaluate(board);
        }

        let side = if maximizing { Color::White } else { Color::Black };
        let moves = generate(board, side);
        if moves.is_empty() {
            return evaluate(board);
        }

        let child = |mv: Move| {
            let next = board.apply(mv);
            self.minimax(&next, depth - 1, ply.saturating_add(1), window, !maximizing)
        };

        let folded = if self.config.forks_at(ply, moves.len()) {
            let scores = moves.into_par_iter().map(child);
            if maximizing {
                scores.max()
            } else {
                scores.min()
            }
        } else {
            let scores = moves.into_iter().map(child);
            if maximizing {
                scores.max()
            } else {
                scores.min()
            }
        };

        folded.unwrap_or_else(|| evaluate(board))
    }
}

/// True if `score` is strictly better than `current` for `side`.
#[inline]
fn improves(side: Color, score: i32, current: i32) -> bool {
    match side {
        Color::White => score > current,
        Color::Black => score < current,
    }
}

/// The better of two scored root moves for `side`, ties going to the
/// lexicographically smaller move. A total order, so the result does not
/// depend on how rayon splits the reduction.
fn prefer(side: Color, a: Move, b: Move) -> Move {
    if improves(side, a.score, b.score) {
        a
    } else if improves(side, b.score, a.score) {
        b
    } else if a.key() <= b.key() {
        a
    } else {
        b
    }
}

/// Runs one root search and logs its outcome.
pub fn search(
    board: &Board,
    side: Color,
    depth: u8,
    config: &SearchConfig,
    tc: &TimeControl,
) -> SearchOutcome {
    let start = Instant::now();
    debug!(
        side = %side,
        depth,
        parallel = config.parallel,
        max_parallel_ply = config.max_parallel_ply,
        tie_break = ?config.tie_break,
        "starting search"
    );

    let searcher = Searcher::new(config, tc);
    let best_move = searcher.best_move(board, side, depth);
    let nodes = searcher.nodes();
    let stopped = tc.is_stopped();

    info!(
        best = %best_move,
        score = best_move.score,
        nodes,
        elapsed = ?start.elapsed(),
        stopped,
        "search finished"
    );

    SearchOutcome {
        best_move,
        nodes,
        stopped,
    }
}

/// Best move for `side` at `depth` with the default configuration.
///
/// Returns `Move::NONE` (score `i32::MIN`) if `side` has no moves.
pub fn best_move(board: &Board, side: Color, depth: u8) -> Move {
    let config = SearchConfig::default();
    let tc = TimeControl::default();
    Searcher::new(&config, &tc).best_move(board, side, depth)
}

/// Minimax value of `board` with `maximizing` choosing white's moves.
pub fn minimax(board: &Board, depth: u8, window: Window, maximizing: bool) -> i32 {
    let config = SearchConfig::default();
    let tc = TimeControl::default();
    Searcher::new(&config, &tc).minimax(board, depth, 0, window, maximizing)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
