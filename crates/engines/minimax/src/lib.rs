//! Minimax Chess Engine
//!
//! Fixed-depth minimax over pseudo-legal moves, fanned out across sibling
//! moves with rayon, scored by material plus piece-square tables.

mod config;
mod eval;
mod pst;
mod search;

use chess_core::{Board, Color, Engine, SearchLimits, SearchResult};
use rayon::{ThreadPool, ThreadPoolBuilder};
use thiserror::Error;
use tracing::warn;

pub use config::{ConfigError, SearchConfig, TieBreak, MAX_DEPTH};
pub use eval::{evaluate, evaluate_detailed, is_endgame, piece_value, EvalBreakdown};
pub use search::{best_move, minimax, search, SearchOutcome, Searcher, Window, SCORE_INF};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to build search thread pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Chess engine running the parallel minimax search.
///
/// This engine uses:
/// - Plain minimax, white maximizing and black minimizing
/// - Material + piece-square evaluation with an endgame king table
/// - rayon fan-out down to `max_parallel_ply`, on a dedicated pool when
///   `threads` is set
#[derive(Debug)]
pub struct MinimaxEngine {
    config: SearchConfig,
    pool: Option<ThreadPool>,
    /// Node counter for statistics
    nodes: u64,
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MinimaxEngine {
    /// Default configuration on rayon's global pool.
    pub fn new() -> Self {
        Self {
            config: SearchConfig::default(),
            pool: None,
            nodes: 0,
        }
    }

    pub fn with_config(config: SearchConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let pool = build_pool(config.threads)?;
        Ok(Self {
            config,
            pool,
            nodes: 0,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Nodes visited by the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    fn set_threads(&mut self, threads: Option<usize>) -> bool {
        match build_pool(threads) {
            Ok(pool) => {
                self.pool = pool;
                self.config.threads = threads;
                true
            }
            Err(err) => {
                warn!(error = %err, "keeping previous thread pool");
                false
            }
        }
    }
}

fn build_pool(threads: Option<usize>) -> Result<Option<ThreadPool>, EngineError> {
    match threads {
        None => Ok(None),
        Some(n) => Ok(Some(ThreadPoolBuilder::new().num_threads(n).build()?)),
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &Board, side: Color, limits: SearchLimits) -> SearchResult {
        limits.start();

        // Depth 0 is searched as depth 1.
        let depth = limits.depth.unwrap_or(self.config.depth).max(1);
        let config = &self.config;
        let tc = &limits.time_control;
        let run = || search::search(board, side, depth, config, tc);
        let outcome = match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        };
        self.nodes = outcome.nodes;

        let best_move = (!outcome.best_move.is_none()).then_some(outcome.best_move);
        SearchResult {
            best_move,
            score: best_move.map(|mv| mv.score).unwrap_or(0),
            depth,
            nodes: outcome.nodes,
            stopped: outcome.stopped,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        match name {
            "Depth" => match value.parse::<u8>() {
                Ok(d) if (1..=MAX_DEPTH).contains(&d) => {
                    self.config.depth = d;
                    true
                }
                _ => false,
            },
            "Threads" => match value.parse::<usize>() {
                Ok(0) => self.set_threads(None),
                Ok(n) => self.set_threads(Some(n)),
                Err(_) => false,
            },
            "Parallel" => match value.parse::<bool>() {
                Ok(on) => {
                    self.config.parallel = on;
                    true
                }
                Err(_) => false,
            },
            "TieBreak" => match value.parse::<TieBreak>() {
                Ok(tb) => {
                    self.config.tie_break = tb;
                    true
                }
                Err(_) => false,
            },
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;
