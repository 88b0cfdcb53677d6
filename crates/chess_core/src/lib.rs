pub mod board;
pub mod error;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod safety;
pub mod time_control;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::BoardError;
pub use movegen::*;
pub use notation::*;
pub use perft::perft;
pub use safety::*;
pub use time_control::*;
pub use types::*;

use serde::Serialize;

// =============================================================================
// Engine trait: the "best move for this side" contract
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    /// The best move found (None if the side has no moves)
    pub best_move: Option<Move>,
    /// Evaluation in centipawns, positive favors white
    pub score: i32,
    /// Search depth in plies
    pub depth: u8,
    /// Number of nodes visited
    pub nodes: u64,
    /// Whether the search was cut short by the move-time deadline
    pub stopped: bool,
}

/// Trait that all chess engines must implement.
///
/// Front ends only talk to the core through this trait and the
/// king-safety queries in [`safety`].
pub trait Engine: Send {
    /// Search `board` for `side` within the given limits.
    ///
    /// # Arguments
    /// * `board` - The position to analyze
    /// * `side` - The side to move
    /// * `limits` - Search limits (depth, optional move time)
    fn search(&mut self, board: &Board, side: Color, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's name for identification
    fn name(&self) -> &str;

    fn author(&self) -> &str {
        "chess-search"
    }

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}

    /// Optional: set a named option. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
