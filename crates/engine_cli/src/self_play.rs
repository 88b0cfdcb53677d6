//! Engine-versus-itself games.
//!
//! Each turn the side to move is checked for mate or stalemate first, then
//! the engine is asked for a move. The engine works on pseudo-legal moves,
//! so its choice is screened the same way a human move would be: a move
//! that leaves the mover in check is replaced by the best-scoring legal
//! move at the same depth.

use std::fmt;

use anyhow::{Result, bail};
use chess_core::{
    Board, Color, Engine, GameStatus, Move, TimeControl, leaves_in_check, legal_moves, status,
};
use minimax_engine::{SearchConfig, Searcher};
use tracing::{info, warn};

/// How a self-play game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Stalemate,
    PlyLimit,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Checkmate { winner } => write!(f, "{winner} wins by checkmate"),
            GameOutcome::Stalemate => write!(f, "drawn by stalemate"),
            GameOutcome::PlyLimit => write!(f, "stopped at ply limit"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SelfPlayReport {
    /// Moves in the order they were played
    pub moves: Vec<Move>,
    pub final_board: Board,
    /// Side to move in the final position
    pub side: Color,
    pub outcome: GameOutcome,
}

/// Plays `engine` against itself from `board` with `side` to move.
pub fn self_play(
    engine: &mut dyn Engine,
    mut board: Board,
    mut side: Color,
    max_plies: u32,
    config: &SearchConfig,
) -> Result<SelfPlayReport> {
    engine.new_game();
    let mut moves = Vec::new();

    let outcome = loop {
        match status(&board, side) {
            GameStatus::Checkmate => {
                break GameOutcome::Checkmate {
                    winner: side.other(),
                };
            }
            GameStatus::Stalemate => break GameOutcome::Stalemate,
            GameStatus::Ongoing | GameStatus::Check => {}
        }
        if moves.len() as u32 >= max_plies {
            break GameOutcome::PlyLimit;
        }

        let result = engine.search(&board, side, config.limits());
        let Some(mut mv) = result.best_move else {
            bail!("{} returned no move for {side}", engine.name());
        };
        if leaves_in_check(&board, side, mv) {
            let replacement = best_legal_move(&board, side, result.depth, config);
            if replacement.is_none() {
                bail!("{side} has no legal move but is not mated");
            }
            warn!(rejected = %mv, replacement = %replacement, "engine move leaves king in check");
            mv = replacement;
        }

        info!(ply = moves.len() + 1, side = %side, mv = %mv, score = result.score, "move played");
        board.apply_in_place(mv);
        moves.push(mv);
        side = side.other();
    };

    Ok(SelfPlayReport {
        moves,
        final_board: board,
        side,
        outcome,
    })
}

/// Best move for `side` among the moves that keep its king safe, or
/// `Move::NONE` if there are none.
pub fn best_legal_move(board: &Board, side: Color, depth: u8, config: &SearchConfig) -> Move {
    let tc = TimeControl::default();
    Searcher::new(config, &tc).best_of(board, side, depth, legal_moves(board, side))
}
