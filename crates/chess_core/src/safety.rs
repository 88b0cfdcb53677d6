//! Check, checkmate and stalemate detection.
//!
//! Every query here is built on the pseudo-legal generator: attacks are
//! found by generating the opponent's moves and looking for one that lands
//! on the king, and mate/stalemate by trying each of the side's moves on a
//! copy of the board. That costs one opponent generation per candidate
//! move, which dominates everything but the search itself.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{board::Board, movegen::generate, types::*};

/// Outcome of the king-safety queries for one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        f.write_str(s)
    }
}

/// True if any opponent pseudo-legal move lands on `side`'s king.
///
/// A board without a king for `side` is never in check.
pub fn in_check(board: &Board, side: Color) -> bool {
    let Ok(ksq) = board.king_square(side) else {
        return false;
    };
    is_square_attacked(board, ksq, side.other())
}

/// True if some pseudo-legal move of `by` has `target` as destination.
pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    generate(board, by).iter().any(|mv| mv.to == target)
}

/// True if `mv` leaves the mover's own king attacked.
pub fn leaves_in_check(board: &Board, side: Color, mv: Move) -> bool {
    in_check(&board.apply(mv), side)
}

/// In check, and no pseudo-legal move gets out of it.
pub fn is_checkmate(board: &Board, side: Color) -> bool {
    in_check(board, side) && no_escape(board, side)
}

/// Not in check, yet every pseudo-legal move walks into check.
pub fn is_stalemate(board: &Board, side: Color) -> bool {
    !in_check(board, side) && no_escape(board, side)
}

fn no_escape(board: &Board, side: Color) -> bool {
    generate(board, side)
        .into_iter()
        .all(|mv| leaves_in_check(board, side, mv))
}

/// Pseudo-legal moves that do not leave `side` in check.
///
/// This is the filter a front end applies before accepting a human move.
pub fn legal_moves(board: &Board, side: Color) -> Vec<Move> {
    let mut moves = generate(board, side);
    moves.retain(|&mv| !leaves_in_check(board, side, mv));
    moves
}

/// Combined verdict for `side`.
pub fn status(board: &Board, side: Color) -> GameStatus {
    let checked = in_check(board, side);
    let stuck = no_escape(board, side);
    match (checked, stuck) {
        (true, true) => GameStatus::Checkmate,
        (true, false) => GameStatus::Check,
        (false, true) => GameStatus::Stalemate,
        (false, false) => GameStatus::Ongoing,
    }
}

#[cfg(test)]
#[path = "safety_tests.rs"]
mod safety_tests;
