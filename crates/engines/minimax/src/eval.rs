//! Material plus piece-square evaluation

use chess_core::{Board, Color, PieceKind};

use crate::pst;

/// Non-pawn material at or below which the king switches to its
/// centralization table.
pub const ENDGAME_MATERIAL: i32 = 3000;

/// Evaluates the position with a fixed sign convention.
///
/// Returns a score in centipawns:
/// - Positive = good for white
/// - Negative = good for black
///
/// The result does not depend on who is to move.
pub fn evaluate(board: &Board) -> i32 {
    evaluate_detailed(board).total()
}

/// Per-term evaluation, mostly for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalBreakdown {
    pub material: i32,
    pub positional: i32,
    pub endgame: bool,
}

impl EvalBreakdown {
    pub fn total(&self) -> i32 {
        self.material + self.positional
    }
}

pub fn evaluate_detailed(board: &Board) -> EvalBreakdown {
    let endgame = is_endgame(board);
    let mut material = 0i32;
    let mut positional = 0i32;

    for (sq, pc) in board.pieces() {
        let table = pst::table(pc.kind, endgame);
        match pc.color {
            Color::White => {
                material += piece_value(pc.kind);
                positional += table[sq.index()];
            }
            Color::Black => {
                material -= piece_value(pc.kind);
                positional -= table[sq.mirrored().index()];
            }
        }
    }

    EvalBreakdown {
        material,
        positional,
        endgame,
    }
}

/// Unsigned sum of queens, rooks and minor pieces of both colors.
pub fn phase_material(board: &Board) -> i32 {
    board.pieces().map(|(_, pc)| phase_value(pc.kind)).sum()
}

pub fn is_endgame(board: &Board) -> bool {
    phase_material(board) <= ENDGAME_MATERIAL
}

/// Returns the material value of a piece in centipawns.
///
/// The king's value is large but finite, so losing it is a decisive
/// material swing rather than a game-over marker.
#[inline]
pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20_000,
    }
}

#[inline]
fn phase_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Queen => 900,
        PieceKind::Rook => 500,
        PieceKind::Bishop | PieceKind::Knight => 300,
        PieceKind::Pawn | PieceKind::King => 0,
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
