use crate::{board::Board, types::*};

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Generate every pseudo-legal move for `side`, returning a freshly
/// allocated vector.
///
/// Moves obey piece-movement rules only; a move that leaves the mover's
/// own king attacked is still produced. Callers must treat the result as
/// an unordered set.
pub fn generate(board: &Board, side: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    generate_into(board, side, &mut out);
    out
}

/// Generate pseudo-legal moves into the provided buffer, reusing it across calls.
pub fn generate_into(board: &Board, side: Color, out: &mut Vec<Move>) {
    out.clear();
    for (from, pc) in board.pieces() {
        if pc.color != side {
            continue;
        }
        match pc.kind {
            PieceKind::Pawn => gen_pawn(board, from, side, out),
            PieceKind::Knight => gen_leaper(board, from, side, out, &KNIGHT_DELTAS),
            PieceKind::Bishop => gen_slider(board, from, side, out, &DIAGONALS),
            PieceKind::Rook => gen_slider(board, from, side, out, &ORTHOGONALS),
            PieceKind::Queen => {
                gen_slider(board, from, side, out, &DIAGONALS);
                gen_slider(board, from, side, out, &ORTHOGONALS);
            }
            PieceKind::King => gen_leaper(board, from, side, out, &KING_DELTAS),
        }
    }
}

fn gen_pawn(board: &Board, from: Square, c: Color, out: &mut Vec<Move>) {
    // White advances toward row 0, black toward row 7.
    let (dir, start_row): (i8, i8) = match c {
        Color::White => (-1, 6),
        Color::Black => (1, 1),
    };

    // forward 1
    if let Some(to) = from.offset(dir, 0)
        && board.is_empty(to)
    {
        out.push(Move::new(from, to));

        // forward 2 from start
        if from.row == start_row
            && let Some(to2) = from.offset(2 * dir, 0)
            && board.is_empty(to2)
        {
            out.push(Move::new(from, to2));
        }
    }

    // diagonal captures
    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc)
            && board.color_at(to) == Some(c.other())
        {
            out.push(Move::new(from, to));
        }
    }
}

fn gen_leaper(board: &Board, from: Square, c: Color, out: &mut Vec<Move>, deltas: &[(i8, i8)]) {
    for &(dr, dc) in deltas {
        if let Some(to) = from.offset(dr, dc)
            && board.color_at(to) != Some(c)
        {
            out.push(Move::new(from, to));
        }
    }
}

fn gen_slider(board: &Board, from: Square, c: Color, out: &mut Vec<Move>, dirs: &[(i8, i8)]) {
    for &(dr, dc) in dirs {
        let mut cur = from.offset(dr, dc);
        while let Some(to) = cur {
            match board.color_at(to) {
                None => out.push(Move::new(from, to)),
                Some(owner) if owner != c => {
                    out.push(Move::new(from, to));
                    break;
                }
                _ => break,
            }
            cur = to.offset(dr, dc);
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
