use crate::{board::Board, movegen::generate, types::*};

pub fn move_to_coord(mv: Move) -> String {
    mv.to_string()
}

/// Parses a coordinate move such as `e2e4` and matches it against the
/// pseudo-legal moves of `side`. Returns `None` if the text is malformed
/// or no generated move has those squares.
pub fn parse_move(board: &Board, side: Color, txt: &str) -> Option<Move> {
    let txt = txt.trim();
    if txt.len() != 4 || !txt.is_ascii() {
        return None;
    }
    let from = Square::parse(&txt[0..2])?;
    let to = Square::parse(&txt[2..4])?;

    generate(board, side)
        .into_iter()
        .find(|m| m.from == from && m.to == to)
}
