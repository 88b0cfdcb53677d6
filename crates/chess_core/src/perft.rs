use crate::{board::Board, movegen::generate_into, types::*};

/// Pseudo-legal perft node count.
/// Counts all positions reachable from `board` in exactly `depth` plies,
/// `side` moving first, without filtering moves that leave a king in check.
pub fn perft(board: &Board, side: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(board: &Board, side: Color, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };

        generate_into(board, side, buf);
        if depth == 1 {
            return buf.len() as u64;
        }

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            nodes += inner(&board.apply(mv), side.other(), depth - 1, rest);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(board, side, depth, &mut layers[..])
}
