//! Position arguments: a FEN string or `startpos`.

use anyhow::{Context, Result};
use chess_core::{side_from_fen, Board, Color};
use tracing::warn;

/// Parses a side argument (`w`, `b`, `white`, `black`).
pub fn parse_side(s: &str) -> Result<Color, String> {
    match s.to_ascii_lowercase().as_str() {
        "w" | "white" => Ok(Color::White),
        "b" | "black" => Ok(Color::Black),
        other => Err(format!("expected 'w' or 'b', got '{other}'")),
    }
}

/// Builds the board and side to move from a position argument.
///
/// The side comes from `side` if given, otherwise from the FEN's second
/// field, otherwise white. Boards without exactly one king per side are
/// rejected.
pub fn parse_position(fen: &str, side: Option<Color>) -> Result<(Board, Color)> {
    let fen = fen.trim();
    if fen.eq_ignore_ascii_case("startpos") {
        return Ok((Board::startpos(), side.unwrap_or(Color::White)));
    }

    let board = Board::from_fen(fen).with_context(|| format!("bad position '{fen}'"))?;
    let written = side_from_fen(fen)?;
    if let (Some(given), Some(written)) = (side, written)
        && given != written
    {
        warn!(%given, %written, "side argument overrides the FEN side to move");
    }

    board.validate().context("position is not playable")?;
    Ok((board, side.or(written).unwrap_or(Color::White)))
}
