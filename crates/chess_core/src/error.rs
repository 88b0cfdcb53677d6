use thiserror::Error;

use crate::types::Color;

/// Problems with a board handed to the core from outside.
///
/// Search and move generation never produce these; they only come from
/// parsing and from explicit validation of externally built boards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("invalid FEN: {0}")]
    InvalidFen(String),
    #[error("no {0} king on the board")]
    MissingKing(Color),
    #[error("more than one {0} king on the board")]
    ExtraKing(Color),
}
