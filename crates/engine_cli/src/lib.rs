//! Front end for the minimax search
//!
//! Parses positions from the command line and drives the engine against
//! itself, stopping on checkmate, stalemate or a ply limit.
//!
//! # Usage
//!
//! ```bash
//! chess-search best-move --fen startpos --depth 4
//! chess-search status --fen "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w"
//! chess-search self-play --plies 40 --config search.toml
//! ```

mod position;
mod self_play;

pub use position::*;
pub use self_play::*;
