use std::fmt;

use crate::error::BoardError;
use crate::types::*;

/// 8x8 grid of pieces, row-major, row 0 = black's back rank.
///
/// `Board` is a plain value: search copies it once per candidate move and
/// applies the move to the copy, so no instance is ever shared mutably
/// between threads. The king squares are cached and kept current by every
/// mutation, which makes king lookup O(1).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; 64],
    kings: [Option<Square>; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            cells: [None; 64],
            kings: [None; 2],
        }
    }

    pub fn startpos() -> Self {
        let mut b = Board::empty();

        // Pawns
        for col in 0..8 {
            b.set(Square { row: 6, col }, Some(Piece::new(Color::White, PieceKind::Pawn)));
            b.set(Square { row: 1, col }, Some(Piece::new(Color::Black, PieceKind::Pawn)));
        }
        // Back ranks
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back.iter().enumerate() {
            let col = col as i8;
            b.set(Square { row: 7, col }, Some(Piece::new(Color::White, kind)));
            b.set(Square { row: 0, col }, Some(Piece::new(Color::Black, kind)));
        }
        b
    }

    /// Parses the piece-placement field of a FEN string. Any further
    /// fields (side to move, castling, ...) are ignored here; see
    /// [`side_from_fen`] for the side-to-move field.
    pub fn from_fen(fen: &str) -> Result<Self, BoardError> {
        let placement = fen
            .split_whitespace()
            .next()
            .ok_or_else(|| BoardError::InvalidFen("empty string".into()))?;

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(BoardError::InvalidFen(format!(
                "expected 8 ranks, found {}",
                ranks.len()
            )));
        }

        // FEN lists rank 8 first, which is row 0 here.
        let mut board = Board::empty();
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    if !(1..=8).contains(&d) {
                        return Err(BoardError::InvalidFen(format!("bad empty-run digit '{ch}'")));
                    }
                    col += d as i8;
                } else {
                    let pc = Piece::from_char(ch).ok_or_else(|| {
                        BoardError::InvalidFen(format!("invalid piece char '{ch}'"))
                    })?;
                    let sq = Square::new(row as i8, col).ok_or_else(|| {
                        BoardError::InvalidFen(format!("too many files in rank {}", 8 - row))
                    })?;
                    board.set(sq, Some(pc));
                    col += 1;
                }
                if col > 8 {
                    return Err(BoardError::InvalidFen(format!(
                        "too many files in rank {}",
                        8 - row
                    )));
                }
            }
            if col != 8 {
                return Err(BoardError::InvalidFen(format!(
                    "not enough files in rank {}",
                    8 - row
                )));
            }
        }
        Ok(board)
    }

    /// Piece-placement field only.
    pub fn to_fen(&self) -> String {
        let mut out = String::with_capacity(72);
        for row in 0..8i8 {
            let mut run = 0;
            for col in 0..8i8 {
                match self.piece_at(Square { row, col }) {
                    Some(pc) => {
                        if run > 0 {
                            out.push(char::from(b'0' + run));
                            run = 0;
                        }
                        out.push(pc.to_char());
                    }
                    None => run += 1,
                }
            }
            if run > 0 {
                out.push(char::from(b'0' + run));
            }
            if row < 7 {
                out.push('/');
            }
        }
        out
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        is_empty(self.piece_at(sq))
    }

    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        color_of(self.piece_at(sq))
    }

    pub fn set(&mut self, sq: Square, pc: Option<Piece>) {
        let old = self.cells[sq.index()];
        self.cells[sq.index()] = pc;

        if let Some(old) = old
            && old.kind == PieceKind::King
            && self.kings[old.color.idx()] == Some(sq)
        {
            self.kings[old.color.idx()] = self.scan_king(old.color);
        }
        if let Some(pc) = pc
            && pc.kind == PieceKind::King
        {
            let cached = self.kings[pc.color.idx()];
            // Keep the first king in scan order if several exist.
            if cached.is_none_or(|k| sq.index() < k.index()) {
                self.kings[pc.color.idx()] = Some(sq);
            }
        }
    }

    /// Copy of the board with `mv` applied. No validation is done: the
    /// piece on `from` lands on `to`, whatever stood there is discarded.
    /// `Move::NONE` leaves the board unchanged.
    #[must_use]
    pub fn apply(&self, mv: Move) -> Board {
        let mut next = *self;
        next.apply_in_place(mv);
        next
    }

    pub fn apply_in_place(&mut self, mv: Move) {
        if !mv.from.is_on_board() || !mv.to.is_on_board() {
            return;
        }
        let moved = self.piece_at(mv.from);
        self.set(mv.from, None);
        self.set(mv.to, moved);
    }

    /// Cached king square, or `MissingKing` when `c` has no king.
    pub fn king_square(&self, c: Color) -> Result<Square, BoardError> {
        self.kings[c.idx()].ok_or(BoardError::MissingKing(c))
    }

    fn scan_king(&self, c: Color) -> Option<Square> {
        self.cells
            .iter()
            .position(|&cell| cell == Some(Piece::new(c, PieceKind::King)))
            .map(Square::from_index)
    }

    /// Checks the one-king-per-side invariant the core assumes but never
    /// enforces on its own.
    pub fn validate(&self) -> Result<(), BoardError> {
        for c in [Color::White, Color::Black] {
            let kings = self
                .pieces()
                .filter(|(_, pc)| pc.color == c && pc.kind == PieceKind::King)
                .count();
            match kings {
                0 => return Err(BoardError::MissingKing(c)),
                1 => {}
                _ => return Err(BoardError::ExtraKing(c)),
            }
        }
        Ok(())
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.map(|pc| (Square::from_index(i), pc)))
    }

    /// Vertical mirror with every piece's color swapped.
    #[must_use]
    pub fn flipped(&self) -> Board {
        let mut out = Board::empty();
        for (sq, pc) in self.pieces() {
            out.set(sq.mirrored(), Some(Piece::new(pc.color.other(), pc.kind)));
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8i8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8i8 {
                let ch = self
                    .piece_at(Square { row, col })
                    .map(Piece::to_char)
                    .unwrap_or('.');
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

/// Reads the optional side-to-move field (`w` / `b`) of a FEN string.
pub fn side_from_fen(fen: &str) -> Result<Option<Color>, BoardError> {
    match fen.split_whitespace().nth(1) {
        None => Ok(None),
        Some("w") => Ok(Some(Color::White)),
        Some("b") => Ok(Some(Color::Black)),
        Some(other) => Err(BoardError::InvalidFen(format!(
            "invalid side to move '{other}'"
        ))),
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
