use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("White"),
            Color::Black => f.write_str("Black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// FEN letter: uppercase for white, lowercase for black.
    pub fn to_char(self) -> char {
        let c = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn from_char(ch: char) -> Option<Piece> {
        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece { color, kind })
    }
}

/// True when the cell holds no piece.
#[inline]
pub fn is_empty(cell: Option<Piece>) -> bool {
    cell.is_none()
}

/// Color of the piece in the cell, if any.
#[inline]
pub fn color_of(cell: Option<Piece>) -> Option<Color> {
    cell.map(|pc| pc.color)
}

/// A board coordinate. Row 0 is black's back rank (rank 8), row 7 is
/// white's back rank (rank 1); col 0..7 are files a..h.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    /// Off-board coordinate carried by [`Move::NONE`].
    pub const NONE: Square = Square { row: -1, col: -1 };

    /// Returns the square if `(row, col)` lies on the board.
    pub fn new(row: i8, col: i8) -> Option<Square> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square { row, col })
        } else {
            None
        }
    }

    pub fn from_index(idx: usize) -> Square {
        Square {
            row: (idx / 8) as i8,
            col: (idx % 8) as i8,
        }
    }

    pub fn is_on_board(self) -> bool {
        (0..8).contains(&self.row) && (0..8).contains(&self.col)
    }

    /// Flat row-major index. Only meaningful for on-board squares.
    #[inline]
    pub fn index(self) -> usize {
        (self.row as usize) * 8 + self.col as usize
    }

    #[inline]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        Square::new(self.row + dr, self.col + dc)
    }

    /// Same file, row mirrored (`7 - row`).
    pub fn mirrored(self) -> Square {
        Square {
            row: 7 - self.row,
            col: self.col,
        }
    }

    /// Parses an algebraic coordinate such as `e4`.
    pub fn parse(c: &str) -> Option<Square> {
        let b = c.as_bytes();
        if b.len() != 2 {
            return None;
        }
        let f = b[0];
        let r = b[1];
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return None;
        }
        let col = (f - b'a') as i8;
        let rank = (r - b'1') as i8;
        Square::new(7 - rank, col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_on_board() {
            return f.write_str("--");
        }
        let file = (b'a' + self.col as u8) as char;
        let rank = (b'1' + (7 - self.row) as u8) as char;
        write!(f, "{file}{rank}")
    }
}

/// A from/to pair plus the score annotation written by the search.
///
/// `score` carries no meaning until a search has evaluated the move's
/// subtree. Promotion, castling and en-passant are never encoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub score: i32,
}

impl Move {
    /// Sentinel returned when the side to move has no moves at all.
    pub const NONE: Move = Move {
        from: Square::NONE,
        to: Square::NONE,
        score: i32::MIN,
    };

    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to, score: 0 }
    }

    pub fn is_none(&self) -> bool {
        !self.from.is_on_board() || !self.to.is_on_board()
    }

    /// Same squares, scores ignored.
    pub fn same_squares(&self, other: &Move) -> bool {
        self.from == other.from && self.to == other.to
    }

    /// Coordinate key used for deterministic tie-breaking.
    pub fn key(&self) -> (i8, i8, i8, i8) {
        (self.from.row, self.from.col, self.to.row, self.to.col)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return f.write_str("0000");
        }
        write!(f, "{}{}", self.from, self.to)
    }
}
