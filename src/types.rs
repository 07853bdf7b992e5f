// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use num_traits::{FromPrimitive, ToPrimitive};
use std::convert::TryFrom;
use std::fmt::{self, Display, Write};
use std::str::FromStr;

use crate::error::ChessError;

// TableIndex is a trait for all types that can serve as an index into a table.
// It is common to use these types as indices into tables, so this trait allows
// any type implementing To and FromPrimitive to be used as table indices.
pub trait TableIndex {
    fn as_index(self) -> usize;
    fn from_index(idx: usize) -> Self;
}

impl<T> TableIndex for T
where
    T: FromPrimitive + ToPrimitive,
{
    fn as_index(self) -> usize {
        self.to_u32().unwrap() as usize
    }

    fn from_index(idx: usize) -> T {
        <T as FromPrimitive>::from_u64(idx as u64).unwrap()
    }
}

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: i32 = 8;

/// A single cell of the board, addressed by row and column.
///
/// Row 0 is Black's back rank and row 7 is White's back rank; column 0 is the
/// a-file. A `Square` can only be constructed in range, so anything holding
/// one may index the board without further checks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Constructs a square, failing with `OutOfBounds` if either coordinate
    /// falls outside of `[0, 7]`.
    pub fn new(row: i32, col: i32) -> Result<Square, ChessError> {
        if !in_range(row) || !in_range(col) {
            return Err(ChessError::OutOfBounds { row, col });
        }

        Ok(Square {
            row: row as u8,
            col: col as u8,
        })
    }

    pub fn row(self) -> i32 {
        i32::from(self.row)
    }

    pub fn col(self) -> i32 {
        i32::from(self.col)
    }

    /// Returns the square `dr` rows and `dc` columns away from this one, if
    /// it is still on the board.
    pub fn offset(self, dr: i32, dc: i32) -> Option<Square> {
        Square::new(self.row() + dr, self.col() + dc).ok()
    }

    /// Iterator over all 64 squares, row 0 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

fn in_range(coord: i32) -> bool {
    coord >= 0 && coord < BOARD_SIZE
}

impl FromPrimitive for Square {
    fn from_i64(n: i64) -> Option<Square> {
        if n < 0 {
            return None;
        }

        <Square as FromPrimitive>::from_u64(n as u64)
    }

    fn from_u64(n: u64) -> Option<Square> {
        if n >= 64 {
            return None;
        }

        Some(Square {
            row: (n >> 3) as u8,
            col: (n & 7) as u8,
        })
    }
}

impl ToPrimitive for Square {
    fn to_i64(&self) -> Option<i64> {
        self.to_u64().map(|n| n as i64)
    }

    fn to_u64(&self) -> Option<u64> {
        Some(u64::from(self.row) * 8 + u64::from(self.col))
    }
}

impl TryFrom<(i32, i32)> for Square {
    type Error = ChessError;

    fn try_from((row, col): (i32, i32)) -> Result<Self, Self::Error> {
        Square::new(row, col)
    }
}

// Algebraic names: the a-file is column 0, rank 8 is row 0.
impl Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char((b'a' + self.col) as char)?;
        f.write_char((b'8' - self.row) as char)
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Square, ChessError> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(ChessError::InvalidSquareName(s.to_owned()));
        }

        let (file, rank) = (bytes[0], bytes[1]);
        if file < b'a' || file > b'h' || rank < b'1' || rank > b'8' {
            return Err(ChessError::InvalidSquareName(s.to_owned()));
        }

        Square::new(i32::from(b'8' - rank), i32::from(file - b'a'))
    }
}

impl From<Square> for String {
    fn from(square: Square) -> String {
        square.to_string()
    }
}

impl TryFrom<String> for Square {
    type Error = ChessError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, Serialize, Deserialize,
)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn toggle(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// The row change of a single pawn step for this color.
    pub fn forward(self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// The row this color's pawns start on.
    pub fn pawn_row(self) -> i32 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// The row this color's major and minor pieces start on.
    pub fn back_row(self) -> i32 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Color::White => "white",
            Color::Black => "black",
        };
        f.write_str(name)
    }
}

pub static COLORS: [Color; 2] = [Color::White, Color::Black];

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, Serialize, Deserialize,
)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let chr = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        f.write_char(chr)
    }
}

pub static PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

/// Back rank order, from the a-file to the h-file.
pub static BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A Piece is a collection of a PieceKind and a Color. Two pieces are the same
/// piece whenever their kind and color agree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Piece {
        Piece { kind, color }
    }

    /// Figurine symbol for this piece.
    pub fn glyph(self) -> char {
        let glyphs = match self.color {
            Color::White => ['♙', '♘', '♗', '♖', '♕', '♔'],
            Color::Black => ['♟', '♞', '♝', '♜', '♛', '♚'],
        };
        glyphs[self.kind.as_index()]
    }
}

impl TryFrom<char> for Piece {
    type Error = ();

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };

        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return Err(()),
        };

        Ok(Piece::new(kind, color))
    }
}

// FEN letters: uppercase for White, lowercase for Black.
impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let lower = self.kind.to_string();
        match self.color {
            Color::White => f.write_str(&lower.to_ascii_uppercase()),
            Color::Black => f.write_str(&lower),
        }
    }
}
