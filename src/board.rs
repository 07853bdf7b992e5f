// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::error::ChessError;
use crate::types::{Color, Piece, PieceKind, Square, TableIndex, BACK_RANK, COLORS};

lazy_static! {
    static ref STARTING_BOARD: Board = {
        let mut board = Board::empty();
        for &color in &COLORS {
            for (col, &kind) in BACK_RANK.iter().enumerate() {
                let col = col as i32;
                let back = Square::new(color.back_row(), col).unwrap();
                let pawn = Square::new(color.pawn_row(), col).unwrap();
                board.place(Piece::new(kind, color), back);
                board.place(Piece::new(PieceKind::Pawn, color), pawn);
            }
        }

        board
    };
}

/// The 8x8 grid of optional pieces. A Board is the single source of truth for
/// occupancy; it knows nothing about turns or legality.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

//
// Board state getters
//

impl Board {
    /// Constructs a board with no pieces on it.
    pub const fn empty() -> Board {
        Board {
            squares: [None; 64],
        }
    }

    /// Constructs a board in the standard starting layout.
    pub fn starting_position() -> Board {
        *STARTING_BOARD
    }

    pub fn occupant(&self, square: Square) -> Option<Piece> {
        self.squares[square.as_index()]
    }

    /// Occupant lookup for callers holding raw coordinates.
    pub fn occupant_at(&self, row: i32, col: i32) -> Result<Option<Piece>, ChessError> {
        let square = Square::new(row, col)?;
        Ok(self.occupant(square))
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.occupant(square).is_none()
    }

    /// Iterates over every occupied square holding a piece of the given color.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.occupant(sq) {
            Some(piece) if piece.color == color => Some((sq, piece)),
            _ => None,
        })
    }

    /// Finds the king of the given color. If a test position holds several,
    /// the first one in row order is returned.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|&(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }
}

//
// Board manipulation
//

impl Board {
    /// Writes a piece to a square, replacing anything already there.
    pub fn place(&mut self, piece: Piece, square: Square) {
        self.squares[square.as_index()] = Some(piece);
    }

    /// Empties a square, returning the piece that was on it.
    pub fn clear(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.as_index()].take()
    }

    /// Moves whatever is on `from` to `to`, discarding the previous occupant
    /// of `to` and returning it. No legality checking is done here. Moving
    /// from an empty square does nothing.
    pub fn move_raw(&mut self, from: Square, to: Square) -> Option<Piece> {
        let piece = match self.clear(from) {
            Some(piece) => piece,
            None => return None,
        };

        let captured = self.clear(to);
        self.place(piece, to);
        captured
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

// Row 0 is printed first, so White sits at the bottom. The alternate form
// (`{:#}`) uses figurines instead of FEN letters.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..8 {
            for col in 0..8 {
                let sq = Square::new(row, col).map_err(|_| fmt::Error)?;
                match self.occupant(sq) {
                    Some(piece) if f.alternate() => write!(f, " {} ", piece.glyph())?,
                    Some(piece) => write!(f, " {} ", piece)?,
                    None => write!(f, " . ")?,
                }
            }

            writeln!(f, "| {}", 8 - row)?;
        }

        for _ in 0..8 {
            write!(f, "---")?;
        }

        writeln!(f)?;
        for file in "abcdefgh".chars() {
            write!(f, " {} ", file)?;
        }

        writeln!(f)?;
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Board({})", self.as_fen_placement())
    }
}
