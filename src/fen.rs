// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//
// The routines in this file are oriented around the piece placement field of
// FEN, a simple notation for chess positions. Boards can be created by parsing
// a placement and a placement can be produced from any board.
//
// Placements list rank 8 first, which is row 0 of the board, so rows are
// written in the same order the board stores them.
//

use std::convert::TryFrom;
use std::fmt::{self, Write};

use crate::board::Board;
use crate::types::{Color, Piece, Square};

/// Possible errors that can arise when parsing a FEN placement into a `Board`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FenParseError {
    UnexpectedChar(char),
    UnexpectedEnd,
    InvalidDigit,
    FileDoesNotSumToEight,
    UnknownPiece,
    WrongRankCount,
    InvalidSideToMove,
}

impl fmt::Display for FenParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FenParseError::UnexpectedChar(c) => write!(f, "unexpected character {:?}", c),
            FenParseError::UnexpectedEnd => f.write_str("unexpected end of input"),
            FenParseError::InvalidDigit => f.write_str("empty-square count must be 1 through 8"),
            FenParseError::FileDoesNotSumToEight => f.write_str("rank does not sum to eight files"),
            FenParseError::UnknownPiece => f.write_str("unknown piece letter"),
            FenParseError::WrongRankCount => f.write_str("placement must have eight ranks"),
            FenParseError::InvalidSideToMove => f.write_str("side to move must be 'w' or 'b'"),
        }
    }
}

impl Board {
    /// Constructs a board from the piece placement field of a FEN string, e.g.
    /// `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`.
    pub fn from_fen_placement<S: AsRef<str>>(placement: S) -> Result<Board, FenParseError> {
        let mut board = Board::empty();
        let ranks: Vec<&str> = placement.as_ref().split('/').collect();
        if ranks.len() != 8 {
            return Err(FenParseError::WrongRankCount);
        }

        for (row, rank) in ranks.iter().enumerate() {
            if rank.is_empty() {
                return Err(FenParseError::UnexpectedEnd);
            }

            let mut col = 0;
            for c in rank.chars() {
                // digits 1 through 8 indicate empty squares.
                if c.is_ascii_digit() {
                    if c < '1' || c > '8' {
                        return Err(FenParseError::InvalidDigit);
                    }

                    col += c as i32 - '0' as i32;
                    if col > 8 {
                        return Err(FenParseError::FileDoesNotSumToEight);
                    }

                    continue;
                }

                if !c.is_ascii_alphabetic() {
                    return Err(FenParseError::UnexpectedChar(c));
                }

                // if it's not a digit, it represents a piece.
                let piece = Piece::try_from(c).map_err(|_| FenParseError::UnknownPiece)?;
                let square =
                    Square::new(row as i32, col).map_err(|_| FenParseError::FileDoesNotSumToEight)?;
                board.place(piece, square);
                col += 1;
            }

            if col != 8 {
                return Err(FenParseError::FileDoesNotSumToEight);
            }
        }

        Ok(board)
    }

    pub fn as_fen_placement(&self) -> String {
        let mut buf = String::new();
        for row in 0..8 {
            let mut empty_squares = 0;
            for col in 0..8 {
                let square = match Square::new(row, col) {
                    Ok(square) => square,
                    Err(_) => continue,
                };

                if let Some(piece) = self.occupant(square) {
                    if empty_squares != 0 {
                        let _ = write!(&mut buf, "{}", empty_squares);
                    }
                    let _ = write!(&mut buf, "{}", piece);
                    empty_squares = 0;
                } else {
                    empty_squares += 1;
                }
            }

            if empty_squares != 0 {
                let _ = write!(&mut buf, "{}", empty_squares);
            }

            if row != 7 {
                buf.push('/');
            }
        }

        buf
    }
}

/// Parses a placement optionally followed by a side to move (`w` or `b`).
/// Any remaining FEN fields are ignored since the game core does not track
/// castling rights, en passant or clocks. White moves when no side is given.
pub fn parse_position(fen: &str) -> Result<(Board, Color), FenParseError> {
    let mut fields = fen.split_whitespace();
    let placement = fields.next().ok_or(FenParseError::UnexpectedEnd)?;
    let board = Board::from_fen_placement(placement)?;
    let side = match fields.next() {
        None | Some("w") => Color::White,
        Some("b") => Color::Black,
        Some(_) => return Err(FenParseError::InvalidSideToMove),
    };

    Ok((board, side))
}
