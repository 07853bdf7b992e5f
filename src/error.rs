// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::error::Error;
use std::fmt;

use crate::fen::FenParseError;

/// Errors that callers of the game core can provoke. None of them leave a
/// session in a different state than it was before the failing call.
///
/// Illegal moves are not errors; they are reported as `MoveResult::Illegal`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChessError {
    /// A coordinate pair fell outside of the 8x8 grid.
    OutOfBounds { row: i32, col: i32 },
    /// A move was attempted with no piece selected.
    NoPieceSelected,
    /// A string did not name a square in algebraic notation.
    InvalidSquareName(String),
    /// A board placement failed to parse.
    Fen(FenParseError),
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChessError::OutOfBounds { row, col } => {
                write!(f, "square ({}, {}) is off the board", row, col)
            }
            ChessError::NoPieceSelected => f.write_str("no piece is selected"),
            ChessError::InvalidSquareName(name) => write!(f, "invalid square name: {:?}", name),
            ChessError::Fen(err) => write!(f, "invalid board placement: {}", err),
        }
    }
}

impl Error for ChessError {}

impl From<FenParseError> for ChessError {
    fn from(err: FenParseError) -> ChessError {
        ChessError::Fen(err)
    }
}
