// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[macro_use]
extern crate num_derive;
#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

mod board;
pub mod check;
mod error;
mod fen;
pub mod legality;
mod record;
mod session;
mod types;

pub use board::Board;
pub use check::{CheckStatus, Checkers};
pub use error::ChessError;
pub use fen::{parse_position, FenParseError};
pub use record::{CsvMoveRecorder, MoveRecord, MoveRecorder, NullMoveRecorder};
pub use session::{
    GameSession, MoveResult, SelectionResult, SessionOptions, SessionState, Snapshot,
};
pub use types::{Color, Piece, PieceKind, Square, TableIndex, COLORS, PIECE_KINDS};

/// Starts a new game in the standard layout with White to move.
pub fn new_game() -> GameSession {
    GameSession::new()
}
