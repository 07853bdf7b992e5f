// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;
use std::io::{self, Write};

use csv::Writer;

use crate::check::CheckStatus;
use crate::types::{Color, Piece, Square};

/// A move that was committed to a session's board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// One-based count of committed moves, counting both colors.
    pub ply: u32,
    pub mover: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
    pub white_in_check: bool,
    pub black_in_check: bool,
}

impl MoveRecord {
    pub(crate) fn new(
        ply: u32,
        mover: Piece,
        from: Square,
        to: Square,
        captured: Option<Piece>,
        status: CheckStatus,
    ) -> MoveRecord {
        MoveRecord {
            ply,
            mover,
            from,
            to,
            captured,
            white_in_check: status.is_in_check(Color::White),
            black_in_check: status.is_in_check(Color::Black),
        }
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(captured) = self.captured {
            write!(f, "x{}", captured)?;
        }

        if self.white_in_check || self.black_in_check {
            f.write_str("+")?;
        }

        Ok(())
    }
}

pub trait MoveRecorder {
    fn record(&mut self, rec: &MoveRecord) -> io::Result<()>;
}

pub struct NullMoveRecorder;

impl MoveRecorder for NullMoveRecorder {
    fn record(&mut self, _rec: &MoveRecord) -> io::Result<()> {
        Ok(())
    }
}

// CSV cannot hold nested structs, so pieces and squares are flattened into
// their notation.
#[derive(Serialize)]
struct CsvRow {
    ply: u32,
    mover: String,
    from: String,
    to: String,
    captured: Option<String>,
    white_in_check: bool,
    black_in_check: bool,
}

/// Writes one CSV row per committed move, flushing after every row.
pub struct CsvMoveRecorder<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> CsvMoveRecorder<W> {
    pub fn new(writer: W) -> CsvMoveRecorder<W> {
        CsvMoveRecorder {
            writer: Writer::from_writer(writer),
        }
    }

    pub fn into_inner(self) -> io::Result<W> {
        self.writer
            .into_inner()
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))
    }
}

impl<W: Write> MoveRecorder for CsvMoveRecorder<W> {
    fn record(&mut self, rec: &MoveRecord) -> io::Result<()> {
        let row = CsvRow {
            ply: rec.ply,
            mover: rec.mover.to_string(),
            from: rec.from.to_string(),
            to: rec.to.to_string(),
            captured: rec.captured.map(|piece| piece.to_string()),
            white_in_check: rec.white_in_check,
            black_in_check: rec.black_in_check,
        };

        self.writer.serialize(&row)?;
        self.writer.flush()
    }
}
