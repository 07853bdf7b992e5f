// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Movement rules for every kind of piece.
//!
//! Everything in this module is a pure function of a borrowed `Board`. The
//! rules are purely geometric: they know nothing about whose turn it is and,
//! like the board they inspect, they do not consider whether a move leaves
//! the mover's own king in check.

use crate::board::Board;
use crate::types::{Piece, PieceKind, Square};

/// Returns whether the piece on `from` may move to `to`.
///
/// A move is illegal if there is no piece on `from`, if `from == to`, or if
/// `to` holds a piece of the mover's own color. Otherwise the mover's
/// movement rule decides.
pub fn is_legal(board: &Board, from: Square, to: Square) -> bool {
    let piece = match board.occupant(from) {
        Some(piece) => piece,
        None => return false,
    };

    if let Some(target) = board.occupant(to) {
        if target.color == piece.color {
            return false;
        }
    }

    from != to && follows_movement_rule(board, piece, from, to)
}

/// Returns whether the piece on `from` attacks `to`. This is the legality test
/// without the self-capture rule, which is what check detection wants: the
/// target is always an enemy king.
pub fn attacks(board: &Board, from: Square, to: Square) -> bool {
    match board.occupant(from) {
        Some(piece) => from != to && follows_movement_rule(board, piece, from, to),
        None => false,
    }
}

/// Every square the piece on `from` may legally move to, in row order.
pub fn legal_destinations(board: &Board, from: Square) -> Vec<Square> {
    Square::all().filter(|&to| is_legal(board, from, to)).collect()
}

fn follows_movement_rule(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    let dr = to.row() - from.row();
    let dc = to.col() - from.col();
    match piece.kind {
        PieceKind::Rook => is_straight(dr, dc) && path_is_clear(board, from, to),
        PieceKind::Bishop => is_diagonal(dr, dc) && path_is_clear(board, from, to),
        PieceKind::Queen => {
            (is_straight(dr, dc) || is_diagonal(dr, dc)) && path_is_clear(board, from, to)
        }
        PieceKind::Knight => is_knight_jump(dr, dc),
        PieceKind::King => dr.abs() <= 1 && dc.abs() <= 1 && (dr, dc) != (0, 0),
        PieceKind::Pawn => pawn_move_valid(board, piece, from, to),
    }
}

fn is_straight(dr: i32, dc: i32) -> bool {
    (dr == 0) != (dc == 0)
}

fn is_diagonal(dr: i32, dc: i32) -> bool {
    dr != 0 && dr.abs() == dc.abs()
}

fn is_knight_jump(dr: i32, dc: i32) -> bool {
    match (dr.abs(), dc.abs()) {
        (1, 2) | (2, 1) => true,
        _ => false,
    }
}

fn pawn_move_valid(board: &Board, pawn: Piece, from: Square, to: Square) -> bool {
    let dr = to.row() - from.row();
    let dc = to.col() - from.col();
    let forward = pawn.color.forward();

    if dc == 0 {
        // Straight pushes never capture.
        if dr == forward {
            return board.is_empty(to);
        }

        if dr == 2 * forward && from.row() == pawn.color.pawn_row() {
            return path_is_clear(board, from, to) && board.is_empty(to);
        }

        return false;
    }

    // Diagonal steps must capture an opposing piece.
    if dc.abs() == 1 && dr == forward {
        return match board.occupant(to) {
            Some(target) => target.color != pawn.color,
            None => false,
        };
    }

    false
}

/// Obstruction check: true if every square strictly between `from` and `to`
/// is empty. The two squares must share a row, a column or a diagonal; the
/// destination itself is not inspected.
pub fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let dr = to.row() - from.row();
    let dc = to.col() - from.col();
    debug_assert!(
        is_straight(dr, dc) || is_diagonal(dr, dc),
        "path_is_clear on a non-line move"
    );

    let (step_r, step_c) = (dr.signum(), dc.signum());
    let distance = dr.abs().max(dc.abs());
    (1..distance).all(|i| match from.offset(i * step_r, i * step_c) {
        Some(sq) => board.is_empty(sq),
        None => false,
    })
}
