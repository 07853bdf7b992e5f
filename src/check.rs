// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use arrayvec::ArrayVec;

use crate::board::Board;
use crate::legality;
use crate::types::{Color, Square, COLORS};

/// At most two checking pieces are ever reported; a double check is
/// indistinguishable from a single check for reporting purposes.
pub type Checkers = ArrayVec<[Square; 2]>;

bitflags! {
    /// The set of colors whose king is currently attacked.
    pub struct CheckStatus: u8 {
        const NONE = 0;
        const WHITE = 0b0000_0001;
        const BLACK = 0b0000_0010;
    }
}

impl CheckStatus {
    pub fn of(color: Color) -> CheckStatus {
        match color {
            Color::White => CheckStatus::WHITE,
            Color::Black => CheckStatus::BLACK,
        }
    }

    /// Classifies both kings on the given board.
    pub fn compute(board: &Board) -> CheckStatus {
        let mut status = CheckStatus::NONE;
        for &color in &COLORS {
            if is_in_check(board, color) {
                status |= CheckStatus::of(color);
            }
        }

        status
    }

    pub fn is_in_check(self, color: Color) -> bool {
        self.contains(CheckStatus::of(color))
    }
}

/// Returns the squares of up to two pieces attacking `color`'s king.
///
/// The detector is parameterized by which king to test, not by whose turn it
/// is. Every piece of the opposite color is asked whether it could move onto
/// the king's square, and the scan stops as soon as two attackers are found.
pub fn checkers(board: &Board, color: Color) -> Checkers {
    let mut found = Checkers::new();
    let king = match board.king_square(color) {
        Some(king) => king,
        None => {
            // Kings are never captured through a session, so this is a bug in
            // whoever built the board.
            error!("no {} king on board {:?}", color, board);
            return found;
        }
    };

    for (attacker, _) in board.pieces(color.toggle()) {
        if legality::attacks(board, attacker, king) {
            found.push(attacker);
            if found.is_full() {
                break;
            }
        }
    }

    found
}

pub fn is_in_check(board: &Board, color: Color) -> bool {
    !checkers(board, color).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Piece, PieceKind};

    fn board(placement: &str) -> Board {
        Board::from_fen_placement(placement).unwrap()
    }

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn starting_position_is_quiet() {
        let b = Board::starting_position();
        assert!(!is_in_check(&b, Color::White));
        assert!(!is_in_check(&b, Color::Black));
        assert_eq!(CheckStatus::NONE, CheckStatus::compute(&b));
    }

    #[test]
    fn queen_along_back_rank() {
        let b = board("Q3k3/8/8/8/8/8/8/4K3");
        assert!(is_in_check(&b, Color::Black));
        assert!(!is_in_check(&b, Color::White));
        assert_eq!(&[sq("a8")], &checkers(&b, Color::Black)[..]);
    }

    #[test]
    fn blocked_slider_does_not_check() {
        let b = board("Q2nk3/8/8/8/8/8/8/4K3");
        assert!(!is_in_check(&b, Color::Black));
    }

    #[test]
    fn sliding_piece_pin() {
        // the white pawn is blocking the queen
        let b = board("8/8/4q3/8/8/8/4P3/4K3");
        assert!(!is_in_check(&b, Color::White));
    }

    #[test]
    fn knight_check() {
        let b = board("4k3/8/3N4/8/8/8/8/4K3");
        assert!(is_in_check(&b, Color::Black));
    }

    #[test]
    fn pawn_check_is_directional() {
        let b = board("8/8/8/3k4/4P3/8/8/4K3");
        assert!(is_in_check(&b, Color::Black));

        // pawns never attack backwards
        let b = board("8/8/4P3/3k4/8/8/8/4K3");
        assert!(!is_in_check(&b, Color::Black));
    }

    #[test]
    fn pawn_push_is_not_an_attack() {
        let b = board("8/8/8/8/8/4k3/4P3/4K3");
        assert!(!is_in_check(&b, Color::Black));
    }

    #[test]
    fn fools_mate_check() {
        let b = board("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR");
        assert!(is_in_check(&b, Color::White));
        assert_eq!(CheckStatus::WHITE, CheckStatus::compute(&b));
    }

    #[test]
    fn double_check_stops_at_two() {
        // rook on the file, bishop on the diagonal and a knight all hit e8
        let b = board("4k3/8/3N2B1/8/8/8/8/4R1K1");
        let found = checkers(&b, Color::Black);
        assert_eq!(2, found.len());
        assert!(is_in_check(&b, Color::Black));
    }

    #[test]
    fn both_sides_in_check() {
        let mut b = board("4k3/8/8/8/8/8/8/4K2r");
        b.place(Piece::new(PieceKind::Rook, Color::White), sq("e4"));
        let status = CheckStatus::compute(&b);
        assert!(status.is_in_check(Color::White));
        assert!(status.is_in_check(Color::Black));
    }

    #[test]
    fn missing_king_is_not_in_check() {
        let b = board("8/8/8/8/8/8/8/Q7");
        assert!(!is_in_check(&b, Color::Black));
    }
}
