// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use chess_core::{
    ChessError, Color, GameSession, MoveResult, Piece, PieceKind, SelectionResult,
    SessionOptions, SessionState, Square,
};

fn rc(row: i32, col: i32) -> Square {
    Square::new(row, col).unwrap()
}

fn session_from(fen: &str) -> GameSession {
    GameSession::from_fen(fen, SessionOptions::default()).unwrap()
}

#[test]
fn starting_layout() {
    let session = chess_core::new_game();
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

    for sq in Square::all() {
        let expected = match sq.row() {
            0 => Some(Piece::new(back[sq.col() as usize], Color::Black)),
            1 => Some(Piece::new(PieceKind::Pawn, Color::Black)),
            6 => Some(Piece::new(PieceKind::Pawn, Color::White)),
            7 => Some(Piece::new(back[sq.col() as usize], Color::White)),
            _ => None,
        };
        assert_eq!(expected, session.occupant(sq), "square {}", sq);
    }

    assert_eq!(Color::White, session.to_move());
    assert!(!session.is_in_check(Color::White));
    assert!(!session.is_in_check(Color::Black));
}

#[test]
fn scenario_a_pawn_double_step() {
    let mut session = chess_core::new_game();
    assert_eq!(SelectionResult::Selected, session.select(rc(6, 4)));
    assert_eq!(Ok(MoveResult::Committed(None)), session.attempt_move(rc(4, 4)));
    assert_eq!(None, session.occupant(rc(6, 4)));
    assert_eq!(
        Some(Piece::new(PieceKind::Pawn, Color::White)),
        session.occupant(rc(4, 4))
    );
    assert_eq!(Color::Black, session.to_move());
    assert_eq!(SessionState::AwaitingSelection, session.state());
}

#[test]
fn scenario_b_pawn_triple_step() {
    let mut session = chess_core::new_game();
    session.select(rc(6, 4));
    assert_eq!(Ok(MoveResult::Illegal), session.attempt_move(rc(3, 4)));
    assert_eq!(Color::White, session.to_move());
}

#[test]
fn scenario_c_rook_captures_along_back_rank() {
    let mut session = session_from("4k3/8/8/8/8/4K3/8/R6r w");
    session.select(rc(7, 0));
    assert_eq!(
        Ok(MoveResult::Committed(Some(Piece::new(
            PieceKind::Rook,
            Color::Black
        )))),
        session.attempt_move(rc(7, 7))
    );
    assert_eq!(None, session.occupant(rc(7, 0)));
    assert_eq!(
        Some(Piece::new(PieceKind::Rook, Color::White)),
        session.occupant(rc(7, 7))
    );
}

#[test]
fn scenario_c_blocked_rank() {
    let mut session = session_from("4k3/8/8/8/8/4K3/8/R2n3r w");
    session.select(rc(7, 0));
    let before = *session.board();
    assert_eq!(Ok(MoveResult::Illegal), session.attempt_move(rc(7, 7)));
    assert_eq!(before, *session.board());
}

#[test]
fn scenario_d_queen_checks_along_row() {
    let session = session_from("Q3k3/8/8/8/8/8/8/4K3 w");
    assert!(session.is_in_check(Color::Black));
    assert!(!session.is_in_check(Color::White));
}

#[test]
fn scenario_d_check_after_commit() {
    // the queen slides onto the back rank
    let mut session = session_from("4k3/8/8/8/8/8/8/Q3K3 w");
    assert!(!session.is_in_check(Color::Black));
    assert_eq!(MoveResult::Committed(None), session.play(rc(7, 0), rc(0, 0)));
    assert!(session.is_in_check(Color::Black));
    assert_eq!(Color::Black, session.to_move());
}

#[test]
fn scenario_e_rejected_selections() {
    let mut session = chess_core::new_game();
    assert_eq!(SelectionResult::Rejected, session.select(rc(4, 4)));
    assert_eq!(SessionState::AwaitingSelection, session.state());
    assert_eq!(SelectionResult::Rejected, session.select(rc(1, 4)));
    assert_eq!(SessionState::AwaitingSelection, session.state());
    assert_eq!(
        Err(ChessError::NoPieceSelected),
        session.attempt_move(rc(4, 4))
    );
}

#[test]
fn rejected_moves_never_touch_the_board() {
    let mut session = chess_core::new_game();
    let before = *session.board();
    for from in Square::all() {
        if session.select(from) != SelectionResult::Selected {
            continue;
        }

        let legal = session.legal_destinations();
        for to in Square::all() {
            if legal.contains(&to) {
                continue;
            }

            assert_eq!(Ok(MoveResult::Illegal), session.attempt_move(to));
            assert_eq!(before, *session.board(), "{}{}", from, to);
            assert_eq!(Some(from), session.selected());
        }

        session.select(from);
    }

    assert_eq!(Color::White, session.to_move());
    assert!(session.history().is_empty());
}

#[test]
fn capture_reports_and_replaces() {
    let mut session = chess_core::new_game();
    for &(from, to) in &[("e2", "e4"), ("d7", "d5")] {
        let result = session.play(from.parse().unwrap(), to.parse().unwrap());
        assert_eq!(MoveResult::Committed(None), result);
    }

    let e4 = "e4".parse().unwrap();
    let d5 = "d5".parse().unwrap();
    assert_eq!(
        MoveResult::Committed(Some(Piece::new(PieceKind::Pawn, Color::Black))),
        session.play(e4, d5)
    );
    assert_eq!(None, session.occupant(e4));
    assert_eq!(
        Some(Piece::new(PieceKind::Pawn, Color::White)),
        session.occupant(d5)
    );
    assert_eq!(3, session.history().len());
    assert_eq!(
        Some(Piece::new(PieceKind::Pawn, Color::Black)),
        session.history()[2].captured
    );
}

#[test]
fn scholars_mate_is_reported_as_check() {
    let mut session = chess_core::new_game();
    let moves = ["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"];
    for mov in moves.iter() {
        let from = mov[0..2].parse().unwrap();
        let to = mov[2..4].parse().unwrap();
        assert_eq!(
            MoveResult::Committed(session.occupant(to)),
            session.play(from, to),
            "{}",
            mov
        );
    }

    assert!(session.is_in_check(Color::Black));
    assert!(!session.is_in_check(Color::White));
}

#[test]
fn out_of_bounds_squares() {
    assert_eq!(
        Err(ChessError::OutOfBounds { row: 8, col: 4 }),
        Square::new(8, 4)
    );
    assert_eq!(
        Err(ChessError::OutOfBounds { row: 0, col: -1 }),
        Square::new(0, -1)
    );

    let session = chess_core::new_game();
    assert_eq!(
        Err(ChessError::OutOfBounds { row: 9, col: 9 }),
        session.board().occupant_at(9, 9)
    );
}

#[test]
fn strict_sessions_refuse_pinned_pieces() {
    // the bishop on e2 shields the king from the rook on e8
    let fen = "4r1k1/8/8/8/8/8/4B3/4K3 w";
    let mut lax = session_from(fen);
    assert_eq!(
        MoveResult::Committed(None),
        lax.play("e2".parse().unwrap(), "d3".parse().unwrap())
    );
    assert!(lax.is_in_check(Color::White));

    let strict = SessionOptions {
        reject_self_check: true,
    };
    let mut strict = GameSession::from_fen(fen, strict).unwrap();
    assert_eq!(
        MoveResult::Illegal,
        strict.play("e2".parse().unwrap(), "d3".parse().unwrap())
    );
    assert!(!strict.is_in_check(Color::White));
}
