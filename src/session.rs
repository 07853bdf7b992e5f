// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::board::Board;
use crate::check::{self, CheckStatus};
use crate::error::ChessError;
use crate::fen;
use crate::legality;
use crate::record::MoveRecord;
use crate::types::{Color, Piece, PieceKind, Square, COLORS};

/// Where a session is in the select-then-move cycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    AwaitingSelection,
    AwaitingDestination(Square),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectionResult {
    Selected,
    Deselected,
    Rejected,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveResult {
    /// The move was applied. Carries the captured piece, if any.
    Committed(Option<Piece>),
    Illegal,
}

/// Rule knobs for a session.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionOptions {
    /// Reject moves that leave the mover's own king attacked. When unset,
    /// check is only ever reported, never enforced.
    pub reject_self_check: bool,
}

/// Serializable view of a session for whoever draws it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub placement: String,
    pub to_move: Color,
    pub selected: Option<Square>,
    pub in_check: Vec<Color>,
    pub pieces: Vec<(Square, Piece)>,
}

/// The authoritative state of one game: the board, whose turn it is and the
/// current selection. The session exclusively owns its board; the legality
/// rules and the check detector only ever see a shared borrow of it.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    to_move: Color,
    state: SessionState,
    check_status: CheckStatus,
    options: SessionOptions,
    history: Vec<MoveRecord>,
}

//
// Construction and getters
//

impl GameSession {
    /// Starts a new game from the standard layout with White to move.
    pub fn new() -> GameSession {
        GameSession::with_options(SessionOptions::default())
    }

    pub fn with_options(options: SessionOptions) -> GameSession {
        GameSession::from_board(Board::starting_position(), Color::White, options)
    }

    /// Starts a game from an arbitrary position, given as a FEN placement
    /// optionally followed by the side to move.
    pub fn from_fen(fen: &str, options: SessionOptions) -> Result<GameSession, ChessError> {
        let (board, to_move) = fen::parse_position(fen)?;
        Ok(GameSession::from_board(board, to_move, options))
    }

    pub fn from_board(board: Board, to_move: Color, options: SessionOptions) -> GameSession {
        for &color in &COLORS {
            if board.king_square(color).is_none() {
                warn!("session started without a {} king", color);
            }
        }

        GameSession {
            check_status: CheckStatus::compute(&board),
            board,
            to_move,
            state: SessionState::AwaitingSelection,
            options,
            history: vec![],
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn occupant(&self, square: Square) -> Option<Piece> {
        self.board.occupant(square)
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn selected(&self) -> Option<Square> {
        match self.state {
            SessionState::AwaitingSelection => None,
            SessionState::AwaitingDestination(sq) => Some(sq),
        }
    }

    pub fn options(&self) -> SessionOptions {
        self.options
    }

    /// Whether `color`'s king was attacked after the last committed move.
    pub fn is_in_check(&self, color: Color) -> bool {
        self.check_status.is_in_check(color)
    }

    pub fn check_status(&self) -> CheckStatus {
        self.check_status
    }

    /// Committed moves, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Every square the selected piece may move to. Empty when nothing is
    /// selected.
    pub fn legal_destinations(&self) -> Vec<Square> {
        match self.selected() {
            Some(from) => legality::legal_destinations(&self.board, from)
                .into_iter()
                .filter(|&to| self.is_acceptable(from, to))
                .collect(),
            None => vec![],
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            placement: self.board.as_fen_placement(),
            to_move: self.to_move,
            selected: self.selected(),
            in_check: COLORS
                .iter()
                .cloned()
                .filter(|&color| self.is_in_check(color))
                .collect(),
            pieces: COLORS
                .iter()
                .flat_map(|&color| self.board.pieces(color))
                .collect(),
        }
    }
}

//
// Selection and move application
//

impl GameSession {
    /// Selects or deselects a square.
    ///
    /// With nothing selected, a square holding one of the mover's pieces is
    /// selected and anything else is rejected. With a square selected,
    /// selecting it again deselects it and selecting another of the mover's
    /// pieces moves the selection there. Rejections never change state.
    pub fn select(&mut self, square: Square) -> SelectionResult {
        if self.state == SessionState::AwaitingDestination(square) {
            debug!("deselected {}", square);
            self.state = SessionState::AwaitingSelection;
            return SelectionResult::Deselected;
        }

        match self.board.occupant(square) {
            Some(piece) if piece.color == self.to_move => {
                debug!("selected {} on {}", piece, square);
                self.state = SessionState::AwaitingDestination(square);
                SelectionResult::Selected
            }
            Some(piece) => {
                debug!(
                    "rejected selection of {} on {}: {} to move",
                    piece, square, self.to_move
                );
                SelectionResult::Rejected
            }
            None => {
                debug!("rejected selection of empty square {}", square);
                SelectionResult::Rejected
            }
        }
    }

    /// Moves the selected piece to `destination` if the move is legal.
    ///
    /// A legal move is committed atomically: the board is updated, check is
    /// recomputed for both colors, the turn passes and the selection clears.
    /// An illegal move changes nothing, selection included.
    pub fn attempt_move(&mut self, destination: Square) -> Result<MoveResult, ChessError> {
        let source = match self.state {
            SessionState::AwaitingSelection => return Err(ChessError::NoPieceSelected),
            SessionState::AwaitingDestination(source) => source,
        };

        let mover = match self.board.occupant(source) {
            Some(piece) => piece,
            None => {
                error!("selected square {} is empty", source);
                return Ok(MoveResult::Illegal);
            }
        };

        if !self.is_acceptable(source, destination) {
            debug!("illegal move {}{} for {}", source, destination, mover);
            return Ok(MoveResult::Illegal);
        }

        let captured = self.board.move_raw(source, destination);
        self.check_status = CheckStatus::compute(&self.board);
        self.to_move = self.to_move.toggle();
        self.state = SessionState::AwaitingSelection;

        let record = MoveRecord::new(
            self.history.len() as u32 + 1,
            mover,
            source,
            destination,
            captured,
            self.check_status,
        );
        info!("committed {} ({})", record, mover);
        if self.check_status.is_in_check(self.to_move) {
            info!("{} is in check", self.to_move);
        }

        self.history.push(record);
        Ok(MoveResult::Committed(captured))
    }

    /// Plays `from` to `to` in one call, regardless of the current selection.
    /// The selection is cleared afterwards whether or not the move is legal.
    pub fn play(&mut self, from: Square, to: Square) -> MoveResult {
        self.state = SessionState::AwaitingSelection;
        if self.select(from) != SelectionResult::Selected {
            return MoveResult::Illegal;
        }

        let result = match self.attempt_move(to) {
            Ok(result) => result,
            Err(_) => MoveResult::Illegal,
        };

        self.state = SessionState::AwaitingSelection;
        result
    }

    /// Session-level legality: the piece rules, plus the rules that keep the
    /// game well formed.
    fn is_acceptable(&self, from: Square, to: Square) -> bool {
        if !legality::is_legal(&self.board, from, to) {
            return false;
        }

        // Kings are never captured; there must always be one of each color.
        if let Some(target) = self.board.occupant(to) {
            if target.kind == PieceKind::King {
                debug!("refusing to capture the {} king on {}", target.color, to);
                return false;
            }
        }

        if self.options.reject_self_check {
            let mut trial = self.board;
            trial.move_raw(from, to);
            if check::is_in_check(&trial, self.to_move) {
                debug!("{}{} leaves the {} king in check", from, to, self.to_move);
                return false;
            }
        }

        true
    }
}

impl Default for GameSession {
    fn default() -> Self {
        GameSession::new()
    }
}
