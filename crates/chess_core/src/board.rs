//! Host board backed by `shakmaty`.
//!
//! `shakmaty` positions are immutable-by-move (no unmake), so reverting is done
//! by keeping a snapshot of the position before every applied move. The
//! snapshot stack doubles as the apply/revert pairing check.

use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, EnPassantMode, Position as _, Role, Square};

pub use shakmaty::Move;

use crate::error::ChessError;
use crate::oracle::{MoveInfo, PositionOracle};
use crate::types::{Color, Piece, PieceKind};

#[derive(Clone, Debug)]
struct Undo {
    mv: Move,
    prev: Chess,
}

#[derive(Clone, Debug)]
pub struct Board {
    pos: Chess,
    undo: Vec<Undo>,
}

impl Board {
    pub fn startpos() -> Self {
        Self::from_chess(Chess::default())
    }

    pub fn from_chess(pos: Chess) -> Self {
        Self {
            pos,
            undo: Vec::with_capacity(16),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        let invalid = |reason: String| ChessError::InvalidFen {
            fen: fen.to_string(),
            reason,
        };
        let parsed: Fen = fen.trim().parse().map_err(|e| invalid(format!("{e}")))?;
        let pos: Chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|e| invalid(format!("{e}")))?;
        Ok(Self::from_chess(pos))
    }

    pub fn to_fen(&self) -> String {
        Fen::from_position(&self.pos, EnPassantMode::Legal).to_string()
    }

    /// The underlying `shakmaty` position.
    pub fn position(&self) -> &Chess {
        &self.pos
    }

    /// Number of applied moves that have not been reverted yet.
    pub fn pending(&self) -> usize {
        self.undo.len()
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.pos.halfmoves()
    }

    pub fn fullmove_number(&self) -> u32 {
        self.pos.fullmoves().get()
    }

    /// Play `mv` permanently. Unlike [`PositionOracle::apply_move`] this
    /// records no undo entry; it is meant for game setup, not search.
    pub fn commit_move(&mut self, mv: Move) {
        self.pos.play_unchecked(mv);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

/// Boards compare equal when every oracle query would answer the same,
/// including move clocks. Pending undo entries are not part of the position.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
            && self.pos.halfmoves() == other.pos.halfmoves()
            && self.pos.fullmoves() == other.pos.fullmoves()
    }
}

impl Eq for Board {}

impl PositionOracle for Board {
    type Move = Move;

    fn legal_moves_into(&self, out: &mut Vec<Move>) {
        out.clear();
        out.extend(self.pos.legal_moves());
    }

    fn apply_move(&mut self, mv: Move) {
        let prev = self.pos.clone();
        self.pos.play_unchecked(mv);
        self.undo.push(Undo { mv, prev });
    }

    fn revert_move(&mut self, mv: Move) {
        let Some(undo) = self.undo.pop() else {
            panic!("revert_move({mv}) with no applied move outstanding");
        };
        assert_eq!(
            undo.mv, mv,
            "revert_move out of order: expected {}, got {mv}",
            undo.mv
        );
        self.pos = undo.prev;
    }

    fn is_in_check(&self) -> bool {
        self.pos.is_check()
    }

    fn is_in_checkmate(&self) -> bool {
        self.pos.is_checkmate()
    }

    fn side_to_move(&self) -> Color {
        self.pos.turn().into()
    }

    fn piece_at(&self, sq: u8) -> Option<Piece> {
        assert!(sq < 64, "square index out of range: {sq}");
        self.pos
            .board()
            .piece_at(Square::new(u32::from(sq)))
            .map(Piece::from)
    }

    fn move_info(&self, mv: Move) -> MoveInfo {
        MoveInfo {
            moved: Some(mv.role().into()),
            captured: mv.capture().map(PieceKind::from),
            promotion: mv.promotion().map(PieceKind::from),
        }
    }
}

impl From<shakmaty::Color> for Color {
    fn from(c: shakmaty::Color) -> Self {
        match c {
            shakmaty::Color::White => Color::White,
            shakmaty::Color::Black => Color::Black,
        }
    }
}

impl From<Role> for PieceKind {
    fn from(role: Role) -> Self {
        match role {
            Role::Pawn => PieceKind::Pawn,
            Role::Knight => PieceKind::Knight,
            Role::Bishop => PieceKind::Bishop,
            Role::Rook => PieceKind::Rook,
            Role::Queen => PieceKind::Queen,
            Role::King => PieceKind::King,
        }
    }
}

impl From<shakmaty::Piece> for Piece {
    fn from(p: shakmaty::Piece) -> Self {
        Piece {
            color: p.color.into(),
            kind: p.role.into(),
        }
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
