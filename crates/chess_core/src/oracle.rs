//! The position oracle: everything a search needs to know about a position.
//!
//! Search code never touches a concrete board. It asks an oracle for legal
//! moves, applies and reverts them in strict LIFO order, and queries check
//! status and piece placement. Any board that can answer these questions can
//! be searched.

use std::fmt;

use crate::types::{Color, Piece, PieceKind};

/// Static facts about a move in the current position, used for ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveInfo {
    /// Kind of the piece being moved (if known)
    pub moved: Option<PieceKind>,
    /// Kind of the piece captured, en passant included
    pub captured: Option<PieceKind>,
    /// Promotion target, if this is a promotion
    pub promotion: Option<PieceKind>,
}

/// Interface a search consumes from the host board.
///
/// `apply_move` / `revert_move` must be called in stack order: a revert always
/// undoes the most recent apply that has not yet been reverted.
pub trait PositionOracle {
    type Move: Copy + Eq + fmt::Debug;

    /// Generate all legal moves into the provided buffer, replacing its contents.
    fn legal_moves_into(&self, out: &mut Vec<Self::Move>);

    /// Generate all legal moves, returning a freshly allocated vector.
    fn legal_moves(&self) -> Vec<Self::Move> {
        let mut out = Vec::with_capacity(64);
        self.legal_moves_into(&mut out);
        out
    }

    fn apply_move(&mut self, mv: Self::Move);

    /// Undo `mv`, which must be the last applied move.
    fn revert_move(&mut self, mv: Self::Move);

    /// Is the side to move in check?
    fn is_in_check(&self) -> bool;

    /// Is the side to move checkmated?
    fn is_in_checkmate(&self) -> bool;

    fn side_to_move(&self) -> Color;

    /// Piece on square `sq` (0..64, a1 = 0).
    fn piece_at(&self, sq: u8) -> Option<Piece>;

    /// Ordering hints for `mv`. Boards that cannot tell return the default.
    fn move_info(&self, _mv: Self::Move) -> MoveInfo {
        MoveInfo::default()
    }
}
