//! Static evaluation: material, piece-square tables and a check/checkmate term.

use chess_core::{Color, PieceKind, PositionOracle};

use crate::config::{CheckConvention, EvalConfig, EvalVariant};
use crate::pst::tables;

/// Scores a position from `perspective`'s point of view (positive = good for
/// `perspective`).
pub trait Evaluate<O: PositionOracle> {
    fn evaluate(&self, pos: &O, perspective: Color) -> i32;
}

/// Material values indexed by `PieceKind::idx()`.
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
const PIECE_VALUES: [i32; 6] = [10, 30, 30, 50, 90, 900];

/// Returns the material value of a piece under `variant`.
///
/// Only the material-only variant counts the king; the table variants score
/// king safety through the check and checkmate term instead.
#[inline]
pub fn piece_value(kind: PieceKind, variant: EvalVariant) -> i32 {
    match (kind, variant) {
        (PieceKind::King, EvalVariant::Positional | EvalVariant::FullTables) => 0,
        _ => PIECE_VALUES[kind.idx()],
    }
}

/// Does `variant` add a square bonus for `kind`?
#[inline]
fn uses_table(kind: PieceKind, variant: EvalVariant) -> bool {
    match variant {
        EvalVariant::Material => false,
        EvalVariant::Positional => !matches!(kind, PieceKind::Pawn | PieceKind::King),
        EvalVariant::FullTables => true,
    }
}

#[derive(Debug, Clone, Default)]
pub struct StaticEvaluator {
    config: EvalConfig,
}

impl StaticEvaluator {
    pub fn new(config: EvalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// White material minus black material, signed for `perspective`.
    pub fn material<O: PositionOracle>(&self, pos: &O, perspective: Color) -> i32 {
        let mut score = 0i32;
        for sq in 0..64u8 {
            if let Some(pc) = pos.piece_at(sq) {
                score += piece_value(pc.kind, self.config.variant) * pc.color.sign();
            }
        }
        score * perspective.sign()
    }

    /// Square bonuses of `perspective`'s pieces minus the opponent's, each
    /// side read from its own orientation of the tables.
    pub fn positional<O: PositionOracle>(&self, pos: &O, perspective: Color) -> i32 {
        let variant = self.config.variant;
        if variant == EvalVariant::Material {
            return 0;
        }
        let store = tables();
        let mut score = 0i32;
        for sq in 0..64u8 {
            match pos.piece_at(sq) {
                Some(pc) if uses_table(pc.kind, variant) => {
                    score += store.lookup(pc.kind, pc.color, sq) * pc.color.sign();
                }
                _ => {}
            }
        }
        score * perspective.sign()
    }

    /// Check/checkmate bonus. The side in check is always the side to move.
    pub fn check_term<O: PositionOracle>(&self, pos: &O, perspective: Color) -> i32 {
        let bonus = if pos.is_in_checkmate() {
            self.config.mate_bonus
        } else if pos.is_in_check() {
            self.config.check_bonus
        } else {
            return 0;
        };
        let in_check = pos.side_to_move();
        let favored = match self.config.check_convention {
            CheckConvention::FavorAttacker => in_check.other(),
            CheckConvention::FavorDefender => in_check,
        };
        if favored == perspective { bonus } else { -bonus }
    }
}

impl<O: PositionOracle> Evaluate<O> for StaticEvaluator {
    fn evaluate(&self, pos: &O, perspective: Color) -> i32 {
        self.material(pos, perspective)
            + self.positional(pos, perspective)
            + self.check_term(pos, perspective)
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
