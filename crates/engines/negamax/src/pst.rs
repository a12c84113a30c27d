//! Piece-square tables.
//!
//! Tables are written the way a board is printed (rank 8 on the first row)
//! from White's point of view. On first use they are laid out rank-major for
//! White (index = rank * 8 + file) and mirrored once for Black; the result is
//! cached for the life of the process.

use std::sync::OnceLock;

use chess_core::{Color, Coord, PieceKind};

#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5,  5,  5,  5,  5,  5,  5,  5,
     1,  1,  2,  3,  3,  2,  1,  1,
     1,  1,  1,  3,  3,  1,  1,  1,
     0,  0,  0,  2,  2,  0,  0,  0,
     1, -1, -1,  0,  0, -1, -1,  1,
     1,  1,  1, -2, -2,  1,  1,  1,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
    -5, -4, -3, -3, -3, -3, -4, -5,
    -4, -2,  0,  0,  0,  0, -2, -4,
    -3,  0,  1,  2,  2,  1,  0, -3,
    -3,  1,  2,  2,  2,  2,  1, -3,
    -3,  0,  2,  2,  2,  2,  0, -3,
    -3,  1,  1,  2,  2,  1,  1, -3,
    -4, -2,  0,  1,  1,  0, -2, -4,
    -5, -4, -3, -3, -3, -3, -4, -5,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i32; 64] = [
    -2, -1, -1, -1, -1, -1, -1, -2,
    -1,  0,  0,  0,  0,  0,  0, -1,
    -1,  0,  1,  1,  1,  1,  0, -1,
    -1,  1,  1,  1,  1,  1,  1, -1,
    -1,  0,  1,  1,  1,  1,  0, -1,
    -1,  1,  1,  1,  1,  1,  1, -1,
    -1,  1,  0,  0,  0,  0,  1, -1,
    -2, -1, -1, -1, -1, -1, -1, -2,
];

#[rustfmt::skip]
const ROOK_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     1,  1,  1,  1,  1,  1,  1,  1,
    -1,  0,  0,  0,  0,  0,  0, -1,
    -1,  0,  0,  0,  0,  0,  0, -1,
    -1,  0,  0,  0,  0,  0,  0, -1,
    -1,  0,  0,  0,  0,  0,  0, -1,
    -1,  0,  0,  0,  0,  0,  0, -1,
     0,  0,  0,  1,  1,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_TABLE: [i32; 64] = [
    -2, -1, -1, -1, -1, -1, -1, -2,
    -1,  0,  0,  0,  0,  0,  0, -1,
    -1,  0,  1,  1,  1,  1,  0, -1,
    -1,  0,  1,  1,  1,  1,  0, -1,
     0,  0,  1,  1,  1,  1,  0, -1,
    -1,  1,  1,  1,  1,  1,  0, -1,
    -1,  0,  1,  0,  0,  0,  0, -1,
    -2, -1, -1, -1, -1, -1, -1, -2,
];

#[rustfmt::skip]
const KING_TABLE: [i32; 64] = [
    -3, -4, -4, -5, -5, -4, -4, -3,
    -3, -4, -4, -5, -5, -4, -4, -3,
    -3, -4, -4, -5, -5, -4, -4, -3,
    -3, -4, -4, -5, -5, -4, -4, -3,
    -2, -3, -3, -4, -4, -3, -3, -2,
    -1, -2, -2, -2, -2, -2, -2, -1,
     2,  2,  0,  0,  0,  0,  2,  2,
     2,  3,  1,  0,  0,  1,  3,  2,
];

/// Printed layouts indexed by `PieceKind::idx()`.
const PRINTED: [&[i32; 64]; 6] = [
    &PAWN_TABLE,
    &KNIGHT_TABLE,
    &BISHOP_TABLE,
    &ROOK_TABLE,
    &QUEEN_TABLE,
    &KING_TABLE,
];

/// Per-color, per-kind square values. Indexed by `[color][kind][square]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStore {
    tables: [[[i32; 64]; 6]; 2],
}

impl TableStore {
    fn build() -> Self {
        let mut tables = [[[0; 64]; 6]; 2];
        for kind in PieceKind::ALL {
            let printed = PRINTED[kind.idx()];
            let white = &mut tables[Color::White.idx()][kind.idx()];
            // Printed row r holds rank 7 - r.
            for (sq, value) in white.iter_mut().enumerate() {
                let c = Coord::from_index(sq as u8);
                *value = printed[(7 - c.rank as usize) * 8 + c.file as usize];
            }
        }
        for kind in PieceKind::ALL {
            for sq in 0..64u8 {
                let mirrored = Coord::from_index(sq).mirror_rank().index();
                tables[Color::Black.idx()][kind.idx()][sq as usize] =
                    tables[Color::White.idx()][kind.idx()][mirrored as usize];
            }
        }
        Self { tables }
    }

    /// Value of a `color` `kind` standing on `sq`. Panics if `sq >= 64`.
    #[inline]
    pub fn lookup(&self, kind: PieceKind, color: Color, sq: u8) -> i32 {
        assert!(sq < 64, "square index out of range: {sq}");
        self.tables[color.idx()][kind.idx()][sq as usize]
    }

    /// The whole 64-entry table for one kind and color.
    pub fn table(&self, kind: PieceKind, color: Color) -> &[i32; 64] {
        &self.tables[color.idx()][kind.idx()]
    }
}

/// Process-wide table store, built on first call.
pub fn tables() -> &'static TableStore {
    static TABLES: OnceLock<TableStore> = OnceLock::new();
    TABLES.get_or_init(TableStore::build)
}

#[cfg(test)]
#[path = "pst_tests.rs"]
mod pst_tests;
