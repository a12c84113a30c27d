#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
    /// `1` for white, `-1` for black.
    pub fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub fn idx(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// File/rank pair for a square index (`rank * 8 + file`, a1 = 0, h8 = 63).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Coord {
    pub file: u8,
    pub rank: u8,
}

impl Coord {
    /// Panics if `index` is not a board square.
    pub fn from_index(index: u8) -> Self {
        assert!(index < 64, "square index out of range: {index}");
        Self {
            file: index % 8,
            rank: index / 8,
        }
    }

    pub fn index(self) -> u8 {
        self.rank * 8 + self.file
    }

    /// Same file, rank `7 - rank`.
    pub fn mirror_rank(self) -> Self {
        Self {
            file: self.file,
            rank: 7 - self.rank,
        }
    }
}

// Helpers
pub fn file_of(sq: u8) -> i8 {
    (sq % 8) as i8
}
pub fn rank_of(sq: u8) -> i8 {
    (sq / 8) as i8
}
pub fn sq(file: i8, rank: i8) -> Option<u8> {
    if (0..8).contains(&file) && (0..8).contains(&rank) {
        Some((rank as u8) * 8 + (file as u8))
    } else {
        None
    }
}

/// Vertical mirror of a square index.
pub fn mirror_sq(sq: u8) -> u8 {
    Coord::from_index(sq).mirror_rank().index()
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
