//! # Engine constants - piece values, movement vectors and castling squares
//!
//! ## Centipawn valuation
//!
//! Material is scored in centipawns with the classic 100/300/300/500/900
//! scheme. The king is worth nothing: both kings are always on the board, so
//! they cancel out, and the opponent never has to weigh a king capture.
//!
//! ## Direction vectors
//!
//! Movement is expressed as `(file_delta, rank_delta)` pairs and applied with
//! [`crate::types::Square::offset`], which rejects anything that leaves the
//! board. No wrap-around checks are needed.

use crate::types::PieceKind;

pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 300;
pub const BISHOP_VALUE: i32 = 300;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 900;
pub const KING_VALUE: i32 = 0;

/// Material value of a piece kind in centipawns
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => PAWN_VALUE,
        PieceKind::Knight => KNIGHT_VALUE,
        PieceKind::Bishop => BISHOP_VALUE,
        PieceKind::Rook => ROOK_VALUE,
        PieceKind::Queen => QUEEN_VALUE,
        PieceKind::King => KING_VALUE,
    }
}

pub const ROOK_DIRS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const QUEEN_DIRS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// The king steps one square in any queen direction
pub const KING_OFFSETS: [(i8, i8); 8] = QUEEN_DIRS;

/// File the king starts on and castles from
pub const KING_FILE: u8 = 4;

/// Castling geometry for one wing, as files on the king's home rank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingWing {
    pub rook_from: u8,
    pub rook_to: u8,
    pub king_to: u8,
    /// Files that must be empty between king and rook
    pub between: &'static [u8],
}

pub const KINGSIDE: CastlingWing = CastlingWing {
    rook_from: 7,
    rook_to: 5,
    king_to: 6,
    between: &[5, 6],
};

pub const QUEENSIDE: CastlingWing = CastlingWing {
    rook_from: 0,
    rook_to: 3,
    king_to: 2,
    between: &[1, 2, 3],
};

pub const CASTLING_WINGS: [CastlingWing; 2] = [KINGSIDE, QUEENSIDE];

impl CastlingWing {
    /// Wing a two-file king move toward `king_to` belongs to
    pub fn for_king_target(king_to: u8) -> Option<CastlingWing> {
        CASTLING_WINGS.into_iter().find(|w| w.king_to == king_to)
    }
}
