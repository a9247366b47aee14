//! # Core types - colors, piece kinds, squares and pieces
//!
//! ## Coordinates
//!
//! A [`Square`] is a `(file, rank)` pair with both components in `0..8`:
//! file 0 is the a-file, rank 0 is White's home rank. Squares can only be
//! built through [`Square::new`] and [`Square::offset`], both of which return
//! `None` for anything off the board, so every candidate produced by move
//! generation is bounds-checked before it is looked at.
//!
//! ## Pieces
//!
//! There is a single [`Piece`] type carrying a [`PieceKind`] tag; movement
//! geometry is a `match` on that tag in [`crate::move_gen`]. The one-time
//! rights that only matter for some kinds live on every piece as private
//! flags:
//!
//! | Flag | Meaningful for | Transition |
//! |------|----------------|------------|
//! | `move_two_available` | Pawn | true → false, once |
//! | `vulnerable_to_en_passant` | Pawn | set after a double push, cleared on the next ply |
//! | `has_moved` | Rook | false → true, once |
//! | `castling_available` | King | true → false, once |
//!
//! The setters only ever move a right in its permitted direction, so no code
//! path can give a king its castling back.

use crate::constants::{CASTLING_WINGS, KING_FILE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Side to move / owner of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank delta of a pawn step for this color
    pub fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank holding this color's king and rooks at the start
    pub fn home_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Rank this color's pawns start on
    pub fn pawn_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Rank on which this color's pawns promote
    pub fn promotion_rank(self) -> u8 {
        self.opposite().home_rank()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Kind of a chess piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Kinds a pawn may promote to
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    pub fn is_promotion_choice(self) -> bool {
        Self::PROMOTIONS.contains(&self)
    }

    /// Knights and bishops
    pub fn is_minor(self) -> bool {
        matches!(self, PieceKind::Knight | PieceKind::Bishop)
    }

    /// Upper-case letter used in notation and board dumps
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

/// A square on the 8x8 board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Build a square from file (0 = a) and rank (0 = first rank)
    pub fn new(file: u8, rank: u8) -> Option<Square> {
        if file < 8 && rank < 8 {
            Some(Square { file, rank })
        } else {
            None
        }
    }

    pub fn file(self) -> u8 {
        self.file
    }

    pub fn rank(self) -> u8 {
        self.rank
    }

    /// Step by a file/rank delta, `None` if that leaves the board
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Square> {
        let file = self.file as i8 + file_delta;
        let rank = self.rank as i8 + rank_delta;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// a1 is dark, h1 is light
    pub fn is_light(self) -> bool {
        (self.file + self.rank) % 2 == 1
    }

    /// Every square, rank by rank from a1
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Square { file, rank }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, self.rank + 1)
    }
}

/// Stable identity of a piece, unique within a board and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u32);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece together with its one-time rights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    id: PieceId,
    color: Color,
    kind: PieceKind,
    square: Square,
    move_two_available: bool,
    vulnerable_to_en_passant: bool,
    has_moved: bool,
    castling_available: bool,
}

impl Piece {
    /// Create a piece, deriving its rights from where it stands
    ///
    /// A pawn on its starting rank may advance two squares, a king on its
    /// home square may castle, and a rook counts as unmoved only in a corner of
    /// its home rank.
    pub fn new(id: PieceId, color: Color, kind: PieceKind, square: Square) -> Piece {
        let on_home_rank = square.rank() == color.home_rank();
        Piece {
            id,
            color,
            kind,
            square,
            move_two_available: kind == PieceKind::Pawn && square.rank() == color.pawn_rank(),
            vulnerable_to_en_passant: false,
            has_moved: kind == PieceKind::Rook
                && !(on_home_rank
                    && CASTLING_WINGS.iter().any(|wing| wing.rook_from == square.file())),
            castling_available: kind == PieceKind::King && on_home_rank && square.file() == KING_FILE,
        }
    }

    pub fn id(&self) -> PieceId {
        self.id
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn square(&self) -> Square {
        self.square
    }

    pub fn move_two_available(&self) -> bool {
        self.move_two_available
    }

    pub fn vulnerable_to_en_passant(&self) -> bool {
        self.vulnerable_to_en_passant
    }

    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    pub fn castling_available(&self) -> bool {
        self.castling_available
    }

    pub(crate) fn set_square(&mut self, square: Square) {
        self.square = square;
    }

    /// Consume the rights a piece loses by moving at all
    pub(crate) fn consume_move_rights(&mut self) {
        match self.kind {
            PieceKind::Pawn => self.move_two_available = false,
            PieceKind::Rook => self.has_moved = true,
            PieceKind::King => self.castling_available = false,
            _ => {}
        }
    }

    pub(crate) fn mark_en_passant_target(&mut self) {
        if self.kind == PieceKind::Pawn {
            self.vulnerable_to_en_passant = true;
        }
    }

    pub(crate) fn clear_en_passant_target(&mut self) {
        self.vulnerable_to_en_passant = false;
    }
}
