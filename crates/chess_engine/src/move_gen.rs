//! Pseudo-legal move generation
//!
//! Produces the squares a piece could move to by its movement rules alone,
//! without asking whether the move leaves its own king in check. That last
//! question is answered by simulation in [`crate::legality`].
//!
//! ## Module Organization
//!
//! - `pawn` - pushes, double pushes, diagonal captures and en passant
//! - `knight` - the eight L-shaped jumps
//! - `sliding` - ray casting shared by bishops, rooks and queens
//! - `king` - single steps and castling
//! - `attack` - attacked-square and check detection
//!
//! ## Two views of the same geometry
//!
//! [`generate_pseudo_legal_targets`] is what a piece may move to.
//! [`attack_targets`] is what a piece threatens: pawns threaten their
//! diagonals whether or not anything stands there, and castling is left out
//! because it never captures. Keeping the two apart lets the castling rule ask
//! "is this square attacked?" without generating castling moves again.

mod attack;
mod king;
mod knight;
mod pawn;
mod sliding;

pub use attack::{is_in_check, is_square_attacked};

use crate::board::Board;
use crate::constants::{BISHOP_DIRS, QUEEN_DIRS, ROOK_DIRS};
use crate::types::{Piece, PieceKind, Square};

/// Every square `piece` may move to by its movement rules
///
/// Includes castling targets for a king and en passant targets for a pawn.
/// Never contains the piece's own square or a square held by its own side.
///
/// # Examples
///
/// ```rust,ignore
/// let board = Board::standard();
/// let knight = board.piece_at(g1).unwrap();
/// let targets = generate_pseudo_legal_targets(&board, knight);
/// assert_eq!(targets.len(), 2); // f3 and h3
/// ```
pub fn generate_pseudo_legal_targets(board: &Board, piece: &Piece) -> Vec<Square> {
    let mut targets = Vec::with_capacity(16);
    match piece.kind() {
        PieceKind::Pawn => pawn::generate_pawn_targets(board, piece, &mut targets),
        PieceKind::Knight => knight::generate_knight_targets(board, piece, &mut targets),
        PieceKind::Bishop => sliding::generate_sliding_targets(board, piece, &BISHOP_DIRS, &mut targets),
        PieceKind::Rook => sliding::generate_sliding_targets(board, piece, &ROOK_DIRS, &mut targets),
        PieceKind::Queen => sliding::generate_sliding_targets(board, piece, &QUEEN_DIRS, &mut targets),
        PieceKind::King => {
            king::generate_king_steps(board, piece, &mut targets);
            king::generate_castling_targets(board, piece, &mut targets);
        }
    }
    targets
}

/// Every square `piece` attacks
///
/// Unlike [`generate_pseudo_legal_targets`] this keeps squares held by the
/// piece's own side (they are defended) and lists pawn diagonals even when
/// empty.
pub fn attack_targets(board: &Board, piece: &Piece) -> Vec<Square> {
    let mut targets = Vec::with_capacity(16);
    match piece.kind() {
        PieceKind::Pawn => pawn::pawn_attacks(piece, &mut targets),
        PieceKind::Knight => knight::knight_attacks(piece, &mut targets),
        PieceKind::Bishop => sliding::sliding_attacks(board, piece, &BISHOP_DIRS, &mut targets),
        PieceKind::Rook => sliding::sliding_attacks(board, piece, &ROOK_DIRS, &mut targets),
        PieceKind::Queen => sliding::sliding_attacks(board, piece, &QUEEN_DIRS, &mut targets),
        PieceKind::King => king::king_attacks(piece, &mut targets),
    }
    targets
}

/// Is `to` among the pseudo-legal targets of the piece on `from`
pub fn is_pseudo_legal(board: &Board, from: Square, to: Square) -> bool {
    board
        .piece_at(from)
        .is_some_and(|piece| generate_pseudo_legal_targets(board, piece).contains(&to))
}
