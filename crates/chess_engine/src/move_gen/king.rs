//! King move generation
//!
//! Single steps in all eight directions plus castling.
//!
//! ## Castling conditions
//!
//! A king may castle toward a wing when:
//! 1. The king still has `castling_available`
//! 2. The corner rook of its color on the king's rank has not moved
//! 3. Every square strictly between king and rook is empty
//! 4. The king is not attacked on its origin square, the square it passes
//!    through, or the square it lands on
//!
//! Check 4 goes through [`super::is_square_attacked`], which only looks at
//! attack geometry, so it never generates castling moves itself.

use super::attack::is_square_attacked;
use crate::board::Board;
use crate::constants::{CastlingWing, CASTLING_WINGS, KING_OFFSETS};
use crate::types::{Piece, PieceKind, Square};

pub fn generate_king_steps(board: &Board, king: &Piece, targets: &mut Vec<Square>) {
    for (df, dr) in KING_OFFSETS {
        if let Some(dest) = king.square().offset(df, dr) {
            match board.piece_at(dest) {
                Some(occupant) if occupant.color() == king.color() => {}
                _ => targets.push(dest),
            }
        }
    }
}

pub fn king_attacks(king: &Piece, targets: &mut Vec<Square>) {
    targets.extend(
        KING_OFFSETS
            .iter()
            .filter_map(|&(df, dr)| king.square().offset(df, dr)),
    );
}

pub fn generate_castling_targets(board: &Board, king: &Piece, targets: &mut Vec<Square>) {
    if !king.castling_available() {
        return;
    }
    for wing in CASTLING_WINGS {
        if let Some(dest) = castling_target(board, king, wing) {
            targets.push(dest);
        }
    }
}

fn castling_target(board: &Board, king: &Piece, wing: CastlingWing) -> Option<Square> {
    let rank = king.square().rank();
    let rook_square = Square::new(wing.rook_from, rank)?;
    let rook = board.piece_at(rook_square)?;
    if rook.kind() != PieceKind::Rook || rook.color() != king.color() || rook.has_moved() {
        return None;
    }

    for &file in wing.between {
        if !board.is_empty(Square::new(file, rank)?) {
            return None;
        }
    }

    let enemy = king.color().opposite();
    let pass_through = Square::new(wing.rook_to, rank)?;
    let landing = Square::new(wing.king_to, rank)?;
    for square in [king.square(), pass_through, landing] {
        if is_square_attacked(board, square, enemy) {
            return None;
        }
    }

    Some(landing)
}
