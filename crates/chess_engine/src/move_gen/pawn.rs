//! Pawn move generation
//!
//! ## Pawn Movement Rules
//!
//! - One square forward onto an empty square
//! - Two squares forward from the starting rank if both squares are empty
//! - Diagonal captures onto enemy-occupied squares
//! - En passant: capture a side-adjacent enemy pawn that just advanced two
//!   squares by moving onto the square it skipped
//!
//! Promotion is not a generation concern; the pawn's target on the last rank
//! is an ordinary target and [`crate::moves::apply_move`] does the swap.

use crate::board::Board;
use crate::types::{Piece, PieceKind, Square};

/// Generate pawn targets from the pawn's square
pub fn generate_pawn_targets(board: &Board, pawn: &Piece, targets: &mut Vec<Square>) {
    let from = pawn.square();
    let dir = pawn.color().pawn_direction();

    if let Some(one) = from.offset(0, dir).filter(|sq| board.is_empty(*sq)) {
        targets.push(one);
        if pawn.move_two_available() {
            if let Some(two) = from.offset(0, 2 * dir).filter(|sq| board.is_empty(*sq)) {
                targets.push(two);
            }
        }
    }

    for file_delta in [-1, 1] {
        let Some(diagonal) = from.offset(file_delta, dir) else {
            continue;
        };
        match board.piece_at(diagonal) {
            Some(victim) if victim.color() != pawn.color() => targets.push(diagonal),
            Some(_) => {}
            None => {
                if en_passant_victim(board, pawn, file_delta).is_some() {
                    targets.push(diagonal);
                }
            }
        }
    }
}

/// The enemy pawn beside `pawn` on the `file_delta` side that may be taken en passant
fn en_passant_victim<'a>(board: &'a Board, pawn: &Piece, file_delta: i8) -> Option<&'a Piece> {
    let beside = pawn.square().offset(file_delta, 0)?;
    board.piece_at(beside).filter(|p| {
        p.kind() == PieceKind::Pawn && p.color() != pawn.color() && p.vulnerable_to_en_passant()
    })
}

/// Squares a pawn threatens, occupied or not
pub fn pawn_attacks(pawn: &Piece, targets: &mut Vec<Square>) {
    let dir = pawn.color().pawn_direction();
    targets.extend([-1, 1].into_iter().filter_map(|df| pawn.square().offset(df, dir)));
}
