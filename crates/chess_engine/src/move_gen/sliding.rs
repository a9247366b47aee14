//! Sliding piece move generation
//!
//! Common ray casting for bishops, rooks and queens. Each ray runs until it
//! leaves the board or meets a piece. An enemy blocker is included (capture),
//! a friendly one is not.

use crate::board::Board;
use crate::types::{Piece, Square};

/// Walk each direction from `piece` and collect reachable squares
pub fn generate_sliding_targets(
    board: &Board,
    piece: &Piece,
    dirs: &[(i8, i8)],
    targets: &mut Vec<Square>,
) {
    cast_rays(board, piece, dirs, targets, false);
}

/// Same rays, keeping friendly blockers as defended squares
pub fn sliding_attacks(board: &Board, piece: &Piece, dirs: &[(i8, i8)], targets: &mut Vec<Square>) {
    cast_rays(board, piece, dirs, targets, true);
}

fn cast_rays(
    board: &Board,
    piece: &Piece,
    dirs: &[(i8, i8)],
    targets: &mut Vec<Square>,
    include_own_blockers: bool,
) {
    for &(df, dr) in dirs {
        let mut current = piece.square();
        while let Some(next) = current.offset(df, dr) {
            match board.piece_at(next) {
                None => targets.push(next),
                Some(blocker) => {
                    if include_own_blockers || blocker.color() != piece.color() {
                        targets.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}
