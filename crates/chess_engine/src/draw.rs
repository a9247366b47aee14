//! Draw detection: insufficient material and threefold repetition
//!
//! ## Insufficient material
//!
//! | Material (besides kings) | Drawn |
//! |--------------------------|-------|
//! | nothing | yes |
//! | one knight or one bishop in total | yes |
//! | bishops only, all on one square color | yes |
//! | bishops on both square colors | no |
//! | two or more knights, or knight with bishop | no |
//! | any pawn, rook or queen | no |
//!
//! ## Repetition
//!
//! Positions are compared by [`Placement`] only: which color and kind stands
//! on each square. Side to move and castling or en passant rights are not
//! part of the comparison.

use crate::board::{Board, Placement};
use crate::history::GameHistory;
use crate::types::PieceKind;

/// Can neither side possibly deliver mate
pub fn is_insufficient_material(board: &Board) -> bool {
    let mut minors = Vec::new();
    for piece in board.pieces() {
        match piece.kind() {
            PieceKind::King => {}
            kind if kind.is_minor() => minors.push(piece),
            _ => return false,
        }
    }

    match minors.as_slice() {
        [] | [_] => true,
        [first, rest @ ..] => {
            let shade = first.square().is_light();
            minors.iter().all(|p| p.kind() == PieceKind::Bishop)
                && rest.iter().all(|p| p.square().is_light() == shade)
        }
    }
}

/// How many entries of `history` share `placement`
pub fn repetition_count(history: &GameHistory, placement: &Placement) -> usize {
    history
        .iter()
        .filter(|board| &board.placement() == placement)
        .count()
}

/// Has the latest position occurred at least three times
pub fn is_threefold_repetition(history: &GameHistory) -> bool {
    repetition_count(history, &history.latest().placement()) >= 3
}
