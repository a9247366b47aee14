//! Material evaluation
//!
//! Sums piece values (see [`crate::constants::piece_value`]) for both sides.

use crate::board::Board;
use crate::constants::piece_value;
use crate::types::Color;

/// White-positive material balance
pub fn evaluate(board: &Board) -> i32 {
    material_of(board, Color::White) - material_of(board, Color::Black)
}

/// Total material of one side
pub fn material_of(board: &Board, color: Color) -> i32 {
    board.pieces_of(color).map(|p| piece_value(p.kind())).sum()
}
