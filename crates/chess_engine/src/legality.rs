//! Legality filter
//!
//! A move is legal when it is pseudo-legal and, once played out in full on a
//! scratch copy, the mover's king is not attacked. Pins, discovered checks
//! and en passant exposing a rank all fall out of the simulation, so there is
//! no pin bookkeeping anywhere.

use crate::board::Board;
use crate::error::ChessEngineResult;
use crate::move_gen::{generate_pseudo_legal_targets, is_in_check};
use crate::moves::apply_move;
use crate::types::{Piece, Square};

/// Is the move `from` -> `to` legal for the piece on `from`
///
/// `Ok(false)` for an empty source, a target outside the piece's movement
/// rules, or a move that leaves its own king attacked.
///
/// # Errors
///
/// [`crate::ChessEngineError::KingNotFound`] if the mover has no king.
///
/// # Examples
///
/// ```rust,ignore
/// let board = Board::standard();
/// assert!(is_legal(&board, e2, e4)?);
/// assert!(!is_legal(&board, e2, e5)?);
/// ```
pub fn is_legal(board: &Board, from: Square, to: Square) -> ChessEngineResult<bool> {
    let Some(piece) = board.piece_at(from) else {
        return Ok(false);
    };
    if !generate_pseudo_legal_targets(board, piece).contains(&to) {
        return Ok(false);
    }
    leaves_king_safe(board, piece, to)
}

/// Every legal destination of `piece`
pub fn legal_targets(board: &Board, piece: &Piece) -> ChessEngineResult<Vec<Square>> {
    let mut legal = Vec::new();
    for to in generate_pseudo_legal_targets(board, piece) {
        if leaves_king_safe(board, piece, to)? {
            legal.push(to);
        }
    }
    Ok(legal)
}

fn leaves_king_safe(board: &Board, piece: &Piece, to: Square) -> ChessEngineResult<bool> {
    // Promotion kind cannot change whether the own king is exposed
    match apply_move(board, piece.square(), to, None) {
        Some(applied) => Ok(!is_in_check(&applied.board, piece.color())?),
        None => Ok(false),
    }
}
