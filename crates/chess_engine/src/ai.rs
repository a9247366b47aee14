//! One-ply automated opponent
//!
//! Every legal move of every remaining piece is played out on a scratch
//! board and the resulting position scored with [`crate::evaluation::evaluate`].
//! Black keeps the lowest scores, White the highest, and the move is drawn
//! uniformly at random from the tied best. There is no deeper search.

use crate::board::Board;
use crate::error::ChessEngineResult;
use crate::evaluation::evaluate;
use crate::legality::legal_targets;
use crate::moves::apply_move;
use crate::types::{Color, PieceId, Square};
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::debug;

/// A scored move the opponent considered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateMove {
    pub piece_id: PieceId,
    pub from: Square,
    pub to: Square,
    /// White-positive evaluation of the position after the move
    pub score: i32,
}

/// All legal moves of `side` with their one-ply scores
pub fn score_moves(board: &Board, side: Color) -> ChessEngineResult<Vec<CandidateMove>> {
    let mut candidates = Vec::new();
    for piece in board.pieces_of(side) {
        for to in legal_targets(board, piece)? {
            if let Some(applied) = apply_move(board, piece.square(), to, None) {
                candidates.push(CandidateMove {
                    piece_id: piece.id(),
                    from: piece.square(),
                    to,
                    score: evaluate(&applied.board),
                });
            }
        }
    }
    Ok(candidates)
}

/// Pick a move for `side`, `None` if it has no legal move
///
/// # Examples
///
/// ```rust,ignore
/// let mut rng = StdRng::seed_from_u64(7);
/// let choice = select_move(&board, Color::Black, &mut rng)?;
/// ```
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    side: Color,
    rng: &mut R,
) -> ChessEngineResult<Option<CandidateMove>> {
    let candidates = score_moves(board, side)?;
    let scores = candidates.iter().map(|c| c.score);
    let best = match side {
        Color::White => scores.max(),
        Color::Black => scores.min(),
    };
    let Some(best) = best else {
        debug!("[AI] {} has no legal move", side);
        return Ok(None);
    };

    let ties: Vec<CandidateMove> = candidates.into_iter().filter(|c| c.score == best).collect();
    let choice = ties.choose(rng).copied();
    if let Some(choice) = choice {
        debug!(
            "[AI] {} plays {} -> {} (score {}, {} tied)",
            side,
            choice.from,
            choice.to,
            choice.score,
            ties.len()
        );
    }
    Ok(choice)
}
