//! Move application with castling, en passant and promotion
//!
//! [`apply_move`] is the single place a move changes a position. It works on a
//! copy and returns the new board along with what happened, so the legality
//! filter can run the exact same code on a scratch board and throw it away.
//!
//! Order of operations:
//! 1. Clear every pawn's en passant vulnerability (the window lasts one ply)
//! 2. Move the castling rook, or remove the pawn taken en passant
//! 3. Move the piece itself and consume its one-time rights
//! 4. Mark a double-pushed pawn as vulnerable
//! 5. Swap a pawn on its last rank for the promoted piece

use crate::board::Board;
use crate::constants::CastlingWing;
use crate::types::{Piece, PieceId, PieceKind, Square};
use tracing::warn;

/// Outcome of applying a move to a board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMove {
    pub board: Board,
    /// Id of the piece now standing on the destination square
    pub moved: PieceId,
    pub captured: Option<Piece>,
    pub pawn_moved_two: bool,
    pub castle_event: bool,
    pub en_passant_event: bool,
    pub promotion_event: Option<PieceKind>,
}

/// Settle which kind a pawn promotes to
///
/// `None` picks `default`. A request for a pawn or king cannot be honored and
/// falls back to `default` with a warning; a bad `default` falls back to the
/// queen.
pub fn resolve_promotion(requested: Option<PieceKind>, default: PieceKind) -> PieceKind {
    let default = if default.is_promotion_choice() {
        default
    } else {
        warn!("[ENGINE] Default promotion {} is not allowed, using queen", default);
        PieceKind::Queen
    };
    match requested {
        None => default,
        Some(kind) if kind.is_promotion_choice() => kind,
        Some(kind) => {
            warn!("[ENGINE] Cannot promote to {}, using {}", kind, default);
            default
        }
    }
}

/// Apply the move `from` -> `to` to a copy of `board`
///
/// No legality checks beyond the source square holding a piece; callers
/// validate first (see [`crate::legality::is_legal`]). A pawn landing on its
/// last rank becomes `promotion`, or a queen when `None`.
///
/// Returns `None` if `from` is empty.
///
/// # Examples
///
/// ```rust,ignore
/// let applied = apply_move(&Board::standard(), e2, e4, None).unwrap();
/// assert!(applied.pawn_moved_two);
/// ```
pub fn apply_move(
    board: &Board,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> Option<AppliedMove> {
    let mover = *board.piece_at(from)?;
    let mut next = board.clone();

    for piece in next.pieces_mut() {
        piece.clear_en_passant_target();
    }

    let file_shift = to.file() as i8 - from.file() as i8;
    let rank_shift = to.rank() as i8 - from.rank() as i8;

    let mut castle_event = false;
    let mut en_passant_event = false;
    let mut captured = None;

    match mover.kind() {
        PieceKind::King if file_shift.abs() == 2 => {
            if let Some(wing) = CastlingWing::for_king_target(to.file()) {
                let rank = from.rank();
                if let (Some(rook_from), Some(rook_to)) =
                    (Square::new(wing.rook_from, rank), Square::new(wing.rook_to, rank))
                {
                    next.apply_raw_move(rook_from, rook_to);
                    if let Some(rook) = next.piece_at_mut(rook_to) {
                        rook.consume_move_rights();
                    }
                    castle_event = true;
                }
            }
        }
        PieceKind::Pawn if file_shift != 0 && board.is_empty(to) => {
            if let Some(passed) = Square::new(to.file(), from.rank()) {
                captured = next.remove(passed);
                en_passant_event = captured.is_some();
            }
        }
        _ => {}
    }

    if let Some(overwritten) = next.apply_raw_move(from, to) {
        captured = Some(overwritten);
    }

    let pawn_moved_two = mover.kind() == PieceKind::Pawn && rank_shift.abs() == 2;
    if let Some(piece) = next.piece_at_mut(to) {
        piece.consume_move_rights();
        if pawn_moved_two {
            piece.mark_en_passant_target();
        }
    }

    let mut moved = mover.id();
    let mut promotion_event = None;
    if mover.kind() == PieceKind::Pawn && to.rank() == mover.color().promotion_rank() {
        let kind = resolve_promotion(promotion, PieceKind::Queen);
        if let Some(id) = next.replace_kind(to, kind) {
            if let Some(promoted) = next.piece_at_mut(to) {
                promoted.consume_move_rights();
            }
            moved = id;
            promotion_event = Some(kind);
        }
    }

    Some(AppliedMove {
        board: next,
        moved,
        captured,
        pawn_moved_two,
        castle_event,
        en_passant_event,
        promotion_event,
    })
}
