//! Move requests and validation
//!
//! [`request_move`] is the only way a game advances. A rejected request is
//! not an error: it comes back as a [`MoveResult`] with `valid_move == false`,
//! the reason in `rejection`, and the game untouched. Errors are reserved for
//! structural problems such as a missing king.

use super::game::Game;
use crate::board::Board;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::history::MoveRecord;
use crate::legality;
use crate::move_gen::is_in_check;
use crate::moves::{apply_move, resolve_promotion};
use crate::status::{classify, GameStatus};
use crate::types::{Piece, PieceId, PieceKind, Square};
use std::fmt;
use tracing::{debug, info};

/// A caller's request to move a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    pub piece_id: PieceId,
    pub from: Square,
    pub to: Square,
    /// Promotion choice; the configured default when `None`
    pub promotion: Option<PieceKind>,
}

/// Why a move request was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The game has already ended
    GameOver,
    /// An older history entry is being viewed
    StalePosition,
    /// Source and destination are the same square
    SameSquare,
    /// Nothing stands on the source square
    NoPieceAtSource,
    /// The piece on the source square is not the one named
    PieceMismatch,
    /// The piece belongs to the side not on move
    WrongTurn,
    /// The piece cannot go there, or doing so exposes its king
    IllegalTarget,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Rejection::GameOver => "the game is over",
            Rejection::StalePosition => "an earlier position is being viewed",
            Rejection::SameSquare => "the piece must move to a different square",
            Rejection::NoPieceAtSource => "there is no piece on that square",
            Rejection::PieceMismatch => "that piece is not on that square",
            Rejection::WrongTurn => "it is not that side's turn",
            Rejection::IllegalTarget => "that move is not legal",
        };
        f.write_str(reason)
    }
}

/// Outcome of a move request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub valid_move: bool,
    /// Position after the move, or the unchanged position if rejected
    pub board: Board,
    pub pawn_moved_two: bool,
    pub castle_event: bool,
    pub en_passant_event: bool,
    pub promotion_event: Option<PieceKind>,
    pub captured: Option<Piece>,
    /// The side now on move is in check
    pub check: bool,
    pub status: GameStatus,
    pub rejection: Option<Rejection>,
}

impl MoveResult {
    fn rejected(game: &Game, reason: Rejection) -> MoveResult {
        debug!("[ENGINE] Move rejected: {}", reason);
        MoveResult {
            valid_move: false,
            board: game.board().clone(),
            pawn_moved_two: false,
            castle_event: false,
            en_passant_event: false,
            promotion_event: None,
            captured: None,
            check: false,
            status: game.status(),
            rejection: Some(reason),
        }
    }
}

/// Validate and play a move
///
/// Checks run in order: game over, stale view, same square, empty source,
/// piece mismatch, wrong turn, then full legality. On success the new
/// position is appended to the history, the turn passes and the game is
/// classified for the side now on move.
///
/// # Errors
///
/// [`ChessEngineError::KingNotFound`] if the position has lost a king.
///
/// # Examples
///
/// ```rust,ignore
/// let mut game = new_game();
/// let pawn = game.board().piece_at(e2).unwrap().id();
/// let result = request_move(&mut game, MoveRequest { piece_id: pawn, from: e2, to: e4, promotion: None })?;
/// assert!(result.valid_move && result.pawn_moved_two);
/// ```
pub fn request_move(game: &mut Game, request: MoveRequest) -> ChessEngineResult<MoveResult> {
    let MoveRequest {
        piece_id,
        from,
        to,
        promotion,
    } = request;

    if game.status.is_game_over() {
        return Ok(MoveResult::rejected(game, Rejection::GameOver));
    }
    if !game.history.is_at_latest() {
        return Ok(MoveResult::rejected(game, Rejection::StalePosition));
    }
    if from == to {
        return Ok(MoveResult::rejected(game, Rejection::SameSquare));
    }
    let Some(&piece) = game.board().piece_at(from) else {
        return Ok(MoveResult::rejected(game, Rejection::NoPieceAtSource));
    };
    if piece.id() != piece_id {
        return Ok(MoveResult::rejected(game, Rejection::PieceMismatch));
    }
    let mover = game.side_to_move();
    if piece.color() != mover {
        return Ok(MoveResult::rejected(game, Rejection::WrongTurn));
    }
    if !legality::is_legal(game.board(), from, to)? {
        return Ok(MoveResult::rejected(game, Rejection::IllegalTarget));
    }

    let promotion = promotion_choice(&piece, to, promotion, game.config.default_promotion);
    let Some(applied) = apply_move(game.board(), from, to, promotion) else {
        return Ok(MoveResult::rejected(game, Rejection::NoPieceAtSource));
    };

    let opponent = mover.opposite();
    let check = is_in_check(&applied.board, opponent)?;
    let record = MoveRecord {
        piece_id,
        piece_kind: piece.kind(),
        piece_color: mover,
        from,
        to,
        captured: applied.captured.map(|p| p.kind()),
        is_castling: applied.castle_event,
        is_en_passant: applied.en_passant_event,
        promotion: applied.promotion_event,
        is_check: check,
        is_checkmate: false,
    };
    debug!(
        "[ENGINE] {} {} {} -> {}{}",
        mover,
        piece.kind(),
        from,
        to,
        match (&applied.captured, applied.promotion_event) {
            _ if applied.castle_event => " (castle)".to_string(),
            _ if applied.en_passant_event => " (en passant)".to_string(),
            (_, Some(kind)) => format!(" (promotes to {})", kind),
            (Some(victim), None) => format!(" (takes {})", victim.kind()),
            (None, None) => String::new(),
        }
    );
    game.history.push(applied.board.clone(), record);

    let status = classify(&game.history, opponent, &game.config)?;
    if let Some(last) = game.history.last_record_mut() {
        last.is_checkmate = status.is_checkmate();
    }
    game.status = status;
    if status.is_game_over() {
        info!("[ENGINE] Game over after {} plies: {}", game.history.ply(), status);
    }

    Ok(MoveResult {
        valid_move: true,
        board: applied.board,
        pawn_moved_two: applied.pawn_moved_two,
        castle_event: applied.castle_event,
        en_passant_event: applied.en_passant_event,
        promotion_event: applied.promotion_event,
        captured: applied.captured,
        check,
        status,
        rejection: None,
    })
}

/// Promotion kind for a move, `None` unless a pawn reaches its last rank
fn promotion_choice(
    piece: &Piece,
    to: Square,
    requested: Option<PieceKind>,
    default: PieceKind,
) -> Option<PieceKind> {
    if piece.kind() == PieceKind::Pawn && to.rank() == piece.color().promotion_rank() {
        Some(resolve_promotion(requested, default))
    } else {
        None
    }
}

/// Is `from` -> `to` a legal move for the side on move right now
pub fn is_legal_move(game: &Game, from: Square, to: Square) -> ChessEngineResult<bool> {
    if game.status.is_game_over() {
        return Ok(false);
    }
    match game.board().piece_at(from) {
        Some(piece) if piece.color() == game.side_to_move() => {
            legality::is_legal(game.board(), from, to)
        }
        _ => Ok(false),
    }
}

/// Legal destinations of a piece, for move hints
///
/// Empty when the piece belongs to the side not on move or the game is over.
///
/// # Errors
///
/// [`ChessEngineError::PieceNotFound`] if `piece_id` is not on the board.
pub fn legal_targets(game: &Game, piece_id: PieceId) -> ChessEngineResult<Vec<Square>> {
    let piece = game
        .board()
        .piece(piece_id)
        .ok_or(ChessEngineError::PieceNotFound { id: piece_id })?;
    if game.status.is_game_over() || piece.color() != game.side_to_move() {
        return Ok(Vec::new());
    }
    legality::legal_targets(game.board(), piece)
}
