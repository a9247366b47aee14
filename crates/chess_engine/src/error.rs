//! Error types for chess engine
//!
//! Only structural failures are errors here. An illegal move is an ordinary
//! outcome and is reported through [`crate::MoveResult`] with
//! `valid_move == false`; the variants below mean the caller handed the engine
//! a position it could never have produced itself.

use crate::types::{Color, PieceId};
use thiserror::Error;

/// Errors that can occur in the chess engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessEngineError {
    /// A side has no king on the board
    #[error("No {color} king on the board")]
    KingNotFound { color: Color },

    /// A piece id does not refer to any piece on the board
    #[error("No piece with id {id} on the board")]
    PieceNotFound { id: PieceId },

    /// The position cannot be used to start a game
    #[error("Invalid setup: {message}")]
    InvalidSetup { message: String },
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
