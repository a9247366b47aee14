//! Game status and end-of-game classification
//!
//! After every accepted move the position is classified for the side that
//! now has to move, in this order:
//!
//! 1. No legal move and in check → checkmate, the mover wins
//! 2. No legal move → stalemate
//! 3. Insufficient material
//! 4. Threefold repetition (when enabled in [`EngineConfig`])
//! 5. Otherwise the game goes on
//!
//! All non-`Ongoing` states are terminal.

use crate::board::Board;
use crate::config::EngineConfig;
use crate::draw::{is_insufficient_material, is_threefold_repetition};
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::history::GameHistory;
use crate::legality::legal_targets;
use crate::move_gen::is_in_check;
use crate::types::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the game stands
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still being accepted
    #[default]
    Ongoing,

    /// The side to move is in check with no legal move
    Checkmate { winner: Color },

    /// The side to move has no legal move but is not in check
    Stalemate,

    /// Neither side has mating material
    InsufficientMaterial,

    /// The same placement has occurred three times
    ThreefoldRepetition,
}

impl GameStatus {
    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }

    pub fn is_checkmate(&self) -> bool {
        matches!(self, GameStatus::Checkmate { .. })
    }

    pub fn is_draw(&self) -> bool {
        matches!(
            self,
            GameStatus::Stalemate | GameStatus::InsufficientMaterial | GameStatus::ThreefoldRepetition
        )
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } => Some(*winner),
            _ => None,
        }
    }

    /// Human-readable result line
    pub fn message(&self) -> &'static str {
        match self {
            GameStatus::Ongoing => "Game in progress",
            GameStatus::Checkmate { winner: Color::White } => "White wins by checkmate!",
            GameStatus::Checkmate { winner: Color::Black } => "Black wins by checkmate!",
            GameStatus::Stalemate => "Draw by stalemate",
            GameStatus::InsufficientMaterial => "Draw by insufficient material",
            GameStatus::ThreefoldRepetition => "Draw by threefold repetition",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Does `side` have no legal move at all
pub fn has_no_moves(board: &Board, side: Color) -> ChessEngineResult<bool> {
    for &id in board.remaining().of(side) {
        let piece = board.piece(id).ok_or(ChessEngineError::PieceNotFound { id })?;
        if !legal_targets(board, piece)?.is_empty() {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Classify the latest position of `history` with `to_move` on turn
pub fn classify(
    history: &GameHistory,
    to_move: Color,
    config: &EngineConfig,
) -> ChessEngineResult<GameStatus> {
    let board = history.latest();

    if has_no_moves(board, to_move)? {
        return Ok(if is_in_check(board, to_move)? {
            GameStatus::Checkmate {
                winner: to_move.opposite(),
            }
        } else {
            GameStatus::Stalemate
        });
    }
    if is_insufficient_material(board) {
        return Ok(GameStatus::InsufficientMaterial);
    }
    if config.claim_threefold && is_threefold_repetition(history) {
        return Ok(GameStatus::ThreefoldRepetition);
    }
    Ok(GameStatus::Ongoing)
}
