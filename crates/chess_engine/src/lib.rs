//! # Chess rules engine
//!
//! Full chess rules for a two-player game: legal move generation, castling,
//! en passant, promotion and underpromotion, check, checkmate, stalemate,
//! insufficient material and threefold repetition. A one-ply material
//! evaluator drives an automated opponent.
//!
//! The engine is pure and synchronous. It never renders, plays sounds or reads
//! input; everything a caller needs to react to comes back as data in
//! [`MoveResult`].
//!
//! ## Flow of a move
//!
//! ```text
//! request_move ─► move_gen (pseudo-legal) ─► legality (simulate, king safe?)
//!              ─► moves::apply_move (castling / en passant / promotion)
//!              ─► status::classify (mate, stalemate, draws) ─► MoveResult
//! ```
//!
//! ## Module Organization
//!
//! - `types` / `board` - Pieces, squares and the position
//! - `move_gen` - Pseudo-legal targets and attack detection
//! - `legality` - Check-avoidance by simulation
//! - `moves` - Applying moves with their special rules
//! - `status` / `draw` - End-of-game classification
//! - `evaluation` / `ai` - Material score and the one-ply opponent
//! - `history` - Position history with a review cursor
//! - `api` - Entry points for callers

pub mod ai;
pub mod api;
pub mod board;
pub mod config;
pub mod constants;
pub mod draw;
pub mod error;
pub mod evaluation;
pub mod history;
pub mod legality;
pub mod move_gen;
pub mod moves;
pub mod status;
pub mod types;

pub use ai::{select_move, CandidateMove};
pub use api::{
    game_from_board, game_status, is_check, is_legal_move, legal_targets, new_game, new_game_with,
    reply, request_move, reset_game, Game, MoveRequest, MoveResult, Rejection,
};
pub use board::{Board, Placement, RemainingPieces};
pub use config::EngineConfig;
pub use error::{ChessEngineError, ChessEngineResult};
pub use history::{GameHistory, MoveRecord};
pub use status::GameStatus;
pub use types::{Color, Piece, PieceId, PieceKind, Square};
