//! Public API for the chess engine
//!
//! High-level entry points for callers: starting games, requesting moves,
//! hint queries, status and the automated reply.
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle (new_game, game_from_board, reset_game)
//! - `moves` - Move requests and validation (request_move, is_legal_move, legal_targets)
//! - `state` - Game state queries and AI (game_status, reply)

mod game;
mod moves;
mod state;

pub use game::{game_from_board, new_game, new_game_with, reset_game, Game};
pub use moves::{is_legal_move, legal_targets, request_move, MoveRequest, MoveResult, Rejection};
pub use state::{game_status, is_check, reply};
