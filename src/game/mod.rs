//! Terminal front end for the chess engine
//!
//! Turns typed lines into engine calls and engine results into text. The
//! rules themselves live in the `chess_engine` crate; this module only
//! carries the caller's side of the conversation.
//!
//! # Module Organization
//!
//! - `session` - Command parsing and the game loop state
//! - `notation` - Coordinate move input and long-form move text
//! - `render` - Text board with last-move and check markers
//! - `cues` - Move / capture / illegal / game-end feedback

pub mod cues;
pub mod notation;
pub mod render;
pub mod session;

pub use cues::{cue_for, MoveCue};
pub use notation::{format_move, parse_move, parse_square, ParsedMove};
pub use render::render_board;
pub use session::{parse_command, Command, Outcome, Session};
