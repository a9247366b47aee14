//! Feedback cues
//!
//! What the player should hear after a move attempt. A front end maps each
//! cue to a sound; the terminal front end rings the bell for the game end.

use chess_engine::MoveResult;
use std::fmt;

/// Feedback for one move attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveCue {
    /// A quiet move
    Move,
    /// A capture, en passant included
    Capture,
    /// The attempt was refused
    Illegal,
    /// The move ended the game
    GameEnd,
}

impl fmt::Display for MoveCue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MoveCue::Move => "move",
            MoveCue::Capture => "capture",
            MoveCue::Illegal => "illegal",
            MoveCue::GameEnd => "game end",
        };
        f.write_str(name)
    }
}

/// Cue for the outcome of a move request
pub fn cue_for(result: &MoveResult) -> MoveCue {
    if !result.valid_move {
        MoveCue::Illegal
    } else if result.status.is_game_over() {
        MoveCue::GameEnd
    } else if result.captured.is_some() || result.en_passant_event {
        MoveCue::Capture
    } else {
        MoveCue::Move
    }
}
