//! User settings

use chess_engine::{Color, EngineConfig};
use serde::{Deserialize, Serialize};

/// Preferences that persist between sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Side the computer plays, `None` for two humans at one terminal
    pub computer_color: Option<Color>,

    /// Pause before the computer answers, in milliseconds
    pub reply_delay_ms: u64,

    /// Whether to list legal targets after selecting a piece with `hints`
    pub show_hints: bool,

    /// Whether to mark the last move's squares on the board
    pub highlight_last_move: bool,

    /// Rules options handed to the engine
    pub engine: EngineConfig,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            computer_color: Some(Color::Black),
            reply_delay_ms: 1000,
            show_hints: true,
            highlight_last_move: true,
            engine: EngineConfig::default(),
        }
    }
}
