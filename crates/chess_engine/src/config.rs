//! Engine configuration

use crate::types::PieceKind;
use serde::{Deserialize, Serialize};

/// Rules options a game is played under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Kind a pawn promotes to when the mover does not choose one.
    /// Anything other than knight, bishop, rook or queen is treated as queen.
    pub default_promotion: PieceKind,

    /// End the game automatically on threefold repetition
    pub claim_threefold: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_promotion: PieceKind::Queen,
            claim_threefold: true,
        }
    }
}
