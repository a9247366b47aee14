//! Error types for core module
//!
//! Provides custom error types for settings persistence, command input and
//! failures reported by the rules engine.

use chess_engine::ChessEngineError;
use thiserror::Error;

/// Errors that can occur in the application
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    /// The rules engine hit a structural problem
    #[error("Engine error: {0}")]
    Engine(#[from] ChessEngineError),

    /// A command or move could not be understood
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

impl CoreError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CoreError::InvalidInput {
            message: message.into(),
        }
    }
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
