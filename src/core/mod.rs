//! Core module - settings, persistence and application errors
//!
//! Everything the terminal game needs that is not chess: the user's
//! [`GameSettings`], loading and saving them as JSON in the platform config
//! directory, and the [`CoreError`] type the application reports through.
//!
//! # Usage Example
//!
//! ```rust,ignore
//! use knightchess::core::{load_settings, settings_path};
//!
//! let path = settings_path();
//! let settings = load_settings(&path);
//! println!("computer plays {:?}", settings.computer_color);
//! ```

pub mod error;
pub mod resources;
pub mod settings_persistence;

pub use error::{CoreError, CoreResult};
pub use resources::GameSettings;
pub use settings_persistence::{load_settings, save_settings, settings_path, try_load_settings};
