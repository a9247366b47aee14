//! Settings persistence
//!
//! Saves and loads [`GameSettings`] to/from a JSON file so preferences
//! survive between sessions.
//!
//! # File Location
//!
//! `settings.json` in the user's configuration directory, e.g.
//! `~/.config/knightchess/settings.json` on Linux. Falls back to
//! `settings.json` in the working directory when no config directory exists.
//!
//! # Error Handling
//!
//! - [`load_settings`] never fails: unreadable or invalid files fall back to
//!   defaults with a warning
//! - [`save_settings`] reports failures to the caller after logging them

use crate::core::{CoreResult, GameSettings};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Resolve the default settings file path
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "knightchess", "KnightChess") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read settings from `path`, reporting what went wrong
pub fn try_load_settings(path: &Path) -> CoreResult<GameSettings> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Load settings from `path`, falling back to defaults
pub fn load_settings(path: &Path) -> GameSettings {
    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return GameSettings::default();
    }

    match try_load_settings(path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, e
            );
            GameSettings::default()
        }
    }
}

/// Write settings to `path`, creating its directory if needed
pub fn save_settings(path: &Path, settings: &GameSettings) -> CoreResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent).inspect_err(|e| {
                error!("[SETTINGS] Failed to create settings directory at {:?}: {}", parent, e);
            })?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json).inspect_err(|e| {
        error!("[SETTINGS] Failed to write settings file at {:?}: {}", path, e);
    })?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CoreError;
    use chess_engine::Color;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("knightchess-test-{}-{}", std::process::id(), name))
            .join(SETTINGS_FILENAME)
    }

    #[test]
    fn test_save_then_load() {
        //! Saved settings come back unchanged, directories are created
        let path = scratch_path("roundtrip");
        let settings = GameSettings {
            computer_color: Some(Color::White),
            reply_delay_ms: 250,
            ..GameSettings::default()
        };

        save_settings(&path, &settings).unwrap();
        assert_eq!(load_settings(&path), settings);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = scratch_path("missing");
        assert_eq!(load_settings(&path), GameSettings::default());
        assert!(matches!(try_load_settings(&path), Err(CoreError::SettingsIo(_))));
    }

    #[test]
    fn test_corrupt_file_uses_defaults() {
        //! Invalid JSON is reported by try_load and ignored by load
        let path = scratch_path("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            try_load_settings(&path),
            Err(CoreError::SettingsSerialization(_))
        ));
        assert_eq!(load_settings(&path), GameSettings::default());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
