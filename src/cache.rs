//! Remembers the theme preference between runs.
//!
//! The preference lives in `.cache/preferences.toml` as a single `theme`
//! field. Read and write failures are logged and otherwise ignored so the UI
//! never blocks on them.

use crate::config::ThemeMode;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const CACHE_DIR: &str = ".cache";

#[derive(serde::Serialize, serde::Deserialize)]
struct Preferences {
    theme: ThemeMode,
}

pub fn preferences_path() -> PathBuf {
    Path::new(CACHE_DIR).join("preferences.toml")
}

/// Load the stored theme preference, if any.
pub fn load_theme_preference(path: &Path) -> Option<ThemeMode> {
    let data = fs::read_to_string(path).ok()?;
    match toml::from_str::<Preferences>(&data) {
        Ok(prefs) => Some(prefs.theme),
        Err(err) => {
            warn!(path = %path.display(), "Ignoring unreadable preferences: {err}");
            None
        }
    }
}

/// Persist the theme preference. Errors are logged and ignored to keep the
/// UI responsive.
pub fn save_theme_preference(path: &Path, theme: ThemeMode) {
    if let Some(parent) = path.parent() {
        if let Err(err) = fs::create_dir_all(parent) {
            warn!(path = %parent.display(), "Failed to create cache dir: {err}");
            return;
        }
    }
    let prefs = Preferences { theme };
    match toml::to_string(&prefs) {
        Ok(contents) => {
            if let Err(err) = fs::write(path, contents) {
                warn!(path = %path.display(), "Failed to save theme preference: {err}");
            }
        }
        Err(err) => warn!("Failed to serialize theme preference: {err}"),
    }
}
