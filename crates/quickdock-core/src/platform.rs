//! Platform locations for the settings document.

use crate::config::PathsConfig;
use crate::error::{DockError, Result};
use std::path::PathBuf;

/// Get the quickdock configuration directory.
///
/// # Platform Behavior
/// - **Linux**: `~/.config/quickdock` (XDG_CONFIG_HOME)
/// - **Windows**: `%APPDATA%\quickdock`
/// - **macOS**: `~/Library/Application Support/quickdock`
pub fn config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().ok_or_else(|| DockError::Io {
        message: "Could not determine platform config directory".to_string(),
        path: None,
        source: None,
    })?;
    Ok(config_dir.join(PathsConfig::APP_CONFIG_DIR_NAME))
}

/// Get the default location of the settings document.
///
/// Returns `{config_dir}/settings.json`.
pub fn settings_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(PathsConfig::SETTINGS_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_contains_app_dir() {
        let dir = config_dir().unwrap();
        assert!(
            dir.to_string_lossy().contains("quickdock"),
            "Config dir should contain 'quickdock': {:?}",
            dir
        );
    }

    #[test]
    fn test_settings_path_ends_with_filename() {
        let path = settings_path().unwrap();
        assert!(
            path.to_string_lossy().ends_with("settings.json"),
            "Settings path should end with settings.json: {:?}",
            path
        );
    }
}
