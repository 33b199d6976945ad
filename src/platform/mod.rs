// strgen platform abstraction
// Resolves where settings and the history mirror live on each OS.

use std::env;
use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Overrides the data directory on every platform when set.
pub const DATA_DIR_ENV: &str = "STRGEN_DATA_DIR";

/// Returns the platform-specific configuration directory.
///
/// - **Linux**: `~/.config/strgen` (or `$XDG_CONFIG_HOME/strgen`)
/// - **macOS**: `~/Library/Application Support/strgen`
/// - **Windows**: `%APPDATA%/strgen`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Returns the directory holding the history mirror.
///
/// `$STRGEN_DATA_DIR` wins when set; otherwise:
/// - **Linux**: `~/.local/share/strgen` (or `$XDG_DATA_HOME/strgen`)
/// - **macOS**: `~/Library/Application Support/strgen`
/// - **Windows**: `%LOCALAPPDATA%/strgen`
pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = env::var(DATA_DIR_ENV) {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }

    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}
