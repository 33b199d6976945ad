// strgen platform paths for Linux
// Config: ~/.config/strgen
// Data:   ~/.local/share/strgen

use std::env;
use std::path::PathBuf;

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Uses `$XDG_CONFIG_HOME/strgen` if set, otherwise `~/.config/strgen`.
pub fn get_config_dir() -> PathBuf {
    match env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("strgen"),
        _ => home_dir().join(".config").join("strgen"),
    }
}

/// Uses `$XDG_DATA_HOME/strgen` if set, otherwise `~/.local/share/strgen`.
pub fn get_data_dir() -> PathBuf {
    match env::var("XDG_DATA_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("strgen"),
        _ => home_dir().join(".local").join("share").join("strgen"),
    }
}
