//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate with fallbacks.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/hacker-stories/`, `~/.cache/hacker-stories/`
//! - macOS: `~/Library/Application Support/hacker-stories/`, `~/Library/Caches/hacker-stories/`
//! - Windows: `%APPDATA%\hacker-stories\`, `%LOCALAPPDATA%\hacker-stories\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "hacker-stories";

/// Get the application config directory
/// Returns ~/.config/hacker-stories/ on Linux, ~/Library/Application Support/hacker-stories/ on macOS
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the application cache directory
/// Returns ~/.cache/hacker-stories/ on Linux, ~/Library/Caches/hacker-stories/ on macOS
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get path to the durable key-value storage file
pub fn storage_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("storage.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_path_lives_in_config_dir() {
        let path = storage_path().unwrap();
        assert!(path.ends_with("storage.toml"));
        assert!(path.parent().unwrap().ends_with(APP_NAME));
    }
}
