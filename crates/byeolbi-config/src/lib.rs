//! Configuration loading for the byeolbi greeting card.
//!
//! Reads `config.toml` from the platform config directory. Every field
//! has a built-in default, so a missing file (the common case) yields
//! the stock greeting; a malformed file is a startup error.

use std::fs;
use std::path::PathBuf;

use color_eyre::eyre::WrapErr;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use byeolbi_typist::{DEFAULT_MESSAGES, PAUSE_DELAY_MS, REVEAL_DELAY_MS};

/// Default frame interval in milliseconds.
pub const DEFAULT_TICK_MS: u64 = 50;

/// User-tunable settings.
///
/// Only the message rotation and pacing are configurable; the animation
/// model itself (star count, meteor pool, constellation geometry) is
/// fixed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Messages rotated by the typist, in order.
    pub messages: Vec<String>,
    /// Frame interval for the animation loop.
    pub tick_ms: u64,
    /// Delay between revealed characters.
    pub reveal_ms: u64,
    /// Hold time on a fully revealed message.
    pub pause_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            messages: DEFAULT_MESSAGES.iter().map(|m| m.to_string()).collect(),
            tick_ms: DEFAULT_TICK_MS,
            reveal_ms: REVEAL_DELAY_MS,
            pause_ms: PAUSE_DELAY_MS,
        }
    }
}

impl Config {
    /// Load the configuration from the platform config directory.
    pub fn load() -> color_eyre::Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::from_path(path),
            _ => Ok(Self::default()),
        }
    }

    fn from_path(path: PathBuf) -> color_eyre::Result<Self> {
        let raw = fs::read_to_string(&path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&raw).wrap_err_with(|| format!("failed to parse {}", path.display()))
    }
}

/// Path of the user config file, if a config directory can be resolved.
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "byeolbi").map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_builtin_constants() {
        let config = Config::default();
        assert_eq!(config.messages.len(), 4);
        assert_eq!(config.tick_ms, 50);
        assert_eq!(config.reveal_ms, 100);
        assert_eq!(config.pause_ms, 3000);
    }

    #[test]
    fn test_partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str("tick_ms = 33\n").unwrap();
        assert_eq!(config.tick_ms, 33);
        assert_eq!(config.reveal_ms, REVEAL_DELAY_MS);
        assert_eq!(config.messages, Config::default().messages);
    }

    #[test]
    fn test_messages_override() {
        let config: Config = toml::from_str("messages = [\"hi\\nthere\"]\n").unwrap();
        assert_eq!(config.messages, vec!["hi\nthere".to_owned()]);
    }

    #[test]
    fn test_unknown_or_empty_toml_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }
}
