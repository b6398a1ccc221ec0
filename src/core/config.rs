//! Rules configuration persistence
//!
//! Saves and loads [`RulesConfig`] to/from a JSON file.
//!
//! # File Location
//!
//! [`default_config_path`] resolves `rules.json` in the user's configuration
//! directory, e.g. `~/.config/xfchess/rules.json` on Linux. Callers may pass any
//! other path.
//!
//! # Error Handling
//!
//! [`RulesConfig::load`] is strict and returns the error. [`RulesConfig::load_or_default`]
//! logs the failure and falls back to defaults, which is what interactive
//! front ends want.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::error::CoreResult;
use crate::game::rules::EscapeSearch;

/// Config filename
const CONFIG_FILENAME: &str = "rules.json";

/// Tunable rule behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Which replies count as escaping check when deciding checkmate
    pub escape_search: EscapeSearch,
}

impl RulesConfig {
    /// Read a config file, failing on I/O or parse errors
    pub fn load(path: &Path) -> CoreResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        info!("[CONFIG] Loaded rules config from {:?}", path);
        Ok(config)
    }

    /// Read a config file, using defaults if it is missing or invalid
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            info!("[CONFIG] No config file found at {:?}. Using defaults.", path);
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "[CONFIG] Failed to load config at {:?}: {}. Using defaults.",
                    path, e
                );
                Self::default()
            }
        }
    }

    /// Write the config as pretty JSON, creating parent directories
    pub fn save(&self, path: &Path) -> CoreResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!("[CONFIG] Saved rules config to {:?}", path);
        Ok(())
    }
}

/// Resolve the default config file path
///
/// Falls back to `rules.json` in the current directory if the system config
/// directory cannot be found.
pub fn default_config_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "XFChess") {
        proj_dirs.config_dir().join(CONFIG_FILENAME)
    } else {
        PathBuf::from(CONFIG_FILENAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::CoreError;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn scratch_path(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        std::env::temp_dir()
            .join(format!("chess_rules_{}_{}_{}", name, std::process::id(), nanos))
            .join(CONFIG_FILENAME)
    }

    #[test]
    fn test_default_is_king_only() {
        assert_eq!(RulesConfig::default().escape_search, EscapeSearch::KingOnly);
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path("roundtrip");
        let config = RulesConfig {
            escape_search: EscapeSearch::AnyPiece,
        };

        config.save(&path).unwrap();
        let loaded = RulesConfig::load(&path).unwrap();
        assert_eq!(loaded, config);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_parse_snake_case_and_missing_fields() {
        let config: RulesConfig = serde_json::from_str(r#"{"escape_search":"any_piece"}"#).unwrap();
        assert_eq!(config.escape_search, EscapeSearch::AnyPiece);

        let empty: RulesConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, RulesConfig::default());
    }

    #[test]
    fn test_load_missing_file_is_error_but_default_falls_back() {
        let path = scratch_path("missing");
        assert!(matches!(RulesConfig::load(&path), Err(CoreError::ConfigIo(_))));
        assert_eq!(RulesConfig::load_or_default(&path), RulesConfig::default());
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let path = scratch_path("malformed");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            RulesConfig::load(&path),
            Err(CoreError::ConfigSerialization(_))
        ));
        assert_eq!(RulesConfig::load_or_default(&path), RulesConfig::default());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_default_config_path_names_file() {
        assert!(default_config_path().ends_with(CONFIG_FILENAME));
    }
}
