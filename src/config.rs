//! Application configuration.
//!
//! Compile-time constants plus the optional TOML configuration file read at
//! startup. Text assets are loaded at compile time using `include_str!`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::error::ConfigError;

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Help text for the `HELP` command.
pub const HELP_TEXT: &str = include_str!("../assets/text/help.txt");

// =============================================================================
// Application Metadata
// =============================================================================

/// Banner printed by `VER`.
pub const VERSION_BANNER: &str =
    concat!("\nDOSTerm [Version ", env!("CARGO_PKG_VERSION"), "]\n");

// =============================================================================
// Shell Defaults
// =============================================================================

/// Drive the shell starts on.
pub const DEFAULT_DRIVE: &str = "HDD0-E";

/// Host directory backing the drive tree, relative to the working directory.
pub const DEFAULT_ROOT: &str = "fs";

/// Rows printed between `--- More ---` markers for `DIR /P`.
pub const DIR_PAGE_LINES: usize = 23;

// =============================================================================
// Configuration File
// =============================================================================

/// Optional `dosterm.toml` settings. Every field has a default, so an empty
/// file (or no file at all) is valid.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Host directory backing the drive tree.
    pub root: String,
    /// Drive the shell starts on.
    pub drive: String,
    /// Startup color attribute: two hex digits, background then foreground.
    pub color: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: DEFAULT_ROOT.to_string(),
            drive: DEFAULT_DRIVE.to_string(),
            color: None,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(ConfigError::Read)?;
        toml::from_str(&text).map_err(ConfigError::Parse)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.root, DEFAULT_ROOT);
        assert_eq!(config.drive, DEFAULT_DRIVE);
        assert!(config.color.is_none());
    }

    #[test]
    fn test_partial_config() {
        let config: Config = toml::from_str("drive = \"HDD0-C\"\ncolor = \"1F\"\n").unwrap();
        assert_eq!(config.drive, "HDD0-C");
        assert_eq!(config.color.as_deref(), Some("1F"));
        assert_eq!(config.root, DEFAULT_ROOT);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(toml::from_str::<Config>("shout = true").is_err());
    }
}
