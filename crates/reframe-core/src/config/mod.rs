//! Configuration management for reframe.
//!
//! Configuration is loaded from a TOML file in the platform config directory.
//! Every section has defaults, so a missing file or a partial file is fine.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for reframe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Renumbering settings
    pub renumber: RenumberConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// Uses platform-appropriate directories:
    /// - macOS: ~/Library/Application Support/com.reframe.reframe/config.toml
    /// - Linux: ~/.config/reframe/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\reframe\config\config.toml
    ///
    /// Falls back to ~/.reframe/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "reframe", "reframe")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".reframe").join("config.toml")
            })
    }

    /// Resolved source directory (with ~ expansion).
    pub fn source_dir(&self) -> PathBuf {
        expand(&self.renumber.source_dir)
    }

    /// Resolved destination directory (with ~ expansion).
    pub fn dest_dir(&self) -> PathBuf {
        expand(&self.renumber.dest_dir)
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

fn expand(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();
    let expanded = shellexpand::tilde(&path_str);
    PathBuf::from(expanded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FrameFormat;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.renumber.pattern, "rgb_*.jpg");
        assert_eq!(config.renumber.output_prefix, "frame_");
        assert_eq!(config.renumber.index_width, 5);
        assert_eq!(config.renumber.start_index, 1);
        assert_eq!(config.renumber.output_format, FrameFormat::Png);
        assert!(!config.renumber.delete_originals);
    }

    #[test]
    fn test_config_to_toml() {
        let config = Config::default();
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[renumber]"));
        assert!(toml.contains("[logging]"));
        assert!(toml.contains("output_format = \"png\""));
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[renumber]\nsource_dir = \"/captures/in\"\noutput_format = \"bmp\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.renumber.source_dir, PathBuf::from("/captures/in"));
        assert_eq!(config.renumber.output_format, FrameFormat::Bmp);
        assert_eq!(config.renumber.pattern, "rgb_*.jpg");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_rejects_unknown_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[renumber]\noutput_format = \"gif\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_tilde_expansion() {
        let mut config = Config::default();
        config.renumber.dest_dir = PathBuf::from("~/frames");
        assert!(!config.dest_dir().to_string_lossy().starts_with('~'));
    }
}
