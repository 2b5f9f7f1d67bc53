//! Configuration validation.

use crate::error::ConfigError;

use super::Config;

/// Widest index that still fits a `u64` counter.
const MAX_INDEX_WIDTH: usize = 20;

impl Config {
    /// Validate configuration values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let renumber = &self.renumber;

        if renumber.source_dir.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "renumber.source_dir must not be empty".into(),
            ));
        }
        if renumber.dest_dir.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "renumber.dest_dir must not be empty".into(),
            ));
        }
        if renumber.pattern.is_empty() {
            return Err(ConfigError::ValidationError(
                "renumber.pattern must not be empty".into(),
            ));
        }
        if let Err(e) = glob::Pattern::new(&renumber.pattern) {
            return Err(ConfigError::ValidationError(format!(
                "renumber.pattern is not a valid glob: {e}"
            )));
        }
        if renumber.index_width == 0 || renumber.index_width > MAX_INDEX_WIDTH {
            return Err(ConfigError::ValidationError(format!(
                "renumber.index_width must be between 1 and {MAX_INDEX_WIDTH}"
            )));
        }
        if renumber
            .output_prefix
            .chars()
            .any(std::path::is_separator)
        {
            return Err(ConfigError::ValidationError(
                "renumber.output_prefix must not contain a path separator".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_passes_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_dirs() {
        let mut config = Config::default();
        config.renumber.source_dir = PathBuf::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("source_dir"));

        let mut config = Config::default();
        config.renumber.dest_dir = PathBuf::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("dest_dir"));
    }

    #[test]
    fn test_validate_rejects_bad_pattern() {
        let mut config = Config::default();
        config.renumber.pattern = "rgb_[.jpg".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("pattern"));

        config.renumber.pattern = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_index_width_out_of_range() {
        let mut config = Config::default();
        config.renumber.index_width = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("index_width"));

        config.renumber.index_width = 21;
        assert!(config.validate().is_err());

        config.renumber.index_width = 20;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_prefix_with_separator() {
        let mut config = Config::default();
        config.renumber.output_prefix = "sub/frame_".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("output_prefix"));
    }
}
