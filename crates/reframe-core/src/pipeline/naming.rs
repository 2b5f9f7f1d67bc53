//! Destination names: prefix, zero-padded index, extension.

use std::path::{Path, PathBuf};

use crate::config::RenumberConfig;

/// Builds output file names such as `frame_00001.png`.
#[derive(Debug, Clone)]
pub struct FrameNamer {
    prefix: String,
    width: usize,
    extension: &'static str,
}

impl FrameNamer {
    /// Create a namer from explicit parts.
    pub fn new(prefix: impl Into<String>, width: usize, extension: &'static str) -> Self {
        Self {
            prefix: prefix.into(),
            width,
            extension,
        }
    }

    /// Create a namer from renumbering settings.
    pub fn from_config(config: &RenumberConfig) -> Self {
        Self::new(
            config.output_prefix.clone(),
            config.index_width,
            config.output_format.extension(),
        )
    }

    /// File name for a sequential index. Indices wider than the pad width
    /// are written in full.
    pub fn file_name(&self, index: u64) -> String {
        format!(
            "{}{:0width$}.{}",
            self.prefix,
            index,
            self.extension,
            width = self.width
        )
    }

    /// Full destination path for a sequential index.
    pub fn path_in(&self, dir: &Path, index: u64) -> PathBuf {
        dir.join(self.file_name(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_padded_names() {
        let namer = FrameNamer::new("frame_", 5, "png");
        assert_eq!(namer.file_name(1), "frame_00001.png");
        assert_eq!(namer.file_name(42), "frame_00042.png");
        assert_eq!(namer.file_name(99999), "frame_99999.png");
    }

    #[test]
    fn test_index_wider_than_padding() {
        let namer = FrameNamer::new("frame_", 5, "png");
        assert_eq!(namer.file_name(123456), "frame_123456.png");
    }

    #[test]
    fn test_from_config() {
        let namer = FrameNamer::from_config(&RenumberConfig::default());
        assert_eq!(namer.file_name(3), "frame_00003.png");
        assert_eq!(
            namer.path_in(Path::new("out"), 3),
            Path::new("out").join("frame_00003.png")
        );
    }
}
