//! Sub-configuration structs with their defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::types::FrameFormat;

/// Renumbering settings: where frames come from, where they go, and how
/// they are named.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenumberConfig {
    /// Directory scanned for source frames (not recursive)
    pub source_dir: PathBuf,

    /// Directory the renumbered frames are written to
    pub dest_dir: PathBuf,

    /// Case-sensitive glob matched against file names
    pub pattern: String,

    /// Prefix placed before the zero-padded index
    pub output_prefix: String,

    /// Number of digits the index is padded to
    pub index_width: usize,

    /// Index given to the first frame
    pub start_index: u64,

    /// Output container format
    pub output_format: FrameFormat,

    /// Create `dest_dir` if it does not exist
    pub create_dest_dir: bool,

    /// Remove each source file after its output is written
    pub delete_originals: bool,
}

impl Default for RenumberConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("./data/sampled_big_room_undistort"),
            dest_dir: PathBuf::from("./data/small_big_room_rewrite"),
            pattern: "rgb_*.jpg".to_string(),
            output_prefix: "frame_".to_string(),
            index_width: 5,
            start_index: 1,
            output_format: FrameFormat::Png,
            create_dest_dir: false,
            delete_originals: false,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
