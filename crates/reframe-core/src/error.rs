//! Error types for the reframe pipeline.
//!
//! Errors come in two tiers. [`ReframeError`] covers fatal preconditions that
//! stop a run before any frame is touched. [`FrameError`] covers failures of a
//! single frame, which are logged and skipped while the batch keeps going.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Top-level error type for reframe operations.
#[derive(Error, Debug)]
pub enum ReframeError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The source directory is missing or is not a directory
    #[error("Directory not found at '{}'", .0.display())]
    SourceDirNotFound(PathBuf),

    /// Discovery found nothing to process
    #[error("No matching '{pattern}' files were found in '{}'", .dir.display())]
    NoMatches { dir: PathBuf, pattern: String },

    /// The destination directory is missing and creation is disabled
    #[error("Destination directory not found at '{}' (enable create_dest_dir to create it)", .0.display())]
    DestDirNotFound(PathBuf),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Failure of a single frame. Never aborts the batch.
#[derive(Error, Debug)]
pub enum FrameError {
    /// Source could not be read or decoded
    #[error("Decode error for {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// Source container format could not be determined
    #[error("Unsupported format for {path}: {format}")]
    UnsupportedFormat { path: PathBuf, format: String },

    /// Pixel data could not be encoded into the output format
    #[error("Encode error for {path}: {message}")]
    Encode { path: PathBuf, message: String },

    /// Output file could not be created or flushed
    #[error("Write error for {path}: {message}")]
    Write { path: PathBuf, message: String },

    /// Output was written but the original could not be removed
    #[error("Failed to remove original {path}: {message}")]
    Remove { path: PathBuf, message: String },
}

impl FrameError {
    /// The file this failure refers to.
    pub fn path(&self) -> &Path {
        match self {
            FrameError::Decode { path, .. }
            | FrameError::UnsupportedFormat { path, .. }
            | FrameError::Encode { path, .. }
            | FrameError::Write { path, .. }
            | FrameError::Remove { path, .. } => path,
        }
    }
}

/// Convenience type alias for reframe results.
pub type Result<T> = std::result::Result<T, ReframeError>;

/// Convenience type alias for per-frame results.
pub type FrameResult<T> = std::result::Result<T, FrameError>;
