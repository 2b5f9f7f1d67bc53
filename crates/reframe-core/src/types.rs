//! Core data types for the reframe pipeline.
//!
//! These types describe what a run plans to do and what it actually did.

use image::ImageFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::FrameError;
use crate::pipeline::natural::SortKey;

/// Output container format for renumbered frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameFormat {
    /// Lossless PNG (default)
    #[default]
    Png,
    /// Uncompressed BMP
    Bmp,
    /// TIFF
    Tiff,
    /// Baseline JPEG (alpha is dropped)
    Jpeg,
}

impl FrameFormat {
    /// File extension written after the zero-padded index.
    pub fn extension(self) -> &'static str {
        match self {
            FrameFormat::Png => "png",
            FrameFormat::Bmp => "bmp",
            FrameFormat::Tiff => "tiff",
            FrameFormat::Jpeg => "jpg",
        }
    }

    /// The `image` crate format used for encoding.
    pub fn image_format(self) -> ImageFormat {
        match self {
            FrameFormat::Png => ImageFormat::Png,
            FrameFormat::Bmp => ImageFormat::Bmp,
            FrameFormat::Tiff => ImageFormat::Tiff,
            FrameFormat::Jpeg => ImageFormat::Jpeg,
        }
    }
}

impl std::fmt::Display for FrameFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameFormat::Png => write!(f, "png"),
            FrameFormat::Bmp => write!(f, "bmp"),
            FrameFormat::Tiff => write!(f, "tiff"),
            FrameFormat::Jpeg => write!(f, "jpeg"),
        }
    }
}

/// A discovered source frame together with its natural sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFrame {
    /// Full path to the source file
    pub path: PathBuf,
    /// Integers embedded in the file name, left to right
    pub key: SortKey,
}

impl SourceFrame {
    /// File name portion of the path, lossily converted.
    pub fn file_name(&self) -> String {
        display_name(&self.path)
    }
}

/// One step of a renumbering plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFrame {
    /// Sequential index assigned to this frame
    pub index: u64,
    /// Source file
    pub source: PathBuf,
    /// Destination file
    pub destination: PathBuf,
}

/// What happened to one planned frame.
#[derive(Debug)]
pub struct FrameOutcome {
    /// Sequential index this frame was assigned
    pub index: u64,
    /// Source file
    pub source: PathBuf,
    /// Destination path on success, cause on failure
    pub result: Result<PathBuf, FrameError>,
}

impl FrameOutcome {
    /// Whether the frame was written successfully.
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Report for a whole run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Per-frame outcomes in processing order
    pub outcomes: Vec<FrameOutcome>,
    /// Wall-clock time spent in the loop
    pub elapsed: Duration,
    /// True if nothing was decoded or written
    pub dry_run: bool,
}

impl BatchReport {
    /// Number of frames written.
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// Number of frames that failed.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Iterate over the failed outcomes.
    pub fn failures(&self) -> impl Iterator<Item = &FrameOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }
}

/// File name of a path for log lines, falling back to the full path.
pub(crate) fn display_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_format_extension() {
        assert_eq!(FrameFormat::Png.extension(), "png");
        assert_eq!(FrameFormat::Jpeg.extension(), "jpg");
        assert_eq!(FrameFormat::default(), FrameFormat::Png);
    }

    #[test]
    fn test_batch_report_counts() {
        let report = BatchReport {
            outcomes: vec![
                FrameOutcome {
                    index: 1,
                    source: PathBuf::from("rgb_1.0.jpg"),
                    result: Ok(PathBuf::from("frame_00001.png")),
                },
                FrameOutcome {
                    index: 2,
                    source: PathBuf::from("rgb_2.0.jpg"),
                    result: Err(FrameError::Decode {
                        path: PathBuf::from("rgb_2.0.jpg"),
                        message: "truncated".to_string(),
                    }),
                },
            ],
            elapsed: Duration::from_millis(5),
            dry_run: false,
        };

        assert_eq!(report.succeeded(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.failures().next().map(|o| o.index), Some(2));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(
            display_name(std::path::Path::new("/a/b/rgb_1.0.jpg")),
            "rgb_1.0.jpg"
        );
    }
}
