//! Reframe Core - renumber and transcode sequentially captured image frames.
//!
//! A capture tool writes frames as `rgb_<sec>.<frac>.jpg`. Reframe finds
//! them, orders them by the integers embedded in their names, and writes
//! copies as `frame_00001.png`, `frame_00002.png`, and so on.
//!
//! # Architecture
//!
//! ```text
//! Discover (glob) → Order (natural sort) → Decode → Encode → Write
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use reframe_core::{Config, Renumberer, RunOptions};
//!
//! fn main() -> reframe_core::Result<()> {
//!     let config = Config::load()?;
//!     let report = Renumberer::new(&config)?.run(&RunOptions::default())?;
//!     println!("{} converted, {} failed", report.succeeded(), report.failed());
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod pipeline;
pub mod types;

// Re-exports for convenient access
pub use config::Config;
pub use error::{ConfigError, FrameError, FrameResult, ReframeError, Result};
pub use pipeline::{FileDiscovery, FrameNamer, Renumberer, RunOptions, SortKey};
pub use types::{BatchReport, FrameFormat, FrameOutcome, PlannedFrame, SourceFrame};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
