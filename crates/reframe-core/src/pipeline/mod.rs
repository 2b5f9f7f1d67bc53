//! Frame renumbering pipeline components.
//!
//! - **discovery**: Find source frames in a directory by glob
//! - **natural**: Natural sort keys from embedded integers
//! - **naming**: Zero-padded destination names
//! - **decode**: Load and decode source images
//! - **encode**: Re-encode pixels into the output format
//! - **processor**: Orchestrates the full run

pub mod decode;
pub mod discovery;
pub mod encode;
pub mod natural;
pub mod naming;
pub mod processor;

// Re-exports for convenient access
pub use decode::{DecodedImage, ImageDecoder};
pub use discovery::FileDiscovery;
pub use encode::FrameEncoder;
pub use natural::{sort_naturally, SortKey};
pub use naming::FrameNamer;
pub use processor::{Renumberer, RunOptions};
