//! File discovery for finding source frames in a directory.

use glob::{MatchOptions, Pattern};
use std::path::Path;
use walkdir::WalkDir;

use crate::error::{ConfigError, ReframeError, Result};
use crate::types::SourceFrame;

use super::natural::{sort_naturally, SortKey};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Finds files directly inside a directory whose name matches a glob.
pub struct FileDiscovery {
    pattern: Pattern,
}

impl FileDiscovery {
    /// Create a discovery instance for a glob such as `rgb_*.jpg`.
    pub fn new(pattern: &str) -> std::result::Result<Self, ConfigError> {
        let pattern = Pattern::new(pattern).map_err(|e| {
            ConfigError::ValidationError(format!("invalid pattern '{pattern}': {e}"))
        })?;
        Ok(Self { pattern })
    }

    /// The glob this instance matches against.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Discover matching regular files in `dir`, ordered by name.
    ///
    /// Not recursive. Matching entries that are not regular files are
    /// skipped. A missing directory is a fatal error.
    pub fn discover(&self, dir: &Path) -> Result<Vec<SourceFrame>> {
        if !dir.is_dir() {
            return Err(ReframeError::SourceDirNotFound(dir.to_path_buf()));
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry in {:?}: {}", dir, e);
                    continue;
                }
            };

            let Some(name) = entry.file_name().to_str() else {
                tracing::debug!("Skipping non UTF-8 name: {:?}", entry.file_name());
                continue;
            };
            if !self.is_match(name) {
                continue;
            }
            if !entry.file_type().is_file() {
                tracing::debug!("Skipping {:?}: not a regular file", entry.path());
                continue;
            }

            let key = SortKey::from_name(name);
            if key.is_empty() {
                tracing::debug!("{:?} has no digits and sorts before numbered frames", name);
            } else {
                tracing::debug!("{:?} -> key {}", name, key);
            }
            files.push(SourceFrame {
                path: entry.path().to_path_buf(),
                key,
            });
        }

        // Sort by path for deterministic ordering
        files.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(files)
    }

    /// Discover and order frames by natural sort key.
    ///
    /// Zero matches is a fatal error.
    pub fn discover_ordered(&self, dir: &Path) -> Result<Vec<SourceFrame>> {
        let mut files = self.discover(dir)?;
        if files.is_empty() {
            return Err(ReframeError::NoMatches {
                dir: dir.to_path_buf(),
                pattern: self.pattern().to_string(),
            });
        }
        sort_naturally(&mut files, |f| &f.key);
        Ok(files)
    }

    /// Check a bare file name against the pattern.
    fn is_match(&self, name: &str) -> bool {
        self.pattern.matches_with(name, MATCH_OPTIONS)
    }
}
