//! Pipeline orchestration: discover, order, then transcode frame by frame.

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::{Config, RenumberConfig};
use crate::error::{ConfigError, FrameError, FrameResult, ReframeError, Result};
use crate::types::{display_name, BatchReport, FrameOutcome, PlannedFrame};

use super::decode::ImageDecoder;
use super::discovery::FileDiscovery;
use super::encode::FrameEncoder;
use super::naming::FrameNamer;

/// Options for a single run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Plan and log only; nothing is decoded, written, or removed
    pub dry_run: bool,
}

/// Renumbers a directory of captured frames into sequentially named outputs.
pub struct Renumberer {
    settings: RenumberConfig,
    source_dir: PathBuf,
    dest_dir: PathBuf,
    discovery: FileDiscovery,
    namer: FrameNamer,
    encoder: FrameEncoder,
}

impl Renumberer {
    /// Create a renumberer from a validated configuration.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        let settings = config.renumber.clone();
        Ok(Self {
            discovery: FileDiscovery::new(&settings.pattern)?,
            namer: FrameNamer::from_config(&settings),
            encoder: FrameEncoder::new(settings.output_format),
            source_dir: config.source_dir(),
            dest_dir: config.dest_dir(),
            settings,
        })
    }

    /// Directory scanned for source frames.
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Directory outputs are written to.
    pub fn dest_dir(&self) -> &Path {
        &self.dest_dir
    }

    /// Discover, order, and name every frame without touching any pixels.
    ///
    /// Fails if the source directory is missing, nothing matches, or the
    /// batch would number past `u64::MAX`.
    pub fn plan(&self) -> Result<Vec<PlannedFrame>> {
        let files = self.discovery.discover_ordered(&self.source_dir)?;
        let start = self.settings.start_index;
        // discover_ordered never returns an empty list
        if start.checked_add(files.len() as u64 - 1).is_none() {
            return Err(ConfigError::ValidationError(format!(
                "start_index {start} leaves no room for {} frames",
                files.len()
            ))
            .into());
        }

        Ok(files
            .into_iter()
            .enumerate()
            .map(|(offset, file)| {
                let index = start + offset as u64;
                PlannedFrame {
                    index,
                    destination: self.namer.path_in(&self.dest_dir, index),
                    source: file.path,
                }
            })
            .collect())
    }

    /// Make sure the destination directory exists, creating it if allowed.
    pub fn prepare_destination(&self) -> Result<()> {
        if self.dest_dir.is_dir() {
            return Ok(());
        }
        if !self.settings.create_dest_dir {
            return Err(ReframeError::DestDirNotFound(self.dest_dir.clone()));
        }
        std::fs::create_dir_all(&self.dest_dir)?;
        tracing::info!("Created destination directory {:?}", self.dest_dir);
        Ok(())
    }

    /// Run the whole batch.
    pub fn run(&self, options: &RunOptions) -> Result<BatchReport> {
        self.run_with(options, |_| {})
    }

    /// Run the whole batch, calling `on_frame` after each frame finishes.
    pub fn run_with<F>(&self, options: &RunOptions, on_frame: F) -> Result<BatchReport>
    where
        F: FnMut(&FrameOutcome),
    {
        let plan = self.plan()?;
        self.execute(plan, options, on_frame)
    }

    /// Execute a plan produced by [`Renumberer::plan`].
    ///
    /// Per-frame failures are logged and recorded in the report; only the
    /// fatal preconditions return `Err`. A failed frame still consumes its
    /// index, so later frames keep their positions.
    pub fn execute<F>(
        &self,
        plan: Vec<PlannedFrame>,
        options: &RunOptions,
        mut on_frame: F,
    ) -> Result<BatchReport>
    where
        F: FnMut(&FrameOutcome),
    {
        if !options.dry_run {
            self.prepare_destination()?;
        }

        tracing::info!("Found {} images to process...", plan.len());

        let start = Instant::now();
        let mut outcomes = Vec::with_capacity(plan.len());

        for planned in plan {
            let result = if options.dry_run {
                tracing::info!(
                    "Would convert '{}' -> '{}'",
                    display_name(&planned.source),
                    display_name(&planned.destination)
                );
                Ok(planned.destination.clone())
            } else {
                self.process_frame(&planned)
            };

            let outcome = FrameOutcome {
                index: planned.index,
                source: planned.source,
                result,
            };
            on_frame(&outcome);
            outcomes.push(outcome);
        }

        let report = BatchReport {
            outcomes,
            elapsed: start.elapsed(),
            dry_run: options.dry_run,
        };
        tracing::info!("Processing complete!");
        tracing::debug!(
            "{} succeeded, {} failed in {:?}",
            report.succeeded(),
            report.failed(),
            report.elapsed
        );
        Ok(report)
    }

    /// Transcode a single planned frame, logging the outcome.
    pub fn process_frame(&self, planned: &PlannedFrame) -> FrameResult<PathBuf> {
        match self.transcode(&planned.source, &planned.destination) {
            Ok(()) => {
                tracing::info!(
                    "Converted '{}' -> '{}'",
                    display_name(&planned.source),
                    display_name(&planned.destination)
                );
                Ok(planned.destination.clone())
            }
            Err(e) => {
                tracing::error!(
                    "Could not process {}. Error: {}",
                    display_name(&planned.source),
                    e
                );
                Err(e)
            }
        }
    }

    fn transcode(&self, source: &Path, destination: &Path) -> FrameResult<()> {
        let frame_start = Instant::now();

        let decoded = ImageDecoder::decode(source)?;
        let written = self.encoder.encode_to_file(&decoded.image, destination)?;
        drop(decoded);

        tracing::debug!(
            "Wrote {:?} ({} bytes) in {:?}",
            destination,
            written,
            frame_start.elapsed()
        );

        if self.settings.delete_originals {
            std::fs::remove_file(source).map_err(|e| FrameError::Remove {
                path: source.to_path_buf(),
                message: e.to_string(),
            })?;
            tracing::debug!("Removed original {:?}", source);
        }
        Ok(())
    }
}
