//! The `reframe run` command.

use clap::{Args, ValueEnum};
use reframe_core::{BatchReport, Config, FrameFormat, Renumberer, RunOptions};
use std::path::PathBuf;

/// Output formats selectable on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Lossless PNG
    Png,
    /// Uncompressed BMP
    Bmp,
    /// TIFF
    Tiff,
    /// JPEG (alpha is dropped)
    Jpeg,
}

impl From<OutputFormat> for FrameFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Png => FrameFormat::Png,
            OutputFormat::Bmp => FrameFormat::Bmp,
            OutputFormat::Tiff => FrameFormat::Tiff,
            OutputFormat::Jpeg => FrameFormat::Jpeg,
        }
    }
}

/// Arguments for the `run` command. Unset options fall back to the config file.
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Directory containing the captured frames
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Directory to write renumbered frames to
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// Glob matched against source file names (case-sensitive)
    #[arg(long)]
    pub pattern: Option<String>,

    /// Prefix for output file names
    #[arg(long)]
    pub prefix: Option<String>,

    /// Number of digits the index is zero-padded to
    #[arg(long)]
    pub width: Option<usize>,

    /// Index assigned to the first frame
    #[arg(long)]
    pub start: Option<u64>,

    /// Output image format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Create the destination directory if it does not exist
    #[arg(long)]
    pub create_dest: bool,

    /// Delete each source file once its output has been written
    #[arg(long)]
    pub delete_originals: bool,

    /// Show what would be written without decoding or writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

/// Execute the run command.
pub fn execute(args: RunArgs, mut config: Config) -> anyhow::Result<()> {
    apply_overrides(&args, &mut config);

    let renumberer = Renumberer::new(&config)?;
    tracing::debug!(
        "Renumbering {:?} -> {:?}",
        renumberer.source_dir(),
        renumberer.dest_dir()
    );

    let plan = renumberer.plan()?;
    let progress = if args.no_progress {
        indicatif::ProgressBar::hidden()
    } else {
        create_progress_bar(plan.len() as u64)
    };

    let options = RunOptions {
        dry_run: args.dry_run,
    };
    let report = renumberer.execute(plan, &options, |outcome| {
        progress.inc(1);
        if !outcome.is_success() {
            progress.set_message(format!("last failure: frame {}", outcome.index));
        }
    })?;

    progress.finish_and_clear();
    print_summary(&report);

    Ok(())
}

/// Apply command-line values on top of the loaded configuration.
fn apply_overrides(args: &RunArgs, config: &mut Config) {
    let renumber = &mut config.renumber;

    if let Some(source) = &args.source {
        renumber.source_dir = source.clone();
    }
    if let Some(dest) = &args.dest {
        renumber.dest_dir = dest.clone();
    }
    if let Some(pattern) = &args.pattern {
        renumber.pattern = pattern.clone();
    }
    if let Some(prefix) = &args.prefix {
        renumber.output_prefix = prefix.clone();
    }
    if let Some(width) = args.width {
        renumber.index_width = width;
    }
    if let Some(start) = args.start {
        renumber.start_index = start;
    }
    if let Some(format) = args.format {
        renumber.output_format = format.into();
    }
    if args.create_dest {
        renumber.create_dest_dir = true;
    }
    if args.delete_originals {
        renumber.delete_originals = true;
    }
}

/// Create a progress bar for the transcode loop.
fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
    use indicatif::{ProgressBar, ProgressStyle};

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );
    pb
}

/// Print a formatted summary after the run.
fn print_summary(report: &BatchReport) {
    let elapsed = report.elapsed.as_secs_f64();
    let rate = if elapsed > 0.0 {
        report.succeeded() as f64 / elapsed
    } else {
        0.0
    };

    eprintln!();
    eprintln!("  ====================================");
    if report.dry_run {
        eprintln!("           Summary (dry run)");
    } else {
        eprintln!("               Summary");
    }
    eprintln!("  ====================================");
    eprintln!("    Succeeded:    {:>8}", report.succeeded());
    if report.failed() > 0 {
        eprintln!("    Failed:       {:>8}", report.failed());
    }
    eprintln!("  ------------------------------------");
    eprintln!("    Total:        {:>8}", report.outcomes.len());
    eprintln!("    Duration:     {:>7.1}s", elapsed);
    eprintln!("    Rate:         {:>7.1} frames/sec", rate);
    eprintln!("  ====================================");

    for failure in report.failures() {
        if let Err(e) = &failure.result {
            eprintln!("    #{:<6} {}", failure.index, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_args_default_has_no_overrides() {
        let args = RunArgs::default();
        assert!(args.source.is_none());
        assert!(args.dest.is_none());
        assert!(args.format.is_none());
        assert!(!args.dry_run);
        assert!(!args.delete_originals);
    }

    #[test]
    fn overrides_leave_config_alone_when_unset() {
        let mut config = Config::default();
        apply_overrides(&RunArgs::default(), &mut config);

        let defaults = Config::default();
        assert_eq!(config.renumber.source_dir, defaults.renumber.source_dir);
        assert_eq!(config.renumber.dest_dir, defaults.renumber.dest_dir);
        assert_eq!(config.renumber.pattern, defaults.renumber.pattern);
        assert!(!config.renumber.create_dest_dir);
    }

    #[test]
    fn overrides_replace_config_values() {
        let mut config = Config::default();
        let args = RunArgs {
            source: Some(PathBuf::from("/in")),
            dest: Some(PathBuf::from("/out")),
            prefix: Some("img_".to_string()),
            width: Some(6),
            start: Some(0),
            format: Some(OutputFormat::Tiff),
            create_dest: true,
            delete_originals: true,
            ..RunArgs::default()
        };
        apply_overrides(&args, &mut config);

        assert_eq!(config.renumber.source_dir, PathBuf::from("/in"));
        assert_eq!(config.renumber.dest_dir, PathBuf::from("/out"));
        assert_eq!(config.renumber.output_prefix, "img_");
        assert_eq!(config.renumber.index_width, 6);
        assert_eq!(config.renumber.start_index, 0);
        assert_eq!(config.renumber.output_format, FrameFormat::Tiff);
        assert!(config.renumber.create_dest_dir);
        assert!(config.renumber.delete_originals);
    }

    #[test]
    fn execute_fails_on_missing_source() {
        let root = tempfile::tempdir().unwrap();
        let args = RunArgs {
            source: Some(root.path().join("absent")),
            dest: Some(root.path().to_path_buf()),
            no_progress: true,
            ..RunArgs::default()
        };

        let err = execute(args, Config::default()).unwrap_err();
        assert!(err.to_string().contains("Directory not found"));
    }

    #[test]
    fn execute_dry_run_over_empty_files() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        std::fs::write(src.path().join("rgb_1.0.jpg"), b"").unwrap();

        let args = RunArgs {
            source: Some(src.path().to_path_buf()),
            dest: Some(dst.path().to_path_buf()),
            dry_run: true,
            no_progress: true,
            ..RunArgs::default()
        };
        execute(args, Config::default()).unwrap();
        assert_eq!(std::fs::read_dir(dst.path()).unwrap().count(), 0);
    }
}
