//! Directory batch resizing
//!
//! Resizes every PNG file in an input directory and writes the results to
//! an output directory as `<prefix><name><suffix>.png`. A file that fails
//! to decode, resize or encode is recorded in the [`BatchReport`] and the
//! run moves on to the next file.
//!
//! # Example
//!
//! ```no_run
//! use resizer::batch::{BatchConfig, run};
//! use resizer::transform::{ScaleMethod, TargetSize};
//!
//! let config = BatchConfig::new("photos", "thumbs", TargetSize::percent(25.0, 25.0))
//!     .with_method(ScaleMethod::Linear)
//!     .with_suffix("_small");
//! let report = run(&config).unwrap();
//! println!("{} written, {} failed", report.written.len(), report.failures.len());
//! ```

use crate::io::{ImageFormat, IoError, read_image, write_image};
use crate::transform::{ScaleMethod, SizePolicy, TargetSize, TransformError, resample};
use log::{info, warn};
use std::collections::HashSet;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors reported by the batch runner
#[derive(Debug, Error)]
pub enum BatchError {
    /// Input directory missing or not a directory
    #[error("invalid input directory: {}", .0.display())]
    InvalidInputDir(PathBuf),

    /// Output directory missing or not a directory
    #[error("invalid output directory: {}", .0.display())]
    InvalidOutputDir(PathBuf),

    /// Output would replace the input files
    #[error("output directory equals input directory; add a prefix or suffix to avoid overwriting originals")]
    WouldOverwrite,

    /// The output name is already taken by an earlier output or by an input file
    #[error("output name collision: {}", .0.display())]
    OutputCollision(PathBuf),

    /// Listing the input directory failed
    #[error("directory error: {0}")]
    Dir(#[from] std::io::Error),

    /// Decoding or encoding failed
    #[error("image I/O error: {0}")]
    Image(#[from] IoError),

    /// Resampling failed (size rejected, method unimplemented)
    #[error("resample error: {0}")]
    Transform(#[from] TransformError),
}

/// Result type for batch operations
pub type BatchResult<T> = Result<T, BatchError>;

/// Settings for one batch run
#[derive(Debug, Clone, PartialEq)]
pub struct BatchConfig {
    /// Directory scanned for `*.png` files
    pub input_dir: PathBuf,
    /// Directory the resized files are written to
    pub output_dir: PathBuf,
    /// Prepended to each output file name
    pub prefix: String,
    /// Appended to each output file name, before `.png`
    pub suffix: String,
    /// Target size applied to every image
    pub target: TargetSize,
    /// Interpolation method
    pub method: ScaleMethod,
    /// Accepted target sizes
    pub policy: SizePolicy,
}

impl BatchConfig {
    /// Config with no prefix/suffix, nearest-neighbour sampling and the
    /// minimal size policy.
    pub fn new(
        input_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        target: TargetSize,
    ) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            prefix: String::new(),
            suffix: String::new(),
            target,
            method: ScaleMethod::default(),
            policy: SizePolicy::default(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_method(mut self, method: ScaleMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_policy(mut self, policy: SizePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Check the directories and the overwrite guard.
    ///
    /// # Errors
    ///
    /// - [`BatchError::InvalidInputDir`] / [`BatchError::InvalidOutputDir`]
    ///   if a directory does not exist
    /// - [`BatchError::WouldOverwrite`] if both directories are the same and
    ///   prefix and suffix are both empty
    pub fn validate(&self) -> BatchResult<()> {
        if !self.input_dir.is_dir() {
            return Err(BatchError::InvalidInputDir(self.input_dir.clone()));
        }
        if !self.output_dir.is_dir() {
            return Err(BatchError::InvalidOutputDir(self.output_dir.clone()));
        }
        if self.same_dir()? && self.prefix.is_empty() && self.suffix.is_empty() {
            return Err(BatchError::WouldOverwrite);
        }
        Ok(())
    }

    fn same_dir(&self) -> BatchResult<bool> {
        Ok(fs::canonicalize(&self.input_dir)? == fs::canonicalize(&self.output_dir)?)
    }
}

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Files written, in processing order
    pub written: Vec<PathBuf>,
    /// Input files that failed, with the reason
    pub failures: Vec<(PathBuf, BatchError)>,
}

impl BatchReport {
    /// True if every input file was written.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// List the `*.png` files in `dir`, sorted by name.
///
/// The extension match is case-insensitive; subdirectories are skipped.
pub fn list_input_files<P: AsRef<Path>>(dir: P) -> BatchResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_png = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("png"));
        if is_png && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Output name for an input file: `prefix + <name up to first '.'> + suffix + ".png"`.
///
/// Distinct inputs can share an output name (`a.png`, `a.PNG` and
/// `a.x.png` all give `a.png`). [`run`] writes the first of them and
/// reports the rest as [`BatchError::OutputCollision`].
pub fn output_file_name(prefix: &str, file_name: &str, suffix: &str) -> String {
    let stem = file_name.split('.').next().unwrap_or_default();
    format!("{}{}{}.png", prefix, stem, suffix)
}

/// Resize every input file. See [`run_with_progress`].
pub fn run(config: &BatchConfig) -> BatchResult<BatchReport> {
    run_with_progress(config, |_, _| {})
}

/// Resize every input file, calling `progress(done, total)` after each one.
///
/// # Errors
///
/// Only configuration problems and an unreadable input directory abort the
/// run; per-file failures are collected in [`BatchReport::failures`].
pub fn run_with_progress<F>(config: &BatchConfig, mut progress: F) -> BatchResult<BatchReport>
where
    F: FnMut(usize, usize),
{
    config.validate()?;
    let files = list_input_files(&config.input_dir)?;

    // Output names already in use; in place, the sources themselves are taken
    let mut taken: HashSet<OsString> = HashSet::new();
    if config.same_dir()? {
        taken.extend(files.iter().filter_map(|p| p.file_name().map(OsString::from)));
    }
    let total = files.len();
    info!(
        "Generating {} scaled image(s) with {} interpolation",
        total, config.method
    );

    let mut report = BatchReport::default();
    for (done, path) in files.into_iter().enumerate() {
        let out_name = OsString::from(output_file_name(
            &config.prefix,
            &path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default(),
            &config.suffix,
        ));
        let out_path = config.output_dir.join(&out_name);
        let result = if taken.contains(&out_name) {
            Err(BatchError::OutputCollision(out_path.clone()))
        } else {
            process_file(&path, &out_path, config)
        };
        match result {
            Ok(()) => {
                taken.insert(out_name);
                report.written.push(out_path);
            }
            Err(e) => {
                warn!("{}: {}", path.display(), e);
                report.failures.push((path, e));
            }
        }
        progress(done + 1, total);
    }

    info!(
        "Done: {} written, {} failed",
        report.written.len(),
        report.failures.len()
    );
    Ok(report)
}

fn process_file(path: &Path, out_path: &Path, config: &BatchConfig) -> BatchResult<()> {
    let original = read_image(path)?;
    let scaled = resample(&original, config.target, config.method, config.policy)?;
    write_image(&scaled, out_path, ImageFormat::Png)?;
    Ok(())
}
