//! Sweep orchestration: discover candidate files under a root and format
//! them one at a time.
//!
//! Each file is fully processed (subprocess launched and awaited) before the
//! next is considered. A failure for one file is reported and swallowed; the
//! sweep always runs to the end of the matched set.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config;
use crate::discovery;
use crate::error::{Error, Result};
use crate::execution;

/// Resolved inputs for one sweep.
#[derive(Debug, Clone)]
pub struct SweepOptions {
    /// Directory tree to walk.
    pub root: PathBuf,
    /// Style reference handed to the formatter via `-assume-filename`.
    pub style_reference: String,
    /// Formatter executable, a name on `PATH` or an explicit path.
    pub formatter: String,
    /// Recognized source-file suffixes, without leading dots.
    pub extensions: Vec<String>,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from(config::DEFAULT_ROOT),
            style_reference: config::DEFAULT_STYLE_REFERENCE.to_string(),
            formatter: config::DEFAULT_FORMATTER.to_string(),
            extensions: config::resolve_extensions(&[]),
        }
    }
}

impl SweepOptions {
    /// Checks the parts of the options that would make every single file
    /// fail or match nothing at all.
    ///
    /// # Errors
    ///
    /// Returns an error if the style reference is empty or the suffix set
    /// normalized away to nothing.
    pub fn validate(&self) -> Result<()> {
        if self.style_reference.is_empty() {
            return Err(Error::EmptyStyleReference);
        }

        if self.extensions.is_empty() {
            return Err(Error::EmptySuffixSet);
        }

        Ok(())
    }
}

/// Counts of per-file outcomes from one sweep.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepSummary {
    pub formatted: usize,
    pub failed: usize,
}

impl SweepSummary {
    #[must_use]
    pub fn total(&self) -> usize {
        self.formatted + self.failed
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Recursively formats every matching file beneath the root.
///
/// The observer is called once per matched file with the per-file result,
/// in the order files are processed, so callers can report progress as the
/// sweep runs. Per-file failures are counted but never abort the sweep.
pub fn format_directory<F>(options: &SweepOptions, mut observer: F) -> SweepSummary
where
    F: FnMut(&Path, &Result<()>),
{
    let files = discovery::find_source_files(&options.root, &options.extensions);
    info!(
        "Found {} candidate file(s) under `{}`",
        files.len(),
        options.root.display()
    );

    let mut summary = SweepSummary::default();

    for path in &files {
        let result = execution::format_file(&options.formatter, path, &options.style_reference);

        match &result {
            Ok(()) => summary.formatted += 1,
            Err(e) => {
                debug!("Formatter failed for `{}`: {e}", path.display());
                summary.failed += 1;
            }
        }

        observer(path, &result);
    }

    summary
}
