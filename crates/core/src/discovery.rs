//! Recursive discovery of source files to format.
//!
//! The walk is tolerant by design: unreadable entries are skipped with a
//! warning and a nonexistent root simply produces an empty result, matching
//! the reference behavior of walking whatever is actually there.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use log::warn;
use walkdir::WalkDir;

/// Returns whether a path's suffix is in the recognized set.
///
/// Matching is case-sensitive: `Foo.CPP` is not a `cpp` file.
#[must_use]
pub fn matches_suffix(path: &Path, extensions: &[String]) -> bool {
    match path.extension().and_then(OsStr::to_str) {
        Some(extension) => extensions.iter().any(|candidate| candidate == extension),
        None => false,
    }
}

/// Recursively collects every file beneath `root` whose suffix is in the
/// recognized set.
///
/// Symlinks are not followed. Entries that cannot be read (permissions,
/// races with concurrent deletion) are logged and skipped rather than
/// aborting the walk. The result is sorted so sweeps are reproducible.
#[must_use]
pub fn find_source_files(root: &Path, extensions: &[String]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable directory entry: {e}");
                continue;
            }
        };

        let path = entry.path();
        if path.is_file() && matches_suffix(path, extensions) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    files
}
