use std::path::Path;
use std::process::Output;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("The formatter exited with non-success code for `{}`: {}", .path, .detail)]
    FormatterExit { path: String, detail: String },

    #[error("Error launching formatter process: {}", _0)]
    FormatterLaunch(#[from] std::io::Error),

    #[error("Style reference may not be empty")]
    EmptyStyleReference,

    #[error("No recognized source-file suffixes were given")]
    EmptySuffixSet,
}

impl Error {
    /// Builds a `FormatterExit` from a finished subprocess, using the
    /// formatter's own stderr as the opaque error detail. Falls back to the
    /// exit status when the formatter printed nothing.
    pub fn formatter_exit(path: &Path, output: &Output) -> Self {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = if stderr.trim().is_empty() {
            output.status.to_string()
        } else {
            stderr.trim().to_string()
        };

        Self::FormatterExit {
            path: path.display().to_string(),
            detail,
        }
    }
}
