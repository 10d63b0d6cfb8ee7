//! Clang Sweep Core Library
//!
//! This crate provides the core functionality for clang-sweep, a utility that
//! recursively walks a directory tree and runs an external code formatter
//! (`clang-format` by default) over every matching source file, using a
//! caller-supplied style reference.
//!
//! # Key Features
//!
//! - **File Discovery**: Recursive traversal with a configurable suffix filter
//! - **Formatter Execution**: In-place formatting through an external subprocess
//! - **Failure Isolation**: One file's failure never halts the rest of the sweep
//! - **Configuration Defaults**: Root, style and suffix defaults matching plain
//!   `clang-format` usage
//! - **Error Handling**: Distinct error types for launch and formatter failures
//!
//! # Examples
//!
//! Sweeping a directory tree with the default options:
//!
//! ```no_run
//! use clang_sweep_core::sweep::{format_directory, SweepOptions};
//!
//! let options = SweepOptions::default();
//! options.validate()?;
//! let summary = format_directory(&options, |path, result| match result {
//!     Ok(()) => println!("Formatted `{}`.", path.display()),
//!     Err(e) => eprintln!("Failed to format `{}`: {e}", path.display()),
//! });
//! println!("{} formatted, {} failed", summary.formatted, summary.failed);
//! # Ok::<(), clang_sweep_core::error::Error>(())
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod execution;
pub mod sweep;
