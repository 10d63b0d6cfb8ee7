//! Clang Sweep CLI Library
//!
//! This crate provides the command-line interface for clang-sweep, a utility
//! that recursively formats every matching source file under a directory with
//! an external formatter. It handles argument parsing, option assembly and
//! per-file console reporting.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing with `clap`
//! - [`options`]: Turning parsed arguments into resolved sweep options
//!
//! # Examples
//!
//! The CLI binary (`csw`) can be used in several ways:
//!
//! ```bash
//! # Sweep the current directory with the defaults
//! # (style `.clang-format`, suffixes cpp and hpp)
//! csw
//!
//! # Sweep a specific tree
//! csw ~/projects/engine/src
//!
//! # Point the formatter at a style configuration elsewhere
//! csw --style ~/styles/.clang-format
//!
//! # Sweep a different suffix set
//! csw --ext cc --ext h
//!
//! # Use a specific formatter binary
//! csw --formatter /opt/llvm/bin/clang-format
//! ```

pub mod cli_args;
pub mod options;
