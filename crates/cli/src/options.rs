//! Assembly of resolved sweep options from parsed command-line arguments.

use std::path::PathBuf;

use clang_sweep_core::config;
use clang_sweep_core::sweep::SweepOptions;

use crate::cli_args::Args;

/// Resolves parsed arguments into sweep options, applying the defaults and
/// tilde expansion from the core configuration layer.
#[must_use]
pub fn build_sweep_options(args: &Args) -> SweepOptions {
    SweepOptions {
        root: PathBuf::from(config::get_root_path(&args.root)),
        style_reference: config::get_style_reference(&args.style),
        formatter: args
            .formatter
            .clone()
            .unwrap_or_else(|| config::DEFAULT_FORMATTER.to_string()),
        extensions: config::resolve_extensions(&args.extensions),
    }
}
