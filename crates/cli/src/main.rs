use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use clang_sweep_core::error::Result;
use clang_sweep_core::sweep::{self, SweepSummary};

use crate::cli_args::Args;
use crate::options::build_sweep_options;

mod cli_args;
mod options;

fn execute() -> Result<SweepSummary> {
    let args = Args::parse();

    let options = build_sweep_options(&args);
    options.validate()?;
    debug!("Sweep options: {options:?}");

    let summary = sweep::format_directory(&options, |path, result| match result {
        Ok(()) => println!("Formatted `{}`.", path.display()),
        Err(e) => eprintln!("Failed to format `{}`: {e}", path.display()),
    });

    info!(
        "Swept {} file(s): {} formatted, {} failed",
        summary.total(),
        summary.formatted,
        summary.failed
    );

    Ok(summary)
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(summary) => {
            if summary.has_failures() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
