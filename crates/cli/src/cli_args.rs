//! Command-line argument parsing for clang-sweep.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate. Every flag has a sensible default, so `csw` with no arguments
//! sweeps the current directory.

use clap::Parser;

/// Command-line arguments for the clang-sweep CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use clang_sweep_cli::cli_args::Args;
///
/// // Parse arguments from command line
/// let args = Args::parse();
/// ```
#[derive(Parser, Debug)]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Root directory to sweep for source files.
    ///
    /// If not provided, defaults to the current directory.
    #[arg(num_args(1))]
    pub root: Option<String>,

    /// Style reference handed to the formatter via `-assume-filename`.
    ///
    /// Usually the path to a `.clang-format` file; may also be any name the
    /// formatter resolves itself. If not provided, defaults to
    /// `.clang-format`.
    #[arg(long, short = 's')]
    pub style: Option<String>,

    /// Formatter executable to invoke.
    ///
    /// A name resolved via `PATH` or an explicit path. If not provided,
    /// defaults to `clang-format`.
    #[arg(long, short = 'f')]
    pub formatter: Option<String>,

    /// Source-file suffix to format (repeatable).
    ///
    /// A leading dot is accepted and ignored. If not provided, defaults to
    /// `cpp` and `hpp`.
    ///
    /// # Examples
    /// ```bash
    /// csw --ext cc --ext h src/
    /// ```
    #[arg(long = "ext", short = 'e', action = clap::ArgAction::Append)]
    pub extensions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_args_default_values() {
        let args = Args::parse_from(["csw"]);

        assert!(args.root.is_none());
        assert!(args.style.is_none());
        assert!(args.formatter.is_none());
        assert!(args.extensions.is_empty());
    }

    #[test]
    fn test_args_root_positional() {
        let args = Args::parse_from(["csw", "src"]);
        assert_eq!(args.root, Some("src".to_string()));
    }

    #[test]
    fn test_args_short_flags() {
        let args = Args::parse_from([
            "csw",
            "-s",
            "/styles/.clang-format",
            "-f",
            "/opt/llvm/bin/clang-format",
            "-e",
            "cc",
        ]);

        assert_eq!(args.style, Some("/styles/.clang-format".to_string()));
        assert_eq!(
            args.formatter,
            Some("/opt/llvm/bin/clang-format".to_string())
        );
        assert_eq!(args.extensions, vec!["cc".to_string()]);
    }

    #[test]
    fn test_args_long_flags() {
        let args = Args::parse_from([
            "csw",
            "--style",
            "/styles/.clang-format",
            "--formatter",
            "clang-format-18",
            "--ext",
            "cpp",
        ]);

        assert_eq!(args.style, Some("/styles/.clang-format".to_string()));
        assert_eq!(args.formatter, Some("clang-format-18".to_string()));
        assert_eq!(args.extensions, vec!["cpp".to_string()]);
    }

    #[test]
    fn test_args_repeated_extensions() {
        let args = Args::parse_from(["csw", "-e", "cc", "--ext", "h", "src"]);

        assert_eq!(args.root, Some("src".to_string()));
        assert_eq!(args.extensions, vec!["cc".to_string(), "h".to_string()]);
    }
}
