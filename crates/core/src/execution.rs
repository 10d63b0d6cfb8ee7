use std::path::Path;
use std::process::Command;

use log::debug;

use crate::error::{Error, Result};

/// Builds the formatter invocation for a single file.
///
/// The argument contract is the plain `clang-format` one: in-place flag,
/// style discovered by searching the file tree, and `-assume-filename` so the
/// formatter resolves the style configuration next to the style reference
/// rather than next to the real file.
#[must_use]
pub fn build_format_command(formatter: &str, path: &Path, style_reference: &str) -> Command {
    let mut command = Command::new(formatter);
    command
        .arg("-i")
        .arg("-style=file")
        .arg(format!("-assume-filename={style_reference}"))
        .arg(path);
    command
}

/// Formats a single file in place by running the external formatter to
/// completion.
///
/// The child's output is captured so a failing formatter's diagnostic text
/// can be reported as the opaque error detail.
///
/// # Errors
///
/// Returns an error if the formatter cannot be launched or exits with a
/// non-zero status.
pub fn format_file(formatter: &str, path: &Path, style_reference: &str) -> Result<()> {
    let mut command = build_format_command(formatter, path, style_reference);
    debug!("Running formatter: {command:?}");

    let output = command.output()?;

    if output.status.success() {
        Ok(())
    } else {
        Err(Error::formatter_exit(path, &output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_format_command_argument_order() {
        let command = build_format_command(
            "clang-format",
            Path::new("src/widget.cpp"),
            ".clang-format",
        );

        let arguments: Vec<String> = command
            .get_args()
            .map(|argument| argument.to_string_lossy().to_string())
            .collect();

        assert_eq!(
            arguments,
            vec![
                "-i",
                "-style=file",
                "-assume-filename=.clang-format",
                "src/widget.cpp"
            ]
        );
        assert_eq!(command.get_program(), "clang-format");
    }

    #[cfg(unix)]
    #[test]
    fn test_format_file_success_on_zero_exit() {
        // `true` ignores its arguments and exits zero, standing in for a
        // formatter run that succeeded.
        let result = format_file("true", Path::new("whatever.cpp"), ".clang-format");
        assert!(result.is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_format_file_failure_on_nonzero_exit() {
        let result = format_file("false", Path::new("whatever.cpp"), ".clang-format");
        assert!(matches!(result, Err(Error::FormatterExit { .. })));
    }

    #[test]
    fn test_format_file_failure_on_missing_formatter() {
        let result = format_file(
            "/this/formatter/does/not/exist",
            Path::new("whatever.cpp"),
            ".clang-format",
        );
        assert!(matches!(result, Err(Error::FormatterLaunch(_))));
    }
}
