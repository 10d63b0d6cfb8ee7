//! Configuration defaults and path utilities for clang-sweep.
//!
//! This module provides the tool's hard-coded defaults (sweep the current
//! directory, style `.clang-format`, suffixes `cpp` and `hpp`) and functions
//! for resolving caller-supplied overrides, expanding shell variables like
//! `~` in paths.

/// Default root directory to sweep
pub const DEFAULT_ROOT: &str = ".";
/// Default style reference passed to the formatter via `-assume-filename`
pub const DEFAULT_STYLE_REFERENCE: &str = ".clang-format";

/// Default formatter executable, resolved via `PATH`
pub const DEFAULT_FORMATTER: &str = "clang-format";

/// Default source-file suffixes recognized by the sweep
pub const DEFAULT_EXTENSIONS: &[&str] = &["cpp", "hpp"];

/// Resolves the root directory to sweep.
///
/// If a custom root is provided, uses that path. Otherwise, uses the current
/// directory. Shell expansions like `~` are resolved.
///
/// # Arguments
///
/// * `root_arg` - Optional custom root directory
///
/// # Returns
///
/// The resolved root directory path
///
/// # Examples
///
/// ```
/// use clang_sweep_core::config::get_root_path;
///
/// // Use default root
/// let default_root = get_root_path(&None);
/// assert_eq!(default_root, ".");
///
/// // Use custom root
/// let custom_root = get_root_path(&Some("~/projects/engine".to_string()));
/// ```
pub fn get_root_path(root_arg: &Option<String>) -> String {
    let root = match root_arg {
        Some(root) => root,
        None => DEFAULT_ROOT,
    };

    shellexpand::tilde(root).to_string()
}

/// Resolves the style reference handed to the formatter.
///
/// If a custom reference is provided, uses that. Otherwise, uses
/// `.clang-format`. Shell expansions like `~` are resolved, since the
/// reference is usually a path to a style-configuration file.
///
/// # Arguments
///
/// * `style_arg` - Optional custom style reference
///
/// # Returns
///
/// The resolved style reference
pub fn get_style_reference(style_arg: &Option<String>) -> String {
    let style = match style_arg {
        Some(style) => style,
        None => DEFAULT_STYLE_REFERENCE,
    };

    shellexpand::tilde(style).to_string()
}

/// Normalizes a caller-supplied suffix set.
///
/// Leading dots are stripped (`.cpp` and `cpp` are equivalent on the command
/// line) and empty entries are dropped. An empty input falls back to the
/// default suffix set.
///
/// # Arguments
///
/// * `extension_args` - Suffixes as given on the command line
///
/// # Returns
///
/// The normalized suffix set, which may still be empty if every given entry
/// normalized away (rejected later by option validation)
///
/// # Examples
///
/// ```
/// use clang_sweep_core::config::resolve_extensions;
///
/// let defaults = resolve_extensions(&[]);
/// assert_eq!(defaults, vec!["cpp".to_string(), "hpp".to_string()]);
///
/// let custom = resolve_extensions(&[".cc".to_string(), "h".to_string()]);
/// assert_eq!(custom, vec!["cc".to_string(), "h".to_string()]);
/// ```
pub fn resolve_extensions(extension_args: &[String]) -> Vec<String> {
    if extension_args.is_empty() {
        return DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect();
    }

    extension_args
        .iter()
        .map(|extension| extension.trim_start_matches('.').to_string())
        .filter(|extension| !extension.is_empty())
        .collect()
}
