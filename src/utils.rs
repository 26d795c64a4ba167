//! Common utility functions shared across the codebase.

use std::path::{Component, Path};

/// Returns true if the path's extension matches one of `extensions`.
///
/// Extensions are given without the leading dot. With `ignore_case` the
/// comparison is ASCII case-insensitive, otherwise exact.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use sitetools::utils::has_extension;
///
/// let exts = vec!["pdf".to_string()];
/// assert!(has_extension(Path::new("notes/a.pdf"), &exts, false));
/// assert!(has_extension(Path::new("notes/a.PDF"), &exts, true));
/// assert!(!has_extension(Path::new("notes/a.PDF"), &exts, false));
/// assert!(!has_extension(Path::new("notes/pdf"), &exts, true));
/// ```
pub fn has_extension(path: &Path, extensions: &[String], ignore_case: bool) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    extensions.iter().any(|candidate| {
        if ignore_case {
            candidate.eq_ignore_ascii_case(ext)
        } else {
            candidate == ext
        }
    })
}

/// Path of `path` relative to `base`, joined with `/` on every platform.
///
/// Falls back to the normal components of `path` when it is not under `base`.
pub fn relative_posix_path(path: &Path, base: &Path) -> String {
    let relative = path.strip_prefix(base).unwrap_or(path);
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Displayable file name of a path, or an empty string for paths like `..`.
pub fn file_name_string(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
