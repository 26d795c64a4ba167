use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use crate::utils::has_extension;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths under the root.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Which extensions mark a file as markup or script.
#[derive(Debug, Clone)]
pub struct SourceKinds {
    pub markup_extensions: Vec<String>,
    pub script_extensions: Vec<String>,
}

impl Default for SourceKinds {
    fn default() -> Self {
        Self {
            markup_extensions: vec!["html".to_string()],
            script_extensions: vec!["js".to_string()],
        }
    }
}

/// Files found under the source root, in walk order.
#[derive(Debug, Default)]
pub struct SourceFiles {
    pub markup: Vec<PathBuf>,
    pub scripts: Vec<PathBuf>,
    /// Entries the walk could not access.
    pub skipped_count: usize,
}

#[cfg(test)]
impl SourceFiles {
    fn total(&self) -> usize {
        self.markup.len() + self.scripts.len()
    }
}

/// Recursively collect markup and script files under `root`.
///
/// The walk is sorted by file name so results are stable between runs.
/// Paths matching an ignore pattern are left out; inaccessible entries are
/// counted in `skipped_count` and otherwise ignored.
pub fn scan_source_files(
    root: &Path,
    kinds: &SourceKinds,
    ignore_patterns: &[String],
    verbose: bool,
) -> SourceFiles {
    let mut result = SourceFiles::default();

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            literal_ignore_paths.push(root.join(p));
        }
    }

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                result.skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();

        if literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            continue;
        }

        let path_str = path.to_string_lossy();
        if glob_patterns.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        if !path.is_file() {
            continue;
        }

        if has_extension(path, &kinds.markup_extensions, false) {
            result.markup.push(path.to_path_buf());
        } else if has_extension(path, &kinds.script_extensions, false) {
            result.scripts.push(path.to_path_buf());
        }
    }

    result
}
