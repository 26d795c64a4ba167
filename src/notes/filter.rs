use std::{collections::BTreeSet, fs, path::Path};

use anyhow::{Context, Result};

/// Which top-level module directories go into the index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModuleFilter {
    #[default]
    All,
    /// Only the named modules. The listed order does not affect output order.
    Only(BTreeSet<String>),
}

impl ModuleFilter {
    pub fn from_include_list(include: Option<&[String]>) -> Self {
        match include {
            Some(names) => Self::Only(names.iter().cloned().collect()),
            None => Self::All,
        }
    }

    pub fn includes(&self, name: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(names) => names.contains(name),
        }
    }
}

/// Parse a control file listing one module name per line.
///
/// Lines are trimmed and blank lines dropped.
pub fn parse_modules_file(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Decide the include list: command-line names win; otherwise the control
/// file is used if it exists; otherwise every module is included (`None`).
pub fn resolve_include_list(
    cli_modules: &[String],
    modules_file: &Path,
) -> Result<Option<Vec<String>>> {
    if !cli_modules.is_empty() {
        return Ok(Some(cli_modules.to_vec()));
    }

    if !modules_file.is_file() {
        return Ok(None);
    }

    let content = fs::read_to_string(modules_file)
        .with_context(|| format!("Failed to read modules file: {:?}", modules_file))?;
    Ok(Some(parse_modules_file(&content)))
}
