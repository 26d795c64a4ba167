use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::tree::Module;

/// Serialize the index as 2-space indented JSON.
///
/// Non-ASCII characters are written as-is, not escaped.
pub fn to_json(modules: &[Module]) -> Result<String> {
    serde_json::to_string_pretty(modules).context("Failed to serialize notes index.")
}

/// Write the index to `path`, replacing any previous content.
pub fn write_index(path: &Path, modules: &[Module]) -> Result<()> {
    let json = to_json(modules)?;
    fs::write(path, json).with_context(|| format!("Failed to write notes index: {:?}", path))
}
