use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;

use super::super::args::IndexCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::SUCCESS_MARK;
use crate::config::Config;
use crate::notes::{ModuleFilter, build_tree, resolve_include_list, write_index};

/// Build the notes index and write it inside the notes root.
pub fn index(cmd: IndexCommand, config: Config) -> Result<ExitStatus> {
    let verbose = cmd.common.verbose;

    let root = cmd
        .root
        .unwrap_or_else(|| PathBuf::from(&config.notes_root));
    if !root.is_dir() {
        eprintln!("Error: notes directory {} not found", root.display());
        return Ok(ExitStatus::Error);
    }

    let include = resolve_include_list(&cmd.modules, &root.join(&config.modules_file))?;
    if let Some(names) = include.as_deref().filter(|names| !names.is_empty()) {
        println!("Including modules: {}", names.join(", "));
        if verbose {
            for name in names.iter().filter(|name| !root.join(name).is_dir()) {
                eprintln!(
                    "{} module '{}' not found in {}",
                    "warning:".bold().yellow(),
                    name,
                    root.display()
                );
            }
        }
    }

    let filter = ModuleFilter::from_include_list(include.as_deref());
    let modules = build_tree(&root, &config.document_extensions, &filter)?;

    let output = root.join(&config.notes_output);
    write_index(&output, &modules)?;

    if verbose {
        println!("Indexed {} module(s)", modules.len());
    }
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Wrote {}", output.display()).green()
    );

    Ok(ExitStatus::Success)
}
