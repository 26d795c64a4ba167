use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;

use super::super::args::CheckCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::{print_audit_report, print_skipped_warning};
use crate::audit::{AuditOptions, SourceKinds, audit, load_table};
use crate::config::Config;
use crate::utils::file_name_string;

/// Audit the translation table against the ids used under the source root.
///
/// A missing translation file is reported here and yields `ExitStatus::Error`;
/// a malformed one is returned as an error for `main` to print.
pub fn check(cmd: CheckCommand, config: Config) -> Result<ExitStatus> {
    let verbose = cmd.common.verbose;

    let root = cmd
        .root
        .unwrap_or_else(|| PathBuf::from(&config.source_root));
    let translations_path = cmd
        .translations
        .unwrap_or_else(|| root.join(&config.translations_file));

    if !translations_path.exists() {
        eprintln!("Error: {} not found", translations_path.display());
        return Ok(ExitStatus::Error);
    }

    let table = load_table(&translations_path)?;

    let options = AuditOptions {
        mode: cmd.mode.unwrap_or(config.id_mode),
        kinds: SourceKinds {
            markup_extensions: config.markup_extensions,
            script_extensions: config.script_extensions,
        },
        ignores: config.ignores,
        verbose,
    };
    let report = audit(&table, &root, &options);

    print_audit_report(&report, &file_name_string(&translations_path));
    print_skipped_warning(report.skipped.len(), verbose);
    if verbose && report.inaccessible_count > 0 {
        eprintln!(
            "{} {} path(s) under {} could not be accessed",
            "warning:".bold().yellow(),
            report.inaccessible_count,
            root.display()
        );
    }

    Ok(report.findings.outcome().into())
}
