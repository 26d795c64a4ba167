//! Report formatting and printing utilities.
//!
//! Separate from the audit logic so the library can be used without
//! printing anything.

use std::io::{self, Write};

use colored::Colorize;

use crate::audit::{AuditFindings, AuditOutcome, AuditReport};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the audit summary to stdout.
///
/// `table_name` is the translation file name used in headings.
pub fn print_audit_report(report: &AuditReport, table_name: &str) {
    print_audit_report_to(report, table_name, &mut io::stdout().lock());
}

/// Print the audit summary to a custom writer.
///
/// Languages and keys are listed in sorted order, so the same findings
/// always produce the same text.
pub fn print_audit_report_to<W: Write>(report: &AuditReport, table_name: &str, writer: &mut W) {
    let findings = &report.findings;

    let _ = writeln!(writer, "{}", "Translation check result".bold());
    let _ = writeln!(writer, "------------------------");
    let _ = writeln!(writer, "Languages found: {}", findings.languages.join(", "));
    let _ = writeln!(
        writer,
        "Total translation keys (union): {}",
        findings.key_union.len()
    );
    let _ = writeln!(
        writer,
        "Unique DOM ids detected in HTML/JS: {}",
        findings.used_ids.len()
    );
    let _ = writeln!(writer);

    print_missing_keys(findings, writer);
    print_missing_from_table(findings, table_name, writer);
    print_unused_keys(findings, writer);
    print_summary_line(report, writer);
}

/// Print a warning about files that could not be read.
pub fn print_skipped_warning(count: usize, verbose: bool) {
    print_skipped_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a skipped-files warning to a custom writer.
pub fn print_skipped_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be read (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_missing_keys<W: Write>(findings: &AuditFindings, writer: &mut W) {
    if !findings.has_missing_keys() {
        let _ = writeln!(writer, "No missing keys across languages.");
        let _ = writeln!(writer);
        return;
    }

    let _ = writeln!(writer, "{}", "Missing keys by language:".bold().red());
    for (lang, keys) in &findings.missing_by_language {
        let _ = writeln!(writer, " - {}: {} missing", lang, keys.len());
        for key in keys {
            let _ = writeln!(writer, "    {}", key);
        }
    }
    let _ = writeln!(writer);
}

fn print_missing_from_table<W: Write>(findings: &AuditFindings, table_name: &str, writer: &mut W) {
    if !findings.has_missing_from_table() {
        return;
    }

    let _ = writeln!(
        writer,
        "{}",
        format!("IDs referenced in HTML/JS but missing from {}:", table_name)
            .bold()
            .red()
    );
    for id in &findings.missing_from_table {
        let _ = writeln!(writer, "  {}", id);
    }
    let _ = writeln!(writer);
}

fn print_unused_keys<W: Write>(findings: &AuditFindings, writer: &mut W) {
    if !findings.has_unused_keys() {
        let _ = writeln!(writer, "No unused translation keys detected.");
        let _ = writeln!(writer);
        return;
    }

    let _ = writeln!(
        writer,
        "{} {}",
        "Unused translation keys (present in JSON but not found in HTML/JS):"
            .bold()
            .yellow(),
        findings.unused_keys.len()
    );
    for key in &findings.unused_keys {
        let _ = writeln!(writer, "  {}", key);
    }
    let _ = writeln!(writer);
}

fn print_summary_line<W: Write>(report: &AuditReport, writer: &mut W) {
    let findings = &report.findings;
    let files = format!(
        "{} source {}",
        report.files_read,
        if report.files_read == 1 { "file" } else { "files" }
    );

    let msg = match findings.outcome() {
        AuditOutcome::Clean => format!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Checked {} ({} mode) - no issues found", files, report.mode).green()
        ),
        AuditOutcome::Missing | AuditOutcome::Unused => format!(
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "Checked {} ({} mode) - {} missing, {} not in table, {} unused",
                files,
                report.mode,
                findings.missing_key_count(),
                findings.missing_from_table.len(),
                findings.unused_keys.len()
            )
            .red()
        ),
    };
    let _ = writeln!(writer, "{}", msg);
}
