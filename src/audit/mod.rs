//! Translation audit: compare a translation table with the DOM ids used in
//! a site's HTML and JS.
//!
//! - `table`: translation table loading and key sets
//! - `scanner`: source file discovery
//! - `ids`: regex-based id discovery and strict/permissive filtering
//! - `findings`: set reconciliation and outcome

pub mod findings;
pub mod ids;
pub mod scanner;
pub mod table;

use std::path::{Path, PathBuf};

pub use findings::{AuditFindings, AuditOutcome};
pub use ids::{IdIndex, IdScan, TEXT_BEARING_TAGS, scan_ids};
pub use scanner::{SourceFiles, SourceKinds, scan_source_files};
pub use table::{KeySet, TranslationTable, load_table};

use crate::config::IdMode;

/// Inputs for a source scan.
#[derive(Debug, Clone, Default)]
pub struct AuditOptions {
    pub mode: IdMode,
    pub kinds: SourceKinds,
    pub ignores: Vec<String>,
    pub verbose: bool,
}

/// Findings plus bookkeeping about the scan that produced them.
#[derive(Debug)]
pub struct AuditReport {
    pub findings: AuditFindings,
    pub mode: IdMode,
    pub files_read: usize,
    /// Files that could not be read or decoded.
    pub skipped: Vec<PathBuf>,
    /// Walk entries that could not be accessed.
    pub inaccessible_count: usize,
}

/// Scan `root` for used ids and reconcile them against `table`.
pub fn audit(table: &TranslationTable, root: &Path, options: &AuditOptions) -> AuditReport {
    let files = scan_source_files(root, &options.kinds, &options.ignores, options.verbose);
    let scan = scan_ids(&files, options.verbose);
    let used_ids = scan.index.used_ids(options.mode);

    AuditReport {
        findings: AuditFindings::reconcile(table, used_ids),
        mode: options.mode,
        files_read: scan.files_read,
        skipped: scan.skipped,
        inaccessible_count: files.skipped_count,
    }
}
