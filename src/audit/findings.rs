use std::collections::{BTreeMap, BTreeSet};

use super::table::{KeySet, TranslationTable};

/// Overall result class of an audit, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AuditOutcome {
    /// A language lacks a key, or a used id has no translation at all.
    Missing,
    /// Only unused translation keys were found.
    Unused,
    Clean,
}

/// Discrepancies between a translation table and the ids used in source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditFindings {
    /// Sorted language codes.
    pub languages: Vec<String>,
    pub key_union: KeySet,
    pub used_ids: BTreeSet<String>,
    /// Every language, including those with nothing missing.
    pub missing_by_language: BTreeMap<String, Vec<String>>,
    /// Used ids absent from every language.
    pub missing_from_table: Vec<String>,
    /// Keys in the table never referenced in source.
    pub unused_keys: Vec<String>,
}

impl AuditFindings {
    /// Compare the table's key union against the used ids.
    ///
    /// The three discrepancy lists are each derived directly from the key
    /// union and the used ids, never from one another.
    pub fn reconcile(table: &TranslationTable, used_ids: BTreeSet<String>) -> Self {
        let key_union = table.key_union();

        let missing_by_language = table
            .iter()
            .map(|(lang, keys)| {
                let missing = key_union.difference(keys).cloned().collect();
                (lang.to_string(), missing)
            })
            .collect();

        let unused_keys = key_union.difference(&used_ids).cloned().collect();
        let missing_from_table = used_ids.difference(&key_union).cloned().collect();

        Self {
            languages: table.languages().map(str::to_string).collect(),
            key_union,
            used_ids,
            missing_by_language,
            missing_from_table,
            unused_keys,
        }
    }

    pub fn has_missing_keys(&self) -> bool {
        self.missing_by_language.values().any(|keys| !keys.is_empty())
    }

    pub fn has_missing_from_table(&self) -> bool {
        !self.missing_from_table.is_empty()
    }

    pub fn has_unused_keys(&self) -> bool {
        !self.unused_keys.is_empty()
    }

    pub fn missing_key_count(&self) -> usize {
        self.missing_by_language.values().map(Vec::len).sum()
    }

    /// Missing keys and ids missing from the table outrank unused keys.
    pub fn outcome(&self) -> AuditOutcome {
        if self.has_missing_keys() || self.has_missing_from_table() {
            AuditOutcome::Missing
        } else if self.has_unused_keys() {
            AuditOutcome::Unused
        } else {
            AuditOutcome::Clean
        }
    }
}
