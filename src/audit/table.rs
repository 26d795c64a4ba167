//! Translation table loading.
//!
//! The table is a JSON object mapping a language code to an object of
//! `key -> text`. Only the key sets matter here; values are never inspected.

use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    path::Path,
};

use anyhow::{Context, Result};
use serde_json::{Map, Value};

pub type KeySet = BTreeSet<String>;

/// Key sets of every language in a translation table.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TranslationTable {
    languages: BTreeMap<String, KeySet>,
}

impl TranslationTable {
    /// Parse a table from JSON text.
    ///
    /// Fails if the text is not JSON or if any language entry is not an object.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let raw: BTreeMap<String, Map<String, Value>> = serde_json::from_str(content)?;
        let languages = raw
            .into_iter()
            .map(|(lang, entries)| (lang, entries.into_iter().map(|(k, _)| k).collect()))
            .collect();
        Ok(Self { languages })
    }

    /// Language codes in sorted order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    pub fn language_count(&self) -> usize {
        self.languages.len()
    }

    pub fn keys(&self, language: &str) -> Option<&KeySet> {
        self.languages.get(language)
    }

    /// Iterate `(language, keys)` pairs in language order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &KeySet)> {
        self.languages.iter().map(|(lang, keys)| (lang.as_str(), keys))
    }

    /// Union of every language's key set.
    pub fn key_union(&self) -> KeySet {
        self.languages.values().flatten().cloned().collect()
    }
}

impl<L, K> FromIterator<(L, Vec<K>)> for TranslationTable
where
    L: Into<String>,
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (L, Vec<K>)>>(iter: I) -> Self {
        let languages = iter
            .into_iter()
            .map(|(lang, keys)| (lang.into(), keys.into_iter().map(Into::into).collect()))
            .collect();
        Self { languages }
    }
}

/// Read and parse the translation table at `path`.
///
/// A parse failure keeps serde_json's diagnostic (line and column) in the
/// error chain.
pub fn load_table(path: &Path) -> Result<TranslationTable> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read translation file: {:?}", path))?;
    TranslationTable::from_json_str(&content)
        .with_context(|| format!("Failed to parse translation file: {:?}", path))
}
