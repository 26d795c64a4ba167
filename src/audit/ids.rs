//! DOM id discovery in markup and script text.
//!
//! Ids are found with regular expressions rather than real HTML/JS parsing:
//! - markup: start tags carrying an `id="..."` attribute
//! - scripts: `getElementById("...")` and `querySelector("#...")` calls

use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use colored::Colorize;
use regex::Regex;

use super::scanner::SourceFiles;
use crate::config::IdMode;

/// Tags that usually hold visible text. Ids on other tags (sections, divs,
/// navigation anchors) are structural and not expected to be translated.
pub const TEXT_BEARING_TAGS: &[&str] = &[
    "p",
    "span",
    "a",
    "li",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "button",
    "label",
    "strong",
    "em",
    "blockquote",
    "small",
    "cite",
    "figcaption",
];

static MARKUP_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<\s*([a-z0-9:-]+)\b[^>]*(?:\s|["'])id\s*=\s*["']([^"']+)["'][^>]*>"#)
        .unwrap()
});

static GET_ELEMENT_BY_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"getElementById\(\s*['"]([^'"]+)['"]\s*\)"#).unwrap());

static QUERY_SELECTOR_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"querySelector\(\s*['"]#([^'"\s]+)['"]\s*\)"#).unwrap());

pub fn is_text_bearing(tag: &str) -> bool {
    TEXT_BEARING_TAGS.contains(&tag)
}

/// Ids collected from markup and scripts before the mode filter is applied.
#[derive(Debug, Default, Clone)]
pub struct IdIndex {
    /// id -> lowercased owning tag; a repeated id keeps its last tag.
    markup: BTreeMap<String, String>,
    script: BTreeSet<String>,
}

impl IdIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_markup(&mut self, text: &str) {
        for caps in MARKUP_ID_REGEX.captures_iter(text) {
            let tag = caps[1].to_ascii_lowercase();
            self.markup.insert(caps[2].to_string(), tag);
        }
    }

    pub fn add_script(&mut self, text: &str) {
        for regex in [&*GET_ELEMENT_BY_ID_REGEX, &*QUERY_SELECTOR_ID_REGEX] {
            self.script
                .extend(regex.captures_iter(text).map(|caps| caps[1].to_string()));
        }
    }

    pub fn markup_tag(&self, id: &str) -> Option<&str> {
        self.markup.get(id).map(String::as_str)
    }

    pub fn script_ids(&self) -> &BTreeSet<String> {
        &self.script
    }

    fn has_text_bearing_tag(&self, id: &str) -> bool {
        self.markup_tag(id).is_some_and(is_text_bearing)
    }

    /// Ids presumed to need a translation under `mode`.
    pub fn used_ids(&self, mode: IdMode) -> BTreeSet<String> {
        match mode {
            IdMode::Strict => self
                .markup
                .iter()
                .filter(|(_, tag)| is_text_bearing(tag))
                .map(|(id, _)| id.clone())
                .chain(
                    self.script
                        .iter()
                        .filter(|id| self.has_text_bearing_tag(id))
                        .cloned(),
                )
                .collect(),
            IdMode::Permissive => self
                .markup
                .keys()
                .chain(self.script.iter())
                .cloned()
                .collect(),
        }
    }
}

#[derive(Debug, Default)]
pub struct IdScan {
    pub index: IdIndex,
    pub files_read: usize,
    /// Files that could not be read or decoded.
    pub skipped: Vec<PathBuf>,
}

fn read_source(path: &Path, scan: &mut IdScan, verbose: bool) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(text) => {
            scan.files_read += 1;
            Some(text)
        }
        Err(e) => {
            if verbose {
                eprintln!(
                    "{} Skipping unreadable file {}: {}",
                    "warning:".bold().yellow(),
                    path.display(),
                    e
                );
            }
            scan.skipped.push(path.to_path_buf());
            None
        }
    }
}

/// Read every markup and script file and index the ids they mention.
///
/// Markup is read before scripts. Files that fail to read (including
/// invalid UTF-8) are recorded in `skipped` and do not stop the scan.
pub fn scan_ids(files: &SourceFiles, verbose: bool) -> IdScan {
    let mut scan = IdScan::default();

    for path in &files.markup {
        if let Some(text) = read_source(path, &mut scan, verbose) {
            scan.index.add_markup(&text);
        }
    }

    for path in &files.scripts {
        if let Some(text) = read_source(path, &mut scan, verbose) {
            scan.index.add_script(&text);
        }
    }

    scan
}
