use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use clap::ValueEnum;
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".sitetoolsrc.json";

/// How DOM ids found in source are admitted into the used-id set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IdMode {
    /// Only ids on text-bearing tags count; script lookups must be
    /// corroborated by such a tag in markup.
    #[default]
    Strict,
    /// Every markup id and every script lookup counts.
    Permissive,
}

impl std::fmt::Display for IdMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdMode::Strict => write!(f, "strict"),
            IdMode::Permissive => write!(f, "permissive"),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_translations_file")]
    pub translations_file: String,
    #[serde(default)]
    pub id_mode: IdMode,
    #[serde(default = "default_markup_extensions")]
    pub markup_extensions: Vec<String>,
    #[serde(default = "default_script_extensions")]
    pub script_extensions: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_notes_root")]
    pub notes_root: String,
    #[serde(default = "default_notes_output")]
    pub notes_output: String,
    #[serde(default = "default_modules_file")]
    pub modules_file: String,
    #[serde(default = "default_document_extensions")]
    pub document_extensions: Vec<String>,
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_translations_file() -> String {
    "translation/translations.json".to_string()
}

fn default_markup_extensions() -> Vec<String> {
    vec!["html".to_string()]
}

fn default_script_extensions() -> Vec<String> {
    vec!["js".to_string()]
}

fn default_notes_root() -> String {
    "Notes".to_string()
}

fn default_notes_output() -> String {
    "notes_index.json".to_string()
}

fn default_modules_file() -> String {
    "modules.txt".to_string()
}

fn default_document_extensions() -> Vec<String> {
    vec!["pdf".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            translations_file: default_translations_file(),
            id_mode: IdMode::default(),
            markup_extensions: default_markup_extensions(),
            script_extensions: default_script_extensions(),
            ignores: Vec::new(),
            notes_root: default_notes_root(),
            notes_output: default_notes_output(),
            modules_file: default_modules_file(),
            document_extensions: default_document_extensions(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid or if an
    /// extension list is empty.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        for (name, list) in [
            ("markupExtensions", &self.markup_extensions),
            ("scriptExtensions", &self.script_extensions),
            ("documentExtensions", &self.document_extensions),
        ] {
            if list.is_empty() {
                bail!("'{}' must list at least one extension", name);
            }
        }

        if self.notes_output.trim().is_empty() {
            bail!("'notesOutput' must not be empty");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
