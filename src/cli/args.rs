//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Audit the translation table against ids used in HTML/JS
//! - `index`: Generate the notes index JSON
//! - `init`: Write a default configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::IdMode;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Index(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Id discovery mode (overrides config file)
    #[arg(long, value_enum)]
    pub mode: Option<IdMode>,

    /// Directory scanned for HTML/JS files (overrides config file)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Translation table path (overrides config file; not relative to --root)
    #[arg(long)]
    pub translations: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct IndexCommand {
    /// Modules to include (default: the modules file, or every module)
    pub modules: Vec<String>,

    /// Notes root directory (overrides config file)
    #[arg(long)]
    pub root: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check translations for missing, unknown and unused keys
    Check(CheckCommand),
    /// Write the notes index JSON for the site
    Index(IndexCommand),
    /// Initialize a new .sitetoolsrc.json configuration file
    Init,
}
