//! Dispatches a parsed command line to its command handler.

use std::env;

use anyhow::Result;
use colored::Colorize;

use super::{
    args::{Arguments, Command},
    commands::{check::check, index::index, init::init},
    exit_status::ExitStatus,
};

use crate::config::{CONFIG_FILE_NAME, Config, load_config};

pub fn run(Arguments { command }: Arguments, verbose: bool) -> Result<ExitStatus> {
    match command {
        Some(Command::Check(cmd)) => check(cmd, load_command_config(verbose)?),
        Some(Command::Index(cmd)) => index(cmd, load_command_config(verbose)?),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

/// Load the config found from the working directory, noting under `-v`
/// when the defaults are used.
fn load_command_config(verbose: bool) -> Result<Config> {
    let loaded = load_config(&env::current_dir()?)?;
    if verbose && !loaded.from_file {
        eprintln!(
            "{} no {} found, using defaults",
            "note:".bold(),
            CONFIG_FILE_NAME
        );
    }
    Ok(loaded.config)
}
