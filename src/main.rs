use std::process::ExitCode;

use clap::Parser;
use sitetools::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    // clap exits with 2 on usage errors, which is reserved for missing keys.
    let args = match Arguments::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitStatus::Error.into()
            } else {
                ExitStatus::Success.into()
            };
        }
    };

    match sitetools::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
