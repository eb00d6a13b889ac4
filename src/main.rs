// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use readability::{app, cli::Args, config::Config};
use readability_shared_kernel::ReadabilityError;

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn try_main() -> Result<()> {
    let config = Config::from(Args::parse());
    init_logging(config.verbosity);
    app::run(&config)?;
    Ok(())
}

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(err) = e.downcast_ref::<ReadabilityError>() {
                log::debug!("failure kind: {:?}", err.kind());
            }
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
