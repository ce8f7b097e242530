//! blogmeta - site config and JSON-LD metadata for a personal blog.

mod cli;
mod commands;

use anyhow::Result;
use blogmeta::{config::ConfigProvider, log};
use clap::Parser;
use cli::Cli;
use std::{io::stdout, process::ExitCode};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log!("error"; "{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let provider = load_config(cli)?;
    let mut out = stdout().lock();
    commands::run(&cli.command, &provider, &cli.root(), &mut out)
}

/// Load and validate configuration; an invalid config stops here.
fn load_config(cli: &Cli) -> Result<ConfigProvider> {
    let config_path = cli.config_path();
    let provider = ConfigProvider::load(&config_path)?;
    log!("config"; "loaded {}", config_path.display());
    Ok(provider)
}
