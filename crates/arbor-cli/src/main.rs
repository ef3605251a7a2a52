//! `arbor` - command-line front end for arbor-core.

mod cli;
mod commands;
mod logging;

use anyhow::Context;
use clap::Parser;

use arbor_core::ArborConfig;
use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config =
        ArborConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    logging::init_tracing(level, cli.log_json || config.logging.json)?;
    tracing::debug!(command = ?cli.command, "starting");

    let mut out = std::io::stdout().lock();
    commands::run(cli.command, &config, &mut out)
}
