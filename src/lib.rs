//! flowlogger library root.
//! Exposes the CLI parser, the high-level run() function and the session
//! tracking core used by the interactive dialog.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Run { .. } => cli::commands::run::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    logging::init_logging();

    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // --file wins over the configured log path
    if let Some(custom) = &cli.file {
        cfg.log_file = custom.clone();
    }

    dispatch(&cli, &cfg)
}
