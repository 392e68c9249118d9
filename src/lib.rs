//! worklog library root.
//! Exposes the CLI parser, the high-level run() function, and the core
//! modules: duration/calendar/aggregation calculators, the entry stores,
//! and the insight provider.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod insight;
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
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Calendar { .. } => cli::commands::calendar::handle(&cli.command, cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Wage { .. } => cli::commands::wage::handle(&cli.command, cfg),
        Commands::Insight => cli::commands::insight::handle(cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once; CLI flags override it
    let mut cfg = Config::load()?;
    if let Some(backend) = cli.backend {
        cfg.backend = backend;
    }
    if let Some(location) = &cli.db {
        cfg.override_location(location);
    }

    utils::logging::enable_logging(&cfg.log_level);

    dispatch(&cli, &cfg)
}
