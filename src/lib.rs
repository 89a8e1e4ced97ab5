//! fastlife library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::User { .. } => cli::commands::user::handle(cli, cfg),
        Commands::Start { .. } => cli::commands::start::handle(cli, cfg),
        Commands::End { .. } => cli::commands::end::handle(cli, cfg),
        Commands::Add { .. } => cli::commands::add::handle(cli, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(cli, cfg),
        Commands::Del { .. } => cli::commands::del::handle(cli, cfg),
        Commands::List { .. } => cli::commands::list::handle(cli, cfg),
        Commands::Weight { .. } => cli::commands::weight::handle(cli, cfg),
        Commands::Dashboard => cli::commands::dashboard::handle(cli, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once
    let mut cfg = Config::load();

    // apply DB override from the command line, if any
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    cfg.database = utils::path::expand_tilde(&cfg.database)
        .to_string_lossy()
        .to_string();

    dispatch(&cli, &cfg)
}
