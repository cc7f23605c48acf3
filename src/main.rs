mod cli;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::handlers;
use imangrow::config::AppConfig;
use imangrow::db::{MetaRepo, SqliteStore};
use imangrow::models::date_key;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Loading config")?;

    config.ensure_db_dir()?;
    let db_path = config.db_path()?;
    let store = SqliteStore::open(&db_path)
        .with_context(|| format!("Opening database at {:?}", db_path))?;

    match cli.command.unwrap_or(Commands::Today) {
        Commands::Today => handlers::handle_today(&store, &config)?,
        Commands::Mark { prayer, undo, date } => {
            handlers::handle_mark(&store, &prayer, undo, date)?;
        }
        Commands::Quran { page, undo, date } => {
            handlers::handle_quran(&store, page, undo, date)?;
        }
        Commands::Zikr { add, set, date } => {
            handlers::handle_zikr(&store, add, set, date)?;
        }
        Commands::Streak => handlers::handle_streak(&store)?,
        Commands::Breakdown { month, week } => {
            handlers::handle_breakdown(&store, month, week)?;
        }
        Commands::Stats { days, strict } => handlers::handle_stats(&store, days, strict)?,
        Commands::Report => handlers::handle_report(&store, &config)?,
        Commands::Insight => handlers::handle_insight(&store)?,
        Commands::Export => handlers::handle_export(&store)?,
        Commands::Import { file } => {
            handlers::handle_import(&store, &file)?;
            let today = date_key(chrono::Local::now().date_naive());
            MetaRepo::set(store.connection(), "last_import", &today)?;
        }
    }

    Ok(())
}
