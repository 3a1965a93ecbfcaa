use std::error::Error;
use std::path::PathBuf;

use catapp_core::serde::to_pretty_json;
use catapp_core::RecordStore;
use catapp_db::SqliteStore;
use clap::Args;
use tracing::info;

use crate::config::AppConfig;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Full-text query, e.g. `Pt` or `N2 AND Ru`.
    #[arg(long)]
    pub query: String,
    /// Store to search instead of the configured search database.
    #[arg(long)]
    pub db: Option<PathBuf>,
}

pub fn run(args: &SearchArgs, config: &AppConfig) -> Result<(), Box<dyn Error>> {
    let store = SqliteStore::open_read_only(args.db.as_ref().unwrap_or(&config.search_db))?;
    let records = store.search(&args.query)?;
    info!(query = %args.query, matches = records.len(), "search finished");
    println!("{}", to_pretty_json(&records)?);
    Ok(())
}
