use std::error::Error;
use std::path::PathBuf;

use catapp_core::RecordStore;
use catapp_db::SqliteStore;
use clap::Args;

use crate::config::AppConfig;

#[derive(Args, Debug)]
pub struct ReactionsArgs {
    /// Store to list instead of the configured plot database.
    #[arg(long)]
    pub db: Option<PathBuf>,
}

pub fn run(args: &ReactionsArgs, config: &AppConfig) -> Result<(), Box<dyn Error>> {
    let store = SqliteStore::open_read_only(args.db.as_ref().unwrap_or(&config.plot_db))?;
    for reaction in store.unique_reactions()? {
        println!("{reaction}");
    }
    Ok(())
}
