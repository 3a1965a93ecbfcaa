use std::error::Error;
use std::fs;
use std::path::PathBuf;

use catapp_db::ingest_csv;
use clap::Args;
use rusqlite::Connection;

#[derive(Args, Debug)]
pub struct IngestArgs {
    /// CSV export with `AB,A,B,Surface,Termination,Reaction_Energy,Activation_Energy,Reference,Url` headers.
    #[arg(long)]
    pub csv: PathBuf,
    /// Store to create or append to.
    #[arg(long)]
    pub db: PathBuf,
}

pub fn run(args: &IngestArgs) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = args.db.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut conn = Connection::open(&args.db)?;
    let count = ingest_csv(&mut conn, &args.csv)?;
    println!("{count}");
    Ok(())
}
