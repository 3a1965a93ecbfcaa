use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use commands::{
    ingest::{self, IngestArgs},
    plot::{self, PlotArgs},
    reactions::{self, ReactionsArgs},
    search::{self, SearchArgs},
};
use config::AppConfig;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

const DEFAULT_LOG_FILTER: &str = "catapp_cli=info,catapp_db=info,catapp_scaling=info";

#[derive(Parser, Debug)]
#[command(name = "catapp", about = "Scaling relations between catalytic reaction energies")]
struct Cli {
    /// Optional YAML configuration; built-in defaults apply when absent.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a scaling relation and print the chart payload as JSON.
    Plot(PlotArgs),
    /// List every reaction key in the store.
    Reactions(ReactionsArgs),
    /// Full-text search over the store.
    Search(SearchArgs),
    /// Load a CSV export into a store, creating it if needed.
    Ingest(IngestArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::Plot(args) => plot::run(&args, &config),
        Command::Reactions(args) => reactions::run(&args, &config),
        Command::Search(args) => search::run(&args, &config),
        Command::Ingest(args) => ingest::run(&args),
    }
}
