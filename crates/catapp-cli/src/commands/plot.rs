use std::error::Error;
use std::path::PathBuf;

use catapp_core::serde::to_pretty_json;
use catapp_core::EnergyType;
use catapp_db::SqliteStore;
use catapp_scaling::ScalingEngine;
use clap::Args;
use tracing::info;

use crate::config::AppConfig;

#[derive(Args, Debug)]
pub struct PlotArgs {
    /// Reaction key for the x axis, `AB|A|B`.
    #[arg(long)]
    pub x: Option<String>,
    /// Reaction key for the y axis, `AB|A|B`.
    #[arg(long)]
    pub y: Option<String>,
    /// Energy column for the x axis (`Reaction_Energy` or `Activation_Energy`).
    #[arg(long = "out-x")]
    pub out_x: Option<EnergyType>,
    /// Energy column for the y axis.
    #[arg(long = "out-y")]
    pub out_y: Option<EnergyType>,
    /// Store to query instead of the configured plot database.
    #[arg(long)]
    pub db: Option<PathBuf>,
}

pub fn run(args: &PlotArgs, config: &AppConfig) -> Result<(), Box<dyn Error>> {
    let defaults = &config.default_plot;
    let x = args.x.as_deref().unwrap_or(&defaults.x_reaction);
    let y = args.y.as_deref().unwrap_or(&defaults.y_reaction);
    let out_x = args.out_x.unwrap_or(defaults.out_type_x);
    let out_y = args.out_y.unwrap_or(defaults.out_type_y);
    let db = args.db.as_ref().unwrap_or(&config.plot_db);

    let store = SqliteStore::open_read_only(db)?;
    let engine = ScalingEngine::with_options(&store, config.scaling_options())?;
    let plot = engine.scaling_xy(x, y, out_x, out_y)?;
    info!(points = plot.x_data.len(), fitted = plot.has_fit(), "plot {x} vs {y}");
    println!("{}", to_pretty_json(&plot.to_payload()?)?);
    Ok(())
}
