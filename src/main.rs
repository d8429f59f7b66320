//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use spray_chart::{
    cli::{Commands, SprayChart},
    commands::{
        batters::handle_batters, load_dataset, plot::handle_plot, resolve_data_path,
        search::handle_search, serve::handle_serve, videos::handle_videos,
    },
    core::logging,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = SprayChart::parse();

    let source = app.command.source();
    logging::init(source.verbose);
    let path = resolve_data_path(source.data.clone())?;
    let dataset = load_dataset(&path)?;

    match app.command {
        Commands::Batters { json, .. } => handle_batters(&dataset, json)?,
        Commands::Search { batter, json, .. } => handle_search(&dataset, &batter, json)?,
        Commands::Videos {
            batter,
            pitcher,
            json,
            ..
        } => handle_videos(&dataset, &batter, pitcher.as_deref(), json)?,
        Commands::Plot { batter, out, .. } => handle_plot(&dataset, &batter, &out)?,
        Commands::Serve { host, port, .. } => handle_serve(dataset, &host, port).await?,
    }

    Ok(())
}
