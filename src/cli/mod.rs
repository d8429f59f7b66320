//! CLI argument definitions and parsing.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Data source arguments shared between commands
#[derive(Debug, Args)]
pub struct DataArgs {
    /// Batted-ball workbook (.xlsx) or export (.csv, .json), or set `SPRAY_CHART_DATA`.
    #[clap(long, short)]
    pub data: Option<PathBuf>,

    /// Enable debug logging (overridden by `RUST_LOG`).
    #[clap(long, short)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
#[clap(name = "spray-chart", about = "Batted-ball spray charts and video lookup")]
pub struct SprayChart {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every batter in the dataset, sorted.
    Batters {
        #[clap(flatten)]
        source: DataArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show every batted ball for one batter (case-insensitive exact name).
    Search {
        #[clap(flatten)]
        source: DataArgs,

        /// Batter name, e.g. "Ronald Acuna".
        #[clap(long, short)]
        batter: String,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List pitchers a batter faced, or video clips for one batter/pitcher pairing.
    Videos {
        #[clap(flatten)]
        source: DataArgs,

        /// Batter name.
        #[clap(long, short)]
        batter: String,

        /// Pitcher name; without it the pitchers faced are listed.
        #[clap(long, short)]
        pitcher: Option<String>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Render one batter's spray chart as SVG.
    Plot {
        #[clap(flatten)]
        source: DataArgs,

        /// Batter name.
        #[clap(long, short)]
        batter: String,

        /// Output file.
        #[clap(long, short, default_value = "spray-chart.svg")]
        out: PathBuf,
    },

    /// Serve the JSON API over HTTP.
    Serve {
        #[clap(flatten)]
        source: DataArgs,

        /// Address to bind.
        #[clap(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on.
        #[clap(long, default_value_t = 5000)]
        port: u16,
    },
}

impl Commands {
    pub fn source(&self) -> &DataArgs {
        match self {
            Commands::Batters { source, .. }
            | Commands::Search { source, .. }
            | Commands::Videos { source, .. }
            | Commands::Plot { source, .. }
            | Commands::Serve { source, .. } => source,
        }
    }
}
