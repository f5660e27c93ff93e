//! CLI argument definitions using clap
//!
//! Commands:
//! - athlete-api serve --config <path> [--port <port>]
//! - athlete-api query --config <path> --by <country|noc|athlete> <term> [filters]

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::model::SeasonSelector;

/// REST API over Olympic athlete and region records
#[derive(Parser, Debug)]
#[command(name = "athlete-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Grouping used by a one-shot query
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Lookup {
    /// Region name, grouped by region
    Country,
    /// NOC code, grouped by year
    Noc,
    /// Athlete name, grouped by athlete
    Athlete,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the seed dataset and serve the HTTP API
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./athlete_api.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Run one lookup against the seed dataset and print the JSON result
    Query {
        /// Path to configuration file
        #[arg(long, default_value = "./athlete_api.json")]
        config: PathBuf,

        #[arg(long, value_enum)]
        by: Lookup,

        /// Region name, NOC code or athlete name
        term: String,

        #[arg(long)]
        sport: Option<String>,

        #[arg(long)]
        start_date: Option<i32>,

        #[arg(long)]
        end_date: Option<i32>,

        /// summer, winter or union
        #[arg(long, default_value_t = SeasonSelector::Union)]
        season: SeasonSelector,

        /// Exact name match (default: true for country, false for athlete)
        #[arg(long)]
        exact: Option<bool>,

        /// Include member records
        #[arg(long)]
        detail: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
