//! CLI command implementations
//!
//! Both commands boot the same way: load the config, build an in-memory
//! store, then load the seed dataset when one is configured.

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::http_server::{AppState, HttpServer};
use crate::model::SeasonSelector;
use crate::observability::{Event, Logger};
use crate::service::{
    athlete_data, country_data, noc_data, AthleteParams, CountryParams, NocParams,
};
use crate::store::{load_seed, AthleteStore, InMemoryStore};

use super::args::{Command, Lookup};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::write_json;

/// Filters of a one-shot query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryArgs {
    pub sport: Option<String>,
    pub start_date: Option<i32>,
    pub end_date: Option<i32>,
    pub season: SeasonSelector,
    pub exact: Option<bool>,
    pub detail: bool,
}

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(&config, port),
        Command::Query {
            config,
            by,
            term,
            sport,
            start_date,
            end_date,
            season,
            exact,
            detail,
        } => {
            let args = QueryArgs {
                sport,
                start_date,
                end_date,
                season,
                exact,
                detail,
            };
            let result = query(&config, by, &term, &args)?;
            write_json(&result)
        }
    }
}

/// Build the store and load the configured seed dataset
pub fn boot_store(config: &Config) -> CliResult<Arc<InMemoryStore>> {
    let store = Arc::new(InMemoryStore::new());

    if let Some(seed_path) = &config.seed_path {
        let report = load_seed(store.as_ref(), seed_path)
            .map_err(|e| CliError::seed_failed(e.to_string()))?;

        let path = seed_path.display().to_string();
        let regions = report.regions.to_string();
        let summer = report.summer.to_string();
        let winter = report.winter.to_string();
        Logger::info(
            Event::SeedLoaded,
            &[
                ("path", path.as_str()),
                ("regions", regions.as_str()),
                ("summer", summer.as_str()),
                ("winter", winter.as_str()),
            ],
        );
    }

    Ok(store)
}

/// Boot and serve the HTTP API.
///
/// `port` overrides the configured port.
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let mut config = Config::load(config_path)?;
    if let Some(port) = port {
        config.server.port = port;
    }

    let store = boot_store(&config)?;
    let state = Arc::new(AppState::new(store));
    let server = HttpServer::with_config(config.server, state);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Run one lookup against the seed dataset and return the grouped result
pub fn query(config_path: &Path, by: Lookup, term: &str, args: &QueryArgs) -> CliResult<Value> {
    let config = Config::load(config_path)?;
    if config.seed_path.is_none() {
        return Err(CliError::config_error("seed_path is required for query"));
    }

    let store = boot_store(&config)?;
    run_lookup(store.as_ref(), by, term, args)
}

pub(crate) fn run_lookup(
    store: &dyn AthleteStore,
    by: Lookup,
    term: &str,
    args: &QueryArgs,
) -> CliResult<Value> {
    let result = match by {
        Lookup::Country => {
            let params = CountryParams {
                sport: args.sport.clone(),
                start_date: args.start_date,
                end_date: args.end_date,
                detail: args.detail,
                season: args.season,
                exact: args.exact.unwrap_or(true),
            };
            country_data(store, term, &params).map(|g| serde_json::to_value(&g))
        }
        Lookup::Noc => {
            let params = NocParams {
                sport: args.sport.clone(),
                start_date: args.start_date,
                end_date: args.end_date,
                detail: args.detail,
                season: args.season,
            };
            noc_data(store, term, &params).map(|g| serde_json::to_value(&g))
        }
        Lookup::Athlete => {
            let params = AthleteParams {
                exact: args.exact.unwrap_or(false),
                detail: args.detail,
                season: args.season,
            };
            athlete_data(store, term, &params).map(|g| serde_json::to_value(&g))
        }
    };

    let value = result.map_err(|e| CliError::query_failed(e.to_string()))??;
    Ok(value)
}
