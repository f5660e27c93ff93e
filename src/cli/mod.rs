//! Command-line interface
//!
//! - serve: load config and seed, then serve the HTTP API
//! - query: one-shot lookup against the seed dataset, printed as JSON

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, Lookup};
pub use commands::{boot_store, query, run, run_command, serve, QueryArgs};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::write_json;
