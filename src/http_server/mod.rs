//! # HTTP Server Module
//!
//! axum server over an [`AthleteStore`](crate::store::AthleteStore).
//!
//! # Endpoints
//!
//! - `/`, `/health` - banner and health check
//! - `/country/:country`, `/noc/:noc`, `/athletes/:athlete_name` - grouped lookups
//! - `/add_athlete/`, `/update_athlete/:id`, `/delete_athlete/:id` - athlete rows
//! - `/add_region/`, `/update_region/:noc`, `/delete_region/:noc` - region rows

pub mod admin_routes;
pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod query_routes;
pub mod server;
pub mod state;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;
pub use state::AppState;
