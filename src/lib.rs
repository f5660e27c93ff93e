//! athlete-api - REST API over Olympic athlete and region records
//!
//! Lookups by country, NOC code or athlete name narrow the joined record set
//! with composed filter clauses, then fold it into ordered per-group
//! summaries. Athlete and region rows can be inserted, partially updated and
//! deleted.

pub mod aggregate;
pub mod cli;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod query;
pub mod service;
pub mod store;
