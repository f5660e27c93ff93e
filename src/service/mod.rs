//! # Lookup Service
//!
//! Turns request parameters into filter clauses, fetches the matching joined
//! records from a store and groups them:
//!
//! - country: `region` equal/contain, `sport` equal, `year` within the period;
//!   grouped by region name
//! - noc: `noc` equal, `sport` equal, `year` within the period; grouped by year
//! - athlete: `name` equal/contain; grouped by athlete name

mod errors;
mod params;
mod queries;

pub use errors::{ServiceError, ServiceResult};
pub use params::{verify_params, AthleteParams, CountryParams, NocParams};
pub use queries::{athlete_data, country_data, noc_data};
