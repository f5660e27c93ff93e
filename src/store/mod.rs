//! # Row Store
//!
//! Regions plus the summer and winter athlete tables. Reads return joined
//! [`Record`]s narrowed by a composed [`Query`]; writes enforce the table
//! constraints (NOC primary key, athlete → region foreign key with cascade
//! on update and delete, season ∈ {summer, winter}).

mod errors;
mod memory;
mod seed;

pub use errors::{StoreError, StoreResult};
pub use memory::InMemoryStore;
pub use seed::{load_seed, SeedData, SeedReport};

use crate::model::{Athlete, AthleteUpdate, NewAthlete, Record, Region, RegionUpdate, SeasonSelector};
use crate::query::Query;

/// Row counts per table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableCounts {
    pub regions: usize,
    pub summer: usize,
    pub winter: usize,
}

/// Storage collaborator for the query and admin routes
pub trait AthleteStore: Send + Sync {
    /// Joined records from the selected tables that match `query`,
    /// summer rows first, each table in id order
    fn fetch(&self, season: SeasonSelector, query: &Query<Record>) -> StoreResult<Vec<Record>>;

    fn get_athlete(&self, id: i64) -> StoreResult<Athlete>;

    fn insert_athlete(&self, athlete: NewAthlete) -> StoreResult<Athlete>;

    fn update_athlete(&self, id: i64, update: AthleteUpdate) -> StoreResult<Athlete>;

    fn delete_athlete(&self, id: i64) -> StoreResult<()>;

    fn get_region(&self, noc: &str) -> StoreResult<Region>;

    fn insert_region(&self, region: Region) -> StoreResult<Region>;

    fn update_region(&self, noc: &str, update: RegionUpdate) -> StoreResult<Region>;

    /// Delete a region and every athlete row referencing it
    fn delete_region(&self, noc: &str) -> StoreResult<()>;

    fn counts(&self) -> StoreResult<TableCounts>;
}
