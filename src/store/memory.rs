//! In-memory row store

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::model::{
    Athlete, AthleteUpdate, NewAthlete, Record, Region, RegionUpdate, Season, SeasonSelector,
};
use crate::query::Query;

use super::errors::{StoreError, StoreResult};
use super::{AthleteStore, TableCounts};

#[derive(Debug, Default)]
struct Tables {
    regions: BTreeMap<String, Region>,
    summer: BTreeMap<i64, Athlete>,
    winter: BTreeMap<i64, Athlete>,
    /// Last id handed out; shared by both athlete tables
    last_id: i64,
}

impl Tables {
    fn table(&self, season: Season) -> &BTreeMap<i64, Athlete> {
        match season {
            Season::Summer => &self.summer,
            Season::Winter => &self.winter,
        }
    }

    fn table_mut(&mut self, season: Season) -> &mut BTreeMap<i64, Athlete> {
        match season {
            Season::Summer => &mut self.summer,
            Season::Winter => &mut self.winter,
        }
    }

    fn locate(&self, id: i64) -> Option<Season> {
        [Season::Summer, Season::Winter]
            .into_iter()
            .find(|season| self.table(*season).contains_key(&id))
    }

    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    /// Check athlete constraints and return the table it belongs in
    fn check_athlete(&self, athlete: &Athlete) -> StoreResult<Season> {
        let season = athlete
            .table()
            .ok_or_else(|| StoreError::InvalidSeason(athlete.season.clone()))?;

        if !self.regions.contains_key(&athlete.noc) {
            return Err(StoreError::UnknownNoc(athlete.noc.clone()));
        }

        Ok(season)
    }

    fn athletes_mut(&mut self) -> impl Iterator<Item = &mut Athlete> {
        self.summer.values_mut().chain(self.winter.values_mut())
    }
}

/// Thread-safe in-memory implementation of [`AthleteStore`]
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(|_| StoreError::Poisoned)
    }
}

impl AthleteStore for InMemoryStore {
    fn fetch(&self, season: SeasonSelector, query: &Query<Record>) -> StoreResult<Vec<Record>> {
        let tables = self.read()?;
        let mut records = Vec::new();

        for table in season.seasons() {
            for athlete in tables.table(*table).values() {
                let record = Record::join(athlete, tables.regions.get(&athlete.noc));
                if query.matches(&record) {
                    records.push(record);
                }
            }
        }

        Ok(records)
    }

    fn get_athlete(&self, id: i64) -> StoreResult<Athlete> {
        let tables = self.read()?;
        tables
            .locate(id)
            .and_then(|season| tables.table(season).get(&id).cloned())
            .ok_or(StoreError::AthleteNotFound(id))
    }

    fn insert_athlete(&self, athlete: NewAthlete) -> StoreResult<Athlete> {
        let mut tables = self.write()?;

        // Validate before consuming an id
        let season = tables.check_athlete(&athlete.clone().with_id(0))?;
        let athlete = athlete.with_id(tables.next_id());

        tables.table_mut(season).insert(athlete.id, athlete.clone());
        Ok(athlete)
    }

    fn update_athlete(&self, id: i64, update: AthleteUpdate) -> StoreResult<Athlete> {
        let mut tables = self.write()?;

        let current = tables.locate(id).ok_or(StoreError::AthleteNotFound(id))?;
        let mut athlete = tables
            .table(current)
            .get(&id)
            .cloned()
            .ok_or(StoreError::AthleteNotFound(id))?;

        update.apply(&mut athlete).map_err(StoreError::Constraint)?;
        let target = tables.check_athlete(&athlete)?;

        // A season change moves the row to the other table under the same id
        tables.table_mut(current).remove(&id);
        tables.table_mut(target).insert(id, athlete.clone());
        Ok(athlete)
    }

    fn delete_athlete(&self, id: i64) -> StoreResult<()> {
        let mut tables = self.write()?;
        let season = tables.locate(id).ok_or(StoreError::AthleteNotFound(id))?;
        tables.table_mut(season).remove(&id);
        Ok(())
    }

    fn get_region(&self, noc: &str) -> StoreResult<Region> {
        self.read()?
            .regions
            .get(noc)
            .cloned()
            .ok_or_else(|| StoreError::RegionNotFound(noc.to_string()))
    }

    fn insert_region(&self, region: Region) -> StoreResult<Region> {
        region.validate().map_err(StoreError::Constraint)?;

        let mut tables = self.write()?;
        if tables.regions.contains_key(&region.noc) {
            return Err(StoreError::DuplicateRegion(region.noc));
        }
        tables.regions.insert(region.noc.clone(), region.clone());
        Ok(region)
    }

    fn update_region(&self, noc: &str, update: RegionUpdate) -> StoreResult<Region> {
        update.validate().map_err(StoreError::Constraint)?;

        let mut tables = self.write()?;
        let mut region = tables
            .regions
            .get(noc)
            .cloned()
            .ok_or_else(|| StoreError::RegionNotFound(noc.to_string()))?;

        update.apply(&mut region).map_err(StoreError::Constraint)?;

        if region.noc != noc {
            if tables.regions.contains_key(&region.noc) {
                return Err(StoreError::DuplicateRegion(region.noc));
            }
            tables.regions.remove(noc);
            for athlete in tables.athletes_mut().filter(|a| a.noc == noc) {
                athlete.noc = region.noc.clone();
            }
        }

        tables.regions.insert(region.noc.clone(), region.clone());
        Ok(region)
    }

    fn delete_region(&self, noc: &str) -> StoreResult<()> {
        let mut tables = self.write()?;
        if tables.regions.remove(noc).is_none() {
            return Err(StoreError::RegionNotFound(noc.to_string()));
        }
        tables.summer.retain(|_, a| a.noc != noc);
        tables.winter.retain(|_, a| a.noc != noc);
        Ok(())
    }

    fn counts(&self) -> StoreResult<TableCounts> {
        let tables = self.read()?;
        Ok(TableCounts {
            regions: tables.regions.len(),
            summer: tables.summer.len(),
            winter: tables.winter.len(),
        })
    }
}
