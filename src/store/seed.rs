//! Seed dataset loading

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::{NewAthlete, Region, Season};

use super::errors::{StoreError, StoreResult};
use super::AthleteStore;

/// On-disk seed file: `{"regions": [..], "summer": [..], "winter": [..]}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub regions: Vec<Region>,
    #[serde(default)]
    pub summer: Vec<NewAthlete>,
    #[serde(default)]
    pub winter: Vec<NewAthlete>,
}

impl SeedData {
    pub fn from_path(path: &Path) -> StoreResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            StoreError::Seed(format!("failed to read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            StoreError::Seed(format!("failed to parse {}: {}", path.display(), e))
        })
    }
}

/// Rows loaded per table. A table that already held rows reports zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub regions: usize,
    pub summer: usize,
    pub winter: usize,
}

/// Load a seed file into `store`.
///
/// Regions go first so athlete rows can satisfy their NOC reference. Every
/// row passes through the same validation as the insert endpoints.
pub fn load_seed(store: &dyn AthleteStore, path: &Path) -> StoreResult<SeedReport> {
    let data = SeedData::from_path(path)?;
    load_data(store, data)
}

pub(crate) fn load_data(store: &dyn AthleteStore, data: SeedData) -> StoreResult<SeedReport> {
    let existing = store.counts()?;
    let mut report = SeedReport::default();

    if existing.regions == 0 {
        for region in data.regions {
            store.insert_region(region)?;
            report.regions += 1;
        }
    }

    if existing.summer == 0 {
        report.summer = load_table(store, Season::Summer, data.summer)?;
    }
    if existing.winter == 0 {
        report.winter = load_table(store, Season::Winter, data.winter)?;
    }

    Ok(report)
}

fn load_table(store: &dyn AthleteStore, table: Season, rows: Vec<NewAthlete>) -> StoreResult<usize> {
    let mut loaded = 0;
    for row in rows {
        if row.table() != Some(table) {
            return Err(StoreError::Seed(format!(
                "row '{}' has season '{}' but is listed under {}",
                row.name,
                row.season,
                table.as_str().to_lowercase()
            )));
        }
        store.insert_athlete(row)?;
        loaded += 1;
    }
    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SEED: &str = r#"{
        "regions": [
            {"noc": "FIN", "region": "Finland", "notes": null},
            {"noc": "NOR", "region": "Norway"}
        ],
        "summer": [
            {"name": "A", "sex": "M", "age": 24, "team": "Finland", "noc": "FIN",
             "games": "2000 Summer", "year": 2000, "season": "Summer",
             "city": "Sydney", "sport": "Judo", "event": "Judo Men's Lightweight",
             "medal": "Gold"}
        ],
        "winter": [
            {"name": "B", "sex": "F", "age": 21, "team": "Norway", "noc": "NOR",
             "games": "1994 Winter", "year": 1994, "season": "Winter",
             "city": "Lillehammer", "sport": "Biathlon", "event": "Biathlon Women's 15 kilometres",
             "medal": null}
        ]
    }"#;

    fn seed_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_seed() {
        let file = seed_file(SEED);
        let store = InMemoryStore::new();

        let report = load_seed(&store, file.path()).unwrap();
        assert_eq!(
            report,
            SeedReport {
                regions: 2,
                summer: 1,
                winter: 1
            }
        );
        assert_eq!(store.get_region("NOR").unwrap().notes, None);
    }

    #[test]
    fn test_populated_tables_are_skipped() {
        let file = seed_file(SEED);
        let store = InMemoryStore::new();
        load_seed(&store, file.path()).unwrap();

        let report = load_seed(&store, file.path()).unwrap();
        assert_eq!(report, SeedReport::default());
        assert_eq!(store.counts().unwrap().summer, 1);
    }

    #[test]
    fn test_season_must_match_table() {
        let data: SeedData = serde_json::from_str(&SEED.replace(
            "\"season\": \"Winter\"",
            "\"season\": \"Summer\"",
        ))
        .unwrap();
        let err = load_data(&InMemoryStore::new(), data).unwrap_err();
        assert!(matches!(err, StoreError::Seed(_)));
    }

    #[test]
    fn test_unknown_noc_fails_load() {
        let data: SeedData =
            serde_json::from_str(&SEED.replace("\"noc\": \"NOR\", \"region\"", "\"noc\": \"SWE\", \"region\""))
                .unwrap();
        let err = load_data(&InMemoryStore::new(), data).unwrap_err();
        assert_eq!(err, StoreError::UnknownNoc("NOR".to_string()));
    }

    #[test]
    fn test_missing_file() {
        let err = load_seed(&InMemoryStore::new(), Path::new("/nonexistent/seed.json")).unwrap_err();
        assert!(matches!(err, StoreError::Seed(_)));
    }
}
