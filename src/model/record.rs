//! Flat joined rows (athlete ⋈ region on NOC)

use serde::{Deserialize, Serialize};

use crate::query::{Cell, ColumnKind, Row};

use super::athlete::{Athlete, Medal};
use super::region::Region;

/// An athlete entry joined with its region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub name: String,
    pub sex: String,
    pub age: f64,
    pub team: String,
    pub noc: String,
    pub games: String,
    pub year: i32,
    pub season: String,
    pub city: String,
    pub sport: String,
    pub event: String,
    pub medal: Option<Medal>,
    pub region: Option<String>,
    pub notes: Option<String>,
}

impl Record {
    /// Join an athlete with its region row (if any)
    pub fn join(athlete: &Athlete, region: Option<&Region>) -> Self {
        Self {
            id: athlete.id,
            name: athlete.name.clone(),
            sex: athlete.sex.clone(),
            age: athlete.age,
            team: athlete.team.clone(),
            noc: athlete.noc.clone(),
            games: athlete.games.clone(),
            year: athlete.year,
            season: athlete.season.clone(),
            city: athlete.city.clone(),
            sport: athlete.sport.clone(),
            event: athlete.event.clone(),
            medal: athlete.medal,
            region: region.and_then(|r| r.region.clone()),
            notes: region.and_then(|r| r.notes.clone()),
        }
    }
}

const RECORD_COLUMNS: &[(&str, ColumnKind)] = &[
    ("id", ColumnKind::Numeric),
    ("name", ColumnKind::Text),
    ("sex", ColumnKind::Text),
    ("age", ColumnKind::Numeric),
    ("team", ColumnKind::Text),
    ("noc", ColumnKind::Text),
    ("games", ColumnKind::Text),
    ("year", ColumnKind::Numeric),
    ("season", ColumnKind::Text),
    ("city", ColumnKind::Text),
    ("sport", ColumnKind::Text),
    ("event", ColumnKind::Text),
    ("medal", ColumnKind::Text),
    ("region", ColumnKind::Text),
    ("notes", ColumnKind::Text),
];

impl Row for Record {
    fn columns() -> &'static [(&'static str, ColumnKind)] {
        RECORD_COLUMNS
    }

    fn cell(&self, column: &str) -> Option<Cell<'_>> {
        let cell = match column {
            "id" => Cell::Numeric(Some(self.id as f64)),
            "name" => Cell::Text(Some(&self.name)),
            "sex" => Cell::Text(Some(&self.sex)),
            "age" => Cell::Numeric(Some(self.age)),
            "team" => Cell::Text(Some(&self.team)),
            "noc" => Cell::Text(Some(&self.noc)),
            "games" => Cell::Text(Some(&self.games)),
            "year" => Cell::Numeric(Some(f64::from(self.year))),
            "season" => Cell::Text(Some(&self.season)),
            "city" => Cell::Text(Some(&self.city)),
            "sport" => Cell::Text(Some(&self.sport)),
            "event" => Cell::Text(Some(&self.event)),
            "medal" => Cell::Text(self.medal.map(|m| m.as_str())),
            "region" => Cell::Text(self.region.as_deref()),
            "notes" => Cell::Text(self.notes.as_deref()),
            _ => return None,
        };
        Some(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewAthlete;

    fn athlete() -> Athlete {
        NewAthlete {
            name: "Jan Roger Skyttester".to_string(),
            sex: "M".to_string(),
            age: 31.0,
            team: "Norway".to_string(),
            noc: "NOR".to_string(),
            games: "1984 Summer".to_string(),
            year: 1984,
            season: "Summer".to_string(),
            city: "Los Angeles".to_string(),
            sport: "Archery".to_string(),
            event: "Archery Men's Individual".to_string(),
            medal: None,
        }
        .with_id(7)
    }

    #[test]
    fn test_join_copies_region_columns() {
        let region = Region::new("NOR", Some("Norway"), None);
        let record = Record::join(&athlete(), Some(&region));

        assert_eq!(record.id, 7);
        assert_eq!(record.region.as_deref(), Some("Norway"));
        assert_eq!(record.notes, None);
    }

    #[test]
    fn test_join_without_region() {
        let record = Record::join(&athlete(), None);
        assert_eq!(record.region, None);
        assert_eq!(record.cell("region"), Some(Cell::Text(None)));
    }

    #[test]
    fn test_every_declared_column_has_a_cell() {
        let record = Record::join(&athlete(), None);
        for (name, kind) in Record::columns() {
            let cell = record.cell(name).unwrap();
            assert_eq!(cell.kind(), *kind, "column {}", name);
        }
        assert_eq!(record.cell("colour"), None);
    }
}
