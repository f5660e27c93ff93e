//! Athlete rows, medals and seasons.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::explicit_null;

/// Medal awarded for an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Medal::Gold => "Gold",
            Medal::Silver => "Silver",
            Medal::Bronze => "Bronze",
        }
    }
}

/// The table an athlete row lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Summer,
    Winter,
}

impl Season {
    /// Resolve a season column value ("Summer", "winter", ...).
    ///
    /// Returns `None` for anything that is not summer or winter.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "summer" => Some(Season::Summer),
            "winter" => Some(Season::Winter),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Summer => "summer",
            Season::Winter => "winter",
        }
    }
}

/// Which record sets a query reads from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonSelector {
    Summer,
    Winter,
    #[default]
    Union,
}

impl SeasonSelector {
    /// Tables to read, summer first
    pub fn seasons(&self) -> &'static [Season] {
        match self {
            SeasonSelector::Summer => &[Season::Summer],
            SeasonSelector::Winter => &[Season::Winter],
            SeasonSelector::Union => &[Season::Summer, Season::Winter],
        }
    }
}

impl fmt::Display for SeasonSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SeasonSelector::Summer => "summer",
            SeasonSelector::Winter => "winter",
            SeasonSelector::Union => "union",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for SeasonSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "summer" => Ok(SeasonSelector::Summer),
            "winter" => Ok(SeasonSelector::Winter),
            "union" => Ok(SeasonSelector::Union),
            other => Err(format!(
                "Invalid season selector: '{}'. Must be 'summer', 'winter' or 'union'.",
                other
            )),
        }
    }
}

/// Insert payload for an athlete entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAthlete {
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
    #[serde(default)]
    pub medal: Option<Medal>,
}

impl NewAthlete {
    /// The table this entry belongs to, if its season is valid
    pub fn table(&self) -> Option<Season> {
        Season::parse(&self.season)
    }

    pub fn with_id(self, id: i64) -> Athlete {
        Athlete {
            id,
            name: self.name,
            sex: self.sex,
            age: self.age,
            team: self.team,
            noc: self.noc,
            games: self.games,
            year: self.year,
            season: self.season,
            city: self.city,
            sport: self.sport,
            event: self.event,
            medal: self.medal,
        }
    }
}

/// A stored athlete entry (one athlete in one event at one games)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Athlete {
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
}

impl Athlete {
    pub fn table(&self) -> Option<Season> {
        Season::parse(&self.season)
    }
}

/// Partial update for an athlete entry.
///
/// Only fields present in the payload are applied. `medal: null` clears the
/// medal; `null` for any other field is rejected by [`AthleteUpdate::apply`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AthleteUpdate {
    #[serde(default, deserialize_with = "explicit_null")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub sex: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub age: Option<Option<f64>>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub team: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub noc: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub games: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub year: Option<Option<i32>>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub season: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub city: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub sport: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub event: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub medal: Option<Option<Medal>>,
}

/// Apply one required field of a partial update.
fn set_required<T>(target: &mut T, field: &str, update: Option<Option<T>>) -> Result<(), String> {
    match update {
        None => Ok(()),
        Some(Some(value)) => {
            *target = value;
            Ok(())
        }
        Some(None) => Err(format!("Field '{}' cannot be null", field)),
    }
}

impl AthleteUpdate {
    /// Apply the sent fields to `athlete`.
    ///
    /// On error `athlete` may be partially updated; callers apply to a copy.
    pub fn apply(self, athlete: &mut Athlete) -> Result<(), String> {
        set_required(&mut athlete.name, "name", self.name)?;
        set_required(&mut athlete.sex, "sex", self.sex)?;
        set_required(&mut athlete.age, "age", self.age)?;
        set_required(&mut athlete.team, "team", self.team)?;
        set_required(&mut athlete.noc, "noc", self.noc)?;
        set_required(&mut athlete.games, "games", self.games)?;
        set_required(&mut athlete.year, "year", self.year)?;
        set_required(&mut athlete.season, "season", self.season)?;
        set_required(&mut athlete.city, "city", self.city)?;
        set_required(&mut athlete.sport, "sport", self.sport)?;
        set_required(&mut athlete.event, "event", self.event)?;
        if let Some(medal) = self.medal {
            athlete.medal = medal;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Athlete {
        NewAthlete {
            name: "Test Name".to_string(),
            sex: "M".to_string(),
            age: 25.0,
            team: "Test Team".to_string(),
            noc: "NO1".to_string(),
            games: "Test Games 2020".to_string(),
            year: 2020,
            season: "Summer".to_string(),
            city: "Test City".to_string(),
            sport: "Test Sport".to_string(),
            event: "Test Event".to_string(),
            medal: Some(Medal::Gold),
        }
        .with_id(1)
    }

    #[test]
    fn test_season_parse_is_case_insensitive() {
        assert_eq!(Season::parse("Summer"), Some(Season::Summer));
        assert_eq!(Season::parse("WINTER"), Some(Season::Winter));
        assert_eq!(Season::parse("Spring"), None);
    }

    #[test]
    fn test_season_selector_tables() {
        assert_eq!(SeasonSelector::Union.seasons(), &[Season::Summer, Season::Winter]);
        assert_eq!(SeasonSelector::Winter.seasons(), &[Season::Winter]);
        assert_eq!("UNION".parse::<SeasonSelector>().unwrap(), SeasonSelector::Union);
        assert!("both".parse::<SeasonSelector>().is_err());
    }

    #[test]
    fn test_medal_rejects_unknown_value() {
        let parsed: Result<Medal, _> = serde_json::from_value(json!("Platinum"));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_update_distinguishes_null_from_absent() {
        let update: AthleteUpdate = serde_json::from_value(json!({"medal": null})).unwrap();
        assert_eq!(update.medal, Some(None));
        assert_eq!(update.name, None);

        let mut athlete = sample();
        update.apply(&mut athlete).unwrap();
        assert_eq!(athlete.medal, None);
        assert_eq!(athlete.name, "Test Name");
    }

    #[test]
    fn test_update_rejects_null_required_field() {
        let update: AthleteUpdate = serde_json::from_value(json!({"name": null})).unwrap();
        let mut athlete = sample();
        assert!(update.apply(&mut athlete).is_err());
    }

    #[test]
    fn test_update_rejects_wrong_type() {
        let parsed: Result<AthleteUpdate, _> =
            serde_json::from_value(json!({"age": "Test Name Update"}));
        assert!(parsed.is_err());
    }
}
