//! Country, NOC and athlete lookups

use crate::aggregate::{by_athlete, by_region, by_year, Grouped};
use crate::model::Record;
use crate::query::{FilterClause, Query, Relation};
use crate::store::AthleteStore;

use super::errors::ServiceResult;
use super::params::{verify_params, AthleteParams, CountryParams, NocParams};

fn text_relation(exact: bool) -> Relation {
    if exact {
        Relation::Equal
    } else {
        Relation::Contain
    }
}

fn period_clauses(start_date: Option<i32>, end_date: Option<i32>) -> ServiceResult<[FilterClause; 2]> {
    Ok([
        FilterClause::numeric("year", start_date.map(f64::from), Relation::Gte)?,
        FilterClause::numeric("year", end_date.map(f64::from), Relation::Lte)?,
    ])
}

/// Records for a region name grouped by region, closest match first
pub fn country_data(
    store: &dyn AthleteStore,
    country: &str,
    params: &CountryParams,
) -> ServiceResult<Grouped<String>> {
    verify_params(
        country,
        params.sport.as_deref(),
        params.start_date,
        params.end_date,
    )?;

    let mut clauses = vec![
        FilterClause::text("region", Some(country), text_relation(params.exact))?,
        FilterClause::text("sport", params.sport.as_deref(), Relation::Equal)?,
    ];
    clauses.extend(period_clauses(params.start_date, params.end_date)?);

    let query = Query::<Record>::new().compose(&clauses)?;
    let records = store.fetch(params.season, &query)?;
    Ok(by_region(records, country, params.detail))
}

/// Records for a NOC code grouped by year
pub fn noc_data(store: &dyn AthleteStore, noc: &str, params: &NocParams) -> ServiceResult<Grouped<i32>> {
    verify_params(noc, params.sport.as_deref(), params.start_date, params.end_date)?;

    let mut clauses = vec![
        FilterClause::text("noc", Some(noc), Relation::Equal)?,
        FilterClause::text("sport", params.sport.as_deref(), Relation::Equal)?,
    ];
    clauses.extend(period_clauses(params.start_date, params.end_date)?);

    let query = Query::<Record>::new().compose(&clauses)?;
    let records = store.fetch(params.season, &query)?;
    Ok(by_year(records, params.detail))
}

/// Records for an athlete name grouped by name, closest match first
pub fn athlete_data(
    store: &dyn AthleteStore,
    athlete_name: &str,
    params: &AthleteParams,
) -> ServiceResult<Grouped<String>> {
    let clauses = [FilterClause::text(
        "name",
        Some(athlete_name),
        text_relation(params.exact),
    )?];

    let query = Query::<Record>::new().compose(&clauses)?;
    let records = store.fetch(params.season, &query)?;
    Ok(by_athlete(records, athlete_name, params.detail))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Medal, NewAthlete, Region, SeasonSelector};
    use crate::service::ServiceError;
    use crate::store::InMemoryStore;

    fn entry(name: &str, noc: &str, season: &str, year: i32, sport: &str, medal: Option<Medal>) -> NewAthlete {
        NewAthlete {
            name: name.to_string(),
            sex: "M".to_string(),
            age: 25.0,
            team: noc.to_string(),
            noc: noc.to_string(),
            games: format!("{} {}", year, season),
            year,
            season: season.to_string(),
            city: "City".to_string(),
            sport: sport.to_string(),
            event: format!("{} Men's Open", sport),
            medal,
        }
    }

    fn store() -> InMemoryStore {
        let store = InMemoryStore::new();
        store.insert_region(Region::new("FIN", Some("Finland"), None)).unwrap();
        store.insert_region(Region::new("NOR", Some("Norway"), None)).unwrap();
        store.insert_region(Region::new("NFL", Some("Canada"), Some("Newfoundland"))).unwrap();

        for row in [
            entry("Matti Nykanen", "FIN", "Winter", 1988, "Ski Jumping", Some(Medal::Gold)),
            entry("Paavo Nurmi", "FIN", "Summer", 1924, "Athletics", Some(Medal::Gold)),
            entry("Toni Judoka", "FIN", "Summer", 2000, "Judo", None),
            entry("Jan Roger Skyttester", "NOR", "Summer", 2000, "Judo", Some(Medal::Bronze)),
            entry("Jan Roger Skyttester", "NOR", "Summer", 1904, "Judo", None),
            entry("Old Timer", "NOR", "Summer", 1906, "Athletics", None),
        ] {
            store.insert_athlete(row).unwrap();
        }
        store
    }

    #[test]
    fn test_country_exact_is_case_insensitive() {
        let store = store();
        let params = CountryParams {
            sport: Some("JUDO".to_string()),
            ..Default::default()
        };
        let grouped = country_data(&store, "finland", &params).unwrap();
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped.get(&"Finland".to_string()).unwrap().total_entries, 1);
    }

    #[test]
    fn test_country_contain() {
        let store = store();
        let params = CountryParams {
            start_date: Some(1900),
            end_date: Some(2020),
            exact: false,
            ..Default::default()
        };
        let grouped = country_data(&store, "n", &params).unwrap();
        let keys: Vec<&String> = grouped.keys().collect();
        // "n" at 0 in norway, 2 in finland, 2 in canada
        assert_eq!(keys, vec!["Norway", "Canada", "Finland"]);
    }

    #[test]
    fn test_country_season_selector() {
        let store = store();
        let params = CountryParams {
            start_date: Some(1900),
            end_date: Some(2020),
            season: SeasonSelector::Winter,
            ..Default::default()
        };
        let grouped = country_data(&store, "Finland", &params).unwrap();
        assert_eq!(grouped.total_entries(), 1);
    }

    #[test]
    fn test_country_rejects_missing_filters() {
        let store = store();
        let err = country_data(&store, "Finland", &CountryParams::default()).unwrap_err();
        assert_eq!(
            err,
            ServiceError::Invalid("At least one query parameter is mandatory".to_string())
        );
    }

    #[test]
    fn test_noc_period() {
        let store = store();
        let params = NocParams {
            start_date: Some(1900),
            end_date: Some(1910),
            ..Default::default()
        };
        let grouped = noc_data(&store, "nor", &params).unwrap();
        let years: Vec<i32> = grouped.keys().copied().collect();
        assert_eq!(years, vec![1904, 1906]);
    }

    #[test]
    fn test_athlete_contain() {
        let store = store();
        let grouped = athlete_data(&store, "tester", &AthleteParams::default()).unwrap();
        let summary = grouped.get(&"Jan Roger Skyttester".to_string()).unwrap();
        assert_eq!(summary.total_entries, 2);
        assert_eq!(summary.medal_count.total, 1);
        assert_eq!(summary.games, vec!["1904 Summer", "2000 Summer"]);
    }

    #[test]
    fn test_athlete_exact_misses_partial_name() {
        let store = store();
        let params = AthleteParams {
            exact: true,
            ..Default::default()
        };
        assert!(athlete_data(&store, "tester", &params).unwrap().is_empty());
    }
}
