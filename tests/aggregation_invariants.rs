//! Aggregation Invariant Tests
//!
//! Properties of grouped summaries:
//! - Aggregating the same input twice gives the same result
//! - Medal counts add up and never exceed the member count
//! - Unique participants never exceed total entries
//! - Group order is (relevance, key) and ties keep fetch order

use athlete_api::aggregate::{aggregate, by_athlete, by_region, by_year, AggregateOptions, NO_MATCH};
use athlete_api::model::{Medal, Record};

// =============================================================================
// Helper Functions
// =============================================================================

fn record(id: i64, name: &str, region: &str, year: i32, medal: Option<Medal>) -> Record {
    Record {
        id,
        name: name.to_string(),
        sex: "F".to_string(),
        age: 23.0,
        team: region.to_string(),
        noc: region.chars().take(3).collect::<String>().to_uppercase(),
        games: format!("{} Summer", year),
        year,
        season: "Summer".to_string(),
        city: "City".to_string(),
        sport: "Judo".to_string(),
        event: "Judo Women's Lightweight".to_string(),
        medal,
        region: Some(region.to_string()),
        notes: None,
    }
}

fn dataset() -> Vec<Record> {
    vec![
        record(1, "Anna", "Finland", 2000, Some(Medal::Gold)),
        record(2, "Berit", "Norway", 1996, None),
        record(3, "Anna", "Finland", 2004, Some(Medal::Bronze)),
        record(4, "Cecilia", "Sweden", 2000, Some(Medal::Silver)),
        record(5, "Dagny", "Norway", 2000, Some(Medal::Gold)),
        record(6, "Eeva", "Finland", 1996, None),
        record(7, "Berit", "Norway", 2000, None),
    ]
}

// =============================================================================
// Determinism Tests
// =============================================================================

/// Aggregation is a pure function of its input.
#[test]
fn test_aggregation_is_idempotent() {
    for _ in 0..20 {
        assert_eq!(by_region(dataset(), "fin", true), by_region(dataset(), "fin", true));
        assert_eq!(by_year(dataset(), true), by_year(dataset(), true));
        assert_eq!(by_athlete(dataset(), "a", true), by_athlete(dataset(), "a", true));
    }
}

/// Serialized output keeps group order across runs.
#[test]
fn test_serialized_order_is_stable() {
    let first = serde_json::to_string(&by_region(dataset(), "n", false)).unwrap();
    for _ in 0..20 {
        assert_eq!(serde_json::to_string(&by_region(dataset(), "n", false)).unwrap(), first);
    }
}

// =============================================================================
// Count Invariant Tests
// =============================================================================

#[test]
fn test_medal_counts_add_up() {
    for (_, summary) in by_year(dataset(), true).iter() {
        let medals = &summary.medal_count;
        assert_eq!(medals.total, medals.gold + medals.silver + medals.bronze);

        let entries = summary.entries.as_ref().unwrap();
        let without_medal = entries.iter().filter(|r| r.medal.is_none()).count();
        assert_eq!(summary.total_entries, medals.total + without_medal);
    }
}

#[test]
fn test_unique_participants_bounded() {
    for (_, summary) in by_region(dataset(), "", false).iter() {
        assert!(summary.unique_participants <= summary.total_entries);
    }

    let grouped = by_region(dataset(), "", false);
    let finland = grouped.get(&"Finland".to_string()).unwrap();
    assert_eq!(finland.total_entries, 3);
    assert_eq!(finland.unique_participants, 2);
}

/// Every input record lands in exactly one group.
#[test]
fn test_no_records_lost() {
    let total = dataset().len();
    assert_eq!(by_region(dataset(), "x", false).total_entries(), total);
    assert_eq!(by_year(dataset(), false).total_entries(), total);
    assert_eq!(by_athlete(dataset(), "x", false).total_entries(), total);
}

#[test]
fn test_empty_input() {
    assert!(by_region(Vec::new(), "fin", true).is_empty());
    assert!(by_year(Vec::new(), true).is_empty());
}

// =============================================================================
// Ordering Tests
// =============================================================================

/// Groups containing the term earlier come first; misses come last.
#[test]
fn test_region_relevance_order() {
    let grouped = by_region(dataset(), "en", false);
    let keys: Vec<&String> = grouped.keys().collect();
    // "en" at 4 in sweden, absent elsewhere; misses order by name
    assert_eq!(keys, vec!["Sweden", "Finland", "Norway"]);
}

#[test]
fn test_year_groups_ascend() {
    let grouped = by_year(dataset(), false);
    let keys: Vec<i32> = grouped.keys().copied().collect();
    assert_eq!(keys, vec![1996, 2000, 2004]);

    let y2000 = grouped.get(&2000).unwrap();
    assert_eq!(y2000.total_entries, 4);
    assert_eq!(y2000.medal_count.gold, 2);
    assert_eq!(y2000.medal_count.silver, 1);
    assert_eq!(y2000.seasons, Some(vec!["Summer".to_string()]));
}

/// Members with an equal sort key keep their fetch order.
#[test]
fn test_ties_keep_fetch_order() {
    let grouped = aggregate(
        dataset(),
        |_| 0u8,
        |_| NO_MATCH,
        &AggregateOptions::new().detail(true),
    );
    let entries = grouped.get(&0).unwrap().entries.clone().unwrap();
    let ids: Vec<i64> = entries.iter().map(|r| r.id).collect();
    // year ascending; within a year, input order
    assert_eq!(ids, vec![2, 6, 1, 4, 5, 7, 3]);
}

#[test]
fn test_athlete_groups() {
    let grouped = by_athlete(dataset(), "anna", false);
    let keys: Vec<&String> = grouped.keys().collect();
    assert_eq!(keys[0], "Anna");

    let anna = grouped.get(&"Anna".to_string()).unwrap();
    assert_eq!(anna.medal_count.total, 2);
    assert_eq!(anna.games, vec!["2000 Summer", "2004 Summer"]);
    assert_eq!(anna.teams, Some(vec!["Finland".to_string()]));
    assert!(anna.entries.is_none());
}
