//! Hash grouping with deterministic group order

use std::collections::HashMap;
use std::hash::Hash;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::model::Record;

use super::summary::{AggregateOptions, GroupSummary};

/// Relevance of a group whose identity does not contain the search term.
/// Sorts after every real match position.
pub const NO_MATCH: i64 = i64::MAX;

/// Character position of `term` inside `haystack`, both lowercased.
///
/// Earlier positions are more relevant. Returns [`NO_MATCH`] when absent.
pub fn match_position(haystack: &str, term: &str) -> i64 {
    let haystack = haystack.to_lowercase();
    let term = term.to_lowercase();
    match haystack.find(&term) {
        Some(byte_pos) => haystack[..byte_pos].chars().count() as i64,
        None => NO_MATCH,
    }
}

/// Ordered mapping of group identity to summary.
///
/// Serializes as a JSON object whose keys keep the group order.
#[derive(Debug, Clone, PartialEq)]
pub struct Grouped<K> {
    groups: Vec<(K, GroupSummary)>,
}

impl<K: PartialEq> Grouped<K> {
    pub fn get(&self, key: &K) -> Option<&GroupSummary> {
        self.groups.iter().find(|(k, _)| k == key).map(|(_, s)| s)
    }
}

impl<K> Grouped<K> {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.iter().map(|(k, _)| k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &GroupSummary)> {
        self.groups.iter().map(|(k, s)| (k, s))
    }

    /// Total member records across all groups
    pub fn total_entries(&self) -> usize {
        self.groups.iter().map(|(_, s)| s.total_entries).sum()
    }
}

impl<K: Serialize> Serialize for Grouped<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (key, summary) in &self.groups {
            map.serialize_entry(key, summary)?;
        }
        map.end()
    }
}

/// Group and summarize `records`.
///
/// Records are stably sorted by `(relevance, key, year)`, grouped by key
/// in a hash map, and the groups ordered by `(relevance, key)` where a
/// group's relevance is that of its first sorted member.
pub fn aggregate<K, FK, FR>(
    records: Vec<Record>,
    group_key: FK,
    relevance: FR,
    options: &AggregateOptions,
) -> Grouped<K>
where
    K: Ord + Hash + Clone,
    FK: Fn(&Record) -> K,
    FR: Fn(&Record) -> i64,
{
    let mut keyed: Vec<(i64, K, Record)> = records
        .into_iter()
        .map(|r| (relevance(&r), group_key(&r), r))
        .collect();

    // sort_by is stable
    keyed.sort_by(|a, b| {
        a.0.cmp(&b.0)
            .then_with(|| a.1.cmp(&b.1))
            .then_with(|| a.2.year.cmp(&b.2.year))
    });

    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(i64, K, Vec<Record>)> = Vec::new();

    for (rank, key, record) in keyed {
        match index.get(&key) {
            Some(&slot) => groups[slot].2.push(record),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((rank, key, vec![record]));
            }
        }
    }

    groups.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

    Grouped {
        groups: groups
            .into_iter()
            .map(|(_, key, members)| (key, GroupSummary::summarize(members, options)))
            .collect(),
    }
}

/// Group by region name, most relevant to `term` first
pub fn by_region(records: Vec<Record>, term: &str, detail: bool) -> Grouped<String> {
    aggregate(
        records,
        |r| r.region.clone().unwrap_or_default(),
        |r| match_position(r.region.as_deref().unwrap_or_default(), term),
        &AggregateOptions::new().detail(detail),
    )
}

/// Group by year, oldest first, with the seasons seen each year
pub fn by_year(records: Vec<Record>, detail: bool) -> Grouped<i32> {
    aggregate(
        records,
        |r| r.year,
        |r| i64::from(r.year),
        &AggregateOptions::new().detail(detail).with_seasons(),
    )
}

/// Group by athlete name, most relevant to `term` first, with teams and sports
pub fn by_athlete(records: Vec<Record>, term: &str, detail: bool) -> Grouped<String> {
    aggregate(
        records,
        |r| r.name.clone(),
        |r| match_position(&r.name, term),
        &AggregateOptions::new().detail(detail).with_teams_and_sports(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Medal;

    fn record(id: i64, name: &str, region: &str, year: i32, medal: Option<Medal>) -> Record {
        Record {
            id,
            name: name.to_string(),
            sex: "M".to_string(),
            age: 24.0,
            team: region.to_string(),
            noc: "XXX".to_string(),
            games: format!("{} Summer", year),
            year,
            season: "Summer".to_string(),
            city: "City".to_string(),
            sport: "Judo".to_string(),
            event: "Judo Men's Heavyweight".to_string(),
            medal,
            region: Some(region.to_string()),
            notes: None,
        }
    }

    #[test]
    fn test_match_position() {
        assert_eq!(match_position("Finland", "fin"), 0);
        assert_eq!(match_position("Finland", "LAND"), 3);
        assert_eq!(match_position("Sweden", "fin"), NO_MATCH);
        assert_eq!(match_position("Åland Finland", "fin"), 6);
    }

    #[test]
    fn test_closer_match_groups_first() {
        let records = vec![
            record(1, "A", "Zimbabwe", 2000, None),
            record(2, "B", "Bosnia", 2000, None),
        ];
        // "bab" at 3 in zimbabwe, absent in bosnia
        let grouped = by_region(records, "bab", false);
        let keys: Vec<&String> = grouped.keys().collect();
        assert_eq!(keys, vec!["Zimbabwe", "Bosnia"]);
    }

    #[test]
    fn test_equal_relevance_orders_by_key() {
        let records = vec![
            record(1, "A", "Norway", 2000, None),
            record(2, "B", "Denmark", 2000, None),
        ];
        let grouped = by_region(records, "", false);
        let keys: Vec<&String> = grouped.keys().collect();
        assert_eq!(keys, vec!["Denmark", "Norway"]);
    }

    #[test]
    fn test_unsorted_input_does_not_fragment_groups() {
        let records = vec![
            record(1, "A", "Finland", 2004, None),
            record(2, "B", "Sweden", 2000, None),
            record(3, "C", "Finland", 1996, None),
        ];
        let grouped = aggregate(
            records,
            |r| r.region.clone().unwrap_or_default(),
            |_| 0,
            &AggregateOptions::new().detail(true),
        );

        assert_eq!(grouped.len(), 2);
        let finland = grouped.get(&"Finland".to_string()).unwrap();
        let ids: Vec<i64> = finland.entries.as_ref().unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_members_sorted_by_year_then_fetch_order() {
        let records = vec![
            record(1, "A", "Finland", 2004, None),
            record(2, "B", "Finland", 2000, None),
            record(3, "C", "Finland", 2004, None),
            record(4, "D", "Finland", 2000, None),
        ];
        let grouped = by_region(records, "fin", true);
        let entries = grouped.get(&"Finland".to_string()).unwrap().entries.clone().unwrap();
        let ids: Vec<i64> = entries.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_year_grouping_scenario() {
        let records = vec![
            record(1, "A", "Finland", 2000, Some(Medal::Gold)),
            record(2, "B", "Finland", 2000, None),
        ];
        let grouped = by_year(records, false);
        let summary = grouped.get(&2000).unwrap();

        assert_eq!(summary.total_entries, 2);
        assert_eq!(summary.unique_participants, 2);
        assert_eq!(summary.medal_count.total, 1);
        assert_eq!(summary.medal_count.gold, 1);
        assert_eq!(summary.games, vec!["2000 Summer"]);
        assert_eq!(summary.seasons, Some(vec!["Summer".to_string()]));
    }

    #[test]
    fn test_years_ascend() {
        let records = vec![
            record(1, "A", "Norway", 1912, None),
            record(2, "A", "Norway", 1904, None),
            record(3, "A", "Norway", 1908, None),
        ];
        let grouped = by_year(records, false);
        let keys: Vec<i32> = grouped.keys().copied().collect();
        assert_eq!(keys, vec![1904, 1908, 1912]);
    }

    #[test]
    fn test_athlete_grouping_collects_teams_and_sports() {
        let mut swim = record(2, "Jan Roger Skyttester", "Norway", 1988, None);
        swim.sport = "Swimming".to_string();
        let records = vec![record(1, "Jan Roger Skyttester", "Norway", 1984, None), swim];

        let grouped = by_athlete(records, "Tester", false);
        let summary = grouped.get(&"Jan Roger Skyttester".to_string()).unwrap();
        assert_eq!(summary.teams, Some(vec!["Norway".to_string()]));
        assert_eq!(
            summary.sports,
            Some(vec!["Judo".to_string(), "Swimming".to_string()])
        );
        assert_eq!(summary.games, vec!["1984 Summer", "1988 Summer"]);
    }

    #[test]
    fn test_serializes_in_group_order() {
        let records = vec![
            record(1, "A", "Zimbabwe", 2000, None),
            record(2, "B", "Bosnia", 2000, None),
        ];
        let grouped = by_region(records, "bab", false);
        let json = serde_json::to_string(&grouped).unwrap();
        assert!(json.find("Zimbabwe").unwrap() < json.find("Bosnia").unwrap());
    }

    #[test]
    fn test_year_keys_serialize_as_strings() {
        let grouped = by_year(vec![record(1, "A", "Norway", 1904, None)], false);
        let json = serde_json::to_value(&grouped).unwrap();
        assert_eq!(json["1904"]["total_entries"], 1);
    }
}
