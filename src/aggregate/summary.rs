//! Per-group summary statistics

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use crate::model::{Medal, Record};

/// Medal tally for a group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MedalCount {
    pub total: usize,
    pub gold: usize,
    pub silver: usize,
    pub bronze: usize,
}

impl MedalCount {
    pub fn tally<'a>(records: impl IntoIterator<Item = &'a Record>) -> Self {
        let mut count = Self::default();
        for medal in records.into_iter().filter_map(|r| r.medal) {
            count.total += 1;
            match medal {
                Medal::Gold => count.gold += 1,
                Medal::Silver => count.silver += 1,
                Medal::Bronze => count.bronze += 1,
            }
        }
        count
    }
}

/// Which optional summary fields to compute
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateOptions {
    /// Include raw member records
    pub detail: bool,
    /// Distinct season values (year grouping)
    pub seasons: bool,
    /// Distinct teams (athlete grouping)
    pub teams: bool,
    /// Distinct sports (athlete grouping)
    pub sports: bool,
}

impl AggregateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn detail(mut self, detail: bool) -> Self {
        self.detail = detail;
        self
    }

    pub fn with_seasons(mut self) -> Self {
        self.seasons = true;
        self
    }

    pub fn with_teams_and_sports(mut self) -> Self {
        self.teams = true;
        self.sports = true;
        self
    }
}

/// Summary of one group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    #[serde(rename = "season", skip_serializing_if = "Option::is_none")]
    pub seasons: Option<Vec<String>>,
    pub total_entries: usize,
    pub unique_participants: usize,
    pub medal_count: MedalCount,
    pub games: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teams: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sports: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<Record>>,
}

/// Sorted distinct values of one string column
fn distinct<'a, F>(members: &'a [Record], column: F) -> Vec<String>
where
    F: Fn(&'a Record) -> &'a str,
{
    members
        .iter()
        .map(column)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

impl GroupSummary {
    /// Summarize a group's members. An empty group yields zero counts.
    pub fn summarize(members: Vec<Record>, options: &AggregateOptions) -> Self {
        let unique_participants = members
            .iter()
            .map(|r| r.name.as_str())
            .collect::<HashSet<_>>()
            .len();

        Self {
            seasons: options.seasons.then(|| distinct(&members, |r| r.season.as_str())),
            total_entries: members.len(),
            unique_participants,
            medal_count: MedalCount::tally(&members),
            games: distinct(&members, |r| r.games.as_str()),
            teams: options.teams.then(|| distinct(&members, |r| r.team.as_str())),
            sports: options.sports.then(|| distinct(&members, |r| r.sport.as_str())),
            entries: options.detail.then_some(members),
        }
    }
}
