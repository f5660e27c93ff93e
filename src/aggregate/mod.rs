//! # Grouping Aggregator
//!
//! Folds a flat sequence of joined [`Record`](crate::model::Record)s into
//! ordered per-group summaries.
//!
//! # Execution Flow
//!
//! 1. Stable sort by `(relevance, group key, year)`
//! 2. Hash-group by key; members keep their sorted order
//! 3. Order group identities by `(relevance, group key)`
//! 4. Summarize each group
//!
//! Ties on the whole sort key keep the original fetch order.

mod grouping;
mod summary;

pub use grouping::{aggregate, by_athlete, by_region, by_year, match_position, Grouped, NO_MATCH};
pub use summary::{AggregateOptions, GroupSummary, MedalCount};
