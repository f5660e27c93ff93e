//! # Data Model
//!
//! Athlete and region rows as stored, their partial-update payloads, and the
//! flat joined [`Record`] the aggregator consumes.

mod athlete;
mod record;
mod region;

pub use athlete::{Athlete, AthleteUpdate, Medal, NewAthlete, Season, SeasonSelector};
pub use record::Record;
pub use region::{Region, RegionUpdate};

use serde::{Deserialize, Deserializer};

/// Distinguishes a field sent as `null` from a field that was not sent.
///
/// Used with `#[serde(default, deserialize_with = "explicit_null")]` on
/// `Option<Option<T>>` fields: absent => `None`, `null` => `Some(None)`.
pub(crate) fn explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
