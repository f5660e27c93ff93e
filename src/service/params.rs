//! Query parameters for the lookup operations

use serde::Deserialize;

use crate::model::SeasonSelector;

use super::errors::{ServiceError, ServiceResult};

fn default_true() -> bool {
    true
}

/// Parameters of a country lookup
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountryParams {
    #[serde(default)]
    pub sport: Option<String>,
    #[serde(default)]
    pub start_date: Option<i32>,
    #[serde(default)]
    pub end_date: Option<i32>,
    #[serde(default)]
    pub detail: bool,
    #[serde(default)]
    pub season: SeasonSelector,
    /// Match the region name exactly rather than by substring
    #[serde(default = "default_true")]
    pub exact: bool,
}

impl Default for CountryParams {
    fn default() -> Self {
        Self {
            sport: None,
            start_date: None,
            end_date: None,
            detail: false,
            season: SeasonSelector::default(),
            exact: true,
        }
    }
}

/// Parameters of a NOC lookup
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NocParams {
    #[serde(default)]
    pub sport: Option<String>,
    #[serde(default)]
    pub start_date: Option<i32>,
    #[serde(default)]
    pub end_date: Option<i32>,
    #[serde(default)]
    pub detail: bool,
    #[serde(default)]
    pub season: SeasonSelector,
}

/// Parameters of an athlete name lookup
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AthleteParams {
    #[serde(default)]
    pub exact: bool,
    #[serde(default)]
    pub detail: bool,
    #[serde(default)]
    pub season: SeasonSelector,
}

/// A year bound counts as given only when non-zero
fn given(year: Option<i32>) -> Option<i32> {
    year.filter(|y| *y != 0)
}

/// Check the identity, sport and period parameters of a lookup.
///
/// The identity is required, at least one of sport or a period bound must be
/// given, a period needs both bounds, and the bounds must be ordered.
pub fn verify_params(
    identity: &str,
    sport: Option<&str>,
    start_date: Option<i32>,
    end_date: Option<i32>,
) -> ServiceResult<()> {
    let sport = sport.filter(|s| !s.is_empty());
    let (start, end) = (given(start_date), given(end_date));

    if identity.is_empty() {
        return Err(ServiceError::Invalid("Path parameter is mandatory".to_string()));
    }
    if sport.is_none() && start.is_none() && end.is_none() {
        return Err(ServiceError::Invalid(
            "At least one query parameter is mandatory".to_string(),
        ));
    }
    match (start, end) {
        (Some(_), None) | (None, Some(_)) => Err(ServiceError::Invalid(
            "Both start and end dates needed for period".to_string(),
        )),
        (Some(start), Some(end)) if start > end => Err(ServiceError::Invalid(
            "Start date should be less than end date".to_string(),
        )),
        _ => Ok(()),
    }
}
