//! Store errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the row store
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("Athlete not found")]
    AthleteNotFound(i64),

    #[error("Region not found")]
    RegionNotFound(String),

    /// Primary key collision on regions
    #[error("Region with NOC '{0}' already exists")]
    DuplicateRegion(String),

    /// Foreign key violation: athlete references a missing region
    #[error("NOC '{0}' is not present in regions")]
    UnknownNoc(String),

    #[error("Invalid Season. 'Winter' or 'Summer'")]
    InvalidSeason(String),

    /// Any other column constraint
    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Seed data error: {0}")]
    Seed(String),

    /// A writer panicked while holding the table lock
    #[error("Store lock poisoned")]
    Poisoned,
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::AthleteNotFound(_) | StoreError::RegionNotFound(_)
        )
    }
}
