//! Service errors

use thiserror::Error;

use crate::query::FilterError;
use crate::store::StoreError;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors raised while answering a query
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    /// Request parameters failed verification
    #[error("{0}")]
    Invalid(String),

    #[error("{0}")]
    Filter(#[from] FilterError),

    #[error("{0}")]
    Store(#[from] StoreError),
}
