//! Filter composition errors

use thiserror::Error;

use super::filter::Relation;
use super::row::ColumnKind;

/// Result type for filter construction and composition
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors raised while building or composing filters.
///
/// These are configuration errors in the caller, not bad user input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    /// Relation tag not in the vocabulary
    #[error("Unknown relation: {0}")]
    UnknownRelation(String),

    /// Relation not legal for the value type
    #[error("Relation '{relation}' is not valid for {kind} values")]
    IllegalRelation { kind: ColumnKind, relation: Relation },

    /// Column not present on the row type
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// Filter type disagrees with the column type
    #[error("Column '{column}' holds {column_kind} values, filter is {filter_kind}")]
    KindMismatch {
        column: String,
        column_kind: ColumnKind,
        filter_kind: ColumnKind,
    },
}
