//! # Predicate Composer
//!
//! Narrows a row-fetch [`Query`] with an ordered list of [`FilterClause`]s.
//!
//! # Rules
//!
//! - Clauses apply in the order given; predicates are AND-combined.
//! - A clause whose value is absent or falsy (None, "", 0, false) is skipped,
//!   unless its relation is `non_null`.
//! - Text matching is case-insensitive (`equal` and `contain`).
//! - `non_null` is a real "column IS NOT NULL" test.
//! - Illegal (type, relation) pairs, unknown relation tags, unknown columns
//!   and column/filter type mismatches are errors, never silent no-ops.
//! - Composition never mutates the base query.
//!
//! # Usage
//!
//! ```ignore
//! let query = Query::<Record>::new().compose(&[
//!     FilterClause::text("sport", Some("judo"), Relation::Equal)?,
//!     FilterClause::numeric("year", Some(1900.0), Relation::Gte)?,
//! ])?;
//! let rows: Vec<&Record> = query.filter(records.iter()).collect();
//! ```

mod compose;
mod errors;
mod filter;
mod row;

pub use compose::{compose, Comparison, Condition, Predicate, Query};
pub use errors::{FilterError, FilterResult};
pub use filter::{BooleanRelation, FilterClause, FilterSpec, NumericRelation, Relation, TextRelation};
pub use row::{Cell, ColumnKind, Row};
