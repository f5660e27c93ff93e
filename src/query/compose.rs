//! Query composition and predicate evaluation

use std::marker::PhantomData;

use super::errors::{FilterError, FilterResult};
use super::filter::{BooleanRelation, FilterClause, FilterSpec, NumericRelation, TextRelation};
use super::row::{Cell, Row};

/// Numeric comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl Comparison {
    fn holds(&self, actual: f64, bound: f64) -> bool {
        match self {
            Comparison::Eq => actual == bound,
            Comparison::Ne => actual != bound,
            Comparison::Gt => actual > bound,
            Comparison::Gte => actual >= bound,
            Comparison::Lt => actual < bound,
            Comparison::Lte => actual <= bound,
        }
    }
}

/// A compiled condition on one column
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Case-insensitive equality; holds the lowercased needle
    TextEquals(String),
    /// Case-insensitive substring; holds the lowercased needle
    TextContains(String),
    Compare(Comparison, f64),
    BoolEquals(bool),
    BoolNotEquals(bool),
    /// Column IS NOT NULL
    NotNull,
}

/// A condition bound to a column
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub column: String,
    pub condition: Condition,
}

impl Predicate {
    /// Evaluate against a row. NULL never satisfies a value condition.
    pub fn matches<R: Row>(&self, row: &R) -> bool {
        let cell = match row.cell(&self.column) {
            Some(cell) => cell,
            None => return false,
        };

        match (&self.condition, cell) {
            (Condition::NotNull, cell) => !cell.is_null(),
            (Condition::TextEquals(needle), Cell::Text(Some(value))) => {
                value.to_lowercase() == *needle
            }
            (Condition::TextContains(needle), Cell::Text(Some(value))) => {
                value.to_lowercase().contains(needle.as_str())
            }
            (Condition::Compare(op, bound), Cell::Numeric(Some(value))) => op.holds(value, *bound),
            (Condition::BoolEquals(expected), Cell::Boolean(Some(value))) => value == *expected,
            (Condition::BoolNotEquals(expected), Cell::Boolean(Some(value))) => value != *expected,
            _ => false,
        }
    }
}

/// Compile a non-skipped spec into a condition
fn condition_for(spec: &FilterSpec) -> Option<Condition> {
    if spec.is_skipped() {
        return None;
    }

    let condition = match spec {
        FilterSpec::Text { value, relation } => match relation {
            TextRelation::NonNull => Condition::NotNull,
            TextRelation::Equal => Condition::TextEquals(value.as_deref()?.to_lowercase()),
            TextRelation::Contain => Condition::TextContains(value.as_deref()?.to_lowercase()),
        },
        FilterSpec::Numeric { value, relation } => {
            let op = match relation {
                NumericRelation::NonNull => return Some(Condition::NotNull),
                NumericRelation::Equal => Comparison::Eq,
                NumericRelation::Unequal => Comparison::Ne,
                NumericRelation::Gt => Comparison::Gt,
                NumericRelation::Gte => Comparison::Gte,
                NumericRelation::Lt => Comparison::Lt,
                NumericRelation::Lte => Comparison::Lte,
            };
            Condition::Compare(op, (*value)?)
        }
        FilterSpec::Boolean { value, relation } => match relation {
            BooleanRelation::NonNull => Condition::NotNull,
            BooleanRelation::Equal => Condition::BoolEquals((*value)?),
            BooleanRelation::Unequal => Condition::BoolNotEquals((*value)?),
        },
    };

    Some(condition)
}

/// Row-fetch criteria over rows of type `R`.
///
/// A query is a conjunction of predicates. The empty query matches every row.
#[derive(Debug, Clone, PartialEq)]
pub struct Query<R> {
    predicates: Vec<Predicate>,
    _row: PhantomData<fn() -> R>,
}

impl<R> Default for Query<R> {
    fn default() -> Self {
        Self {
            predicates: Vec::new(),
            _row: PhantomData,
        }
    }
}

impl<R: Row> Query<R> {
    /// The unrestricted query
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new query narrowed by `clauses`, leaving `self` untouched.
    ///
    /// Skipped clauses still have their column checked against the row type.
    pub fn compose(&self, clauses: &[FilterClause]) -> FilterResult<Self> {
        let mut predicates = self.predicates.clone();

        for clause in clauses {
            let column_kind = R::column_kind(&clause.column)
                .ok_or_else(|| FilterError::UnknownColumn(clause.column.clone()))?;

            if column_kind != clause.spec.kind() {
                return Err(FilterError::KindMismatch {
                    column: clause.column.clone(),
                    column_kind,
                    filter_kind: clause.spec.kind(),
                });
            }

            if let Some(condition) = condition_for(&clause.spec) {
                predicates.push(Predicate {
                    column: clause.column.clone(),
                    condition,
                });
            }
        }

        Ok(Self {
            predicates,
            _row: PhantomData,
        })
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn is_unrestricted(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Check a row against every predicate (AND)
    pub fn matches(&self, row: &R) -> bool {
        self.predicates.iter().all(|p| p.matches(row))
    }

    /// Keep only the rows that match, in input order
    pub fn filter<'a, I>(&'a self, rows: I) -> impl Iterator<Item = &'a R> + 'a
    where
        I: IntoIterator<Item = &'a R>,
        I::IntoIter: 'a,
    {
        rows.into_iter().filter(move |row| self.matches(row))
    }
}

/// Free-function form of [`Query::compose`]
pub fn compose<R: Row>(base: &Query<R>, clauses: &[FilterClause]) -> FilterResult<Query<R>> {
    base.compose(clauses)
}
