//! # Filter Clauses
//!
//! Typed filter specs. Each value type carries only the relations that are
//! legal for it, so an illegal pairing fails when the spec is built.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::{FilterError, FilterResult};
use super::row::ColumnKind;

/// Relation vocabulary exposed to callers building clauses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    /// Equals (case-insensitive for text)
    #[serde(rename = "equal")]
    Equal,

    /// Case-insensitive substring (text only)
    #[serde(rename = "contain")]
    Contain,

    /// Not equals
    #[serde(rename = "unequal")]
    Unequal,

    /// Greater than
    #[serde(rename = "gt")]
    Gt,

    /// Greater than or equal
    #[serde(rename = "gte")]
    Gte,

    /// Less than
    #[serde(rename = "lt")]
    Lt,

    /// Less than or equal
    #[serde(rename = "lte")]
    Lte,

    /// Column is set
    #[serde(rename = "non_null")]
    NonNull,
}

impl Relation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::Equal => "equal",
            Relation::Contain => "contain",
            Relation::Unequal => "unequal",
            Relation::Gt => "gt",
            Relation::Gte => "gte",
            Relation::Lt => "lt",
            Relation::Lte => "lte",
            Relation::NonNull => "non_null",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Relation {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equal" => Ok(Relation::Equal),
            "contain" => Ok(Relation::Contain),
            "unequal" => Ok(Relation::Unequal),
            "gt" => Ok(Relation::Gt),
            "gte" => Ok(Relation::Gte),
            "lt" => Ok(Relation::Lt),
            "lte" => Ok(Relation::Lte),
            "non_null" => Ok(Relation::NonNull),
            other => Err(FilterError::UnknownRelation(other.to_string())),
        }
    }
}

/// Relations legal for text values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRelation {
    Equal,
    Contain,
    NonNull,
}

impl TryFrom<Relation> for TextRelation {
    type Error = FilterError;

    fn try_from(relation: Relation) -> Result<Self, Self::Error> {
        match relation {
            Relation::Equal => Ok(TextRelation::Equal),
            Relation::Contain => Ok(TextRelation::Contain),
            Relation::NonNull => Ok(TextRelation::NonNull),
            relation => Err(FilterError::IllegalRelation {
                kind: ColumnKind::Text,
                relation,
            }),
        }
    }
}

/// Relations legal for numeric values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericRelation {
    Equal,
    Unequal,
    Gt,
    Gte,
    Lt,
    Lte,
    NonNull,
}

impl TryFrom<Relation> for NumericRelation {
    type Error = FilterError;

    fn try_from(relation: Relation) -> Result<Self, Self::Error> {
        match relation {
            Relation::Equal => Ok(NumericRelation::Equal),
            Relation::Unequal => Ok(NumericRelation::Unequal),
            Relation::Gt => Ok(NumericRelation::Gt),
            Relation::Gte => Ok(NumericRelation::Gte),
            Relation::Lt => Ok(NumericRelation::Lt),
            Relation::Lte => Ok(NumericRelation::Lte),
            Relation::NonNull => Ok(NumericRelation::NonNull),
            relation => Err(FilterError::IllegalRelation {
                kind: ColumnKind::Numeric,
                relation,
            }),
        }
    }
}

/// Relations legal for boolean values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanRelation {
    Equal,
    Unequal,
    NonNull,
}

impl TryFrom<Relation> for BooleanRelation {
    type Error = FilterError;

    fn try_from(relation: Relation) -> Result<Self, Self::Error> {
        match relation {
            Relation::Equal => Ok(BooleanRelation::Equal),
            Relation::Unequal => Ok(BooleanRelation::Unequal),
            Relation::NonNull => Ok(BooleanRelation::NonNull),
            relation => Err(FilterError::IllegalRelation {
                kind: ColumnKind::Boolean,
                relation,
            }),
        }
    }
}

/// A typed filter value with its relation
#[derive(Debug, Clone, PartialEq)]
pub enum FilterSpec {
    Text {
        value: Option<String>,
        relation: TextRelation,
    },
    Numeric {
        value: Option<f64>,
        relation: NumericRelation,
    },
    Boolean {
        value: Option<bool>,
        relation: BooleanRelation,
    },
}

impl FilterSpec {
    pub fn text(value: Option<impl Into<String>>, relation: Relation) -> FilterResult<Self> {
        Ok(FilterSpec::Text {
            value: value.map(Into::into),
            relation: relation.try_into()?,
        })
    }

    pub fn numeric(value: Option<f64>, relation: Relation) -> FilterResult<Self> {
        Ok(FilterSpec::Numeric {
            value,
            relation: relation.try_into()?,
        })
    }

    pub fn boolean(value: Option<bool>, relation: Relation) -> FilterResult<Self> {
        Ok(FilterSpec::Boolean {
            value,
            relation: relation.try_into()?,
        })
    }

    pub fn kind(&self) -> ColumnKind {
        match self {
            FilterSpec::Text { .. } => ColumnKind::Text,
            FilterSpec::Numeric { .. } => ColumnKind::Numeric,
            FilterSpec::Boolean { .. } => ColumnKind::Boolean,
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(
            self,
            FilterSpec::Text { relation: TextRelation::NonNull, .. }
                | FilterSpec::Numeric { relation: NumericRelation::NonNull, .. }
                | FilterSpec::Boolean { relation: BooleanRelation::NonNull, .. }
        )
    }

    /// True when the clause must be skipped: a falsy value under any
    /// relation other than `non_null`.
    pub fn is_skipped(&self) -> bool {
        if self.is_non_null() {
            return false;
        }
        match self {
            FilterSpec::Text { value, .. } => value.as_deref().map_or(true, str::is_empty),
            FilterSpec::Numeric { value, .. } => value.map_or(true, |v| v == 0.0),
            FilterSpec::Boolean { value, .. } => !value.unwrap_or(false),
        }
    }
}

/// A filter on one named column
#[derive(Debug, Clone, PartialEq)]
pub struct FilterClause {
    pub column: String,
    pub spec: FilterSpec,
}

impl FilterClause {
    pub fn new(column: impl Into<String>, spec: FilterSpec) -> Self {
        Self {
            column: column.into(),
            spec,
        }
    }

    /// Text clause, e.g. `("sport", Some("Judo"), Relation::Equal)`
    pub fn text(
        column: impl Into<String>,
        value: Option<impl Into<String>>,
        relation: Relation,
    ) -> FilterResult<Self> {
        Ok(Self::new(column, FilterSpec::text(value, relation)?))
    }

    pub fn numeric(
        column: impl Into<String>,
        value: Option<f64>,
        relation: Relation,
    ) -> FilterResult<Self> {
        Ok(Self::new(column, FilterSpec::numeric(value, relation)?))
    }

    pub fn boolean(
        column: impl Into<String>,
        value: Option<bool>,
        relation: Relation,
    ) -> FilterResult<Self> {
        Ok(Self::new(column, FilterSpec::boolean(value, relation)?))
    }

    /// Parse a relation tag and build a text clause
    pub fn text_tagged(
        column: impl Into<String>,
        value: Option<impl Into<String>>,
        tag: &str,
    ) -> FilterResult<Self> {
        Self::text(column, value, tag.parse()?)
    }
}
