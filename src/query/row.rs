//! Column access for filterable rows

use std::fmt;

/// Semantic type of a column (and of a filter value)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    Text,
    Numeric,
    Boolean,
}

impl ColumnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Text => "text",
            ColumnKind::Numeric => "numeric",
            ColumnKind::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A borrowed column value. The inner `None` is SQL NULL.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell<'a> {
    Text(Option<&'a str>),
    Numeric(Option<f64>),
    Boolean(Option<bool>),
}

impl Cell<'_> {
    pub fn kind(&self) -> ColumnKind {
        match self {
            Cell::Text(_) => ColumnKind::Text,
            Cell::Numeric(_) => ColumnKind::Numeric,
            Cell::Boolean(_) => ColumnKind::Boolean,
        }
    }

    pub fn is_null(&self) -> bool {
        match self {
            Cell::Text(v) => v.is_none(),
            Cell::Numeric(v) => v.is_none(),
            Cell::Boolean(v) => v.is_none(),
        }
    }
}

/// A row type the predicate composer can filter.
pub trait Row {
    /// Column names and their kinds
    fn columns() -> &'static [(&'static str, ColumnKind)];

    /// Value of `column`, or `None` if the row has no such column
    fn cell(&self, column: &str) -> Option<Cell<'_>>;

    /// Declared kind of `column`
    fn column_kind(column: &str) -> Option<ColumnKind> {
        Self::columns()
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, kind)| *kind)
    }
}
