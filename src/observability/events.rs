//! Observable events

use std::fmt;

/// Lifecycle and request events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Listener bound, serving requests
    ServerStart,
    SeedLoaded,
    QueryComplete,
    /// Query refused by parameter checks or filter composition
    QueryRejected,
    RowInserted,
    RowUpdated,
    RowDeleted,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ServerStart => "SERVER_START",
            Event::SeedLoaded => "SEED_LOADED",
            Event::QueryComplete => "QUERY_COMPLETE",
            Event::QueryRejected => "QUERY_REJECTED",
            Event::RowInserted => "ROW_INSERTED",
            Event::RowUpdated => "ROW_UPDATED",
            Event::RowDeleted => "ROW_DELETED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
