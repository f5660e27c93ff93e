//! Shared handler state

use std::sync::Arc;

use chrono::Utc;

use crate::store::{AthleteStore, InMemoryStore};

/// State shared by every route
pub struct AppState {
    pub store: Arc<dyn AthleteStore>,
    /// RFC 3339 boot timestamp reported by `/health`
    pub started_at: String,
}

impl AppState {
    pub fn new(store: Arc<dyn AthleteStore>) -> Self {
        Self {
            store,
            started_at: Utc::now().to_rfc3339(),
        }
    }

    /// State over an empty in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryStore::new()))
    }
}
