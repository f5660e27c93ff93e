//! Observability
//!
//! Structured one-line JSON logs for server lifecycle, queries and row
//! writes.
//!
//! ```ignore
//! use athlete_api::observability::{Event, Logger};
//!
//! Logger::info(Event::QueryComplete, &[("groups", "3")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};
