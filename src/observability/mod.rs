//! Observability
//!
//! Structured JSON-line logging and the typed event catalogue.
//! Observability describes what happened; it never decides what happens.
//! Gates and the detector stay silent; the controller and the store log.

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event at its own severity.
pub fn log_event(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
