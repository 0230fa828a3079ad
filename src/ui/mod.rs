//! UI layer: viewport pass and output sinks.

pub mod listing;
pub mod viewport;
