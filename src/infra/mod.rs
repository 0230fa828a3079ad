//! Infrastructure layer: config, errors, and logging.

pub mod config;
pub mod error;
pub mod logging;
