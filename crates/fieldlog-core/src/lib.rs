//! fieldlog-core - Event model, log levels and errors
//!
//! This crate provides the foundational types shared by every fieldlog crate:
//! - [`LogLevel`] severity with a filtering order and a stable wire code
//! - [`Field`] and [`Event`] for structured log records
//! - [`LogError`] for error handling
//! - [`LoggerConfig`] for host-side configuration

mod config;
mod error;
mod event;
mod level;

pub use config::LoggerConfig;
pub use error::{LogError, LogResult};
pub use event::{Event, Field};
pub use level::LogLevel;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{Event, Field, LogError, LogLevel, LogResult, LoggerConfig};
}
