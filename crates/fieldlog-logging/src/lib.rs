//! fieldlog-logging - Level filter, sink registration and tracing bridge
//!
//! This crate provides:
//! - [`Sink`] capability that receives every delivered [`Event`]
//! - [`Logger`] holding one threshold and one sink, with the emission API
//! - [`SinkLayer`] tracing layer that turns `tracing` events into [`Event`]s
//! - [`demo`] triggers that synthesize sample traffic

pub mod demo;
mod layer;
mod logger;
mod sink;

pub use fieldlog_core::{Event, Field, LogError, LogLevel, LogResult};
pub use layer::{SinkLayer, init_logging, install_global_subscriber, set_max_level};
pub use logger::{Logger, in_delivery};
pub use sink::Sink;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{Event, Field, LogLevel, Logger, Sink, SinkLayer, init_logging};
}
