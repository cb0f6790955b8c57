//! Tracing layer that forwards to a [`Logger`]

use crate::logger::Logger;
use crate::sink::Sink;
use fieldlog_core::{Field as LogField, LogError, LogLevel, LogResult};
use once_cell::sync::OnceCell;
use tracing::field::{Field, Visit};
use tracing::subscriber::Interest;
use tracing::{Event, Metadata, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;

/// Set once the global subscriber has been installed by this crate
static GLOBAL_SUBSCRIBER: OnceCell<()> = OnceCell::new();

/// Tracing layer that turns tracing events into fieldlog events
///
/// The `message` field becomes the event message; every other field is
/// attached in declaration order.
pub struct SinkLayer {
    logger: &'static Logger,
}

impl SinkLayer {
    /// Create a new layer delivering through the global logger
    pub fn new() -> Self {
        Self {
            logger: Logger::global(),
        }
    }

    /// Create a layer with a specific logger
    pub fn with_logger(logger: &'static Logger) -> Self {
        Self { logger }
    }
}

impl Default for SinkLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Layer<S> for SinkLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn register_callsite(&self, _metadata: &'static Metadata<'static>) -> Interest {
        // The threshold changes at runtime, so never let tracing cache a verdict.
        Interest::sometimes()
    }

    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        self.logger.is_enabled(LogLevel::from(*metadata.level()))
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = LogLevel::from(*event.metadata().level());

        // Check if this level is enabled before doing any work
        if !self.logger.is_enabled(level) {
            return;
        }

        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        self.logger.emit_with_fields(
            level,
            visitor.message.unwrap_or_default(),
            visitor.fields,
        );
    }
}

/// Visitor collecting the message and the remaining fields in order
#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: Vec<LogField>,
}

impl FieldVisitor {
    fn push(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            self.message = Some(value);
        } else {
            self.fields.push(LogField::new(field.name(), value));
        }
    }
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.push(field, format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.push(field, value.to_string());
    }
}

/// Install [`SinkLayer`] over the global logger as the global subscriber
///
/// Only the first call installs anything; later calls succeed without effect.
/// Fails if some other global subscriber was set first.
pub fn install_global_subscriber() -> LogResult<()> {
    use tracing_subscriber::prelude::*;

    GLOBAL_SUBSCRIBER
        .get_or_try_init(|| {
            let subscriber = tracing_subscriber::registry().with(SinkLayer::new());
            tracing::subscriber::set_global_default(subscriber).map_err(|e| {
                LogError::InitError(format!("failed to set global default subscriber: {}", e))
            })
        })
        .map(|_| ())
}

/// Register `sink` on the global logger and route `tracing` events to it
///
/// Call this once during host initialization; calling it again replaces the
/// sink and threshold.
pub fn init_logging<S: Sink + 'static>(level: LogLevel, sink: S) -> LogResult<()> {
    install_global_subscriber()?;
    Logger::global().init(level, sink)
}

/// Update the global logger's threshold
pub fn set_max_level(level: LogLevel) -> LogResult<()> {
    Logger::global().set_max_level(level)
}

#[cfg(test)]
#[path = "layer/layer_tests.rs"]
mod layer_tests;
