#![allow(non_snake_case)]

use super::*;
use fieldlog_core::Event as LogEvent;
use std::sync::{Arc, Mutex};
use tracing_subscriber::prelude::*;

type Captured = Arc<Mutex<Vec<LogEvent>>>;

/// Leak a fresh logger recording into the returned buffer
fn recording_logger(level: LogLevel) -> (&'static Logger, Captured) {
    let logger: &'static Logger = Box::leak(Box::new(Logger::new()));
    let captured: Captured = Arc::default();
    let sink_events = Arc::clone(&captured);
    logger
        .init(level, move |event: LogEvent| {
            sink_events.lock().unwrap().push(event);
        })
        .unwrap();
    (logger, captured)
}

fn with_layer(logger: &'static Logger, f: impl FnOnce()) {
    let subscriber = tracing_subscriber::registry().with(SinkLayer::with_logger(logger));
    tracing::subscriber::with_default(subscriber, f);
}

#[test]
fn SinkLayer___new___uses_global_logger() {
    let layer = SinkLayer::new();

    assert!(std::ptr::eq(layer.logger, Logger::global()));
}

#[test]
fn SinkLayer___default___same_as_new() {
    let layer = SinkLayer::default();

    assert!(std::ptr::eq(layer.logger, Logger::global()));
}

#[test]
fn SinkLayer___with_logger___logs_info_and_error() {
    let (logger, captured) = recording_logger(LogLevel::Info);

    with_layer(logger, || {
        tracing::info!("Test info message");
        tracing::debug!("Test debug message");
        tracing::error!("Test error message");
    });

    let events = captured.lock().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].level(), LogLevel::Info);
    assert_eq!(events[0].message(), "Test info message");
    assert_eq!(events[1].level(), LogLevel::Error);
}

#[test]
fn SinkLayer___with_logger___filters_below_level() {
    let (logger, captured) = recording_logger(LogLevel::Warn);

    with_layer(logger, || {
        tracing::info!("Info message");
        tracing::debug!("Debug message");
        tracing::trace!("Trace message");
        tracing::warn!("Warn message");
    });

    let events = captured.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].message(), "Warn message");
}

#[test]
fn SinkLayer___threshold_change___applies_to_same_callsite() {
    let (logger, captured) = recording_logger(LogLevel::Info);

    with_layer(logger, || {
        for level in [LogLevel::Error, LogLevel::Debug, LogLevel::Error] {
            logger.set_max_level(level).unwrap();
            tracing::info!("same callsite");
        }
    });

    assert_eq!(captured.lock().unwrap().len(), 1);
}

#[test]
fn SinkLayer___with_structured_fields___keeps_message_and_fields_apart() {
    let (logger, captured) = recording_logger(LogLevel::Info);

    with_layer(logger, || {
        tracing::info!(cache_size = 100, "Cache warmed");
    });

    let events = captured.lock().unwrap();
    assert_eq!(events[0].message(), "Cache warmed");
    assert_eq!(events[0].fields(), &[LogField::new("cache_size", "100")]);
}

#[test]
fn SinkLayer___with_multiple_fields___preserves_declaration_order() {
    let (logger, captured) = recording_logger(LogLevel::Debug);

    with_layer(logger, || {
        tracing::debug!(
            pattern = r"\d+",
            matches = true,
            cached = false,
            "Match completed"
        );
    });

    let events = captured.lock().unwrap();
    assert_eq!(
        events[0].fields(),
        &[
            LogField::new("pattern", r"\d+"),
            LogField::new("matches", "true"),
            LogField::new("cached", "false"),
        ]
    );
}

#[test]
fn SinkLayer___debug_formatted_field___uses_debug_rendering() {
    let (logger, captured) = recording_logger(LogLevel::Info);

    with_layer(logger, || {
        let items = vec![1, 2];
        tracing::info!(?items, "listed");
    });

    let events = captured.lock().unwrap();
    assert_eq!(events[0].fields(), &[LogField::new("items", "[1, 2]")]);
}

#[test]
fn SinkLayer___formatted_message___is_rendered() {
    let (logger, captured) = recording_logger(LogLevel::Info);

    with_layer(logger, || {
        tracing::info!("Hello from thread {}: {}", 3, 7);
    });

    let events = captured.lock().unwrap();
    assert_eq!(events[0].message(), "Hello from thread 3: 7");
    assert!(events[0].fields().is_empty());
}

#[test]
fn SinkLayer___message_only___no_extra_fields() {
    let (logger, captured) = recording_logger(LogLevel::Info);

    with_layer(logger, || {
        tracing::info!("Simple message");
    });

    let events = captured.lock().unwrap();
    assert_eq!(events[0].message(), "Simple message");
    assert!(events[0].fields().is_empty());
}

#[test]
fn SinkLayer___no_message_field___delivers_empty_message() {
    let (logger, captured) = recording_logger(LogLevel::Info);

    with_layer(logger, || {
        tracing::info!(answer = 42);
    });

    let events = captured.lock().unwrap();
    assert_eq!(events[0].message(), "");
    assert_eq!(events[0].fields(), &[LogField::new("answer", "42")]);
}

#[test]
fn SinkLayer___explicit_message_field___is_used_as_message() {
    let (logger, captured) = recording_logger(LogLevel::Info);

    with_layer(logger, || {
        tracing::info!(message = "explicit", extra = "x");
    });

    let events = captured.lock().unwrap();
    assert_eq!(events[0].message(), "explicit");
    assert_eq!(events[0].fields(), &[LogField::new("extra", "x")]);
}
