#![allow(non_snake_case)]

use super::*;
use crate::{Logger, SinkLayer};
use fieldlog_core::{Event, LogLevel};
use std::sync::{Arc, Mutex};
use tracing_subscriber::prelude::*;

fn capture(level: LogLevel, f: impl FnOnce()) -> Vec<Event> {
    let logger: &'static Logger = Box::leak(Box::new(Logger::new()));
    let captured: Arc<Mutex<Vec<Event>>> = Arc::default();
    let sink_events = Arc::clone(&captured);
    logger
        .init(level, move |event: Event| {
            sink_events.lock().unwrap().push(event);
        })
        .unwrap();

    let subscriber = tracing_subscriber::registry().with(SinkLayer::with_logger(logger));
    tracing::subscriber::with_default(subscriber, f);

    let events = captured.lock().unwrap().clone();
    events
}

#[test]
fn trigger_logs_n___emits_requested_count_with_fields() {
    let events = capture(LogLevel::Info, || trigger_logs_n(5));

    assert_eq!(events.len(), 5);
    for (i, event) in events.iter().enumerate() {
        assert_eq!(event.level(), LogLevel::Info);
        assert_eq!(event.message(), "Hello from background thread");
        let keys: Vec<&str> = event.fields().iter().map(|f| f.key()).collect();
        assert_eq!(keys, vec!["thread_id", "i"]);
        assert_eq!(event.values_of("i").next(), Some(i.to_string().as_str()));
    }
}

#[test]
fn trigger_logs_n___filtered_above_info() {
    let events = capture(LogLevel::Warn, || trigger_logs_n(5));

    assert!(events.is_empty());
}

#[test]
fn trigger_logs_with_args_n___caller_thread_events_are_captured() {
    // The scoped subscriber is thread-local, so only the caller's events land here.
    let events = capture(LogLevel::Info, || trigger_logs_with_args_n(2, 3));

    let messages: Vec<&str> = events.iter().map(|e| e.message()).collect();
    assert_eq!(
        messages,
        vec![
            "Hello from main thread: 0",
            "Hello from main thread: 1",
            "Hello from main thread: 2",
        ]
    );
}
