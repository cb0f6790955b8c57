#![allow(non_snake_case)]

use super::*;
use fieldlog_core::LogLevel;
use std::sync::{Arc, Mutex};

struct Collector {
    events: Mutex<Vec<Event>>,
}

impl Sink for Collector {
    fn receive(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

#[test]
fn Sink___closure___receives_event() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = Arc::clone(&seen);
    let sink = move |event: Event| seen_clone.lock().unwrap().push(event);

    sink.receive(Event::new(LogLevel::Info, "hello"));

    assert_eq!(seen.lock().unwrap()[0].message(), "hello");
}

#[test]
fn Sink___custom_type___usable_as_trait_object() {
    let collector = Arc::new(Collector {
        events: Mutex::new(Vec::new()),
    });
    let sink: Arc<dyn Sink> = collector.clone();

    sink.receive(Event::new(LogLevel::Warn, "a"));
    sink.receive(Event::new(LogLevel::Error, "b"));

    let events = collector.events.lock().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[1].level(), LogLevel::Error);
}
