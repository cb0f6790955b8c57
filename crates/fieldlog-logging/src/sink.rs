//! Event sinks

use fieldlog_core::Event;

/// Receiver for delivered events
///
/// A sink is invoked synchronously on the emitting thread and may be called
/// from several threads at once.
pub trait Sink: Send + Sync {
    fn receive(&self, event: Event);
}

impl<F> Sink for F
where
    F: Fn(Event) + Send + Sync,
{
    fn receive(&self, event: Event) {
        self(event)
    }
}

#[cfg(test)]
#[path = "sink/sink_tests.rs"]
mod sink_tests;
