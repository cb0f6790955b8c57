//! Printing sink

use crate::args::Format;
use fieldlog_core::Event;
use fieldlog_logging::Sink;
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Render one event as a single output line (without the newline)
pub fn render(format: Format, event: &Event) -> anyhow::Result<String> {
    match format {
        Format::Text => Ok(event.to_string()),
        Format::Json => Ok(serde_json::to_string(event)?),
    }
}

/// Sink printing every delivered event to stdout
pub struct PrintSink {
    format: Format,
    delivered: Arc<AtomicUsize>,
}

impl PrintSink {
    pub fn new(format: Format) -> Self {
        Self {
            format,
            delivered: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Counter shared with the sink, readable after it has been registered
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.delivered)
    }
}

impl Sink for PrintSink {
    fn receive(&self, event: Event) {
        self.delivered.fetch_add(1, Ordering::Relaxed);

        // A closed stdout must not abort the emitting thread
        if let Ok(line) = render(self.format, &event) {
            let _ = writeln!(io::stdout().lock(), "{}", line);
        }
    }
}
