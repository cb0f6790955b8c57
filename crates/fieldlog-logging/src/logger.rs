//! Level filter, sink registration and emission

use crate::sink::Sink;
use fieldlog_core::{Event, Field, LogError, LogLevel, LogResult};
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::cell::Cell;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Global logger instance
static GLOBAL_LOGGER: OnceCell<Logger> = OnceCell::new();

thread_local! {
    /// Set while this thread is inside some sink's `receive`
    static DELIVERING: Cell<bool> = const { Cell::new(false) };
}

/// Whether the current thread is delivering an event to a sink
///
/// A panic hook that logs must check this: logging a panic raised by the
/// sink would re-enter that sink while the panic is in flight, which aborts.
pub fn in_delivery() -> bool {
    DELIVERING.with(Cell::get)
}

/// Marks the current thread as delivering until dropped, unwinding included
struct DeliveryGuard {
    previous: bool,
}

impl DeliveryGuard {
    fn enter() -> Self {
        Self {
            previous: DELIVERING.with(|d| d.replace(true)),
        }
    }
}

impl Drop for DeliveryGuard {
    fn drop(&mut self) {
        let previous = self.previous;
        DELIVERING.with(|d| d.set(previous));
    }
}

/// A threshold plus a single registered sink
///
/// Each instance is independent; [`Logger::global`] is the one the tracing
/// bridge and the C ABI deliver through.
pub struct Logger {
    sink: RwLock<Option<Arc<dyn Sink>>>,
    level: AtomicU8,
    initialized: AtomicBool,
}

impl Logger {
    /// Create a logger with an `Info` threshold and no sink
    pub fn new() -> Self {
        Self {
            sink: RwLock::new(None),
            level: AtomicU8::new(LogLevel::Info.as_u8()),
            initialized: AtomicBool::new(false),
        }
    }

    /// Get the global logger instance
    pub fn global() -> &'static Logger {
        GLOBAL_LOGGER.get_or_init(Logger::new)
    }

    /// Register `sink` and set the threshold in one step
    ///
    /// Replaces any previously registered sink; the old sink receives no
    /// events emitted after this returns.
    pub fn init<S: Sink + 'static>(&self, level: LogLevel, sink: S) -> LogResult<()> {
        self.init_shared(level, Arc::new(sink))
    }

    /// Same as [`Logger::init`] for a sink that is already shared
    pub fn init_shared(&self, level: LogLevel, sink: Arc<dyn Sink>) -> LogResult<()> {
        // Threshold is stored under the write lock so no emission pairs the
        // new sink with the old threshold.
        let mut guard = self.sink.write();
        self.level.store(level.as_u8(), Ordering::SeqCst);
        *guard = Some(sink);
        self.initialized.store(true, Ordering::SeqCst);
        Ok(())
    }

    /// Replace the threshold for all subsequent emissions
    pub fn set_max_level(&self, level: LogLevel) -> LogResult<()> {
        if !self.is_initialized() {
            return Err(LogError::NotInitialized);
        }
        self.level.store(level.as_u8(), Ordering::SeqCst);
        Ok(())
    }

    /// Current threshold
    pub fn max_level(&self) -> LogLevel {
        // Only valid wire codes are ever stored.
        LogLevel::from_u8(self.level.load(Ordering::SeqCst)).unwrap_or(LogLevel::Info)
    }

    /// Check if events at `level` pass the threshold
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.max_level()
    }

    /// Whether [`Logger::init`] has been called at least once
    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    /// Check if a sink is currently registered
    pub fn has_sink(&self) -> bool {
        self.sink.read().is_some()
    }

    /// Drop the registered sink; later emissions become no-ops
    pub fn clear_sink(&self) {
        *self.sink.write() = None;
    }

    /// Emit an event without fields
    pub fn emit(&self, level: LogLevel, message: impl Into<String>) {
        self.emit_with_fields(level, message, std::iter::empty());
    }

    /// Emit an event with an ordered field sequence
    ///
    /// Nothing is built and the sink is not called when `level` is below the
    /// threshold or no sink is registered.
    pub fn emit_with_fields(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        fields: impl IntoIterator<Item = Field>,
    ) {
        // The threshold is read under the sink lock to pair with `init_shared`.
        // The sink is cloned out so it may call back into the logger.
        let sink = {
            let guard = self.sink.read();
            match guard.as_ref() {
                Some(sink) if self.is_enabled(level) => Arc::clone(sink),
                _ => return,
            }
        };

        let event = Event::with_fields(level, message, fields);
        let _delivering = DeliveryGuard::enter();
        sink.receive(event);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
