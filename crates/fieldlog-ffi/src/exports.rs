//! C ABI exported functions
//!
//! These functions are the FFI entry points called by host languages.

use crate::binary_types::{CharSlice, FfiVec, LogEvent, LogField};
use crate::error::{FfiError, into_ffi};
use crate::panic_guard::catch_panic;
use fieldlog_core::{Event, LogError, LogLevel, LogResult};
use fieldlog_logging::{Sink, demo};

/// FFI callback function type for logging
///
/// The event and everything it points to are borrowed from Rust and valid
/// only until the callback returns. The callback may be invoked from several
/// threads at once.
pub type LogCallback = for<'a> extern "C" fn(event: LogEvent<'a>);

/// Sink that forwards each event to a host callback
#[derive(Clone, Copy)]
pub struct CallbackSink {
    callback: LogCallback,
}

impl CallbackSink {
    pub fn new(callback: LogCallback) -> Self {
        Self { callback }
    }
}

impl Sink for CallbackSink {
    fn receive(&self, event: Event) {
        let fields: Vec<LogField<'_>> = event.fields().iter().map(LogField::from).collect();

        let log_event = LogEvent {
            level: event.level().into(),
            message: CharSlice::from(event.message()),
            fields: FfiVec::from_slice(&fields),
        };

        (self.callback)(log_event);
    }
}

/// Register the log callback and the initial level
///
/// Routes every `tracing` event of this library (and of the demo triggers)
/// to `callback`. Calling it again replaces the callback and level.
///
/// # Parameters
/// - `level`: Minimum level (0=Debug, 1=Info, 2=Warn, 3=Error, 4=Trace), as a
///   C `unsigned int` so hosts may pass their level enum directly
/// - `callback`: Function receiving each event; must not be null
///
/// # Returns
/// Null on success, otherwise an error to be freed with `fieldlog_error_drop`
#[unsafe(no_mangle)]
#[allow(improper_ctypes_definitions)]
pub extern "C" fn fieldlog_logger_init(
    level: u32,
    callback: Option<LogCallback>,
) -> Option<Box<FfiError>> {
    into_ffi(catch_panic(|| logger_init_impl(level, callback)).and_then(|result| result))
}

/// Internal implementation of fieldlog_logger_init (wrapped by panic handler)
fn logger_init_impl(level: u32, callback: Option<LogCallback>) -> LogResult<()> {
    let level = decode_level(level)?;
    let callback =
        callback.ok_or_else(|| LogError::InitError("log callback is null".to_string()))?;

    fieldlog_logging::init_logging(level, CallbackSink::new(callback))?;

    // Install panic hook to log panics via the callback
    crate::panic_guard::install_panic_hook();

    Ok(())
}

/// Set the minimum level for subsequent events
///
/// # Parameters
/// - `level`: Minimum level (0=Debug, 1=Info, 2=Warn, 3=Error, 4=Trace), as a
///   C `unsigned int`
///
/// # Returns
/// Null on success, otherwise an error to be freed with `fieldlog_error_drop`.
/// Fails if `fieldlog_logger_init` has not succeeded yet.
#[unsafe(no_mangle)]
#[allow(improper_ctypes_definitions)]
pub extern "C" fn fieldlog_logger_set_max_log_level(level: u32) -> Option<Box<FfiError>> {
    into_ffi(catch_panic(|| set_max_log_level_impl(level)).and_then(|result| result))
}

/// Internal implementation of fieldlog_logger_set_max_log_level
fn set_max_log_level_impl(level: u32) -> LogResult<()> {
    fieldlog_logging::set_max_level(decode_level(level)?)
}

/// Decode a host level code; values that do not fit a wire code are rejected,
/// never truncated
fn decode_level(level: u32) -> LogResult<LogLevel> {
    u8::try_from(level)
        .ok()
        .and_then(LogLevel::from_u8)
        .ok_or(LogError::InvalidLevel(level))
}

/// Emit 10,000 info events on the calling thread
///
/// Each event carries `thread_id` and `i` fields.
#[unsafe(no_mangle)]
pub extern "C" fn trigger_logs() {
    // Panics are already logged by the guard
    let _ = catch_panic(demo::trigger_logs);
}

/// Emit 10,000 formatted info events from each of 10 threads, then 10,000
/// from the calling thread
#[unsafe(no_mangle)]
pub extern "C" fn trigger_logs_with_args() {
    let _ = catch_panic(demo::trigger_logs_with_args);
}
