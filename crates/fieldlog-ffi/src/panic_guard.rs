//! Panic handling for FFI boundaries
//!
//! This module provides utilities to safely catch panics at FFI boundaries,
//! preventing them from unwinding into host language runtimes.

use fieldlog_core::{LogError, LogResult};
use std::any::Any;
use std::panic;
use std::sync::Once;

static PANIC_HOOK: Once = Once::new();

/// Catch panics from FFI calls and convert them to errors
///
/// A caught panic is returned as [`LogError::Internal`]. It is not logged
/// here: the hook from [`install_panic_hook`] already reported it.
///
/// # Example
///
/// ```ignore
/// #[unsafe(no_mangle)]
/// pub extern "C" fn fieldlog_logger_init(...) -> Option<Box<FfiError>> {
///     into_ffi(catch_panic(|| logger_init_impl(level, callback)).and_then(|r| r))
/// }
/// ```
pub fn catch_panic<F, R>(f: F) -> LogResult<R>
where
    F: FnOnce() -> R + panic::UnwindSafe,
{
    panic::catch_unwind(f).map_err(|panic_info| LogError::Internal(panic_to_string(&panic_info)))
}

/// Convert a panic payload to a human-readable string
///
/// Handles common panic payload types (&str, String) and provides
/// a fallback for unknown types.
fn panic_to_string(panic_info: &Box<dyn Any + Send>) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        format!("panicked: {}", s)
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        format!("panicked: {}", s)
    } else {
        "panicked with unknown payload".to_string()
    }
}

/// Install a panic hook that reports panics through the log callback
///
/// Called from `fieldlog_logger_init`; only the first call installs the hook.
/// The previous hook still runs after the panic is logged. Panics raised
/// while a sink is receiving an event are not logged, since logging them
/// would re-enter the failing sink mid-panic.
///
/// Note that the hook is global for the entire process.
pub fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            if fieldlog_logging::in_delivery() {
                previous(panic_info);
                return;
            }

            let payload = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
                (*s).to_string()
            } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
                s.clone()
            } else {
                "Box<dyn Any>".to_string()
            };

            match panic_info.location() {
                Some(location) => tracing::error!(
                    file = location.file(),
                    line = location.line(),
                    column = location.column(),
                    "PANIC: {}",
                    payload
                ),
                None => tracing::error!("PANIC: {}", payload),
            }

            previous(panic_info);
        }));
    });
}
