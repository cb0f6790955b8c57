//! fieldlog-ffi - C ABI exports for host languages
//!
//! This crate provides the FFI boundary layer:
//! - [`LogEvent`], [`LogField`], [`CharSlice`] and [`FfiVec`], the `#[repr(C)]`
//!   view of an event handed to the host callback
//! - [`FfiError`], the owned error object returned by fallible exports
//! - C ABI exported functions
//!
//! # FFI Functions
//!
//! The following functions are exported with C linkage:
//!
//! - `fieldlog_logger_init` - Register the log callback and initial level
//! - `fieldlog_logger_set_max_log_level` - Change the level threshold
//! - `fieldlog_error_code` / `fieldlog_error_message` - Inspect an error
//! - `fieldlog_error_drop` - Free an error returned by the functions above
//! - `trigger_logs` / `trigger_logs_with_args` - Emit sample events

mod binary_types;
mod error;
mod exports;
mod panic_guard;

pub use binary_types::{CharSlice, FfiLogLevel, FfiVec, LogEvent, LogField};
pub use error::{FfiError, fieldlog_error_code, fieldlog_error_drop, fieldlog_error_message};
pub use exports::{
    CallbackSink, LogCallback, fieldlog_logger_init, fieldlog_logger_set_max_log_level,
    trigger_logs, trigger_logs_with_args,
};
pub use panic_guard::{catch_panic, install_panic_hook};

// Re-export types needed by hosts embedding this crate from Rust
pub use fieldlog_core::{LogError, LogLevel};
