//! Owned error objects returned across the boundary
//!
//! Fallible exports return `Option<Box<FfiError>>`: null on success, an owned
//! error otherwise. The host reads it with [`fieldlog_error_code`] and
//! [`fieldlog_error_message`], then releases it with [`fieldlog_error_drop`].

use crate::binary_types::CharSlice;
use fieldlog_core::{LogError, LogResult};

/// Error handed to the host
///
/// Opaque to the host; only ever seen behind a pointer.
#[derive(Debug)]
pub struct FfiError {
    error: LogError,
    message: String,
}

impl FfiError {
    pub fn code(&self) -> u32 {
        self.error.error_code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The typed error this was created from
    pub fn error(&self) -> &LogError {
        &self.error
    }
}

impl From<LogError> for FfiError {
    fn from(error: LogError) -> Self {
        Self {
            message: error.to_string(),
            error,
        }
    }
}

impl std::fmt::Display for FfiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (code {})", self.message, self.code())
    }
}

/// Map a result onto the nullable-error return convention
pub(crate) fn into_ffi(result: LogResult<()>) -> Option<Box<FfiError>> {
    result.err().map(|e| Box::new(FfiError::from(e)))
}

/// Error code of `error`, or 0 if it is null
#[unsafe(no_mangle)]
#[allow(improper_ctypes_definitions)]
pub extern "C" fn fieldlog_error_code(error: Option<&FfiError>) -> u32 {
    error.map(FfiError::code).unwrap_or(0)
}

/// Message of `error` (UTF-8, not null-terminated), or an empty slice if it is null
///
/// The slice is valid until the error is dropped.
#[unsafe(no_mangle)]
#[allow(improper_ctypes_definitions)]
pub extern "C" fn fieldlog_error_message(error: Option<&FfiError>) -> CharSlice<'_> {
    match error {
        Some(e) => CharSlice::from(e.message()),
        None => CharSlice::empty(),
    }
}

/// Free an error returned by an export; null is accepted
#[unsafe(no_mangle)]
#[allow(improper_ctypes_definitions)]
pub extern "C" fn fieldlog_error_drop(error: Option<Box<FfiError>>) {
    drop(error);
}
