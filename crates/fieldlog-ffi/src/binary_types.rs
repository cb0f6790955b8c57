//! FFI-safe views of a log event
//!
//! This module provides the `#[repr(C)]` types handed to the host callback.
//! Every type here borrows: the data belongs to Rust and is valid only for the
//! duration of the callback. Hosts must copy what they want to keep.
//!
//! # Memory Layout
//!
//! ```text
//! CharSlice  { ptr: *const c_char, len: usize }
//! LogField   { key: CharSlice, value: CharSlice }
//! FfiVec<T>  { ptr: *const T, len: usize, capacity: usize }
//! LogEvent   { level: FfiLogLevel, message: CharSlice, fields: FfiVec<LogField> }
//! ```

use fieldlog_core::{Field, LogLevel};
use std::ffi::c_char;
use std::marker::PhantomData;
use std::slice;

/// Level codes as seen by the host (0=Debug, 1=Info, 2=Warn, 3=Error, 4=Trace)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiLogLevel {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
    Trace = 4,
}

impl From<LogLevel> for FfiLogLevel {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => FfiLogLevel::Debug,
            LogLevel::Info => FfiLogLevel::Info,
            LogLevel::Warn => FfiLogLevel::Warn,
            LogLevel::Error => FfiLogLevel::Error,
            LogLevel::Trace => FfiLogLevel::Trace,
        }
    }
}

impl From<FfiLogLevel> for LogLevel {
    fn from(level: FfiLogLevel) -> Self {
        match level {
            FfiLogLevel::Debug => LogLevel::Debug,
            FfiLogLevel::Info => LogLevel::Info,
            FfiLogLevel::Warn => LogLevel::Warn,
            FfiLogLevel::Error => LogLevel::Error,
            FfiLogLevel::Trace => LogLevel::Trace,
        }
    }
}

/// FFI-safe borrowed UTF-8 byte slice
///
/// Not null-terminated; always read exactly `len` bytes. An empty slice may
/// carry a dangling (but non-null) pointer.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CharSlice<'a> {
    ptr: *const c_char,
    len: usize,
    _marker: PhantomData<&'a [u8]>,
}

impl<'a> CharSlice<'a> {
    /// An empty slice
    pub const fn empty() -> Self {
        Self::from_bytes(&[])
    }

    /// Borrow raw bytes
    pub const fn from_bytes(bytes: &'a [u8]) -> Self {
        Self {
            ptr: bytes.as_ptr() as *const c_char,
            len: bytes.len(),
            _marker: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_ptr(&self) -> *const c_char {
        self.ptr
    }

    /// The borrowed bytes
    pub fn as_bytes(&self) -> &'a [u8] {
        // SAFETY: constructed only from a `&'a [u8]`, which outlives `'a`
        unsafe { slice::from_raw_parts(self.ptr as *const u8, self.len) }
    }

    /// Decode as UTF-8, replacing invalid sequences
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(self.as_bytes()).into_owned()
    }
}

impl<'a> From<&'a str> for CharSlice<'a> {
    fn from(s: &'a str) -> Self {
        Self::from_bytes(s.as_bytes())
    }
}

impl Default for CharSlice<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

/// FFI-safe borrowed view of a vector
///
/// Laid out as `(ptr, len, capacity)` so hosts written against an owned
/// vector layout read it unchanged. `capacity` always equals `len`; the host
/// must never free it.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct FfiVec<'a, T> {
    ptr: *const T,
    len: usize,
    capacity: usize,
    _marker: PhantomData<&'a [T]>,
}

impl<'a, T> FfiVec<'a, T> {
    /// Borrow a slice
    pub fn from_slice(items: &'a [T]) -> Self {
        Self {
            ptr: items.as_ptr(),
            len: items.len(),
            capacity: items.len(),
            _marker: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &'a [T] {
        // SAFETY: constructed only from a `&'a [T]`
        unsafe { slice::from_raw_parts(self.ptr, self.len) }
    }

    pub fn iter(&self) -> slice::Iter<'a, T> {
        self.as_slice().iter()
    }
}

/// Key/value pair of a [`LogEvent`]
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct LogField<'a> {
    pub key: CharSlice<'a>,
    pub value: CharSlice<'a>,
}

impl<'a> From<&'a Field> for LogField<'a> {
    fn from(field: &'a Field) -> Self {
        Self {
            key: CharSlice::from(field.key()),
            value: CharSlice::from(field.value()),
        }
    }
}

impl LogField<'_> {
    /// Copy into an owned field, decoding lossily
    pub fn to_field(&self) -> Field {
        Field::from_bytes(self.key.as_bytes(), self.value.as_bytes())
    }
}

/// Event passed by value to the host callback
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct LogEvent<'a> {
    pub level: FfiLogLevel,
    pub message: CharSlice<'a>,
    pub fields: FfiVec<'a, LogField<'a>>,
}

impl LogEvent<'_> {
    /// Copy into an owned event
    pub fn to_event(&self) -> fieldlog_core::Event {
        fieldlog_core::Event::with_fields(
            self.level.into(),
            self.message.to_string_lossy(),
            self.fields.iter().map(LogField::to_field),
        )
    }
}
