//! Error types for fieldlog

use thiserror::Error;

/// Result type alias for logger operations
pub type LogResult<T> = Result<T, LogError>;

/// Error type for logger operations
///
/// Emission never fails; only registration, threshold updates and
/// configuration parsing can produce these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogError {
    /// The sink could not be registered
    #[error("initialization failed: {0}")]
    InitError(String),

    /// A threshold update arrived before any sink was registered
    #[error("logger not initialized")]
    NotInitialized,

    /// A wire level code outside the known range
    #[error("invalid log level: {0}")]
    InvalidLevel(u32),

    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl LogError {
    /// Returns an error code suitable for FFI
    pub fn error_code(&self) -> u32 {
        match self {
            LogError::InitError(_) => 1,
            LogError::NotInitialized => 2,
            LogError::InvalidLevel(_) => 3,
            LogError::ConfigError(_) => 4,
            LogError::Internal(_) => 5,
        }
    }

    /// Create an error from an error code and message (for FFI deserialization)
    ///
    /// `InvalidLevel` carries no message, so the level code is read back from
    /// `message` when it parses and is `u32::MAX` otherwise.
    pub fn from_code(code: u32, message: String) -> Self {
        match code {
            1 => LogError::InitError(message),
            2 => LogError::NotInitialized,
            3 => LogError::InvalidLevel(message.trim().parse().unwrap_or(u32::MAX)),
            4 => LogError::ConfigError(message),
            _ => LogError::Internal(message),
        }
    }
}

impl From<serde_json::Error> for LogError {
    fn from(err: serde_json::Error) -> Self {
        LogError::ConfigError(err.to_string())
    }
}
