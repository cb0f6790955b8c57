//! Logger configuration

use crate::error::LogResult;
use crate::level::LogLevel;
use serde::{Deserialize, Serialize};

/// Host-side logger configuration
///
/// Parsed from JSON by hosts that want to keep the initial threshold and the
/// demo workload outside of code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Initial log level name (see [`LogLevel`]'s `FromStr`)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Number of background threads spawned by the threaded demo
    #[serde(default = "default_demo_threads")]
    pub demo_threads: usize,

    /// Events emitted per thread by the demos
    #[serde(default = "default_demo_iterations")]
    pub demo_iterations: usize,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_demo_threads() -> usize {
    10
}

fn default_demo_iterations() -> usize {
    10_000
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            demo_threads: default_demo_threads(),
            demo_iterations: default_demo_iterations(),
        }
    }
}

impl LoggerConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    ///
    /// Empty input yields the defaults.
    pub fn from_json(bytes: &[u8]) -> LogResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Resolve the configured level name
    pub fn level(&self) -> LogResult<LogLevel> {
        self.log_level.parse()
    }
}
