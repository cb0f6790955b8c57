//! fieldlog CLI - Host for the logging bridge
//!
//! Commands:
//! - `fieldlog demo` - Emit the single-threaded demo traffic
//! - `fieldlog demo-threads` - Emit the multi-threaded demo traffic
//! - `fieldlog emit` - Emit one event with structured fields
//!
//! Every delivered event is printed to stdout; the delivered count goes to stderr.

use anyhow::{Context, Result};
use args::{Cli, Commands, OutputArgs};
use clap::Parser;
use fieldlog_core::{LogLevel, LoggerConfig};
use fieldlog_logging::{Logger, demo, init_logging};
use output::PrintSink;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

mod args;
mod output;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let delivered = match cli.command {
        Commands::Demo { level, output } => {
            let (config, delivered) = start(level, &output)?;
            demo::trigger_logs_n(config.demo_iterations);
            delivered
        }
        Commands::DemoThreads { level, output } => {
            let (config, delivered) = start(level, &output)?;
            demo::trigger_logs_with_args_n(config.demo_threads, config.demo_iterations);
            delivered
        }
        Commands::Emit {
            level,
            message,
            fields,
            threshold,
            output,
        } => {
            let (_, delivered) = start(threshold, &output)?;
            Logger::global().emit_with_fields(level, message, fields);
            delivered
        }
    };

    eprintln!("{} events delivered", delivered.load(Ordering::Relaxed));

    Ok(())
}

/// Load the configuration and register the printing sink
fn start(level: Option<LogLevel>, output: &OutputArgs) -> Result<(LoggerConfig, Arc<AtomicUsize>)> {
    let config = match &output.config {
        Some(path) => load_config(path)?,
        None => LoggerConfig::default(),
    };

    let threshold = match level {
        Some(level) => level,
        None => config.level().context("Invalid log_level in config")?,
    };

    let sink = PrintSink::new(output.format);
    let delivered = sink.counter();
    init_logging(threshold, sink).context("Failed to initialize logging")?;

    Ok((config, delivered))
}

fn load_config(path: &Path) -> Result<LoggerConfig> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read config: {:?}", path))?;
    LoggerConfig::from_json(&bytes).with_context(|| format!("Failed to parse config: {:?}", path))
}
