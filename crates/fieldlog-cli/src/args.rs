//! Command-line arguments

use clap::{Args, Parser, Subcommand, ValueEnum};
use fieldlog_core::{Field, LogLevel};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fieldlog")]
#[command(author, version, about = "Drive the fieldlog bridge and print what the sink receives", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Emit the single-threaded demo traffic
    Demo {
        /// Minimum level to deliver (overrides the config file)
        #[arg(short, long)]
        level: Option<LogLevel>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Emit demo traffic from several threads, then from the main thread
    DemoThreads {
        /// Minimum level to deliver (overrides the config file)
        #[arg(short, long)]
        level: Option<LogLevel>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Emit one event
    Emit {
        /// Level of the event
        #[arg(short, long)]
        level: LogLevel,

        /// Event message
        #[arg(short, long)]
        message: String,

        /// Structured field as key=value (repeatable, order is kept)
        #[arg(long = "field", value_parser = parse_field)]
        fields: Vec<Field>,

        /// Minimum level to deliver (default: the config file, then info)
        #[arg(short, long)]
        threshold: Option<LogLevel>,

        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Options shared by every command
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// How delivered events are printed
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// JSON logger configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `LEVEL message key=value ...`
    Text,
    /// One JSON object per line
    Json,
}

/// Parse a `key=value` field; the value may itself contain `=`
pub fn parse_field(s: &str) -> Result<Field, String> {
    match s.split_once('=') {
        Some(("", _)) => Err(format!("field key cannot be empty: '{}'", s)),
        Some((key, value)) => Ok(Field::new(key, value)),
        None => Err(format!("expected key=value, got '{}'", s)),
    }
}
