//! Command line configuration

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

/// Log output format.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Plan output format.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Plain text breakdown.
    Text,

    /// Table per day.
    Table,
}

/// Logging settings.
#[derive(Debug, Args)]
pub(crate) struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub(crate) log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub(crate) log_format: LogFormat,
}

/// Ladder configuration
#[derive(Debug, Parser)]
#[command(
    name = "ladder",
    about = "Cheapest purchase plan to reach an event item target",
    long_about = None
)]
pub(crate) struct Config {
    /// Number of items to reach by the end of the event
    #[arg(short, long, allow_negative_numbers = true)]
    pub(crate) target: i64,

    /// YAML catalog fixture; the built-in event is used when omitted
    #[arg(short, long, env = "LADDER_FIXTURE")]
    pub(crate) fixture: Option<PathBuf>,

    /// Output format (text, table)
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,

    /// Logging output settings.
    #[command(flatten)]
    pub(crate) logging: LoggingConfig,
}
