//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    ARCHIVE_CDX_ENDPOINT, DEFAULT_PLACEHOLDER, DEFAULT_RESULTS_DIR, DEFAULT_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace). Used with the `--log-level` CLI option.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Policy applied when a hostname's fetch exhausts all retry attempts.
///
/// The archive occasionally refuses a host outright; whether that should sink
/// the whole batch depends on how the tool is being driven.
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OnExhausted {
    /// Stop processing and exit non-zero, leaving remaining hostnames untouched
    Abort,
    /// Log a warning, count the hostname as skipped, and continue with the rest
    Skip,
}

/// Command-line options and configuration.
///
/// This struct is automatically generated by `clap` from the field attributes.
/// All options have sensible defaults; at least one of `-d`/`--domain` or
/// `-l`/`--list` must be supplied.
///
/// # Examples
///
/// ```bash
/// # Mine a single domain
/// param_scout -d example.com
///
/// # Mine several domains from files, echoing hits live
/// param_scout -l scope1.txt scope2.txt -s
///
/// # Custom placeholder and output directory
/// param_scout -d example.com -p INJECT --output ./out
/// ```
///
/// For library use, construct it programmatically instead:
///
/// ```no_run
/// use param_scout::Config;
///
/// let config = Config {
///     domains: vec!["example.com".into()],
///     placeholder: "INJECT".into(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "param_scout",
    about = "Mines historical URLs from the Wayback Machine and extracts fuzzable query parameters."
)]
pub struct Config {
    /// Domain(s) to mine
    #[arg(
        short = 'd',
        long = "domain",
        value_name = "DOMAIN",
        num_args = 1..,
        required_unless_present = "lists"
    )]
    pub domains: Vec<String>,

    /// File(s) containing one domain per line (blank lines and `#` comments ignored)
    #[arg(
        short = 'l',
        long = "list",
        value_name = "FILE",
        num_args = 1..,
        required_unless_present = "domains"
    )]
    pub lists: Vec<PathBuf>,

    /// Placeholder substituted for every query-parameter value
    #[arg(short = 'p', long, default_value = DEFAULT_PLACEHOLDER)]
    pub placeholder: String,

    /// Echo each discovered URL to the console as it is found
    #[arg(short = 's', long)]
    pub stream: bool,

    /// Directory where per-hostname result files are written
    #[arg(long, value_parser, default_value = DEFAULT_RESULTS_DIR)]
    pub output: PathBuf,

    /// User-Agent pool source: a URL or local file with one identity per line.
    ///
    /// Falls back to the built-in pool (with a warning) if the source cannot
    /// be read.
    #[arg(long, value_name = "URL_OR_PATH")]
    pub user_agents: Option<String>,

    /// What to do with the rest of the batch when one hostname's fetch
    /// exhausts all retries
    #[arg(long, value_enum, default_value_t = OnExhausted::Abort)]
    pub on_exhausted: OnExhausted,

    /// Per-request timeout in seconds.
    ///
    /// CDX queries for large hosts can take well over a minute.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Archive CDX endpoint base URL
    #[arg(long, default_value = ARCHIVE_CDX_ENDPOINT)]
    pub archive_url: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domains: Vec::new(),
            lists: Vec::new(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            stream: false,
            output: PathBuf::from(DEFAULT_RESULTS_DIR),
            user_agents: None,
            on_exhausted: OnExhausted::Abort,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            archive_url: ARCHIVE_CDX_ENDPOINT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
