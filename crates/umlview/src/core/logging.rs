//! Logging infrastructure for extraction, layout and the viewer loop
//!
//! Structured logging uses the `tracing` crate with a `tracing-subscriber`
//! registry. Output always goes to stderr so that a frame drawn to stdout (or
//! to the alternate terminal screen) is never interleaved with log lines.
//!
//! # Usage
//!
//! ```rust
//! use umlview::core::logging::init_logging;
//!
//! // Initialize with default settings
//! let _ = init_logging(None, None);
//!
//! // Or with custom level and format
//! let _ = init_logging(Some("debug"), Some("pretty"));
//! ```
//!
//! # Log Levels
//!
//! - `trace`: individual pattern matches and per-frame layout details
//! - `debug`: one event per ingested class and per resolved parent
//! - `info`: project discovery and summary counts (default)
//! - `warn`: diagnostics such as unresolved parents and unreadable files
//! - `error`: fatal startup failures
//!
//! # Log Formats
//!
//! - `compact`: single-line format
//! - `pretty`: multi-line format with file and line numbers
//! - `json`: one JSON object per event
//!
//! # Environment Variables
//!
//! - `UMLVIEW_LOG_LEVEL`: log level or full filter directive
//! - `UMLVIEW_LOG_FORMAT`: `compact`, `pretty` or `json`
//! - `RUST_LOG`: standard `tracing-subscriber` filter, consulted last
//!
//! # Filtering Logs
//!
//! ```bash
//! # Show only extractor logs at debug level
//! RUST_LOG="umlview::plugins::java::parser=debug" umlview scan
//!
//! # Show everything at info, but the forest builder at trace
//! RUST_LOG="info,umlview::diagram::database=trace" umlview render
//! ```

use std::fmt;
use std::str::FromStr;

use tracing_subscriber::{
    fmt::{self as sub_fmt, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Environment variable holding the log level
pub const LEVEL_ENV: &str = "UMLVIEW_LOG_LEVEL";

/// Environment variable holding the log format
pub const FORMAT_ENV: &str = "UMLVIEW_LOG_FORMAT";

/// Log format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Compact single-line format
    #[default]
    Compact,
    /// Pretty multi-line format
    Pretty,
    /// JSON format for log aggregation
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Compact => write!(f, "compact"),
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

impl LogFormat {
    /// Get all valid format names
    pub fn variants() -> &'static [&'static str] {
        &["compact", "pretty", "json"]
    }
}

/// Pick the level directive: explicit argument, then `UMLVIEW_LOG_LEVEL`,
/// then `RUST_LOG`, then `info`.
pub fn resolve_level(level: Option<&str>) -> String {
    level
        .map(str::to_string)
        .or_else(|| std::env::var(LEVEL_ENV).ok())
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "info".to_string())
}

/// Pick the output format: explicit argument, then `UMLVIEW_LOG_FORMAT`,
/// then compact.
pub fn resolve_format(format: Option<&str>) -> Result<LogFormat, String> {
    match format
        .map(str::to_string)
        .or_else(|| std::env::var(FORMAT_ENV).ok())
    {
        Some(name) => LogFormat::from_str(&name),
        None => Ok(LogFormat::default()),
    }
}

fn build_filter(level: &str) -> EnvFilter {
    if level.eq_ignore_ascii_case("off") {
        return EnvFilter::new("off");
    }
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the global tracing subscriber
///
/// # Arguments
///
/// * `level` - Optional level or filter directive (`debug`, `umlview=trace`, `off`).
/// * `format` - Optional format name (`compact`, `pretty`, `json`).
///
/// # Returns
///
/// Returns an error for an unknown format, or when a global subscriber is
/// already installed.
///
/// # Example
///
/// ```rust
/// use umlview::core::logging::init_logging;
///
/// let _ = init_logging(Some("warn"), Some("compact"));
/// ```
pub fn init_logging(
    level: Option<&str>,
    format: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = build_filter(&resolve_level(level));
    let format = resolve_format(format).map_err(|e| format!("Invalid log format: {}", e))?;

    let layer = sub_fmt::Layer::default()
        .with_writer(std::io::stderr)
        .with_level(true);

    match format {
        LogFormat::Compact => Registry::default()
            .with(filter)
            .with(
                layer
                    .with_target(false)
                    .with_span_events(FmtSpan::NONE)
                    .compact(),
            )
            .try_init()?,
        LogFormat::Pretty => Registry::default()
            .with(filter)
            .with(
                layer
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .pretty(),
            )
            .try_init()?,
        LogFormat::Json => Registry::default()
            .with(filter)
            .with(
                layer
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .json(),
            )
            .try_init()?,
    }

    Ok(())
}

/// Initialize logging with default settings (info level, compact format)
pub fn init_default_logging() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(None, None)
}
