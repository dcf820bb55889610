//! Logging initialisation for the `mstgraph` binary.
//!
//! Installs a global `tracing` subscriber writing to stderr, with human or
//! JSON formatting, and bridges the `log` facade.

use std::{env, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Environment variable selecting the log format.
pub const LOG_FORMAT_ENV: &str = "MSTGRAPH_LOG_FORMAT";

const DEFAULT_DIRECTIVE: &str = "info";

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Output format for diagnostics.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Human,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    /// Parses a format name, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    /// Returns [`LoggingError::UnsupportedFormat`] for anything other than
    /// `human` or `json`.
    ///
    /// # Examples
    /// ```
    /// use mstgraph_cli::logging::LogFormat;
    ///
    /// assert_eq!(LogFormat::parse(" JSON "), Ok(LogFormat::Json));
    /// assert!(LogFormat::parse("xml").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, LoggingError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(LoggingError::UnsupportedFormat {
                provided: other.to_owned(),
            }),
        }
    }

    fn from_env() -> Result<Self, LoggingError> {
        match env::var(LOG_FORMAT_ENV) {
            Ok(raw) => Self::parse(&raw),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(source @ env::VarError::NotUnicode(_)) => Err(LoggingError::InvalidUnicode {
                name: LOG_FORMAT_ENV,
                source,
            }),
        }
    }
}

/// Errors raised while initialising structured logging.
#[derive(Debug, Error, PartialEq)]
pub enum LoggingError {
    /// The format variable held invalid UTF-8.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Name of the offending variable.
        name: &'static str,
        /// Underlying lookup failure.
        #[source]
        source: env::VarError,
    },
    /// The format variable named an unknown format.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Value supplied by the user, lower-cased.
        provided: String,
    },
}

/// Installs global structured logging once per process.
///
/// `MSTGRAPH_LOG_FORMAT=json` switches to JSON lines; `RUST_LOG` controls the
/// filter and defaults to `info`. Output goes to stderr so that the graph
/// printed on stdout stays machine-readable. If another subscriber already
/// owns the global slot it is left in place.
///
/// # Errors
/// Returns [`LoggingError`] when the format variable is unreadable or names
/// an unsupported format.
pub fn init_logging() -> Result<(), LoggingError> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }
    let format = LogFormat::from_env()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);
    let fmt_layer = match format {
        LogFormat::Human => fmt_layer.boxed(),
        LogFormat::Json => fmt_layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
    };

    // Both installs are best-effort: a host may already own either slot.
    let _ = LogTracer::init();
    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
    if let Err(err) = installed {
        tracing::debug!(error = %err, "keeping existing global subscriber");
    }
    let _ = INITIALISED.set(());
    Ok(())
}
