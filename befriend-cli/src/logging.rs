//! Logging initialisation for the befriend CLI.
//!
//! Diagnostics go to stderr so stdout carries nothing but suggestion counts.
//! Two environment variables shape the output: `RUST_LOG` selects the filter
//! (default `info`) and `BEFRIEND_LOG_FORMAT` picks `human` or `json`. The
//! `log` facade is bridged so dependencies using either API are captured.

use std::{env, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, filter::ParseError, fmt::format::FmtSpan, layer::SubscriberExt,
    util::SubscriberInitExt,
};

const LOG_FORMAT_ENV: &str = "BEFRIEND_LOG_FORMAT";
const LOG_FILTER_ENV: &str = "RUST_LOG";
const DEFAULT_FILTER: &str = "info";

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Errors raised while initialising structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Environment variable contained invalid UTF-8 data.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Name of the offending environment variable.
        name: &'static str,
        /// Underlying lookup failure.
        #[source]
        source: env::VarError,
    },
    /// `BEFRIEND_LOG_FORMAT` named an unknown format.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Raw value supplied by the user.
        provided: String,
    },
    /// `RUST_LOG` held a directive the filter could not parse.
    #[error("invalid log filter `{filter}`: {source}")]
    InvalidFilter {
        /// Raw filter string.
        filter: String,
        /// Parse failure reported by `tracing_subscriber`.
        #[source]
        source: ParseError,
    },
    /// Failed to install the global tracing subscriber.
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        /// Error raised by `tracing_subscriber`.
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum LogFormat {
    #[default]
    Human,
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(LoggingError::UnsupportedFormat {
                provided: other.to_owned(),
            }),
        }
    }
}

/// Logging settings resolved from the environment.
#[derive(Clone, Debug, PartialEq, Eq)]
struct LoggingSettings {
    format: LogFormat,
    filter: String,
}

impl LoggingSettings {
    fn from_env() -> Result<Self, LoggingError> {
        Self::from_lookup(|name| env::var(name))
    }

    fn from_lookup(
        lookup: impl Fn(&'static str) -> Result<String, env::VarError>,
    ) -> Result<Self, LoggingError> {
        let format = match optional_var(&lookup, LOG_FORMAT_ENV)? {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };
        let filter = optional_var(&lookup, LOG_FILTER_ENV)?
            .filter(|raw| !raw.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_owned());
        Ok(Self { format, filter })
    }

    fn env_filter(&self) -> Result<EnvFilter, LoggingError> {
        EnvFilter::try_new(&self.filter).map_err(|source| LoggingError::InvalidFilter {
            filter: self.filter.clone(),
            source,
        })
    }
}

fn optional_var(
    lookup: &impl Fn(&'static str) -> Result<String, env::VarError>,
    name: &'static str,
) -> Result<Option<String>, LoggingError> {
    match lookup(name) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(source) => Err(LoggingError::InvalidUnicode { name, source }),
    }
}

/// Install global structured logging if it has not already been configured.
///
/// # Errors
/// Returns [`LoggingError`] when `BEFRIEND_LOG_FORMAT` or `RUST_LOG` is not
/// valid Unicode, names an unknown format, or holds an unparsable filter.
/// A subscriber installed elsewhere is kept and not treated as an error.
pub fn init_logging() -> Result<(), LoggingError> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }

    let settings = LoggingSettings::from_env()?;
    match install_subscriber(&settings) {
        Ok(()) => {}
        Err(LoggingError::InstallFailed { source }) => {
            tracing::debug!(error = %source, "structured logging already configured elsewhere");
        }
        Err(err) => return Err(err),
    }
    let _ = INITIALISED.set(());
    Ok(())
}

fn install_subscriber(settings: &LoggingSettings) -> Result<(), LoggingError> {
    let env_filter = settings.env_filter()?;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);
    let fmt_layer = match settings.format {
        LogFormat::Json => fmt_layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
        LogFormat::Human => fmt_layer.boxed(),
    };

    // Another logger may already own the `log` slot.
    let _ = LogTracer::init();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|source| LoggingError::InstallFailed { source })
}
