//! Diagnostic logging for the command line client.
//!
//! Logs go to stderr so they never interleave with table output. The level
//! comes from [`LogConfig::level`] unless `RUST_LOG` is set, e.g.
//! `RUST_LOG=tfc_paging=debug` to trace every page request.

use std::fmt;
use std::io;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

static LOGGING_INITIALIZED: OnceLock<()> = OnceLock::new();

/// How log lines are laid out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One line per event.
    #[default]
    Compact,
    /// Multi-line, human friendly.
    Pretty,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Compact => write!(f, "compact"),
            LogFormat::Pretty => write!(f, "pretty"),
        }
    }
}

/// Logging configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive (`warn`, `debug`, `tfc_paging=trace`, ...).
    /// Overridden by `RUST_LOG`.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: "warn".to_string(),
            format: LogFormat::default(),
        }
    }
}

/// Install the global subscriber.
///
/// Fails with [`Error::Logging`] when the level is not a valid filter or when
/// logging was already initialised.
pub fn init(config: &LogConfig) -> Result<()> {
    if is_initialized() {
        return Err(Error::Logging("logging already initialized".to_string()));
    }

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level).map_err(|err| {
            Error::Logging(format!("invalid log level {:?}: {}", config.level, err))
        })?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true);

    let installed = match config.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
    installed.map_err(|err| Error::Logging(err.to_string()))?;

    let _ = LOGGING_INITIALIZED.set(());
    tracing::debug!(level = %config.level, format = %config.format, "logging initialized");
    Ok(())
}

/// Whether [`init`] has succeeded in this process.
pub fn is_initialized() -> bool {
    LOGGING_INITIALIZED.get().is_some()
}
