use std::borrow::Cow;

/// Errors that can occur during logger initialization.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Failure when configuring the rolling file appender (e.g., invalid path).
    #[error("Rolling file appender error: {source}")]
    Appender {
        #[from]
        source: tracing_appender::rolling::InitError,
    },

    /// Occurs if a global tracing subscriber has already been initialized in
    /// the current process.
    #[error("Tracing subscriber error: {source}")]
    Subscriber {
        #[from]
        source: tracing_subscriber::util::TryInitError,
    },

    /// Internal logic errors.
    #[error("Internal logger error: {message}")]
    Internal { message: Cow<'static, str> },

    /// Invalid configuration supplied to the logger builder.
    #[error("Invalid logger configuration: {message}")]
    InvalidConfiguration { message: Cow<'static, str> },
}
