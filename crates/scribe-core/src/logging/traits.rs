//! Logger trait definition and the logging error taxonomy

use std::sync::Arc;

use thiserror::Error;

use super::context::LogContext;
use super::level::LogLevel;

/// Errors raised by the logging subsystem.
///
/// All variants are synchronous, non-retriable caller-input failures; none
/// are caught or recovered internally.
#[derive(Debug, Error)]
pub enum LogError {
    /// A backend tag named an implementation that is not a logger.
    #[error("\"{0}\" is not a logger implementation")]
    InvalidImplementation(String),

    /// A file-backed backend was configured with an empty file path.
    #[error("invalid log file \"{0}\"")]
    InvalidFileName(String),

    /// No logger registered under the given identifier.
    #[error("could not find logger \"{0}\"")]
    UnknownLogger(String),

    /// A severity name outside the eight recognized levels.
    #[error("invalid log level \"{0}\"")]
    InvalidLevel(String),

    /// A backend failed to write its record.
    #[error("log write failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type LogResult<T> = Result<T, LogError>;

/// Logger abstraction shared by all backends
///
/// Implementations:
/// - `FileLogger`: appends plain-text records to a file
/// - `CsvLogger`: appends CSV rows, writing a header on first use
/// - `PrintLogger`: emits HTML fragments to stdout
/// - External backends registered through `LoggerKind::External`
pub trait Logger: Send + Sync {
    /// Emit one record at the given severity.
    ///
    /// `{key}` placeholders in `message` are substituted from `context`;
    /// an attached [`ErrorDetails`](super::context::ErrorDetails) is
    /// appended in the backend's own layout.
    fn log(&self, level: LogLevel, message: &str, context: &LogContext) -> LogResult<()>;

    /// Emit one record with the severity given by name.
    ///
    /// Fails with [`LogError::InvalidLevel`] for a name outside the eight
    /// recognized severities, before anything is written.
    fn log_named(&self, level: &str, message: &str, context: &LogContext) -> LogResult<()> {
        self.log(level.parse()?, message, context)
    }

    /// Log an emergency message
    fn emergency(&self, message: &str, context: &LogContext) -> LogResult<()> {
        self.log(LogLevel::Emergency, message, context)
    }

    /// Log an alert message
    fn alert(&self, message: &str, context: &LogContext) -> LogResult<()> {
        self.log(LogLevel::Alert, message, context)
    }

    /// Log a critical message
    fn critical(&self, message: &str, context: &LogContext) -> LogResult<()> {
        self.log(LogLevel::Critical, message, context)
    }

    /// Log an error message
    fn error(&self, message: &str, context: &LogContext) -> LogResult<()> {
        self.log(LogLevel::Error, message, context)
    }

    /// Log a warning message
    fn warning(&self, message: &str, context: &LogContext) -> LogResult<()> {
        self.log(LogLevel::Warning, message, context)
    }

    /// Log a notice message
    fn notice(&self, message: &str, context: &LogContext) -> LogResult<()> {
        self.log(LogLevel::Notice, message, context)
    }

    /// Log an info message
    fn info(&self, message: &str, context: &LogContext) -> LogResult<()> {
        self.log(LogLevel::Info, message, context)
    }

    /// Log a debug message
    fn debug(&self, message: &str, context: &LogContext) -> LogResult<()> {
        self.log(LogLevel::Debug, message, context)
    }
}

impl std::fmt::Debug for dyn Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Logger")
    }
}

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Unix timestamp in whole seconds, as written into log records.
pub(crate) fn unix_time() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
