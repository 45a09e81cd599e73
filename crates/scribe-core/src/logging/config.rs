//! Logger configuration value object

use std::fmt;
use std::sync::Arc;

use super::traits::{LogError, LogResult, SharedLogger};

/// Factory function type for external logger backends
pub type LoggerFactory = Arc<dyn Fn(&LogConfig) -> LogResult<SharedLogger> + Send + Sync>;

/// The backend variant a configuration selects.
///
/// The set of built-in backends is closed; host frameworks plug their own
/// in through `External`, where the factory signature already guarantees
/// the result satisfies [`Logger`](super::traits::Logger).
#[derive(Clone)]
pub enum LoggerKind {
    /// Plain-text append-only file backend
    File,
    /// CSV file backend with a fixed header row
    Csv,
    /// HTML fragments to stdout
    Print,
    /// An externally supplied backend factory
    External(LoggerFactory),
}

impl LoggerKind {
    /// Resolve a backend tag arriving as runtime data (config file, plugin
    /// manifest). Fails with [`LogError::InvalidImplementation`] for a tag
    /// that names no built-in backend.
    pub fn from_name(name: &str) -> LogResult<Self> {
        match name {
            "file" => Ok(LoggerKind::File),
            "csv" => Ok(LoggerKind::Csv),
            "print" => Ok(LoggerKind::Print),
            other => Err(LogError::InvalidImplementation(other.to_string())),
        }
    }

    /// Whether this backend writes to a configured file path.
    pub fn is_file_backed(&self) -> bool {
        matches!(self, LoggerKind::File | LoggerKind::Csv)
    }
}

impl fmt::Debug for LoggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggerKind::File => f.write_str("File"),
            LoggerKind::Csv => f.write_str("Csv"),
            LoggerKind::Print => f.write_str("Print"),
            LoggerKind::External(_) => f.write_str("External(..)"),
        }
    }
}

/// Configuration for one logging channel.
///
/// A value object: built by the caller, handed to
/// [`LogManager::get_logger`](super::manager::LogManager::get_logger) by
/// reference, and not retained afterwards. The file name is validated at
/// backend construction, not here, so a `Print` config never needs one.
#[derive(Debug, Clone)]
pub struct LogConfig {
    identifier: String,
    kind: LoggerKind,
    file_name: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            identifier: String::new(),
            kind: LoggerKind::File,
            file_name: String::new(),
        }
    }
}

impl LogConfig {
    /// Create a configuration with the given registry identifier and the
    /// default `File` backend.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Self::default()
        }
    }

    /// Select the backend variant, builder style.
    pub fn with_kind(mut self, kind: LoggerKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the target file path for file-backed variants, builder style.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn kind(&self) -> &LoggerKind {
        &self.kind
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The non-empty file path of a file-backed configuration, or
    /// [`LogError::InvalidFileName`].
    pub(crate) fn require_file_name(&self) -> LogResult<&str> {
        if self.file_name.is_empty() {
            return Err(LogError::InvalidFileName(self.file_name.clone()));
        }
        Ok(&self.file_name)
    }
}
