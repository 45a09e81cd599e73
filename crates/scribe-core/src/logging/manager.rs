//! Logger registry

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use super::config::{LogConfig, LoggerKind};
use super::csv::CsvLogger;
use super::file::FileLogger;
use super::print::PrintLogger;
use super::traits::{LogError, LogResult, SharedLogger};

#[derive(Default)]
struct Registry {
    loggers: HashMap<String, SharedLogger>,
    // file path -> owning identifier, file-backed kinds only
    paths: HashMap<String, String>,
}

/// Registry of logging channels, keyed by identifier.
///
/// Entries only ever transition from absent to registered; there is no
/// removal. File-backed loggers are additionally deduplicated by target
/// path, so at most one instance writes to any physical file. The whole
/// check-then-insert sequence runs under one lock, keeping both invariants
/// intact with concurrent callers.
#[derive(Default)]
pub struct LogManager {
    inner: Mutex<Registry>,
}

impl LogManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the logger for `config.identifier()`, creating it on first
    /// request.
    ///
    /// An identifier that is already registered wins over the incoming
    /// configuration: the configuration is ignored and the existing
    /// instance returned. This makes repeated registration from independent
    /// call sites idempotent. A file-backed configuration whose target path
    /// is already in use aliases its identifier to the path's existing
    /// instance instead of opening a second handle.
    pub fn get_logger(&self, config: &LogConfig) -> LogResult<SharedLogger> {
        let mut guard = self.inner.lock();
        let registry = &mut *guard;

        if let Some(existing) = registry.loggers.get(config.identifier()) {
            return Ok(existing.clone());
        }

        let identifier = config.identifier().to_string();
        if config.kind().is_file_backed() {
            let file_name = config.require_file_name()?.to_string();
            if let Some(owner) = registry.paths.get(&file_name) {
                if let Some(instance) = registry.loggers.get(owner).cloned() {
                    registry.loggers.insert(identifier, instance.clone());
                    return Ok(instance);
                }
            }
            registry.paths.insert(file_name, identifier.clone());
        }

        let logger: SharedLogger = match config.kind() {
            LoggerKind::File => Arc::new(FileLogger::new(config)?),
            LoggerKind::Csv => Arc::new(CsvLogger::new(config)?),
            LoggerKind::Print => Arc::new(PrintLogger::new()),
            LoggerKind::External(factory) => factory(config)?,
        };
        registry.loggers.insert(identifier, logger.clone());
        Ok(logger)
    }

    /// Register an externally constructed logger under `identifier`.
    ///
    /// Silent no-op when the identifier is already registered.
    pub fn add_logger(&self, logger: SharedLogger, identifier: impl Into<String>) {
        let mut guard = self.inner.lock();
        let identifier = identifier.into();
        guard.loggers.entry(identifier).or_insert(logger);
    }

    /// Look up a previously registered logger.
    ///
    /// Fails with [`LogError::UnknownLogger`] when nothing is registered
    /// under `identifier`.
    pub fn logger_by_identifier(&self, identifier: &str) -> LogResult<SharedLogger> {
        self.inner
            .lock()
            .loggers
            .get(identifier)
            .cloned()
            .ok_or_else(|| LogError::UnknownLogger(identifier.to_string()))
    }

    /// Whether a logger is registered under `identifier`.
    pub fn contains(&self, identifier: &str) -> bool {
        self.inner.lock().loggers.contains_key(identifier)
    }
}

/// Process-wide registry instance
static MANAGER: Lazy<LogManager> = Lazy::new(LogManager::default);

/// The process-wide [`LogManager`], created lazily and never torn down.
pub fn manager() -> &'static LogManager {
    &MANAGER
}
