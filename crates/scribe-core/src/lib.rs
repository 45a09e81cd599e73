//! Scribe Core
//!
//! Host-agnostic support library for an ORM/CMS framework: a pluggable
//! logging subsystem plus small general-purpose helpers.
//!
//! ## Logging
//!
//! The `logging` module provides a trait contract, three backends (plain
//! file, CSV, stdout HTML fragments), and an identifier-keyed registry that
//! guarantees one logger instance per channel and per physical file path.
//!
//! ```rust,ignore
//! use scribe_core::logging::{LogConfig, LogContext, LogManager};
//!
//! let manager = LogManager::new();
//! let logger = manager.get_logger(
//!     &LogConfig::new("app").with_file_name("/var/log/app.log"),
//! )?;
//!
//! logger.error(
//!     "login failed for {user}",
//!     &LogContext::new().with("user", "ann"),
//! )?;
//! ```

pub mod logging;
pub mod util;

// Re-export commonly used types
pub use logging::{
    manager, CsvLogger, ErrorDetails, FileLogger, LogConfig, LogContext, LogError, LogLevel,
    LogManager, LogResult, Logger, LoggerKind, PrintLogger, SharedLogger,
};

pub use util::{trim_blanks, RequestData, RequestMethod, ValueType};
