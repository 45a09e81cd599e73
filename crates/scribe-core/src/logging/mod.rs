//! Pluggable logging: a trait contract, three backends, and a registry
//!
//! Callers build a [`LogConfig`], hand it to a [`LogManager`], and get back
//! a shared [`Logger`] instance. The registry keeps one instance per
//! identifier and one instance per physical file path.

mod config;
mod context;
mod csv;
mod file;
mod interpolate;
mod level;
mod manager;
mod print;
mod traits;

pub use config::{LogConfig, LoggerFactory, LoggerKind};
pub use context::{ErrorDetails, LogContext, EXCEPTION_KEY};
pub use csv::{CsvLogger, CSV_HEADER};
pub use file::FileLogger;
pub use interpolate::interpolate;
pub use level::LogLevel;
pub use manager::{manager, LogManager};
pub use print::PrintLogger;
pub use traits::{LogError, LogResult, Logger, SharedLogger};
