//! Plain-text file backend

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use super::config::LogConfig;
use super::context::LogContext;
use super::interpolate::interpolate;
use super::level::LogLevel;
use super::traits::{unix_time, LogResult, Logger};

/// Appends one plain-text line per record to a log file.
///
/// Record layout: `<unix-ts> - <level>: <message>\n`, followed by two
/// indented `Exception:`/`Trace:` lines when an error is attached. The file
/// is opened in append mode per write; single-writer-per-path is guaranteed
/// by the manager's path dedup, not by locking here.
#[derive(Debug)]
pub struct FileLogger {
    path: PathBuf,
}

impl FileLogger {
    /// Create a file logger from a configuration.
    ///
    /// Fails with [`LogError::InvalidFileName`](super::traits::LogError::InvalidFileName)
    /// when the configured file name is empty.
    pub fn new(config: &LogConfig) -> LogResult<Self> {
        Ok(Self {
            path: PathBuf::from(config.require_file_name()?),
        })
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Logger for FileLogger {
    fn log(&self, level: LogLevel, message: &str, context: &LogContext) -> LogResult<()> {
        let mut record = format!(
            "{} - {}: {}\n",
            unix_time(),
            level,
            interpolate(message, context)
        );
        if let Some(details) = context.exception() {
            record.push_str(&format!(
                "\tException: {} (Code: {}) {}\n\tTrace: {}\n",
                details.kind(),
                details.code(),
                details.message(),
                details.trace()
            ));
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(record.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::context::ErrorDetails;
    use crate::logging::traits::LogError;

    fn logger_at(dir: &tempfile::TempDir, name: &str) -> FileLogger {
        let path = dir.path().join(name);
        let config = LogConfig::new("test").with_file_name(path.to_string_lossy());
        FileLogger::new(&config).unwrap()
    }

    #[test]
    fn test_empty_file_name_rejected() {
        let err = FileLogger::new(&LogConfig::new("test")).unwrap_err();
        assert!(matches!(err, LogError::InvalidFileName(_)));
    }

    #[test]
    fn test_record_layout() {
        let dir = tempfile::tempdir().unwrap();
        let logger = logger_at(&dir, "app.log");
        let context = LogContext::new().with("user", "ann");
        logger.log(LogLevel::Warning, "login failed for {user}", &context).unwrap();

        let contents = std::fs::read_to_string(logger.path()).unwrap();
        let line = contents.trim_end();
        assert!(line.ends_with(" - warning: login failed for ann"), "got: {line}");
        let timestamp: u64 = line.split(' ').next().unwrap().parse().unwrap();
        assert!(timestamp > 0);
    }

    #[test]
    fn test_exception_lines_appended() {
        let dir = tempfile::tempdir().unwrap();
        let logger = logger_at(&dir, "app.log");
        let context = LogContext::new().with_exception(
            ErrorDetails::new("DbError", 1049, "unknown database").with_trace("at db.rs:42"),
        );
        logger.log(LogLevel::Error, "query failed", &context).unwrap();

        let contents = std::fs::read_to_string(logger.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "\tException: DbError (Code: 1049) unknown database");
        assert_eq!(lines[2], "\tTrace: at db.rs:42");
    }

    #[test]
    fn test_appends_across_calls() {
        let dir = tempfile::tempdir().unwrap();
        let logger = logger_at(&dir, "app.log");
        let context = LogContext::new();
        for _ in 0..3 {
            logger.info("tick", &context).unwrap();
        }
        let contents = std::fs::read_to_string(logger.path()).unwrap();
        assert_eq!(contents.lines().count(), 3);
    }

    #[test]
    fn test_bogus_level_name_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let logger = logger_at(&dir, "app.log");
        let err = logger
            .log_named("bogus", "never written", &LogContext::new())
            .unwrap_err();
        assert!(matches!(err, LogError::InvalidLevel(_)));
        assert!(!logger.path().exists());
    }
}
