//! CSV file backend

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use parking_lot::Mutex;

use super::config::LogConfig;
use super::context::LogContext;
use super::interpolate::interpolate;
use super::level::LogLevel;
use super::traits::{unix_time, LogResult, Logger};

/// Fixed header row written when the target file is first created.
pub const CSV_HEADER: &str =
    "time,level,message,exception type,exception code,exception message,trace";

/// Appends one CSV row per record to a log file.
///
/// The first `log()` call against a non-existent path writes the header row
/// before the first record. Rows carry 3 fields, or 7 when an error is
/// attached; the trailing exception columns are omitted entirely otherwise.
/// The variable width matches the established file format and is kept
/// deliberately.
#[derive(Debug)]
pub struct CsvLogger {
    path: PathBuf,
    // Guards the exists-check + header + row sequence within the process.
    write_lock: Mutex<()>,
}

impl CsvLogger {
    /// Create a CSV logger from a configuration.
    ///
    /// Fails with [`LogError::InvalidFileName`](super::traits::LogError::InvalidFileName)
    /// when the configured file name is empty.
    pub fn new(config: &LogConfig) -> LogResult<Self> {
        Ok(Self {
            path: PathBuf::from(config.require_file_name()?),
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

/// Enclose a field in double quotes, doubling internal quotes.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

impl Logger for CsvLogger {
    fn log(&self, level: LogLevel, message: &str, context: &LogContext) -> LogResult<()> {
        let mut row = format!(
            "{},{},{}",
            unix_time(),
            level,
            quote(&interpolate(message, context))
        );
        if let Some(details) = context.exception() {
            row.push_str(&format!(
                ",{},{},{},{}",
                details.kind(),
                details.code(),
                quote(details.message()),
                quote(details.trace())
            ));
        }
        row.push('\n');

        let _guard = self.write_lock.lock();
        let existed = self.path.exists();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        if !existed {
            file.write_all(CSV_HEADER.as_bytes())?;
            file.write_all(b"\n")?;
        }
        file.write_all(row.as_bytes())?;
        Ok(())
    }
}
