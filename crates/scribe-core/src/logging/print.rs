//! Stdout backend emitting HTML fragments

use super::context::LogContext;
use super::interpolate::interpolate;
use super::level::LogLevel;
use super::traits::{unix_time, LogResult, Logger};

/// Emits one `<div>`-wrapped HTML fragment per record to stdout.
///
/// Intended for hosts that render log output inline in a page; each record
/// is independent and no file state is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintLogger;

impl PrintLogger {
    pub fn new() -> Self {
        Self
    }

    fn render(&self, level: LogLevel, message: &str, context: &LogContext) -> String {
        let mut body = format!(
            "<strong>{} - {}</strong>: {}<br />",
            unix_time(),
            level,
            interpolate(message, context)
        );
        if let Some(details) = context.exception() {
            body.push_str(&format!(
                "<em>Exception</em>: {} (Code: {}) {}<br />Trace: {}<br />",
                details.kind(),
                details.code(),
                details.message(),
                details.trace()
            ));
        }
        format!("<div class=\"log_message log_{level}\">{body}</div>")
    }
}

impl Logger for PrintLogger {
    fn log(&self, level: LogLevel, message: &str, context: &LogContext) -> LogResult<()> {
        println!("{}", self.render(level, message, context));
        Ok(())
    }
}
