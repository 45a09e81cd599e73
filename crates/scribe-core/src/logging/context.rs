//! Per-call log context: placeholder values and an optional attached error

use std::collections::BTreeMap;

/// The context key reserved for the attached error payload. A plain value
/// stored under this name is never interpolated into messages.
pub const EXCEPTION_KEY: &str = "exception";

/// Details of an error attached to a log record.
///
/// Backends render these in their own layout; the struct itself carries the
/// pieces every layout needs: the error's type name, a numeric code, the
/// human-readable message, and trace text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetails {
    kind: String,
    code: i64,
    message: String,
    trace: String,
}

impl ErrorDetails {
    pub fn new(kind: impl Into<String>, code: i64, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            code,
            message: message.into(),
            trace: String::new(),
        }
    }

    /// Attach trace text (a backtrace rendering, or a joined source chain).
    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = trace.into();
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn code(&self) -> i64 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn trace(&self) -> &str {
        &self.trace
    }
}

/// Key/value data accompanying a single `log()` call.
///
/// Values are used for `{key}` placeholder substitution in the message
/// template; an optional [`ErrorDetails`] rides along for backends to append
/// in their own format.
#[derive(Debug, Clone, Default)]
pub struct LogContext {
    values: BTreeMap<String, String>,
    exception: Option<ErrorDetails>,
}

impl LogContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a placeholder value, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// Attach an error payload, builder style.
    pub fn with_exception(mut self, details: ErrorDetails) -> Self {
        self.exception = Some(details);
        self
    }

    /// Add a placeholder value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        self.values.insert(key.into(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    pub fn exception(&self) -> Option<&ErrorDetails> {
        self.exception.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.exception.is_none()
    }
}
