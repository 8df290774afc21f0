//! Structured JSON logger
//!
//! One log line = one event. The `event` and `severity` keys come first,
//! remaining fields are sorted alphabetically, so output is byte-for-byte
//! deterministic. Writes are synchronous and unbuffered.

use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Debug-level detail
    Trace = 0,
    /// Normal operations
    Info = 1,
    /// Recoverable issues
    Warn = 2,
    /// Operation failures
    Error = 3,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

/// A structured logger writing one JSON object per line to its sink.
///
/// The sink is pluggable so tests can capture output; production callers
/// use [`Logger::stdout`]. Events below the minimum severity are dropped.
pub struct Logger {
    min_severity: Severity,
    sink: Box<dyn Write>,
}

impl Logger {
    /// Logger writing to stdout at Info and above
    pub fn stdout() -> Self {
        Self::with_sink(Severity::Info, Box::new(io::stdout()))
    }

    /// Logger with an explicit sink and minimum severity
    pub fn with_sink(min_severity: Severity, sink: Box<dyn Write>) -> Self {
        Self { min_severity, sink }
    }

    /// Emit one event as a single JSON line.
    ///
    /// Logging failures are swallowed: observability must never fail the
    /// operation being observed.
    pub fn event(&mut self, severity: Severity, event: &str, fields: &[(&str, &str)]) {
        if severity < self.min_severity {
            return;
        }

        let mut line = String::with_capacity(128);
        line.push_str("{\"event\":\"");
        escape_json_string(&mut line, event);
        line.push_str("\",\"severity\":\"");
        line.push_str(severity.as_str());
        line.push('"');

        let mut sorted_fields: Vec<_> = fields.iter().collect();
        sorted_fields.sort_by_key(|(key, _)| *key);
        for (key, value) in sorted_fields {
            line.push_str(",\"");
            escape_json_string(&mut line, key);
            line.push_str("\":\"");
            escape_json_string(&mut line, value);
            line.push('"');
        }

        line.push_str("}\n");

        let _ = self.sink.write_all(line.as_bytes());
        let _ = self.sink.flush();
    }
}

/// Escape special characters for JSON strings
fn escape_json_string(output: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c.is_control() => {
                output.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => output.push(c),
        }
    }
}
