//! Structured log events
//!
//! Every log line in the front end is a [`LogEvent`]: a level, a code, a
//! message, and optional span plus key/value context. Events render either
//! as a plain console line or as JSON for structured sinks.
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use super::codes::Code;
use crate::config::compile_time::logging::MAX_LOG_MESSAGE_LENGTH;
use crate::utils::Span;

/// Log severity levels, ordered from most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }
}

/// A single structured log event.
#[derive(Debug, Clone)]
pub struct LogEvent {
    /// When the event was created
    pub timestamp: SystemTime,
    /// Severity level
    pub level: LogLevel,
    /// Event code (generic codes for uncoded constructors)
    pub code: Code,
    /// Human-readable message, clipped to the configured maximum
    pub message: String,
    /// Source location, when the event concerns one
    pub span: Option<Span>,
    /// Additional key/value context
    pub context: HashMap<String, String>,
}

impl LogEvent {
    fn new(level: LogLevel, code: Code, message: &str) -> Self {
        Self {
            timestamp: SystemTime::now(),
            level,
            code,
            message: clip_message(message),
            span: None,
            context: HashMap::new(),
        }
    }

    /// Create an error event
    pub fn error(code: Code, message: &str) -> Self {
        Self::new(LogLevel::Error, code, message)
    }

    /// Create a warning event with the generic warning code
    pub fn warning(message: &str) -> Self {
        Self::new(LogLevel::Warning, Code::new("W000"), message)
    }

    /// Create a warning event with a specific code
    pub fn warning_with_code(code: Code, message: &str) -> Self {
        Self::new(LogLevel::Warning, code, message)
    }

    /// Create an info event with the generic info code
    pub fn info(message: &str) -> Self {
        Self::new(LogLevel::Info, Code::new("I000"), message)
    }

    /// Create an info event with a specific code
    pub fn info_with_code(code: Code, message: &str) -> Self {
        Self::new(LogLevel::Info, code, message)
    }

    /// Create a success event.
    ///
    /// Successes log at info level; the `S`-prefixed code is what marks
    /// them as successes.
    pub fn success(code: Code, message: &str) -> Self {
        Self::new(LogLevel::Info, code, message)
    }

    /// Create a debug event with the generic debug code
    pub fn debug(message: &str) -> Self {
        Self::new(LogLevel::Debug, Code::new("D000"), message)
    }

    /// Attach a source span
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach one key/value context pair
    pub fn with_context(mut self, key: &str, value: &str) -> Self {
        self.context.insert(key.to_string(), value.to_string());
        self
    }

    pub fn is_error(&self) -> bool {
        self.level == LogLevel::Error
    }

    pub fn is_warning(&self) -> bool {
        self.level == LogLevel::Warning
    }

    pub fn is_info(&self) -> bool {
        self.level == LogLevel::Info
    }

    pub fn is_debug(&self) -> bool {
        self.level == LogLevel::Debug
    }

    /// Render as a plain console line
    pub fn format(&self) -> String {
        let mut formatted = format!(
            "[{}] {} - {}",
            self.level.as_str(),
            self.code,
            self.message
        );
        if let Some(span) = self.span {
            formatted.push_str(&format!(
                " at {}:{}",
                span.start().line,
                span.start().column
            ));
        }
        formatted
    }

    /// Render as a single JSON object
    pub fn format_json(&self) -> String {
        let timestamp_secs = self
            .timestamp
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        let span = self.span.map(|span| {
            serde_json::json!({
                "start_line": span.start().line,
                "start_column": span.start().column,
                "end_line": span.end().line,
                "end_column": span.end().column,
            })
        });

        serde_json::json!({
            "timestamp": timestamp_secs,
            "level": self.level.as_str(),
            "code": self.code.as_str(),
            "message": self.message,
            "span": span,
            "context": self.context,
        })
        .to_string()
    }
}

fn clip_message(message: &str) -> String {
    if message.chars().count() <= MAX_LOG_MESSAGE_LENGTH {
        return message.to_string();
    }
    let mut clipped: String = message.chars().take(MAX_LOG_MESSAGE_LENGTH).collect();
    clipped.push_str("...");
    clipped
}

// ============================================================================
// Tests
// ============================================================================
