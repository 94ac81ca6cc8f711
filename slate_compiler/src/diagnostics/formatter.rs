//! Rendering strategies for collected diagnostics
//!
//! `ErrorManager::dump` is generic over a formatter, so the host picks the
//! output shape once: bare message text for an in-editor problems list, the
//! cargo-style two-line form for terminals, or JSON values for anything that
//! speaks protocol. Adding a format means adding a type here, not touching
//! the manager.

use serde_json::json;

use super::manager::Diagnostic;

/// Strategy for turning one diagnostic into one rendered value.
pub trait ErrorFormatter {
    type Output;

    fn format(&self, diagnostic: &Diagnostic) -> Self::Output;
}

/// Message text only; code and location are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageFormatter;

impl ErrorFormatter for MessageFormatter {
    type Output = String;

    fn format(&self, diagnostic: &Diagnostic) -> String {
        diagnostic.message.clone()
    }
}

/// Cargo-style rendering: an `error[CODE]` headline plus an arrow line
/// pointing at the zero-based line:column where the span starts.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationFormatter;

impl ErrorFormatter for LocationFormatter {
    type Output = String;

    fn format(&self, diagnostic: &Diagnostic) -> String {
        format!(
            "error[{}]: {}\n --> {}:{}",
            diagnostic.code,
            diagnostic.message,
            diagnostic.span.start().line,
            diagnostic.span.start().column
        )
    }
}

/// One JSON object per diagnostic, with the full span.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl ErrorFormatter for JsonFormatter {
    type Output = serde_json::Value;

    fn format(&self, diagnostic: &Diagnostic) -> serde_json::Value {
        json!({
            "code": diagnostic.code.as_str(),
            "message": diagnostic.message,
            "span": {
                "start": {
                    "line": diagnostic.span.start().line,
                    "column": diagnostic.span.start().column,
                },
                "end": {
                    "line": diagnostic.span.end().line,
                    "column": diagnostic.span.end().column,
                },
            },
        })
    }
}
