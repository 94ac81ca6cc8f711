//! Shared diagnostic store
//!
//! Phases report problems here instead of printing them. The manager keeps
//! diagnostics in arrival order until the host drains them through a
//! formatter; draining and clearing are one atomic step, so a diagnostic is
//! either still pending or already rendered, never both.

use std::mem;

use crate::config::compile_time::diagnostics::MAX_COLLECTED_DIAGNOSTICS;
use crate::logging::codes::{self, Code};
use crate::logging::events::LogEvent;
use crate::logging::try_get_global_logger;
use crate::utils::Span;

use super::formatter::ErrorFormatter;

/// One recorded problem: a stable code, a human-readable message, and the
/// source region it points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub code: Code,
    pub message: String,
    pub span: Span,
}

impl Diagnostic {
    pub fn new(code: Code, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            span,
        }
    }
}

/// Insertion-ordered diagnostic collection shared by every phase of a run.
///
/// The store itself is unbounded; crossing `MAX_COLLECTED_DIAGNOSTICS` only
/// raises a log warning so runaway producers get noticed.
#[derive(Debug, Default)]
pub struct ErrorManager {
    diagnostics: Vec<Diagnostic>,
}

impl ErrorManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a diagnostic, preserving arrival order.
    pub fn add_error(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);

        if self.diagnostics.len() == MAX_COLLECTED_DIAGNOSTICS {
            if let Some(logger) = try_get_global_logger() {
                logger.log_event(
                    LogEvent::warning_with_code(
                        codes::system::MANAGER_CAPACITY,
                        "Collected diagnostics reached the configured threshold",
                    )
                    .with_context("collected", &self.diagnostics.len().to_string()),
                );
            }
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Pending diagnostics, oldest first.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Render every pending diagnostic and clear the store in one step.
    pub fn dump<F: ErrorFormatter>(&mut self, formatter: &F) -> Vec<F::Output> {
        let drained = mem::take(&mut self.diagnostics);
        drained
            .iter()
            .map(|diagnostic| formatter.format(diagnostic))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::formatter::MessageFormatter;
    use crate::utils::Position;

    fn diagnostic(message: &str) -> Diagnostic {
        Diagnostic::new(codes::lexical::UNKNOWN_CHARACTER, message, Span::dummy())
    }

    #[test]
    fn test_manager_starts_empty() {
        let manager = ErrorManager::new();
        assert!(!manager.has_errors());
        assert!(manager.is_empty());
        assert_eq!(manager.len(), 0);
    }

    #[test]
    fn test_add_preserves_arrival_order() {
        let mut manager = ErrorManager::new();
        manager.add_error(diagnostic("first"));
        manager.add_error(diagnostic("second"));
        manager.add_error(diagnostic("third"));

        assert!(manager.has_errors());
        assert_eq!(manager.len(), 3);
        let messages: Vec<&str> = manager
            .diagnostics()
            .iter()
            .map(|d| d.message.as_str())
            .collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_dump_renders_and_clears_atomically() {
        let mut manager = ErrorManager::new();
        manager.add_error(diagnostic("first"));
        manager.add_error(diagnostic("second"));

        let rendered = manager.dump(&MessageFormatter);
        assert_eq!(rendered, vec!["first".to_string(), "second".to_string()]);
        assert!(!manager.has_errors());

        // A second drain has nothing left to render.
        assert!(manager.dump(&MessageFormatter).is_empty());
    }

    #[test]
    fn test_diagnostic_carries_span() {
        let span = Span::char_at(Position::new(2, 7));
        let diagnostic = Diagnostic::new(codes::lexical::FLOATS_NOT_SUPPORTED, "msg", span);
        assert_eq!(diagnostic.span.start(), Position::new(2, 7));
        assert_eq!(diagnostic.code, codes::lexical::FLOATS_NOT_SUPPORTED);
    }

    #[test]
    fn test_capacity_threshold_is_logged() {
        let capture = crate::logging::test_support::capture();

        let mut manager = ErrorManager::new();
        for i in 0..MAX_COLLECTED_DIAGNOSTICS {
            manager.add_error(diagnostic(&format!("overflow {}", i)));
        }

        // Collection keeps working past the threshold.
        assert_eq!(manager.len(), MAX_COLLECTED_DIAGNOSTICS);
        let warnings = capture.get_events_with_code(codes::system::MANAGER_CAPACITY);
        assert!(!warnings.is_empty());
        assert!(warnings.iter().all(|event| event.is_warning()));
    }
}
