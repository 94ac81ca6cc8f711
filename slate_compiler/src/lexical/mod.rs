//! Lexical analysis for Slate source text
//!
//! The scanner lives in [`analyzer`]; its error surface in [`error`]. Most
//! callers go through [`crate::pipeline::tokenize`], which adds phase
//! orchestration on top of the raw analyzer.

pub mod analyzer;
pub mod error;

pub use analyzer::{LexicalAnalyzer, LexicalMetrics, LexicalOutput};
pub use error::LexicalError;

use crate::config::runtime::LexerPreferences;
use crate::diagnostics::ErrorManager;
use crate::pipeline::{Phase, PhaseFailure};

/// Tokenize one in-memory source text with default preferences.
pub fn tokenize_source(
    source: &str,
    errors: &mut ErrorManager,
) -> Result<LexicalOutput, PhaseFailure> {
    LexicalAnalyzer::new().run(source.to_owned(), errors)
}

/// Tokenize with explicit runtime preferences.
pub fn tokenize_source_with_preferences(
    source: &str,
    preferences: LexerPreferences,
    errors: &mut ErrorManager,
) -> Result<LexicalOutput, PhaseFailure> {
    LexicalAnalyzer::with_preferences(preferences).run(source.to_owned(), errors)
}

/// Create a new analyzer with default preferences
pub fn create_analyzer() -> LexicalAnalyzer {
    LexicalAnalyzer::new()
}

/// Create an analyzer with explicit runtime preferences
pub fn create_analyzer_with_preferences(preferences: LexerPreferences) -> LexicalAnalyzer {
    LexicalAnalyzer::with_preferences(preferences)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_source_wrapper() {
        let mut errors = ErrorManager::new();
        let output = tokenize_source("let x = 5;", &mut errors).unwrap();
        assert_eq!(output.tokens.len(), 5);
        assert!(!errors.has_errors());
    }

    #[test]
    fn test_create_analyzer_with_preferences() {
        let preferences = LexerPreferences {
            collect_detailed_metrics: false,
            log_token_statistics: true,
            include_position_in_errors: false,
        };
        let analyzer = create_analyzer_with_preferences(preferences);
        assert!(!analyzer.preferences().collect_detailed_metrics);
        assert!(analyzer.preferences().log_token_statistics);
    }
}
