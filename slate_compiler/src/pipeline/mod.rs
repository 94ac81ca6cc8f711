//! Pipeline orchestration for the Slate front end
//!
//! Hosts call [`tokenize`] with source text and a shared [`ErrorManager`];
//! the driver runs the lexical phase, times it, and logs the outcome under
//! the pipeline codes. Later stages slot in as further [`Phase`]
//! implementations behind the same convention: diagnostics go to the
//! manager, the `Result` only says whether output exists.

pub mod phase;

pub use phase::{Phase, PhaseFailure};

use std::time::Instant;

use crate::config::runtime::LoggingPreferences;
use crate::diagnostics::ErrorManager;
use crate::lexical::{LexicalAnalyzer, LexicalOutput};
use crate::logging::codes;
use crate::{log_error, log_info, log_success};

/// Run lexical analysis over in-memory source text as a pipeline phase.
pub fn tokenize(source: &str, errors: &mut ErrorManager) -> Result<LexicalOutput, PhaseFailure> {
    let logging_preferences = LoggingPreferences::default();
    let start_time = Instant::now();
    let analyzer = LexicalAnalyzer::new();

    log_info!("Starting phase",
        "phase" => analyzer.name(),
        "source_chars" => source.chars().count()
    );

    let result = match analyzer.run(source.to_owned(), errors) {
        Ok(output) => {
            log_success!(codes::success::PHASE_COMPLETE, "Phase completed",
                "phase" => "lexical",
                "tokens" => output.tokens.len()
            );
            Ok(output)
        }
        Err(failure) => {
            log_error!(codes::pipeline::PHASE_FAILED, "Phase stopped before producing output",
                "phase" => "lexical",
                "diagnostics" => errors.len()
            );
            Err(failure)
        }
    };

    if logging_preferences.log_performance_events {
        log_info!("Phase timing",
            "phase" => "lexical",
            "duration_ms" => start_time.elapsed().as_millis()
        );
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{JsonFormatter, LocationFormatter, MessageFormatter};
    use crate::tokens::TokenKind;

    #[test]
    fn test_tokenize_success_leaves_manager_untouched() {
        let mut errors = ErrorManager::new();
        let output = tokenize("let x = 5;", &mut errors).unwrap();

        assert_eq!(output.tokens.len(), 5);
        assert_eq!(output.tokens.get(0).unwrap().kind(), TokenKind::Keyword);
        assert!(!errors.has_errors());
    }

    #[test]
    fn test_tokenize_failure_records_one_diagnostic() {
        let mut errors = ErrorManager::new();
        let result = tokenize("3.14", &mut errors);

        assert!(result.is_err());
        assert_eq!(errors.len(), 1);

        let rendered = errors.dump(&MessageFormatter);
        assert_eq!(rendered, vec!["Floats are not supported".to_string()]);
        assert!(!errors.has_errors());
    }

    #[test]
    fn test_diagnostics_render_through_any_formatter() {
        let mut errors = ErrorManager::new();
        let _ = tokenize("a # b", &mut errors);

        let values = errors.dump(&JsonFormatter);
        assert_eq!(values.len(), 1);
        assert_eq!(values[0]["code"], "E001");
        assert_eq!(values[0]["span"]["start"]["column"], 2);
    }

    #[test]
    fn test_location_formatter_points_at_the_offender() {
        let mut errors = ErrorManager::new();
        let _ = tokenize("a # b", &mut errors);

        let rendered = errors.dump(&LocationFormatter);
        assert_eq!(
            rendered,
            vec!["error[E001]: Character # not supported\n --> 0:2".to_string()]
        );
    }

    #[test]
    fn test_manager_accumulates_across_runs() {
        // One manager, two failing runs: diagnostics pile up in order.
        let mut errors = ErrorManager::new();
        let _ = tokenize("3.14", &mut errors);
        let _ = tokenize("a # b", &mut errors);

        assert_eq!(errors.len(), 2);
        let messages: Vec<&str> = errors
            .diagnostics()
            .iter()
            .map(|d| d.message.as_str())
            .collect();
        assert_eq!(
            messages,
            vec!["Floats are not supported", "Character # not supported"]
        );
    }

    #[test]
    fn test_phase_completion_is_logged() {
        let capture = crate::logging::test_support::capture();
        let mut errors = ErrorManager::new();
        let _ = tokenize("let x = 5;", &mut errors);
        assert!(capture.has_success_with_code(codes::success::PHASE_COMPLETE));
    }

    #[test]
    fn test_phase_failure_is_logged() {
        let capture = crate::logging::test_support::capture();
        let mut errors = ErrorManager::new();
        let _ = tokenize("a # b", &mut errors);
        assert!(capture.has_error_with_code(codes::pipeline::PHASE_FAILED));
    }
}
