//! Lexical error model

use thiserror::Error;

use crate::diagnostics::Diagnostic;
use crate::logging::codes::{self, Code};
use crate::utils::Span;

/// Everything the scanner can reject. Scanning is fail-fast, so one run
/// surfaces at most one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexicalError {
    /// A character outside the scanner's alphabet.
    #[error("Character {character} not supported")]
    UnknownCharacter { character: char, span: Span },

    /// A digit run immediately followed by `.`; the language has no float
    /// literals. The span points at the dot, not the digits before it.
    #[error("Floats are not supported")]
    FloatsNotSupported { span: Span },

    /// Required whitespace was missing. No scanning rule produces this
    /// variant yet; it stays so downstream matchers keep covering it.
    #[error("Expected whitespace")]
    ExpectedWhitespace { span: Span },
}

impl LexicalError {
    /// Source region the error points at.
    pub fn span(&self) -> Span {
        match self {
            LexicalError::UnknownCharacter { span, .. } => *span,
            LexicalError::FloatsNotSupported { span } => *span,
            LexicalError::ExpectedWhitespace { span } => *span,
        }
    }

    /// Stable registry code for this error.
    pub fn error_code(&self) -> Code {
        match self {
            LexicalError::UnknownCharacter { .. } => codes::lexical::UNKNOWN_CHARACTER,
            LexicalError::FloatsNotSupported { .. } => codes::lexical::FLOATS_NOT_SUPPORTED,
            LexicalError::ExpectedWhitespace { .. } => codes::lexical::EXPECTED_WHITESPACE,
        }
    }
}

impl From<LexicalError> for Diagnostic {
    fn from(error: LexicalError) -> Self {
        let span = error.span();
        let code = error.error_code();
        Diagnostic::new(code, error.to_string(), span)
    }
}
