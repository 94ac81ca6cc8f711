//! Slate tokenizer state machine
//!
//! One left-to-right pass over the source characters. Each loop iteration
//! classifies the current character as letter, digit, whitespace, or symbol
//! and consumes a maximal lexeme for that class, merging the two-character
//! operators with a single character of lookahead. Scanning is fail-fast:
//! the first lexical error ends the run and no partial token stream escapes.
//!
//! An analyzer is single-use. `run` takes the instance by value, so a
//! finished (or failed) analyzer cannot be started again.

use crate::config::compile_time::lexical::{LEXEME_CAPACITY_HINT, TOKEN_CAPACITY_HINT};
use crate::config::runtime::LexerPreferences;
use crate::diagnostics::ErrorManager;
use crate::highlight::SyntaxIndex;
use crate::logging::codes;
use crate::pipeline::{Phase, PhaseFailure};
use crate::tokens::{
    classify_word, is_recognized_symbol, Token, TokenKind, TokenStream, WordClass,
};
use crate::utils::{CharRange, Position, Span};
use crate::{log_debug, log_error, log_success};

use super::error::LexicalError;

/// Per-run token statistics.
///
/// `total_tokens` is always counted; the per-kind breakdown is collected
/// only when `collect_detailed_metrics` is set.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LexicalMetrics {
    pub total_tokens: usize,
    pub keyword_tokens: usize,
    pub identifier_tokens: usize,
    pub number_tokens: usize,
    pub boolean_tokens: usize,
    pub symbol_tokens: usize,
    /// Length in characters of the longest identifier seen
    pub longest_identifier: usize,
}

impl LexicalMetrics {
    fn record(&mut self, kind: TokenKind, lexeme: &str, preferences: &LexerPreferences) {
        self.total_tokens += 1;

        if !preferences.collect_detailed_metrics {
            return;
        }

        match kind {
            TokenKind::Keyword => self.keyword_tokens += 1,
            TokenKind::Identifier => {
                self.identifier_tokens += 1;
                self.longest_identifier = self.longest_identifier.max(lexeme.chars().count());
            }
            TokenKind::Number => self.number_tokens += 1,
            TokenKind::Boolean => self.boolean_tokens += 1,
            TokenKind::Symbol => self.symbol_tokens += 1,
        }
    }
}

/// Everything a successful run hands back.
#[derive(Debug, Clone)]
pub struct LexicalOutput {
    /// Tokens in scan order
    pub tokens: TokenStream,
    /// Category-to-ranges map for editor highlighting
    pub index: SyntaxIndex,
    /// Statistics for this run
    pub metrics: LexicalMetrics,
}

/// The scanning state machine.
pub struct LexicalAnalyzer {
    chars: Vec<char>,
    /// Offset of the next unread character
    pos: usize,
    /// Line/column mirror of `pos`
    cursor: Position,
    tokens: Vec<Token>,
    index: SyntaxIndex,
    metrics: LexicalMetrics,
    preferences: LexerPreferences,
}

impl LexicalAnalyzer {
    pub fn new() -> Self {
        Self::with_preferences(LexerPreferences::default())
    }

    pub fn with_preferences(preferences: LexerPreferences) -> Self {
        Self {
            chars: Vec::new(),
            pos: 0,
            cursor: Position::start(),
            tokens: Vec::with_capacity(TOKEN_CAPACITY_HINT),
            index: SyntaxIndex::new(),
            metrics: LexicalMetrics::default(),
            preferences,
        }
    }

    pub fn preferences(&self) -> &LexerPreferences {
        &self.preferences
    }

    // ========================================================================
    // SCANNING
    // ========================================================================

    /// Classification order: letters, digits, whitespace, then symbols.
    /// Anything that reaches the symbol arm and is not a recognized
    /// punctuation character is an error.
    fn scan(&mut self) -> Result<(), LexicalError> {
        while let Some(ch) = self.current_char() {
            if ch.is_alphabetic() {
                self.scan_word();
            } else if ch.is_ascii_digit() {
                self.scan_number()?;
            } else if matches!(ch, ' ' | '\t' | '\n') {
                self.consume();
            } else {
                self.scan_symbol()?;
            }
        }
        Ok(())
    }

    fn current_char(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Consume the current character, advancing both the char offset and
    /// the line/column cursor. Callers must have checked `current_char`.
    fn consume(&mut self) -> char {
        let ch = self.chars[self.pos];
        self.pos += 1;
        self.cursor = self.cursor.advance(ch);
        ch
    }

    /// Maximal letter/digit run starting at a letter; classified afterwards
    /// as keyword, boolean literal, or identifier.
    fn scan_word(&mut self) {
        let start_cursor = self.cursor;
        let start_pos = self.pos;
        let mut lexeme = String::with_capacity(LEXEME_CAPACITY_HINT);

        while let Some(ch) = self.current_char() {
            if ch.is_alphabetic() || ch.is_ascii_digit() {
                lexeme.push(self.consume());
            } else {
                break;
            }
        }

        let kind = match classify_word(&lexeme) {
            WordClass::Keyword(_) => TokenKind::Keyword,
            WordClass::Boolean(_) => TokenKind::Boolean,
            WordClass::Identifier => TokenKind::Identifier,
        };
        self.push_token(kind, lexeme, start_cursor, start_pos);
    }

    /// Maximal digit run. A `.` directly after the digits means a float
    /// literal, which the language rejects.
    fn scan_number(&mut self) -> Result<(), LexicalError> {
        let start_cursor = self.cursor;
        let start_pos = self.pos;
        let mut lexeme = String::with_capacity(LEXEME_CAPACITY_HINT);

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                lexeme.push(self.consume());
            } else {
                break;
            }
        }

        if self.current_char() == Some('.') {
            // The diagnostic points at the dot, not the digits before it.
            return Err(LexicalError::FloatsNotSupported {
                span: Span::char_at(self.cursor),
            });
        }

        self.push_token(TokenKind::Number, lexeme, start_cursor, start_pos);
        Ok(())
    }

    /// One punctuation character, with single-character lookahead for the
    /// merged forms `->`, `+=`, `-=`, `==`, `<=`, `>=`. `!` never merges,
    /// so `!=` lexes as two tokens.
    fn scan_symbol(&mut self) -> Result<(), LexicalError> {
        let start_cursor = self.cursor;
        let start_pos = self.pos;

        let first = self.consume();
        let mut lexeme = String::from(first);

        match (first, self.current_char()) {
            ('-', Some('>')) => lexeme.push(self.consume()),
            ('-' | '+' | '=' | '<' | '>', Some('=')) => lexeme.push(self.consume()),
            _ => {}
        }

        // Every merged lexeme is recognized, so a miss here is always a
        // single unknown character.
        if !is_recognized_symbol(&lexeme) {
            return Err(LexicalError::UnknownCharacter {
                character: first,
                span: Span::char_at(start_cursor),
            });
        }

        self.push_token(TokenKind::Symbol, lexeme, start_cursor, start_pos);
        Ok(())
    }

    /// Finish a lexeme: build the token, feed the metrics, and record the
    /// highlighted kinds into the syntax index.
    fn push_token(
        &mut self,
        kind: TokenKind,
        lexeme: String,
        start_cursor: Position,
        start_pos: usize,
    ) {
        let span = Span::new(start_cursor, self.cursor);
        let range = CharRange::new(start_pos, self.pos - start_pos);
        let token = Token::new(kind, lexeme, span);

        self.metrics.record(kind, token.value(), &self.preferences);

        match kind {
            TokenKind::Keyword | TokenKind::Boolean | TokenKind::Number => {
                self.index.record(&token, range);
            }
            // Identifier runs are deliberately not indexed.
            // TODO: record Symbol entries once the editor highlighter
            // distinguishes operators from plain text.
            TokenKind::Identifier | TokenKind::Symbol => {}
        }

        self.tokens.push(token);
    }
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for LexicalAnalyzer {
    type Input = String;
    type Output = LexicalOutput;

    fn name(&self) -> &'static str {
        "lexical"
    }

    fn run(mut self, source: String, errors: &mut ErrorManager) -> Result<LexicalOutput, PhaseFailure> {
        self.chars = source.chars().collect();

        log_debug!("Starting lexical analysis", "char_count" => self.chars.len());

        if let Err(error) = self.scan() {
            let span = error.span();
            let message = if self.preferences.include_position_in_errors {
                format!("{} at {}", error, span.start())
            } else {
                error.to_string()
            };
            log_error!(error.error_code(), &message,
                span = span,
                "tokens_scanned" => self.tokens.len()
            );
            errors.add_error(error.into());
            return Err(PhaseFailure);
        }

        if self.preferences.log_token_statistics {
            log_success!(codes::success::TOKENIZATION_COMPLETE, "Lexical analysis completed",
                "tokens" => self.metrics.total_tokens,
                "keywords" => self.metrics.keyword_tokens,
                "identifiers" => self.metrics.identifier_tokens,
                "numbers" => self.metrics.number_tokens,
                "booleans" => self.metrics.boolean_tokens,
                "symbols" => self.metrics.symbol_tokens
            );
        } else {
            log_success!(codes::success::TOKENIZATION_COMPLETE, "Lexical analysis completed",
                "tokens" => self.metrics.total_tokens
            );
        }

        Ok(LexicalOutput {
            tokens: TokenStream::new(self.tokens),
            index: self.index,
            metrics: self.metrics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::SyntaxCategory;
    use assert_matches::assert_matches;

    fn lex(source: &str) -> (Result<LexicalOutput, PhaseFailure>, ErrorManager) {
        let mut errors = ErrorManager::new();
        let result = LexicalAnalyzer::new().run(source.to_owned(), &mut errors);
        (result, errors)
    }

    fn lex_ok(source: &str) -> LexicalOutput {
        let (result, errors) = lex(source);
        assert!(!errors.has_errors(), "unexpected diagnostics for {:?}", source);
        result.expect("lexing failed")
    }

    fn kinds(output: &LexicalOutput) -> Vec<(TokenKind, String)> {
        output
            .tokens
            .tokens()
            .iter()
            .map(|token| (token.kind(), token.value().to_string()))
            .collect()
    }

    /// Char offset of a line/column position, found by replaying the
    /// cursor rules over the source.
    fn offset_of(chars: &[char], target: Position) -> usize {
        let mut cursor = Position::start();
        for (i, &ch) in chars.iter().enumerate() {
            if cursor == target {
                return i;
            }
            cursor = cursor.advance(ch);
        }
        assert_eq!(cursor, target, "position beyond source end");
        chars.len()
    }

    #[test]
    fn test_let_statement_tokens() {
        let output = lex_ok("let x = 5;");
        assert_eq!(
            kinds(&output),
            vec![
                (TokenKind::Keyword, "let".to_string()),
                (TokenKind::Identifier, "x".to_string()),
                (TokenKind::Symbol, "=".to_string()),
                (TokenKind::Number, "5".to_string()),
                (TokenKind::Symbol, ";".to_string()),
            ]
        );
    }

    #[test]
    fn test_arrow_merges_into_single_token() {
        let output = lex_ok("x -> y");
        assert_eq!(
            kinds(&output),
            vec![
                (TokenKind::Identifier, "x".to_string()),
                (TokenKind::Symbol, "->".to_string()),
                (TokenKind::Identifier, "y".to_string()),
            ]
        );

        let arrow = output.tokens.get(1).unwrap();
        assert_eq!(arrow.location().start(), Position::new(0, 2));
        assert_eq!(arrow.location().end(), Position::new(0, 4));
        assert_eq!(arrow.location().width(), 2);
    }

    #[test]
    fn test_two_character_operators_merge() {
        let output = lex_ok("+= -= == <= >=");
        let values: Vec<&str> = output.tokens.tokens().iter().map(|t| t.value()).collect();
        assert_eq!(values, vec!["+=", "-=", "==", "<=", ">="]);

        // Merges need adjacency; a separating space keeps the tokens apart.
        let split = lex_ok("= =");
        assert_eq!(split.tokens.len(), 2);
    }

    #[test]
    fn test_bang_never_merges() {
        let output = lex_ok("a != b");
        assert_eq!(
            kinds(&output),
            vec![
                (TokenKind::Identifier, "a".to_string()),
                (TokenKind::Symbol, "!".to_string()),
                (TokenKind::Symbol, "=".to_string()),
                (TokenKind::Identifier, "b".to_string()),
            ]
        );
    }

    #[test]
    fn test_float_literal_is_rejected() {
        let (result, mut errors) = lex("3.14");
        assert_matches!(result, Err(PhaseFailure));
        assert_eq!(errors.len(), 1);

        let diagnostic = &errors.diagnostics()[0];
        assert_eq!(diagnostic.code, codes::lexical::FLOATS_NOT_SUPPORTED);
        assert_eq!(diagnostic.message, "Floats are not supported");
        // The reported span is the dot after the digit run.
        assert_eq!(diagnostic.span.start(), Position::new(0, 1));

        let rendered = errors.dump(&crate::diagnostics::MessageFormatter);
        assert_eq!(rendered, vec!["Floats are not supported".to_string()]);
    }

    #[test]
    fn test_unknown_character_reports_column() {
        let (result, errors) = lex("a # b");
        assert_matches!(result, Err(PhaseFailure));
        assert_eq!(errors.len(), 1);

        let diagnostic = &errors.diagnostics()[0];
        assert_eq!(diagnostic.code, codes::lexical::UNKNOWN_CHARACTER);
        assert_eq!(diagnostic.message, "Character # not supported");
        assert_eq!(diagnostic.span.start(), Position::new(0, 2));
        assert_eq!(diagnostic.span.end(), Position::new(0, 3));
    }

    #[test]
    fn test_fail_fast_stops_at_first_error() {
        let (result, errors) = lex("ok # 3.14 $");
        assert_matches!(result, Err(PhaseFailure));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.diagnostics()[0].code, codes::lexical::UNKNOWN_CHARACTER);
    }

    #[test]
    fn test_empty_and_whitespace_sources_succeed() {
        for source in ["", "   ", " \t\n  \n"] {
            let output = lex_ok(source);
            assert!(output.tokens.is_empty());
            assert!(output.index.is_empty());
            assert_eq!(output.metrics.total_tokens, 0);
        }
    }

    #[test]
    fn test_newline_and_tab_advance_the_cursor() {
        let output = lex_ok("a\n\tb");
        let a = output.tokens.get(0).unwrap();
        let b = output.tokens.get(1).unwrap();

        assert_eq!(a.location().start(), Position::new(0, 0));
        // Newline starts line 1; the tab then advances the column by four.
        assert_eq!(b.location().start(), Position::new(1, 4));
        assert_eq!(b.location().end(), Position::new(1, 5));
    }

    #[test]
    fn test_word_classification_partition() {
        let output = lex_ok("while whilex true truex Int x1");
        assert_eq!(
            kinds(&output),
            vec![
                (TokenKind::Keyword, "while".to_string()),
                (TokenKind::Identifier, "whilex".to_string()),
                (TokenKind::Boolean, "true".to_string()),
                (TokenKind::Identifier, "truex".to_string()),
                (TokenKind::Keyword, "Int".to_string()),
                (TokenKind::Identifier, "x1".to_string()),
            ]
        );
    }

    #[test]
    fn test_unicode_letters_form_identifiers() {
        let output = lex_ok("número 5");
        assert_eq!(
            kinds(&output),
            vec![
                (TokenKind::Identifier, "número".to_string()),
                (TokenKind::Number, "5".to_string()),
            ]
        );
        // Columns count characters, not bytes.
        assert_eq!(output.tokens.get(1).unwrap().location().start(), Position::new(0, 7));
    }

    #[test]
    fn test_index_records_highlighted_kinds_only() {
        let output = lex_ok("if x == true");

        let keywords = output.index.entries(SyntaxCategory::Keyword);
        assert_eq!(keywords.len(), 1);
        assert_eq!(keywords[0].token.value(), "if");
        assert_eq!(keywords[0].range, CharRange::new(0, 2));

        let booleans = output.index.entries(SyntaxCategory::BooleanLiteral);
        assert_eq!(booleans.len(), 1);
        assert_eq!(booleans[0].token.value(), "true");
        assert_eq!(booleans[0].range, CharRange::new(8, 4));

        assert!(output.index.entries(SyntaxCategory::NumLiteral).is_empty());
        assert!(output.index.entries(SyntaxCategory::Identifier).is_empty());
        assert!(output.index.entries(SyntaxCategory::Symbol).is_empty());
    }

    #[test]
    fn test_index_records_number_ranges() {
        let output = lex_ok("let x = 5;");
        let numbers = output.index.entries(SyntaxCategory::NumLiteral);
        assert_eq!(numbers.len(), 1);
        assert_eq!(numbers[0].token.value(), "5");
        assert_eq!(numbers[0].range, CharRange::new(8, 1));
    }

    #[test]
    fn test_tokens_round_trip_to_source_text() {
        let source = "func add(a: Int, b: Int) -> Int {\n\treturn a + b;\n}";
        let output = lex_ok(source);
        let chars: Vec<char> = source.chars().collect();
        let mut covered = vec![false; chars.len()];

        for token in output.tokens.tokens() {
            let lexeme: Vec<char> = token.value().chars().collect();
            let start = offset_of(&chars, token.location().start());
            assert_eq!(&chars[start..start + lexeme.len()], &lexeme[..]);
            assert_eq!(token.location().width() as usize, lexeme.len());
            for flag in &mut covered[start..start + lexeme.len()] {
                *flag = true;
            }
        }

        // Whatever no token covers must be whitespace.
        for (i, &flag) in covered.iter().enumerate() {
            assert!(flag || chars[i].is_whitespace(), "unaccounted char {:?}", chars[i]);
        }
    }

    #[test]
    fn test_repeated_runs_agree() {
        let source = "var total = count + 12;";
        let first = lex_ok(source);
        let second = lex_ok(source);

        let snapshot = |output: &LexicalOutput| -> Vec<(TokenKind, String, Span)> {
            output
                .tokens
                .tokens()
                .iter()
                .map(|t| (t.kind(), t.value().to_string(), t.location()))
                .collect()
        };
        assert_eq!(snapshot(&first), snapshot(&second));
        assert_eq!(first.metrics, second.metrics);
    }

    #[test]
    fn test_error_runs_are_repeatable() {
        let (_, first) = lex("3.14");
        let (_, second) = lex("3.14");
        assert_eq!(first.diagnostics(), second.diagnostics());
    }

    #[test]
    fn test_metrics_break_down_by_kind() {
        let output = lex_ok("let count = 5; flag");
        let metrics = &output.metrics;

        assert_eq!(metrics.total_tokens, 6);
        assert_eq!(metrics.keyword_tokens, 1);
        assert_eq!(metrics.identifier_tokens, 2);
        assert_eq!(metrics.number_tokens, 1);
        assert_eq!(metrics.boolean_tokens, 0);
        assert_eq!(metrics.symbol_tokens, 2);
        assert_eq!(metrics.longest_identifier, 5);
    }

    #[test]
    fn test_metrics_respect_preferences() {
        let preferences = LexerPreferences {
            collect_detailed_metrics: false,
            log_token_statistics: false,
            include_position_in_errors: false,
        };
        let mut errors = ErrorManager::new();
        let output = LexicalAnalyzer::with_preferences(preferences)
            .run("let count = 5; flag".to_owned(), &mut errors)
            .unwrap();

        assert_eq!(output.metrics.total_tokens, 6);
        assert_eq!(output.metrics.keyword_tokens, 0);
        assert_eq!(output.metrics.longest_identifier, 0);
    }

    #[test]
    fn test_completion_is_logged() {
        let capture = crate::logging::test_support::capture();
        lex_ok("let x = 1;");
        assert!(capture.has_success_with_code(codes::success::TOKENIZATION_COMPLETE));
    }

    #[test]
    fn test_failure_is_logged_with_code() {
        let capture = crate::logging::test_support::capture();
        let (result, _) = lex("3.14");
        assert!(result.is_err());
        assert!(capture.has_error_with_code(codes::lexical::FLOATS_NOT_SUPPORTED));
    }

    #[test]
    fn test_lone_dot_is_an_unknown_character() {
        let (result, errors) = lex("x . y");
        assert!(result.is_err());
        assert_eq!(errors.diagnostics()[0].code, codes::lexical::UNKNOWN_CHARACTER);
        assert_eq!(errors.diagnostics()[0].message, "Character . not supported");
    }

    #[test]
    fn test_trailing_dot_after_digits_is_a_float_error() {
        let (result, errors) = lex("5.");
        assert!(result.is_err());
        assert_eq!(errors.diagnostics()[0].code, codes::lexical::FLOATS_NOT_SUPPORTED);
        assert_eq!(errors.diagnostics()[0].span.start(), Position::new(0, 1));
    }
}
