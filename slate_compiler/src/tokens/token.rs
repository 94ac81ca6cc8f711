//! Token model for Slate lexical analysis
//!
//! A token is a classified lexeme plus the span it was scanned from. Tokens
//! compare and hash on kind and lexeme only; two `+` tokens from different
//! lines are interchangeable to the parser, and sentinel tokens built with a
//! placeholder span compare equal to their scanned counterparts.
//!
//! Operator metadata lives here too. The binding power table is parser
//! facing and keyed by lexeme; it deliberately covers operators such as `&&`,
//! `||`, and `/` that the scanner's symbol alphabet cannot yet produce, so
//! the parser's precedence climbing does not need to change when the scanner
//! grows.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use super::keywords::Keyword;
use crate::utils::Span;

/// The five lexical categories a Slate token can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// A user-defined name
    Identifier,
    /// A reserved word
    Keyword,
    /// An integer literal
    Number,
    /// The literal `true` or `false`
    Boolean,
    /// Punctuation or an operator from the recognized symbol set
    Symbol,
}

impl TokenKind {
    /// Get the display name of this kind
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Identifier => "Identifier",
            Self::Keyword => "Keyword",
            Self::Number => "Number",
            Self::Boolean => "Boolean",
            Self::Symbol => "Symbol",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single token: kind, source text, and the span it was scanned from.
///
/// Spans are carried for diagnostics and editor integration but are excluded
/// from equality and hashing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    span: Span,
}

impl Token {
    /// Create a token. The lexeme must be the exact source text; it is
    /// never empty.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        let lexeme = lexeme.into();
        debug_assert!(!lexeme.is_empty(), "token lexeme must not be empty");
        Self { kind, lexeme, span }
    }

    /// Get the lexical category
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Get the exact source text of this token
    pub fn value(&self) -> &str {
        &self.lexeme
    }

    /// Get the source span this token was scanned from
    pub fn location(&self) -> Span {
        self.span
    }

    /// Check if this token is a specific keyword
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword && self.lexeme == keyword.as_str()
    }

    /// Check if this token is a symbol with the given spelling
    pub fn is_symbol(&self, lexeme: &str) -> bool {
        self.kind == TokenKind::Symbol && self.lexeme == lexeme
    }

    /// Check if this token is an operator with an entry in the binding
    /// power table
    pub fn is_operator(&self) -> bool {
        self.kind == TokenKind::Symbol && operator_binding_power(&self.lexeme).is_some()
    }

    /// Get the Pratt binding power of this operator token.
    ///
    /// # Panics
    ///
    /// Panics if the token is not an operator. Callers gate on
    /// [`Token::is_operator`] first; querying anything else is a bug in the
    /// caller, not a recoverable condition.
    pub fn binding_power(&self) -> (u8, u8) {
        if self.kind != TokenKind::Symbol {
            panic!(
                "binding power queried on {} token `{}`",
                self.kind, self.lexeme
            );
        }
        operator_binding_power(&self.lexeme).unwrap_or_else(|| {
            panic!("binding power queried on non-operator symbol `{}`", self.lexeme)
        })
    }

    /// Build a keyword token with a placeholder span, for comparisons
    pub fn sentinel_keyword(keyword: Keyword) -> Self {
        Self::new(TokenKind::Keyword, keyword.as_str(), Span::dummy())
    }

    /// Build a symbol token with a placeholder span, for comparisons
    pub fn sentinel_symbol(lexeme: &str) -> Self {
        debug_assert!(
            is_recognized_symbol(lexeme),
            "sentinel for unrecognized symbol `{}`",
            lexeme
        );
        Self::new(TokenKind::Symbol, lexeme, Span::dummy())
    }
}

// Span is deliberately left out of equality and hashing.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.lexeme == other.lexeme
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.lexeme.hash(state);
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}

// ============================================================================
// Symbol and operator tables
// ============================================================================

/// Check if a lexeme is in the recognized symbol set.
///
/// This is the scanner's closed alphabet: the single characters it accepts
/// plus the two-character merges it performs. Anything else scanned on the
/// symbol path is an unknown character.
pub fn is_recognized_symbol(lexeme: &str) -> bool {
    matches!(
        lexeme,
        "+" | "-"
            | "*"
            | "("
            | ")"
            | ":"
            | "{"
            | "}"
            | "!"
            | ","
            | ";"
            | "="
            | "<"
            | ">"
            | "->"
            | "+="
            | "-="
            | "=="
            | "<="
            | ">="
    )
}

/// Binding power for recognized operators: (left_bp, right_bp).
/// Higher = tighter binding. All tiers are left-associative:
/// right_bp = left_bp + 1.
///
/// Keyed by lexeme rather than by symbol alphabet membership; `&&`, `||`,
/// and `/` have entries even though the scanner does not produce them yet.
pub fn operator_binding_power(lexeme: &str) -> Option<(u8, u8)> {
    match lexeme {
        "&&" | "||" => Some((1, 2)),
        "+" | "-" => Some((3, 4)),
        "*" | "/" => Some((5, 6)),
        "!" => Some((7, 8)),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
