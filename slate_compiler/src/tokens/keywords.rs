//! Slate keyword system
//!
//! The reserved word set of the language. Keyword recognition happens per
//! scanned word, after the scanner has accumulated a full identifier-shaped
//! lexeme; there is no reserved-prefix handling. Matching is exact and case
//! sensitive, so `For` and `INT` are ordinary identifiers.
use serde::{Deserialize, Serialize};

/// Slate reserved words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    // === CONTROL FLOW ===
    For,
    While,
    If,
    Else,

    // === DECLARATIONS ===
    Func,
    Return,
    Let,
    Var,

    // === TYPE NAMES (CAPITALIZED) ===
    Int,
    Bool,
    String,
    Void,
}

impl Keyword {
    /// Every reserved word, in declaration order.
    pub const ALL: [Keyword; 12] = [
        Keyword::For,
        Keyword::While,
        Keyword::If,
        Keyword::Else,
        Keyword::Func,
        Keyword::Return,
        Keyword::Let,
        Keyword::Var,
        Keyword::Int,
        Keyword::Bool,
        Keyword::String,
        Keyword::Void,
    ];

    /// Get the exact string representation as it appears in Slate source
    pub const fn as_str(self) -> &'static str {
        match self {
            // Control flow
            Self::For => "for",
            Self::While => "while",
            Self::If => "if",
            Self::Else => "else",
            // Declarations
            Self::Func => "func",
            Self::Return => "return",
            Self::Let => "let",
            Self::Var => "var",
            // Type names keep their capitalized surface form
            Self::Int => "Int",
            Self::Bool => "Bool",
            Self::String => "String",
            Self::Void => "Void",
        }
    }

    /// Look up a reserved word by its exact source spelling
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "for" => Some(Self::For),
            "while" => Some(Self::While),
            "if" => Some(Self::If),
            "else" => Some(Self::Else),
            "func" => Some(Self::Func),
            "return" => Some(Self::Return),
            "let" => Some(Self::Let),
            "var" => Some(Self::Var),
            "Int" => Some(Self::Int),
            "Bool" => Some(Self::Bool),
            "String" => Some(Self::String),
            "Void" => Some(Self::Void),
            _ => None,
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classification of a scanned word before any token is built.
///
/// The scanner accumulates a full word, classifies it, and only then
/// constructs the token with the span it measured. Booleans are literals,
/// not keywords, and classify separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordClass {
    /// A reserved word
    Keyword(Keyword),
    /// The literal `true` or `false`
    Boolean(bool),
    /// Any other word
    Identifier,
}

/// Classify a complete scanned word.
pub fn classify_word(word: &str) -> WordClass {
    // Reserved words win over everything else
    if let Some(keyword) = Keyword::from_str(word) {
        return WordClass::Keyword(keyword);
    }

    // Boolean literals are their own class, not keywords
    match word {
        "true" => WordClass::Boolean(true),
        "false" => WordClass::Boolean(false),
        _ => WordClass::Identifier,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_string_round_trip() {
        for keyword in Keyword::ALL {
            assert_eq!(Keyword::from_str(keyword.as_str()), Some(keyword));
        }
    }

    #[test]
    fn test_type_names_are_capitalized() {
        assert_eq!(Keyword::Int.as_str(), "Int");
        assert_eq!(Keyword::from_str("int"), None);
        assert_eq!(Keyword::from_str("string"), None);
    }

    #[test]
    fn test_classify_reserved_word() {
        assert_eq!(classify_word("for"), WordClass::Keyword(Keyword::For));
        assert_eq!(classify_word("Void"), WordClass::Keyword(Keyword::Void));
    }

    #[test]
    fn test_classify_boolean_literals() {
        assert_eq!(classify_word("true"), WordClass::Boolean(true));
        assert_eq!(classify_word("false"), WordClass::Boolean(false));
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        assert_eq!(classify_word("For"), WordClass::Identifier);
        assert_eq!(classify_word("True"), WordClass::Identifier);
        assert_eq!(classify_word("FALSE"), WordClass::Identifier);
    }

    #[test]
    fn test_classify_plain_identifier() {
        assert_eq!(classify_word("x"), WordClass::Identifier);
        assert_eq!(classify_word("counter2"), WordClass::Identifier);
    }
}
