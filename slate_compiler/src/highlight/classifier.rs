//! Syntax classification for editor highlighting
//!
//! Alongside the token vector, the scanner fills a per-category index of
//! highlightable ranges. Categories use the camelCase names the editor
//! payload expects, and ranges are char offsets rather than line/column
//! positions, since that is how editors address source text.
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::tokens::{Token, TokenKind};
use crate::utils::CharRange;

/// Highlighting category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SyntaxCategory {
    /// Reserved words
    Keyword,
    /// `true` and `false`
    BooleanLiteral,
    /// Integer literals
    NumLiteral,
    /// User-defined names
    Identifier,
    /// Punctuation and operators
    Symbol,
}

impl SyntaxCategory {
    /// Every token kind maps to exactly one category.
    pub const fn from_kind(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Keyword => Self::Keyword,
            TokenKind::Boolean => Self::BooleanLiteral,
            TokenKind::Number => Self::NumLiteral,
            TokenKind::Identifier => Self::Identifier,
            TokenKind::Symbol => Self::Symbol,
        }
    }

    /// The category name as it appears in the editor payload
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::BooleanLiteral => "booleanLiteral",
            Self::NumLiteral => "numLiteral",
            Self::Identifier => "identifier",
            Self::Symbol => "symbol",
        }
    }
}

impl fmt::Display for SyntaxCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A highlightable token and the character range it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// The recorded token
    pub token: Token,
    /// Char-offset range of the token in the source unit
    pub range: CharRange,
}

/// Per-category table of highlightable ranges for one source unit.
///
/// The index accepts any token kind; which kinds actually get recorded is
/// the scanner's call. Entries within a category keep scan order, so ranges
/// are sorted by start offset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyntaxIndex {
    entries: HashMap<SyntaxCategory, Vec<IndexEntry>>,
}

impl SyntaxIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a token under the category its kind maps to.
    ///
    /// The token is cloned into the index; the scanner keeps ownership of
    /// the one it pushes into the token vector.
    pub fn record(&mut self, token: &Token, range: CharRange) {
        let category = SyntaxCategory::from_kind(token.kind());
        self.entries.entry(category).or_default().push(IndexEntry {
            token: token.clone(),
            range,
        });
    }

    /// All entries recorded under a category, in scan order
    pub fn entries(&self, category: SyntaxCategory) -> &[IndexEntry] {
        self.entries
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of recorded entries across all categories
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Categories that have at least one entry
    pub fn categories(&self) -> impl Iterator<Item = SyntaxCategory> + '_ {
        self.entries
            .iter()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(category, _)| *category)
    }
}

// ============================================================================
// Tests
// ============================================================================
