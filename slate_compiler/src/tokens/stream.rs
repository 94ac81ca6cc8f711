//! Token stream navigation
//!
//! The scanner produces a complete token vector in one pass; the parser then
//! walks it through this cursor. Matching helpers compare against sentinel
//! tokens, which works because token equality excludes spans.
use serde::{Deserialize, Serialize};

use super::token::Token;

/// A sequential cursor over scanned tokens.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenStream {
    tokens: Vec<Token>,
    position: usize,
}

impl TokenStream {
    /// Create a stream positioned at the first token
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Total number of tokens in the stream
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the stream holds no tokens at all
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// All tokens, regardless of cursor position
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Get the token at an absolute index
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Get the token under the cursor
    pub fn current(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// Look at the token after the current one without advancing
    pub fn peek(&self) -> Option<&Token> {
        self.peek_ahead(1)
    }

    /// Look `n` tokens past the cursor without advancing
    pub fn peek_ahead(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.position + n)
    }

    /// Return the current token and move the cursor forward
    pub fn advance(&mut self) -> Option<&Token> {
        let index = self.position;
        if index < self.tokens.len() {
            self.position += 1;
        }
        self.tokens.get(index)
    }

    /// Check if the cursor has moved past the last token
    pub fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Check if the current token equals `expected` (spans ignored)
    pub fn check_token(&self, expected: &Token) -> bool {
        self.current() == Some(expected)
    }

    /// Advance past the current token if it equals `expected`
    pub fn advance_if_matches(&mut self, expected: &Token) -> bool {
        if self.check_token(expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Current cursor position
    pub fn position(&self) -> usize {
        self.position
    }

    /// Move the cursor back to the first token
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Iterate over all tokens without touching the cursor
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Consume the stream, yielding the underlying token vector
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
