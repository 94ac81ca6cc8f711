//! Token system for Slate lexical analysis
//!
//! This module provides the token model produced by the lexer and consumed
//! by the parser: the token type itself, the reserved word set, and the
//! stream cursor the parser walks.
//!
//! # Overview
//!
//! The scanner classifies each lexeme into one of five kinds (identifier,
//! keyword, number, boolean, symbol) and packages it with the span it was
//! scanned from. Parser-facing metadata rides along with the model:
//!
//! - **[`Token`]** - A classified lexeme with its source span
//! - **[`TokenKind`]** - The five lexical categories
//! - **[`Keyword`]** - The reserved word set and word classification
//! - **[`TokenStream`]** - Sequential cursor with sentinel matching
//!
//! ## Equality Semantics
//!
//! Tokens compare on kind and lexeme only. Spans are payload for
//! diagnostics, never part of identity, which lets the parser compare
//! stream tokens against sentinels built with placeholder spans.
//!
//! ## Operator Metadata
//!
//! Binding powers for Pratt parsing live in [`operator_binding_power`],
//! keyed by lexeme. The table is wider than the scanner's symbol alphabet;
//! see the table's documentation for the reasoning.

pub mod keywords;
pub mod stream;
pub mod token;

// Re-export key types for convenience
pub use keywords::{classify_word, Keyword, WordClass};
pub use stream::TokenStream;
pub use token::{is_recognized_symbol, operator_binding_power, Token, TokenKind};

// Re-export span types from utils
pub use crate::utils::{CharRange, Position, Span};
