//! Slate Utils - Shared location primitives for the Slate front end
//!
//! This module provides the position, span, and character-range types used by
//! the lexer, the diagnostics layer, and the syntax highlighting index.

pub mod span;

pub use span::{CharRange, Position, Span};
