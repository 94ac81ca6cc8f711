//! Source location tracking for the Slate compiler
//!
//! This module provides types for tracking positions and spans in source text
//! during lexical analysis. Lines and columns are zero-based throughout: the
//! first character of a source unit sits at line 0, column 0, and every
//! diagnostic and editor-facing range is reported in those coordinates.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::compile_time::lexical::TAB_WIDTH;

/// A position in source text with line and column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Position {
    /// Line number (0-based)
    pub line: u32,
    /// Column number (0-based)
    pub column: u32,
}

impl Position {
    /// Create a new position
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Create the starting position (line 0, column 0)
    pub fn start() -> Self {
        Self { line: 0, column: 0 }
    }

    /// Advance position by one character.
    ///
    /// A newline moves to column 0 of the next line. A tab advances the
    /// column by a fixed [`TAB_WIDTH`] regardless of the current column.
    /// Every other character, whitespace or not, advances the column by one.
    pub fn advance(self, ch: char) -> Self {
        match ch {
            '\n' => Self {
                line: self.line + 1,
                column: 0,
            },
            '\t' => Self {
                line: self.line,
                column: self.column + TAB_WIDTH,
            },
            _ => Self {
                line: self.line,
                column: self.column + 1,
            },
        }
    }

    /// Advance position by a string
    pub fn advance_str(self, s: &str) -> Self {
        s.chars().fold(self, |pos, ch| pos.advance(ch))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A span of source text from start to end position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start position (inclusive)
    pub start: Position,
    /// End position (exclusive)
    pub end: Position,
}

impl Span {
    /// Create a new span
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(
            (start.line, start.column) <= (end.line, end.column),
            "Span start must not be after end"
        );
        Self { start, end }
    }

    /// Get the start position of this span
    pub fn start(&self) -> Position {
        self.start
    }

    /// Get the end position of this span
    pub fn end(&self) -> Position {
        self.end
    }

    /// Create a span covering the single character at `pos`
    pub fn char_at(pos: Position) -> Self {
        let end = Position {
            line: pos.line,
            column: pos.column + 1,
        };
        Self { start: pos, end }
    }

    /// Width of a single-line span, in columns
    pub fn width(&self) -> u32 {
        debug_assert_eq!(self.start.line, self.end.line, "width of multi-line span");
        self.end.column - self.start.column
    }

    /// Check if this span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Create a zero-width placeholder span for synthetic tokens.
    ///
    /// Sentinel tokens built for comparisons carry this span; position
    /// information is excluded from token equality, so it never leaks into
    /// comparison results.
    pub fn dummy() -> Self {
        Self {
            start: Position::start(),
            end: Position::start(),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.line == self.end.line {
            write!(
                f,
                "{}:{}-{}",
                self.start.line, self.start.column, self.end.column
            )
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// A contiguous run of characters, addressed by char offset from the start
/// of the source unit.
///
/// Editor integrations consume these: unlike [`Span`], which speaks in lines
/// and columns, a `CharRange` indexes straight into the character sequence of
/// the source, which is how highlighting ranges are addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CharRange {
    /// Offset of the first character (0-based, in chars not bytes)
    pub start: usize,
    /// Number of characters covered
    pub len: usize,
}

impl CharRange {
    /// Create a new range
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Offset one past the last character
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Check if this range is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the characters this range covers
    pub fn slice<'a>(&self, chars: &'a [char]) -> &'a [char] {
        &chars[self.start..self.end()]
    }
}

impl fmt::Display for CharRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

// ============================================================================
// Tests
// ============================================================================
