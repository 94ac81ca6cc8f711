//! Syntax highlighting support for the Slate front end
//!
//! Editors drive highlighting from a classification index built during
//! scanning, not by re-lexing on their own. This module provides the
//! category model and the per-category range index the scanner fills.

pub mod classifier;

pub use classifier::{IndexEntry, SyntaxCategory, SyntaxIndex};
