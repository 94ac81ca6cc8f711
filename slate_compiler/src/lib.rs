// Internal modules
pub mod config;
pub mod diagnostics;
pub mod highlight;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod pipeline;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use diagnostics::{
    Diagnostic, ErrorFormatter, ErrorManager, JsonFormatter, LocationFormatter, MessageFormatter,
};
pub use highlight::{SyntaxCategory, SyntaxIndex};
pub use lexical::{LexicalAnalyzer, LexicalError, LexicalOutput};
pub use pipeline::{tokenize, Phase, PhaseFailure};
pub use tokens::{Keyword, Token, TokenKind, TokenStream};
pub use utils::{CharRange, Position, Span};
