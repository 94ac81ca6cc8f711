//! Consolidated diagnostic and log event codes
//!
//! Single source of truth for every code the front end can attach to a
//! diagnostic or log event. Error codes start with `E`, success codes with
//! `S`; generic uncoded events get `W000`/`I000`/`D000` from the event
//! constructors.

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// CODE CONSTANTS
// ============================================================================

/// Lexical analysis error codes
pub mod lexical {
    use super::Code;

    pub const UNKNOWN_CHARACTER: Code = Code::new("E001");
    pub const FLOATS_NOT_SUPPORTED: Code = Code::new("E002");
    pub const EXPECTED_WHITESPACE: Code = Code::new("E003");
}

/// Pipeline orchestration error codes
pub mod pipeline {
    use super::Code;

    pub const PHASE_FAILED: Code = Code::new("E100");
}

/// Internal system error codes
pub mod system {
    use super::Code;

    pub const MANAGER_CAPACITY: Code = Code::new("E900");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const TOKENIZATION_COMPLETE: Code = Code::new("S001");
    pub const PHASE_COMPLETE: Code = Code::new("S002");
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get human-readable description for a code
pub fn get_description(code: &str) -> &'static str {
    match code {
        "E001" => "Source contains a character outside the language alphabet",
        "E002" => "Floating point literals are not part of the language",
        "E003" => "Whitespace was required at this point",
        "E100" => "A compilation phase stopped before producing output",
        "E900" => "Diagnostic collection passed its configured threshold",
        "S001" => "Lexical analysis produced a complete token stream",
        "S002" => "A compilation phase completed",
        _ => "Unknown code",
    }
}

/// Check if a code string names an error
pub fn is_error_code(code: &str) -> bool {
    code.starts_with('E')
}

/// Check if a code string names a success event
pub fn is_success_code(code: &str) -> bool {
    code.starts_with('S')
}

// ============================================================================
// Tests
// ============================================================================
