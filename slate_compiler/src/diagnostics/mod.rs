//! Phase-agnostic diagnostics
//!
//! Collection lives in [`manager`], presentation in [`formatter`]. Phase
//! error types convert into [`Diagnostic`] at the phase boundary, so the
//! manager never learns phase-specific detail.

pub mod formatter;
pub mod manager;

pub use formatter::{ErrorFormatter, JsonFormatter, LocationFormatter, MessageFormatter};
pub use manager::{Diagnostic, ErrorManager};
