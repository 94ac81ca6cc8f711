//! Compilation phase contract

use thiserror::Error;

use crate::diagnostics::ErrorManager;

/// One stage of compilation, typed on what it consumes and produces.
///
/// Phases are single-use: `run` takes the phase by value, so a finished
/// phase cannot be started again. A failing phase records what went wrong
/// with the shared [`ErrorManager`] before returning; the `Err` it hands
/// back carries no detail of its own.
pub trait Phase {
    type Input;
    type Output;

    /// Short stable name used in orchestration logs
    fn name(&self) -> &'static str;

    fn run(self, input: Self::Input, errors: &mut ErrorManager)
        -> Result<Self::Output, PhaseFailure>;
}

/// Marker for a failed phase. The diagnostics live with the manager the
/// phase ran against, never in this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("phase failed; diagnostics were recorded with the error manager")]
pub struct PhaseFailure;
