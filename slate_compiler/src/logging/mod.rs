//! Structured logging for the Slate front end
//!
//! A process-wide logging service installed once per process. Library code
//! reports through the `log_*!` macros, which forward to the global service
//! and quietly do nothing when no service has been installed, so embedding
//! hosts that never call [`init_global_logging`] pay nothing.

pub mod codes;
pub mod events;
pub mod macros;
pub mod service;

use std::sync::{Arc, OnceLock};

pub use codes::Code;
pub use events::{LogEvent, LogLevel};
pub use service::{
    ConsoleLogger, FileLogger, Logger, LoggingService, MemoryLogger, MultiLogger,
    StructuredLogger,
};

use crate::config::runtime::LoggingPreferences;
use crate::utils::Span;

// ============================================================================
// GLOBAL STATE
// ============================================================================

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize global logging from environment-driven preferences.
///
/// Fails if a service is already installed or the code registry is missing
/// a description for one of the emitted codes.
pub fn init_global_logging() -> Result<(), String> {
    // Refuse to start if a registered code lost its description.
    let required = [
        codes::lexical::UNKNOWN_CHARACTER,
        codes::lexical::FLOATS_NOT_SUPPORTED,
        codes::lexical::EXPECTED_WHITESPACE,
        codes::pipeline::PHASE_FAILED,
        codes::system::MANAGER_CAPACITY,
        codes::success::TOKENIZATION_COMPLETE,
        codes::success::PHASE_COMPLETE,
    ];
    for code in required {
        if codes::get_description(code.as_str()) == "Unknown code" {
            return Err(format!("Missing description for code {}", code));
        }
    }

    let service = Arc::new(service::create_configured_service(
        &LoggingPreferences::default(),
    ));
    init_global_logging_with_service(service.clone())?;

    service.log_event(LogEvent::info("Global logging initialized"));
    Ok(())
}

/// Install a caller-built service, for hosts that manage their own sinks.
pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), String> {
    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| "Global logger already initialized")?;
    Ok(())
}

/// Whether a global logging service has been installed.
pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

/// Get the global logging service, panicking when logging was never set up.
pub fn get_global_logger() -> &'static LoggingService {
    GLOBAL_LOGGER
        .get()
        .expect("Global logger not initialized. Call init_global_logging() first.")
        .as_ref()
}

/// Get the global logging service if one is installed.
pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

// ============================================================================
// MACRO SUPPORT FUNCTIONS
// ============================================================================
// Called from the expanded `log_*!` macros; not meant for direct use.

pub fn log_error_with_context(
    code: Code,
    message: &str,
    span: Option<Span>,
    context: Vec<(&str, &str)>,
) {
    if let Some(logger) = try_get_global_logger() {
        let mut event = LogEvent::error(code, message);
        if let Some(span) = span {
            event = event.with_span(span);
        }
        for (key, value) in context {
            event = event.with_context(key, value);
        }
        logger.log_event(event);
    }
}

pub fn log_success_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    if let Some(logger) = try_get_global_logger() {
        let mut event = LogEvent::success(code, message);
        for (key, value) in context {
            event = event.with_context(key, value);
        }
        logger.log_event(event);
    }
}

pub fn log_info_with_context(message: &str, context: Vec<(&str, &str)>) {
    if let Some(logger) = try_get_global_logger() {
        let mut event = LogEvent::info(message);
        for (key, value) in context {
            event = event.with_context(key, value);
        }
        logger.log_event(event);
    }
}

pub fn log_warning_with_context(message: &str, context: Vec<(&str, &str)>) {
    if let Some(logger) = try_get_global_logger() {
        let mut event = LogEvent::warning(message);
        for (key, value) in context {
            event = event.with_context(key, value);
        }
        logger.log_event(event);
    }
}

pub fn log_debug_with_context(message: &str, context: Vec<(&str, &str)>) {
    if let Some(logger) = try_get_global_logger() {
        let mut event = LogEvent::debug(message);
        for (key, value) in context {
            event = event.with_context(key, value);
        }
        logger.log_event(event);
    }
}

// ============================================================================
// TEST SUPPORT
// ============================================================================

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    static TEST_CAPTURE: OnceLock<Arc<MemoryLogger>> = OnceLock::new();

    /// Install a process-wide memory sink (once) and hand back its capture
    /// handle. Tests that assert on log output all go through here, so the
    /// first caller wins the `OnceLock` race and the rest share the sink.
    pub(crate) fn capture() -> Arc<MemoryLogger> {
        TEST_CAPTURE
            .get_or_init(|| {
                let memory = Arc::new(MemoryLogger::new());
                let service = LoggingService::new(memory.clone(), LogLevel::Debug);
                let _ = init_global_logging_with_service(Arc::new(service));
                memory
            })
            .clone()
    }
}
