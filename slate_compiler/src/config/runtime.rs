//! Runtime preferences for the Slate front end
//!
//! Everything here is a user-experience knob read from `SLATE_*` environment
//! variables at construction time. Hard limits live in the compile-time
//! constants generated by `build.rs`; nothing in this module can change what
//! the scanner accepts or rejects.
use serde::{Deserialize, Serialize};
use std::env;

use crate::logging::events::LogLevel;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexerPreferences {
    /// Whether to break token counts down by kind
    pub collect_detailed_metrics: bool,

    /// Whether to log per-kind token statistics on completion
    pub log_token_statistics: bool,

    /// Whether to include line/column information in logged error messages
    pub include_position_in_errors: bool,
}

impl Default for LexerPreferences {
    fn default() -> Self {
        Self {
            collect_detailed_metrics: env::var("SLATE_LEXICAL_DETAILED_METRICS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            log_token_statistics: env::var("SLATE_LEXICAL_LOG_TOKEN_STATS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            include_position_in_errors: env::var("SLATE_LEXICAL_INCLUDE_POSITIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingPreferences {
    /// Whether to emit one JSON object per log line
    pub use_structured_logging: bool,

    /// Whether to write log lines to the console at all
    pub enable_console_logging: bool,

    /// Minimum level a log event needs to be emitted
    pub min_log_level: LogLevel,

    /// Whether to include timing information in logs
    pub log_performance_events: bool,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env::var("SLATE_LOGGING_USE_STRUCTURED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            enable_console_logging: env::var("SLATE_LOGGING_ENABLE_CONSOLE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            min_log_level: env::var("SLATE_LOGGING_MIN_LEVEL")
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Info),
            log_performance_events: env::var("SLATE_LOGGING_LOG_PERFORMANCE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

/// Parse log level from string (used for environment variables)
fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

/// Aggregate of every runtime preference group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub lexer: LexerPreferences,
    pub logging: LoggingPreferences,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            lexer: LexerPreferences::default(),
            logging: LoggingPreferences::default(),
        }
    }
}

/// Environment variable names for configuration
pub mod env_vars {
    // Lexical
    pub const LEXICAL_DETAILED_METRICS: &str = "SLATE_LEXICAL_DETAILED_METRICS";
    pub const LEXICAL_LOG_TOKEN_STATS: &str = "SLATE_LEXICAL_LOG_TOKEN_STATS";
    pub const LEXICAL_INCLUDE_POSITIONS: &str = "SLATE_LEXICAL_INCLUDE_POSITIONS";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "SLATE_LOGGING_USE_STRUCTURED";
    pub const LOGGING_ENABLE_CONSOLE: &str = "SLATE_LOGGING_ENABLE_CONSOLE";
    pub const LOGGING_MIN_LEVEL: &str = "SLATE_LOGGING_MIN_LEVEL";
    pub const LOGGING_LOG_PERFORMANCE: &str = "SLATE_LOGGING_LOG_PERFORMANCE";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(parse_log_level("error"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("ERROR"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("0"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("warn"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("warning"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("info"), Some(LogLevel::Info));
        assert_eq!(parse_log_level("debug"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("3"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("invalid"), None);
    }

    #[test]
    fn test_env_var_names_use_slate_prefix() {
        for name in [
            env_vars::LEXICAL_DETAILED_METRICS,
            env_vars::LEXICAL_LOG_TOKEN_STATS,
            env_vars::LEXICAL_INCLUDE_POSITIONS,
            env_vars::LOGGING_USE_STRUCTURED,
            env_vars::LOGGING_ENABLE_CONSOLE,
            env_vars::LOGGING_MIN_LEVEL,
            env_vars::LOGGING_LOG_PERFORMANCE,
        ] {
            assert!(name.starts_with("SLATE_"), "bad prefix on {}", name);
        }
    }
}
