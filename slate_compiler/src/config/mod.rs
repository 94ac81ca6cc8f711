//! Configuration for the Slate compiler
//!
//! Two layers. Compile-time constants are generated by `build.rs` from the
//! TOML profile selected with `SLATE_BUILD_PROFILE` and baked into the
//! binary; they hold the language-definition and capacity values. Runtime
//! preferences are read from `SLATE_*` environment variables and only shape
//! logging and metrics.

// Include generated constants from build.rs
include!(concat!(env!("OUT_DIR"), "/constants.rs"));

pub mod runtime;

/// Build information and configuration metadata
pub mod build_info {
    /// Returns the configuration profile used during build
    pub fn profile() -> &'static str {
        option_env!("SLATE_BUILD_PROFILE").unwrap_or("development")
    }

    /// Returns the configuration directory used during build
    pub fn config_dir() -> &'static str {
        option_env!("SLATE_CONFIG_DIR").unwrap_or("config")
    }

    /// Returns configuration source information
    pub fn source_info() -> String {
        format!("Generated from {}/{}.toml", config_dir(), profile())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_constants_are_fixed() {
        // Tab width is part of the language definition, not a tunable.
        assert_eq!(compile_time::lexical::TAB_WIDTH, 4);
    }

    #[test]
    fn test_capacity_hints_are_nonzero() {
        assert!(compile_time::lexical::TOKEN_CAPACITY_HINT > 0);
        assert!(compile_time::lexical::LEXEME_CAPACITY_HINT > 0);
        assert!(compile_time::diagnostics::MAX_COLLECTED_DIAGNOSTICS > 0);
        assert!(compile_time::logging::LOG_BUFFER_SIZE > 0);
        assert!(compile_time::logging::MAX_LOG_MESSAGE_LENGTH > 0);
    }

    #[test]
    fn test_build_info_reports_profile() {
        let profile = build_info::profile();
        assert!(!profile.is_empty());
        assert!(build_info::source_info().contains(profile));
    }
}
