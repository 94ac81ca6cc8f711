// build.rs - TOML-driven compile-time constant generation
use std::env;
use std::fs;
use std::path::Path;

#[derive(serde::Deserialize)]
struct CompileTimeConfig {
    lexical: LexicalLimits,
    diagnostics: DiagnosticLimits,
    logging: LoggingLimits,
}

#[derive(serde::Deserialize)]
struct LexicalLimits {
    tab_width: u32,
    token_capacity_hint: usize,
    lexeme_capacity_hint: usize,
}

#[derive(serde::Deserialize)]
struct DiagnosticLimits {
    max_collected: usize,
}

#[derive(serde::Deserialize)]
struct LoggingLimits {
    log_buffer_size: usize,
    max_log_message_length: usize,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=SLATE_BUILD_PROFILE");
    println!("cargo:rerun-if-env-changed=SLATE_CONFIG_DIR");

    let profile = env::var("SLATE_BUILD_PROFILE").unwrap_or_else(|_| "development".to_string());
    let config_dir = env::var("SLATE_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    // Find workspace root (parent of slate_compiler directory)
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = Path::new(&manifest_dir)
        .parent()
        .expect("Could not find workspace root (parent directory)");

    // Build config path relative to workspace root
    let config_path = workspace_root
        .join(&config_dir)
        .join(format!("{}.toml", profile));

    println!("cargo:rerun-if-changed={}", config_path.display());

    if !config_path.exists() {
        panic!(
            "Configuration file not found: {}\nWorkspace root: {}\nLooking for: {}/{}/{}.toml",
            config_path.display(),
            workspace_root.display(),
            workspace_root.display(),
            config_dir,
            profile
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", config_path.display(), e));

    let config: CompileTimeConfig = toml::from_str(&config_content)
        .unwrap_or_else(|e| panic!("Invalid TOML in {}: {}", config_path.display(), e));

    validate_constraints(&config, &profile);
    generate_constants(&config, &profile);

    println!(
        "cargo:warning=Generated constants from {}",
        config_path.display()
    );
}

fn validate_constraints(config: &CompileTimeConfig, profile: &str) {
    const REQUIRED_TAB_WIDTH: u32 = 4;
    const ABSOLUTE_MAX_LOG_BUFFER: usize = 1_000_000;
    const ABSOLUTE_MAX_MESSAGE_LENGTH: usize = 1_000_000;

    // The language definition fixes tab advancement at four columns.
    if config.lexical.tab_width != REQUIRED_TAB_WIDTH {
        panic!(
            "INVARIANT: tab_width must be {} (got {})",
            REQUIRED_TAB_WIDTH, config.lexical.tab_width
        );
    }

    if config.lexical.token_capacity_hint == 0 {
        panic!("INVARIANT: token_capacity_hint must be non-zero");
    }

    if config.lexical.lexeme_capacity_hint == 0 {
        panic!("INVARIANT: lexeme_capacity_hint must be non-zero");
    }

    if config.diagnostics.max_collected == 0 {
        panic!("INVARIANT: max_collected must be non-zero");
    }

    if config.logging.log_buffer_size > ABSOLUTE_MAX_LOG_BUFFER {
        panic!("RESOURCE: log_buffer_size exceeds absolute maximum");
    }

    if config.logging.max_log_message_length > ABSOLUTE_MAX_MESSAGE_LENGTH {
        panic!("RESOURCE: max_log_message_length exceeds absolute maximum");
    }

    if profile == "production" {
        if config.logging.log_buffer_size > 10_000 {
            panic!("PRODUCTION: log_buffer_size too high for production");
        }
        if config.logging.max_log_message_length > 10_000 {
            panic!("PRODUCTION: max_log_message_length too high for production");
        }
    }
}

fn generate_constants(config: &CompileTimeConfig, profile: &str) {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("constants.rs");

    let constants_code = format!(
        r#"
// Generated compile-time constants from TOML configuration
// Profile: {}
// DO NOT EDIT - Generated by build.rs

pub mod compile_time {{
    pub mod lexical {{
        pub const TAB_WIDTH: u32 = {};
        pub const TOKEN_CAPACITY_HINT: usize = {};
        pub const LEXEME_CAPACITY_HINT: usize = {};
    }}

    pub mod diagnostics {{
        pub const MAX_COLLECTED_DIAGNOSTICS: usize = {};
    }}

    pub mod logging {{
        pub const LOG_BUFFER_SIZE: usize = {};
        pub const MAX_LOG_MESSAGE_LENGTH: usize = {};
    }}
}}
"#,
        profile,
        // Lexical
        config.lexical.tab_width,
        config.lexical.token_capacity_hint,
        config.lexical.lexeme_capacity_hint,
        // Diagnostics
        config.diagnostics.max_collected,
        // Logging
        config.logging.log_buffer_size,
        config.logging.max_log_message_length,
    );

    fs::write(output_path, constants_code).unwrap();
}
