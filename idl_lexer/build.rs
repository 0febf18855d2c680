// build.rs - TOML-driven compile-time constant generation
use std::env;
use std::fs;
use std::path::Path;

#[derive(serde::Deserialize)]
struct CompileTimeConfig {
    file_processing: FileProcessingLimits,
    logging: LoggingLimits,
}

#[derive(serde::Deserialize)]
struct FileProcessingLimits {
    max_file_size: u64,
    large_file_threshold: u64,
}

#[derive(serde::Deserialize)]
struct LoggingLimits {
    max_log_message_length: usize,
    log_buffer_size: usize,
    security_min_log_level: u8,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=IDL_BUILD_PROFILE");
    println!("cargo:rerun-if-env-changed=IDL_CONFIG_DIR");

    let profile = env::var("IDL_BUILD_PROFILE").unwrap_or_else(|_| "development".to_string());
    let config_dir = env::var("IDL_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    // Find workspace root (parent of idl_lexer directory)
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = Path::new(&manifest_dir)
        .parent()
        .expect("Could not find workspace root (parent directory)");

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

    validate_security_constraints(&config, &profile);
    generate_constants(&config, &profile);
}

fn validate_security_constraints(config: &CompileTimeConfig, profile: &str) {
    const ABSOLUTE_MAX_FILE_SIZE: u64 = 1_000_000_000;

    if config.file_processing.max_file_size > ABSOLUTE_MAX_FILE_SIZE {
        panic!(
            "{}: file_processing.max_file_size {} exceeds absolute maximum {}",
            profile, config.file_processing.max_file_size, ABSOLUTE_MAX_FILE_SIZE
        );
    }

    if config.file_processing.large_file_threshold > config.file_processing.max_file_size {
        panic!(
            "{}: file_processing.large_file_threshold must not exceed max_file_size",
            profile
        );
    }

    if config.logging.max_log_message_length == 0 || config.logging.log_buffer_size == 0 {
        panic!("{}: logging limits must be non-zero", profile);
    }
}

fn generate_constants(config: &CompileTimeConfig, profile: &str) {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("constants.rs");

    let constants_code = format!(
        r#"// Generated by build.rs from config/{}.toml - do not edit

/// Compile-time limits generated from the build configuration profile
pub mod compile_time {{
    pub mod file_processing {{
        pub const MAX_FILE_SIZE: u64 = {};
        pub const LARGE_FILE_THRESHOLD: u64 = {};
    }}

    pub mod logging {{
        pub const MAX_LOG_MESSAGE_LENGTH: usize = {};
        pub const LOG_BUFFER_SIZE: usize = {};
        pub const SECURITY_MIN_LOG_LEVEL: u8 = {};
    }}
}}
"#,
        profile,
        config.file_processing.max_file_size,
        config.file_processing.large_file_threshold,
        config.logging.max_log_message_length,
        config.logging.log_buffer_size,
        config.logging.security_min_log_level,
    );

    fs::write(output_path, constants_code).unwrap();
}
