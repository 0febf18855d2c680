//! Configuration module for logging - using compile-time constants
//!
//! Runtime user preferences are bounded by compile-time security constants:
//! warnings and errors cannot be silenced below the generated minimum.

use crate::config::compile_time::logging::*;
use crate::config::runtime::LoggingPreferences;
use std::sync::OnceLock;

// Type aliases for clarity
type EventsLogLevel = crate::logging::events::LogLevel;

static RUNTIME_PREFERENCES: OnceLock<LoggingPreferences> = OnceLock::new();

/// Initialize runtime preferences
pub fn init_runtime_preferences(preferences: LoggingPreferences) -> Result<(), String> {
    validate_config_with(&preferences)?;

    RUNTIME_PREFERENCES
        .set(preferences)
        .map_err(|_| "Runtime preferences already initialized".to_string())?;

    Ok(())
}

/// Get runtime preferences (with fallback to defaults)
fn get_runtime_preferences() -> LoggingPreferences {
    RUNTIME_PREFERENCES.get().cloned().unwrap_or_default()
}

/// Validate the active (or default) configuration
pub fn validate_config() -> Result<(), String> {
    validate_config_with(&get_runtime_preferences())
}

fn validate_config_with(preferences: &LoggingPreferences) -> Result<(), String> {
    if !preferences.enable_console_logging && preferences.use_structured_logging {
        return Err("Structured logging requires console logging to be enabled".to_string());
    }

    Ok(())
}

/// Get minimum log level (respects user preference within security bounds)
pub fn get_min_log_level() -> EventsLogLevel {
    let user_level = get_runtime_preferences().min_log_level.to_events_log_level();

    // Warnings and errors are always logged per the compile-time floor
    let floor = match SECURITY_MIN_LOG_LEVEL {
        0 => EventsLogLevel::Error,
        1 => EventsLogLevel::Warning,
        2 => EventsLogLevel::Info,
        _ => EventsLogLevel::Debug,
    };

    user_level.max(floor)
}

/// Check if structured logging is enabled (user preference)
pub fn use_structured_logging() -> bool {
    get_runtime_preferences().use_structured_logging
}

/// Check if console logging is enabled (user preference)
pub fn use_console_logging() -> bool {
    get_runtime_preferences().enable_console_logging
}

/// Get log buffer size (compile-time constant)
pub fn get_log_buffer_size() -> usize {
    LOG_BUFFER_SIZE
}

/// Get maximum log message length (compile-time constant)
pub fn get_max_log_message_length() -> usize {
    MAX_LOG_MESSAGE_LENGTH
}

/// Summary of the active configuration for diagnostics
pub fn get_config_summary() -> String {
    format!(
        "Logging config: min_level={:?}, structured={}, buffer={}, max_message={}",
        get_min_log_level(),
        use_structured_logging(),
        get_log_buffer_size(),
        get_max_log_message_length()
    )
}
