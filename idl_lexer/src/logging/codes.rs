//! Consolidated error codes and classification system
//!
//! Single source of truth for all error codes, their metadata, and
//! classification functions.

use std::collections::HashMap;
use std::sync::OnceLock;

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
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for an error code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        requires_halt: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            requires_halt,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// File processing error codes
pub mod file_processing {
    use super::Code;

    pub const FILE_NOT_FOUND: Code = Code::new("E005");
    pub const INVALID_EXTENSION: Code = Code::new("E006");
    pub const FILE_TOO_LARGE: Code = Code::new("E007");
    pub const INVALID_ENCODING: Code = Code::new("E010");
    pub const IO_ERROR: Code = Code::new("E011");
    pub const INVALID_PATH: Code = Code::new("E012");
}

/// Lexical scan error codes
pub mod lexical {
    use super::Code;

    pub const MISSING_IDENTIFIER: Code = Code::new("E020");
    pub const UNKNOWN_INPUT: Code = Code::new("E021");
    pub const INVALID_IDENTIFIER: Code = Code::new("E022");
    pub const BAD_IDENTIFIER_LENGTH: Code = Code::new("E023");
    pub const EMPTY_QUOTED_VALUE: Code = Code::new("E024");
    pub const UNCLOSED_QUOTED_VALUE: Code = Code::new("E025");
    pub const INVALID_QUOTED_CHARACTER: Code = Code::new("E026");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I001");
    pub const FILE_PROCESSING_SUCCESS: Code = Code::new("I006");
    pub const SCAN_COMPLETE: Code = Code::new("I020");
}

// ============================================================================
// METADATA REGISTRY
// ============================================================================

static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

fn registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        let entries = [
            ErrorMetadata::new(
                "ERR001",
                "System",
                Severity::Critical,
                false,
                true,
                "Unexpected internal failure",
                "Report this as a bug with the input that triggered it",
            ),
            ErrorMetadata::new(
                "ERR002",
                "System",
                Severity::Critical,
                false,
                true,
                "Global subsystem initialization failed",
                "Check configuration and environment variables",
            ),
            ErrorMetadata::new(
                "E005",
                "FileProcessing",
                Severity::High,
                false,
                true,
                "Input file does not exist",
                "Check the file path",
            ),
            ErrorMetadata::new(
                "E006",
                "FileProcessing",
                Severity::Low,
                true,
                false,
                "Input file does not carry the expected extension",
                "Rename the file or disable the extension requirement",
            ),
            ErrorMetadata::new(
                "E007",
                "FileProcessing",
                Severity::High,
                false,
                true,
                "Input file exceeds the compile-time size limit",
                "Split the document or raise the limit in the build configuration",
            ),
            ErrorMetadata::new(
                "E010",
                "FileProcessing",
                Severity::High,
                false,
                true,
                "Input file is not valid UTF-8",
                "Re-encode the document as UTF-8",
            ),
            ErrorMetadata::new(
                "E011",
                "FileProcessing",
                Severity::High,
                false,
                true,
                "I/O failure while reading the input file",
                "Check permissions and disk state",
            ),
            ErrorMetadata::new(
                "E012",
                "FileProcessing",
                Severity::High,
                false,
                true,
                "Input path is not a regular file",
                "Pass a path to a DSL document",
            ),
            ErrorMetadata::new(
                "E020",
                "Lexical",
                Severity::Medium,
                false,
                true,
                "Entity keyword present with no identifier list",
                "Add at least one identifier after the keyword",
            ),
            ErrorMetadata::new(
                "E021",
                "Lexical",
                Severity::Medium,
                false,
                true,
                "Line matches no top-level construct",
                "Start lines with a comment, keyword, tab, or leave them blank",
            ),
            ErrorMetadata::new(
                "E022",
                "Lexical",
                Severity::Medium,
                false,
                true,
                "Identifier contains a character outside the entity's set",
                "Fix the identifier at the reported list position",
            ),
            ErrorMetadata::new(
                "E023",
                "Lexical",
                Severity::Medium,
                false,
                true,
                "Account identifier is not exactly 12 digits",
                "Use a full 12-digit account ID",
            ),
            ErrorMetadata::new(
                "E024",
                "Lexical",
                Severity::Medium,
                false,
                true,
                "Quoted tag field is empty",
                "Remove the field or give it a value",
            ),
            ErrorMetadata::new(
                "E025",
                "Lexical",
                Severity::Medium,
                false,
                true,
                "Quoted tag field reaches the end of the line unclosed",
                "Add the closing quote",
            ),
            ErrorMetadata::new(
                "E026",
                "Lexical",
                Severity::Medium,
                false,
                true,
                "Quoted tag field contains a disallowed character",
                "Remove the character from the quoted value",
            ),
        ];

        entries
            .into_iter()
            .map(|metadata| (metadata.code, metadata))
            .collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get complete metadata for a code, if registered
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    registry().get(code)
}

/// Get the description for a code
pub fn get_description(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|m| m.description)
        .unwrap_or("Unknown error")
}

/// Get the category for a code
pub fn get_category(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|m| m.category)
        .unwrap_or("Unknown")
}

/// Get the severity for a code
pub fn get_severity(code: &str) -> Severity {
    get_error_metadata(code)
        .map(|m| m.severity)
        .unwrap_or(Severity::Medium)
}

/// Get the recommended action for a code
pub fn get_action(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|m| m.recommended_action)
        .unwrap_or("No specific action available")
}

/// Check whether an error is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_error_metadata(code).map(|m| m.recoverable).unwrap_or(false)
}

/// Check whether an error requires halting
pub fn requires_halt(code: &str) -> bool {
    get_error_metadata(code)
        .map(|m| m.requires_halt)
        .unwrap_or(false)
}
