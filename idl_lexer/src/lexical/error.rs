//! Scan error taxonomy
//!
//! Every scan failure is terminal: the formatted message becomes the text of
//! a single trailing Error lexeme and the run halts. The Display forms below
//! are the exact diagnostics consumers see, including the 1-based list
//! position where one applies.

use crate::logging::codes;

/// Lexical/structural scan errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    #[error("{keyword} not specified on line {line}")]
    MissingIdentifier {
        keyword: &'static str,
        line: usize,
    },

    #[error("Unknown input '{text}' on line {line}")]
    UnknownInput { text: String, line: usize },

    #[error("Invalid {entity} ID on line {line} position {position}")]
    InvalidIdentifier {
        entity: &'static str,
        line: usize,
        position: usize,
    },

    #[error("Bad length {entity} ID on line {line} position {position}")]
    BadIdentifierLength {
        entity: &'static str,
        line: usize,
        position: usize,
    },

    #[error("Empty value on line {line}")]
    EmptyValue { line: usize },

    #[error("Unclosed quoted value on line {line}")]
    UnclosedValue { line: usize },

    #[error("Invalid character {character} on line {line}")]
    InvalidCharacter { character: char, line: usize },
}

impl ScanError {
    /// The stable logging code for this error
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            ScanError::MissingIdentifier { .. } => codes::lexical::MISSING_IDENTIFIER,
            ScanError::UnknownInput { .. } => codes::lexical::UNKNOWN_INPUT,
            ScanError::InvalidIdentifier { .. } => codes::lexical::INVALID_IDENTIFIER,
            ScanError::BadIdentifierLength { .. } => codes::lexical::BAD_IDENTIFIER_LENGTH,
            ScanError::EmptyValue { .. } => codes::lexical::EMPTY_QUOTED_VALUE,
            ScanError::UnclosedValue { .. } => codes::lexical::UNCLOSED_QUOTED_VALUE,
            ScanError::InvalidCharacter { .. } => codes::lexical::INVALID_QUOTED_CHARACTER,
        }
    }

    /// The source line the error was detected on
    pub fn line(&self) -> usize {
        match self {
            ScanError::MissingIdentifier { line, .. }
            | ScanError::UnknownInput { line, .. }
            | ScanError::InvalidIdentifier { line, .. }
            | ScanError::BadIdentifierLength { line, .. }
            | ScanError::EmptyValue { line }
            | ScanError::UnclosedValue { line }
            | ScanError::InvalidCharacter { line, .. } => *line,
        }
    }
}
