//! Append-only lexeme stream
//!
//! Insertion order is the only meaningful order. The stream owns the derived
//! line-number computation: the line for the current scan position is one
//! plus the character length of every EOL run emitted so far, recomputed on
//! demand rather than cached.

use super::lexeme::{Lexeme, LexemeKind};

/// The ordered sequence of lexemes produced by one scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexemeStream {
    items: Vec<Lexeme>,
}

impl LexemeStream {
    /// Create an empty stream
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append a lexeme
    pub fn push(&mut self, lexeme: Lexeme) {
        self.items.push(lexeme);
    }

    /// Number of lexemes emitted so far
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the stream is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The last lexeme, if any
    pub fn last(&self) -> Option<&Lexeme> {
        self.items.last()
    }

    /// Iterate over the lexemes in emission order
    pub fn iter(&self) -> impl Iterator<Item = &Lexeme> {
        self.items.iter()
    }

    /// All lexemes as a slice
    pub fn as_slice(&self) -> &[Lexeme] {
        &self.items
    }

    /// Line number of the current scan position, derived from emitted EOL runs
    pub fn current_line_number(&self) -> usize {
        let mut number = 1;

        for lexeme in &self.items {
            if lexeme.kind == LexemeKind::Eol {
                number += lexeme.text.chars().count();
            }
        }

        number
    }

    /// Whether the stream ends in a terminal lexeme (EOF or Error)
    pub fn is_complete(&self) -> bool {
        self.last().map(Lexeme::is_terminal).unwrap_or(false)
    }

    /// Whether the scan halted on an error
    pub fn has_error(&self) -> bool {
        self.last().map(Lexeme::is_error).unwrap_or(false)
    }

    /// The terminal error diagnostic, if the scan failed
    pub fn error_message(&self) -> Option<&str> {
        match self.last() {
            Some(lexeme) if lexeme.is_error() => Some(&lexeme.text),
            _ => None,
        }
    }
}

impl IntoIterator for LexemeStream {
    type Item = Lexeme;
    type IntoIter = std::vec::IntoIter<Lexeme>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a LexemeStream {
    type Item = &'a Lexeme;
    type IntoIter = std::slice::Iter<'a, Lexeme>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Validation functions for stream invariants
pub mod validation {
    use super::*;

    /// A terminal lexeme may only appear as the last item (fail-fast)
    pub fn validate_terminal_position(stream: &LexemeStream) -> Result<(), String> {
        let len = stream.len();
        for (i, lexeme) in stream.iter().enumerate() {
            if lexeme.is_terminal() && i + 1 != len {
                return Err(format!(
                    "terminal lexeme {} at position {} of {}",
                    lexeme, i, len
                ));
            }
        }
        Ok(())
    }

    /// A completed stream must end in exactly one terminal lexeme
    pub fn validate_completed(stream: &LexemeStream) -> Result<(), String> {
        if !stream.is_complete() {
            return Err("stream does not end in a terminal lexeme".to_string());
        }
        validate_terminal_position(stream)
    }
}
