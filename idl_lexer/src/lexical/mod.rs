//! Lexical analysis module
//!
//! Provides the scanner primitives, the grammar state machine, and the
//! public scan API. A scan always runs to completion: the resulting stream
//! ends in either an EOF lexeme or a single terminal Error lexeme, and no
//! error ever crosses this boundary as a panic or a `Result` failure.

pub mod error;
pub mod scanner;
pub mod states;

use crate::config::runtime::LexerPreferences;
use crate::lexemes::{Lexeme, LexemeKind, LexemeStream};
use crate::logging::codes;
use crate::{log_debug, log_success};

pub use error::ScanError;
pub use scanner::Scanner;
pub use states::State;

/// Per-scan lexeme metrics
#[derive(Debug, Default, Clone)]
pub struct ScanMetrics {
    pub total_lexemes: usize,
    pub keyword_lexemes: usize,
    pub value_lexemes: usize,
    pub comment_lexemes: usize,
    pub eol_lexemes: usize,
    pub space_lexemes: usize,
    pub lines: usize,
}

impl ScanMetrics {
    pub(crate) fn record_lexeme(&mut self, lexeme: &Lexeme) {
        self.total_lexemes += 1;

        match lexeme.kind {
            kind if kind.is_keyword() => self.keyword_lexemes += 1,
            LexemeKind::Value => self.value_lexemes += 1,
            LexemeKind::Comment => self.comment_lexemes += 1,
            LexemeKind::Eol => self.eol_lexemes += 1,
            LexemeKind::Space => self.space_lexemes += 1,
            _ => {}
        }
    }
}

/// The lexer: runs the state machine over one input at a time
pub struct Lexer {
    metrics: ScanMetrics,
    preferences: LexerPreferences,
}

impl Lexer {
    pub fn new() -> Self {
        Self {
            metrics: ScanMetrics::default(),
            preferences: LexerPreferences::default(),
        }
    }

    pub fn with_preferences(preferences: LexerPreferences) -> Self {
        Self {
            metrics: ScanMetrics::default(),
            preferences,
        }
    }

    /// Tokenize a full in-memory document
    pub fn scan(&mut self, input: &str) -> LexemeStream {
        // Reset metrics for this scan
        self.metrics = ScanMetrics::default();

        log_debug!("Starting lexical scan",
            "input_bytes" => input.len()
        );

        let mut scanner = Scanner::new(input);
        states::run(&mut scanner);

        let stream = scanner.into_stream();

        if self.preferences.collect_detailed_metrics {
            for lexeme in &stream {
                self.metrics.record_lexeme(lexeme);
            }
            self.metrics.lines = stream.current_line_number();
        }

        // Scan failures were already logged by the scanner with their codes
        if !stream.has_error() && self.preferences.log_lexeme_statistics {
            log_success!(codes::success::SCAN_COMPLETE, "Lexical scan completed",
                "lexemes" => stream.len(),
                "values" => self.metrics.value_lexemes,
                "comments" => self.metrics.comment_lexemes,
                "lines" => self.metrics.lines
            );
        }

        stream
    }

    /// Metrics from the most recent scan
    pub fn metrics(&self) -> &ScanMetrics {
        &self.metrics
    }

    /// Current preferences
    pub fn preferences(&self) -> &LexerPreferences {
        &self.preferences
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

/// Tokenize a document with default preferences
pub fn scan(input: &str) -> LexemeStream {
    Lexer::new().scan(input)
}
