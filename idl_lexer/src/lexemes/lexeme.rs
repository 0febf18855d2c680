//! Lexeme value type
//!
//! A lexeme is a classified span of the input text. Keyword lexemes carry
//! empty text; the keyword is recognized by kind alone.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of lexeme kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LexemeKind {
    /// End of input; always the last lexeme of a successful scan
    Eof,
    /// A full `//` comment line, text included
    Comment,
    /// A maximal run of line-ending characters, emitted as one lexeme
    Eol,
    /// Terminal scan failure; text is the formatted diagnostic
    Error,
    /// The tab run introducing a tag/label line
    Space,
    /// An identifier, list item, or tag/label field
    Value,
    /// The `Account` keyword (empty text)
    Account,
    /// The `Group` keyword (empty text)
    Group,
    /// The `User` keyword (empty text)
    User,
    /// The `Role` keyword (empty text)
    Role,
}

impl LexemeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eof => "EOF",
            Self::Comment => "Comment",
            Self::Eol => "EOL",
            Self::Error => "Error",
            Self::Space => "Space",
            Self::Value => "Value",
            Self::Account => "Account",
            Self::Group => "Group",
            Self::User => "User",
            Self::Role => "Role",
        }
    }

    /// Keyword kinds mark an entity head's position in the stream
    pub fn is_keyword(&self) -> bool {
        matches!(self, Self::Account | Self::Group | Self::User | Self::Role)
    }

    /// Terminal kinds end a scan
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Eof | Self::Error)
    }
}

impl fmt::Display for LexemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A classified span of the input text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexeme {
    pub kind: LexemeKind,
    pub text: String,
}

impl Lexeme {
    /// Create a new lexeme
    pub fn new(kind: LexemeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Create a lexeme with no text (keywords, EOF)
    pub fn bare(kind: LexemeKind) -> Self {
        Self {
            kind,
            text: String::new(),
        }
    }

    /// Check if this lexeme is an error
    pub fn is_error(&self) -> bool {
        self.kind == LexemeKind::Error
    }

    /// Check if this lexeme ends a scan
    pub fn is_terminal(&self) -> bool {
        self.kind.is_terminal()
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}({:?})", self.kind, self.text)
        }
    }
}
