//! Entity keyword system
//!
//! The four entity kinds share one grammar shape; they differ only in the
//! identifier character set and (for accounts) a fixed length rule. Character
//! classes are const membership tests rather than per-call string scans.

use crate::lexemes::LexemeKind;
use serde::{Deserialize, Serialize};

/// Number of digits in a valid account identifier
pub const ACCOUNT_ID_LENGTH: usize = 12;

/// Identifier character set for groups, users, roles, and tag fields
pub const fn is_value_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '@' | '£' | '$')
}

/// Quoted tag fields additionally allow literal spaces
pub const fn is_quoted_char(c: char) -> bool {
    is_value_char(c) || c == ' '
}

/// CR and LF are both line separators; a maximal run becomes one EOL lexeme
pub const fn is_line_ending(c: char) -> bool {
    matches!(c, '\r' | '\n')
}

/// Identifier list separator: any run of commas and spaces
pub const fn is_list_separator(c: char) -> bool {
    matches!(c, ',' | ' ')
}

/// The entity kinds recognized at the top level of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Account,
    Group,
    User,
    Role,
}

impl EntityKind {
    /// All kinds, in dispatch order
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Account,
        EntityKind::Group,
        EntityKind::User,
        EntityKind::Role,
    ];

    /// The keyword exactly as it appears in source
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Account => "Account",
            Self::Group => "Group",
            Self::User => "User",
            Self::Role => "Role",
        }
    }

    /// The keyword followed by the mandatory space before the identifier list
    pub const fn keyword_with_space(self) -> &'static str {
        match self {
            Self::Account => "Account ",
            Self::Group => "Group ",
            Self::User => "User ",
            Self::Role => "Role ",
        }
    }

    /// Lowercase label used in diagnostics ("Invalid group ID ...")
    pub const fn label(self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::Group => "group",
            Self::User => "user",
            Self::Role => "role",
        }
    }

    /// The lexeme kind marking this keyword's position in the stream
    pub const fn lexeme_kind(self) -> LexemeKind {
        match self {
            Self::Account => LexemeKind::Account,
            Self::Group => LexemeKind::Group,
            Self::User => LexemeKind::User,
            Self::Role => LexemeKind::Role,
        }
    }

    /// Identifier character set for this entity
    pub const fn accepts(self, c: char) -> bool {
        match self {
            Self::Account => c.is_ascii_digit(),
            Self::Group | Self::User | Self::Role => is_value_char(c),
        }
    }

    /// Fixed identifier length, where the entity imposes one
    pub const fn required_length(self) -> Option<usize> {
        match self {
            Self::Account => Some(ACCOUNT_ID_LENGTH),
            Self::Group | Self::User | Self::Role => None,
        }
    }

    /// Parse an exact keyword string
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s {
            "Account" => Some(Self::Account),
            "Group" => Some(Self::Group),
            "User" => Some(Self::User),
            "Role" => Some(Self::Role),
            _ => None,
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}
