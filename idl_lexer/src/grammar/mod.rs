//! Grammar definitions for the identity DSL
//!
//! Entity keywords, per-entity identifier character sets, and the shared
//! character classes used by the scanner states.

pub mod entities;

pub use entities::{
    is_line_ending, is_list_separator, is_quoted_char, is_value_char, EntityKind,
};
