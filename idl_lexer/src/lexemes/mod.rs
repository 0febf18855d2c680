//! Lexeme model for the identity DSL
//!
//! The value type produced by the scanner and the ordered stream that
//! accumulates it, including the derived line-number computation used for
//! diagnostics.

pub mod lexeme;
pub mod stream;

pub use lexeme::{Lexeme, LexemeKind};
pub use stream::LexemeStream;
