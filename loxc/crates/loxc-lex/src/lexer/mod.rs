//! Lexer module.
//!
//! The scanner is split by lexeme family:
//! - `core` - Lexer struct, dispatch and error reporting
//! - `comment` - whitespace and line comment skipping
//! - `operator` - punctuation and one-or-two character operators
//! - `string` - string literals
//! - `number` - number literals and their canonical rendering
//! - `identifier` - identifiers and keywords

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::Lexer;
pub use number::format_number_literal;
