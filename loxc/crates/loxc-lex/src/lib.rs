//! loxc-lex - Lexical Analyzer for the Lox Programming Language
//!
//! This crate turns Lox source text into a flat sequence of classified
//! tokens. Scanning never stops at a malformed lexeme: the problem is
//! reported to a [`loxc_util::Handler`] and the scanner moves on, so a single
//! pass finds every lexical error.
//!
//! # Example Usage
//!
//! ```
//! use loxc_util::Handler;
//! use loxc_lex::{Lexer, TokenKind};
//!
//! let source = "print 1 + 2;";
//! let mut handler = Handler::new();
//! let mut lexer = Lexer::new(source, &mut handler);
//!
//! // Get tokens one at a time
//! assert_eq!(lexer.next_token().kind(), TokenKind::Print);
//!
//! // Or iterate through the rest (the iterator stops before EOF)
//! let rest: Vec<_> = lexer.map(|t| t.lexeme().to_string()).collect();
//! assert_eq!(rest, vec!["1", "+", "2", ";"]);
//! ```
//!
//! Or scan everything at once and collect the errors:
//!
//! ```
//! use loxc_lex::{scan, LexerConfig};
//!
//! let output = scan("var s = \"open", LexerConfig::default());
//! assert!(output.had_errors());
//! assert_eq!(output.tokens.len(), 4); // var s = EOF
//! assert_eq!(
//!     output.diagnostics[0].to_string(),
//!     "[line 1] Error: Unterminated string."
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, the keyword table and tokens
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`unicode`] - Identifier character classes
//! - [`error`] - Lexical error kinds
//! - [`config`] - Lexer options
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `and`, `class`, `else`, `false`, `for`, `fun`, `if`, `nil`, `or`,
//! `print`, `return`, `super`, `this`, `true`, `var`, `while`
//!
//! ## Literals
//!
//! - **Number**: `42`, `3.14` (always a double, rendered as `42.0`, `3.14`)
//! - **String**: `"hello"` (no escapes, may span lines)
//! - **Identifier**: `name`, `_tmp`, `café`, and with Unicode identifiers
//!   enabled, `😀` or `price€`
//!
//! ## Operators and punctuation
//!
//! `( ) { } , . - + ; * /` and `! != = == < <= > >=`
//!
//! ## Special
//!
//! - **EOF**: End of input marker, always the last token

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;
#[cfg(test)]
mod properties;

use loxc_util::{Diagnostic, Handler};

// Re-export main types for convenience
pub use config::LexerConfig;
pub use cursor::Cursor;
pub use error::LexError;
pub use lexer::{format_number_literal, Lexer};
pub use token::{KeywordTable, Token, TokenKind};

/// Everything one scan produced.
#[derive(Clone, Debug, Default)]
pub struct ScanOutput {
    /// Tokens in source order, ending with `Eof`.
    pub tokens: Vec<Token>,
    /// Lexical errors in the order they were found.
    pub diagnostics: Vec<Diagnostic>,
}

impl ScanOutput {
    /// Returns true if any lexical error was found.
    pub fn had_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Scans `source` to completion with a fresh handler.
pub fn scan(source: &str, config: LexerConfig) -> ScanOutput {
    let mut handler = Handler::new();
    let tokens = Lexer::with_config(source, &mut handler, config).tokenize();
    ScanOutput {
        tokens,
        diagnostics: handler.take_diagnostics(),
    }
}
