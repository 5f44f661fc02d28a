//! Lexical error kinds.
//!
//! None of these stop the lexer. Each one is turned into a
//! [`loxc_util::Diagnostic`] and scanning resumes at the next character.

use loxc_util::DiagnosticCode;
use thiserror::Error;

/// A recoverable problem found while scanning.
///
/// The `Display` text is the message part of the rendered report, e.g.
/// `[line 3] Error: Unterminated string.`
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that starts no token.
    #[error("Unexpected character: {0}")]
    UnexpectedCharacter(char),

    /// A `"` with no closing quote before the end of input.
    #[error("Unterminated string")]
    UnterminatedString,

    /// A digit run that does not form a number.
    #[error("Invalid number")]
    InvalidNumber,
}

impl LexError {
    /// Stable diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnexpectedCharacter(_) => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            LexError::UnterminatedString => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            LexError::InvalidNumber => DiagnosticCode::E_LEXER_INVALID_NUMBER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            LexError::UnexpectedCharacter('@').to_string(),
            "Unexpected character: @"
        );
        assert_eq!(LexError::UnterminatedString.to_string(), "Unterminated string");
        assert_eq!(LexError::InvalidNumber.to_string(), "Invalid number");
    }

    #[test]
    fn test_codes() {
        assert_eq!(LexError::UnexpectedCharacter('#').code().as_str(), "E1001");
        assert_eq!(LexError::UnterminatedString.code().as_str(), "E1002");
        assert_eq!(LexError::InvalidNumber.code().as_str(), "E1003");
    }
}
