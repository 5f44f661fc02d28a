//! String literal lexing.
//!
//! Lox strings have no escape sequences and may span lines. The literal value
//! is the raw text between the quotes.

use crate::error::LexError;
use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal starting at the opening quote.
    ///
    /// Returns `None` after reporting an unterminated string; the rest of
    /// the source has been consumed by then.
    pub fn lex_string(&mut self) -> Option<Token> {
        self.cursor.advance();
        let content_start = self.cursor.position();

        self.cursor.advance_while(|c| c != '"');

        if self.cursor.is_at_end() {
            self.report_error(LexError::UnterminatedString);
            return None;
        }

        let value = self.cursor.slice_from(content_start);
        self.cursor.advance();

        Some(Token::string(self.lexeme(), value, self.cursor.line()))
    }
}
