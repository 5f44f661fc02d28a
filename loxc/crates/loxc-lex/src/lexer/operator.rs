//! Operator and punctuation lexing.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a one-character token.
    pub(crate) fn lex_single(&mut self, kind: TokenKind) -> Token {
        self.cursor.advance();
        Token::new(kind, self.lexeme(), self.cursor.line())
    }

    /// Lexes `single`, or `with_equals` when the next character is `=`.
    ///
    /// Used for `!`, `=`, `<` and `>`. Longest match wins, so `==` is one
    /// token and `===` is `==` followed by `=`.
    pub(crate) fn lex_with_equals(&mut self, single: TokenKind, with_equals: TokenKind) -> Token {
        let kind = if self.cursor.matches_next('=') {
            self.cursor.advance();
            with_equals
        } else {
            single
        };
        self.cursor.advance();
        Token::new(kind, self.lexeme(), self.cursor.line())
    }
}
