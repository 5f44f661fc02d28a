//! Identifier and keyword lexing.

use crate::token::Token;
use crate::unicode::continues_identifier;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Consumes the longest run of identifier characters, then looks the text
    /// up in the keyword table. Keyword matching is case-sensitive.
    pub fn lex_identifier(&mut self) -> Token {
        let config = self.config;
        self.cursor.advance();
        self.cursor.advance_while(|c| continues_identifier(c, &config));

        let text = self.lexeme();
        Token::new(self.keywords.classify(text), text, self.cursor.line())
    }
}
