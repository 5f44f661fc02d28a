//! Comment and whitespace skipping.

use crate::Lexer;

const BYTE_ORDER_MARK: char = '\u{FEFF}';

impl<'a> Lexer<'a> {
    /// Skips whitespace and comments.
    ///
    /// Called before lexing each token. A byte order mark is skipped once, at
    /// the very start of the source.
    pub fn skip_whitespace_and_comments(&mut self) {
        if !self.bom_checked {
            self.bom_checked = true;
            if self.cursor.remaining().starts_with(BYTE_ORDER_MARK) {
                self.cursor.advance();
            }
        }

        loop {
            match self.cursor.current_char() {
                _ if self.cursor.is_at_end() => return,
                '/' if self.cursor.matches_next('/') => self.skip_line_comment(),
                c if c.is_whitespace() => self.cursor.advance(),
                _ => return,
            }
        }
    }

    /// Skips a line comment up to, but not including, the line feed.
    pub fn skip_line_comment(&mut self) {
        self.cursor.advance_while(|c| c != '\n');
    }
}
