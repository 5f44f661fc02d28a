//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while walking the source one code point at a time. It handles UTF-8
//! correctly and tracks line/column information for error reporting.

/// Value returned by every peek past the end of the source.
pub const EOF_CHAR: char = '\0';

/// A cursor for traversing source code character by character.
///
/// The cursor only moves forward. Peeks past the end of the source return
/// [`EOF_CHAR`], so they never fail; whether the end has really been reached
/// is answered by [`Cursor::is_at_end`], which keeps an embedded NUL in the
/// source distinguishable from the end of input.
///
/// # Example
///
/// ```
/// use loxc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("var x;");
///
/// assert_eq!(cursor.current_char(), 'v');
/// assert_eq!(cursor.lookahead(), 'a');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'a');
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character at the cursor position.
    ///
    /// Returns [`EOF_CHAR`] if at the end of the source.
    ///
    /// # Example
    ///
    /// ```
    /// use loxc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("abc");
    /// assert_eq!(cursor.current_char(), 'a');
    /// ```
    #[inline]
    pub fn current_char(&self) -> char {
        self.char_at(self.position)
    }

    /// Returns the character one code point past the current one.
    ///
    /// # Example
    ///
    /// ```
    /// use loxc_lex::cursor::{Cursor, EOF_CHAR};
    ///
    /// let cursor = Cursor::new("αβ");
    /// assert_eq!(cursor.lookahead(), 'β');
    /// assert_eq!(Cursor::new("α").lookahead(), EOF_CHAR);
    /// ```
    #[inline]
    pub fn lookahead(&self) -> char {
        match self.current_width() {
            0 => EOF_CHAR,
            width => self.char_at(self.position + width),
        }
    }

    /// Returns true if the lookahead character equals `expected`.
    ///
    /// Nothing is consumed.
    ///
    /// # Example
    ///
    /// ```
    /// use loxc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("!=");
    /// assert!(cursor.matches_next('='));
    /// assert_eq!(cursor.current_char(), '!');
    /// ```
    #[inline]
    pub fn matches_next(&self, expected: char) -> bool {
        !self.is_at_end() && self.lookahead() == expected
    }

    /// Decodes the character starting at byte offset `pos`.
    #[inline]
    fn char_at(&self, pos: usize) -> char {
        if pos >= self.source.len() {
            return EOF_CHAR;
        }

        // Fast path for ASCII (most common case)
        let b = self.source.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }

        // Slow path for UTF-8
        self.source[pos..].chars().next().unwrap_or(EOF_CHAR)
    }

    /// Byte width of the current character, 0 at the end.
    #[inline]
    fn current_width(&self) -> usize {
        if self.is_at_end() {
            0
        } else {
            self.current_char().len_utf8()
        }
    }

    /// Advances the cursor past the current character.
    ///
    /// Consuming a line feed bumps the line counter and resets the column.
    /// Does nothing if already at end.
    ///
    /// # Example
    ///
    /// ```
    /// use loxc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\nb");
    /// cursor.advance();
    /// cursor.advance();
    /// assert_eq!(cursor.current_char(), 'b');
    /// assert_eq!(cursor.line(), 2);
    /// assert_eq!(cursor.column(), 1);
    /// ```
    #[inline]
    pub fn advance(&mut self) {
        let width = self.current_width();
        if width == 0 {
            return;
        }

        if self.current_char() == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.position += width;
    }

    /// Advances while `predicate` holds for the current character.
    pub fn advance_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns a slice of the source from `start` to the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use loxc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("var x");
    /// let start = cursor.position();
    /// cursor.advance_while(|c| c.is_alphabetic());
    /// assert_eq!(cursor.slice_from(start), "var");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }
}
