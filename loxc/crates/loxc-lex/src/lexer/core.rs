//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the per-character dispatch
//! and error reporting.

use loxc_util::{DiagnosticBuilder, Handler, Span};
use tracing::{debug, trace};

use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{KeywordTable, Token, TokenKind};
use crate::unicode::starts_identifier;

/// Lexer for the Lox programming language.
///
/// The lexer transforms source text into a stream of tokens. Malformed
/// lexemes are reported to the [`Handler`] and skipped, so one pass finds
/// every lexical error in the file.
///
/// # Example
///
/// ```
/// use loxc_util::Handler;
/// use loxc_lex::{Lexer, TokenKind};
///
/// let mut handler = Handler::new();
/// let tokens = Lexer::new("var x = 1;", &mut handler).tokenize();
///
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         TokenKind::Var,
///         TokenKind::Identifier,
///         TokenKind::Equal,
///         TokenKind::Number,
///         TokenKind::Semicolon,
///         TokenKind::Eof,
///     ]
/// );
/// assert!(!handler.has_errors());
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Error handler for reporting lexical errors.
    handler: &'a mut Handler,

    /// Keyword spellings, built once per lexer.
    pub(crate) keywords: KeywordTable,

    /// Classification options.
    pub(crate) config: LexerConfig,

    /// Starting byte offset of the current token.
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,

    /// Whether the BOM (Byte Order Mark) has been checked.
    pub(crate) bom_checked: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer with the default configuration.
    pub fn new(source: &'a str, handler: &'a mut Handler) -> Self {
        Self::with_config(source, handler, LexerConfig::default())
    }

    /// Creates a new lexer with an explicit configuration.
    pub fn with_config(source: &'a str, handler: &'a mut Handler, config: LexerConfig) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            keywords: KeywordTable::new(),
            config,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            bom_checked: false,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Whitespace, comments and malformed lexemes produce nothing, so this
    /// keeps dispatching until a token is built. At the end of input it
    /// returns `Eof`, and keeps returning `Eof` on every later call.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace_and_comments();

            self.token_start = self.cursor.position();
            self.token_start_line = self.cursor.line();
            self.token_start_column = self.cursor.column();

            if self.cursor.is_at_end() {
                return Token::eof(self.cursor.line());
            }

            if let Some(token) = self.scan_token() {
                return token;
            }
        }
    }

    /// Scans the whole source.
    ///
    /// The result always ends with exactly one `Eof` token.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is_eof();
            tokens.push(token);
            if done {
                break;
            }
        }
        debug!(
            tokens = tokens.len(),
            errors = self.handler.error_count(),
            "scan finished"
        );
        tokens
    }

    /// Dispatches on the current character.
    ///
    /// Returns `None` when the lexeme was malformed and has been reported.
    fn scan_token(&mut self) -> Option<Token> {
        let token = match self.cursor.current_char() {
            '(' => self.lex_single(TokenKind::LeftParen),
            ')' => self.lex_single(TokenKind::RightParen),
            '{' => self.lex_single(TokenKind::LeftBrace),
            '}' => self.lex_single(TokenKind::RightBrace),
            '*' => self.lex_single(TokenKind::Star),
            '.' => self.lex_single(TokenKind::Dot),
            ',' => self.lex_single(TokenKind::Comma),
            '+' => self.lex_single(TokenKind::Plus),
            '-' => self.lex_single(TokenKind::Minus),
            ';' => self.lex_single(TokenKind::Semicolon),
            '/' => self.lex_single(TokenKind::Slash),
            '!' => self.lex_with_equals(TokenKind::Bang, TokenKind::BangEqual),
            '=' => self.lex_with_equals(TokenKind::Equal, TokenKind::EqualEqual),
            '<' => self.lex_with_equals(TokenKind::Less, TokenKind::LessEqual),
            '>' => self.lex_with_equals(TokenKind::Greater, TokenKind::GreaterEqual),
            '"' => return self.lex_string(),
            c if c.is_ascii_digit() => return self.lex_number(),
            c if starts_identifier(c, &self.config) => self.lex_identifier(),
            c => {
                self.cursor.advance();
                self.report_error(LexError::UnexpectedCharacter(c));
                return None;
            }
        };
        Some(token)
    }

    /// Text consumed since the current token started.
    pub(crate) fn lexeme(&self) -> &'a str {
        self.cursor.slice_from(self.token_start)
    }

    /// Reports a lexical error covering the current token.
    ///
    /// The reported line is the line the cursor is on, matching the line a
    /// token ending here would get.
    pub fn report_error(&mut self, error: LexError) {
        let span = Span::new(
            self.token_start,
            self.cursor.position(),
            self.cursor.line(),
            self.token_start_column,
        );
        trace!(
            code = %error.code(),
            line = span.line,
            start_line = self.token_start_line,
            "{}",
            error
        );
        DiagnosticBuilder::error(error.to_string())
            .code(error.code())
            .span(span)
            .emit(self.handler);
    }

    /// Returns true once any lexical error has been reported.
    pub fn had_errors(&self) -> bool {
        self.handler.has_errors()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

/// Yields every token before `Eof`.
///
/// Use [`Lexer::tokenize`] to get the terminated sequence.
impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}
