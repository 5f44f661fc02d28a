//! Token definitions for the Lox lexer.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact source text it was read
//! from, the normalized literal value for strings and numbers, and the line
//! it ended on.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::Serialize;

/// The closed set of token kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    // ========================================================================
    // Single-character punctuation
    // ========================================================================
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `*`
    Star,
    /// `.`
    Dot,
    /// `,`
    Comma,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `/`
    Slash,
    /// `;`
    Semicolon,

    // ========================================================================
    // One or two character operators
    // ========================================================================
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,

    // ========================================================================
    // Literals
    // ========================================================================
    /// `"..."`
    String,
    /// `123`, `4.5`
    Number,
    /// Any name that is not a keyword.
    Identifier,

    // ========================================================================
    // Keywords
    // ========================================================================
    /// `and`
    And,
    /// `class`
    Class,
    /// `else`
    Else,
    /// `false`
    False,
    /// `for`
    For,
    /// `fun`
    Fun,
    /// `if`
    If,
    /// `nil`
    Nil,
    /// `or`
    Or,
    /// `print`
    Print,
    /// `return`
    Return,
    /// `super`
    Super,
    /// `this`
    This,
    /// `true`
    True,
    /// `var`
    Var,
    /// `while`
    While,

    /// End of input.
    Eof,
}

impl TokenKind {
    /// Every keyword together with its source spelling.
    pub const KEYWORDS: [(&'static str, TokenKind); 16] = [
        ("and", TokenKind::And),
        ("class", TokenKind::Class),
        ("else", TokenKind::Else),
        ("false", TokenKind::False),
        ("for", TokenKind::For),
        ("fun", TokenKind::Fun),
        ("if", TokenKind::If),
        ("nil", TokenKind::Nil),
        ("or", TokenKind::Or),
        ("print", TokenKind::Print),
        ("return", TokenKind::Return),
        ("super", TokenKind::Super),
        ("this", TokenKind::This),
        ("true", TokenKind::True),
        ("var", TokenKind::Var),
        ("while", TokenKind::While),
    ];

    /// The fixed uppercase name used in token listings.
    ///
    /// # Example
    ///
    /// ```
    /// use loxc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::BangEqual.as_str(), "BANG_EQUAL");
    /// assert_eq!(TokenKind::Eof.as_str(), "EOF");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Star => "STAR",
            TokenKind::Dot => "DOT",
            TokenKind::Comma => "COMMA",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Slash => "SLASH",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::And => "AND",
            TokenKind::Class => "CLASS",
            TokenKind::Else => "ELSE",
            TokenKind::False => "FALSE",
            TokenKind::For => "FOR",
            TokenKind::Fun => "FUN",
            TokenKind::If => "IF",
            TokenKind::Nil => "NIL",
            TokenKind::Or => "OR",
            TokenKind::Print => "PRINT",
            TokenKind::Return => "RETURN",
            TokenKind::Super => "SUPER",
            TokenKind::This => "THIS",
            TokenKind::True => "TRUE",
            TokenKind::Var => "VAR",
            TokenKind::While => "WHILE",
            TokenKind::Eof => "EOF",
        }
    }

    /// Returns true for the sixteen reserved words.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::And
                | TokenKind::Class
                | TokenKind::Else
                | TokenKind::False
                | TokenKind::For
                | TokenKind::Fun
                | TokenKind::If
                | TokenKind::Nil
                | TokenKind::Or
                | TokenKind::Print
                | TokenKind::Return
                | TokenKind::Super
                | TokenKind::This
                | TokenKind::True
                | TokenKind::Var
                | TokenKind::While
        )
    }

    /// Returns true for string, number and identifier tokens.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::String | TokenKind::Number | TokenKind::Identifier
        )
    }

    /// Returns true for kinds that carry a normalized literal value.
    pub fn has_literal_value(&self) -> bool {
        matches!(self, TokenKind::String | TokenKind::Number)
    }

    /// Returns true for arithmetic, access and comparison operators.
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Star
                | TokenKind::Dot
                | TokenKind::Comma
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Slash
                | TokenKind::Bang
                | TokenKind::BangEqual
                | TokenKind::Equal
                | TokenKind::EqualEqual
                | TokenKind::Less
                | TokenKind::LessEqual
                | TokenKind::Greater
                | TokenKind::GreaterEqual
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable mapping from keyword spelling to [`TokenKind`].
///
/// Built once when a lexer is created and only read afterwards.
///
/// # Example
///
/// ```
/// use loxc_lex::{KeywordTable, TokenKind};
///
/// let keywords = KeywordTable::new();
/// assert_eq!(keywords.get("class"), Some(TokenKind::Class));
/// assert_eq!(keywords.get("classify"), None);
/// ```
#[derive(Clone, Debug)]
pub struct KeywordTable {
    map: FxHashMap<&'static str, TokenKind>,
}

impl KeywordTable {
    /// Builds the table of the sixteen Lox keywords.
    pub fn new() -> Self {
        Self {
            map: TokenKind::KEYWORDS.iter().copied().collect(),
        }
    }

    /// Looks up an exact lexeme.
    #[inline]
    pub fn get(&self, text: &str) -> Option<TokenKind> {
        self.map.get(text).copied()
    }

    /// Classifies an identifier-shaped lexeme as a keyword or `Identifier`.
    #[inline]
    pub fn classify(&self, text: &str) -> TokenKind {
        self.get(text).unwrap_or(TokenKind::Identifier)
    }

    /// Number of keywords in the table.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::new()
    }
}

/// A classified lexeme.
///
/// Tokens are immutable once built. The constructors keep the rule that only
/// `String` and `Number` tokens carry a literal value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    literal: Option<String>,
    line: u32,
}

impl Token {
    /// Creates a token without a literal value.
    ///
    /// Use [`Token::string`] or [`Token::number`] for literal-bearing kinds.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32) -> Self {
        debug_assert!(
            !kind.has_literal_value(),
            "{kind} tokens must be built with their literal value"
        );
        Self {
            kind,
            lexeme: lexeme.into(),
            literal: None,
            line,
        }
    }

    /// Creates a `String` token; `value` is the text between the quotes.
    pub fn string(lexeme: impl Into<String>, value: impl Into<String>, line: u32) -> Self {
        Self {
            kind: TokenKind::String,
            lexeme: lexeme.into(),
            literal: Some(value.into()),
            line,
        }
    }

    /// Creates a `Number` token; `value` is the canonical rendering.
    pub fn number(lexeme: impl Into<String>, value: impl Into<String>, line: u32) -> Self {
        Self {
            kind: TokenKind::Number,
            lexeme: lexeme.into(),
            literal: Some(value.into()),
            line,
        }
    }

    /// Creates the end-of-input token.
    pub fn eof(line: u32) -> Self {
        Self {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            literal: None,
            line,
        }
    }

    /// The token's kind.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The exact source text of the token.
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// The normalized literal value, present for strings and numbers.
    pub fn literal(&self) -> Option<&str> {
        self.literal.as_deref()
    }

    /// Line the token ended on (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns true for the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// Renders `<KIND> <LEXEME> <LITERAL>`, with `null` for a missing literal.
///
/// # Example
///
/// ```
/// use loxc_lex::Token;
///
/// assert_eq!(Token::number("42", "42.0", 1).to_string(), "NUMBER 42 42.0");
/// assert_eq!(Token::eof(1).to_string(), "EOF  null");
/// ```
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.kind,
            self.lexeme,
            self.literal.as_deref().unwrap_or("null")
        )
    }
}
