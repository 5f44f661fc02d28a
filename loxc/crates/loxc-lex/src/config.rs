//! Lexer configuration.

/// Knobs that change how source is classified.
///
/// # Example
///
/// ```
/// use loxc_lex::LexerConfig;
///
/// let config = LexerConfig::default().with_unicode_identifiers(false);
/// assert!(!config.unicode_identifiers);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexerConfig {
    /// Accept non-ASCII letters, marks, numbers, symbols, emoji joiners and
    /// variation selectors inside identifiers.
    ///
    /// See [`crate::unicode::is_extended_ident_char`] for the exact rule.
    pub unicode_identifiers: bool,
}

impl LexerConfig {
    /// Configuration with the extended identifier mode switched off.
    pub const BASIC: LexerConfig = LexerConfig {
        unicode_identifiers: false,
    };

    /// Sets the extended identifier mode.
    pub fn with_unicode_identifiers(mut self, enabled: bool) -> Self {
        self.unicode_identifiers = enabled;
        self
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            unicode_identifiers: true,
        }
    }
}
