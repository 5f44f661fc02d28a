//! Unicode utilities for the Lox lexer.
//!
//! This module decides which code points may start or continue an
//! identifier. There are two rules, selected by
//! [`LexerConfig::unicode_identifiers`](crate::LexerConfig):
//!
//! - **basic**: `_` or a Unicode alphabetic character starts an identifier;
//!   `_` or a Unicode alphanumeric character continues one.
//! - **extended**: everything in the basic rule, plus any non-ASCII code
//!   point whose general category is Letter (L*), Mark (M*), Number (N*) or
//!   Symbol (S*), plus the emoji glue characters U+200D, U+FE0E and U+FE0F.
//!   Punctuation (P*), separators (Z*) and the other categories (C*) never
//!   qualify.
//!
//! In both rules ASCII stays strict: only letters, digits and `_`. The
//! reserved symbols `@ # $ % ^ & *` are rejected explicitly.

use unicode_general_category::{get_general_category, GeneralCategory};

use crate::config::LexerConfig;

/// U+200D ZERO WIDTH JOINER, glues emoji into one glyph.
pub const ZERO_WIDTH_JOINER: char = '\u{200D}';

/// U+FE0E VARIATION SELECTOR-15, text presentation.
pub const TEXT_PRESENTATION_SELECTOR: char = '\u{FE0E}';

/// U+FE0F VARIATION SELECTOR-16, emoji presentation.
pub const EMOJI_PRESENTATION_SELECTOR: char = '\u{FE0F}';

/// Symbols that never form part of an identifier.
pub const RESERVED_SYMBOLS: [char; 7] = ['@', '#', '$', '%', '^', '&', '*'];

/// Checks if a character is one of the reserved symbols.
///
/// # Example
///
/// ```
/// use loxc_lex::unicode::is_reserved_symbol;
///
/// assert!(is_reserved_symbol('@'));
/// assert!(is_reserved_symbol('$'));
/// assert!(!is_reserved_symbol('_'));
/// ```
#[inline]
pub fn is_reserved_symbol(c: char) -> bool {
    RESERVED_SYMBOLS.contains(&c)
}

/// Checks if a character only exists to shape an emoji sequence.
#[inline]
pub fn is_emoji_glue(c: char) -> bool {
    matches!(
        c,
        ZERO_WIDTH_JOINER | TEXT_PRESENTATION_SELECTOR | EMOJI_PRESENTATION_SELECTOR
    )
}

/// Checks if a character is valid as the start of an identifier.
///
/// # Example
///
/// ```
/// use loxc_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('α'));  // Greek alpha
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('+'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Checks if a character is valid as a continuation of an identifier.
///
/// # Example
///
/// ```
/// use loxc_lex::unicode::is_ident_continue;
///
/// assert!(is_ident_continue('a'));
/// assert!(is_ident_continue('1'));
/// assert!(!is_ident_continue('-'));
/// assert!(!is_ident_continue(' '));
/// ```
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Checks if a character is a valid ASCII identifier continuation.
#[inline]
pub fn is_ascii_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a character belongs to an identifier under the extended rule.
///
/// # Example
///
/// ```
/// use loxc_lex::unicode::is_extended_ident_char;
///
/// assert!(is_extended_ident_char('x'));
/// assert!(is_extended_ident_char('😀'));
/// assert!(is_extended_ident_char('€'));
/// assert!(is_extended_ident_char('\u{200D}'));
/// assert!(!is_extended_ident_char('«'));  // punctuation
/// assert!(!is_extended_ident_char('@'));  // reserved
/// assert!(!is_extended_ident_char('+'));  // ASCII operator
/// ```
pub fn is_extended_ident_char(c: char) -> bool {
    if c.is_ascii() {
        return is_ascii_ident_continue(c) && !is_reserved_symbol(c);
    }
    if is_emoji_glue(c) {
        return true;
    }
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::NonspacingMark
            | GeneralCategory::SpacingMark
            | GeneralCategory::EnclosingMark
            | GeneralCategory::DecimalNumber
            | GeneralCategory::LetterNumber
            | GeneralCategory::OtherNumber
            | GeneralCategory::MathSymbol
            | GeneralCategory::CurrencySymbol
            | GeneralCategory::ModifierSymbol
            | GeneralCategory::OtherSymbol
    )
}

/// Identifier-start test for the given configuration.
///
/// ASCII digits are excluded in both modes; they always start a number.
#[inline]
pub fn starts_identifier(c: char, config: &LexerConfig) -> bool {
    if is_ident_start(c) {
        return true;
    }
    config.unicode_identifiers && !c.is_ascii_digit() && is_extended_ident_char(c)
}

/// Identifier-continue test for the given configuration.
#[inline]
pub fn continues_identifier(c: char, config: &LexerConfig) -> bool {
    if is_ident_continue(c) {
        return true;
    }
    config.unicode_identifiers && is_extended_ident_char(c)
}
