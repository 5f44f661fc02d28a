//! Number literal lexing.
//!
//! Lox numbers are decimal: a run of ASCII digits with an optional fraction.
//! There are no signs, exponents or radix prefixes. Every number is a double.

use crate::error::LexError;
use crate::token::Token;
use crate::unicode::continues_identifier;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal starting at an ASCII digit.
    ///
    /// The `.` joins the number only when a digit follows it, so `12.` is a
    /// number and a dot. A run that keeps going after the number ends, like
    /// `1.2.3` or `123abc`, is consumed whole and reported as
    /// [`LexError::InvalidNumber`].
    pub fn lex_number(&mut self) -> Option<Token> {
        self.cursor.advance_while(|c| c.is_ascii_digit());

        if self.cursor.current_char() == '.' && self.cursor.lookahead().is_ascii_digit() {
            self.cursor.advance();
            self.cursor.advance_while(|c| c.is_ascii_digit());
        }

        if self.consume_malformed_tail() {
            self.report_error(LexError::InvalidNumber);
            return None;
        }

        let text = self.lexeme();
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Some(Token::number(
                text,
                format_number_literal(value),
                self.cursor.line(),
            )),
            _ => {
                self.report_error(LexError::InvalidNumber);
                None
            }
        }
    }

    /// Consumes anything glued to the end of a number.
    ///
    /// Returns true if something was consumed.
    fn consume_malformed_tail(&mut self) -> bool {
        let start = self.cursor.position();
        loop {
            let c = self.cursor.current_char();
            if self.cursor.is_at_end() {
                break;
            }
            let dotted_digit = c == '.' && self.cursor.lookahead().is_ascii_digit();
            if dotted_digit || continues_identifier(c, &self.config) {
                self.cursor.advance();
            } else {
                break;
            }
        }
        self.cursor.position() != start
    }
}

/// Renders a parsed number the way it is printed in token output.
///
/// Integral values keep exactly one fractional digit. Everything else uses
/// the shortest digits that parse back to the same value, switching to
/// exponent form (`1e-07`, `1.2345675e+06`) when the decimal exponent is
/// below -4 or at least 6.
///
/// # Example
///
/// ```
/// use loxc_lex::format_number_literal;
///
/// assert_eq!(format_number_literal(1234.0), "1234.0");
/// assert_eq!(format_number_literal(3.14), "3.14");
/// assert_eq!(format_number_literal(0.0000001), "1e-07");
/// ```
pub fn format_number_literal(value: f64) -> String {
    if value.fract() == 0.0 {
        return format!("{:.1}", value);
    }

    // `{:e}` gives the shortest round-trip digits as `d.ddde<exp>`
    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    if exponent < MIN_PLAIN_EXPONENT || exponent >= MAX_PLAIN_EXPONENT {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.unsigned_abs())
    } else {
        value.to_string()
    }
}

/// Smallest decimal exponent printed without exponent notation.
const MIN_PLAIN_EXPONENT: i32 = -4;

/// Decimal exponents from here up are printed in exponent notation.
const MAX_PLAIN_EXPONENT: i32 = 6;
