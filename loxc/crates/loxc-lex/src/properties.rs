//! Property-based tests for loxc-lex

#[cfg(test)]
mod tests {
    use crate::{scan, LexerConfig, Token, TokenKind};
    use proptest::prelude::*;

    fn lex_tokens(source: &str) -> Vec<Token> {
        let mut tokens = scan(source, LexerConfig::default()).tokens;
        tokens.pop();
        tokens
    }

    #[test]
    fn test_property_sequence_ends_with_single_eof() {
        proptest!(|(input in any::<String>())| {
            let tokens = scan(&input, LexerConfig::default()).tokens;
            assert!(tokens.last().map_or(false, Token::is_eof));
            assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
        });
    }

    #[test]
    fn test_property_lines_never_decrease() {
        proptest!(|(input in any::<String>())| {
            let tokens = scan(&input, LexerConfig::default()).tokens;
            for pair in tokens.windows(2) {
                assert!(pair[0].line() <= pair[1].line());
            }
            let newlines = input.matches('\n').count() as u32;
            assert_eq!(tokens.last().map(Token::line), Some(newlines + 1));
        });
    }

    #[test]
    fn test_property_literal_only_on_strings_and_numbers() {
        proptest!(|(input in any::<String>())| {
            for token in scan(&input, LexerConfig::default()).tokens {
                assert_eq!(token.literal().is_some(), token.kind().has_literal_value());
            }
        });
    }

    #[test]
    fn test_property_lexemes_appear_in_order() {
        proptest!(|(input in any::<String>(), basic in any::<bool>())| {
            let config = LexerConfig::default().with_unicode_identifiers(!basic);
            let mut rest = input.as_str();
            for token in scan(&input, config).tokens {
                let found = rest.find(token.lexeme());
                assert!(found.is_some(), "{:?} not found in {:?}", token.lexeme(), rest);
                let at = found.unwrap_or_default() + token.lexeme().len();
                rest = &rest[at..];
            }
        });
    }

    #[test]
    fn test_property_arbitrary_identifier_strings() {
        proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_]{0,100}")| {
            let tokens = lex_tokens(&input);
            assert_eq!(tokens.len(), 1);
            let kind = tokens[0].kind();
            assert!(kind == TokenKind::Identifier || kind.is_keyword());
            assert_eq!(tokens[0].lexeme(), input.as_str());
        });
    }

    #[test]
    fn test_property_arbitrary_integer_strings() {
        proptest!(|(input in "[0-9]{1,20}")| {
            let tokens = lex_tokens(&input);
            assert_eq!(tokens.len(), 1);
            assert_eq!(tokens[0].kind(), TokenKind::Number);
            assert!(tokens[0].literal().unwrap_or_default().ends_with(".0"));
        });
    }

    #[test]
    fn test_property_decimal_literal_round_trips() {
        proptest!(|(input in "[0-9]{1,8}\\.[0-9]{1,8}")| {
            let tokens = lex_tokens(&input);
            assert_eq!(tokens.len(), 1);
            let literal = tokens[0].literal().unwrap_or_default();
            let expected: f64 = input.parse().unwrap();
            assert_eq!(literal.parse::<f64>().ok(), Some(expected));
            if expected.fract() != 0.0 && (1e-4..1e6).contains(&expected) {
                assert!(!literal.contains('e'), "{} printed as {}", input, literal);
            }
        });
    }

    #[test]
    fn test_property_arbitrary_string_literals() {
        proptest!(|(input in "[^\"]{0,100}")| {
            let source = format!("\"{}\"", input);
            let tokens = lex_tokens(&source);
            assert_eq!(tokens.len(), 1);
            assert_eq!(tokens[0].kind(), TokenKind::String);
            assert_eq!(tokens[0].literal(), Some(input.as_str()));
        });
    }

    #[test]
    fn test_property_whitespace_is_ignored() {
        proptest!(|(spaces in 0..100usize)| {
            let whitespace = " ".repeat(spaces);
            let source = format!("{}var{}", whitespace, whitespace);
            let tokens = lex_tokens(&source);
            assert_eq!(tokens.len(), 1);
            assert_eq!(tokens[0].kind(), TokenKind::Var);
        });
    }
}
