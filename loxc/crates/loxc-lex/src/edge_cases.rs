//! Edge case tests for loxc-lex

#[cfg(test)]
mod tests {
    use crate::{Lexer, LexerConfig, Token, TokenKind};
    use loxc_util::Handler;

    fn lex_all(source: &str) -> Vec<Token> {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new(source, &mut handler);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            if token.is_eof() {
                break;
            }
            tokens.push(token);
        }
        tokens
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).iter().map(Token::kind).collect()
    }

    fn error_count(source: &str) -> usize {
        let mut h = Handler::new();
        let _ = Lexer::new(source, &mut h).tokenize();
        h.error_count()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t[0].kind(), TokenKind::Identifier);
        assert_eq!(t[0].lexeme(), "x");
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("var {} = 1;", name));
        assert!(t.iter().any(|tok| tok.lexeme() == name));
    }

    #[test]
    fn test_edge_long_string() {
        let body = "x".repeat(100_000);
        let t = lex_all(&format!("\"{}\"", body));
        assert_eq!(t[0].literal(), Some(body.as_str()));
    }

    #[test]
    fn test_edge_keywords_not_idents() {
        assert_eq!(kinds("fun var if"), vec![TokenKind::Fun, TokenKind::Var, TokenKind::If]);
    }

    #[test]
    fn test_edge_all_keywords() {
        let t = kinds("and class else false for fun if nil or print return super this true var while");
        assert_eq!(t.len(), 16);
        assert!(t.iter().all(TokenKind::is_keyword));
    }

    #[test]
    fn test_edge_all_operators() {
        let t = kinds("- + ; * / ! != = == < <= > >=");
        assert!(t.iter().filter(|k| **k != TokenKind::Semicolon).all(TokenKind::is_operator));
        assert_eq!(t.len(), 13);
    }

    #[test]
    fn test_edge_nested_delimiters() {
        let t = kinds("((()))");
        assert_eq!(t.iter().filter(|k| **k == TokenKind::LeftParen).count(), 3);
    }

    #[test]
    fn test_edge_case_sensitivity() {
        assert_eq!(kinds("Var var"), vec![TokenKind::Identifier, TokenKind::Var]);
    }

    #[test]
    fn test_edge_bools_and_nil() {
        assert_eq!(
            kinds("true false nil"),
            vec![TokenKind::True, TokenKind::False, TokenKind::Nil]
        );
    }

    #[test]
    fn test_edge_underscore() {
        assert_eq!(kinds("_"), vec![TokenKind::Identifier]);
    }

    #[test]
    fn test_edge_consec_ops() {
        assert_eq!(kinds("+++").len(), 3);
    }

    #[test]
    fn test_edge_whitespace_variations() {
        let t = lex_all("var\tx\r\n=\n1");
        assert_eq!(t.len(), 4);
        assert_eq!(t[3].line(), 3);
    }

    #[test]
    fn test_edge_leading_zeros() {
        assert_eq!(lex_all("007")[0].literal(), Some("7.0"));
    }

    #[test]
    fn test_edge_comment_without_newline() {
        assert!(lex_all("// nothing else").is_empty());
    }

    #[test]
    fn test_edge_division_next_to_comment() {
        assert_eq!(kinds("1/2//3"), vec![TokenKind::Number, TokenKind::Slash, TokenKind::Number]);
    }

    #[test]
    fn test_edge_string_containing_comment() {
        let t = lex_all("\"// not a comment\"");
        assert_eq!(t[0].literal(), Some("// not a comment"));
    }

    #[test]
    fn test_edge_eof_line_after_trailing_newline() {
        let mut h = Handler::new();
        let t = Lexer::new("x\n", &mut h).tokenize();
        assert_eq!(t[1].line(), 2);
    }

    #[test]
    fn test_edge_crlf_counts_one_line() {
        let mut h = Handler::new();
        let t = Lexer::new("a\r\nb", &mut h).tokenize();
        assert_eq!(t[1].line(), 2);
    }

    #[test]
    fn test_edge_bom_only_at_start() {
        assert_eq!(error_count("\u{FEFF}x"), 0);
        assert_eq!(error_count("x\u{FEFF}"), 1);
    }

    #[test]
    fn test_edge_combining_mark_continues_identifier() {
        let t = lex_all("e\u{0301}");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].lexeme(), "e\u{0301}");
    }

    #[test]
    fn test_edge_basic_mode_unicode_digits() {
        let mut h = Handler::new();
        let t = Lexer::with_config("x٣", &mut h, LexerConfig::BASIC).tokenize();
        assert_eq!(t[0].lexeme(), "x٣");
        assert!(!h.has_errors());
    }

    // ==================== ERROR CASES ====================

    #[test]
    fn test_err_unterminated_string() {
        let mut h = Handler::new();
        let t = Lexer::new("\"unterminated", &mut h).next_token();
        assert!(t.is_eof());
        assert!(h.has_errors());
    }

    #[test]
    fn test_err_invalid_chars() {
        assert_eq!(error_count("@#$%^&"), 6);
    }

    #[test]
    fn test_err_ascii_punctuation_not_in_lox() {
        assert_eq!(error_count("[ ] : ? | ~ ` \\ '"), 9);
    }

    #[test]
    fn test_err_mixed_valid_invalid() {
        let mut h = Handler::new();
        let t = Lexer::new("var x = # 1;", &mut h).tokenize();
        assert_eq!(t.len(), 6);
        assert_eq!(h.error_count(), 1);
    }

    #[test]
    fn test_err_each_bad_char_reported_once() {
        let mut h = Handler::new();
        let _ = Lexer::new("@\n@\n@", &mut h).tokenize();
        let lines: Vec<_> = h.diagnostics().iter().map(|d| d.line()).collect();
        assert_eq!(lines, vec![1, 2, 3]);
    }

    #[test]
    fn test_err_unicode_unexpected_character_message() {
        let mut h = Handler::new();
        let _ = Lexer::new("«", &mut h).tokenize();
        assert_eq!(
            h.diagnostics()[0].to_string(),
            "[line 1] Error: Unexpected character: «."
        );
    }

    #[test]
    fn test_err_unterminated_string_after_tokens() {
        let mut h = Handler::new();
        let t = Lexer::new("print \"a\" + \"b", &mut h).tokenize();
        let kinds: Vec<_> = t.iter().map(Token::kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Print, TokenKind::String, TokenKind::Plus, TokenKind::Eof]
        );
        assert_eq!(h.error_count(), 1);
    }
}
