//! Edge case tests for brewc-lex

#[cfg(test)]
mod tests {
    use brewc_util::Handler;
    use proptest::prelude::*;

    use crate::{tokenize, Lexer, TokenKind};

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut handler = Handler::new();
        tokenize(source, &mut handler)
            .unwrap()
            .iter()
            .filter(|t| t.is_default_channel())
            .map(|t| t.kind)
            .collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_edge_whitespace_only() {
        assert_eq!(kinds("  \t \u{000C} "), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10_000);
        let source = format!("def {} = 1", name);
        let mut handler = Handler::new();
        let tokens = tokenize(&source, &mut handler).unwrap();
        let ident = tokens.iter().find(|t| t.kind == TokenKind::Identifier).unwrap();
        assert_eq!(ident.text.len(), 10_000);
    }

    #[test]
    fn test_edge_deep_interpolation_nesting() {
        let mut source = String::new();
        for _ in 0..50 {
            source.push_str("\"a${");
        }
        source.push('x');
        for _ in 0..50 {
            source.push_str("}b\"");
        }
        let mut handler = Handler::new();
        let tokens = tokenize(&source, &mut handler).unwrap();
        let begins = tokens.iter().filter(|t| t.kind == TokenKind::GStringBegin).count();
        let ends = tokens.iter().filter(|t| t.kind == TokenKind::GStringEnd).count();
        assert_eq!(begins, 50);
        assert_eq!(ends, 50);
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_edge_empty_interpolation() {
        assert_eq!(
            kinds(r#""${}""#),
            vec![
                TokenKind::GStringBegin,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::GStringEnd,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_edge_dollar_runs_in_string() {
        let mut handler = Handler::new();
        let tokens = tokenize(r#""$$$$""#, &mut handler).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_edge_crlf_everywhere() {
        let mut handler = Handler::new();
        let tokens = tokenize("a\r\nb\r\n", &mut handler).unwrap();
        let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(rebuilt, "a\r\nb\r\n");
        let newlines = tokens.iter().filter(|t| t.kind == TokenKind::Nl).count();
        assert_eq!(newlines, 2);
    }

    #[test]
    fn test_edge_unicode_string_content() {
        let source = "\"héllo wörld 漢字\"";
        let mut handler = Handler::new();
        let tokens = tokenize(source, &mut handler).unwrap();
        assert_eq!(tokens[0].text, source);
    }

    #[test]
    fn test_edge_token_indices_cover_both_channels() {
        let mut handler = Handler::new();
        let tokens = tokenize("a b // c\nd", &mut handler).unwrap();
        for (i, token) in tokens.iter().enumerate() {
            assert_eq!(token.index, i as u64);
        }
    }

    #[test]
    fn test_edge_comments_in_source_order() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("/* a */ x // b\n/* c */", &mut handler);
        loop {
            if lexer.next_token().unwrap().kind == TokenKind::Eof {
                break;
            }
        }
        let texts: Vec<_> = lexer.comments().iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["/* a */", "// b", "/* c */"]);
    }

    #[test]
    fn test_edge_operator_soup() {
        assert_eq!(
            kinds("a?.b*.c.&d::e"),
            vec![
                TokenKind::Identifier,
                TokenKind::SafeDot,
                TokenKind::Identifier,
                TokenKind::SpreadDot,
                TokenKind::Identifier,
                TokenKind::MethodPointer,
                TokenKind::Identifier,
                TokenKind::MethodReference,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_edge_elvis_vs_ternary() {
        assert_eq!(
            kinds("a ?: b"),
            vec![
                TokenKind::Identifier,
                TokenKind::Elvis,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
        assert_eq!(
            kinds("a ? b : c"),
            vec![
                TokenKind::Identifier,
                TokenKind::Question,
                TokenKind::Identifier,
                TokenKind::Colon,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_edge_unclosed_delimiters_at_eof_are_tolerated() {
        // Balance is only checked on closers; truncated source still lexes.
        assert_eq!(
            kinds("f(a, [1, {"),
            vec![
                TokenKind::Identifier,
                TokenKind::LParen,
                TokenKind::Identifier,
                TokenKind::Comma,
                TokenKind::LBrack,
                TokenKind::IntegerLiteral,
                TokenKind::Comma,
                TokenKind::LBrace,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_edge_slashy_keeps_backslashes() {
        let mut handler = Handler::new();
        let tokens = tokenize(r"p = /\w+\s/", &mut handler).unwrap();
        let literal = tokens
            .iter()
            .find(|t| t.kind == TokenKind::StringLiteral)
            .unwrap();
        assert_eq!(literal.text, r"/\w+\s/");
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_edge_division_chain() {
        assert_eq!(
            kinds("a/b/c"),
            vec![
                TokenKind::Identifier,
                TokenKind::Div,
                TokenKind::Identifier,
                TokenKind::Div,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    // ==================== PROPERTIES ====================

    proptest! {
        // Closing delimiters are excluded: an unbalanced closer is the one
        // fatal lexer error, and everything else must round-trip.
        #[test]
        fn prop_round_trip(source in "[ a-z0-9+*=._$'\"/#!\\\\\n\\[({-]{0,64}") {
            let mut handler = Handler::new();
            let tokens = tokenize(&source, &mut handler).unwrap();
            let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
            prop_assert_eq!(rebuilt, source);
        }

        #[test]
        fn prop_indices_are_sequential(source in "[ a-z0-9+=._\n-]{0,64}") {
            let mut handler = Handler::new();
            let tokens = tokenize(&source, &mut handler).unwrap();
            for (i, token) in tokens.iter().enumerate() {
                prop_assert_eq!(token.index, i as u64);
            }
        }
    }
}
