//! Identifier and keyword lexing.

use crate::lexer::Lexer;
use crate::token::{keyword_from_ident, Channel, Token, TokenKind};
use crate::unicode::is_ident_part;

impl Lexer<'_> {
    /// Lexes an identifier, keyword, or keyword-like literal.
    ///
    /// Identifiers whose first character is uppercase get their own kind
    /// because the slash disambiguation treats a type name as a value. The
    /// contextual keyword `non-sealed` needs lookahead: `non` followed by
    /// `-sealed` and no further identifier character is one token, while
    /// `non-sealedX` stays an ordinary subtraction expression.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        let first = self.cursor.current_char();
        self.cursor.advance();
        while is_ident_part(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        if text == "non"
            && self.cursor.starts_with("-sealed")
            && !is_ident_part(self.cursor.peek_char(7))
        {
            self.cursor.advance_n(7);
            return self.make_token(TokenKind::NonSealed, Channel::Default);
        }

        let kind = match keyword_from_ident(text) {
            Some(kind) => kind,
            None if first.is_uppercase() => TokenKind::CapitalizedIdentifier,
            None => TokenKind::Identifier,
        };
        self.make_token(kind, Channel::Default)
    }
}

#[cfg(test)]
mod tests {
    use brewc_util::Handler;

    use crate::lexer::Lexer;
    use crate::token::TokenKind;

    fn first_kind(source: &str) -> (TokenKind, String) {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new(source, &mut handler);
        let token = lexer.next_token().unwrap();
        (token.kind, token.text)
    }

    #[test]
    fn test_plain_identifier() {
        assert_eq!(
            first_kind("foo_bar9"),
            (TokenKind::Identifier, "foo_bar9".to_string())
        );
    }

    #[test]
    fn test_dollar_identifier() {
        assert_eq!(first_kind("$x$"), (TokenKind::Identifier, "$x$".to_string()));
    }

    #[test]
    fn test_capitalized_identifier() {
        assert_eq!(
            first_kind("Widget"),
            (TokenKind::CapitalizedIdentifier, "Widget".to_string())
        );
    }

    #[test]
    fn test_keywords() {
        assert_eq!(first_kind("def").0, TokenKind::Def);
        assert_eq!(first_kind("instanceof").0, TokenKind::Instanceof);
        assert_eq!(first_kind("long").0, TokenKind::BuiltInPrimitiveType);
        assert_eq!(first_kind("true").0, TokenKind::BooleanLiteral);
        assert_eq!(first_kind("null").0, TokenKind::NullLiteral);
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_eq!(first_kind("deftly").0, TokenKind::Identifier);
    }

    #[test]
    fn test_non_sealed() {
        assert_eq!(
            first_kind("non-sealed class"),
            (TokenKind::NonSealed, "non-sealed".to_string())
        );
    }

    #[test]
    fn test_non_sealed_needs_boundary() {
        let mut handler = Handler::new();
        let lexer = Lexer::new("non-sealedX", &mut handler);
        let kinds: Vec<_> = lexer.map(|t| t.unwrap().kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Sub,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_non_minus_other_identifier() {
        let mut handler = Handler::new();
        let lexer = Lexer::new("non-public", &mut handler);
        let kinds: Vec<_> = lexer.map(|t| t.unwrap().kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Sub,
                TokenKind::Public,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_unicode_identifier() {
        assert_eq!(first_kind("café").0, TokenKind::Identifier);
        assert_eq!(first_kind("Über").0, TokenKind::CapitalizedIdentifier);
    }
}
