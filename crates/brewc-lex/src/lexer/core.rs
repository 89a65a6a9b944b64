//! Core lexer implementation.
//!
//! This module contains the main [`Lexer`] struct, the per-mode dispatch
//! loop, and token construction. The scanning methods for each token family
//! live in the sibling modules.

use brewc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};

use crate::comment::Comment;
use crate::cursor::Cursor;
use crate::error::LexError;
use crate::mode::{Mode, ModeStack};
use crate::paren::ParenTracker;
use crate::token::{Channel, Token, TokenKind};
use crate::unicode::{is_ident_start, is_inline_whitespace};

/// Lexer for the Brew scripting language.
///
/// The lexer transforms one source unit into a stream of tokens. It is
/// context-sensitive: a mode stack tracks string-interpolation nesting, a
/// delimiter stack tracks paren depth (which decides whether newlines are
/// significant), and the previous default-channel token decides whether `/`
/// starts a regex literal or a division.
///
/// Every character of the input ends up in the text of exactly one token,
/// so concatenating the emitted texts reproduces the source.
///
/// # Example
///
/// ```
/// use brewc_lex::{Lexer, TokenKind};
/// use brewc_util::Handler;
///
/// let mut handler = Handler::new();
/// let mut lexer = Lexer::new("def x = 1", &mut handler);
/// let token = lexer.next_token().unwrap();
/// assert_eq!(token.kind, TokenKind::Def);
/// assert_eq!(token.text, "def");
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub cursor: Cursor<'a>,

    /// Error handler for reporting lexical diagnostics.
    pub handler: &'a mut Handler,

    /// Starting byte offset of the current token.
    pub(crate) token_start: usize,

    /// Line where the current token starts (1-based).
    pub(crate) token_start_line: u32,

    /// Column where the current token starts (1-based).
    pub(crate) token_start_column: u32,

    /// Index the next emitted token will receive.
    token_index: u64,

    /// Kind of the most recent default-channel token.
    pub(crate) last_token_kind: Option<TokenKind>,

    /// Lexical mode stack for string interpolation.
    pub(crate) modes: ModeStack,

    /// Open-delimiter stack.
    pub(crate) parens: ParenTracker,

    /// Comments captured so far, in source order.
    pub(crate) comments: Vec<Comment>,

    /// Set once the end-of-input token has been produced.
    eof_emitted: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source unit.
    pub fn new(source: &'a str, handler: &'a mut Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            token_index: 0,
            last_token_kind: None,
            modes: ModeStack::new(),
            parens: ParenTracker::new(),
            comments: Vec::new(),
            eof_emitted: false,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Hidden-channel tokens (whitespace, suppressed newlines, comments) are
    /// returned like any other; callers that only want parser-visible tokens
    /// filter on [`Token::is_default_channel`]. After the end of input this
    /// keeps returning [`TokenKind::Eof`] tokens.
    ///
    /// # Errors
    ///
    /// Returns [`LexError`] for delimiter mismatches, which are not
    /// recoverable. All other problems are reported through the handler and
    /// scanning continues with a best-effort token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        loop {
            self.begin_token();
            match self.modes.current() {
                Mode::Default => {
                    if self.cursor.is_at_end() {
                        self.eof_emitted = true;
                        return Ok(self.make_token(TokenKind::Eof, Channel::Default));
                    }
                    return self.next_default_token();
                }
                Mode::GStringTypeSelector => return Ok(self.next_selector_token()),
                Mode::GStringPath => {
                    if let Some(token) = self.next_path_token() {
                        return Ok(token);
                    }
                    // Path ended without a token; rescan in the string mode.
                }
                _ => return Ok(self.next_string_body_token()),
            }
        }
    }

    /// Dispatches on the current character in ordinary-code mode.
    fn next_default_token(&mut self) -> Result<Token, LexError> {
        let c = self.cursor.current_char();
        match c {
            '\n' | '\r' => Ok(self.lex_newline()),
            c if is_inline_whitespace(c) => Ok(self.lex_whitespace()),
            '\\' if matches!(self.cursor.peek_char(1), '\n' | '\r') => Ok(self.lex_whitespace()),
            '/' if self.cursor.starts_with("//") => Ok(self.lex_line_comment()),
            '/' if self.cursor.starts_with("/*") => Ok(self.lex_block_comment()),
            '/' => Ok(self.lex_slashy_or_div()),
            '#' if self.cursor.starts_with("#!") => Ok(self.lex_sh_comment()),
            '"' => Ok(self.lex_double_quoted()),
            '\'' => Ok(self.lex_single_quoted()),
            '$' if self.cursor.starts_with("$/") => Ok(self.lex_dollar_slashy()),
            '0'..='9' => Ok(self.lex_number()),
            '(' | '[' | '{' => Ok(self.lex_open_delimiter(c)),
            ')' | ']' | '}' => self.lex_close_delimiter(c),
            c if is_ident_start(c) => Ok(self.lex_identifier()),
            _ => Ok(self.lex_operator()),
        }
    }

    /// Records the start position of the token about to be scanned.
    fn begin_token(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// Builds a token covering everything consumed since [`begin_token`],
    /// assigns it the next index, and updates the last-token tracking used
    /// for slashy disambiguation.
    ///
    /// [`begin_token`]: Lexer::begin_token
    pub(crate) fn make_token(&mut self, kind: TokenKind, channel: Channel) -> Token {
        let text = self.cursor.slice_from(self.token_start).to_string();
        let token = Token {
            kind,
            text,
            channel,
            span: self.token_span(),
            end_line: self.cursor.line(),
            end_column: self.cursor.column(),
            index: self.token_index,
        };
        self.token_index += 1;
        if channel == Channel::Default {
            self.last_token_kind = Some(kind);
        }
        token
    }

    /// Consumes `len` characters and emits a default-channel token.
    pub(crate) fn lex_simple(&mut self, len: usize, kind: TokenKind) -> Token {
        self.cursor.advance_n(len);
        self.make_token(kind, Channel::Default)
    }

    /// The span from the current token start to the cursor.
    pub(crate) fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Whether the innermost open delimiter suppresses newlines.
    pub(crate) fn newlines_suppressed(&self) -> bool {
        self.parens.is_inside_suppressing_paren()
    }

    /// Whether no token of any kind has been emitted yet.
    pub(crate) fn at_first_token(&self) -> bool {
        self.token_index == 0
    }

    /// Reports an error diagnostic covering the current token.
    pub(crate) fn report_error(&mut self, code: DiagnosticCode, message: impl Into<String>) {
        let span = self.token_span();
        self.report_error_at(code, message, span);
    }

    /// Reports an error diagnostic at an explicit span.
    pub(crate) fn report_error_at(
        &mut self,
        code: DiagnosticCode,
        message: impl Into<String>,
        span: Span,
    ) {
        DiagnosticBuilder::error(message)
            .code(code)
            .span(span)
            .emit(self.handler);
    }

    /// Handles `(`, `[`, and `{`, pushing a delimiter frame.
    fn lex_open_delimiter(&mut self, symbol: char) -> Token {
        let last = self.last_token_kind;
        let line = self.token_start_line;
        let column = self.token_start_column;
        self.parens.enter(symbol, last, line, column);
        let kind = match symbol {
            '(' => TokenKind::LParen,
            '[' => TokenKind::LBrack,
            _ => TokenKind::LBrace,
        };
        self.lex_simple(1, kind)
    }

    /// Handles `)`, `]`, and `}`, popping the matching frame.
    ///
    /// A `}` that closes a `${` interpolation also pops the expression mode,
    /// resuming the enclosing string body.
    fn lex_close_delimiter(&mut self, symbol: char) -> Result<Token, LexError> {
        let frame = self
            .parens
            .exit(symbol, self.token_start_line, self.token_start_column)?;
        if frame.interpolation {
            self.modes.pop();
        }
        let kind = match symbol {
            ')' => TokenKind::RParen,
            ']' => TokenKind::RBrack,
            _ => TokenKind::RBrace,
        };
        Ok(self.lex_simple(1, kind))
    }

    /// Fallback for a character no rule recognizes: report it and emit a
    /// one-character error token so scanning can continue.
    pub(crate) fn lex_unexpected_char(&mut self) -> Token {
        let c = self.cursor.current_char();
        self.cursor.advance();
        self.report_error(
            DiagnosticCode::E_LEX_UNEXPECTED_CHAR,
            format!("unexpected character: '{}'", c),
        );
        self.make_token(TokenKind::UnexpectedChar, Channel::Default)
    }

    /// The comments captured so far, in source order.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    /// Yields every token through [`TokenKind::Eof`] inclusive, then `None`.
    /// A fatal error is yielded once and ends the stream.
    fn next(&mut self) -> Option<Self::Item> {
        if self.eof_emitted {
            return None;
        }
        match self.next_token() {
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.eof_emitted = true;
                Some(Err(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut handler = Handler::new();
        let lexer = Lexer::new(source, &mut handler);
        lexer
            .map(|t| t.unwrap())
            .filter(|t| t.is_default_channel())
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_empty_source() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("", &mut handler);
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::Eof);
        assert_eq!(token.text, "");
        assert_eq!(token.index, 0);
    }

    #[test]
    fn test_delimiters_and_indexing() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("([{}])", &mut handler);
        let mut seen = Vec::new();
        loop {
            let token = lexer.next_token().unwrap();
            if token.kind == TokenKind::Eof {
                break;
            }
            seen.push(token);
        }
        assert_eq!(
            seen.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                TokenKind::LParen,
                TokenKind::LBrack,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::RBrack,
                TokenKind::RParen,
            ]
        );
        for (i, token) in seen.iter().enumerate() {
            assert_eq!(token.index, i as u64);
        }
    }

    #[test]
    fn test_mismatched_delimiter_is_fatal() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("(0,1]", &mut handler);
        let mut result = Ok(());
        loop {
            match lexer.next_token() {
                Ok(token) if token.kind == TokenKind::Eof => break,
                Ok(_) => {}
                Err(err) => {
                    result = Err(err);
                    break;
                }
            }
        }
        assert_eq!(
            result,
            Err(LexError::MismatchedDelimiter {
                opened: '(',
                found: ']',
                line: 1,
                column: 1,
            })
        );
    }

    #[test]
    fn test_unbalanced_close() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("}", &mut handler);
        assert!(matches!(
            lexer.next_token(),
            Err(LexError::UnbalancedDelimiter { found: '}', .. })
        ));
    }

    #[test]
    fn test_unexpected_char_recovers() {
        let mut handler = Handler::new();
        let lexer = Lexer::new("a ` b", &mut handler);
        let kinds: Vec<_> = lexer
            .map(|t| t.unwrap())
            .filter(|t| t.is_default_channel())
            .map(|t| t.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::UnexpectedChar,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_iterator_ends_after_eof() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new(";", &mut handler);
        assert_eq!(lexer.next().map(|t| t.unwrap().kind), Some(TokenKind::Semi));
        assert_eq!(lexer.next().map(|t| t.unwrap().kind), Some(TokenKind::Eof));
        assert!(lexer.next().is_none());
    }

    #[test]
    fn test_statement_stream() {
        assert_eq!(
            kinds("def x = y + 1\n"),
            vec![
                TokenKind::Def,
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::Identifier,
                TokenKind::Add,
                TokenKind::IntegerLiteral,
                TokenKind::Nl,
                TokenKind::Eof,
            ]
        );
    }
}
