//! String literal lexing, including interpolation.
//!
//! Six literal families share one body scanner: double-quoted (single line)
//! and triple-double-quoted (multi-line), their single-quoted counterparts
//! (no interpolation), slashy `/.../` regex literals, and dollar-slashy
//! `$/.../$` literals. An interpolating family splits into segment tokens
//! the moment a `$` introduces an embedded value; a string with no
//! interpolation stays one `StringLiteral`.
//!
//! The slash character is the hard case. Whether `/` opens a literal at all
//! depends on the previous token; even then the scan is speculative, and an
//! unterminated body rolls the cursor back so the slash lexes as division.

use brewc_util::DiagnosticCode;

use crate::lexer::Lexer;
use crate::mode::Mode;
use crate::token::{slashy_allowed, Channel, Token, TokenKind};
use crate::unicode::{is_gstring_ident_part, is_gstring_ident_start, is_ident_part, is_interpolation_opener};

/// One of the string literal families.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StrFamily {
    /// `"..."`
    Dq,
    /// `"""..."""`
    Tdq,
    /// `'...'`
    Sq,
    /// `'''...'''`
    Tsq,
    /// `/.../`
    Slashy,
    /// `$/.../$`
    DollarSlashy,
}

impl StrFamily {
    fn interpolates(self) -> bool {
        !matches!(self, StrFamily::Sq | StrFamily::Tsq)
    }
}

/// How a body scan stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BodyEnd {
    /// The family's terminator was consumed.
    Terminator,
    /// A `$` interpolation begins; the `$` has been consumed.
    Interpolation,
    /// Ran out of input.
    Eof,
    /// A raw line break in a single-line family; not consumed.
    LineBreak,
}

impl Lexer<'_> {
    /// Lexes a `"` or `"""` literal from its opening quote.
    pub(crate) fn lex_double_quoted(&mut self) -> Token {
        if self.cursor.starts_with("\"\"\"") {
            self.cursor.advance_n(3);
            self.lex_interpolating_string(StrFamily::Tdq, Mode::TripleQuotedString)
        } else {
            self.cursor.advance();
            self.lex_interpolating_string(StrFamily::Dq, Mode::DoubleQuotedString)
        }
    }

    /// Lexes a `'` or `'''` literal. Single-quoted strings never
    /// interpolate, so the result is always one `StringLiteral`.
    pub(crate) fn lex_single_quoted(&mut self) -> Token {
        let family = if self.cursor.starts_with("'''") {
            self.cursor.advance_n(3);
            StrFamily::Tsq
        } else {
            self.cursor.advance();
            StrFamily::Sq
        };
        match self.scan_string_body(family) {
            BodyEnd::Terminator => self.make_token(TokenKind::StringLiteral, Channel::Default),
            BodyEnd::Interpolation => unreachable!("single-quoted strings do not interpolate"),
            end => {
                self.report_unterminated(end);
                self.make_token(TokenKind::StringLiteral, Channel::Default)
            }
        }
    }

    /// Lexes a `$/.../$` literal from its `$/` opener.
    pub(crate) fn lex_dollar_slashy(&mut self) -> Token {
        self.cursor.advance_n(2);
        self.lex_interpolating_string(StrFamily::DollarSlashy, Mode::DollarSlashyString)
    }

    /// Decides what a `/` means and lexes it.
    ///
    /// When the previous token allows a literal, the body is scanned
    /// speculatively: reaching end of input without a terminator rewinds
    /// the cursor and lexes a division operator instead. A lone `/` at the
    /// very end of input is kept as an implicitly terminated literal so
    /// truncated source still tokenizes.
    pub(crate) fn lex_slashy_or_div(&mut self) -> Token {
        if !slashy_allowed(self.last_token_kind) {
            return self.lex_div();
        }
        let snapshot = self.cursor.snapshot();
        self.cursor.advance();
        if self.cursor.is_at_end() {
            self.report_error(
                DiagnosticCode::E_LEX_UNTERMINATED_STRING,
                "unterminated slashy string",
            );
            return self.make_token(TokenKind::StringLiteral, Channel::Default);
        }
        match self.scan_string_body(StrFamily::Slashy) {
            BodyEnd::Terminator => self.make_token(TokenKind::StringLiteral, Channel::Default),
            BodyEnd::Interpolation => {
                self.modes.push(Mode::SlashyString);
                self.modes.push(Mode::GStringTypeSelector);
                self.make_token(TokenKind::GStringBegin, Channel::Default)
            }
            BodyEnd::Eof | BodyEnd::LineBreak => {
                self.cursor.restore(snapshot);
                self.lex_div()
            }
        }
    }

    fn lex_div(&mut self) -> Token {
        if self.cursor.starts_with("/=") {
            self.lex_simple(2, TokenKind::DivAssign)
        } else {
            self.lex_simple(1, TokenKind::Div)
        }
    }

    /// Finishes an interpolating literal whose opener has been consumed:
    /// either the whole literal, or its opening segment up to the first
    /// interpolation.
    fn lex_interpolating_string(&mut self, family: StrFamily, mode: Mode) -> Token {
        match self.scan_string_body(family) {
            BodyEnd::Terminator => self.make_token(TokenKind::StringLiteral, Channel::Default),
            BodyEnd::Interpolation => {
                self.modes.push(mode);
                self.modes.push(Mode::GStringTypeSelector);
                self.make_token(TokenKind::GStringBegin, Channel::Default)
            }
            end => {
                self.report_unterminated(end);
                self.make_token(TokenKind::StringLiteral, Channel::Default)
            }
        }
    }

    /// Produces the next token while inside a string body, after an
    /// interpolation has been closed.
    pub(crate) fn next_string_body_token(&mut self) -> Token {
        let family = match self.modes.current() {
            Mode::DoubleQuotedString => StrFamily::Dq,
            Mode::TripleQuotedString => StrFamily::Tdq,
            Mode::SlashyString => StrFamily::Slashy,
            Mode::DollarSlashyString => StrFamily::DollarSlashy,
            _ => unreachable!("caller dispatches string modes only"),
        };
        match self.scan_string_body(family) {
            BodyEnd::Terminator => {
                self.modes.pop();
                self.make_token(TokenKind::GStringEnd, Channel::Default)
            }
            BodyEnd::Interpolation => {
                self.modes.push(Mode::GStringTypeSelector);
                self.make_token(TokenKind::GStringPart, Channel::Default)
            }
            end => {
                self.report_unterminated(end);
                self.modes.pop();
                self.make_token(TokenKind::GStringEnd, Channel::Default)
            }
        }
    }

    /// Produces the token right after an interpolation `$`: either the `{`
    /// opening a full expression, or the first identifier of a property
    /// path.
    pub(crate) fn next_selector_token(&mut self) -> Token {
        if self.cursor.current_char() == '{' {
            let last = self.last_token_kind;
            let line = self.token_start_line;
            let column = self.token_start_column;
            self.parens.enter_interpolation(last, line, column);
            self.modes.replace(Mode::Default);
            self.cursor.advance();
            self.make_token(TokenKind::LBrace, Channel::Default)
        } else {
            self.modes.replace(Mode::GStringPath);
            self.cursor.advance();
            while is_gstring_ident_part(self.cursor.current_char()) {
                self.cursor.advance();
            }
            self.make_token(TokenKind::Identifier, Channel::Default)
        }
    }

    /// Produces one `.name` segment of a property-path interpolation, or
    /// returns `None` after popping back to the string body.
    pub(crate) fn next_path_token(&mut self) -> Option<Token> {
        if self.cursor.current_char() == '.' && is_gstring_ident_start(self.cursor.peek_char(1)) {
            self.cursor.advance_n(2);
            while is_gstring_ident_part(self.cursor.current_char()) {
                self.cursor.advance();
            }
            Some(self.make_token(TokenKind::GStringPathPart, Channel::Default))
        } else {
            self.modes.pop();
            None
        }
    }

    /// Scans a string body until it ends, consuming escapes as it goes.
    /// Token text is always the raw slice, so nothing is accumulated; only
    /// the stopping point matters.
    fn scan_string_body(&mut self, family: StrFamily) -> BodyEnd {
        loop {
            if self.cursor.is_at_end() {
                return BodyEnd::Eof;
            }
            let c = self.cursor.current_char();

            if c == '$' {
                if family == StrFamily::DollarSlashy
                    && matches!(self.cursor.peek_char(1), '$' | '/')
                {
                    // `$$` is a literal dollar, `$/` a literal slash.
                    self.cursor.advance_n(2);
                    continue;
                }
                if family.interpolates() && is_interpolation_opener(self.cursor.peek_char(1)) {
                    self.cursor.advance();
                    return BodyEnd::Interpolation;
                }
                self.cursor.advance();
                continue;
            }

            match family {
                StrFamily::Dq | StrFamily::Sq => {
                    let quote = if family == StrFamily::Dq { '"' } else { '\'' };
                    if c == quote {
                        self.cursor.advance();
                        return BodyEnd::Terminator;
                    }
                    if matches!(c, '\n' | '\r') {
                        return BodyEnd::LineBreak;
                    }
                    if c == '\\' {
                        self.consume_escape();
                        continue;
                    }
                }
                StrFamily::Tdq | StrFamily::Tsq => {
                    let quote = if family == StrFamily::Tdq { '"' } else { '\'' };
                    if c == quote {
                        // In a run of N quotes the last three close the
                        // literal and the rest are content, so `""""` is
                        // one content quote plus the terminator.
                        let mut run = 1;
                        while self.cursor.peek_char(run) == quote {
                            run += 1;
                        }
                        self.cursor.advance_n(run);
                        if run >= 3 {
                            return BodyEnd::Terminator;
                        }
                        continue;
                    }
                    if c == '\\' {
                        self.consume_escape();
                        continue;
                    }
                }
                StrFamily::Slashy => {
                    if c == '\\' && self.cursor.peek_char(1) == '/' {
                        self.cursor.advance_n(2);
                        continue;
                    }
                    if c == '/' {
                        // A slash glued to identifier text stays content;
                        // only a free-standing slash terminates.
                        self.cursor.advance();
                        if !is_ident_part(self.cursor.current_char()) {
                            return BodyEnd::Terminator;
                        }
                        continue;
                    }
                }
                StrFamily::DollarSlashy => {
                    if c == '/' && self.cursor.peek_char(1) == '$' {
                        self.cursor.advance_n(2);
                        return BodyEnd::Terminator;
                    }
                }
            }

            self.cursor.advance();
        }
    }

    /// Consumes one backslash escape, reporting malformed ones. The raw
    /// characters stay in the token either way.
    fn consume_escape(&mut self) {
        let start = self.cursor.position();
        let line = self.cursor.line();
        let column = self.cursor.column();
        self.cursor.advance();
        let c = self.cursor.current_char();
        match c {
            'b' | 't' | 'n' | 'f' | 'r' | 's' | '"' | '\'' | '\\' | '$' => {
                self.cursor.advance();
            }
            '\n' => self.cursor.advance(),
            '\r' => {
                self.cursor.advance();
                if self.cursor.current_char() == '\n' {
                    self.cursor.advance();
                }
            }
            'u' => {
                self.cursor.advance();
                for _ in 0..4 {
                    if !self.cursor.current_char().is_ascii_hexdigit() {
                        let span = self.span_between(start, line, column);
                        self.report_error_at(
                            DiagnosticCode::E_LEX_INVALID_ESCAPE,
                            "unicode escape needs four hex digits",
                            span,
                        );
                        return;
                    }
                    self.cursor.advance();
                }
            }
            '0'..='7' => {
                let extra = if c <= '3' { 2 } else { 1 };
                self.cursor.advance();
                for _ in 0..extra {
                    if !matches!(self.cursor.current_char(), '0'..='7') {
                        break;
                    }
                    self.cursor.advance();
                }
            }
            _ if self.cursor.is_at_end() => {
                let span = self.span_between(start, line, column);
                self.report_error_at(
                    DiagnosticCode::E_LEX_INVALID_ESCAPE,
                    "escape sequence is cut off by end of input",
                    span,
                );
            }
            other => {
                self.cursor.advance();
                let span = self.span_between(start, line, column);
                self.report_error_at(
                    DiagnosticCode::E_LEX_INVALID_ESCAPE,
                    format!("unknown escape sequence '\\{}'", other),
                    span,
                );
            }
        }
    }

    fn span_between(&self, start: usize, line: u32, column: u32) -> brewc_util::Span {
        brewc_util::Span::new(start, self.cursor.position(), line, column)
    }

    /// Reports an unterminated string body at the current token.
    fn report_unterminated(&mut self, end: BodyEnd) {
        let message = if end == BodyEnd::LineBreak {
            "string literal is not terminated before the end of the line"
        } else {
            "unterminated string literal"
        };
        self.report_error(DiagnosticCode::E_LEX_UNTERMINATED_STRING, message);
    }
}
