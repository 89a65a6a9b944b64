//! Numeric literal lexing.
//!
//! Integer literals come in decimal, hex (`0x`), binary (`0b`), and octal
//! (leading zero) forms, all with `_` digit separators. Floating-point
//! literals are decimal only. Suffixes follow JVM conventions: `l`/`i`/`g`
//! for integer width, `f`/`d`/`g` for floating point; a bare `f` or `d`
//! suffix turns an integer-looking literal into a float.
//!
//! Malformed literals never abort the scan. A bad separator or octal digit
//! is reported and the characters stay inside the literal token; a radix
//! prefix or exponent with no digits rolls back so the letter can lex as an
//! identifier instead.

use brewc_util::{DiagnosticCode, Span};

use crate::lexer::Lexer;
use crate::token::{Channel, Token, TokenKind};
use crate::unicode::is_digit_in_base;

impl Lexer<'_> {
    /// Lexes a numeric literal; the current character is a digit.
    pub(crate) fn lex_number(&mut self) -> Token {
        if self.cursor.current_char() == '0' {
            match self.cursor.peek_char(1) {
                'x' | 'X' => return self.lex_radix_literal(16),
                'b' | 'B' => return self.lex_radix_literal(2),
                _ => {}
            }
        }
        self.lex_decimal_literal()
    }

    /// Lexes a `0x`/`0b` literal. With no digit after the prefix the prefix
    /// letter is rolled back, so `0x` lexes as `0` followed by the
    /// identifier `x`.
    fn lex_radix_literal(&mut self, base: u32) -> Token {
        self.cursor.advance();
        let before_prefix = self.cursor.snapshot();
        self.cursor.advance();
        if self.scan_digit_run(base) == 0 {
            self.cursor.restore(before_prefix);
        }
        self.finish_integer_suffix();
        self.make_token(TokenKind::IntegerLiteral, Channel::Default)
    }

    /// Lexes a decimal, octal, or floating-point literal.
    fn lex_decimal_literal(&mut self) -> Token {
        self.scan_digit_run(10);
        let mut is_float = false;

        if self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
            self.cursor.advance();
            self.scan_digit_run(10);
            is_float = true;
        }

        if matches!(self.cursor.current_char(), 'e' | 'E') {
            let before_exponent = self.cursor.snapshot();
            self.cursor.advance();
            if matches!(self.cursor.current_char(), '+' | '-') {
                self.cursor.advance();
            }
            if self.scan_digit_run(10) == 0 {
                // `1e` is the integer 1 followed by the identifier `e`.
                self.cursor.restore(before_exponent);
            } else {
                is_float = true;
            }
        }

        if is_float {
            if matches!(self.cursor.current_char(), 'f' | 'F' | 'd' | 'D' | 'g' | 'G') {
                self.cursor.advance();
            }
            return self.make_token(TokenKind::FloatingPointLiteral, Channel::Default);
        }

        if matches!(self.cursor.current_char(), 'f' | 'F' | 'd' | 'D') {
            self.cursor.advance();
            return self.make_token(TokenKind::FloatingPointLiteral, Channel::Default);
        }

        self.finish_integer_suffix();
        self.check_octal_digits();
        self.make_token(TokenKind::IntegerLiteral, Channel::Default)
    }

    /// Consumes digits of the given base with `_` separators, returning the
    /// digit count. A separator not followed by another digit is reported
    /// at its exact position but kept inside the literal.
    fn scan_digit_run(&mut self, base: u32) -> u32 {
        let mut digits = 0u32;
        loop {
            let c = self.cursor.current_char();
            if is_digit_in_base(c, base) {
                digits += 1;
                self.cursor.advance();
            } else if c == '_' && digits > 0 {
                let line = self.cursor.line();
                let column = self.cursor.column();
                let start = self.cursor.position();
                self.cursor.advance();
                let next = self.cursor.current_char();
                if !is_digit_in_base(next, base) && next != '_' {
                    self.report_error_at(
                        DiagnosticCode::E_LEX_INVALID_NUMBER,
                        "numeric separator '_' must sit between digits",
                        Span::new(start, start + 1, line, column),
                    );
                }
            } else {
                break;
            }
        }
        digits
    }

    /// Consumes an integer width suffix if present.
    fn finish_integer_suffix(&mut self) {
        if matches!(self.cursor.current_char(), 'l' | 'L' | 'i' | 'I' | 'g' | 'G') {
            self.cursor.advance();
        }
    }

    /// Validates a leading-zero (octal) integer literal, reporting the
    /// first digit outside `0`-`7`. Runs after the token text is complete;
    /// numeric literals are ASCII and single-line, so the offending column
    /// is the token start column plus the byte offset.
    fn check_octal_digits(&mut self) {
        let text = self.cursor.slice_from(self.token_start);
        let digits = text.trim_end_matches(|c: char| c.is_ascii_alphabetic());
        if digits.len() < 2 || !digits.starts_with('0') {
            return;
        }
        let invalid = digits
            .bytes()
            .enumerate()
            .find(|(_, b)| matches!(b, b'8' | b'9'));
        if let Some((offset, digit)) = invalid {
            let start = self.token_start + offset;
            let span = Span::new(
                start,
                start + 1,
                self.token_start_line,
                self.token_start_column + offset as u32,
            );
            self.report_error_at(
                DiagnosticCode::E_LEX_INVALID_NUMBER,
                format!("invalid digit '{}' in octal literal", digit as char),
                span,
            );
        }
    }
}
