//! Whitespace, newline, and comment lexing.
//!
//! Newlines are real tokens here because they can terminate statements.
//! Whether a particular newline is significant depends on the innermost
//! open delimiter, so the channel is decided per token. Comments are
//! emitted as newline-kind tokens (they can stand in for a statement
//! terminator) and also captured as side records for tooling.

use brewc_util::DiagnosticCode;

use crate::comment::Comment;
use crate::lexer::Lexer;
use crate::token::{Channel, Token, TokenKind};
use crate::unicode::is_inline_whitespace;

impl Lexer<'_> {
    /// Lexes a line break: `\r\n`, `\n`, or a lone `\r`.
    ///
    /// Hidden when the innermost open delimiter suppresses newlines,
    /// otherwise visible so the parser can end a statement on it.
    pub(crate) fn lex_newline(&mut self) -> Token {
        if self.cursor.current_char() == '\r' {
            self.cursor.advance();
        }
        if self.cursor.current_char() == '\n' {
            self.cursor.advance();
        }
        let channel = if self.newlines_suppressed() {
            Channel::Hidden
        } else {
            Channel::Default
        };
        self.make_token(TokenKind::Nl, channel)
    }

    /// Lexes a run of inline whitespace, including backslash-newline line
    /// continuations. Always hidden.
    pub(crate) fn lex_whitespace(&mut self) -> Token {
        loop {
            let c = self.cursor.current_char();
            if is_inline_whitespace(c) {
                self.cursor.advance();
            } else if c == '\\' && matches!(self.cursor.peek_char(1), '\n' | '\r') {
                self.cursor.advance();
                if self.cursor.current_char() == '\r' {
                    self.cursor.advance();
                }
                if self.cursor.current_char() == '\n' {
                    self.cursor.advance();
                }
            } else {
                break;
            }
        }
        self.make_token(TokenKind::Ws, Channel::Hidden)
    }

    /// Lexes a `//` comment up to (not including) the line break.
    ///
    /// The token is newline-kind: outside suppressing delimiters it can
    /// terminate a statement just like the line break that follows it.
    pub(crate) fn lex_line_comment(&mut self) -> Token {
        self.cursor.advance_n(2);
        while !self.cursor.is_at_end() && !matches!(self.cursor.current_char(), '\n' | '\r') {
            self.cursor.advance();
        }
        self.record_comment(Comment::line(
            self.token_start_line,
            self.token_start_column,
            self.cursor.line(),
            self.cursor.column(),
            self.cursor.slice_from(self.token_start),
        ));
        let channel = if self.newlines_suppressed() {
            Channel::Hidden
        } else {
            Channel::Default
        };
        self.make_token(TokenKind::Nl, channel)
    }

    /// Lexes a `/* ... */` comment.
    ///
    /// The token is visible only when it trails the code on its line (only
    /// whitespace up to the line break) outside suppressing delimiters; a
    /// comment embedded between tokens on one line must not end the
    /// statement, so it is hidden.
    pub(crate) fn lex_block_comment(&mut self) -> Token {
        self.cursor.advance_n(2);
        let mut terminated = false;
        while !self.cursor.is_at_end() {
            if self.cursor.starts_with("*/") {
                self.cursor.advance_n(2);
                terminated = true;
                break;
            }
            self.cursor.advance();
        }
        if !terminated {
            self.report_error(
                DiagnosticCode::E_LEX_UNTERMINATED_COMMENT,
                "unterminated block comment",
            );
        }
        self.record_comment(Comment::block(
            self.token_start_line,
            self.token_start_column,
            self.cursor.line(),
            self.cursor.column(),
            self.cursor.slice_from(self.token_start),
        ));
        let channel = if !self.newlines_suppressed() && self.followed_only_by_whitespace() {
            Channel::Default
        } else {
            Channel::Hidden
        };
        self.make_token(TokenKind::Nl, channel)
    }

    /// Lexes a `#!` shebang line. Always hidden; legal only before any
    /// other token has been produced.
    pub(crate) fn lex_sh_comment(&mut self) -> Token {
        let legal = self.at_first_token();
        self.cursor.advance_n(2);
        while !self.cursor.is_at_end() && !matches!(self.cursor.current_char(), '\n' | '\r') {
            self.cursor.advance();
        }
        if !legal {
            self.report_error(
                DiagnosticCode::E_LEX_MISPLACED_SHEBANG,
                "shebang comment is only allowed on the first line",
            );
        }
        self.record_comment(Comment::line(
            self.token_start_line,
            self.token_start_column,
            self.cursor.line(),
            self.cursor.column(),
            self.cursor.slice_from(self.token_start),
        ));
        self.make_token(TokenKind::ShComment, Channel::Hidden)
    }

    /// Whether only inline whitespace remains before the next line break
    /// (or end of input).
    fn followed_only_by_whitespace(&self) -> bool {
        for c in self.cursor.remaining().chars() {
            if matches!(c, '\n' | '\r') {
                return true;
            }
            if !is_inline_whitespace(c) {
                return false;
            }
        }
        true
    }

    fn record_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }
}
