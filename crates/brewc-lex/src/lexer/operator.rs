//! Operator and punctuation lexing.
//!
//! Longest match wins, so multi-character operators are tried from longest
//! to shortest within each leading character. There are no `<<` or `>>`
//! tokens: only their compound-assignment forms exist, so nested generics
//! like `List<List<Integer>>` never need parser-side token splitting.

use crate::lexer::Lexer;
use crate::token::{Channel, Token, TokenKind};
use crate::unicode::is_inline_whitespace;

impl Lexer<'_> {
    /// Lexes an operator or punctuation token at the current character.
    pub(crate) fn lex_operator(&mut self) -> Token {
        match self.cursor.current_char() {
            ';' => self.lex_simple(1, TokenKind::Semi),
            ',' => self.lex_simple(1, TokenKind::Comma),
            '@' => self.lex_simple(1, TokenKind::At),
            '~' => self.lex_simple(1, TokenKind::BitNot),
            '.' => self.lex_dot(),
            '<' => self.lex_lt(),
            '>' => self.lex_gt(),
            '=' => self.lex_eq(),
            '!' => self.lex_bang(),
            '?' => self.lex_question(),
            ':' => {
                if self.cursor.starts_with("::") {
                    self.lex_simple(2, TokenKind::MethodReference)
                } else {
                    self.lex_simple(1, TokenKind::Colon)
                }
            }
            '&' => {
                if self.cursor.starts_with("&&") {
                    self.lex_simple(2, TokenKind::And)
                } else if self.cursor.starts_with("&=") {
                    self.lex_simple(2, TokenKind::AndAssign)
                } else {
                    self.lex_simple(1, TokenKind::BitAnd)
                }
            }
            '|' => {
                if self.cursor.starts_with("||") {
                    self.lex_simple(2, TokenKind::Or)
                } else if self.cursor.starts_with("|=") {
                    self.lex_simple(2, TokenKind::OrAssign)
                } else {
                    self.lex_simple(1, TokenKind::BitOr)
                }
            }
            '^' => {
                if self.cursor.starts_with("^=") {
                    self.lex_simple(2, TokenKind::XorAssign)
                } else {
                    self.lex_simple(1, TokenKind::Xor)
                }
            }
            '+' => {
                if self.cursor.starts_with("++") {
                    self.lex_simple(2, TokenKind::Inc)
                } else if self.cursor.starts_with("+=") {
                    self.lex_simple(2, TokenKind::AddAssign)
                } else {
                    self.lex_simple(1, TokenKind::Add)
                }
            }
            '-' => {
                if self.cursor.starts_with("->") {
                    self.lex_simple(2, TokenKind::Arrow)
                } else if self.cursor.starts_with("--") {
                    self.lex_simple(2, TokenKind::Dec)
                } else if self.cursor.starts_with("-=") {
                    self.lex_simple(2, TokenKind::SubAssign)
                } else {
                    self.lex_simple(1, TokenKind::Sub)
                }
            }
            '*' => self.lex_star(),
            '%' => {
                if self.cursor.starts_with("%=") {
                    self.lex_simple(2, TokenKind::ModAssign)
                } else {
                    self.lex_simple(1, TokenKind::Mod)
                }
            }
            _ => self.lex_unexpected_char(),
        }
    }

    fn lex_dot(&mut self) -> Token {
        if self.cursor.starts_with("...") {
            self.lex_simple(3, TokenKind::Ellipsis)
        } else if self.cursor.starts_with("..<") {
            self.lex_simple(3, TokenKind::RangeExclusiveRight)
        } else if self.cursor.starts_with("..") {
            self.lex_simple(2, TokenKind::RangeInclusive)
        } else if self.cursor.starts_with(".&") {
            self.lex_simple(2, TokenKind::MethodPointer)
        } else {
            self.lex_simple(1, TokenKind::Dot)
        }
    }

    fn lex_lt(&mut self) -> Token {
        if self.cursor.starts_with("<..<") {
            self.lex_simple(4, TokenKind::RangeExclusiveFull)
        } else if self.cursor.starts_with("<..") {
            self.lex_simple(3, TokenKind::RangeExclusiveLeft)
        } else if self.cursor.starts_with("<=>") {
            self.lex_simple(3, TokenKind::Spaceship)
        } else if self.cursor.starts_with("<<=") {
            self.lex_simple(3, TokenKind::LshiftAssign)
        } else if self.cursor.starts_with("<=") {
            self.lex_simple(2, TokenKind::Le)
        } else {
            self.lex_simple(1, TokenKind::Lt)
        }
    }

    fn lex_gt(&mut self) -> Token {
        if self.cursor.starts_with(">>>=") {
            self.lex_simple(4, TokenKind::UrshiftAssign)
        } else if self.cursor.starts_with(">>=") {
            self.lex_simple(3, TokenKind::RshiftAssign)
        } else if self.cursor.starts_with(">=") {
            self.lex_simple(2, TokenKind::Ge)
        } else {
            self.lex_simple(1, TokenKind::Gt)
        }
    }

    fn lex_eq(&mut self) -> Token {
        if self.cursor.starts_with("==~") {
            self.lex_simple(3, TokenKind::RegexMatch)
        } else if self.cursor.starts_with("===") {
            self.lex_simple(3, TokenKind::Identical)
        } else if self.cursor.starts_with("==>") {
            self.lex_simple(3, TokenKind::Implies)
        } else if self.cursor.starts_with("==") {
            self.lex_simple(2, TokenKind::Equal)
        } else if self.cursor.starts_with("=~") {
            self.lex_simple(2, TokenKind::RegexFind)
        } else {
            self.lex_simple(1, TokenKind::Assign)
        }
    }

    /// `!instanceof` and `!in` are single tokens only at a word boundary:
    /// `!instanceof` must be followed by whitespace, `!in` by whitespace or
    /// an opening delimiter. Otherwise the `!` stands alone.
    fn lex_bang(&mut self) -> Token {
        if self.cursor.starts_with("!==") {
            self.lex_simple(3, TokenKind::NotIdentical)
        } else if self.cursor.starts_with("!=") {
            self.lex_simple(2, TokenKind::NotEqual)
        } else if self.cursor.starts_with("!instanceof")
            && followed_by_whitespace(self.cursor.peek_char(11))
        {
            self.lex_simple(11, TokenKind::NotInstanceof)
        } else if self.cursor.starts_with("!in") && {
            let next = self.cursor.peek_char(3);
            followed_by_whitespace(next) || matches!(next, '[' | '(' | '{')
        } {
            self.lex_simple(3, TokenKind::NotIn)
        } else {
            self.lex_simple(1, TokenKind::Not)
        }
    }

    fn lex_question(&mut self) -> Token {
        if self.cursor.starts_with("??.") {
            self.lex_simple(3, TokenKind::SafeChainDot)
        } else if self.cursor.starts_with("?.") {
            self.lex_simple(2, TokenKind::SafeDot)
        } else if self.cursor.starts_with("?:") {
            self.lex_simple(2, TokenKind::Elvis)
        } else if self.cursor.starts_with("?=") {
            self.lex_simple(2, TokenKind::ElvisAssign)
        } else if self.cursor.starts_with("?[") {
            // Safe indexing opens a bracket frame, closed by a plain `]`.
            let last = self.last_token_kind;
            let line = self.token_start_line;
            let column = self.token_start_column;
            self.parens.enter('[', last, line, column);
            self.lex_simple(2, TokenKind::SafeIndex)
        } else {
            self.lex_simple(1, TokenKind::Question)
        }
    }

    fn lex_star(&mut self) -> Token {
        if self.cursor.starts_with("**=") {
            self.lex_simple(3, TokenKind::PowerAssign)
        } else if self.cursor.starts_with("**") {
            self.lex_simple(2, TokenKind::Power)
        } else if self.cursor.starts_with("*=") {
            self.lex_simple(2, TokenKind::MulAssign)
        } else if self.cursor.starts_with("*.") {
            self.lex_simple(2, TokenKind::SpreadDot)
        } else {
            self.lex_simple(1, TokenKind::Mul)
        }
    }
}

/// End of input counts as a word boundary.
fn followed_by_whitespace(c: char) -> bool {
    c == '\0' || is_inline_whitespace(c) || matches!(c, '\n' | '\r')
}
