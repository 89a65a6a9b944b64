//! Open-delimiter tracking.
//!
//! The tracker keeps a LIFO stack of open `(`/`[`/`{` frames. It drives two
//! behaviors: matching closers against openers, and deciding whether a
//! newline (or comment) is significant. Newlines are hidden inside `[ ... ]`
//! and inside ordinary `( ... )`, but stay significant inside `{ ... }` and
//! inside a `try ( ... )` resource list.

use crate::error::LexError;
use crate::token::TokenKind;

/// One open delimiter on the stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParenFrame {
    /// The opening symbol: `(`, `[` (also used for `?[`), or `{`.
    pub symbol: char,
    /// The last default-channel token emitted before the opener.
    pub last_token_kind: Option<TokenKind>,
    /// Line of the opener (1-based).
    pub line: u32,
    /// Column of the opener (1-based).
    pub column: u32,
    /// Whether this `{` was opened by a `${` interpolation; its closer also
    /// pops the expression mode.
    pub interpolation: bool,
}

fn expected_closer(symbol: char) -> char {
    match symbol {
        '(' => ')',
        '[' => ']',
        '{' => '}',
        _ => unreachable!("tracked delimiters are only ( [ {{"),
    }
}

/// Stack of open delimiter frames for one compilation unit.
#[derive(Debug, Default)]
pub struct ParenTracker {
    frames: Vec<ParenFrame>,
}

impl ParenTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Push a frame for an opening delimiter.
    pub fn enter(&mut self, symbol: char, last_token_kind: Option<TokenKind>, line: u32, column: u32) {
        self.frames.push(ParenFrame {
            symbol,
            last_token_kind,
            line,
            column,
            interpolation: false,
        });
    }

    /// Push the `{` frame opened by a `${` interpolation.
    pub fn enter_interpolation(
        &mut self,
        last_token_kind: Option<TokenKind>,
        line: u32,
        column: u32,
    ) {
        self.frames.push(ParenFrame {
            symbol: '{',
            last_token_kind,
            line,
            column,
            interpolation: true,
        });
    }

    /// Pop the innermost frame for a closing delimiter.
    ///
    /// Fails with [`LexError::UnbalancedDelimiter`] when nothing is open and
    /// [`LexError::MismatchedDelimiter`] (carrying the opener's position)
    /// when the closer does not pair with the popped opener. Both are fatal:
    /// depth tracking cannot safely continue past them.
    pub fn exit(&mut self, closing: char, line: u32, column: u32) -> Result<ParenFrame, LexError> {
        let frame = self.frames.pop().ok_or(LexError::UnbalancedDelimiter {
            found: closing,
            line,
            column,
        })?;
        if expected_closer(frame.symbol) != closing {
            return Err(LexError::MismatchedDelimiter {
                opened: frame.symbol,
                found: closing,
                line: frame.line,
                column: frame.column,
            });
        }
        Ok(frame)
    }

    /// Whether the innermost frame suppresses newlines.
    ///
    /// True for `[`, and for `(` unless the token before it was `try`.
    /// Braces never suppress: statements inside a block still end at line
    /// breaks, even when the block sits inside an interpolation.
    pub fn is_inside_suppressing_paren(&self) -> bool {
        match self.frames.last() {
            Some(frame) => {
                frame.symbol == '['
                    || (frame.symbol == '('
                        && frame.last_token_kind != Some(TokenKind::Try))
            }
            None => false,
        }
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}
