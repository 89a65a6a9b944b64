//! Fatal lexer errors.
//!
//! Most lexical problems are reported as diagnostics and scanning
//! continues. The errors here are the exceptions: once delimiter depth
//! tracking is wrong, newline significance and interpolation balancing
//! cannot safely continue, so they unwind to the caller.

use thiserror::Error;

/// A non-recoverable lexical failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A closing delimiter that does not pair with the innermost open one.
    ///
    /// Carries the position of the original opener so the caller can point
    /// at both ends.
    #[error("closing '{found}' does not match '{opened}' opened at {line}:{column}")]
    MismatchedDelimiter {
        /// The opening delimiter at the top of the stack.
        opened: char,
        /// The closing delimiter that was found.
        found: char,
        /// Line of the opener (1-based).
        line: u32,
        /// Column of the opener (1-based).
        column: u32,
    },

    /// A closing delimiter with no open delimiter at all.
    #[error("unbalanced closing '{found}' at {line}:{column}")]
    UnbalancedDelimiter {
        /// The closing delimiter that was found.
        found: char,
        /// Line of the closer (1-based).
        line: u32,
        /// Column of the closer (1-based).
        column: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_positions() {
        let err = LexError::MismatchedDelimiter {
            opened: '(',
            found: ']',
            line: 1,
            column: 1,
        };
        assert_eq!(
            err.to_string(),
            "closing ']' does not match '(' opened at 1:1"
        );

        let err = LexError::UnbalancedDelimiter {
            found: '}',
            line: 2,
            column: 5,
        };
        assert_eq!(err.to_string(), "unbalanced closing '}' at 2:5");
    }
}
