//! Diagnostic codes for categorizing lexical errors and warnings.
//!
//! Each diagnostic emitted by a front-end phase carries a stable code so it
//! can be referenced from documentation and conformance tests.

use std::fmt;

/// A unique code identifying a diagnostic message.
///
/// Codes follow the format `{prefix}{number:04}` where the prefix is `E` for
/// errors and `W` for warnings.
///
/// # Examples
///
/// ```
/// use brewc_util::DiagnosticCode;
///
/// let code = DiagnosticCode::E_LEX_UNEXPECTED_CHAR;
/// assert_eq!(code.as_string(), "E1001");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix ("E" for error, "W" for warning).
    pub prefix: &'static str,
    /// The numeric identifier.
    pub number: u32,
    /// A short machine-readable name.
    pub name: &'static str,
}

impl DiagnosticCode {
    /// Create a new diagnostic code.
    pub const fn new(prefix: &'static str, number: u32, name: &'static str) -> Self {
        Self {
            prefix,
            number,
            name,
        }
    }

    /// Format the code as `E1001`.
    pub fn as_string(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    /// An input byte no lexical rule recognizes.
    pub const E_LEX_UNEXPECTED_CHAR: DiagnosticCode = Self::new("E", 1001, "unexpected_char");
    /// Malformed digit grouping or invalid octal digit.
    pub const E_LEX_INVALID_NUMBER: DiagnosticCode = Self::new("E", 1002, "invalid_number");
    /// A string literal without a terminator.
    pub const E_LEX_UNTERMINATED_STRING: DiagnosticCode =
        Self::new("E", 1003, "unterminated_string");
    /// A backslash followed by an unrecognized escape character.
    pub const E_LEX_INVALID_ESCAPE: DiagnosticCode = Self::new("E", 1004, "invalid_escape");
    /// A `#!` line anywhere other than the start of the unit.
    pub const E_LEX_MISPLACED_SHEBANG: DiagnosticCode =
        Self::new("E", 1005, "misplaced_shebang");
    /// A block comment without a closing `*/`.
    pub const E_LEX_UNTERMINATED_COMMENT: DiagnosticCode =
        Self::new("E", 1006, "unterminated_comment");
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}
