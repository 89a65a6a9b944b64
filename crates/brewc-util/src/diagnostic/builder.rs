//! Fluent builder for diagnostics.

use crate::Span;

use super::{Diagnostic, DiagnosticCode, Handler, Level};

/// Builder for constructing diagnostics with a fluent API.
///
/// # Examples
///
/// ```
/// use brewc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("unexpected character: '\\u{7f}'")
///     .code(DiagnosticCode::E_LEX_UNEXPECTED_CHAR)
///     .span(Span::new(4, 5, 1, 5))
///     .emit(&handler);
///
/// assert_eq!(handler.error_count(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Create a builder with an explicit level.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Create an error builder.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning builder.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code.
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span.
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a note for context.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Build the diagnostic without emitting it.
    pub fn build(self) -> Diagnostic {
        let mut diag = Diagnostic::new(self.level, self.message, self.span);
        diag.code = self.code;
        diag.notes = self.notes;
        diag.helps = self.helps;
        diag
    }

    /// Build the diagnostic and hand it to the given handler.
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_carries_everything() {
        let diag = DiagnosticBuilder::error("bad input")
            .code(DiagnosticCode::E_LEX_INVALID_NUMBER)
            .span(Span::new(0, 5, 1, 1))
            .note("while scanning an octal literal")
            .help("remove the invalid digit")
            .build();

        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.message, "bad input");
        assert_eq!(diag.code, Some(DiagnosticCode::E_LEX_INVALID_NUMBER));
        assert_eq!(diag.notes.len(), 1);
        assert_eq!(diag.helps.len(), 1);
    }

    #[test]
    fn test_emit_reaches_handler() {
        let handler = Handler::new();
        DiagnosticBuilder::warning("odd but legal").emit(&handler);
        assert_eq!(handler.warning_count(), 1);
        assert!(!handler.has_errors());
    }
}
