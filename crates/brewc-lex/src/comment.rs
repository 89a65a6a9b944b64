//! Comment records captured alongside the token stream.
//!
//! Comments are not consumed by the parser; they are collected into a side
//! list in source order for formatting and documentation tooling,
//! independent of the channel the corresponding token ends up on.

/// The flavor of a captured comment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommentKind {
    /// `/* ... */`
    Block,
    /// `// ...` or a `#!` shebang line.
    Line,
}

/// One captured comment with its exact source span.
///
/// All coordinates are 1-based; `end_line`/`end_column` point one past the
/// last character of the comment. Records are immutable after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comment {
    /// Block or line comment.
    pub kind: CommentKind,
    /// Line the comment starts on.
    pub start_line: u32,
    /// Column the comment starts on.
    pub start_column: u32,
    /// Line just past the end of the comment.
    pub end_line: u32,
    /// Column just past the end of the comment.
    pub end_column: u32,
    /// The raw comment text, delimiters included.
    pub text: String,
}

impl Comment {
    /// Create a block comment record.
    pub fn block(
        start_line: u32,
        start_column: u32,
        end_line: u32,
        end_column: u32,
        text: impl Into<String>,
    ) -> Self {
        Self {
            kind: CommentKind::Block,
            start_line,
            start_column,
            end_line,
            end_column,
            text: text.into(),
        }
    }

    /// Create a line comment record.
    pub fn line(
        start_line: u32,
        start_column: u32,
        end_line: u32,
        end_column: u32,
        text: impl Into<String>,
    ) -> Self {
        Self {
            kind: CommentKind::Line,
            start_line,
            start_column,
            end_line,
            end_column,
            text: text.into(),
        }
    }
}
