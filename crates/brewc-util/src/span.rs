//! Span module - Source location tracking.
//!
//! Provides types representing locations in source code: byte offsets,
//! 1-based line/column information, and file identification.

/// A unique identifier for a source file.
///
/// FileIds are assigned sequentially as files are registered by the host
/// compiler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub usize);

impl FileId {
    /// Create a new FileId.
    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the raw index value.
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }

    /// A dummy FileId for single-file units and tests.
    pub const DUMMY: FileId = FileId(0);
}

/// Source location span.
///
/// A `Span` represents a range in source code, identified by byte offsets,
/// the line/column of its start (1-based, for human-readable output), and a
/// file id.
///
/// # Examples
///
/// ```
/// use brewc_util::Span;
///
/// let span = Span::new(10, 20, 1, 5);
/// assert_eq!(span.len(), 10);
/// assert_eq!(span.line, 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset in source.
    pub start: usize,
    /// End byte offset in source (exclusive).
    pub end: usize,
    /// Line number of the start (1-based).
    pub line: u32,
    /// Column number of the start (1-based).
    pub column: u32,
    /// File identifier.
    pub file_id: FileId,
}

impl Span {
    /// Dummy span for testing.
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
        file_id: FileId::DUMMY,
    };

    /// Create a new span.
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
            file_id: FileId::DUMMY,
        }
    }

    /// Create a zero-length span at a specific location.
    pub fn point(line: u32, column: u32) -> Self {
        Self {
            start: 0,
            end: 0,
            line,
            column,
            file_id: FileId::DUMMY,
        }
    }

    /// Whether the span covers zero bytes.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Merge two spans into the smallest span covering both.
    ///
    /// The merged span keeps the line/column of the earlier start.
    pub fn merge(self, other: Span) -> Span {
        let (line, column) = if self.start <= other.start {
            (self.line, self.column)
        } else {
            (other.line, other.column)
        };
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line,
            column,
            file_id: self.file_id,
        }
    }

    /// Attach a file id to this span.
    pub fn with_file_id(mut self, file_id: FileId) -> Self {
        self.file_id = file_id;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_span() {
        let span = Span::new(3, 7, 2, 4);
        assert_eq!(span.start, 3);
        assert_eq!(span.end, 7);
        assert_eq!(span.len(), 4);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_point_span_is_empty() {
        assert!(Span::point(1, 1).is_empty());
        assert_eq!(Span::point(1, 1).len(), 0);
    }

    #[test]
    fn test_merge_keeps_earlier_position() {
        let a = Span::new(10, 12, 2, 3);
        let b = Span::new(4, 8, 1, 5);
        let merged = a.merge(b);
        assert_eq!(merged.start, 4);
        assert_eq!(merged.end, 12);
        assert_eq!(merged.line, 1);
        assert_eq!(merged.column, 5);
    }
}
