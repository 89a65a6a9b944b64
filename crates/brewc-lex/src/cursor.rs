//! Character cursor for traversing source code.
//!
//! The `Cursor` maintains position state while iterating through source
//! text. It handles UTF-8 correctly and tracks 1-based line/column
//! information for error reporting.

/// A cursor for traversing source code character by character.
///
/// The cursor keeps the current byte position in the source string and
/// provides methods for advancing, peeking ahead, and taking slices. The
/// whole unit is buffered up front; there is no streaming input.
///
/// # Example
///
/// ```
/// use brewc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("def x");
/// assert_eq!(cursor.current_char(), 'd');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'e');
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

/// A saved cursor position, used for speculative scans.
#[derive(Clone, Copy, Debug)]
pub struct CursorSnapshot {
    position: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the current character, or `'\0'` at end of input.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters ahead of the current one,
    /// or `'\0'` past the end of input.
    ///
    /// # Example
    ///
    /// ```
    /// use brewc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("ab");
    /// assert_eq!(cursor.peek_char(0), 'a');
    /// assert_eq!(cursor.peek_char(1), 'b');
    /// assert_eq!(cursor.peek_char(2), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let rest = &self.source[self.position..];

        // Fast path for ASCII lookahead.
        let bytes = rest.as_bytes();
        if offset < bytes.len() && bytes[..=offset].iter().all(|b| *b < 128) {
            return bytes[offset] as char;
        }

        rest.chars().nth(offset).unwrap_or('\0')
    }

    /// Advances past the current character, updating line/column tracking.
    ///
    /// A `'\n'` moves to the first column of the next line; everything else
    /// (including `'\r'`) advances the column by one.
    pub fn advance(&mut self) {
        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Advances past `count` characters.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            self.advance();
        }
    }

    /// Consumes the current character if it equals `expected`.
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Whether the unconsumed input starts with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.source[self.position..].starts_with(prefix)
    }

    /// Whether the cursor has reached the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// The source slice from `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// The unconsumed remainder of the source.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// The full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Saves the current position for a later [`Cursor::restore`].
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Rewinds the cursor to a previously saved position.
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.column = snapshot.column;
    }
}
