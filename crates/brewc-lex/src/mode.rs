//! Lexical modes and the mode stack.
//!
//! String interpolation nests arbitrarily, so the active mode is kept on an
//! explicit stack rather than in native call-stack recursion: depth is
//! bounded only by memory, and the engine stays a flat pull-based loop.

/// The lexical mode governing which rules apply to the next characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Ordinary code, including embedded `${ ... }` expressions.
    Default,
    /// Inside a `"..."` string body.
    DoubleQuotedString,
    /// Inside a `"""..."""` string body.
    TripleQuotedString,
    /// Inside a `/.../` string body.
    SlashyString,
    /// Inside a `$/.../$` string body.
    DollarSlashyString,
    /// Just consumed an interpolation `$`; deciding between `{expr}` and a
    /// property path.
    GStringTypeSelector,
    /// Consuming the `.name` chain of a `$a.b.c` interpolation.
    GStringPath,
}

/// Stack of lexical modes.
///
/// The bottom entry is always [`Mode::Default`] and can never be popped, so
/// the current mode is always well-defined. Depth above one equals the
/// string-interpolation nesting depth.
#[derive(Debug)]
pub struct ModeStack {
    stack: Vec<Mode>,
}

impl ModeStack {
    /// Create a stack containing only the default mode.
    pub fn new() -> Self {
        Self {
            stack: vec![Mode::Default],
        }
    }

    /// The active mode.
    pub fn current(&self) -> Mode {
        *self.stack.last().expect("mode stack is never empty")
    }

    /// Enter a new mode.
    pub fn push(&mut self, mode: Mode) {
        self.stack.push(mode);
    }

    /// Leave the current mode, returning it. The bottom default mode is
    /// never removed.
    pub fn pop(&mut self) -> Option<Mode> {
        if self.stack.len() > 1 {
            self.stack.pop()
        } else {
            None
        }
    }

    /// Replace the current mode in place.
    ///
    /// Used when the type-selector resolves to a path or expression mode.
    pub fn replace(&mut self, mode: Mode) {
        let top = self.stack.last_mut().expect("mode stack is never empty");
        *top = mode;
    }

    /// Number of modes on the stack (at least 1).
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Default for ModeStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bottom_is_default_and_sticky() {
        let mut modes = ModeStack::new();
        assert_eq!(modes.current(), Mode::Default);
        assert_eq!(modes.pop(), None);
        assert_eq!(modes.depth(), 1);
    }

    #[test]
    fn test_push_pop_nesting() {
        let mut modes = ModeStack::new();
        modes.push(Mode::DoubleQuotedString);
        modes.push(Mode::GStringTypeSelector);
        assert_eq!(modes.current(), Mode::GStringTypeSelector);
        assert_eq!(modes.pop(), Some(Mode::GStringTypeSelector));
        assert_eq!(modes.current(), Mode::DoubleQuotedString);
        assert_eq!(modes.pop(), Some(Mode::DoubleQuotedString));
        assert_eq!(modes.current(), Mode::Default);
    }

    #[test]
    fn test_replace() {
        let mut modes = ModeStack::new();
        modes.push(Mode::GStringTypeSelector);
        modes.replace(Mode::GStringPath);
        assert_eq!(modes.current(), Mode::GStringPath);
        assert_eq!(modes.depth(), 2);
    }
}
