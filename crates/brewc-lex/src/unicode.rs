//! Character classification for identifiers and literals.
//!
//! Brew follows JVM identifier rules: `$` and `_` are letters in ordinary
//! identifiers, but `$` is excluded inside string interpolation so that
//! `$$` and `$` escapes stay unambiguous.

/// Whether `c` can start an ordinary identifier.
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c == '$' || c.is_alphabetic()
}

/// Whether `c` can continue an ordinary identifier.
pub fn is_ident_part(c: char) -> bool {
    c == '_' || c == '$' || c.is_alphanumeric()
}

/// Whether `c` can start an interpolated identifier (no `$`).
pub fn is_gstring_ident_start(c: char) -> bool {
    c == '_' || (c != '$' && c.is_alphabetic())
}

/// Whether `c` can continue an interpolated identifier (no `$`).
pub fn is_gstring_ident_part(c: char) -> bool {
    c == '_' || (c != '$' && c.is_alphanumeric())
}

/// Whether a `$` followed by `c` begins an interpolation: `${expr}` or
/// `$name`.
pub fn is_interpolation_opener(c: char) -> bool {
    c == '{' || is_gstring_ident_start(c)
}

/// Inline whitespace: space, tab, form feed. Line breaks are tracked
/// separately because they can be significant.
pub fn is_inline_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{000C}')
}

/// Whether `c` is a valid digit in the given base.
pub fn is_digit_in_base(c: char, base: u32) -> bool {
    c.is_digit(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dollar_is_ident_but_not_gstring_ident() {
        assert!(is_ident_start('$'));
        assert!(is_ident_part('$'));
        assert!(!is_gstring_ident_start('$'));
        assert!(!is_gstring_ident_part('$'));
    }

    #[test]
    fn test_unicode_letters() {
        assert!(is_ident_start('é'));
        assert!(is_gstring_ident_part('ß'));
        assert!(!is_ident_start('9'));
        assert!(is_ident_part('9'));
    }

    #[test]
    fn test_interpolation_opener() {
        assert!(is_interpolation_opener('{'));
        assert!(is_interpolation_opener('a'));
        assert!(is_interpolation_opener('_'));
        assert!(!is_interpolation_opener('$'));
        assert!(!is_interpolation_opener(' '));
        assert!(!is_interpolation_opener('1'));
    }

    #[test]
    fn test_digit_bases() {
        assert!(is_digit_in_base('7', 8));
        assert!(!is_digit_in_base('8', 8));
        assert!(is_digit_in_base('f', 16));
        assert!(!is_digit_in_base('g', 16));
    }
}
