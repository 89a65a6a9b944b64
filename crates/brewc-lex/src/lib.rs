//! brewc-lex - Lexical Analyzer for the Brew Scripting Language
//!
//! This crate provides a complete lexer (tokenizer) for the Brew scripting
//! language. It transforms source code into a stream of tokens that can be
//! consumed by the parser.
//!
//! # Overview
//!
//! Brew lexing is context-sensitive in three ways that a character-class
//! tokenizer cannot express:
//!
//! - **Slash disambiguation**: `/` is division after a value-ending token
//!   and a regex/slashy literal everywhere else, so the lexer tracks the
//!   previous parser-visible token.
//! - **Significant newlines**: line breaks terminate statements except
//!   inside `( ... )` and `[ ... ]`, so open delimiters are tracked on a
//!   stack. A `try ( ... )` resource list keeps its newlines.
//! - **String interpolation**: `"a${x}b"` produces segment tokens with the
//!   embedded expression lexed in ordinary-code mode, nesting arbitrarily
//!   deep via a mode stack.
//!
//! Every source character lands in exactly one token (counting the hidden
//! channel), so concatenating all token texts reproduces the input.
//!
//! # Example Usage
//!
//! ```
//! use brewc_lex::{Lexer, TokenKind};
//! use brewc_util::Handler;
//!
//! let source = "def half = total / 2";
//! let mut handler = Handler::new();
//! let lexer = Lexer::new(source, &mut handler);
//!
//! let kinds: Vec<_> = lexer
//!     .map(|t| t.unwrap())
//!     .filter(|t| t.is_default_channel())
//!     .map(|t| t.kind)
//!     .collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Def,
//!         TokenKind::Identifier,
//!         TokenKind::Assign,
//!         TokenKind::Identifier,
//!         TokenKind::Div,
//!         TokenKind::IntegerLiteral,
//!         TokenKind::Eof,
//!     ]
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions and the slash-disambiguation table
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`mode`] - Lexical mode stack for string interpolation
//! - [`paren`] - Open-delimiter tracking and newline significance
//! - [`comment`] - Comment records captured alongside the tokens
//! - [`error`] - Fatal delimiter-balance errors
//! - [`unicode`] - Character classification for identifiers

#![warn(missing_docs)]

pub mod comment;
pub mod cursor;
#[cfg(test)]
mod edge_cases;
pub mod error;
pub mod lexer;
pub mod mode;
pub mod paren;
pub mod token;
pub mod unicode;

pub use comment::{Comment, CommentKind};
pub use error::LexError;
pub use lexer::Lexer;
pub use token::{Channel, Token, TokenKind};

use brewc_util::Handler;

/// Tokenizes a whole source unit, returning every token on both channels
/// up to and including the end-of-input token.
///
/// Diagnostics for recoverable problems go to the handler; only delimiter
/// mismatches fail the call.
///
/// # Errors
///
/// Returns [`LexError`] when a closing delimiter is unbalanced or does not
/// match its opener.
pub fn tokenize(source: &str, handler: &mut Handler) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source, handler);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(source: &str) {
        let mut handler = Handler::new();
        let tokens = tokenize(source, &mut handler).unwrap();
        let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(rebuilt, source);
    }

    #[test]
    fn test_round_trip_reconstruction() {
        round_trip("");
        round_trip("def x = 1 + 2\n");
        round_trip("#!/usr/bin/env brew\nprintln 'hi'\n");
        round_trip("f(a,\n   b) // trailing\n");
        round_trip(r#"def greeting = "hello, ${name.toUpperCase()}!""#);
        round_trip("m = text =~ /a+b*/\nn = 6 / 3\n");
        round_trip("$/raw $$ body/$\n");
        round_trip("0x1F 0b10 0777 1_000 2.5e-3 '''multi\nline'''");
    }

    #[test]
    fn test_hidden_tokens_do_not_disturb_context() {
        // Whitespace and comments sit between `=` and `/`, but the slash
        // still opens a literal because they are not parser-visible.
        let mut handler = Handler::new();
        let tokens = tokenize("x = /* re */ /ab/", &mut handler).unwrap();
        let literal = tokens
            .iter()
            .find(|t| t.kind == TokenKind::StringLiteral)
            .unwrap();
        assert_eq!(literal.text, "/ab/");
    }

    #[test]
    fn test_token_positions() {
        let mut handler = Handler::new();
        let tokens = tokenize("ab\n cd", &mut handler).unwrap();
        let cd = tokens.iter().find(|t| t.text == "cd").unwrap();
        assert_eq!(cd.span.line, 2);
        assert_eq!(cd.span.column, 2);
        assert_eq!(cd.span.start, 4);
        assert_eq!(cd.end_column, 4);
    }

    #[test]
    fn test_interpolation_inside_list_suppresses_newlines() {
        let mut handler = Handler::new();
        let tokens = tokenize("[\"${a}\",\n\"${b}\"]", &mut handler).unwrap();
        let nl = tokens.iter().find(|t| t.kind == TokenKind::Nl).unwrap();
        assert!(!nl.is_default_channel());
    }

    #[test]
    fn test_mismatched_delimiter_points_at_opener() {
        let mut handler = Handler::new();
        let err = tokenize("(0,1]", &mut handler).unwrap_err();
        assert_eq!(
            err,
            LexError::MismatchedDelimiter {
                opened: '(',
                found: ']',
                line: 1,
                column: 1,
            }
        );
    }

    #[test]
    fn test_script_smoke() {
        let source = r#"#!/usr/bin/env brew
package demo.lexer

import java.time.Instant

class Greeter {
    def greet(String name) {
        def when = Instant.now()
        return "hello $name.length at ${when}"
    }
}

def g = new Greeter()
println g.greet('world')  // prints a greeting
"#;
        let mut handler = Handler::new();
        let tokens = tokenize(source, &mut handler).unwrap();
        assert!(!handler.has_errors());

        let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(rebuilt, source);

        let kinds: Vec<_> = tokens
            .iter()
            .filter(|t| t.is_default_channel())
            .map(|t| t.kind)
            .collect();
        assert!(kinds.contains(&TokenKind::Package));
        assert!(kinds.contains(&TokenKind::Class));
        assert!(kinds.contains(&TokenKind::GStringBegin));
        assert!(kinds.contains(&TokenKind::GStringPathPart));
        assert!(kinds.contains(&TokenKind::CapitalizedIdentifier));
    }
}
