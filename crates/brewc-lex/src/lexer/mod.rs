//! Lexer implementation.
//!
//! The [`Lexer`] struct lives in [`core`]; the sibling modules each hold one
//! family of lexing methods (comments, identifiers, numbers, operators,
//! strings) as additional `impl Lexer` blocks.

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;
