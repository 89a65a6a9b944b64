//! brewc-util - Shared infrastructure for the Brew compiler front end.
//!
//! This crate provides the pieces every compiler phase leans on:
//!
//! - [`span`] - Source location tracking (`Span`, `FileId`)
//! - [`diagnostic`] - Error and warning collection (`Handler`, `Diagnostic`,
//!   `DiagnosticBuilder`, `DiagnosticCode`)
//!
//! It also re-exports the `FxHashMap`/`FxHashSet` types used for interning
//! and keyword tables throughout the compiler.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use span::{FileId, Span};

pub use rustc_hash::FxHashMap;
pub use rustc_hash::FxHashSet;
