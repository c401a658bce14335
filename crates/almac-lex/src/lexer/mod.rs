//! The token scanner.
//!
//! The [`Lexer`] lives in `core`; the remaining submodules each implement
//! one scanning concern as an `impl` block on it: comments and pragmas,
//! identifiers and keywords, numeric constants, string constants, and
//! punctuation.

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;
