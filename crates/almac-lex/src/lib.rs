//! almac-lex - Lexical analysis for the Alma language.
//!
//! The lexer turns one or more named source texts into a stream of
//! classified tokens. Input files are presented to the scanners as a
//! single logical character stream (the [`source::VirtualSource`]), with
//! per-file line and column tracking; no individual lexeme may straddle a
//! file boundary, but block comments may.
//!
//! Comments come in three line styles (`//`, `#`, two or more `-`) and
//! two independently nesting block styles (`/* */` and `{- -}`). A `/*`
//! immediately followed by `@` is a pragma; the region pragmas annotate
//! following tokens with a logical region name that ends up in their
//! positions.
//!
//! Keyword spellings are locale-dependent and resolved through
//! `almac-i18n` when the lexer is built. Recoverable anomalies (such as
//! unknown pragma directives) accumulate as warnings; everything else is
//! a fatal [`LexError`].
//!
//! # Examples
//!
//! ```
//! use almac_lex::{Lexer, TokenKind};
//!
//! let (tokens, warnings) = Lexer::new("if x <= 3 then y <- \"ok\";")
//!     .tokenize()
//!     .unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::If);
//! assert_eq!(tokens.last().unwrap().kind, TokenKind::Semicolon);
//! assert!(warnings.is_empty());
//! ```

#![warn(missing_docs)]

pub mod error;
mod lexer;
pub mod source;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

pub use error::LexError;
pub use lexer::Lexer;
pub use token::{Token, TokenKind};
