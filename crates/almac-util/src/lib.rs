//! almac-util - Foundation Types for the Alma Toolchain
//!
//! This crate provides the types shared by every phase of the Alma
//! toolchain: source positions with region annotations, position spans,
//! diagnostic codes, and the warning sink used by the lexer.
//!
//! # Overview
//!
//! Alma source text may be split across several named virtual files that
//! are lexed as one logical stream, so a [`Position`] carries the
//! originating filename alongside 1-based line/column numbers and the
//! logical region active at that point. A [`Span`] brackets the characters
//! a token or diagnostic covers.
//!
//! Non-fatal anomalies are accumulated as [`Warning`]s in a [`Handler`];
//! fatal conditions are expressed as error values by the crates that
//! detect them.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{DiagnosticCode, Handler, Warning};
pub use span::{Position, Span};
