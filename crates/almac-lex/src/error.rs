//! Fatal lexical errors.
//!
//! Every condition that stops tokenization is a [`LexError`] variant. The
//! `Display` text is a fixed English rendering for logs and test output;
//! user-facing text comes from [`LexError::localized`], which goes through
//! the active message catalog.

use almac_i18n::{DiagnosticId, Messages};
use almac_util::{DiagnosticCode, Position, Span};
use thiserror::Error;

/// A fatal error detected while scanning.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LexError {
    /// A character that starts no token.
    #[error("unknown token '{ch}' at {position}")]
    UnknownToken {
        /// The offending character.
        ch: char,
        /// Where it was found.
        position: Position,
    },

    /// An identifier beginning with a quote character.
    #[error("identifier at {position} must start with an alphabetic character")]
    IdentifierMustStartWithAlphabetic {
        /// Where the quote was found.
        position: Position,
    },

    /// A numeric constant of more than one digit beginning with `0`.
    #[error("numeric constant '{text}' at {} has a leading zero", .span.start)]
    NumericConstantLeadingZero {
        /// The offending digit text.
        text: String,
        /// The characters of the constant.
        span: Span,
    },

    /// A string constant not closed before a newline or end of input.
    #[error("unclosed string constant starting at {}", .span.start)]
    UnclosedStringConstant {
        /// From the opening quote to where scanning gave up.
        span: Span,
    },

    /// A block comment or pragma not closed within its input.
    #[error("unclosed multiline comment starting at {}", .span.start)]
    UnclosedMultilineComment {
        /// From the comment opener to where scanning gave up.
        span: Span,
    },

    /// A block comment left open across one or more later files until the
    /// whole stream ran out.
    #[error("premature end of file: comment opened at {} is never closed", .span.start)]
    PrematureEndOfFile {
        /// From the comment opener to the end of the stream.
        span: Span,
    },
}

impl LexError {
    /// Returns the stable diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnknownToken { .. } => DiagnosticCode::L0001,
            LexError::IdentifierMustStartWithAlphabetic { .. } => DiagnosticCode::L0002,
            LexError::NumericConstantLeadingZero { .. } => DiagnosticCode::L0003,
            LexError::UnclosedStringConstant { .. } => DiagnosticCode::L0004,
            LexError::UnclosedMultilineComment { .. } => DiagnosticCode::L0005,
            LexError::PrematureEndOfFile { .. } => DiagnosticCode::L0006,
        }
    }

    /// Returns the message-catalog identifier for this error.
    pub fn diagnostic_id(&self) -> DiagnosticId {
        match self {
            LexError::UnknownToken { .. } => DiagnosticId::UnknownToken,
            LexError::IdentifierMustStartWithAlphabetic { .. } => {
                DiagnosticId::IdentifierMustStartWithAlphabetic
            },
            LexError::NumericConstantLeadingZero { .. } => {
                DiagnosticId::NumericConstantLeadingZero
            },
            LexError::UnclosedStringConstant { .. } => DiagnosticId::UnclosedStringConstant,
            LexError::UnclosedMultilineComment { .. } => DiagnosticId::UnclosedMultilineComment,
            LexError::PrematureEndOfFile { .. } => DiagnosticId::PrematureEndOfFile,
        }
    }

    /// Returns the position where the error was detected.
    ///
    /// For span-carrying variants this is the start of the span.
    pub fn position(&self) -> &Position {
        match self {
            LexError::UnknownToken { position, .. } => position,
            LexError::IdentifierMustStartWithAlphabetic { position } => position,
            LexError::NumericConstantLeadingZero { span, .. } => &span.start,
            LexError::UnclosedStringConstant { span } => &span.start,
            LexError::UnclosedMultilineComment { span } => &span.start,
            LexError::PrematureEndOfFile { span } => &span.start,
        }
    }

    /// Returns the source range the error covers.
    ///
    /// Variants that carry only a point position yield a zero-width span.
    pub fn span(&self) -> Span {
        match self {
            LexError::UnknownToken { position, .. } => Span::point(position.clone()),
            LexError::IdentifierMustStartWithAlphabetic { position } => {
                Span::point(position.clone())
            },
            LexError::NumericConstantLeadingZero { span, .. } => span.clone(),
            LexError::UnclosedStringConstant { span } => span.clone(),
            LexError::UnclosedMultilineComment { span } => span.clone(),
            LexError::PrematureEndOfFile { span } => span.clone(),
        }
    }

    /// Renders the error text through the given message catalog.
    ///
    /// # Examples
    ///
    /// ```
    /// use almac_i18n::{Locale, Messages};
    /// use almac_lex::LexError;
    /// use almac_util::Position;
    ///
    /// let error = LexError::UnknownToken {
    ///     ch: '~',
    ///     position: Position::new("main.alma", 1, 1, None),
    /// };
    /// let german = Messages::new(Locale::De);
    /// assert_eq!(error.localized(&german), "unbekanntes Token '~'");
    /// ```
    pub fn localized(&self, messages: &Messages) -> String {
        match self {
            LexError::UnknownToken { ch, .. } => {
                let ch = ch.to_string();
                messages.render(DiagnosticId::UnknownToken, &[&ch])
            },
            LexError::NumericConstantLeadingZero { text, .. } => {
                messages.render(DiagnosticId::NumericConstantLeadingZero, &[text])
            },
            other => messages.render(other.diagnostic_id(), &[]),
        }
    }
}
