//! Diagnostic module - Warning accumulation and diagnostic codes.
//!
//! Fatal lexical conditions in Alma abort tokenization through error
//! values; everything recoverable is collected here. The [`Handler`] is an
//! ordered, instance-local sink: each lexer owns exactly one, and callers
//! read the accumulated [`Warning`]s after reaching end-of-stream.
//!
//! # Examples
//!
//! ```
//! use almac_util::{DiagnosticCode, Handler, Position};
//!
//! let mut handler = Handler::new();
//! handler.warn(
//!     DiagnosticCode::W0001,
//!     "unknown pragma directive 'FROB'",
//!     Position::new("main.alma", 1, 1, None),
//! );
//! assert_eq!(handler.warning_count(), 1);
//! ```

mod codes;

pub use codes::DiagnosticCode;

use crate::span::Position;

/// A non-fatal diagnostic produced during tokenization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Warning {
    /// The code identifying this class of warning.
    pub code: DiagnosticCode,
    /// Rendered warning text.
    pub message: String,
    /// Where the anomaly was detected.
    pub position: Position,
}

/// Ordered sink for warnings produced by one lexer instance.
///
/// Warnings arrive in detection order and are never consumed by reading
/// them; the sink is cleared only by dropping the owning lexer (or calling
/// [`Handler::clear`] in tests).
#[derive(Debug, Default)]
pub struct Handler {
    warnings: Vec<Warning>,
}

impl Handler {
    /// Creates an empty handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a warning.
    pub fn warn(&mut self, code: DiagnosticCode, message: impl Into<String>, position: Position) {
        self.warnings.push(Warning {
            code,
            message: message.into(),
            position,
        });
    }

    /// Returns all warnings accumulated so far, in arrival order.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Returns the number of accumulated warnings.
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Returns true if any warning has been recorded.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Discards all accumulated warnings.
    pub fn clear(&mut self) {
        self.warnings.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos() -> Position {
        Position::new("test.alma", 1, 1, None)
    }

    #[test]
    fn test_handler_starts_empty() {
        let handler = Handler::new();
        assert!(!handler.has_warnings());
        assert_eq!(handler.warning_count(), 0);
    }

    #[test]
    fn test_handler_warn() {
        let mut handler = Handler::new();
        handler.warn(DiagnosticCode::W0001, "unknown pragma", pos());
        assert!(handler.has_warnings());
        assert_eq!(handler.warning_count(), 1);
        assert_eq!(handler.warnings()[0].message, "unknown pragma");
    }

    #[test]
    fn test_handler_preserves_order() {
        let mut handler = Handler::new();
        handler.warn(DiagnosticCode::W0001, "first", pos());
        handler.warn(DiagnosticCode::W0001, "second", pos());
        let messages: Vec<_> = handler.warnings().iter().map(|w| w.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn test_handler_reading_does_not_consume() {
        let mut handler = Handler::new();
        handler.warn(DiagnosticCode::W0001, "w", pos());
        assert_eq!(handler.warnings().len(), 1);
        assert_eq!(handler.warnings().len(), 1);
    }

    #[test]
    fn test_handler_clear() {
        let mut handler = Handler::new();
        handler.warn(DiagnosticCode::W0001, "w", pos());
        handler.clear();
        assert!(!handler.has_warnings());
    }
}
