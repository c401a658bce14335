//! Diagnostic codes for categorizing lexical errors and warnings.
//!
//! Codes follow the format `{prefix}{number}` where the prefix is `L` for
//! lexical errors and `W` for warnings, and the number is zero-padded to
//! four digits. They give users a stable handle for documentation lookup
//! and for matching diagnostics in tooling.
//!
//! # Examples
//!
//! ```
//! use almac_util::DiagnosticCode;
//!
//! assert_eq!(DiagnosticCode::L0001.as_string(), "L0001");
//! assert_eq!(DiagnosticCode::W0001.prefix, "W");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (`L` for lexical errors, `W` for warnings).
    pub prefix: &'static str,
    /// The numeric identifier.
    pub number: u32,
}

impl DiagnosticCode {
    /// Unknown token.
    pub const L0001: DiagnosticCode = DiagnosticCode::new("L", 1);
    /// Identifier must start with an alphabetic character.
    pub const L0002: DiagnosticCode = DiagnosticCode::new("L", 2);
    /// Numeric constant with a leading zero.
    pub const L0003: DiagnosticCode = DiagnosticCode::new("L", 3);
    /// Unclosed string constant.
    pub const L0004: DiagnosticCode = DiagnosticCode::new("L", 4);
    /// Unclosed multiline comment or pragma.
    pub const L0005: DiagnosticCode = DiagnosticCode::new("L", 5);
    /// Comment or pragma still open when the whole stream is exhausted.
    pub const L0006: DiagnosticCode = DiagnosticCode::new("L", 6);
    /// Unknown pragma directive (warning).
    pub const W0001: DiagnosticCode = DiagnosticCode::new("W", 1);

    /// Creates a new diagnostic code.
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Renders the code as `{prefix}{number:04}`.
    ///
    /// # Examples
    ///
    /// ```
    /// use almac_util::DiagnosticCode;
    ///
    /// assert_eq!(DiagnosticCode::new("L", 12).as_string(), "L0012");
    /// ```
    pub fn as_string(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}
