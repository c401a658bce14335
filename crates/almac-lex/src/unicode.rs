//! Character classification for Alma identifiers.
//!
//! Identifiers follow Unicode alphabetic classification rather than an
//! ASCII whitelist, so localized programs can use native-script names.

/// Returns true if `c` can begin an identifier.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Returns true if `c` can appear after the first character of an
/// identifier. Apostrophes are allowed in the body but never lead.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\''
}
