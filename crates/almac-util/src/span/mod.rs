//! Span module - Source location tracking.
//!
//! This module provides types for representing locations in Alma source
//! code. A [`Position`] is an immutable snapshot of a point in the logical
//! character stream: originating filename, 1-based line and column, and
//! the logical region active at that point. A [`Span`] is a start/end pair
//! of positions bracketing the characters of a token or diagnostic.
//!
//! Filenames and region names are stored as `Arc<str>` so positions stay
//! cheap to clone even though every token carries two of them.

use std::fmt;
use std::sync::Arc;

/// An immutable snapshot of a point in the source stream.
///
/// Line and column are 1-based and reset at the start of each virtual
/// file. `region` reflects the top of the region stack at the time the
/// snapshot was taken (`None` when no region is active).
///
/// # Examples
///
/// ```
/// use almac_util::Position;
///
/// let pos = Position::new("main.alma", 3, 7, None);
/// assert_eq!(pos.line, 3);
/// assert_eq!(format!("{}", pos), "main.alma:3:7");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    /// Name of the virtual file this position originates from.
    pub file: Arc<str>,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based, in characters).
    pub column: u32,
    /// Logical region active at this point, if any.
    pub region: Option<Arc<str>>,
}

impl Position {
    /// Creates a new position.
    pub fn new(
        file: impl Into<Arc<str>>,
        line: u32,
        column: u32,
        region: Option<Arc<str>>,
    ) -> Self {
        Self {
            file: file.into(),
            line,
            column,
            region,
        }
    }

    /// Returns the region name as a `&str`, if a region is active.
    ///
    /// # Examples
    ///
    /// ```
    /// use almac_util::Position;
    ///
    /// let pos = Position::new("main.alma", 1, 1, Some("init".into()));
    /// assert_eq!(pos.region_name(), Some("init"));
    /// ```
    pub fn region_name(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)?;
        if let Some(region) = &self.region {
            write!(f, " [{}]", region)?;
        }
        Ok(())
    }
}

/// A source range bracketing the characters of a token or diagnostic.
///
/// `start` points at the first character covered; `end` points one past
/// the last character. A zero-width span (`start == end`) marks a single
/// point, such as end-of-stream.
///
/// # Examples
///
/// ```
/// use almac_util::{Position, Span};
///
/// let start = Position::new("main.alma", 1, 1, None);
/// let end = Position::new("main.alma", 1, 4, None);
/// let span = Span::new(start, end);
/// assert!(!span.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span {
    /// Position of the first covered character.
    pub start: Position,
    /// Position one past the last covered character.
    pub end: Position,
}

impl Span {
    /// Creates a span from a start/end pair.
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Creates a zero-width span at a single point.
    pub fn point(pos: Position) -> Self {
        Self {
            start: pos.clone(),
            end: pos,
        }
    }

    /// Returns true if the span covers no characters.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start)
    }
}
