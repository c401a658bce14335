//! Virtual source for traversing multi-file Alma input.
//!
//! This module provides the `VirtualSource` struct which presents one or
//! more named character streams as a single logical stream. It maintains
//! position state while iterating, reporting the originating filename with
//! line/column reset to 1 at the start of each file, and crosses file
//! boundaries transparently on `advance`.
//!
//! Lookahead with `peek` deliberately stops at the end of the current
//! file (returning the end sentinel), so no lexeme can be assembled from
//! characters of two different files.

use std::sync::Arc;

use indexmap::IndexMap;

/// Sentinel returned when peeking past the end of the current file or
/// past the end of the whole stream.
pub const EOF_CHAR: char = '\0';

/// Filename assigned to a source constructed from a single anonymous blob.
pub const DEFAULT_FILE: &str = "<input>";

/// One named virtual file. Empty files are dropped at construction and
/// never appear here.
struct SourceFile {
    name: Arc<str>,
    chars: Vec<char>,
}

/// A cursor over the concatenation of one or more named source files.
///
/// The cursor reports the current character, supports bounded lookahead
/// within the current file, and tracks filename/line/column for every
/// position. Reaching the end of one file moves the cursor to the start
/// of the next non-empty file, resetting line and column to 1.
///
/// # Example
///
/// ```
/// use almac_lex::source::VirtualSource;
///
/// let mut source = VirtualSource::single("let x");
/// assert_eq!(source.current(), 'l');
/// source.advance();
/// assert_eq!(source.current(), 'e');
/// ```
pub struct VirtualSource {
    /// Non-empty files in insertion order.
    files: Vec<SourceFile>,

    /// Index of the current file (== `files.len()` once exhausted).
    file_idx: usize,

    /// Character index within the current file.
    pos: usize,

    /// Current line number (1-based, per file).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,

    /// Filename reported once the stream is exhausted.
    end_name: Arc<str>,

    /// Location one past the most recently consumed character, kept in
    /// that character's own file even when the cursor has already moved
    /// on to the next one.
    last_file: Arc<str>,
    last_line: u32,
    last_column: u32,
}

impl VirtualSource {
    /// Creates a source from a single anonymous text blob.
    ///
    /// The blob is assigned the default filename `<input>`.
    pub fn single(text: &str) -> Self {
        let mut files = IndexMap::new();
        files.insert(DEFAULT_FILE.to_string(), text.to_string());
        Self::from_files(files)
    }

    /// Creates a source from a filename-to-contents mapping, iterated in
    /// insertion order.
    ///
    /// Files with zero characters are skipped entirely. An empty mapping,
    /// or a mapping of only empty files, yields a source that is at end
    /// immediately.
    pub fn from_files(files: IndexMap<String, String>) -> Self {
        let mut end_name: Arc<str> = Arc::from(DEFAULT_FILE);
        let mut kept = Vec::new();
        for (name, text) in files {
            let name: Arc<str> = Arc::from(name.as_str());
            end_name = name.clone();
            if !text.is_empty() {
                kept.push(SourceFile {
                    name,
                    chars: text.chars().collect(),
                });
            }
        }
        // Exhausted positions report the last file that held characters.
        if let Some(last) = kept.last() {
            end_name = last.name.clone();
        }
        let start_name = kept
            .first()
            .map(|f| f.name.clone())
            .unwrap_or_else(|| end_name.clone());
        Self {
            files: kept,
            file_idx: 0,
            pos: 0,
            line: 1,
            column: 1,
            end_name,
            last_file: start_name,
            last_line: 1,
            last_column: 1,
        }
    }

    /// Returns the character at the given offset from the current
    /// position, without crossing a file boundary.
    ///
    /// Returns [`EOF_CHAR`] when the offset reaches past the end of the
    /// current file or past the end of the stream.
    ///
    /// # Example
    ///
    /// ```
    /// use almac_lex::source::{VirtualSource, EOF_CHAR};
    ///
    /// let source = VirtualSource::single("ab");
    /// assert_eq!(source.peek(0), 'a');
    /// assert_eq!(source.peek(1), 'b');
    /// assert_eq!(source.peek(2), EOF_CHAR);
    /// ```
    #[inline]
    pub fn peek(&self, offset: usize) -> char {
        match self.files.get(self.file_idx) {
            Some(file) => file.chars.get(self.pos + offset).copied().unwrap_or(EOF_CHAR),
            None => EOF_CHAR,
        }
    }

    /// Returns the current character, or [`EOF_CHAR`] at end of stream.
    #[inline]
    pub fn current(&self) -> char {
        self.peek(0)
    }

    /// Advances the cursor to the next character.
    ///
    /// Updates line and column tracking. Consuming the last character of
    /// a file moves the cursor to the start of the next file with line
    /// and column reset to 1. Does nothing once the stream is exhausted.
    pub fn advance(&mut self) {
        let Some(file) = self.files.get(self.file_idx) else {
            return;
        };
        let c = file.chars[self.pos];
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.last_file = file.name.clone();
        self.last_line = self.line;
        self.last_column = self.column;
        if self.pos >= file.chars.len() {
            self.file_idx += 1;
            self.pos = 0;
            if self.file_idx < self.files.len() {
                self.line = 1;
                self.column = 1;
            }
        }
    }

    /// Returns true if every file has been fully consumed.
    pub fn is_at_end(&self) -> bool {
        self.file_idx >= self.files.len()
    }

    /// Returns the index of the current file.
    ///
    /// Indices count only non-empty files; once the stream is exhausted
    /// this equals the number of such files. Scanners compare indices to
    /// detect that a lexeme would otherwise straddle a file boundary.
    #[inline]
    pub fn file_index(&self) -> usize {
        self.file_idx
    }

    /// Returns the name of the file the next character will come from,
    /// or of the last file once the stream is exhausted.
    pub fn file_name(&self) -> Arc<str> {
        match self.files.get(self.file_idx) {
            Some(file) => file.name.clone(),
            None => self.end_name.clone(),
        }
    }

    /// Returns (filename, line, column) of the next character to be read,
    /// or of the end of the stream.
    pub fn location(&self) -> (Arc<str>, u32, u32) {
        (self.file_name(), self.line, self.column)
    }

    /// Returns (filename, line, column) one past the most recently
    /// consumed character, staying in that character's own file.
    ///
    /// This is the natural end position for a lexeme that runs up to the
    /// last character of a file: unlike [`VirtualSource::location`], it
    /// does not jump to the start of the following file.
    pub fn last_end(&self) -> (Arc<str>, u32, u32) {
        (self.last_file.clone(), self.last_line, self.last_column)
    }
}
