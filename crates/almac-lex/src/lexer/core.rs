//! Lexer construction, dispatch, and the token iteration surface.

use std::sync::Arc;

use almac_i18n::{Keyword, Locale, Messages};
use almac_util::{Handler, Position, Warning};
use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::error::LexError;
use crate::source::VirtualSource;
use crate::token::{keyword_kind, Token, TokenKind};
use crate::unicode;

/// The Alma lexer.
///
/// A `Lexer` owns one [`VirtualSource`] and turns it into a stream of
/// [`Token`]s. Keyword spellings are resolved at construction from the
/// locale's message catalog, so the scanning loop itself is locale-blind.
/// Warnings accumulate in an internal handler and never interrupt
/// tokenization; fatal conditions surface as [`LexError`].
///
/// # Examples
///
/// ```
/// use almac_lex::{Lexer, TokenKind};
///
/// let (tokens, warnings) = Lexer::new("let x <- 42;").tokenize().unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         TokenKind::Let,
///         TokenKind::LowerIdent,
///         TokenKind::ArrowLeft,
///         TokenKind::Number,
///         TokenKind::Semicolon,
///     ]
/// );
/// assert!(warnings.is_empty());
/// ```
pub struct Lexer {
    pub(super) source: VirtualSource,
    pub(super) messages: Messages,
    pub(super) keywords: FxHashMap<&'static str, TokenKind>,
    pub(super) handler: Handler,
    pub(super) current_region: Option<Arc<str>>,
    pub(super) region_stack: Vec<Option<Arc<str>>>,
    pub(super) token_start: Position,
    pub(super) token_file: usize,
    done: bool,
}

impl Lexer {
    /// Creates a lexer over a single anonymous text blob with the default
    /// locale.
    pub fn new(text: &str) -> Self {
        Self::with_source(VirtualSource::single(text), Locale::default())
    }

    /// Creates a lexer over a single anonymous text blob with an explicit
    /// locale.
    pub fn with_locale(text: &str, locale: Locale) -> Self {
        Self::with_source(VirtualSource::single(text), locale)
    }

    /// Creates a lexer over a filename-to-contents mapping, scanned in
    /// insertion order as one logical stream.
    pub fn from_files(files: IndexMap<String, String>, locale: Locale) -> Self {
        Self::with_source(VirtualSource::from_files(files), locale)
    }

    fn with_source(source: VirtualSource, locale: Locale) -> Self {
        let messages = Messages::new(locale);
        let mut keywords = FxHashMap::default();
        for keyword in Keyword::ALL {
            for spelling in messages.keyword_spellings(keyword) {
                keywords.insert(*spelling, keyword_kind(keyword));
            }
        }
        let (file, line, column) = source.location();
        let token_start = Position::new(file, line, column, None);
        Self {
            source,
            messages,
            keywords,
            handler: Handler::new(),
            current_region: None,
            region_stack: Vec::new(),
            token_start,
            token_file: 0,
            done: false,
        }
    }

    /// Returns the locale the lexer was constructed with.
    pub fn locale(&self) -> Locale {
        self.messages.locale()
    }

    /// Returns the warnings accumulated so far, in detection order.
    pub fn warnings(&self) -> &[Warning] {
        self.handler.warnings()
    }

    /// Returns the name of the logical region currently active, if any.
    pub fn current_region(&self) -> Option<&str> {
        self.current_region.as_deref()
    }

    /// Scans and returns the next token.
    ///
    /// Whitespace, comments, and pragmas before the token are consumed
    /// first; pragmas take effect as side effects on the region state.
    /// Once the stream is exhausted every further call returns an
    /// end-of-stream token at the same position.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_trivia()?;
        if self.source.is_at_end() {
            return Ok(Token::eof(self.here()));
        }
        self.token_start = self.here();
        self.token_file = self.source.file_index();
        match self.source.current() {
            '"' => self.scan_string(),
            '\'' => {
                let position = self.token_start.clone();
                self.source.advance();
                Err(LexError::IdentifierMustStartWithAlphabetic { position })
            },
            c if c.is_ascii_digit() => self.scan_number(),
            c if unicode::is_ident_start(c) => self.scan_identifier(),
            _ => self.scan_symbol(),
        }
    }

    /// Scans the whole stream, returning all tokens before end-of-stream
    /// together with the accumulated warnings.
    pub fn tokenize(mut self) -> Result<(Vec<Token>, Vec<Warning>), LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            if token.kind == TokenKind::Eof {
                break;
            }
            tokens.push(token);
        }
        Ok((tokens, self.handler.warnings().to_vec()))
    }

    /// Snapshot of the position of the next character to be read.
    pub(super) fn here(&self) -> Position {
        let (file, line, column) = self.source.location();
        Position::new(file, line, column, self.current_region.clone())
    }

    /// Snapshot one past the most recently consumed character, staying in
    /// that character's file. This is the end position of the lexeme just
    /// scanned.
    pub(super) fn end_position(&self) -> Position {
        let (file, line, column) = self.source.last_end();
        Position::new(file, line, column, self.current_region.clone())
    }

    /// Consumes the current character if it matches and belongs to the
    /// same file as the token being scanned.
    pub(super) fn eat(&mut self, expected: char) -> bool {
        if self.source.file_index() == self.token_file && self.source.current() == expected {
            self.source.advance();
            true
        } else {
            false
        }
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, LexError>;

    /// Yields tokens until end-of-stream, then `None`. A fatal error is
    /// yielded once and ends the iteration.
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.kind == TokenKind::Eof => {
                self.done = true;
                None
            },
            Ok(token) => Some(Ok(token)),
            Err(error) => {
                self.done = true;
                Some(Err(error))
            },
        }
    }
}
