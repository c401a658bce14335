//! Identifier and keyword scanning.

use super::core::Lexer;
use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::unicode;

impl Lexer {
    /// Scans an identifier, then resolves it against the locale's keyword
    /// table. A lone `_` is the wildcard; otherwise the case of the first
    /// character decides between the two identifier kinds, with caseless
    /// first characters counting as lowercase.
    pub(super) fn scan_identifier(&mut self) -> Result<Token, LexError> {
        let start = self.token_start.clone();
        let file = self.token_file;
        let mut text = String::new();
        while self.source.file_index() == file && unicode::is_ident_continue(self.source.current())
        {
            text.push(self.source.current());
            self.source.advance();
        }
        let end = self.end_position();
        if text == "_" {
            return Ok(Token::new(TokenKind::Underscore, None, start, end));
        }
        if let Some(&kind) = self.keywords.get(text.as_str()) {
            return Ok(Token::new(kind, None, start, end));
        }
        let kind = match text.chars().next() {
            Some(c) if c.is_uppercase() => TokenKind::UpperIdent,
            _ => TokenKind::LowerIdent,
        };
        Ok(Token::new(kind, Some(text), start, end))
    }
}
