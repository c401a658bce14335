//! Numeric constant scanning.

use almac_util::Span;

use super::core::Lexer;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

impl Lexer {
    /// Scans a run of decimal digits. A constant of more than one digit
    /// may not begin with `0`; a lone `0` is fine.
    pub(super) fn scan_number(&mut self) -> Result<Token, LexError> {
        let start = self.token_start.clone();
        let file = self.token_file;
        let mut text = String::new();
        while self.source.file_index() == file && self.source.current().is_ascii_digit() {
            text.push(self.source.current());
            self.source.advance();
        }
        let end = self.end_position();
        if text.len() > 1 && text.starts_with('0') {
            return Err(LexError::NumericConstantLeadingZero {
                text,
                span: Span::new(start, end),
            });
        }
        Ok(Token::new(TokenKind::Number, Some(text), start, end))
    }
}
