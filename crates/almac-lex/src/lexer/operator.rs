//! Punctuation scanning.
//!
//! Two-character sequences are tried before their one-character prefixes.
//! Characters that only occur as part of a longer sequence (`=`, `:`,
//! `&`, and `.`) are unknown tokens on their own.

use super::core::Lexer;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

impl Lexer {
    /// Scans a punctuation token. The cursor sits on its first character.
    pub(super) fn scan_symbol(&mut self) -> Result<Token, LexError> {
        let start = self.token_start.clone();
        let c = self.source.current();
        self.source.advance();
        let kind = match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '*' => TokenKind::Star,
            '^' => TokenKind::Caret,
            '<' => {
                if self.eat('-') {
                    TokenKind::ArrowLeft
                } else if self.eat('=') {
                    TokenKind::Le
                } else {
                    TokenKind::Lt
                }
            },
            '>' => {
                if self.eat('=') {
                    TokenKind::Ge
                } else {
                    TokenKind::Gt
                }
            },
            // A second dash would have started a line comment.
            '-' => {
                if self.eat('>') {
                    TokenKind::ArrowRight
                } else {
                    TokenKind::Minus
                }
            },
            '+' => {
                if self.eat('+') {
                    TokenKind::PlusPlus
                } else {
                    TokenKind::Plus
                }
            },
            // The comment forms were consumed before dispatch.
            '/' => {
                if self.eat('=') {
                    TokenKind::NotEq
                } else {
                    TokenKind::Slash
                }
            },
            '|' => {
                if self.eat('|') {
                    TokenKind::OrOr
                } else {
                    TokenKind::Pipe
                }
            },
            '.' => {
                if self.eat('.') {
                    TokenKind::DotDot
                } else {
                    return Err(LexError::UnknownToken {
                        ch: '.',
                        position: start,
                    });
                }
            },
            ':' => {
                if self.eat('=') {
                    TokenKind::Assign
                } else {
                    return Err(LexError::UnknownToken {
                        ch: ':',
                        position: start,
                    });
                }
            },
            '=' => {
                if self.eat('=') {
                    TokenKind::EqEq
                } else {
                    return Err(LexError::UnknownToken {
                        ch: '=',
                        position: start,
                    });
                }
            },
            '&' => {
                if self.eat('&') {
                    TokenKind::AndAnd
                } else {
                    return Err(LexError::UnknownToken {
                        ch: '&',
                        position: start,
                    });
                }
            },
            other => {
                return Err(LexError::UnknownToken {
                    ch: other,
                    position: start,
                });
            },
        };
        Ok(Token::new(kind, None, start, self.end_position()))
    }
}
