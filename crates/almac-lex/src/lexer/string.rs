//! String constant scanning.
//!
//! String constants are delimited by double quotes and must close on the
//! line they open on, within the file they open in. Backslash escapes are
//! decoded into the token value; an unrecognized escape stands for the
//! escaped character itself, which also covers `\\` and `\"`.

use almac_util::Span;

use super::core::Lexer;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

/// Decodes the character after a backslash.
fn decode_escape(c: char) -> char {
    match c {
        'a' => '\u{07}',
        'b' => '\u{08}',
        'f' => '\u{0C}',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\u{0B}',
        other => other,
    }
}

impl Lexer {
    /// Scans a string constant. The cursor sits on the opening quote.
    pub(super) fn scan_string(&mut self) -> Result<Token, LexError> {
        let start = self.token_start.clone();
        let file = self.token_file;
        self.source.advance();
        let mut text = String::new();
        loop {
            if self.source.file_index() != file || self.source.current() == '\n' {
                return Err(LexError::UnclosedStringConstant {
                    span: Span::new(start, self.end_position()),
                });
            }
            match self.source.current() {
                '"' => {
                    self.source.advance();
                    break;
                },
                '\\' => {
                    self.source.advance();
                    if self.source.file_index() != file || self.source.current() == '\n' {
                        return Err(LexError::UnclosedStringConstant {
                            span: Span::new(start, self.end_position()),
                        });
                    }
                    text.push(decode_escape(self.source.current()));
                    self.source.advance();
                },
                c => {
                    text.push(c);
                    self.source.advance();
                },
            }
        }
        let end = self.end_position();
        Ok(Token::new(TokenKind::Str, Some(text), start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use almac_i18n::Locale;
    use indexmap::IndexMap;

    fn one(text: &str) -> Result<Token, LexError> {
        Lexer::new(text).next_token()
    }

    #[test]
    fn test_simple_string() {
        let token = one(r#""hello""#).unwrap();
        assert_eq!(token.kind, TokenKind::Str);
        assert_eq!(token.value_str(), Some("hello"));
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(one(r#""""#).unwrap().value_str(), Some(""));
    }

    #[test]
    fn test_escapes_are_decoded() {
        let token = one(r#""a\tb\nc""#).unwrap();
        assert_eq!(token.value_str(), Some("a\tb\nc"));
    }

    #[test]
    fn test_escaped_quote_and_backslash() {
        let token = one(r#""say \"hi\" \\ done""#).unwrap();
        assert_eq!(token.value_str(), Some(r#"say "hi" \ done"#));
    }

    #[test]
    fn test_unknown_escape_is_literal() {
        assert_eq!(one(r#""\q""#).unwrap().value_str(), Some("q"));
    }

    #[test]
    fn test_bell_and_vertical_tab_escapes() {
        let token = one(r#""\a\v""#).unwrap();
        assert_eq!(token.value_str(), Some("\u{07}\u{0B}"));
    }

    #[test]
    fn test_string_span() {
        let token = one(r#""ab""#).unwrap();
        assert_eq!(token.start.column, 1);
        assert_eq!(token.end.column, 5);
    }

    #[test]
    fn test_newline_ends_string_with_error() {
        let error = one("\"open\nrest").unwrap_err();
        assert!(matches!(error, LexError::UnclosedStringConstant { .. }));
        assert_eq!(error.position().column, 1);
    }

    #[test]
    fn test_end_of_input_ends_string_with_error() {
        let error = one("\"open").unwrap_err();
        assert!(matches!(error, LexError::UnclosedStringConstant { .. }));
    }

    #[test]
    fn test_string_cannot_cross_file_boundary() {
        let mut files = IndexMap::new();
        files.insert("a.alma".to_string(), "\"open".to_string());
        files.insert("b.alma".to_string(), "closed\" 1".to_string());
        let error = Lexer::from_files(files, Locale::En).tokenize().unwrap_err();
        assert!(matches!(error, LexError::UnclosedStringConstant { .. }));
        assert_eq!(error.position().file.as_ref(), "a.alma");
    }

    #[test]
    fn test_trailing_backslash_is_unclosed() {
        let error = one("\"oops\\").unwrap_err();
        assert!(matches!(error, LexError::UnclosedStringConstant { .. }));
    }
}
