//! Comment and pragma scanning.
//!
//! Three line-comment markers (`//`, `#`, and two or more `-`) run to the
//! end of the line or of the current file. Two block-comment styles nest,
//! each against its own delimiters only: `/* */` and `{- -}`. A `/*`
//! opener immediately followed by `@` is a pragma rather than a comment.
//!
//! A pragma is `@NAME`, optionally followed by `@`-separated payload
//! fields, running up to the comment's own closer: `/*@END_REGION*/`,
//! `/*@BEGIN_REGION@init*/`. `BEGIN_REGION` and `END_REGION` maintain the
//! logical region stack; any other directive is skipped with a warning.

use std::sync::Arc;

use almac_i18n::DiagnosticId;
use almac_util::{DiagnosticCode, Position, Span};

use super::core::Lexer;
use crate::error::LexError;

/// Which block-comment delimiters are in effect.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(super) enum CommentStyle {
    /// `/*` ... `*/`
    Slash,
    /// `{-` ... `-}`
    Brace,
}

impl Lexer {
    /// Consumes whitespace, comments, and pragmas until the next token
    /// character (or end of stream).
    pub(super) fn skip_trivia(&mut self) -> Result<(), LexError> {
        loop {
            match self.source.current() {
                ' ' | '\t' | '\r' | '\n' => self.source.advance(),
                '/' if self.source.peek(1) == '*' => {
                    self.skip_block_comment(CommentStyle::Slash)?;
                },
                '/' if self.source.peek(1) == '/' => self.skip_line_comment(),
                '-' if self.source.peek(1) == '-' => self.skip_line_comment(),
                '#' => self.skip_line_comment(),
                '{' if self.source.peek(1) == '-' => {
                    self.skip_block_comment(CommentStyle::Brace)?;
                },
                _ => break,
            }
        }
        Ok(())
    }

    /// Consumes up to, but not including, the next newline. Stops silently
    /// at a file boundary: a line comment never leaks into the next file.
    fn skip_line_comment(&mut self) {
        let file = self.source.file_index();
        while self.source.file_index() == file && self.source.current() != '\n' {
            self.source.advance();
        }
    }

    /// Consumes a block comment, tracking nesting depth against this
    /// style's delimiters only. The other style's delimiters are ordinary
    /// comment text here.
    fn skip_block_comment(&mut self, style: CommentStyle) -> Result<(), LexError> {
        let open_pos = self.here();
        let open_file = self.source.file_index();
        self.source.advance();
        self.source.advance();
        if style == CommentStyle::Slash && self.source.current() == '@' {
            return self.scan_pragma(open_pos, open_file);
        }
        let (open0, open1, close0, close1) = match style {
            CommentStyle::Slash => ('/', '*', '*', '/'),
            CommentStyle::Brace => ('{', '-', '-', '}'),
        };
        let mut depth = 1usize;
        while depth > 0 {
            if self.source.is_at_end() {
                return Err(self.unclosed_comment(&open_pos, open_file));
            }
            let c = self.source.current();
            if c == open0 && self.source.peek(1) == open1 {
                depth += 1;
                self.source.advance();
                self.source.advance();
            } else if c == close0 && self.source.peek(1) == close1 {
                depth -= 1;
                self.source.advance();
                self.source.advance();
            } else {
                self.source.advance();
            }
        }
        Ok(())
    }

    /// Scans a pragma. The cursor sits on the `@` right after the `/*`
    /// opener.
    fn scan_pragma(&mut self, open_pos: Position, open_file: usize) -> Result<(), LexError> {
        self.source.advance();
        let name = self.pragma_field(&open_pos, open_file)?;
        let mut fields = Vec::new();
        while self.source.current() == '@' {
            self.source.advance();
            fields.push(self.pragma_field(&open_pos, open_file)?);
        }
        // pragma_field only returns with the cursor on `@` or the closer
        self.source.advance();
        self.source.advance();
        self.apply_pragma(&name, fields.first().map(String::as_str), open_pos);
        Ok(())
    }

    fn at_closer(&self) -> bool {
        self.source.current() == '*' && self.source.peek(1) == '/'
    }

    /// Reads one pragma field up to the next `@` separator or the comment
    /// closer, leaving the cursor on whichever ended it.
    fn pragma_field(&mut self, open_pos: &Position, open_file: usize) -> Result<String, LexError> {
        let mut text = String::new();
        loop {
            if self.source.is_at_end() {
                return Err(self.unclosed_comment(open_pos, open_file));
            }
            if self.at_closer() || self.source.current() == '@' {
                return Ok(text);
            }
            text.push(self.source.current());
            self.source.advance();
        }
    }

    /// Applies a recognized pragma directive or records a warning for an
    /// unknown one. Unknown directives never abort scanning.
    fn apply_pragma(&mut self, name: &str, payload: Option<&str>, pos: Position) {
        match (name, payload) {
            ("BEGIN_REGION", Some(region)) => {
                log::trace!("entering region '{}' at {}", region, pos);
                let previous = self.current_region.take();
                self.region_stack.push(previous);
                self.current_region = Some(Arc::from(region));
            },
            ("END_REGION", _) => {
                self.current_region = self.region_stack.pop().flatten();
                log::trace!(
                    "leaving region at {}, back to {:?}",
                    pos,
                    self.current_region
                );
            },
            _ => {
                log::warn!("ignoring unknown pragma directive '{}'", name);
                let message = self.messages.render(DiagnosticId::UnknownPragma, &[name]);
                self.handler.warn(DiagnosticCode::W0001, message, pos);
            },
        }
    }

    /// Builds the error for a block comment or pragma that never closed.
    ///
    /// When scanning gave up in a file later than the one right after the
    /// opener's, the open delimiter silently swallowed at least one whole
    /// file and the stronger premature-end-of-file error is reported.
    fn unclosed_comment(&self, open_pos: &Position, open_file: usize) -> LexError {
        let span = Span::new(open_pos.clone(), self.end_position());
        if open_file + 1 < self.source.file_index() {
            LexError::PrematureEndOfFile { span }
        } else {
            LexError::UnclosedMultilineComment { span }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Token, TokenKind};
    use almac_i18n::Locale;
    use indexmap::IndexMap;

    fn lex_all(text: &str) -> Vec<Token> {
        let (tokens, _) = Lexer::new(text).tokenize().unwrap();
        tokens
    }

    fn values(text: &str) -> Vec<String> {
        lex_all(text)
            .into_iter()
            .filter_map(|t| t.value)
            .collect()
    }

    #[test]
    fn test_line_comment_slash() {
        assert_eq!(values("1 // comment 2\n3"), vec!["1", "3"]);
    }

    #[test]
    fn test_line_comment_hash() {
        assert_eq!(values("1 # comment 2\n3"), vec!["1", "3"]);
    }

    #[test]
    fn test_line_comment_dashes() {
        assert_eq!(values("1 -- comment 2\n3"), vec!["1", "3"]);
        assert_eq!(values("1 ---- also a comment\n3"), vec!["1", "3"]);
    }

    #[test]
    fn test_single_dash_is_minus() {
        let kinds: Vec<_> = lex_all("1 - 2").into_iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Number, TokenKind::Minus, TokenKind::Number]
        );
    }

    #[test]
    fn test_nested_slash_comments() {
        assert_eq!(
            values("1 /* 2 /* 3 /*4*/ 5 /*6*/ 7 */ 8 /*9*/ 10//--*/ 11"),
            vec!["1", "11"]
        );
    }

    #[test]
    fn test_nested_brace_comments() {
        assert_eq!(
            values("5{-{-{-{-{-4-}-}-}-}-}3{-{-{-{-{-2-}-}-}-}-}1"),
            vec!["5", "3", "1"]
        );
    }

    #[test]
    fn test_styles_do_not_interact() {
        // A brace opener inside a slash comment is plain text.
        assert_eq!(values("/* {- */ 1"), vec!["1"]);
        // And a slash opener inside a brace comment is plain text.
        assert_eq!(values("{- /* -} 2"), vec!["2"]);
    }

    #[test]
    fn test_unclosed_slash_comment() {
        let error = Lexer::new("1 /* never closed").tokenize().unwrap_err();
        assert!(matches!(error, LexError::UnclosedMultilineComment { .. }));
        assert_eq!(error.position().column, 3);
    }

    #[test]
    fn test_unclosed_brace_comment() {
        let error = Lexer::new("{- open").tokenize().unwrap_err();
        assert!(matches!(error, LexError::UnclosedMultilineComment { .. }));
    }

    #[test]
    fn test_comment_may_cross_file_boundary() {
        let mut files = IndexMap::new();
        files.insert("a.alma".to_string(), "1 /* open".to_string());
        files.insert("b.alma".to_string(), "still open */ 2".to_string());
        let (tokens, _) = Lexer::from_files(files, Locale::En).tokenize().unwrap();
        let values: Vec<_> = tokens.into_iter().filter_map(|t| t.value).collect();
        assert_eq!(values, vec!["1", "2"]);
    }

    #[test]
    fn test_comment_swallowing_whole_file_is_premature_eof() {
        let mut files = IndexMap::new();
        files.insert("a.alma".to_string(), "/* open".to_string());
        files.insert("b.alma".to_string(), "swallowed".to_string());
        files.insert("c.alma".to_string(), "also swallowed".to_string());
        let error = Lexer::from_files(files, Locale::En).tokenize().unwrap_err();
        assert!(matches!(error, LexError::PrematureEndOfFile { .. }));
        assert_eq!(error.position().file.as_ref(), "a.alma");
    }

    #[test]
    fn test_unclosed_comment_in_last_file_is_not_premature() {
        let mut files = IndexMap::new();
        files.insert("a.alma".to_string(), "1".to_string());
        files.insert("b.alma".to_string(), "/* open".to_string());
        let error = Lexer::from_files(files, Locale::En).tokenize().unwrap_err();
        assert!(matches!(error, LexError::UnclosedMultilineComment { .. }));
    }

    #[test]
    fn test_region_pragmas_nest() {
        let text = "/*@BEGIN_REGION@A*/ 1 /*@BEGIN_REGION@B*/ 2 \
                    /*@END_REGION*/ 3 /*@BEGIN_REGION@C*/ 4 \
                    /*@END_REGION*/ 5 /*@END_REGION*/";
        let (tokens, warnings) = Lexer::new(text).tokenize().unwrap();
        let values: Vec<_> = tokens.iter().map(|t| t.value_str().unwrap()).collect();
        assert_eq!(values, vec!["1", "2", "3", "4", "5"]);
        let regions: Vec<_> = tokens
            .iter()
            .map(|t| t.start.region_name().map(str::to_string))
            .collect();
        assert_eq!(
            regions,
            vec![
                Some("A".to_string()),
                Some("B".to_string()),
                Some("A".to_string()),
                Some("C".to_string()),
                Some("A".to_string()),
            ]
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_end_region_on_empty_stack_clears_region() {
        let (tokens, _) = Lexer::new("/*@END_REGION*/ x").tokenize().unwrap();
        assert_eq!(tokens[0].start.region_name(), None);
    }

    #[test]
    fn test_unknown_pragma_warns_and_continues() {
        let (tokens, warnings) = Lexer::new("/*@FROBNICATE*/ 1").tokenize().unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, DiagnosticCode::W0001);
        assert_eq!(warnings[0].message, "unknown pragma directive 'FROBNICATE'");
    }

    #[test]
    fn test_unknown_pragma_with_payload_warns() {
        let (_, warnings) = Lexer::new("/*@FROB@payload*/ 1").tokenize().unwrap();
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_begin_region_without_payload_warns() {
        let (tokens, warnings) = Lexer::new("/*@BEGIN_REGION*/ x").tokenize().unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(tokens[0].start.region_name(), None);
    }

    #[test]
    fn test_pragma_running_off_the_end() {
        let error = Lexer::new("/*@BEGIN_REGION@A").tokenize().unwrap_err();
        assert!(matches!(error, LexError::UnclosedMultilineComment { .. }));
        assert_eq!(error.position().column, 1);
    }
}
