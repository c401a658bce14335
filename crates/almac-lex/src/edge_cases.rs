//! Cross-cutting lexer tests: multi-file interactions, region state over
//! longer inputs, and property tests over generated input.

use almac_i18n::Locale;
use almac_util::Warning;
use indexmap::IndexMap;
use proptest::prelude::*;

use crate::error::LexError;
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

fn lex(text: &str) -> (Vec<Token>, Vec<Warning>) {
    Lexer::new(text).tokenize().unwrap()
}

fn lex_files(entries: &[(&str, &str)]) -> Result<(Vec<Token>, Vec<Warning>), LexError> {
    let files: IndexMap<String, String> = entries
        .iter()
        .map(|(n, t)| (n.to_string(), t.to_string()))
        .collect();
    Lexer::from_files(files, Locale::En).tokenize()
}

#[test]
fn test_small_program() {
    let text = r#"
        program demo;
        procedure greet(name) {
            let text <- "hello, " ++ name;
            return text;
        }
    "#;
    let (tokens, warnings) = lex(text);
    assert!(warnings.is_empty());
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds[0], TokenKind::Program);
    assert_eq!(kinds[2], TokenKind::Semicolon);
    assert!(kinds.contains(&TokenKind::Str));
    assert!(kinds.contains(&TokenKind::PlusPlus));
    assert!(kinds.contains(&TokenKind::Return));
}

#[test]
fn test_region_survives_across_files() {
    let (tokens, warnings) = lex_files(&[
        ("a.alma", "/*@BEGIN_REGION@setup*/ x"),
        ("b.alma", "y /*@END_REGION*/ z"),
    ])
    .unwrap();
    assert!(warnings.is_empty());
    assert_eq!(tokens[0].start.region_name(), Some("setup"));
    assert_eq!(tokens[1].start.region_name(), Some("setup"));
    assert_eq!(tokens[2].start.region_name(), None);
}

#[test]
fn test_region_appears_in_position_display() {
    let (tokens, _) = lex("/*@BEGIN_REGION@init*/ x");
    assert_eq!(format!("{}", tokens[0].start), "<input>:1:24 [init]");
}

#[test]
fn test_line_comment_stops_at_file_boundary() {
    // The comment has no newline before the end of its file, but the next
    // file's content is untouched.
    let (tokens, _) = lex_files(&[("a.alma", "1 // trailing"), ("b.alma", "2")]).unwrap();
    let values: Vec<_> = tokens.into_iter().filter_map(|t| t.value).collect();
    assert_eq!(values, vec!["1", "2"]);
}

#[test]
fn test_nested_comment_across_three_files() {
    let (tokens, _) = lex_files(&[
        ("a.alma", "1 /* outer /* inner"),
        ("b.alma", "*/ still outer"),
        ("c.alma", "*/ 2"),
    ])
    .unwrap();
    let values: Vec<_> = tokens.into_iter().filter_map(|t| t.value).collect();
    assert_eq!(values, vec!["1", "2"]);
}

#[test]
fn test_warnings_keep_detection_order() {
    let (_, warnings) = lex("/*@ONE*/ /*@TWO*/ x");
    let names: Vec<_> = warnings.iter().map(|w| w.message.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "unknown pragma directive 'ONE'",
            "unknown pragma directive 'TWO'",
        ]
    );
}

#[test]
fn test_error_after_valid_tokens_reports_errors_position() {
    let mut lexer = Lexer::new("a b ~");
    lexer.next_token().unwrap();
    lexer.next_token().unwrap();
    let error = lexer.next_token().unwrap_err();
    assert_eq!(error.position().column, 5);
}

#[test]
fn test_empty_file_between_tokens_is_invisible() {
    let (tokens, _) = lex_files(&[("a.alma", "1"), ("empty.alma", ""), ("b.alma", "2")]).unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1].start.file.as_ref(), "b.alma");
}

#[test]
fn test_german_program_fragment() {
    let text = "sei zähler <- 0; solange zähler < 10 { zähler <- zähler + 1; }";
    let (tokens, _) = Lexer::with_locale(text, Locale::De).tokenize().unwrap();
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds[0], TokenKind::Let);
    assert_eq!(kinds[5], TokenKind::While);
}

proptest! {
    #[test]
    fn scanning_never_panics(input in "\\PC{0,200}") {
        let mut lexer = Lexer::new(&input);
        // Bounded by input length: every step either consumes a character
        // or ends the stream.
        for _ in 0..=input.chars().count() {
            match lexer.next_token() {
                Ok(token) if token.kind == TokenKind::Eof => break,
                Ok(_) => {},
                Err(_) => break,
            }
        }
    }

    #[test]
    fn plain_identifiers_scan_as_one_token(name in "[a-z][a-z0-9_]{0,20}") {
        let (tokens, warnings) = Lexer::new(&name).tokenize().unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert!(warnings.is_empty());
        // Either a keyword (no value) or an identifier carrying the text.
        match tokens[0].value_str() {
            Some(value) => prop_assert_eq!(value, name.as_str()),
            None => prop_assert!(!tokens[0].kind.has_value()),
        }
    }

    #[test]
    fn numbers_without_leading_zero_round_trip(value in 1u64..1_000_000_000_000u64) {
        let text = value.to_string();
        let (tokens, _) = Lexer::new(&text).tokenize().unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Number);
        prop_assert_eq!(tokens[0].value_str(), Some(text.as_str()));
    }

    #[test]
    fn token_spans_are_ordered_within_a_line(a in "[a-z]{1,8}", b in "[a-z]{1,8}") {
        let text = format!("{} {}", a, b);
        let (tokens, _) = Lexer::new(&text).tokenize().unwrap();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert!(tokens[0].end.column <= tokens[1].start.column);
    }
}
