//! Unit tests for error handling.
//!
//! This module contains tests for error types, error reporting and the
//! context window quoted in lexical error messages.

use std::rc::Rc;

use pretty_assertions::assert_eq;

use crate::errors::errors::{Error, ErrorImpl, ErrorTip, LexicalError};
use crate::errors::window::{find_window, snippet_at, WindowState, MAX_WORD_BOUNDARIES};
use crate::lexer::lexer::tokenize;
use crate::Position;

fn lexical_error(source: &str) -> LexicalError {
    tokenize(source, Some("test.java".to_string())).unwrap_err()
}

#[test]
fn test_state_transitions() {
    assert_eq!(WindowState::Initial.step(b'a', 0), (WindowState::InsideWord, 0));
    assert_eq!(WindowState::Initial.step(b' ', 0), (WindowState::AtWordBoundary, 0));
    assert_eq!(WindowState::InsideWord.step(b' ', 2), (WindowState::AtWordBoundary, 3));
    assert_eq!(WindowState::AtWordBoundary.step(b' ', 3), (WindowState::AtWordBoundary, 3));
    assert_eq!(WindowState::InsideWord.step(b'\n', 1), (WindowState::HitNewline, 1));
    assert_eq!(WindowState::HitNewline.step(b'a', 1), (WindowState::HitNewline, 1));
    assert!(WindowState::HitNewline.is_terminal());
    assert!(!WindowState::InsideWord.is_terminal());
}

#[test]
fn test_snippet_short_line() {
    assert_eq!(snippet_at("int x = 5 @ 3;", 10), "int x = 5 @ 3;");
}

#[test]
fn test_snippet_is_bounded_by_words() {
    let source = "one two three four five six seven @ eight nine ten eleven twelve thirteen";
    let offset = source.find('@').unwrap();

    assert_eq!(
        snippet_at(source, offset),
        "three four five six seven @ eight nine ten eleven"
    );
    assert_eq!(MAX_WORD_BOUNDARIES, 5);
}

#[test]
fn test_snippet_is_bounded_by_newlines() {
    let source = "int a;\nint b = #;\nint c;";
    let offset = source.find('#').unwrap();

    assert_eq!(find_window(source, offset), (7, 17));
    assert_eq!(snippet_at(source, offset), "int b = #;");
}

#[test]
fn test_snippet_at_buffer_edges() {
    assert_eq!(find_window("@abc def", 0), (0, 8));
    assert_eq!(snippet_at("@abc def", 0), "@abc def");

    let source = "abc def @";
    assert_eq!(find_window(source, source.len() - 1).1, source.len());
    assert_eq!(snippet_at(source, source.len() - 1), "abc def @");
}

#[test]
fn test_snippet_without_spaces() {
    assert_eq!(snippet_at("abc#def", 3), "abc#def");
}

#[test]
fn test_windows_do_not_share_state() {
    let long = "a b c d e f g h i j k l m n o p q r s t u v w x y z";
    let first = snippet_at(long, long.find('m').unwrap());
    let second = snippet_at(long, long.find('m').unwrap());

    assert_eq!(first, second);
    assert_eq!(first, "h i j k l m n o p q");
}

#[test]
fn test_lexical_error_message() {
    let error = lexical_error("int x = 5 @ 3;");

    assert_eq!(
        error.to_string(),
        "10: You have an error in your syntax near 'int x = 5 @ 3;'"
    );
}

#[test]
fn test_lexical_error_position() {
    let error = lexical_error("int a;\nint b = #;\nint c;");

    assert_eq!(error.offset(), 15);
    assert_eq!(error.line, 2);
    assert_eq!(error.column, 8);
    assert_eq!(error.token, "#");
    assert_eq!(error.snippet, "int b = #;");
}

#[test]
fn test_error_from_lexical_error() {
    let error = Error::from(lexical_error("x = 5 @ 3;"));

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 6);
    assert_eq!(
        error.get_tip().to_string(),
        "You have an error in your syntax near 'x = 5 @ 3;'"
    );
}

#[test]
fn test_unterminated_literal() {
    let error = Error::from(lexical_error("String s = \"abc;"));

    assert_eq!(error.get_error_name(), "UnterminatedLiteral");
    assert_eq!(error.get_tip().to_string(), "Missing closing \" for this literal");
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
            snippet: "a @ b".to_string(),
        },
        Position(10, Rc::new("test.java".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 10);
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
            snippet: String::new(),
        },
        Position::null(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_impl_display() {
    let error = ErrorImpl::UnrecognisedToken {
        token: "@".to_string(),
        snippet: String::new(),
    };

    assert_eq!(error.to_string(), "unrecognised token: \"@\"");
}
