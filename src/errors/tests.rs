//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn at(offset: u32) -> Position {
    Position(offset, Rc::new("test.kal".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        at(10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_position() {
    let error = Error::new(ErrorImpl::ExpectedCloseParen, at(42));

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "test.kal");
}

#[test]
fn test_grammar_messages() {
    let cases = [
        (
            ErrorImpl::UnknownToken {
                token: ")".to_string(),
            },
            "unknown token when expecting an expression",
        ),
        (ErrorImpl::ExpectedCloseParen, "expected ')'"),
        (ErrorImpl::ExpectedElse, "expected 'else'"),
        (ErrorImpl::ExpectedBlockStart, "expected '{' at start of block"),
        (ErrorImpl::ExpectedBlockEnd, "expected '}' at end of block"),
        (
            ErrorImpl::ExpectedArgumentSeparator,
            "expected ')' or ',' in argument list",
        ),
        (
            ErrorImpl::ExpectedFunctionName,
            "expected function name in prototype",
        ),
        (ErrorImpl::ExpectedPrototypeOpen, "expected '(' in prototype"),
        (ErrorImpl::ExpectedPrototypeClose, "expected ')' in prototype"),
    ];

    for (error_impl, message) in cases {
        assert_eq!(Error::new(error_impl, at(0)).to_string(), message);
    }
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "1.2.3".to_string(),
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(error.to_string(), "error parsing number: \"1.2.3\"");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(ErrorImpl::ExpectedElse, at(0));

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnknownToken {
            token: "}".to_string(),
        },
        at(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Unexpected token: `}`"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
