use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A front-end failure: what went wrong plus where.
///
/// Parse errors are unrecoverable for the construct being parsed; callers
/// display them and never branch on the variant.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnknownToken { .. } => "UnknownToken",
            ErrorImpl::ExpectedCloseParen => "ExpectedCloseParen",
            ErrorImpl::ExpectedElse => "ExpectedElse",
            ErrorImpl::ExpectedBlockStart => "ExpectedBlockStart",
            ErrorImpl::ExpectedBlockEnd => "ExpectedBlockEnd",
            ErrorImpl::ExpectedArgumentSeparator => "ExpectedArgumentSeparator",
            ErrorImpl::ExpectedFunctionName => "ExpectedFunctionName",
            ErrorImpl::ExpectedPrototypeOpen => "ExpectedPrototypeOpen",
            ErrorImpl::ExpectedPrototypeClose => "ExpectedPrototypeClose",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
            ErrorImpl::UnknownToken { token } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`", token))
            }
            ErrorImpl::ExpectedBlockStart => ErrorTip::Suggestion(String::from(
                "the body of a `while` must be wrapped in braces",
            )),
            ErrorImpl::ExpectedArgumentSeparator => {
                ErrorTip::Suggestion(String::from("separate call arguments with `,`"))
            }
            ErrorImpl::ExpectedCloseParen
            | ErrorImpl::ExpectedElse
            | ErrorImpl::ExpectedBlockEnd
            | ErrorImpl::ExpectedFunctionName
            | ErrorImpl::ExpectedPrototypeOpen
            | ErrorImpl::ExpectedPrototypeClose => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("unknown token when expecting an expression")]
    UnknownToken { token: String },
    #[error("expected ')'")]
    ExpectedCloseParen,
    #[error("expected 'else'")]
    ExpectedElse,
    #[error("expected '{{' at start of block")]
    ExpectedBlockStart,
    #[error("expected '}}' at end of block")]
    ExpectedBlockEnd,
    #[error("expected ')' or ',' in argument list")]
    ExpectedArgumentSeparator,
    #[error("expected function name in prototype")]
    ExpectedFunctionName,
    #[error("expected '(' in prototype")]
    ExpectedPrototypeOpen,
    #[error("expected ')' in prototype")]
    ExpectedPrototypeClose,
}
