use std::fmt::Display;

use thiserror::Error;

use crate::Position;

use super::window::snippet_at;

/// Raised when no rule matches at the cursor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}: You have an error in your syntax near '{snippet}'", .position.0)]
pub struct LexicalError {
    pub position: Position,
    pub line: usize,
    pub column: usize,
    pub token: String,
    pub snippet: String,
}

impl LexicalError {
    pub fn new(source: &str, position: Position, line: usize, column: usize) -> Self {
        let offset = position.0 as usize;
        let token = source[offset..]
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_default();

        LexicalError {
            snippet: snippet_at(source, offset),
            position,
            line,
            column,
            token,
        }
    }

    pub fn offset(&self) -> usize {
        self.position.0 as usize
    }
}

#[derive(Debug, Clone)]
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
            ErrorImpl::UnterminatedLiteral { .. } => "UnterminatedLiteral",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { snippet, .. } if snippet.is_empty() => ErrorTip::None,
            ErrorImpl::UnrecognisedToken { snippet, .. } => ErrorTip::Suggestion(format!(
                "You have an error in your syntax near '{}'",
                snippet
            )),
            ErrorImpl::UnterminatedLiteral { quote, .. } => ErrorTip::Suggestion(format!(
                "Missing closing {} for this literal",
                quote
            )),
        }
    }
}

impl From<LexicalError> for Error {
    fn from(error: LexicalError) -> Self {
        let internal_error = match error.token.as_str() {
            "\"" | "'" => ErrorImpl::UnterminatedLiteral {
                quote: error.token,
                snippet: error.snippet,
            },
            _ => ErrorImpl::UnrecognisedToken {
                token: error.token,
                snippet: error.snippet,
            },
        };

        Error::new(internal_error, error.position)
    }
}

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

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String, snippet: String },
    #[error("unterminated literal starting with {quote:?}")]
    UnterminatedLiteral { quote: String, snippet: String },
}
