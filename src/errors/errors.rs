use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// A single syntax error collected while parsing.
///
/// Errors never abort a parse; the parser keeps them in source order next to
/// the partial tree it built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
}

impl Error {
    pub fn new(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
        }
    }

    /// The expected token kind, for token mismatches.
    pub fn expected(&self) -> Option<TokenKind> {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, .. } => Some(*expected),
            _ => None,
        }
    }

    /// The kind of the token that was actually observed, when one is recorded.
    pub fn found(&self) -> Option<TokenKind> {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { found, .. } => Some(*found),
            ErrorImpl::NoPrefixHandler { found } => Some(*found),
            ErrorImpl::IllegalToken { .. } => Some(TokenKind::Illegal),
            ErrorImpl::NumberParseError { .. } => Some(TokenKind::Integer),
            ErrorImpl::NestingTooDeep { .. } => None,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NoPrefixHandler { .. } => "NoPrefixHandler",
            ErrorImpl::IllegalToken { .. } => "IllegalToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "expected next token to be `{}`, got `{}` instead",
                expected, found
            )),
            ErrorImpl::NoPrefixHandler { found } => ErrorTip::Suggestion(format!(
                "`{}` cannot start an expression",
                found
            )),
            ErrorImpl::IllegalToken { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { literal } => ErrorTip::Suggestion(format!(
                "Invalid integer: `{}`, is it above the integer limit?",
                literal
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "expressions may nest at most {} levels deep",
                limit
            )),
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

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    #[error("no prefix parse function for {found} found")]
    NoPrefixHandler { found: TokenKind },
    #[error("illegal token: {literal:?}")]
    IllegalToken { literal: String },
    #[error("could not parse {literal:?} as integer")]
    NumberParseError { literal: String },
    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
