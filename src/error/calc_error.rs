use thiserror::Error;

use crate::error::{LexError, ParseError, RuntimeError};

/// The failure of a single [`crate::calculate`] call.
///
/// Wraps the error of whichever stage failed first. Callers that only care
/// about success versus failure can ignore the contents; [`CalcError::kind`]
/// gives a flat classification for everything else.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// The input could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens do not form an expression.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Flat classification of every way a calculation can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`LexError::UnexpectedChar`].
    UnexpectedChar,
    /// See [`LexError::MalformedNumber`].
    MalformedNumber,
    /// See [`ParseError::EmptyExpression`].
    EmptyExpression,
    /// See [`ParseError::UnexpectedToken`].
    UnexpectedToken,
    /// See [`ParseError::UnmatchedParen`].
    UnmatchedParen,
    /// See [`ParseError::TrailingTokens`].
    TrailingTokens,
    /// See [`ParseError::NestingTooDeep`].
    NestingTooDeep,
    /// See [`RuntimeError::DivisionByZero`].
    DivisionByZero,
}

impl CalcError {
    /// Returns the kind of failure.
    ///
    /// # Examples
    /// ```
    /// use web_calc::{calculate, error::ErrorKind};
    ///
    /// let err = calculate("1/0").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lex(LexError::UnexpectedChar { .. }) => ErrorKind::UnexpectedChar,
            Self::Lex(LexError::MalformedNumber { .. }) => ErrorKind::MalformedNumber,
            Self::Parse(ParseError::EmptyExpression) => ErrorKind::EmptyExpression,
            Self::Parse(ParseError::UnexpectedToken { .. }) => ErrorKind::UnexpectedToken,
            Self::Parse(ParseError::UnmatchedParen { .. }) => ErrorKind::UnmatchedParen,
            Self::Parse(ParseError::TrailingTokens { .. }) => ErrorKind::TrailingTokens,
            Self::Parse(ParseError::NestingTooDeep { .. }) => ErrorKind::NestingTooDeep,
            Self::Runtime(RuntimeError::DivisionByZero { .. }) => ErrorKind::DivisionByZero,
        }
    }

    /// Returns the 0-based character position the failure refers to, when the
    /// failing stage reported one.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Lex(e) => Some(e.position()),
            Self::Parse(e) => e.position(),
            Self::Runtime(_) => None,
        }
    }
}
