use std::fmt;

use thiserror::Error;

use crate::interpreter::lexer::Token;

/// What the parser was looking for when it found something else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A number literal or an opening parenthesis.
    Primary,
    /// The `)` closing a group.
    ClosingParen,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => write!(f, "a number or '('"),
            Self::ClosingParen => write!(f, "')'"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
/// Represents all errors that can occur while parsing a token sequence.
pub enum ParseError {
    /// The input contained no tokens besides the end marker.
    #[error("Expression is empty.")]
    EmptyExpression,
    /// Found a token where a different one was required.
    #[error("Expected {expected} at column {}, found {found}.", .position + 1)]
    UnexpectedToken {
        /// What the grammar required at this point.
        expected: Expected,
        /// The token encountered.
        found:    Token,
        /// Where the token appears.
        position: usize,
    },
    /// An opening parenthesis was never closed.
    #[error("Parenthesis opened at column {} is never closed.", .position + 1)]
    UnmatchedParen {
        /// Where the opening parenthesis appears.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    #[error("Extra {found} at column {} after the expression.", .position + 1)]
    TrailingTokens {
        /// The first leftover token.
        found:    Token,
        /// Where the leftover token appears.
        position: usize,
    },
    /// Parentheses or negations nest deeper than the parser allows, or the
    /// expression tree grows taller than that.
    #[error("Expression nests deeper than {limit} levels at column {}.", .position + 1)]
    NestingTooDeep {
        /// The deepest nesting accepted.
        limit:    usize,
        /// Where the limit was passed.
        position: usize,
    },
}

impl ParseError {
    /// Returns the position the error refers to, if it has one.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::EmptyExpression => None,
            Self::UnexpectedToken { position, .. }
            | Self::UnmatchedParen { position }
            | Self::TrailingTokens { position, .. }
            | Self::NestingTooDeep { position, .. } => Some(*position),
        }
    }
}
