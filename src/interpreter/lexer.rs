use std::fmt;

use logos::Logos;
use tracing::trace;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the calculator.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(error = LexFailure)]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `3.14`, `.5` or `2.`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    #[regex(r"[0-9]*\.[0-9]*\.[0-9.]*", reject_number)]
    #[token(".", reject_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// End of input. Never matched by the lexer itself; [`tokenize`] appends
    /// exactly one after the last real token.
    End,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "number {n}"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::End => write!(f, "end of input"),
        }
    }
}

/// Error produced by the generated lexer for a single token.
///
/// Carries no location; [`tokenize`] attaches the span and turns it into a
/// [`LexError`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexFailure {
    /// Input that starts no token.
    #[default]
    UnexpectedChar,
    /// A number literal that cannot be read.
    MalformedNumber,
}

/// Parses a number literal from the current token slice.
fn parse_number(lex: &logos::Lexer<Token>) -> Result<f64, LexFailure> {
    lex.slice()
       .parse()
       .map_err(|_| LexFailure::MalformedNumber)
}

/// Rejects a literal with a misplaced or repeated decimal point.
fn reject_number(_: &logos::Lexer<Token>) -> Result<f64, LexFailure> {
    Err(LexFailure::MalformedNumber)
}

/// Splits `source` into tokens paired with their 0-based character positions.
///
/// Whitespace between tokens is skipped. The returned sequence always ends
/// with a single [`Token::End`] positioned at the character length of
/// `source`, so empty input yields `[(End, 0)]`.
///
/// # Errors
/// - [`LexError::UnexpectedChar`] for a character that starts no token.
/// - [`LexError::MalformedNumber`] for a literal with more than one `.` or
///   with no digits.
///
/// # Examples
/// ```
/// use web_calc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2 * (3.5)").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(2.0), 0),
///                 (Token::Star, 2),
///                 (Token::LParen, 4),
///                 (Token::Number(3.5), 5),
///                 (Token::RParen, 8),
///                 (Token::End, 9)]);
///
/// assert!(tokenize("2 $ 3").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    // Byte offsets from logos are converted to character offsets incrementally.
    let mut byte_cursor = 0;
    let mut char_cursor = 0;

    while let Some(token) = lexer.next() {
        let start = lexer.span().start;
        char_cursor += source[byte_cursor..start].chars().count();
        byte_cursor = start;
        let position = char_cursor;

        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(LexFailure::MalformedNumber) => {
                return Err(LexError::MalformedNumber { literal: lexer.slice().to_string(),
                                                       position });
            },
            Err(LexFailure::UnexpectedChar) => {
                let ch = source[start..].chars()
                                        .next()
                                        .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(LexError::UnexpectedChar { ch, position });
            },
        }
    }

    char_cursor += source[byte_cursor..].chars().count();
    tokens.push((Token::End, char_cursor));

    trace!(?tokens, "tokenized input");

    Ok(tokens)
}
