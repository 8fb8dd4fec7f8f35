use std::iter::Peekable;

use tracing::trace;

use crate::{
    ast::Expr,
    error::{CalcError, ParseError},
    interpreter::{
        lexer::{Token, tokenize},
        parser::binary::parse_additive,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting the parser accepts.
///
/// Bounds both the number of enclosing parentheses and negations the parser
/// descends through and the height of the finished tree, which in turn bounds
/// the recursion of evaluation, formatting and dropping.
pub const MAX_DEPTH: usize = 256;

/// A parsed subexpression together with the height of its tree.
///
/// A literal has height 1; negation and binary operations add one level on top
/// of their tallest operand. Parentheses add nothing.
#[derive(Debug)]
pub struct Parsed {
    /// The parsed expression.
    pub expr:   Expr,
    /// Height of `expr`, never above [`MAX_DEPTH`].
    pub height: usize,
}

impl Parsed {
    pub(in crate::interpreter::parser) const fn leaf(expr: Expr) -> Self {
        Self { expr, height: 1 }
    }
}

/// Parses a complete token sequence into an expression tree.
///
/// The sequence is expected to come from
/// [`tokenize`](crate::interpreter::lexer::tokenize) and therefore to end
/// with [`Token::End`]. A missing end marker is treated as if it were there.
///
/// # Errors
/// - [`ParseError::EmptyExpression`] if there is nothing before the end.
/// - [`ParseError::UnexpectedToken`] if an operand or `)` is missing.
/// - [`ParseError::UnmatchedParen`] if a `(` is still open at the end.
/// - [`ParseError::TrailingTokens`] if tokens remain after a complete
///   expression.
/// - [`ParseError::NestingTooDeep`] if parentheses or negations nest, or the
///   tree grows, deeper than [`MAX_DEPTH`].
///
/// # Examples
/// ```
/// use web_calc::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{lexer::tokenize, parser::parse},
/// };
///
/// let tokens = tokenize("1 - 2 - 3").unwrap();
/// let expected = Expr::binary(BinaryOperator::Sub,
///                             Expr::binary(BinaryOperator::Sub,
///                                          Expr::Literal(1.0),
///                                          Expr::Literal(2.0)),
///                             Expr::Literal(3.0));
/// assert_eq!(parse(&tokens).unwrap(), expected);
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();

    if let (Token::End, _) = peek(&mut iter) {
        return Err(ParseError::EmptyExpression);
    }

    let Parsed { expr, .. } = parse_expression(&mut iter, 0)?;

    match peek(&mut iter) {
        (Token::End, _) => {
            trace!(%expr, "parsed expression");
            Ok(expr)
        },
        (found, position) => Err(ParseError::TrailingTokens { found, position }),
    }
}

/// Tokenizes and parses `source` in one step.
///
/// # Errors
/// Returns the lexing or parsing error, wrapped in a [`CalcError`].
pub fn parse_source(source: &str) -> Result<Expr, CalcError> {
    let tokens = tokenize(source)?;
    Ok(parse(&tokens)?)
}

/// Parses a full expression.
///
/// This is the lowest-precedence rule; parenthesized groups recurse back into
/// it.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
/// - `depth`: Number of parentheses and negations enclosing this expression.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_additive(tokens, depth)
}

/// Fails with [`ParseError::NestingTooDeep`] once `depth` passes [`MAX_DEPTH`].
pub(in crate::interpreter::parser) const fn check_depth(depth: usize,
                                                        position: usize)
                                                        -> ParseResult<()> {
    if depth > MAX_DEPTH {
        return Err(ParseError::NestingTooDeep { limit: MAX_DEPTH,
                                                position });
    }
    Ok(())
}

/// Returns the next token and its position without consuming it.
///
/// An exhausted stream reads as [`Token::End`].
pub(in crate::interpreter::parser) fn peek<'a, I>(tokens: &mut Peekable<I>) -> (Token, usize)
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.peek()
          .map_or((Token::End, 0), |&&(token, position)| (token, position))
}
