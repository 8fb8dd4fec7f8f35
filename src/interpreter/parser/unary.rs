use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::{Expected, ParseError},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parsed, check_depth, parse_expression, peek},
    },
};

/// Parses a unary expression.
///
/// Negation is right-associative and may be repeated, so `--5` parses as
/// `-(-5)`. It binds tighter than every binary operator: `-2 * 3` is
/// `(-2) * 3`. Each negation counts as one level of nesting.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let (Token::Minus, position) = peek(tokens) {
        tokens.next();
        check_depth(depth + 1, position)?;
        let operand = parse_unary(tokens, depth + 1)?;
        let height = operand.height + 1;
        check_depth(height, position)?;
        Ok(Parsed { expr: Expr::negate(operand.expr),
                    height })
    } else {
        parse_primary(tokens, depth)
    }
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := number
///              | "(" expression ")"
/// ```
///
/// # Errors
/// Returns [`ParseError::UnexpectedToken`] when the next token is neither a
/// number nor `(`. This includes the end of input, as in `1 +`.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match peek(tokens) {
        (Token::Number(value), _) => {
            tokens.next();
            Ok(Parsed::leaf(Expr::Literal(value)))
        },
        (Token::LParen, position) => {
            tokens.next();
            check_depth(depth + 1, position)?;
            parse_grouping(tokens, position, depth + 1)
        },
        (found, position) => Err(ParseError::UnexpectedToken { expected: Expected::Primary,
                                                               found,
                                                               position }),
    }
}

/// Parses the inside of a parenthesized group and its closing `)`.
///
/// Grouping produces no node of its own; the inner expression is returned
/// as is.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `(`.
/// - `open`: Position of the `(`, reported if it is never closed.
/// - `depth`: Nesting depth inside the group.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, open: usize, depth: usize) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let inner = parse_expression(tokens, depth)?;

    match peek(tokens) {
        (Token::RParen, _) => {
            tokens.next();
            Ok(inner)
        },
        (Token::End, _) => Err(ParseError::UnmatchedParen { position: open }),
        (found, position) => Err(ParseError::UnexpectedToken { expected: Expected::ClosingParen,
                                                               found,
                                                               position }),
    }
}
