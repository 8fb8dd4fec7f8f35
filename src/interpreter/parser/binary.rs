use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, Parsed, check_depth},
            unary::parse_unary,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles the left-associative binary operators `+` and `-`, so `1 - 2 - 3`
/// parses as `(1 - 2) - 3`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
/// - `depth`: Number of parentheses and negations enclosing this expression.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_multiplicative(tokens, depth)?;
    while let Some((token, position)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    {
        let position = *position;
        tokens.next();
        let right = parse_multiplicative(tokens, depth)?;
        left = combine(op, left, right, position)?;
    }
    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// Binds tighter than [`parse_additive`] and is likewise left-associative.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_unary(tokens, depth)?;
    while let Some((token, position)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
    {
        let position = *position;
        tokens.next();
        let right = parse_unary(tokens, depth)?;
        left = combine(op, left, right, position)?;
    }
    Ok(left)
}

/// Joins two operands under `op`, rejecting trees taller than the limit.
fn combine(op: BinaryOperator, left: Parsed, right: Parsed, position: usize) -> ParseResult<Parsed> {
    let height = left.height.max(right.height) + 1;
    check_depth(height, position)?;
    Ok(Parsed { expr: Expr::binary(op, left.expr, right.expr),
                height })
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that are not binary operators. `-` maps to
/// subtraction; whether it is used as negation instead is decided by the
/// parser from its position.
///
/// # Example
/// ```
/// use web_calc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
