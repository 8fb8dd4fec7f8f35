use crate::{ast::Expr, error::RuntimeError, interpreter::evaluator::binary::eval_binary};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree and returns its value.
///
/// The walk is a pure recursion over the tree: literals yield their value,
/// negation flips the sign of its operand, and binary operations evaluate
/// the left operand, then the right, then apply the operator. The first
/// failure stops the walk.
///
/// Results follow IEEE-754 double arithmetic, so overflow produces an
/// infinity rather than an error.
///
/// # Errors
/// Returns [`RuntimeError::DivisionByZero`] if any divisor evaluates to zero.
///
/// # Example
/// ```
/// use web_calc::{
///     ast::{BinaryOperator, Expr},
///     interpreter::evaluator::evaluate,
/// };
///
/// let expr = Expr::binary(BinaryOperator::Mul,
///                         Expr::negate(Expr::Literal(2.0)),
///                         Expr::Literal(3.5));
/// assert_eq!(evaluate(&expr).unwrap(), -7.0);
///
/// let expr = Expr::binary(BinaryOperator::Div, Expr::Literal(1.0), Expr::Literal(0.0));
/// assert!(evaluate(&expr).is_err());
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<f64> {
    match expr {
        Expr::Literal(value) => Ok(*value),
        Expr::UnaryMinus(operand) => Ok(-evaluate(operand)?),
        Expr::BinaryOp { op, left, right } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            eval_binary(*op, left, right)
        },
    }
}
