use crate::{ast::BinaryOperator, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Evaluates a binary arithmetic operation on two already evaluated operands.
///
/// Addition, subtraction and multiplication never fail; their results may be
/// infinite or NaN for extreme operands and are returned unchanged. Division
/// checks its divisor explicitly, treating both `0.0` and `-0.0` as zero.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Errors
/// Returns [`RuntimeError::DivisionByZero`] for `Div` with a zero `right`.
///
/// # Example
/// ```
/// use web_calc::{ast::BinaryOperator, interpreter::evaluator::binary::eval_binary};
///
/// assert_eq!(eval_binary(BinaryOperator::Sub, 1.5, 2.0).unwrap(), -0.5);
/// assert!(eval_binary(BinaryOperator::Div, 1.0, -0.0).is_err());
/// ```
pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
    match op {
        BinaryOperator::Add => Ok(left + right),
        BinaryOperator::Sub => Ok(left - right),
        BinaryOperator::Mul => Ok(left * right),
        BinaryOperator::Div => {
            if right == 0.0 {
                return Err(RuntimeError::DivisionByZero { dividend: left });
            }
            Ok(left / right)
        },
    }
}
