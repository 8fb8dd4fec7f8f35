/// Core evaluation logic.
///
/// Contains the recursive tree walk and the result type shared by the
/// evaluator.
pub mod core;

/// Binary operator evaluation.
///
/// Applies the four arithmetic operators to evaluated operands and checks
/// division for a zero divisor.
pub mod binary;

pub use self::core::evaluate;
