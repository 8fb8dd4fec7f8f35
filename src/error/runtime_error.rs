use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Attempted division by zero.
    #[error("Division by zero: {dividend} / 0.")]
    DivisionByZero {
        /// The value that was to be divided.
        dividend: f64,
    },
}
