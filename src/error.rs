/// Lexing errors.
///
/// Raised while the input text is split into tokens: characters that belong
/// to no token and number literals that cannot be read.
pub mod lex_error;
/// Parsing errors.
///
/// Raised while the token sequence is assembled into an expression tree:
/// empty input, missing operands, unbalanced parentheses and leftover tokens.
pub mod parse_error;
/// Runtime errors.
///
/// Raised while an expression tree is evaluated. The only arithmetic failure
/// is division by zero.
pub mod runtime_error;
/// The error returned by [`crate::calculate`].
pub mod calc_error;

pub use calc_error::{CalcError, ErrorKind};
pub use lex_error::LexError;
pub use parse_error::{Expected, ParseError};
pub use runtime_error::RuntimeError;
