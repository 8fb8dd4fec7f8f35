//! # web-calc
//!
//! web-calc evaluates free-form arithmetic expressions such as `(1 + 2) * -3.5`.
//! It supports decimal numbers, the four basic operators, unary minus and
//! parentheses, and reports every invalid input as a structured error instead
//! of a sentinel value.
//!
//! The crate is a pipeline of three stateless stages behind one entry point,
//! [`calculate`]:
//!
//! 1. [`interpreter::lexer`] turns text into tokens.
//! 2. [`interpreter::parser`] turns tokens into an [`ast::Expr`].
//! 3. [`interpreter::evaluator`] turns the tree into an `f64`.
//!
//! With the `wasm` feature the same entry point is exported to JavaScript.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    error::CalcError,
    interpreter::{evaluator::evaluate, lexer::tokenize, parser::parse},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the `BinaryOperator` type that
/// represent an expression as a tree. The tree is built by the parser and
/// walked by the evaluator.
///
/// # Responsibilities
/// - Defines the node types for literals, negation and binary operations.
/// - Writes expressions back to canonical source text.
/// - Renders trees for debugging.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// Every stage has its own error enum carrying the details of the failure,
/// including the character position where one exists. [`error::CalcError`]
/// wraps them for the caller of [`calculate`].
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Classifies failures into a flat [`error::ErrorKind`].
/// - Renders human-readable messages with 1-based columns.
pub mod error;
/// Orchestrates lexing, parsing, and evaluation.
///
/// # Responsibilities
/// - Hosts the three stages of the pipeline.
/// - Exposes each stage on its own for testing and tooling.
pub mod interpreter;
/// JavaScript bindings for the browser front end.
#[cfg(feature = "wasm")]
pub mod wasm;

/// Evaluates an arithmetic expression and returns its value.
///
/// The input is tokenized, parsed and evaluated in turn. The first stage that
/// fails stops the pipeline and its error is returned; no partial result is
/// ever produced. The call keeps no state, so it may be repeated or run on
/// several threads at once.
///
/// # Errors
/// Returns a [`CalcError`] wrapping the lexing, parsing or runtime error that
/// stopped the calculation.
///
/// # Examples
/// ```
/// use web_calc::{calculate, error::ErrorKind};
///
/// assert_eq!(calculate("1 + 2 * 3").unwrap(), 7.0);
/// assert_eq!(calculate("(1 + 2) * 3").unwrap(), 9.0);
/// assert_eq!(calculate("--5").unwrap(), 5.0);
///
/// assert_eq!(calculate("   ").unwrap_err().kind(), ErrorKind::EmptyExpression);
/// assert_eq!(calculate("(1 + 2").unwrap_err().kind(), ErrorKind::UnmatchedParen);
/// ```
pub fn calculate(input: &str) -> Result<f64, CalcError> {
    debug!(input, "calculating");

    let result = run_pipeline(input);

    match &result {
        Ok(value) => debug!(value, "calculation succeeded"),
        Err(e) => debug!(kind = ?e.kind(), error = %e, "calculation failed"),
    }

    result
}

fn run_pipeline(input: &str) -> Result<f64, CalcError> {
    let tokens = tokenize(input)?;
    let expr = parse(&tokens)?;
    Ok(evaluate(&expr)?)
}
