/// Parser entry points and shared helpers.
///
/// Provides [`parse`](core::parse), which turns a complete token sequence into
/// an expression tree, and the lowest-precedence expression rule the other
/// tiers recurse back into.
pub mod core;

/// Binary operator parsing.
///
/// Implements the two left-associative binary tiers: addition and
/// subtraction, then multiplication and division.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix negation, number literals and parenthesized groups.
pub mod unary;

pub use self::core::{parse, parse_source};
