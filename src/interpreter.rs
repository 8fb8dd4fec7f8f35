/// The evaluator module computes the value of an expression tree.
///
/// The evaluator walks the AST recursively, applies the arithmetic operators
/// and produces a single `f64`. It holds no state between calls.
///
/// # Responsibilities
/// - Evaluates literals, negation and the four binary operators.
/// - Reports division by zero as a runtime error.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw input and produces a sequence of tokens, each a
/// number, an operator or a parenthesis, paired with its character position.
/// This is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input text into positioned tokens ending in `End`.
/// - Reads decimal number literals.
/// - Reports unknown characters and malformed numbers.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive descent over four precedence tiers: sums,
/// products, negation and primaries.
///
/// # Responsibilities
/// - Converts tokens into an expression tree with correct precedence and
///   associativity.
/// - Reports empty input, missing operands, unbalanced parentheses and
///   leftover tokens with their positions.
pub mod parser;
