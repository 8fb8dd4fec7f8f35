use std::fmt;

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// Every node owns its children exclusively, so a tree has no sharing and no
/// cycles. Nodes carry no source positions: two trees compare equal exactly
/// when they have the same shape, operators and literal values.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A number literal, such as `2` or `0.5`.
    Literal(f64),
    /// Arithmetic negation of the operand (e.g. `-x`).
    UnaryMinus(Box<Self>),
    /// A binary arithmetic operation.
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl Expr {
    /// Builds a [`Expr::BinaryOp`] node from its parts.
    ///
    /// ## Example
    /// ```
    /// use web_calc::ast::{BinaryOperator, Expr};
    ///
    /// let sum = Expr::binary(BinaryOperator::Add, Expr::Literal(1.0), Expr::Literal(2.0));
    /// assert_eq!(sum.to_string(), "(1 + 2)");
    /// ```
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOp { op,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    /// Builds a [`Expr::UnaryMinus`] node around `operand`.
    #[must_use]
    pub fn negate(operand: Self) -> Self {
        Self::UnaryMinus(Box::new(operand))
    }

    /// Renders the tree one node per line, indenting children by two spaces.
    ///
    /// ## Example
    /// ```
    /// use web_calc::interpreter::parser::parse_source;
    ///
    /// let expr = parse_source("1 + -2").unwrap();
    /// assert_eq!(expr.tree(), "BinaryOp '+'\n  Literal 1\n  UnaryMinus\n    Literal 2\n");
    /// ```
    #[must_use]
    pub fn tree(&self) -> String {
        let mut out = String::new();
        self.write_tree(&mut out, 0);
        out
    }

    fn write_tree(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        match self {
            Self::Literal(value) => {
                out.push_str(&format!("{indent}Literal {value}\n"));
            },
            Self::UnaryMinus(operand) => {
                out.push_str(&format!("{indent}UnaryMinus\n"));
                operand.write_tree(out, depth + 1);
            },
            Self::BinaryOp { op, left, right } => {
                out.push_str(&format!("{indent}BinaryOp '{op}'\n"));
                left.write_tree(out, depth + 1);
                right.write_tree(out, depth + 1);
            },
        }
    }
}

/// Zeros after the leading `1` in the written form of an infinite literal.
/// `1e309` is past `f64::MAX`, so the digits read back as infinity.
const OVERFLOWING_ZEROS: usize = 309;

/// Writes the canonical source form of the expression.
///
/// Every binary operation is wrapped in parentheses and negation is written
/// as a prefix `-`, so the output lexes and parses back into an equal tree.
/// An infinite literal, which only arises from a literal too long for `f64`,
/// is written as a digit string that overflows again.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) if *value == f64::INFINITY => {
                write!(f, "1{}", "0".repeat(OVERFLOWING_ZEROS))
            },
            Self::Literal(value) => write!(f, "{value}"),
            Self::UnaryMinus(operand) => write!(f, "-{operand}"),
            Self::BinaryOp { op, left, right } => write!(f, "({left} {op} {right})"),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
