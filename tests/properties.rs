use proptest::prelude::*;
use web_calc::{
    ast::{BinaryOperator, Expr},
    calculate,
    error::CalcError,
    interpreter::{evaluator::evaluate, parser::parse_source},
};

fn operator_strategy() -> impl Strategy<Value = BinaryOperator> {
    prop_oneof![Just(BinaryOperator::Add),
                Just(BinaryOperator::Sub),
                Just(BinaryOperator::Mul),
                Just(BinaryOperator::Div)]
}

/// Generates trees the parser could have produced: non-negative literals
/// (including the infinity an overlong literal reads as), negation and the
/// four binary operators. Heights stay within the parser's nesting limit.
fn expr_strategy() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![4 => (0u32..1000).prop_map(|n| Expr::Literal(f64::from(n))),
                           4 => (0.0f64..1.0e6).prop_map(Expr::Literal),
                           1 => Just(Expr::Literal(f64::INFINITY))];

    leaf.prop_recursive(6, 64, 2, |inner| {
            prop_oneof![inner.clone().prop_map(Expr::negate),
                        (operator_strategy(), inner.clone(), inner).prop_map(|(op, l, r)| {
                                                                       Expr::binary(op, l, r)
                                                                   })]
        })
}

proptest! {
    #[test]
    fn canonical_form_parses_back_to_same_tree(expr in expr_strategy()) {
        let text = expr.to_string();
        let reparsed = parse_source(&text);
        prop_assert_eq!(reparsed, Ok(expr), "canonical text: {}", text);
    }

    #[test]
    fn calculate_agrees_with_direct_evaluation(expr in expr_strategy()) {
        let text = expr.to_string();
        match (calculate(&text), evaluate(&expr)) {
            (Ok(a), Ok(b)) => prop_assert!(a == b || (a.is_nan() && b.is_nan()),
                                           "{} gave {} and {}", text, a, b),
            (Err(a), Err(b)) => prop_assert_eq!(a.kind(), CalcError::from(b).kind()),
            (a, b) => prop_assert!(false, "{} gave {:?} and {:?}", text, a, b),
        }
    }

    #[test]
    fn calculate_is_idempotent(input in r"[0-9+\-*/(). ]{0,24}") {
        let first = format!("{:?}", calculate(&input));
        let second = format!("{:?}", calculate(&input));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn arbitrary_text_never_panics(input in ".{0,32}") {
        let _ = calculate(&input);
    }
}
