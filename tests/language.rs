use std::{fs, thread};

use walkdir::WalkDir;
use web_calc::{
    calculate,
    error::{CalcError, ErrorKind, Expected, LexError, ParseError, RuntimeError},
    interpreter::lexer::Token,
};

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (input, expected)) in extract_cases(&content).into_iter().enumerate() {
            count += 1;
            let result = calculate(&input);
            match (expected, result) {
                (Outcome::Value(want), Ok(got)) => {
                    assert!(approx_eq(got, want),
                            "case {} in {:?}: `{}` gave {}, expected {}",
                            i + 1,
                            path,
                            input,
                            got,
                            want);
                },
                (Outcome::Failure(want), Err(e)) => {
                    assert_eq!(format!("{:?}", e.kind()),
                               want,
                               "case {} in {:?}: `{}` failed with {}",
                               i + 1,
                               path,
                               input,
                               e);
                },
                (want, got) => {
                    panic!("case {} in {:?}: `{}` gave {:?}, expected {:?}",
                           i + 1,
                           path,
                           input,
                           got,
                           want)
                },
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

#[derive(Debug)]
enum Outcome {
    Value(f64),
    Failure(String),
}

/// Reads `expression => value` and `expression => !Kind` lines, skipping
/// blank lines and `#` comments.
fn extract_cases(content: &str) -> Vec<(String, Outcome)> {
    let mut cases = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let (input, expected) =
            line.rsplit_once("=>")
                .unwrap_or_else(|| panic!("Case line without '=>': {line}"));
        let expected = expected.trim();
        let outcome = match expected.strip_prefix('!') {
            Some(kind) => Outcome::Failure(kind.to_string()),
            None => {
                Outcome::Value(expected.parse()
                                       .unwrap_or_else(|e| panic!("Bad expected value {expected}: {e}")))
            },
        };
        cases.push((input.to_string(), outcome));
    }

    cases
}

fn approx_eq(got: f64, want: f64) -> bool {
    (got - want).abs() <= 1e-9 * want.abs().max(1.0)
}

fn assert_value(src: &str, want: f64) {
    match calculate(src) {
        Ok(got) => assert!(approx_eq(got, want), "`{src}` gave {got}, expected {want}"),
        Err(e) => panic!("`{src}` failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match calculate(src) {
        Ok(v) => panic!("`{src}` succeeded with {v} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "`{src}` failed with {e}"),
    }
}

#[test]
fn standard_precedence() {
    assert_value("(1+2)*3", 9.0);
    assert_value("1+2*3", 7.0);
    assert_value("2*3-4/2", 4.0);
    assert_value("1 - 2 + 3", 2.0);
    assert_value("2 * 3 / 4", 1.5);
}

#[test]
fn unary_minus_stacks_and_binds_tightest() {
    assert_value("--5", 5.0);
    assert_value("-2*-2", 4.0);
    assert_value("-(1)-(-1)", 0.0);
    assert_failure("5--", ErrorKind::UnexpectedToken);
}

#[test]
fn empty_input_is_error() {
    assert_failure("", ErrorKind::EmptyExpression);
    assert_failure("   ", ErrorKind::EmptyExpression);
    assert_failure("\t\n", ErrorKind::EmptyExpression);
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("1/0", ErrorKind::DivisionByZero);
    assert_value("0/1", 0.0);
    assert_eq!(calculate("4 / (2 - 2)"),
               Err(CalcError::Runtime(RuntimeError::DivisionByZero { dividend: 4.0 })));
}

#[test]
fn unbalanced_parentheses() {
    assert_failure("(1+2", ErrorKind::UnmatchedParen);
    assert_failure("1+2)", ErrorKind::TrailingTokens);
}

#[test]
fn computed_zero_is_not_failure() {
    assert_eq!(calculate("3 - 3"), Ok(0.0));
    assert_eq!(calculate("0"), Ok(0.0));
}

#[test]
fn errors_carry_positions() {
    assert_eq!(calculate("1 +"),
               Err(CalcError::Parse(ParseError::UnexpectedToken { expected: Expected::Primary,
                                                                  found:    Token::End,
                                                                  position: 3, })));
    assert_eq!(calculate("(1 2)"),
               Err(CalcError::Parse(ParseError::UnexpectedToken { expected: Expected::ClosingParen,
                                                                  found:    Token::Number(2.0),
                                                                  position: 3, })));
    assert_eq!(calculate("  (1+2"),
               Err(CalcError::Parse(ParseError::UnmatchedParen { position: 2 })));
    assert_eq!(calculate("1+2)"),
               Err(CalcError::Parse(ParseError::TrailingTokens { found:    Token::RParen,
                                                                 position: 3, })));
    assert_eq!(calculate("1.2.3 + 4"),
               Err(CalcError::Lex(LexError::MalformedNumber { literal:  "1.2.3".to_string(),
                                                              position: 0, })));
    assert_eq!(calculate("1 + π"),
               Err(CalcError::Lex(LexError::UnexpectedChar { ch:       'π',
                                                             position: 4, })));

    assert_eq!(calculate("2 $ 3").unwrap_err().position(), Some(2));
    assert_eq!(calculate("").unwrap_err().position(), None);
    assert_eq!(calculate("1/0").unwrap_err().position(), None);
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(calculate("2 $ 3").unwrap_err().to_string(),
               "Unexpected character '$' at column 3.");
    assert_eq!(calculate("1 +").unwrap_err().to_string(),
               "Expected a number or '(' at column 4, found end of input.");
    assert_eq!(calculate("(1").unwrap_err().to_string(),
               "Parenthesis opened at column 1 is never closed.");
    assert_eq!(calculate("1 )").unwrap_err().to_string(),
               "Extra ')' at column 3 after the expression.");
    assert_eq!(calculate("").unwrap_err().to_string(), "Expression is empty.");
    assert_eq!(calculate("6/0").unwrap_err().to_string(), "Division by zero: 6 / 0.");
}

#[test]
fn extreme_magnitudes_pass_through() {
    let big = "9".repeat(400);

    let inf = calculate(&format!("{big} * 2")).unwrap();
    assert!(inf.is_infinite() && inf.is_sign_positive());

    let nan = calculate(&format!("{big} - {big}")).unwrap();
    assert!(nan.is_nan());

    assert_eq!(calculate(&format!("1 / {big}")), Ok(0.0));
}

#[test]
fn repeated_calls_agree() {
    for src in ["1 + 2 * 3", "(1 + 2", "1/0", "", "--5", "7 $"] {
        assert_eq!(calculate(src), calculate(src));
    }
}

#[test]
fn concurrent_calls_are_independent() {
    thread::scope(|s| {
        let handles: Vec<_> = (0..8).map(|i| {
                                        s.spawn(move || {
                                             let src = format!("{i} * ({i} + 1) / 2");
                                             (0..100).map(|_| calculate(&src))
                                                     .collect::<Vec<_>>()
                                         })
                                    })
                                    .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let n = f64::from(u32::try_from(i).unwrap());
            for result in handle.join().unwrap() {
                assert_eq!(result, Ok(n * (n + 1.0) / 2.0));
            }
        }
    });
}

#[test]
fn example_file_works() {
    let contents = fs::read_to_string("tests/example.expr").expect("missing file");
    assert_value(&contents, 9.0);
}

#[test]
fn deep_nesting_is_error_not_crash() {
    let parens = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
    assert_eq!(calculate(&parens),
               Err(CalcError::Parse(ParseError::NestingTooDeep { limit:    256,
                                                                 position: 256, })));

    let negations = format!("{}5", "-".repeat(100_000));
    assert_eq!(calculate(&negations),
               Err(CalcError::Parse(ParseError::NestingTooDeep { limit:    256,
                                                                 position: 256, })));

    let sum = format!("1{}", "+1".repeat(100_000));
    assert_eq!(calculate(&sum),
               Err(CalcError::Parse(ParseError::NestingTooDeep { limit:    256,
                                                                 position: 511, })));

    assert_eq!(calculate(&parens).unwrap_err().to_string(),
               "Expression nests deeper than 256 levels at column 257.");
}

#[test]
fn nesting_up_to_limit_works() {
    assert_value(&format!("{}1{}", "(".repeat(256), ")".repeat(256)), 1.0);
    assert_value(&format!("{}5", "-".repeat(254)), 5.0);
    assert_value(&format!("{}5", "-".repeat(255)), -5.0);
    assert_failure(&format!("{}5", "-".repeat(256)), ErrorKind::NestingTooDeep);
    assert_value(&format!("1{}", "+1".repeat(255)), 256.0);
}
