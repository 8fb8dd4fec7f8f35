use assert_cmd::Command;
use predicates::prelude::*;

fn web_calc() -> Command {
    Command::cargo_bin("web-calc").unwrap()
}

#[test]
fn prints_result() {
    web_calc().arg("1 + 2 * 3").assert().success().stdout("7\n");
    web_calc().arg("7 / 2").assert().success().stdout("3.5\n");
}

#[test]
fn accepts_leading_minus() {
    web_calc().arg("--").arg("-5 + 2").assert().success().stdout("-3\n");
}

#[test]
fn reports_failure_on_stderr() {
    web_calc().arg("1/0")
              .assert()
              .failure()
              .code(1)
              .stdout("")
              .stderr(predicate::str::contains("Division by zero"));

    web_calc().arg("(1 + 2")
              .assert()
              .failure()
              .stderr(predicate::str::contains("never closed"));
}

#[test]
fn dumps_tree() {
    web_calc().arg("--ast")
              .arg("1 + 2")
              .assert()
              .success()
              .stdout("BinaryOp '+'\n  Literal 1\n  Literal 2\n3\n");
}

#[test]
fn reads_expression_from_file() {
    web_calc().arg("--file")
              .arg("tests/example.expr")
              .assert()
              .success()
              .stdout("9\n");
}

#[test]
fn missing_file_is_error() {
    web_calc().arg("-f")
              .arg("tests/does-not-exist.expr")
              .assert()
              .failure()
              .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn dumps_tree_before_runtime_error() {
    web_calc().arg("-a")
              .arg("1/0")
              .assert()
              .failure()
              .stdout("BinaryOp '/'\n  Literal 1\n  Literal 0\n")
              .stderr(predicate::str::contains("Division by zero"));
}

#[test]
fn deep_nesting_is_reported() {
    web_calc().arg("--")
              .arg("-".repeat(100_000) + "5")
              .assert()
              .failure()
              .stderr(predicate::str::contains("nests deeper than 256"));
}
