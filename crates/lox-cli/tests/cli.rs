//! End-to-end tests driving the compiled `lox` binary directly, covering
//! the six stdin-to-stdout scenarios and the exit-code contract.

use std::io::Write as _;
use std::process::Command;

use tempfile::NamedTempFile;

fn source_file(source: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp source file");
    write!(file, "{source}").expect("failed to write temp source file");
    file
}

fn run(command: &str, source: &str) -> (String, String, i32) {
    let file = source_file(source);
    let output = Command::new(env!("CARGO_BIN_EXE_lox-cli"))
        .arg(command)
        .arg(file.path())
        .output()
        .expect("failed to spawn lox-cli binary");
    (
        String::from_utf8(output.stdout).unwrap(),
        String::from_utf8(output.stderr).unwrap(),
        output.status.code().unwrap_or(-1),
    )
}

#[test]
fn prints_arithmetic_result() {
    let (stdout, _, code) = run("run", "print 1 + 2;");
    assert_eq!(stdout, "3\n");
    assert_eq!(code, 0);
}

#[test]
fn concatenates_strings() {
    let (stdout, _, code) = run("run", r#"print "foo" + "bar";"#);
    assert_eq!(stdout, "foobar\n");
    assert_eq!(code, 0);
}

#[test]
fn block_shadowing_restores_outer_binding_on_exit() {
    let (stdout, _, code) = run("run", "var a = 1; { var a = 2; print a; } print a;");
    assert_eq!(stdout, "2\n1\n");
    assert_eq!(code, 0);
}

#[test]
fn for_loop_counts_up() {
    let (stdout, _, code) = run("run", "for (var i = 0; i < 3; i = i + 1) print i;");
    assert_eq!(stdout, "0\n1\n2\n");
    assert_eq!(code, 0);
}

#[test]
fn recursive_factorial() {
    let source = "fun f(n) { if (n <= 1) return 1; return n * f(n - 1); } print f(5);";
    let (stdout, _, code) = run("run", source);
    assert_eq!(stdout, "120\n");
    assert_eq!(code, 0);
}

#[test]
fn closure_counter_increments_across_calls() {
    let source = "fun make() { var n = 0; fun next() { n = n + 1; return n; } return next; } \
                  var c = make(); print c(); print c();";
    let (stdout, _, code) = run("run", source);
    assert_eq!(stdout, "1\n2\n");
    assert_eq!(code, 0);
}

#[test]
fn tokenize_reports_unexpected_character_as_exit_65() {
    let (stdout, stderr, code) = run("tokenize", "@");
    assert!(stdout.contains("EOF"));
    assert!(stderr.contains("Unexpected character: @"));
    assert_eq!(code, 65);
}

#[test]
fn parse_error_exits_65() {
    let (_, stderr, code) = run("parse", "print 1");
    assert!(stderr.contains("Expect ';' after value."));
    assert_eq!(code, 65);
}

#[test]
fn runtime_failure_exits_70() {
    let (_, stderr, code) = run("run", r#"-"s";"#);
    assert!(stderr.contains("Operand must be a number."));
    assert_eq!(code, 70);
}

#[test]
fn evaluate_prints_each_top_level_expression() {
    let (stdout, _, code) = run("evaluate", "1 + 2; 3 * 4;");
    assert_eq!(stdout, "3\n12\n");
    assert_eq!(code, 0);
}
