//! Tests for statement and expression parsing.

use lox_ast::{print_expr, print_stmt, Stmt};
use lox_parser::{parse, scan};

fn parse_source(source: &str) -> (Vec<Stmt>, Vec<lox_parser::ParseError>) {
    let (tokens, lex_errors) = scan(source);
    assert!(lex_errors.is_empty(), "unexpected lexical errors: {lex_errors:?}");
    parse(tokens)
}

fn print_program(source: &str) -> String {
    let (stmts, errors) = parse_source(source);
    assert!(errors.is_empty(), "unexpected parse errors: {errors:?}");
    stmts.iter().map(print_stmt).collect::<Vec<_>>().join(" ")
}

#[test]
fn test_binary_precedence_is_left_associative() {
    assert_eq!(print_program("1 - 2 - 3;"), "(- (- 1.0 2.0) 3.0)");
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    assert_eq!(print_program("1 + 2 * 3;"), "(+ 1.0 (* 2.0 3.0))");
}

#[test]
fn test_unary_is_right_associative() {
    assert_eq!(print_program("!!true;"), "(! (! true))");
}

#[test]
fn test_grouping_overrides_precedence() {
    assert_eq!(print_program("(1 + 2) * 3;"), "(* (group (+ 1.0 2.0)) 3.0)");
}

#[test]
fn test_var_declaration_with_initializer() {
    assert_eq!(print_program("var a = 1;"), "(a 1.0)");
}

#[test]
fn test_if_else_statement() {
    assert_eq!(print_program("if (true) print 1; else print 2;"), "(if true (print 1.0) (print 2.0))");
}

#[test]
fn test_while_statement() {
    assert_eq!(print_program("while (true) print 1;"), "(while true (print 1.0))");
}

#[test]
fn test_for_loop_desugars_to_while_block() {
    let (stmts, errors) = parse_source("for (var i = 0; i < 3; i = i + 1) print i;");
    assert!(errors.is_empty());
    assert_eq!(stmts.len(), 1);
    match &stmts[0] {
        Stmt::Block(inner) => {
            assert_eq!(inner.len(), 2);
            assert!(matches!(inner[0], Stmt::Var { .. }));
            assert!(matches!(inner[1], Stmt::While { .. }));
            if let Stmt::While { body, .. } = &inner[1] {
                match body.as_ref() {
                    Stmt::Block(body_stmts) => assert_eq!(body_stmts.len(), 2),
                    other => panic!("expected desugared body block, got {other:?}"),
                }
            }
        }
        other => panic!("expected a block wrapping the desugared for loop, got {other:?}"),
    }
}

#[test]
fn test_for_loop_omits_clauses() {
    let (stmts, errors) = parse_source("for (;;) print 1;");
    assert!(errors.is_empty());
    match &stmts[0] {
        Stmt::While { condition, .. } => {
            assert_eq!(print_expr(condition), "true");
        }
        other => panic!("expected a bare while loop, got {other:?}"),
    }
}

#[test]
fn test_function_declaration() {
    assert_eq!(
        print_program("fun add(a, b) { return a + b; }"),
        "(fun add (a b) (return (+ a b)))"
    );
}

#[test]
fn test_call_expression() {
    assert_eq!(print_program("add(1, 2);"), "(call add 1.0 2.0)");
}

#[test]
fn test_assignment_expression() {
    assert_eq!(print_program("a = 1;"), "(= a 1.0)");
}

#[test]
fn test_logical_and_or() {
    assert_eq!(print_program("true and false or true;"), "(or (and true false) true)");
}

#[test]
fn test_invalid_assignment_target_is_reported_but_recovers() {
    let (stmts, errors) = parse_source("1 = 2;");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].to_string().contains("Invalid assignment target."));
    // Parsing continues: the right-hand side is kept as the expression.
    assert_eq!(stmts.len(), 1);
}

#[test]
fn test_missing_semicolon_is_reported() {
    let (_, errors) = parse_source("print 1");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].to_string().contains("Expect ';' after value."));
}

#[test]
fn test_synchronize_recovers_at_next_statement() {
    let (stmts, errors) = parse_source("print 1 print 2;");
    assert_eq!(errors.len(), 1);
    // The first (malformed) print is discarded during recovery; the
    // second, well-formed statement still parses.
    assert_eq!(stmts.len(), 1);
}

#[test]
fn test_block_scoping_parses_nested_declarations() {
    let (stmts, errors) = parse_source("{ var a = 1; { var a = 2; print a; } print a; }");
    assert!(errors.is_empty());
    assert_eq!(stmts.len(), 1);
    assert!(matches!(stmts[0], Stmt::Block(_)));
}
