//! Parenthesized-form printer used by the `parse` CLI command.
//!
//! Follows the classic Lisp-ish rendering: an operator node prints as
//! `(<op-lexeme> <child>...)`; a few node kinds the grammar doesn't treat as
//! operators (grouping, blocks, control flow, calls, assignment) get their
//! own fixed head symbol so the output stays unambiguous and round-trippable
//! by eye.

use std::fmt::Write as _;

use crate::expr::Expr;
use crate::stmt::Stmt;

/// Renders one statement in parenthesized form, the way the `parse` command
/// prints each top-level declaration on its own line.
#[must_use]
pub fn print_stmt(stmt: &Stmt) -> String {
    match stmt {
        Stmt::Expression(expr) => print_expr(expr),
        Stmt::Print(expr) => parens("print", [print_expr(expr)]),
        Stmt::Var { name, initializer } => {
            let mut parts = vec![name.lexeme.clone()];
            if let Some(init) = initializer {
                parts.push(print_expr(init));
            }
            parens_joined(&parts)
        }
        Stmt::Block(decls) => {
            let mut parts = vec!["block".to_string()];
            parts.extend(decls.iter().map(print_stmt));
            parens_joined(&parts)
        }
        Stmt::If { condition, then_branch, else_branch } => {
            let mut parts = vec!["if".to_string(), print_expr(condition), print_stmt(then_branch)];
            if let Some(else_branch) = else_branch {
                parts.push(print_stmt(else_branch));
            }
            parens_joined(&parts)
        }
        Stmt::While { condition, body } => parens("while", [print_expr(condition), print_stmt(body)]),
        Stmt::Function(decl) => {
            let params = decl.params.iter().map(|p| p.lexeme.clone()).collect::<Vec<_>>().join(" ");
            let mut parts = vec!["fun".to_string(), decl.name.lexeme.clone(), format!("({params})")];
            parts.extend(decl.body.iter().map(print_stmt));
            parens_joined(&parts)
        }
        Stmt::Return { value, .. } => {
            let mut parts = vec!["return".to_string()];
            if let Some(value) = value {
                parts.push(print_expr(value));
            }
            parens_joined(&parts)
        }
    }
}

/// Renders one expression in parenthesized form.
#[must_use]
pub fn print_expr(expr: &Expr) -> String {
    match expr {
        Expr::Literal(value) => value.to_string(),
        Expr::Grouping(inner) => parens("group", [print_expr(inner)]),
        Expr::Unary { op, right } => parens(&op.lexeme, [print_expr(right)]),
        Expr::Binary { left, op, right } => parens(&op.lexeme, [print_expr(left), print_expr(right)]),
        Expr::Logical { left, op, right } => parens(&op.lexeme, [print_expr(left), print_expr(right)]),
        Expr::Variable { name, .. } => name.lexeme.clone(),
        Expr::Assign { name, value, .. } => parens("=", [name.lexeme.clone(), print_expr(value)]),
        Expr::Call { callee, args, .. } => {
            let mut parts = vec!["call".to_string(), print_expr(callee)];
            parts.extend(args.iter().map(print_expr));
            parens_joined(&parts)
        }
    }
}

fn parens<const N: usize>(head: &str, children: [String; N]) -> String {
    let mut parts = Vec::with_capacity(N + 1);
    parts.push(head.to_string());
    parts.extend(children);
    parens_joined(&parts)
}

fn parens_joined(parts: &[String]) -> String {
    let mut out = String::from("(");
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{part}");
    }
    out.push(')');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Literal, Token, TokenKind};

    fn tok(kind: TokenKind, lexeme: &str) -> Token { Token::new(kind, lexeme, None, 1) }

    #[test]
    fn prints_classic_expression() {
        // -123 * (45.67)
        let expr = Expr::Binary {
            left: Box::new(Expr::Unary {
                op: tok(TokenKind::MINUS, "-"),
                right: Box::new(Expr::Literal(Literal::Number(123.0))),
            }),
            op: tok(TokenKind::STAR, "*"),
            right: Box::new(Expr::Grouping(Box::new(Expr::Literal(Literal::Number(45.67))))),
        };
        assert_eq!(print_expr(&expr), "(* (- 123.0) (group 45.67))");
    }

    #[test]
    fn prints_nil_literal() {
        assert_eq!(print_expr(&Expr::Literal(Literal::Nil)), "nil");
    }

    #[test]
    fn prints_var_without_initializer() {
        let stmt = Stmt::Var { name: tok(TokenKind::IDENTIFIER, "a"), initializer: None };
        assert_eq!(print_stmt(&stmt), "(a)");
    }
}
