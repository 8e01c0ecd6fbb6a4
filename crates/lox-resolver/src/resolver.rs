//! The resolver proper: a stack of lexical scopes walked alongside the AST,
//! recording how many scopes up each variable reference resolves to.

use rustc_hash::FxHashMap;

use lox_ast::{Expr, ExprId, Stmt, Token};

use crate::error::ResolveError;

/// Maps each `Variable`/`Assign` expression to the number of enclosing
/// scopes between its use and its binding. An entry's absence means the
/// interpreter should fall back to treating it as global.
pub type Locals = FxHashMap<ExprId, usize>;

/// Resolves a parsed program, returning the variable-distance side table on
/// success, or every scoping error encountered (resolution keeps going past
/// the first mistake, the same way the parser does).
pub fn resolve(statements: &[Stmt]) -> Result<Locals, Vec<ResolveError>> {
    let mut resolver = Resolver::new();
    resolver.resolve_stmts(statements);
    if resolver.errors.is_empty() { Ok(resolver.locals) } else { Err(resolver.errors) }
}

/// Whether a name has been declared in the current scope but not yet
/// finished initializing — used to reject `var a = a;`.
type Scope = FxHashMap<String, bool>;

struct Resolver {
    scopes: Vec<Scope>,
    locals: Locals,
    errors: Vec<ResolveError>,
}

impl Resolver {
    fn new() -> Self { Self { scopes: Vec::new(), locals: Locals::default(), errors: Vec::new() } }

    fn resolve_stmts(&mut self, statements: &[Stmt]) {
        for stmt in statements {
            self.resolve_stmt(stmt);
        }
    }

    fn resolve_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Expression(expr) | Stmt::Print(expr) => self.resolve_expr(expr),
            Stmt::Var { name, initializer } => {
                self.declare(name);
                if let Some(initializer) = initializer {
                    self.resolve_expr(initializer);
                }
                self.define(name);
            }
            Stmt::Block(body) => {
                self.begin_scope();
                self.resolve_stmts(body);
                self.end_scope();
            }
            Stmt::If { condition, then_branch, else_branch } => {
                self.resolve_expr(condition);
                self.resolve_stmt(then_branch);
                if let Some(else_branch) = else_branch {
                    self.resolve_stmt(else_branch);
                }
            }
            Stmt::While { condition, body } => {
                self.resolve_expr(condition);
                self.resolve_stmt(body);
            }
            Stmt::Function(decl) => {
                self.declare(&decl.name);
                self.define(&decl.name);
                self.resolve_function(&decl.params, &decl.body);
            }
            Stmt::Return { value, .. } => {
                if let Some(value) = value {
                    self.resolve_expr(value);
                }
            }
        }
    }

    fn resolve_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Literal(_) => {}
            Expr::Grouping(inner) => self.resolve_expr(inner),
            Expr::Unary { right, .. } => self.resolve_expr(right),
            Expr::Binary { left, right, .. } | Expr::Logical { left, right, .. } => {
                self.resolve_expr(left);
                self.resolve_expr(right);
            }
            Expr::Variable { id, name } => {
                if let Some(scope) = self.scopes.last() {
                    if scope.get(&name.lexeme) == Some(&false) {
                        self.errors.push(ResolveError::self_referential_initializer(name));
                    }
                }
                self.resolve_local(*id, name);
            }
            Expr::Assign { id, name, value } => {
                self.resolve_expr(value);
                self.resolve_local(*id, name);
            }
            Expr::Call { callee, args, .. } => {
                self.resolve_expr(callee);
                for arg in args {
                    self.resolve_expr(arg);
                }
            }
        }
    }

    fn resolve_function(&mut self, params: &[Token], body: &[Stmt]) {
        self.begin_scope();
        for param in params {
            self.declare(param);
            self.define(param);
        }
        self.resolve_stmts(body);
        self.end_scope();
    }

    fn begin_scope(&mut self) {
        self.scopes.push(Scope::default());
        log::debug!("resolver: opened scope at depth {}", self.scopes.len());
    }

    fn end_scope(&mut self) {
        log::debug!("resolver: closed scope at depth {}", self.scopes.len());
        let _ = self.scopes.pop();
    }

    /// Marks a name as declared-but-not-yet-defined in the innermost scope,
    /// so a reference to it in its own initializer can be caught.
    fn declare(&mut self, name: &Token) {
        if let Some(scope) = self.scopes.last_mut() {
            let _ = scope.insert(name.lexeme.clone(), false);
        }
    }

    fn define(&mut self, name: &Token) {
        if let Some(scope) = self.scopes.last_mut() {
            let _ = scope.insert(name.lexeme.clone(), true);
        }
    }

    fn resolve_local(&mut self, id: ExprId, name: &Token) {
        for (distance, scope) in self.scopes.iter().rev().enumerate() {
            if scope.contains_key(&name.lexeme) {
                let _ = self.locals.insert(id, distance);
                return;
            }
        }
        // Not found in any scope: left unresolved, the interpreter treats it
        // as a global lookup at run time.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lox_parser::{parse, scan};

    fn resolve_source(source: &str) -> Result<Locals, Vec<ResolveError>> {
        let (tokens, lex_errors) = scan(source);
        assert!(lex_errors.is_empty());
        let (stmts, parse_errors) = parse(tokens);
        assert!(parse_errors.is_empty(), "{parse_errors:?}");
        resolve(&stmts)
    }

    #[test]
    fn resolves_local_variable_to_enclosing_block() {
        let locals = resolve_source("{ var a = 1; print a; }").unwrap();
        assert_eq!(locals.len(), 1);
        assert_eq!(*locals.values().next().unwrap(), 0);
    }

    #[test]
    fn resolves_through_nested_functions() {
        let locals =
            resolve_source("var a = 1; fun outer() { fun inner() { print a; } inner(); }").unwrap();
        // `a` is global, so it is never added to the locals table.
        assert!(locals.is_empty());
    }

    #[test]
    fn closure_variable_resolves_one_scope_up() {
        let locals = resolve_source(
            "fun makeCounter() { var i = 0; fun counter() { i = i + 1; print i; } return counter; }",
        )
        .unwrap();
        // Both the read and the write of `i` inside `counter` resolve to
        // distance 1 (counter's own scope is 0, `makeCounter`'s is 1).
        assert!(locals.values().all(|&d| d == 1));
        assert_eq!(locals.len(), 2);
    }

    #[test]
    fn self_referential_initializer_is_rejected() {
        let errors = resolve_source("var a = 1; { var a = a; }").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], ResolveError::SelfReferentialInitializer { .. }));
    }

    #[test]
    fn shadowing_in_nested_block_resolves_to_nearest_declaration() {
        let locals = resolve_source("var a = 1; { var a = 2; print a; } print a;").unwrap();
        // Only the innermost `print a;` references a local (the outer one is
        // a global reference and never enters the locals table).
        assert_eq!(locals.len(), 1);
        assert_eq!(*locals.values().next().unwrap(), 0);
    }
}
