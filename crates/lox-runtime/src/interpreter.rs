// -------------------------------------------------------------------------
// SPDX-FileCopyrightText: Copyright © 2025 The Lox Project
// SPDX-FileName: crates/lox-runtime/src/interpreter.rs
// SPDX-FileType: SOURCE
// SPDX-License-Identifier: Apache-2.0
// -------------------------------------------------------------------------
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
// -------------------------------------------------------------------------
//! The tree-walking evaluator.
//!
//! Walks a parsed program against a chain of [`Environment`]s, producing
//! `print` side effects and mutating bindings as it goes. `return` is
//! modeled as a [`Signal`] threaded through statement execution rather than
//! as an `Err` variant, so it can unwind exactly one function activation
//! without being mistaken for a runtime failure by an enclosing `try`-like
//! boundary that only wants to catch the latter.

use std::rc::Rc;

use lox_ast::{Expr, ExprId, FunctionDecl, Literal, Stmt, Token, TokenKind};
use lox_resolver::Locals;

use crate::callable::{Callable, LoxFunction};
use crate::environment::Environment;
use crate::errors::{RuntimeError, RuntimeErrorKind};
use crate::value::Value;

/// What happened while executing a statement: either it ran to completion,
/// or a `return` inside it is unwinding the current function activation.
#[derive(Debug)]
enum Signal {
    Normal,
    Return(Value),
}

/// Owns the global scope and the currently active scope, and walks a parsed
/// program against them.
///
/// `locals` is the side table the resolver produced: for each `Variable`/
/// `Assign` node it names how many enclosing scopes up the binding lives.
/// An entry's absence means the reference is global.
#[derive(Debug)]
pub struct Interpreter {
    globals: Environment,
    environment: Environment,
    locals: Locals,
}

impl Interpreter {
    /// Builds an interpreter with a fresh global scope and no bindings in
    /// it yet — callers (`lox-cli`, via `lox-stdlib`) register natives into
    /// [`Interpreter::globals`] before running a program.
    #[must_use]
    pub fn new(locals: Locals) -> Self {
        let globals = Environment::new_global();
        Self { environment: globals.clone(), globals, locals }
    }

    /// The global environment, exposed so natives can be registered into it
    /// before the first statement runs.
    #[must_use]
    pub fn globals(&self) -> &Environment { &self.globals }

    /// Runs a whole program. A `return` that unwinds all the way to the top
    /// level (outside of any function) simply ends execution early; it is
    /// not an error.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        for stmt in statements {
            if let Signal::Return(_) = self.execute(stmt)? {
                break;
            }
        }
        Ok(())
    }

    /// Evaluates a single expression, for the `evaluate` CLI command which
    /// treats each top-level expression statement as a one-off evaluation.
    pub fn evaluate_expr(&mut self, expr: &Expr) -> Result<Value, RuntimeError> { self.evaluate(expr) }

    /// Invoked by [`LoxFunction::call`] to execute a function body in its
    /// freshly pushed call-frame environment, turning an unwound `return`
    /// into the call's result (falling off the end yields `nil`).
    pub(crate) fn execute_function_body(
        &mut self,
        body: &[Stmt],
        call_scope: Environment,
    ) -> Result<Value, RuntimeError> {
        match self.execute_block(body, call_scope)? {
            Signal::Return(value) => Ok(value),
            Signal::Normal => Ok(Value::Nil),
        }
    }

    // -- statements -----------------------------------------------------

    fn execute(&mut self, stmt: &Stmt) -> Result<Signal, RuntimeError> {
        match stmt {
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;
                Ok(Signal::Normal)
            }
            Stmt::Print(expr) => {
                let value = self.evaluate(expr)?;
                println!("{value}");
                Ok(Signal::Normal)
            }
            Stmt::Var { name, initializer } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                self.environment.define(name.lexeme.clone(), value);
                Ok(Signal::Normal)
            }
            Stmt::Block(declarations) => {
                let scope = self.environment.child();
                self.execute_block(declarations, scope)
            }
            Stmt::If { condition, then_branch, else_branch } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(Signal::Normal)
                }
            }
            Stmt::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    match self.execute(body)? {
                        Signal::Normal => {}
                        signal @ Signal::Return(_) => return Ok(signal),
                    }
                }
                Ok(Signal::Normal)
            }
            Stmt::Function(declaration) => {
                self.define_function(declaration);
                Ok(Signal::Normal)
            }
            Stmt::Return { value, .. } => {
                let value = match value {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                Ok(Signal::Return(value))
            }
        }
    }

    fn define_function(&mut self, declaration: &Rc<FunctionDecl>) {
        let function = LoxFunction::new(Rc::clone(declaration), self.environment.clone());
        self.environment.define(declaration.name.lexeme.clone(), Value::Callable(Rc::new(function)));
    }

    /// Pushes `scope`, runs `declarations` in it, and restores the
    /// previously active environment on every exit path — a runtime
    /// failure (via `?`) or a `return` signal included.
    fn execute_block(&mut self, declarations: &[Stmt], scope: Environment) -> Result<Signal, RuntimeError> {
        let previous = std::mem::replace(&mut self.environment, scope);
        let result = self.run_block(declarations);
        self.environment = previous;
        result
    }

    fn run_block(&mut self, declarations: &[Stmt]) -> Result<Signal, RuntimeError> {
        for stmt in declarations {
            match self.execute(stmt)? {
                Signal::Normal => {}
                signal @ Signal::Return(_) => return Ok(signal),
            }
        }
        Ok(Signal::Normal)
    }

    // -- expressions ------------------------------------------------------

    fn evaluate(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Literal(literal) => Ok(value_of(literal)),
            Expr::Grouping(inner) => self.evaluate(inner),
            Expr::Unary { op, right } => self.evaluate_unary(op, right),
            Expr::Binary { left, op, right } => self.evaluate_binary(left, op, right),
            Expr::Logical { left, op, right } => self.evaluate_logical(left, op, right),
            Expr::Variable { id, name } => self.look_up_variable(*id, name),
            Expr::Assign { id, name, value } => self.evaluate_assign(*id, name, value),
            Expr::Call { callee, paren, args } => self.evaluate_call(callee, paren, args),
        }
    }

    fn evaluate_unary(&mut self, op: &Token, right: &Expr) -> Result<Value, RuntimeError> {
        let right = self.evaluate(right)?;
        match op.kind {
            TokenKind::BANG => Ok(Value::Bool(!right.is_truthy())),
            TokenKind::MINUS => match right {
                Value::Number(n) => Ok(Value::Number(-n)),
                _ => Err(RuntimeErrorKind::OperandMustBeNumber.at(op.line)),
            },
            _ => unreachable!("parser only ever builds Unary with '!' or '-'"),
        }
    }

    fn evaluate_logical(&mut self, left: &Expr, op: &Token, right: &Expr) -> Result<Value, RuntimeError> {
        let left = self.evaluate(left)?;
        let short_circuits = if op.kind == TokenKind::OR { left.is_truthy() } else { !left.is_truthy() };
        if short_circuits {
            Ok(left)
        } else {
            self.evaluate(right)
        }
    }

    fn evaluate_binary(&mut self, left: &Expr, op: &Token, right: &Expr) -> Result<Value, RuntimeError> {
        let left = self.evaluate(left)?;
        let right = self.evaluate(right)?;
        match op.kind {
            TokenKind::MINUS => Ok(Value::Number(number(&left, op)? - number(&right, op)?)),
            TokenKind::SLASH => Ok(Value::Number(number(&left, op)? / number(&right, op)?)),
            TokenKind::STAR => Ok(Value::Number(number(&left, op)? * number(&right, op)?)),
            TokenKind::PLUS => match (&left, &right) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
                (Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{a}{b}"))),
                _ => Err(RuntimeErrorKind::OperandsMustBeNumbersOrStrings.at(op.line)),
            },
            TokenKind::GREATER => Ok(Value::Bool(number(&left, op)? > number(&right, op)?)),
            TokenKind::GREATER_EQUAL => Ok(Value::Bool(number(&left, op)? >= number(&right, op)?)),
            TokenKind::LESS => Ok(Value::Bool(number(&left, op)? < number(&right, op)?)),
            TokenKind::LESS_EQUAL => Ok(Value::Bool(number(&left, op)? <= number(&right, op)?)),
            TokenKind::EQUAL_EQUAL => Ok(Value::Bool(left == right)),
            TokenKind::BANG_EQUAL => Ok(Value::Bool(left != right)),
            _ => unreachable!("parser only ever builds Binary with an arithmetic/comparison/equality op"),
        }
    }

    fn evaluate_assign(&mut self, id: ExprId, name: &Token, value: &Expr) -> Result<Value, RuntimeError> {
        let value = self.evaluate(value)?;
        let result = match self.locals.get(&id) {
            Some(&distance) => self.environment.assign_at(distance, &name.lexeme, value.clone()),
            None => self.globals.assign(&name.lexeme, value.clone()),
        };
        result.map_err(|kind| kind.at(name.line))?;
        Ok(value)
    }

    fn look_up_variable(&self, id: ExprId, name: &Token) -> Result<Value, RuntimeError> {
        let result = match self.locals.get(&id) {
            Some(&distance) => self.environment.get_at(distance, &name.lexeme),
            None => self.globals.get(&name.lexeme),
        };
        result.map_err(|kind| kind.at(name.line))
    }

    fn evaluate_call(&mut self, callee: &Expr, paren: &Token, args: &[Expr]) -> Result<Value, RuntimeError> {
        let callee = self.evaluate(callee)?;
        let mut arguments = Vec::with_capacity(args.len());
        for arg in args {
            arguments.push(self.evaluate(arg)?);
        }

        let Value::Callable(function) = callee else {
            return Err(RuntimeErrorKind::NotCallable.at(paren.line));
        };

        if arguments.len() != function.arity() {
            return Err(RuntimeErrorKind::ArityMismatch {
                expected: function.arity(),
                got: arguments.len(),
            }
            .at(paren.line));
        }

        function.call(self, arguments)
    }
}

/// Converts an AST literal into the runtime value it denotes. Distinct from
/// `Value`'s own construction because a `Literal` is shared with the token
/// model and carries no callables.
fn value_of(literal: &Literal) -> Value {
    match literal {
        Literal::Number(n) => Value::Number(*n),
        Literal::Str(s) => Value::Str(s.clone()),
        Literal::Bool(b) => Value::Bool(*b),
        Literal::Nil => Value::Nil,
    }
}

fn number(value: &Value, op: &Token) -> Result<f64, RuntimeError> {
    match value {
        Value::Number(n) => Ok(*n),
        _ => Err(RuntimeErrorKind::OperandsMustBeNumbers.at(op.line)),
    }
}

#[cfg(test)]
mod tests {
    use lox_parser::{parse, scan};
    use lox_resolver::resolve;

    use super::*;

    fn run(source: &str) -> Result<Interpreter, RuntimeError> {
        let (tokens, lex_errors) = scan(source);
        assert!(lex_errors.is_empty(), "{lex_errors:?}");
        let (stmts, parse_errors) = parse(tokens);
        assert!(parse_errors.is_empty(), "{parse_errors:?}");
        let locals = resolve(&stmts).unwrap_or_else(|e| panic!("{e:?}"));
        let mut interpreter = Interpreter::new(locals);
        interpreter.interpret(&stmts)?;
        Ok(interpreter)
    }

    fn eval(source: &str) -> Result<Value, RuntimeError> {
        let (tokens, lex_errors) = scan(source);
        assert!(lex_errors.is_empty());
        let (stmts, parse_errors) = parse(tokens);
        assert!(parse_errors.is_empty());
        let locals = resolve(&stmts).unwrap();
        let mut interpreter = Interpreter::new(locals);
        match &stmts[0] {
            Stmt::Expression(expr) => interpreter.evaluate_expr(expr),
            other => panic!("expected a single expression statement, got {other:?}"),
        }
    }

    #[test]
    fn left_associative_subtraction() { assert_eq!(eval("1 - 2 - 3;").unwrap(), Value::Number(-4.0)); }

    #[test]
    fn precedence_multiplication_before_addition() {
        assert_eq!(eval("1 + 2 * 3;").unwrap(), Value::Number(7.0));
    }

    #[test]
    fn unary_bang_and_minus() {
        assert_eq!(eval("!true;").unwrap(), Value::Bool(false));
        assert_eq!(eval("-2 * -3;").unwrap(), Value::Number(6.0));
    }

    #[test]
    fn truthiness_table() {
        assert_eq!(eval("!nil;").unwrap(), Value::Bool(true));
        assert_eq!(eval("!false;").unwrap(), Value::Bool(true));
        assert_eq!(eval("!0;").unwrap(), Value::Bool(false));
        assert_eq!(eval("!\"\";").unwrap(), Value::Bool(false));
        assert_eq!(eval("!\"x\";").unwrap(), Value::Bool(false));
    }

    #[test]
    fn division_by_zero_is_ieee754_not_a_diagnostic() {
        assert_eq!(eval("1 / 0;").unwrap(), Value::Number(f64::INFINITY));
    }

    #[test]
    fn string_concatenation() {
        assert_eq!(eval("\"foo\" + \"bar\";").unwrap(), Value::Str("foobar".to_string()));
    }

    #[test]
    fn mixed_plus_operands_fail() {
        let err = eval("\"a\" + 1;").unwrap_err();
        assert!(err.to_string().contains("Operands must be two numbers or two strings."));
    }

    #[test]
    fn unary_minus_on_string_fails_with_line() {
        let err = eval("-\"s\";").unwrap_err();
        assert!(err.to_string().contains("Operand must be a number."));
        assert_eq!(err.line, 1);
    }

    #[test]
    fn calling_a_non_callable_fails() {
        let err = run("var a = 1; a();").unwrap_err();
        assert!(err.to_string().contains("Can only call functions and classes."));
    }

    #[test]
    fn block_scoping_shadows_and_restores() {
        let interpreter = run("var a = 1; { var a = 2; }").unwrap();
        assert_eq!(interpreter.globals().get("a").unwrap(), Value::Number(1.0));
    }

    #[test]
    fn recursive_function_call() {
        let source = "fun f(n) { if (n <= 1) return 1; return n * f(n - 1); } var r = f(5);";
        let interpreter = run(source).unwrap();
        assert_eq!(interpreter.globals().get("r").unwrap(), Value::Number(120.0));
    }

    #[test]
    fn closure_counter_increments_across_calls() {
        let source = "
            fun make() { var n = 0; fun c() { n = n + 1; return n; } return c; }
            var counter = make();
            var first = counter();
            var second = counter();
            var third = counter();
        ";
        let interpreter = run(source).unwrap();
        assert_eq!(interpreter.globals().get("first").unwrap(), Value::Number(1.0));
        assert_eq!(interpreter.globals().get("second").unwrap(), Value::Number(2.0));
        assert_eq!(interpreter.globals().get("third").unwrap(), Value::Number(3.0));
    }

    #[test]
    fn short_circuit_or_skips_right_operand() {
        let source = "fun boom() { return boom_did_run(); } var r = true or boom();";
        // `boom_did_run` is never defined; if the right operand evaluated,
        // this would raise an undefined-variable error instead of binding `r`.
        let interpreter = run(source).unwrap();
        assert_eq!(interpreter.globals().get("r").unwrap(), Value::Bool(true));
    }

    #[test]
    fn short_circuit_and_skips_right_operand() {
        let source = "var r = false and undefined_name();";
        let interpreter = run(source).unwrap();
        assert_eq!(interpreter.globals().get("r").unwrap(), Value::Bool(false));
    }

    #[test]
    fn static_scoping_resolves_closure_to_declaration_site() {
        let source = "
            var out;
            fun outer() {
                var x = 1;
                fun inner() { out = x; }
                {
                    var x = 2;
                    inner();
                }
            }
            outer();
        ";
        let interpreter = run(source).unwrap();
        assert_eq!(interpreter.globals().get("out").unwrap(), Value::Number(1.0));
    }
}
