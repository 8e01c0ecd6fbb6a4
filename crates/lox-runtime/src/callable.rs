// -------------------------------------------------------------------------
// SPDX-FileCopyrightText: Copyright © 2025 The Lox Project
// SPDX-FileName: crates/lox-runtime/src/callable.rs
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
//! The `Callable` capability and its two implementors: user-declared
//! functions and host-provided native functions.

use std::fmt;
use std::rc::Rc;

use lox_ast::FunctionDecl;

use crate::environment::Environment;
use crate::errors::RuntimeError;
use crate::interpreter::Interpreter;
use crate::value::Value;

/// Anything that can be placed on the right-hand side of a call expression.
///
/// `lox-runtime` never needs to distinguish a user function from a native
/// one outside of this module — [`crate::interpreter::Interpreter`] only
/// calls through the trait object stored in [`Value::Callable`].
pub trait Callable: fmt::Debug {
    fn arity(&self) -> usize;
    fn call(&self, interpreter: &mut Interpreter, args: Vec<Value>) -> Result<Value, RuntimeError>;
    fn display(&self) -> String;
}

/// A user-declared function: the parsed declaration plus the environment
/// active when `fun` was evaluated, i.e. its closure.
#[derive(Debug, Clone)]
pub struct LoxFunction {
    declaration: Rc<FunctionDecl>,
    closure: Environment,
}

impl LoxFunction {
    #[must_use]
    pub fn new(declaration: Rc<FunctionDecl>, closure: Environment) -> Self {
        Self { declaration, closure }
    }
}

impl Callable for LoxFunction {
    fn arity(&self) -> usize { self.declaration.params.len() }

    /// Pushes a new scope enclosed by the *closure*, not the caller's
    /// active environment — this is what makes the function see the
    /// bindings in scope at its declaration site rather than at its call
    /// site.
    fn call(&self, interpreter: &mut Interpreter, args: Vec<Value>) -> Result<Value, RuntimeError> {
        let call_scope = self.closure.child();
        for (param, arg) in self.declaration.params.iter().zip(args) {
            call_scope.define(param.lexeme.clone(), arg);
        }
        interpreter.execute_function_body(&self.declaration.body, call_scope)
    }

    fn display(&self) -> String { format!("<fn {}>", self.declaration.name.lexeme) }
}

/// A host-provided function exposed to Lox programs — currently just
/// `clock`, registered by `lox-stdlib` into the global environment.
pub struct NativeFunction {
    name: &'static str,
    arity: usize,
    func: Box<dyn Fn(&[Value]) -> Value>,
}

impl NativeFunction {
    #[must_use]
    pub fn new(name: &'static str, arity: usize, func: impl Fn(&[Value]) -> Value + 'static) -> Self {
        Self { name, arity, func: Box::new(func) }
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction").field("name", &self.name).field("arity", &self.arity).finish()
    }
}

impl Callable for NativeFunction {
    fn arity(&self) -> usize { self.arity }

    fn call(&self, _interpreter: &mut Interpreter, args: Vec<Value>) -> Result<Value, RuntimeError> {
        Ok((self.func)(&args))
    }

    fn display(&self) -> String { "<native fn>".to_string() }
}
