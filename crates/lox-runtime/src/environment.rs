// -------------------------------------------------------------------------
// SPDX-FileCopyrightText: Copyright © 2025 The Lox Project
// SPDX-FileName: crates/lox-runtime/src/environment.rs
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
//! The lexical environment chain.
//!
//! Each node is `Rc<RefCell<_>>`-wrapped rather than owned outright: a
//! closure captures the `Rc` of the environment active at the point of its
//! declaration, so writes made through one holder (a later call of the same
//! function, an assignment from an outer scope) are visible to every other
//! holder of that node. Plain ownership would force a deep copy on closure
//! creation and break the "assignment through a closure is visible
//! elsewhere" invariant.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::errors::RuntimeErrorKind;
use crate::value::Value;

/// A single scope: a name-to-value map plus an optional link to the
/// enclosing scope. The root of a chain (the global environment) has no
/// enclosing scope.
#[derive(Debug, Default)]
struct Scope {
    bindings: HashMap<String, Value>,
    enclosing: Option<Environment>,
}

/// A reference-counted handle to a [`Scope`]. Cloning an `Environment`
/// clones the handle, not the bindings — this is what lets a closure and
/// its defining scope share mutable state.
#[derive(Clone, Debug)]
pub struct Environment(Rc<RefCell<Scope>>);

impl Environment {
    /// Creates a new global environment with no enclosing scope.
    #[must_use]
    pub fn new_global() -> Self { Self(Rc::new(RefCell::new(Scope::default()))) }

    /// Pushes a new scope enclosed by `self` — used on block entry and on
    /// every function call.
    #[must_use]
    pub fn child(&self) -> Self {
        Self(Rc::new(RefCell::new(Scope { bindings: HashMap::new(), enclosing: Some(self.clone()) })))
    }

    /// Binds `name` in the current scope, always writing here even if an
    /// outer scope already has a binding of the same name (shadowing is
    /// permitted, and re-declaration in the same scope simply overwrites).
    pub fn define(&self, name: impl Into<String>, value: Value) {
        let _ = self.0.borrow_mut().bindings.insert(name.into(), value);
    }

    /// Looks up `name` starting at the current scope and walking outward.
    pub fn get(&self, name: &str) -> Result<Value, RuntimeErrorKind> {
        let scope = self.0.borrow();
        if let Some(value) = scope.bindings.get(name) {
            return Ok(value.clone());
        }
        match &scope.enclosing {
            Some(enclosing) => enclosing.get(name),
            None => Err(RuntimeErrorKind::undefined_variable(name)),
        }
    }

    /// Reassigns an existing binding, walking outward until one is found.
    /// Unlike [`Environment::define`], this never creates a new binding.
    pub fn assign(&self, name: &str, value: Value) -> Result<(), RuntimeErrorKind> {
        let mut scope = self.0.borrow_mut();
        if scope.bindings.contains_key(name) {
            let _ = scope.bindings.insert(name.to_string(), value);
            return Ok(());
        }
        match &scope.enclosing {
            Some(enclosing) => enclosing.assign(name, value),
            None => Err(RuntimeErrorKind::undefined_variable(name)),
        }
    }

    /// Walks exactly `distance` enclosing links outward — used once the
    /// resolver has already determined how far a variable reference is
    /// from its binding, so lookup no longer has to search.
    #[must_use]
    fn ancestor(&self, distance: usize) -> Self {
        let mut env = self.clone();
        for _ in 0..distance {
            let next = env.0.borrow().enclosing.clone().expect("resolver-reported distance out of range");
            env = next;
        }
        env
    }

    /// Looks up `name` exactly `distance` scopes up, bypassing the
    /// walk-and-search `get` does for unresolved (global) references.
    pub fn get_at(&self, distance: usize, name: &str) -> Result<Value, RuntimeErrorKind> {
        self.ancestor(distance)
            .0
            .borrow()
            .bindings
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeErrorKind::undefined_variable(name))
    }

    /// Assigns `name` exactly `distance` scopes up.
    pub fn assign_at(&self, distance: usize, name: &str, value: Value) -> Result<(), RuntimeErrorKind> {
        let _ = self.ancestor(distance).0.borrow_mut().bindings.insert(name.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shadowing_in_child_scope_does_not_affect_parent() {
        let global = Environment::new_global();
        global.define("x", Value::Number(1.0));
        let block = global.child();
        block.define("x", Value::Number(2.0));
        assert_eq!(block.get("x").unwrap(), Value::Number(2.0));
        assert_eq!(global.get("x").unwrap(), Value::Number(1.0));
    }

    #[test]
    fn assign_walks_outward_to_the_nearest_binding() {
        let global = Environment::new_global();
        global.define("x", Value::Number(1.0));
        let block = global.child();
        block.assign("x", Value::Number(5.0)).unwrap();
        assert_eq!(global.get("x").unwrap(), Value::Number(5.0));
    }

    #[test]
    fn assign_to_unbound_name_is_undefined_variable() {
        let global = Environment::new_global();
        let err = global.assign("missing", Value::Nil).unwrap_err();
        assert!(err.to_string().contains("Undefined variable 'missing'."));
    }

    #[test]
    fn clones_share_the_same_underlying_scope() {
        let global = Environment::new_global();
        let alias = global.clone();
        alias.define("shared", Value::Bool(true));
        assert_eq!(global.get("shared").unwrap(), Value::Bool(true));
    }
}
