// -------------------------------------------------------------------------
// SPDX-FileCopyrightText: Copyright © 2025 The Lox Project
// SPDX-FileName: crates/lox-runtime/src/value.rs
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
//! The runtime value: a tagged variant over the handful of types a Lox
//! program can produce at evaluation time.

use std::fmt;
use std::rc::Rc;

use crate::callable::Callable;

/// A value produced by evaluating an expression.
///
/// `Callable` wraps an `Rc<dyn Callable>` rather than an enum of "user
/// function" vs. "native function" so that [`crate::interpreter::Interpreter`]
/// never needs to match on which kind it holds — it only ever calls
/// [`Callable::call`].
#[derive(Clone)]
pub enum Value {
    Number(f64),
    Str(String),
    Bool(bool),
    Nil,
    Callable(Rc<dyn Callable>),
}

impl Value {
    /// `nil` and `false` are falsy; every other value, including `0` and
    /// `""`, is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool { !matches!(self, Value::Nil | Value::Bool(false)) }

    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Bool(_) => "boolean",
            Value::Nil => "nil",
            Value::Callable(_) => "callable",
        }
    }
}

impl PartialEq for Value {
    /// Equality never fails at runtime: it is defined within each variant
    /// and is `false` across variants. `nil` equals only `nil`. Numbers
    /// compare by IEEE-754 equality, so `NaN != NaN`.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Nil, Value::Nil) => true,
            (Value::Callable(a), Value::Callable(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "Number({n})"),
            Value::Str(s) => write!(f, "Str({s:?})"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Nil => write!(f, "Nil"),
            Value::Callable(c) => write!(f, "Callable({})", c.display()),
        }
    }
}

impl fmt::Display for Value {
    /// The printed form used by the `print` statement and the `evaluate`
    /// CLI command: numbers drop a trailing `.0`, strings print without
    /// their quotes, and callables print as `<fn NAME>` / `<native fn>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", format_number(*n)),
            Value::Str(s) => write!(f, "{s}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Nil => write!(f, "nil"),
            Value::Callable(c) => write!(f, "{}", c.display()),
        }
    }
}

/// Strips a trailing `.0` from integral doubles for display, unlike the
/// token-level [`lox_ast::token::format_number`] which always keeps one.
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{n}")
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness_matches_the_language_table() {
        assert!(!Value::Nil.is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(Value::Bool(true).is_truthy());
        assert!(Value::Number(0.0).is_truthy());
        assert!(Value::Str(String::new()).is_truthy());
    }

    #[test]
    fn nan_is_not_equal_to_itself() {
        let nan = Value::Number(f64::NAN);
        assert_ne!(nan, Value::Number(f64::NAN));
    }

    #[test]
    fn cross_variant_equality_is_always_false() {
        assert_ne!(Value::Nil, Value::Bool(false));
        assert_ne!(Value::Number(0.0), Value::Str("0".to_string()));
    }

    #[test]
    fn integral_numbers_display_without_trailing_zero() {
        assert_eq!(Value::Number(3.0).to_string(), "3");
        assert_eq!(Value::Number(3.5).to_string(), "3.5");
    }
}
