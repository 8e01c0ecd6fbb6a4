// -------------------------------------------------------------------------
// SPDX-FileCopyrightText: Copyright © 2025 The Lox Project
// SPDX-FileName: crates/lox-runtime/src/errors.rs
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
//! Runtime error types for the Lox evaluator.

use std::fmt;

use thiserror::Error;

/// A runtime failure, independent of *where* it happened. [`Environment`]
/// and [`crate::callable`] raise these without knowing the offending
/// token's line; [`crate::interpreter::Interpreter`] is the only place that
/// does, so it attaches the line via [`RuntimeErrorKind::at`].
///
/// [`Environment`]: crate::environment::Environment
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeErrorKind {
    #[error("Operand must be a number.")]
    OperandMustBeNumber,
    #[error("Operands must be numbers.")]
    OperandsMustBeNumbers,
    #[error("Operands must be two numbers or two strings.")]
    OperandsMustBeNumbersOrStrings,
    #[error("Undefined variable '{0}'.")]
    UndefinedVariable(String),
    #[error("Can only call functions and classes.")]
    NotCallable,
    #[error("Expected {expected} arguments but got {got}.")]
    ArityMismatch { expected: usize, got: usize },
}

impl RuntimeErrorKind {
    #[must_use]
    pub fn undefined_variable(name: impl Into<String>) -> Self {
        Self::UndefinedVariable(name.into())
    }

    /// Attaches the source line of the token responsible, turning this into
    /// a reportable [`RuntimeError`].
    #[must_use]
    pub fn at(self, line: usize) -> RuntimeError { RuntimeError { kind: self, line } }
}

/// A runtime failure together with the line it occurred on, formatted the
/// way the top-level driver prints it to the error stream: the message,
/// then the `[line N]` locator on its own line.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeError {
    pub kind: RuntimeErrorKind,
    pub line: usize,
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n[line {}]", self.kind, self.line)
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> { Some(&self.kind) }
}
