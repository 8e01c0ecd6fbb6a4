// -------------------------------------------------------------------------
// SPDX-FileCopyrightText: Copyright © 2025 The Lox Project
// SPDX-FileName: crates/lox-cli/src/commands/evaluate.rs
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
//! `evaluate` — parse, then evaluate each top-level expression statement,
//! printing its result. Non-expression top-level statements (`var`, `fun`,
//! `print`, ...) still execute for their side effects, so an expression
//! later in the file can reference a binding declared earlier in it.

use std::path::Path;

use anyhow::{Context, Result};
use lox_ast::Stmt;
use lox_runtime::Interpreter;

use crate::pipeline::compile;

pub fn execute(path: &Path) -> Result<i32> {
    let source =
        std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let (statements, locals) = match compile(&source) {
        Ok(program) => program,
        Err(code) => return Ok(code),
    };

    let mut interpreter = Interpreter::new(locals);
    lox_stdlib::install(interpreter.globals());

    for statement in &statements {
        let result = match statement {
            Stmt::Expression(expr) => interpreter.evaluate_expr(expr).map(|value| println!("{value}")),
            other => interpreter.interpret(std::slice::from_ref(other)),
        };
        if let Err(error) = result {
            eprintln!("{error}");
            return Ok(70);
        }
    }

    Ok(0)
}
