// -------------------------------------------------------------------------
// SPDX-FileCopyrightText: Copyright © 2025 The Lox Project
// SPDX-FileName: crates/lox-cli/src/commands/run.rs
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
//! `run` — parse, then execute the program as a whole for its side effects.

use std::path::Path;

use anyhow::{Context, Result};
use lox_runtime::Interpreter;

use crate::pipeline::compile;

/// Returns 65 on a scan/parse/resolve diagnostic, 70 on a runtime failure,
/// 0 if the program ran to completion.
pub fn execute(path: &Path) -> Result<i32> {
    let source =
        std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let (statements, locals) = match compile(&source) {
        Ok(program) => program,
        Err(code) => return Ok(code),
    };

    let mut interpreter = Interpreter::new(locals);
    lox_stdlib::install(interpreter.globals());

    match interpreter.interpret(&statements) {
        Ok(()) => Ok(0),
        Err(error) => {
            eprintln!("{error}");
            Ok(70)
        }
    }
}
