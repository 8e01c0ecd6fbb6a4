// -------------------------------------------------------------------------
// SPDX-FileCopyrightText: Copyright © 2025 The Lox Project
// SPDX-FileName: crates/lox-cli/src/pipeline.rs
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
//! The scan → parse → resolve pipeline shared by the `evaluate` and `run`
//! subcommands. `tokenize` and `parse` stop one stage short of this, so
//! they don't go through here.

use lox_ast::Stmt;
use lox_resolver::{resolve, Locals};

/// A program ready to hand to the interpreter, or the exit code to use
/// because scanning, parsing, or resolution already reported a diagnostic.
pub fn compile(source: &str) -> Result<(Vec<Stmt>, Locals), i32> {
    let (tokens, lex_errors) = lox_parser::scan(source);
    if !lex_errors.is_empty() {
        for error in &lex_errors {
            eprintln!("{error}");
        }
        return Err(65);
    }

    let (statements, parse_errors) = lox_parser::parse(tokens);
    if !parse_errors.is_empty() {
        for error in &parse_errors {
            eprintln!("{error}");
        }
        return Err(65);
    }

    match resolve(&statements) {
        Ok(locals) => Ok((statements, locals)),
        Err(resolve_errors) => {
            for error in &resolve_errors {
                eprintln!("{error}");
            }
            Err(65)
        }
    }
}
