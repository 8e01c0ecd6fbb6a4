// -------------------------------------------------------------------------
// SPDX-FileCopyrightText: Copyright © 2025 The Lox Project
// SPDX-FileName: crates/lox-cli/src/commands/parse.rs
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
//! `parse` — scan, parse, and print the parenthesized form of each
//! top-level statement.

use std::path::Path;

use anyhow::{Context, Result};
use lox_ast::print_stmt;
use lox_parser::{parse, scan};

/// Returns 65 if the scanner or parser reported any diagnostic, else 0.
pub fn execute(path: &Path) -> Result<i32> {
    let source =
        std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let (tokens, lex_errors) = scan(&source);
    if !lex_errors.is_empty() {
        for error in &lex_errors {
            eprintln!("{error}");
        }
        return Ok(65);
    }

    let (statements, parse_errors) = parse(tokens);
    if !parse_errors.is_empty() {
        for error in &parse_errors {
            eprintln!("{error}");
        }
        return Ok(65);
    }

    for statement in &statements {
        println!("{}", print_stmt(statement));
    }

    Ok(0)
}
