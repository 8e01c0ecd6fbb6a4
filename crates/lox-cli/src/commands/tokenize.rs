// -------------------------------------------------------------------------
// SPDX-FileCopyrightText: Copyright © 2025 The Lox Project
// SPDX-FileName: crates/lox-cli/src/commands/tokenize.rs
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
//! `tokenize` — print every scanned token on its own line.

use std::path::Path;

use anyhow::{Context, Result};
use lox_parser::scan;

/// Scans the file at `path` and prints each token, then each lexical
/// diagnostic. Returns 65 if the scanner reported any diagnostic, else 0.
pub fn execute(path: &Path) -> Result<i32> {
    let source =
        std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let (tokens, errors) = scan(&source);
    for token in &tokens {
        println!("{token}");
    }
    for error in &errors {
        eprintln!("{error}");
    }

    Ok(if errors.is_empty() { 0 } else { 65 })
}
