// -------------------------------------------------------------------------
// SPDX-FileCopyrightText: Copyright © 2025 The Lox Project
// SPDX-FileName: crates/lox-cli/src/main.rs
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
//! Command-line front end for the Lox-family tree-walking interpreter.
//!
//! `main` only parses arguments and dispatches; the scanner, parser,
//! resolver, and evaluator all live in their own crates and never see a
//! `Path` or a file handle.

mod commands;
mod pipeline;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// A tree-walking interpreter for a small dynamically-typed scripting
/// language in the Lox lineage.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scan a source file and print each token on its own line.
    Tokenize {
        /// Path to the source file.
        path: PathBuf,
    },
    /// Scan and parse a source file, printing each statement's
    /// parenthesized form.
    Parse {
        /// Path to the source file.
        path: PathBuf,
    },
    /// Parse a source file and evaluate each top-level expression,
    /// printing its result.
    Evaluate {
        /// Path to the source file.
        path: PathBuf,
    },
    /// Parse and execute a source file as a program.
    Run {
        /// Path to the source file.
        path: PathBuf,
    },
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();

    let code = match &cli.command {
        Command::Tokenize { path } => {
            log::debug!("dispatching tokenize {}", path.display());
            commands::tokenize::execute(path)?
        }
        Command::Parse { path } => {
            log::debug!("dispatching parse {}", path.display());
            commands::parse::execute(path)?
        }
        Command::Evaluate { path } => {
            log::debug!("dispatching evaluate {}", path.display());
            commands::evaluate::execute(path)?
        }
        Command::Run { path } => {
            log::debug!("dispatching run {}", path.display());
            commands::run::execute(path)?
        }
    };

    Ok(ExitCode::from(u8::try_from(code).unwrap_or(255)))
}
