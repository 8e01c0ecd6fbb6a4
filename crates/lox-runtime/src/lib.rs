// -------------------------------------------------------------------------
// SPDX-FileCopyrightText: Copyright © 2025 The Lox Project
// SPDX-FileName: crates/lox-runtime/src/lib.rs
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
//! Tree-walking evaluator for the Lox-family scripting language.
//!
//! This crate owns everything that exists only while a program is running:
//! the [`Value`] type, the [`Environment`] chain closures capture pieces of,
//! the [`Callable`] capability shared by user functions and native
//! functions, and the [`Interpreter`] that walks a parsed program against
//! them. Lexing, parsing and static resolution happen upstream in
//! `lox-parser`/`lox-resolver`; this crate only ever sees their output.

pub mod callable;
pub mod environment;
pub mod errors;
pub mod interpreter;
pub mod value;

pub use callable::{Callable, LoxFunction, NativeFunction};
pub use environment::Environment;
pub use errors::RuntimeError;
pub use interpreter::Interpreter;
pub use value::Value;
