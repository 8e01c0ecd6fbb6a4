// -------------------------------------------------------------------------
// SPDX-FileCopyrightText: Copyright © 2025 The Lox Project
// SPDX-FileName: crates/lox-stdlib/src/lib.rs
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
//! Native (host-provided) functions registered into a fresh interpreter's
//! global environment. The language has exactly one: `clock`.

use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use lox_runtime::{Environment, NativeFunction, Value};

/// Registers every native function into `globals`. Called once, right
/// after [`lox_runtime::Interpreter::new`], before the first statement of
/// the program runs.
pub fn install(globals: &Environment) {
    globals.define("clock", Value::Callable(Rc::new(clock())));
}

/// `clock()` — arity 0, returns the number of seconds since the Unix epoch
/// with sub-second precision. The language's sole built-in, and its only
/// source of non-determinism.
fn clock() -> NativeFunction {
    NativeFunction::new("clock", 0, |_args| {
        let elapsed = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default();
        Value::Number(elapsed.as_secs_f64())
    })
}

#[cfg(test)]
mod tests {
    use lox_runtime::Callable;

    use super::*;

    #[test]
    fn clock_has_no_parameters() { assert_eq!(clock().arity(), 0); }

    #[test]
    fn clock_displays_as_a_native_fn() { assert_eq!(clock().display(), "<native fn>"); }

    #[test]
    fn install_defines_clock_in_the_given_environment() {
        let globals = Environment::new_global();
        install(&globals);
        assert!(matches!(globals.get("clock"), Ok(Value::Callable(_))));
    }
}
