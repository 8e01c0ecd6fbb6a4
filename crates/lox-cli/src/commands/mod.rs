//! One module per CLI subcommand: `tokenize`, `parse`, `evaluate`, `run`.
//! Each `execute` function owns its own file I/O and stream routing and
//! returns the process exit code to use.

pub mod evaluate;
pub mod parse;
pub mod run;
pub mod tokenize;
