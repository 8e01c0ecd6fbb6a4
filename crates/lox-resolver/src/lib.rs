//! Static scope resolution: a pass between parsing and interpretation that
//! answers, for every variable reference, "how many enclosing scopes up is
//! this bound?" ahead of time, so the interpreter doesn't have to walk the
//! environment chain looking it up at every evaluation.
//!
//! The output is a side table from [`lox_ast::ExprId`] to a scope distance
//! rather than an annotation mutated onto the AST nodes themselves — the AST
//! is immutable once parsed, and a side table keeps this crate's only
//! coupling to [`lox_ast`] read-only.

mod error;
mod resolver;

pub use error::ResolveError;
pub use resolver::{resolve, Locals};
