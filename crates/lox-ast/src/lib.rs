//! Token model and abstract syntax tree for the Lox-family scripting language.
//!
//! This crate is the leaf of the interpreter pipeline: it defines the
//! [`Token`]/[`TokenKind`] value type produced by the scanner and consumed by
//! the parser, the [`Expr`]/[`Stmt`] node types produced by the parser and
//! walked by the resolver and interpreter, and a parenthesized-form printer
//! used by the `parse` CLI command.
//!
//! Every node type here is an immutable, closed tagged variant. There is no
//! visitor trait: callers dispatch with a `match`, which is enough for a
//! grammar this small and keeps each pass (resolver, interpreter, printer)
//! free to only handle what it cares about.

pub mod expr;
pub mod printer;
pub mod stmt;
pub mod token;

pub use expr::{Expr, ExprId, Literal};
pub use printer::{print_expr, print_stmt};
pub use stmt::{FunctionDecl, Stmt};
pub use token::{Token, TokenKind};
