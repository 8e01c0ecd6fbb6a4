use lox_ast::Token;
use thiserror::Error;

/// A static scoping mistake caught before the program ever runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("[Line {line}] Error at '{lexeme}': Can't read local variable in its own initializer.")]
    SelfReferentialInitializer { line: usize, lexeme: String },
}

impl ResolveError {
    #[must_use]
    pub fn self_referential_initializer(name: &Token) -> Self {
        Self::SelfReferentialInitializer { line: name.line, lexeme: name.lexeme.clone() }
    }
}
