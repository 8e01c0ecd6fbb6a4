//! Lexical and syntactic diagnostics.
//!
//! These are collected, not raised: both the scanner and the parser keep
//! going after reporting one so that a single run surfaces as many problems
//! as it can (see [`crate::parser::Parser::synchronize`] for the parser's
//! recovery strategy). Exit-code selection lives in the `lox-cli` crate,
//! which only needs to know whether either list is non-empty.

use std::fmt;

use lox_ast::Token;
use thiserror::Error;

/// Why the scanner rejected a character or run of characters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    #[error("Unexpected character: {0}")]
    UnexpectedCharacter(char),
    #[error("Unterminated string.")]
    UnterminatedString,
}

/// A lexical diagnostic, formatted as `[line N] Error: <message>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub line: usize,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.kind)
    }
}

/// Where, in the token stream, a syntactic diagnostic was raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorLocation {
    /// The offending token's lexeme.
    Lexeme(String),
    /// The offending token was `EOF`.
    End,
}

/// A syntactic diagnostic, formatted as `[Line N] Error at '<lexeme>': <message>`
/// or `[Line N] Error at end: <message>` when the offending token is `EOF`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub line: usize,
    pub location: ErrorLocation,
    pub message: String,
}

impl ParseError {
    #[must_use]
    pub fn at(token: &Token, message: impl Into<String>) -> Self {
        let location = if token.kind == lox_ast::TokenKind::EOF {
            ErrorLocation::End
        } else {
            ErrorLocation::Lexeme(token.lexeme.clone())
        };
        Self { line: token.line, location, message: message.into() }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            ErrorLocation::Lexeme(lexeme) => {
                write!(f, "[Line {}] Error at '{}': {}", self.line, lexeme, self.message)
            }
            ErrorLocation::End => write!(f, "[Line {}] Error at end: {}", self.line, self.message),
        }
    }
}
