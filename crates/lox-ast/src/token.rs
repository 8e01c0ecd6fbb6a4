//! The token type produced by the scanner.

use std::fmt;

/// The closed set of token kinds recognized anywhere in the Lox grammar.
///
/// Variants are spelled in `SCREAMING_CASE` because that is the literal text
/// the `tokenize` CLI command prints for each token (see [`TokenKind::name`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum TokenKind {
    LEFT_PAREN,
    RIGHT_PAREN,
    LEFT_BRACE,
    RIGHT_BRACE,
    STAR,
    DOT,
    COMMA,
    PLUS,
    MINUS,
    SEMICOLON,
    EQUAL,
    EQUAL_EQUAL,
    BANG,
    BANG_EQUAL,
    LESS,
    LESS_EQUAL,
    GREATER,
    GREATER_EQUAL,
    SLASH,
    STRING,
    NUMBER,
    IDENTIFIER,
    EOF,
    AND,
    CLASS,
    ELSE,
    FALSE,
    FOR,
    FUN,
    IF,
    NIL,
    OR,
    PRINT,
    RETURN,
    SUPER,
    THIS,
    TRUE,
    VAR,
    WHILE,
}

impl TokenKind {
    /// Looks up the keyword kind for an identifier lexeme, if any.
    #[must_use]
    pub fn keyword(lexeme: &str) -> Option<Self> {
        Some(match lexeme {
            "and" => Self::AND,
            "class" => Self::CLASS,
            "else" => Self::ELSE,
            "false" => Self::FALSE,
            "for" => Self::FOR,
            "fun" => Self::FUN,
            "if" => Self::IF,
            "nil" => Self::NIL,
            "or" => Self::OR,
            "print" => Self::PRINT,
            "return" => Self::RETURN,
            "super" => Self::SUPER,
            "this" => Self::THIS,
            "true" => Self::TRUE,
            "var" => Self::VAR,
            "while" => Self::WHILE,
            _ => return None,
        })
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{self:?}") }
}

/// A decoded literal value carried by `NUMBER` and `STRING` tokens, and
/// reused as the payload of an [`Expr::Literal`](crate::expr::Expr::Literal)
/// node for `true`/`false`/`nil` as well.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(f64),
    Str(String),
    Bool(bool),
    Nil,
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Nil => write!(f, "nil"),
        }
    }
}

/// Formats a double the way the `tokenize` command prints `NUMBER` literals:
/// always with at least one digit after the decimal point (`42.0`, not `42`).
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() { format!("{n:.1}") } else { n.to_string() }
}

/// One scanned token: its kind, the exact source text it was scanned from,
/// its decoded literal (present only for `NUMBER`/`STRING`), and the 1-based
/// source line it started on.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<Literal>,
    pub line: usize,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, literal: Option<Literal>, line: usize) -> Self {
        Self { kind, lexeme: lexeme.into(), literal, line }
    }
}

impl fmt::Display for Token {
    /// The `tokenize` command's per-line format: `<KIND> <lexeme> <literal-or-"null">`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let literal = self.literal.as_ref().map_or_else(|| "null".to_string(), ToString::to_string);
        write!(f, "{} {} {}", self.kind, self.lexeme, literal)
    }
}
