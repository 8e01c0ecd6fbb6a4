//! The scanner: a small hand-written state machine over character classes.
//!
//! Deliberately not built on a lexer-generator crate (the rest of this
//! workspace's ancestry leans on `logos` for that) — the scanner needs tight
//! control over panic-free error collection (see [`crate::diagnostics`])
//! and over exactly which characters terminate a number or a string, which a
//! generated DFA would obscure more than it would save here.

use lox_ast::{Literal, Token, TokenKind};

use crate::diagnostics::{LexError, LexErrorKind};

/// Scans a complete source string into tokens plus any lexical diagnostics.
///
/// The token list always ends with an `EOF` token carrying the final line
/// number, even when the source is empty or every character was rejected.
#[must_use]
pub fn scan(source: &str) -> (Vec<Token>, Vec<LexError>) {
    Scanner::new(source).scan_tokens()
}

struct Scanner {
    source: Vec<char>,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
    start: usize,
    current: usize,
    line: usize,
}

impl Scanner {
    fn new(source: &str) -> Self {
        Self {
            source: source.chars().collect(),
            tokens: Vec::new(),
            errors: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    fn scan_tokens(mut self) -> (Vec<Token>, Vec<LexError>) {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }
        self.tokens.push(Token::new(TokenKind::EOF, "", None, self.line));
        (self.tokens, self.errors)
    }

    fn is_at_end(&self) -> bool { self.current >= self.source.len() }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }

    fn peek(&self) -> char { self.source.get(self.current).copied().unwrap_or('\0') }

    fn peek_next(&self) -> char { self.source.get(self.current + 1).copied().unwrap_or('\0') }

    fn matches(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.source[self.current] != expected {
            return false;
        }
        self.current += 1;
        true
    }

    fn lexeme(&self) -> String { self.source[self.start..self.current].iter().collect() }

    fn add_token(&mut self, kind: TokenKind) { self.add_token_with_literal(kind, None); }

    fn add_token_with_literal(&mut self, kind: TokenKind, literal: Option<Literal>) {
        self.tokens.push(Token::new(kind, self.lexeme(), literal, self.line));
    }

    fn error(&mut self, kind: LexErrorKind) { self.errors.push(LexError { kind, line: self.line }); }

    fn scan_token(&mut self) {
        let c = self.advance();

        match c {
            '(' => self.add_token(TokenKind::LEFT_PAREN),
            ')' => self.add_token(TokenKind::RIGHT_PAREN),
            '{' => self.add_token(TokenKind::LEFT_BRACE),
            '}' => self.add_token(TokenKind::RIGHT_BRACE),
            '*' => self.add_token(TokenKind::STAR),
            '.' => self.add_token(TokenKind::DOT),
            ',' => self.add_token(TokenKind::COMMA),
            '+' => self.add_token(TokenKind::PLUS),
            '-' => self.add_token(TokenKind::MINUS),
            ';' => self.add_token(TokenKind::SEMICOLON),
            '!' => {
                let kind = if self.matches('=') { TokenKind::BANG_EQUAL } else { TokenKind::BANG };
                self.add_token(kind);
            }
            '=' => {
                let kind = if self.matches('=') { TokenKind::EQUAL_EQUAL } else { TokenKind::EQUAL };
                self.add_token(kind);
            }
            '<' => {
                let kind = if self.matches('=') { TokenKind::LESS_EQUAL } else { TokenKind::LESS };
                self.add_token(kind);
            }
            '>' => {
                let kind = if self.matches('=') { TokenKind::GREATER_EQUAL } else { TokenKind::GREATER };
                self.add_token(kind);
            }
            '/' => {
                if self.matches('/') {
                    while self.peek() != '\n' && !self.is_at_end() {
                        self.advance();
                    }
                } else {
                    self.add_token(TokenKind::SLASH);
                }
            }
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,
            '"' => self.string(),
            c if c.is_ascii_digit() => self.number(),
            c if is_identifier_start(c) => self.identifier(),
            c => self.error(LexErrorKind::UnexpectedCharacter(c)),
        }
    }

    fn string(&mut self) {
        while self.peek() != '"' && !self.is_at_end() {
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            self.error(LexErrorKind::UnterminatedString);
            return;
        }

        self.advance(); // closing quote
        let value: String = self.source[self.start + 1..self.current - 1].iter().collect();
        self.add_token_with_literal(TokenKind::STRING, Some(Literal::Str(value)));
    }

    fn number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }
        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance(); // consume the '.'
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }
        let text = self.lexeme();
        let value: f64 = text.parse().expect("scanned number lexeme must parse as f64");
        self.add_token_with_literal(TokenKind::NUMBER, Some(Literal::Number(value)));
    }

    fn identifier(&mut self) {
        while is_identifier_continue(self.peek()) {
            self.advance();
        }
        let text = self.lexeme();
        let kind = TokenKind::keyword(&text).unwrap_or(TokenKind::IDENTIFIER);
        self.add_token(kind);
    }
}

fn is_identifier_start(c: char) -> bool { c.is_ascii_alphabetic() || c == '_' }
fn is_identifier_continue(c: char) -> bool { c.is_ascii_alphanumeric() || c == '_' }
