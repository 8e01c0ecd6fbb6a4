//! Recursive-descent parser with precedence climbing, left-to-right
//! associativity, and panic-mode error recovery.
//!
//! The grammar is transcribed directly from the language's precedence table
//! (low to high: `assignment`, `logic_or`, `logic_and`, `equality`,
//! `comparison`, `term`, `factor`, `unary`, `call`, `primary`), one method
//! per production. Each binary-precedence level is a small loop so that
//! `1 - 2 - 3` builds `((1 - 2) - 3)` rather than right-nesting.

use lox_ast::{Expr, ExprId, FunctionDecl, Literal, Stmt, Token, TokenKind};
use std::rc::Rc;

use crate::diagnostics::ParseError;

/// Parses a complete token stream (as produced by [`crate::lexer::scan`])
/// into a program: an ordered list of top-level declarations, plus whether
/// any diagnostic was reported along the way.
#[must_use]
pub fn parse(tokens: Vec<Token>) -> (Vec<Stmt>, Vec<ParseError>) {
    let mut parser = Parser::new(tokens);
    let mut statements = Vec::new();
    while !parser.is_at_end() {
        match parser.declaration() {
            Some(stmt) => statements.push(stmt),
            None => parser.synchronize(),
        }
    }
    (statements, parser.errors)
}

struct Parser {
    tokens: Vec<Token>,
    current: usize,
    errors: Vec<ParseError>,
    next_expr_id: u32,
}

/// Statement keywords that begin a new declaration — panic-mode recovery
/// stops consuming tokens once one of these is next.
const SYNC_KEYWORDS: &[TokenKind] = &[
    TokenKind::CLASS,
    TokenKind::FUN,
    TokenKind::VAR,
    TokenKind::FOR,
    TokenKind::IF,
    TokenKind::WHILE,
    TokenKind::PRINT,
    TokenKind::RETURN,
];

impl Parser {
    fn new(tokens: Vec<Token>) -> Self { Self { tokens, current: 0, errors: Vec::new(), next_expr_id: 0 } }

    fn fresh_id(&mut self) -> ExprId {
        let id = ExprId::new(self.next_expr_id);
        self.next_expr_id += 1;
        id
    }

    // -- token stream helpers ------------------------------------------------

    fn peek(&self) -> &Token { &self.tokens[self.current] }

    fn previous(&self) -> &Token { &self.tokens[self.current - 1] }

    fn is_at_end(&self) -> bool { self.peek().kind == TokenKind::EOF }

    fn check(&self, kind: TokenKind) -> bool { !self.is_at_end() && self.peek().kind == kind }

    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    fn matches(&mut self, kinds: &[TokenKind]) -> bool {
        if kinds.iter().any(|k| self.check(*k)) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn consume(&mut self, kind: TokenKind, message: &str) -> Result<&Token, ParseError> {
        if self.check(kind) {
            return Ok(self.advance());
        }
        Err(ParseError::at(self.peek(), message))
    }

    /// Discards tokens until the next likely statement boundary: either the
    /// previous token was a `;`, or the next token starts a new declaration.
    fn synchronize(&mut self) {
        while !self.is_at_end() {
            if self.previous().kind == TokenKind::SEMICOLON {
                return;
            }
            if SYNC_KEYWORDS.contains(&self.peek().kind) {
                return;
            }
            self.advance();
        }
    }

    // -- declarations ---------------------------------------------------------

    fn declaration(&mut self) -> Option<Stmt> {
        let result = if self.matches(&[TokenKind::VAR]) {
            self.var_declaration()
        } else if self.matches(&[TokenKind::FUN]) {
            self.function_declaration("function")
        } else {
            self.statement()
        };
        match result {
            Ok(stmt) => Some(stmt),
            Err(err) => {
                self.errors.push(err);
                None
            }
        }
    }

    fn var_declaration(&mut self) -> Result<Stmt, ParseError> {
        let name = self.consume(TokenKind::IDENTIFIER, "Expect variable name.")?.clone();
        let initializer =
            if self.matches(&[TokenKind::EQUAL]) { Some(self.expression()?) } else { None };
        self.consume(TokenKind::SEMICOLON, "Expect ';' after variable declaration.")?;
        Ok(Stmt::Var { name, initializer })
    }

    fn function_declaration(&mut self, kind: &str) -> Result<Stmt, ParseError> {
        let name = self.consume(TokenKind::IDENTIFIER, &format!("Expect {kind} name."))?.clone();
        self.consume(TokenKind::LEFT_PAREN, &format!("Expect '(' after {kind} name."))?;
        let mut params = Vec::new();
        if !self.check(TokenKind::RIGHT_PAREN) {
            loop {
                params.push(self.consume(TokenKind::IDENTIFIER, "Expect parameter name.")?.clone());
                if !self.matches(&[TokenKind::COMMA]) {
                    break;
                }
            }
        }
        self.consume(TokenKind::RIGHT_PAREN, "Expect ')' after parameters.")?;
        self.consume(TokenKind::LEFT_BRACE, &format!("Expect '{{' before {kind} body."))?;
        let body = self.block()?;
        Ok(Stmt::Function(Rc::new(FunctionDecl { name, params, body })))
    }

    // -- statements -------------------------------------------------------------

    fn statement(&mut self) -> Result<Stmt, ParseError> {
        if self.matches(&[TokenKind::PRINT]) {
            return self.print_statement();
        }
        if self.matches(&[TokenKind::LEFT_BRACE]) {
            return Ok(Stmt::Block(self.block()?));
        }
        if self.matches(&[TokenKind::IF]) {
            return self.if_statement();
        }
        if self.matches(&[TokenKind::WHILE]) {
            return self.while_statement();
        }
        if self.matches(&[TokenKind::FOR]) {
            return self.for_statement();
        }
        if self.matches(&[TokenKind::RETURN]) {
            return self.return_statement();
        }
        self.expression_statement()
    }

    fn print_statement(&mut self) -> Result<Stmt, ParseError> {
        let value = self.expression()?;
        self.consume(TokenKind::SEMICOLON, "Expect ';' after value.")?;
        Ok(Stmt::Print(value))
    }

    fn expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.expression()?;
        self.consume(TokenKind::SEMICOLON, "Expect ';' after expression.")?;
        Ok(Stmt::Expression(expr))
    }

    fn block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();
        while !self.check(TokenKind::RIGHT_BRACE) && !self.is_at_end() {
            match self.declaration() {
                Some(stmt) => statements.push(stmt),
                None => self.synchronize(),
            }
        }
        self.consume(TokenKind::RIGHT_BRACE, "Expect '}' after block.")?;
        Ok(statements)
    }

    fn if_statement(&mut self) -> Result<Stmt, ParseError> {
        self.consume(TokenKind::LEFT_PAREN, "Expect '(' after 'if'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RIGHT_PAREN, "Expect ')' after if condition.")?;
        let then_branch = Box::new(self.statement()?);
        let else_branch =
            if self.matches(&[TokenKind::ELSE]) { Some(Box::new(self.statement()?)) } else { None };
        Ok(Stmt::If { condition, then_branch, else_branch })
    }

    fn while_statement(&mut self) -> Result<Stmt, ParseError> {
        self.consume(TokenKind::LEFT_PAREN, "Expect '(' after 'while'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RIGHT_PAREN, "Expect ')' after condition.")?;
        let body = Box::new(self.statement()?);
        Ok(Stmt::While { condition, body })
    }

    /// Desugars `for (init; cond; inc) body` into:
    /// `{ init; while (cond_or_true) { body; inc; } }`
    fn for_statement(&mut self) -> Result<Stmt, ParseError> {
        self.consume(TokenKind::LEFT_PAREN, "Expect '(' after 'for'.")?;

        let initializer = if self.matches(&[TokenKind::SEMICOLON]) {
            None
        } else if self.matches(&[TokenKind::VAR]) {
            Some(self.var_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let condition = if self.check(TokenKind::SEMICOLON) {
            Expr::Literal(Literal::Bool(true))
        } else {
            self.expression()?
        };
        self.consume(TokenKind::SEMICOLON, "Expect ';' after loop condition.")?;

        let increment =
            if self.check(TokenKind::RIGHT_PAREN) { None } else { Some(self.expression()?) };
        self.consume(TokenKind::RIGHT_PAREN, "Expect ')' after for clauses.")?;

        let mut body = self.statement()?;
        if let Some(increment) = increment {
            body = Stmt::Block(vec![body, Stmt::Expression(increment)]);
        }
        body = Stmt::While { condition, body: Box::new(body) };
        if let Some(initializer) = initializer {
            body = Stmt::Block(vec![initializer, body]);
        }
        Ok(body)
    }

    fn return_statement(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.previous().clone();
        let value = if self.check(TokenKind::SEMICOLON) { None } else { Some(self.expression()?) };
        self.consume(TokenKind::SEMICOLON, "Expect ';' after return value.")?;
        Ok(Stmt::Return { keyword, value })
    }

    // -- expressions --------------------------------------------------------

    fn expression(&mut self) -> Result<Expr, ParseError> { self.assignment() }

    fn assignment(&mut self) -> Result<Expr, ParseError> {
        let expr = self.or()?;

        if self.matches(&[TokenKind::EQUAL]) {
            let equals = self.previous().clone();
            let value = self.assignment()?;

            return match expr {
                Expr::Variable { name, .. } => {
                    Ok(Expr::Assign { id: self.fresh_id(), name, value: Box::new(value) })
                }
                _ => {
                    self.errors.push(ParseError::at(&equals, "Invalid assignment target."));
                    Ok(value)
                }
            };
        }

        Ok(expr)
    }

    fn or(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.and()?;
        while self.matches(&[TokenKind::OR]) {
            let op = self.previous().clone();
            let right = self.and()?;
            expr = Expr::Logical { left: Box::new(expr), op, right: Box::new(right) };
        }
        Ok(expr)
    }

    fn and(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.equality()?;
        while self.matches(&[TokenKind::AND]) {
            let op = self.previous().clone();
            let right = self.equality()?;
            expr = Expr::Logical { left: Box::new(expr), op, right: Box::new(right) };
        }
        Ok(expr)
    }

    fn equality(&mut self) -> Result<Expr, ParseError> {
        self.binary_left_assoc(Self::comparison, &[TokenKind::BANG_EQUAL, TokenKind::EQUAL_EQUAL])
    }

    fn comparison(&mut self) -> Result<Expr, ParseError> {
        self.binary_left_assoc(
            Self::term,
            &[TokenKind::GREATER, TokenKind::GREATER_EQUAL, TokenKind::LESS, TokenKind::LESS_EQUAL],
        )
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        self.binary_left_assoc(Self::factor, &[TokenKind::MINUS, TokenKind::PLUS])
    }

    fn factor(&mut self) -> Result<Expr, ParseError> {
        self.binary_left_assoc(Self::unary, &[TokenKind::SLASH, TokenKind::STAR])
    }

    /// Shared left-associative loop for the four binary precedence levels:
    /// `next() ( op next() )*`.
    fn binary_left_assoc(
        &mut self,
        next: fn(&mut Self) -> Result<Expr, ParseError>,
        ops: &[TokenKind],
    ) -> Result<Expr, ParseError> {
        let mut expr = next(self)?;
        while self.matches(ops) {
            let op = self.previous().clone();
            let right = next(self)?;
            expr = Expr::Binary { left: Box::new(expr), op, right: Box::new(right) };
        }
        Ok(expr)
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        if self.matches(&[TokenKind::BANG, TokenKind::MINUS]) {
            let op = self.previous().clone();
            let right = self.unary()?;
            return Ok(Expr::Unary { op, right: Box::new(right) });
        }
        self.call()
    }

    fn call(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.primary()?;
        while self.matches(&[TokenKind::LEFT_PAREN]) {
            expr = self.finish_call(expr)?;
        }
        Ok(expr)
    }

    fn finish_call(&mut self, callee: Expr) -> Result<Expr, ParseError> {
        let mut args = Vec::new();
        if !self.check(TokenKind::RIGHT_PAREN) {
            loop {
                args.push(self.expression()?);
                if !self.matches(&[TokenKind::COMMA]) {
                    break;
                }
            }
        }
        let paren = self.consume(TokenKind::RIGHT_PAREN, "Expect ')' after arguments.")?.clone();
        Ok(Expr::Call { callee: Box::new(callee), paren, args })
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        if self.matches(&[TokenKind::FALSE]) {
            return Ok(Expr::Literal(Literal::Bool(false)));
        }
        if self.matches(&[TokenKind::TRUE]) {
            return Ok(Expr::Literal(Literal::Bool(true)));
        }
        if self.matches(&[TokenKind::NIL]) {
            return Ok(Expr::Literal(Literal::Nil));
        }
        if self.matches(&[TokenKind::NUMBER, TokenKind::STRING]) {
            let literal = self.previous().literal.clone().expect("scanner always attaches a literal");
            return Ok(Expr::Literal(literal));
        }
        if self.matches(&[TokenKind::IDENTIFIER]) {
            let name = self.previous().clone();
            return Ok(Expr::Variable { id: self.fresh_id(), name });
        }
        if self.matches(&[TokenKind::LEFT_PAREN]) {
            let expr = self.expression()?;
            self.consume(TokenKind::RIGHT_PAREN, "Expect ')' after expression.")?;
            return Ok(Expr::Grouping(Box::new(expr)));
        }
        Err(ParseError::at(self.peek(), "Expect expression."))
    }
}
