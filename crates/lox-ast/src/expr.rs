//! Expression nodes.

pub use crate::token::Literal;
use crate::token::Token;

/// A stable identity for an `Expr::Variable`/`Expr::Assign` node, assigned by
/// the parser as each such node is built.
///
/// The resolver keys its locals table on this id rather than on the node's
/// address or its name, so that two references to the same name at different
/// depths (shadowing) resolve independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExprId(u32);

impl ExprId {
    #[must_use]
    pub const fn new(id: u32) -> Self { Self(id) }
}

/// An expression node. Immutable once built; owns its subexpressions.
#[derive(Debug)]
pub enum Expr {
    /// A number, string, boolean, or nil constant.
    Literal(Literal),
    /// A parenthesized sub-expression.
    Grouping(Box<Expr>),
    /// `!right` or `-right`.
    Unary { op: Token, right: Box<Expr> },
    /// `left op right` for an arithmetic, comparison, or equality operator.
    Binary { left: Box<Expr>, op: Token, right: Box<Expr> },
    /// `left and right` / `left or right`. Short-circuits at evaluation time.
    Logical { left: Box<Expr>, op: Token, right: Box<Expr> },
    /// A free reference to a binding.
    Variable { id: ExprId, name: Token },
    /// Assignment to an existing binding.
    Assign { id: ExprId, name: Token, value: Box<Expr> },
    /// A function call. `paren` is kept only to attribute call-site errors
    /// to a line.
    Call { callee: Box<Expr>, paren: Token, args: Vec<Expr> },
}
