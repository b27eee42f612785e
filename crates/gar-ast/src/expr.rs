// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Expression AST nodes.

use crate::Span;

/// An identifier together with where it was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self { name: name.into(), span }
    }
}

/// An expression in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

/// The kind of expression.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// Integer literal. `value` is 0 when `lit` did not convert.
    Int { lit: String, value: i64 },
    /// Float literal. `value` is 0.0 when `lit` did not convert.
    Float { lit: String, value: f64 },
    /// String literal (unquoted contents)
    String(String),
    /// Atom literal (unquoted contents)
    Atom(String),
    /// Identifier
    Ident(String),
    /// Parenthesized expression; the span covers both parentheses.
    Paren(Box<Expr>),
    /// Prefix operation; the operator sits at `span.start`.
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    /// Binary operation
    Binary {
        op: BinOp,
        op_span: Span,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Rebind: `name = value`
    Assign {
        target: Ident,
        eq_pos: usize,
        value: Box<Expr>,
    },
    /// Structural match-bind: `pattern := value`
    MatchAssign {
        pattern: Box<Expr>,
        eq_pos: usize,
        value: Box<Expr>,
    },
    /// Function call
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
        lparen: usize,
        rparen: usize,
    },
    /// Member or module access: `target.attr`
    Dot {
        target: Box<Expr>,
        attr: Ident,
    },
    /// Placeholder for an expression that failed to parse.
    Bad,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn bad(span: Span) -> Self {
        Self { kind: ExprKind::Bad, span }
    }

    /// Source offset where the expression starts.
    pub fn pos(&self) -> usize {
        self.span.start
    }

    pub fn as_ident(&self) -> Option<&str> {
        match &self.kind {
            ExprKind::Ident(name) => Some(name),
            _ => None,
        }
    }

    /// Number of `Bad` nodes in this subtree.
    pub fn bad_nodes(&self) -> usize {
        match &self.kind {
            ExprKind::Bad => 1,
            ExprKind::Int { .. }
            | ExprKind::Float { .. }
            | ExprKind::String(_)
            | ExprKind::Atom(_)
            | ExprKind::Ident(_) => 0,
            ExprKind::Paren(inner) => inner.bad_nodes(),
            ExprKind::Unary { operand, .. } => operand.bad_nodes(),
            ExprKind::Binary { left, right, .. } => left.bad_nodes() + right.bad_nodes(),
            ExprKind::Assign { value, .. } => value.bad_nodes(),
            ExprKind::MatchAssign { pattern, value, .. } => pattern.bad_nodes() + value.bad_nodes(),
            ExprKind::Call { callee, args, .. } => {
                callee.bad_nodes() + args.iter().map(Expr::bad_nodes).sum::<usize>()
            }
            ExprKind::Dot { target, .. } => target.bad_nodes(),
        }
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    // Comparison
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
}

impl BinOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
            BinOp::Lt => "<",
            BinOp::Gt => ">",
            BinOp::Le => "<=",
            BinOp::Ge => ">=",
        }
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Negation (-)
    Neg,
    /// Identity (+)
    Plus,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Plus => "+",
        }
    }
}
