//! Statement AST nodes.

use crate::expr::Expr;
use crate::Span;

/// A statement in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

/// The kind of statement.
#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    /// `return <expr>`
    Return(Expr),
    /// Expression statement
    Expr(Expr),
    /// Placeholder for a statement that failed to parse. The span runs from
    /// the offending token to where recovery resumed.
    Bad,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn bad_nodes(&self) -> usize {
        match &self.kind {
            StmtKind::Return(e) | StmtKind::Expr(e) => e.bad_nodes(),
            StmtKind::Bad => 1,
        }
    }
}
