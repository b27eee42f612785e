// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Expression lowering.
//!
//! Names are classified by shape alone. A bare identifier is a variable,
//! except in call position where it names a local function, or as the
//! target of `target.name(...)` where it names a module. Both become atoms.

use gar_ast::expr::{BinOp, Expr, ExprKind};
use gar_core::Expr as CoreExpr;

use super::Compiler;
use crate::LowerError;

/// Module that implements the built-in operators.
const OPERATOR_MODULE: &str = "erlang";

impl Compiler {
    /// Lower a single expression.
    pub fn compile_expr(&self, expr: &Expr) -> Result<CoreExpr, LowerError> {
        self.lower_expr(expr)
    }

    pub(super) fn lower_expr(&self, expr: &Expr) -> Result<CoreExpr, LowerError> {
        match &expr.kind {
            ExprKind::Int { value, .. } => Ok(CoreExpr::Integer(*value)),
            ExprKind::Float { value, .. } => Ok(CoreExpr::Float(*value)),
            ExprKind::String(s) => Ok(CoreExpr::String(s.clone())),
            ExprKind::Atom(a) => Ok(CoreExpr::Atom(a.clone())),
            ExprKind::Ident(name) => Ok(CoreExpr::var(name.clone())),
            ExprKind::Paren(inner) => self.lower_expr(inner),
            ExprKind::Unary { op, operand } => {
                let operand = self.lower_expr(operand)?;
                Ok(operator_call(op.symbol(), vec![operand]))
            }
            ExprKind::Binary { op, left, right, .. } => {
                let left = self.lower_expr(left)?;
                let right = self.lower_expr(right)?;
                Ok(operator_call(binary_op_name(*op), vec![left, right]))
            }
            ExprKind::Call { callee, args, .. } => self.lower_call(callee, args),
            ExprKind::Assign { .. } => Err(LowerError::Unsupported { construct: "assignment", span: expr.span }),
            ExprKind::MatchAssign { .. } => {
                Err(LowerError::Unsupported { construct: "match assignment", span: expr.span })
            }
            ExprKind::Dot { .. } => {
                Err(LowerError::Unsupported { construct: "member access outside a call", span: expr.span })
            }
            ExprKind::Bad => Err(LowerError::BadNode { span: expr.span }),
        }
    }

    fn lower_call(&self, callee: &Expr, args: &[Expr]) -> Result<CoreExpr, LowerError> {
        let args = args.iter().map(|a| self.lower_expr(a)).collect::<Result<Vec<_>, _>>()?;
        match &callee.kind {
            ExprKind::Dot { target, attr } => Ok(CoreExpr::InterModuleCall {
                module: Box::new(self.lower_name(target)?),
                func: attr.name.clone(),
                args,
            }),
            _ => Ok(CoreExpr::Application { func: Box::new(self.lower_name(callee)?), args }),
        }
    }

    /// A bare identifier here names a function or module rather than a
    /// variable; anything else lowers as usual.
    fn lower_name(&self, expr: &Expr) -> Result<CoreExpr, LowerError> {
        match &expr.kind {
            ExprKind::Ident(name) => Ok(CoreExpr::atom(name.clone())),
            _ => self.lower_expr(expr),
        }
    }
}

fn operator_call(op: &str, args: Vec<CoreExpr>) -> CoreExpr {
    CoreExpr::InterModuleCall { module: Box::new(CoreExpr::atom(OPERATOR_MODULE)), func: op.to_string(), args }
}

/// Erlang spelling of a binary operator.
fn binary_op_name(op: BinOp) -> &'static str {
    match op {
        BinOp::Ne => "/=",
        BinOp::Le => "=<",
        _ => op.symbol(),
    }
}
