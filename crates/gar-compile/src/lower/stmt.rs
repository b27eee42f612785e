// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Statement lowering.

use gar_ast::stmt::{Stmt, StmtKind};
use tracing::debug;

use super::Compiler;
use crate::LowerError;

impl Compiler {
    /// The function body is the value of its last `return`.
    ///
    /// Expression statements are not sequenced into the IR yet and are
    /// dropped.
    pub(super) fn lower_body(&self, stmts: &[Stmt]) -> Result<Option<gar_core::Expr>, LowerError> {
        let mut body = None;
        for stmt in stmts {
            match &stmt.kind {
                StmtKind::Return(e) => body = Some(self.lower_expr(e)?),
                StmtKind::Expr(_) => {
                    // TODO: lower to a `let _ = <expr> in ...` chain once the IR has sequencing
                    debug!(start = stmt.span.start, end = stmt.span.end, "dropping expression statement");
                }
                StmtKind::Bad => return Err(LowerError::BadNode { span: stmt.span }),
            }
        }
        Ok(body)
    }
}
