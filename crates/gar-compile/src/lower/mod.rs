// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! AST → Core IR lowering.

mod expr;
mod stmt;

use gar_ast::decl::{DeclKind, FuncDecl, Module};
use gar_core::{Annotation, Func, FuncName, Var};
use tracing::{debug_span, trace};

use crate::boilerplate::module_info_decls;
use crate::LowerError;

/// Lowers parsed modules and functions to Core IR.
#[derive(Debug, Default, Clone, Copy)]
pub struct Compiler;

impl Compiler {
    pub fn new() -> Self {
        Compiler
    }

    /// Compile a module. The generated `module_info` functions come first,
    /// followed by the module's own functions in source order.
    pub fn compile_module(&self, module: &Module) -> Result<gar_core::Module, LowerError> {
        let _span = debug_span!("compile_module", unit = module.file.name()).entered();

        let name = module.name.as_ref().ok_or(LowerError::MissingModuleName)?;
        let builtin = module_info_decls(&name.name)?;

        let mut core = gar_core::Module::new(name.name.clone());
        for decl in builtin.iter().chain(&module.decls) {
            match &decl.kind {
                DeclKind::Func(f) => {
                    let func = self.compile_function(f)?;
                    if f.is_public() {
                        core.exports.push(func.name.clone());
                    }
                    core.functions.push(func);
                }
                // Imports and types only matter to the front end
                DeclKind::Import(imp) => trace!(path = %imp.path, "skipping import"),
                DeclKind::Type(t) => {
                    if t.definition.bad_nodes() > 0 {
                        return Err(LowerError::BadNode { span: decl.span });
                    }
                    trace!(name = %t.name.name, "skipping type declaration");
                }
                DeclKind::Bad => return Err(LowerError::BadNode { span: decl.span }),
            }
        }
        Ok(core)
    }

    /// Compile one function declaration.
    pub fn compile_function(&self, func: &FuncDecl) -> Result<Func, LowerError> {
        let name = FuncName::new(func.name.name.clone(), func.arity());
        trace!(function = %name, "compiling");

        if let Some(bad) = func.body.iter().find(|s| s.bad_nodes() > 0) {
            return Err(LowerError::BadNode { span: bad.span });
        }

        let params = func.params.iter().map(|p| Var::new(p.name.clone())).collect();
        let body = self.lower_body(&func.body)?;
        Ok(Func { annotation: Annotation::function(&name), name, params, body })
    }
}
