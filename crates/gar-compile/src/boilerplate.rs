// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Functions every compiled module carries.
//!
//! The runtime refuses to load a module without `module_info/0` and
//! `module_info/1`; both forward to `erlang:module_info` with the module's
//! own name.

use gar_ast::decl::Decl;
use tracing::trace;

use crate::LowerError;

const MODULE_INFO: &str = "
module common

func module_info() {
	return erlang.module_info('{{mod}}')
}

func module_info(Value) {
	return erlang.module_info('{{mod}}', Value)
}
";

/// The `module_info` declarations for `module_name`.
pub(crate) fn module_info_decls(module_name: &str) -> Result<Vec<Decl>, LowerError> {
    let src = MODULE_INFO.replace("{{mod}}", module_name);
    let module = gar_parser::parse_module("<builtin>", &src)
        .into_result()
        .map_err(LowerError::Boilerplate)?;
    trace!(module = module_name, decls = module.decls.len(), "instantiated module_info");
    Ok(module.decls)
}
