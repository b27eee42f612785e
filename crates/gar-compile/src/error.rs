// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Lowering errors.

use gar_ast::Span;
use gar_parser::ErrorList;
use thiserror::Error;

/// Why a tree could not be lowered. These are contract violations by the
/// caller (or by the compiler itself), not diagnostics for the user's code.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LowerError {
    #[error("module has no name")]
    MissingModuleName,

    #[error("malformed node at {}..{}", span.start, span.end)]
    BadNode { span: Span },

    #[error("{construct} cannot be compiled (at {}..{})", span.start, span.end)]
    Unsupported { construct: &'static str, span: Span },

    #[error("built-in module functions do not parse:\n{0}")]
    Boilerplate(ErrorList),
}
