// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Lowering from the Garlic AST to Core IR.
//!
//! Input must be a clean tree: a module with a name and no Bad nodes. The
//! AST is only borrowed; lowering the same tree twice gives the same IR.

mod boilerplate;
mod error;
pub mod lower;

pub use error::LowerError;
pub use lower::Compiler;
