// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Core IR - the Core Erlang shaped output of the compiler.
//!
//! A module is a flat list of functions identified by name and arity. Bodies
//! are expression trees over literals, variables, local application and
//! inter-module calls.

mod display;
mod expr;
mod module;

pub use expr::{Const, Expr, Var};
pub use module::{Annotation, Func, FuncName, Module};
