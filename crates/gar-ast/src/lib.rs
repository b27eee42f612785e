// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Abstract Syntax Tree types for the Garlic language.
//!
//! This crate defines the tokens, source positions and AST nodes shared
//! between the lexer, the parser and the Core IR compiler.

pub mod span;
pub mod token;
pub mod expr;
pub mod stmt;
pub mod decl;

pub use span::{LineMap, Position, SourceFile, Span};
