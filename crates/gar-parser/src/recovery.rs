// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Token sets used to resynchronize after a syntax error.

use gar_ast::token::TokenKind;

/// A set of token kinds, one bit per kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TokenSet(u64);

impl TokenSet {
    pub const fn new() -> Self {
        Self(0)
    }

    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u64 << kind.index()))
    }

    pub const fn contains(&self, kind: TokenKind) -> bool {
        (self.0 & (1u64 << kind.index())) != 0
    }
}

/// Tokens that can begin a top-level declaration.
pub const DECL_START: TokenSet = TokenSet::new()
    .with(TokenKind::Eof)
    .with(TokenKind::Func)
    .with(TokenKind::TypeKeyword)
    .with(TokenKind::Import);

/// Tokens that close an expression.
pub const EXPR_END: TokenSet = TokenSet::new()
    .with(TokenKind::Eof)
    .with(TokenKind::Semicolon)
    .with(TokenKind::RParen)
    .with(TokenKind::RCurlyBracket)
    .with(TokenKind::Comma);

/// Tokens that can begin a statement.
pub const STMT_START: TokenSet = TokenSet::new()
    .with(TokenKind::Return)
    .with(TokenKind::Identifier) // assignment
    .with(TokenKind::LCurlyBracket);

pub const PARAM_START: TokenSet = TokenSet::new().with(TokenKind::Identifier);
