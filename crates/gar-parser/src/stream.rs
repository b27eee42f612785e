// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Cursor over the lexer's token vector.
//!
//! Comments are invisible at this level: every accessor skips them. The
//! cursor never moves past the final `Eof` token, so callers can keep asking
//! for tokens after the input is exhausted.

use gar_ast::token::{Token, TokenKind};
use tracing::trace;

use crate::recovery::TokenSet;

pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
    /// End offset of the last consumed token.
    prev_end: usize,
}

impl TokenStream {
    /// Wrap a token vector. A missing trailing `Eof` is supplied.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map_or(true, |t| t.kind != TokenKind::Eof) {
            let end = tokens.last().map_or(0, |t| t.span.end);
            tokens.push(Token::eof(end));
        }
        Self { tokens, pos: 0, prev_end: 0 }
    }

    /// Index of the next non-comment token at or after `pos`.
    fn next_index(&self) -> usize {
        let mut i = self.pos;
        while self.tokens[i].kind == TokenKind::Comment {
            i += 1;
        }
        i
    }

    /// The next non-comment token, without consuming it.
    pub fn peek(&self) -> &Token {
        &self.tokens[self.next_index()]
    }

    pub fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    pub fn at_end(&self) -> bool {
        self.peek_kind() == TokenKind::Eof
    }

    /// Consume and return the next non-comment token. At the end of input
    /// this keeps returning the `Eof` token.
    pub fn eat(&mut self) -> Token {
        let i = self.next_index();
        let tok = self.tokens[i].clone();
        if tok.kind != TokenKind::Eof {
            self.pos = i + 1;
            self.prev_end = tok.span.end;
        }
        tok
    }

    /// Consume a run of `kind` tokens.
    pub fn eat_all(&mut self, kind: TokenKind) {
        while kind != TokenKind::Eof && self.peek_kind() == kind {
            self.eat();
        }
    }

    /// Whether the next token is one of `kinds`.
    pub fn matches(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.peek_kind())
    }

    /// Skip tokens until the next one is in `stop` or the input ends.
    ///
    /// Returns the last token consumed, or the next token when nothing had
    /// to be skipped.
    pub fn advance(&mut self, stop: TokenSet) -> Token {
        let mut last = None;
        while !self.at_end() && !stop.contains(self.peek_kind()) {
            last = Some(self.eat());
        }
        if let Some(tok) = &last {
            trace!(to = tok.pos(), "skipped tokens");
        }
        last.unwrap_or_else(|| self.peek().clone())
    }

    /// End offset of the last consumed token, or 0 before the first.
    pub fn prev_end(&self) -> usize {
        self.prev_end
    }
}
