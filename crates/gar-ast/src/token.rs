// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Token definitions for the lexer.

use std::fmt;

use crate::Span;

/// A token produced by the lexer.
///
/// `lit` holds the literal text: the identifier or number as written, string
/// and atom contents without their quotes, and the operator text otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub lit: String,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span, lit: impl Into<String>) -> Self {
        Self { kind, span, lit: lit.into() }
    }

    /// End-of-input marker at `pos`.
    pub fn eof(pos: usize) -> Self {
        Self { kind: TokenKind::Eof, span: Span::point(pos), lit: String::new() }
    }

    /// Source offset of the first byte of the token.
    pub fn pos(&self) -> usize {
        self.span.start
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "EOF"),
            kind => write!(f, "{:?} ({})", self.lit, kind),
        }
    }
}

/// The kind of token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // Special
    Eof,
    Illegal,
    Comment,

    // Literals
    Identifier,
    Integer,
    Float,
    String,
    Atom,

    // Keywords
    Module,
    Import,
    Func,
    Return,
    TypeKeyword,
    Tuple,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Equal,
    ColonEqual,
    EqualEqual,
    BangEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
    Period,

    // Delimiters
    Comma,
    Semicolon,
    LParen,
    RParen,
    LCurlyBracket,
    RCurlyBracket,
    LSquareBracket,
    RSquareBracket,
}

impl TokenKind {
    /// Bit index of this kind, for token sets.
    pub const fn index(self) -> u32 {
        self as u8 as u32
    }

    /// The variant name, as shown in diagnostics (`Identifier`, `RParen`, ...).
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Illegal => "Illegal",
            TokenKind::Comment => "Comment",
            TokenKind::Identifier => "Identifier",
            TokenKind::Integer => "Integer",
            TokenKind::Float => "Float",
            TokenKind::String => "String",
            TokenKind::Atom => "Atom",
            TokenKind::Module => "Module",
            TokenKind::Import => "Import",
            TokenKind::Func => "Func",
            TokenKind::Return => "Return",
            TokenKind::TypeKeyword => "TypeKeyword",
            TokenKind::Tuple => "Tuple",
            TokenKind::Plus => "Plus",
            TokenKind::Minus => "Minus",
            TokenKind::Star => "Star",
            TokenKind::Slash => "Slash",
            TokenKind::Equal => "Equal",
            TokenKind::ColonEqual => "ColonEqual",
            TokenKind::EqualEqual => "EqualEqual",
            TokenKind::BangEqual => "BangEqual",
            TokenKind::Greater => "Greater",
            TokenKind::GreaterEqual => "GreaterEqual",
            TokenKind::Less => "Less",
            TokenKind::LessEqual => "LessEqual",
            TokenKind::Period => "Period",
            TokenKind::Comma => "Comma",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::LParen => "LParen",
            TokenKind::RParen => "RParen",
            TokenKind::LCurlyBracket => "LCurlyBracket",
            TokenKind::RCurlyBracket => "RCurlyBracket",
            TokenKind::LSquareBracket => "LSquareBracket",
            TokenKind::RSquareBracket => "RSquareBracket",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
