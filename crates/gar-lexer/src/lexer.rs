// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! The lexer implementation using logos.

use gar_ast::token::{Token, TokenKind};
use gar_ast::Span;
use logos::Logos;

/// Raw token type for logos - literal text is processed in a second pass.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\f]+")]
enum RawToken {
    // Newlines are significant: they may terminate a statement.
    #[token("\n")]
    Newline,

    // === Keywords ===
    #[token("module")]
    Module,
    #[token("import")]
    Import,
    #[token("func")]
    Func,
    #[token("return")]
    Return,
    #[token("type")]
    Type,
    #[token("tuple")]
    Tuple,

    // === Operators (logos picks the longest match) ===
    #[token(":=")]
    ColonEqual,
    #[token("==")]
    EqualEqual,
    #[token("!=")]
    BangEqual,
    #[token(">=")]
    GreaterEqual,
    #[token("<=")]
    LessEqual,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("=")]
    Equal,
    #[token(">")]
    Greater,
    #[token("<")]
    Less,
    #[token(".")]
    Period,

    // === Delimiters ===
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,

    // === Comments (kept; the parser skips them) ===
    #[regex(r"//[^\n]*")]
    Comment,

    // === Literals ===
    #[regex(r"[0-9][0-9]*\.[0-9]+([eE][+-]?[0-9]+)?")]
    Float,
    #[regex(r"[0-9]+")]
    Integer,
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    String,
    #[regex(r"'([^'\\\n]|\\.)*'")]
    Atom,

    // === Identifier (keywords win on equal length) ===
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// The lexer for Garlic source code.
///
/// Lexing never fails: characters that start no token become `Illegal`
/// tokens and are reported by the parser like any other unexpected token.
pub struct Lexer<'a> {
    source: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// Tokenize the entire source. The result always ends with exactly one
    /// `Eof` token positioned at the end of the text.
    ///
    /// A newline following a token that can end a statement is emitted as a
    /// `Semicolon` whose literal is `"\n"`; every other newline is skipped.
    pub fn tokenize(&self) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut logos_lexer = RawToken::lexer(self.source);
        // Kind of the last token that was not a comment
        let mut last = TokenKind::Eof;

        while let Some(result) = logos_lexer.next() {
            let range = logos_lexer.span();
            let span = Span::new(range.start, range.end);
            let slice = logos_lexer.slice();

            let token = match result {
                Ok(RawToken::Newline) => {
                    if !ends_statement(last) {
                        continue;
                    }
                    Token::new(TokenKind::Semicolon, span, "\n")
                }
                Ok(raw) => convert_token(raw, slice, span),
                Err(()) => Token::new(TokenKind::Illegal, span, slice),
            };
            if token.kind != TokenKind::Comment {
                last = token.kind;
            }
            tokens.push(token);
        }

        tokens.push(Token::eof(self.source.len()));
        tokens
    }
}

/// Whether a newline after a token of this kind terminates the statement.
fn ends_statement(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Identifier
            | TokenKind::Integer
            | TokenKind::Float
            | TokenKind::String
            | TokenKind::Atom
            | TokenKind::Return
            | TokenKind::RParen
            | TokenKind::RCurlyBracket
            | TokenKind::RSquareBracket
    )
}

/// Convert a raw logos token to a `Token`, unquoting string and atom text.
fn convert_token(raw: RawToken, slice: &str, span: Span) -> Token {
    let kind = match raw {
        RawToken::Newline => TokenKind::Semicolon,

        // Keywords
        RawToken::Module => TokenKind::Module,
        RawToken::Import => TokenKind::Import,
        RawToken::Func => TokenKind::Func,
        RawToken::Return => TokenKind::Return,
        RawToken::Type => TokenKind::TypeKeyword,
        RawToken::Tuple => TokenKind::Tuple,

        // Operators
        RawToken::ColonEqual => TokenKind::ColonEqual,
        RawToken::EqualEqual => TokenKind::EqualEqual,
        RawToken::BangEqual => TokenKind::BangEqual,
        RawToken::GreaterEqual => TokenKind::GreaterEqual,
        RawToken::LessEqual => TokenKind::LessEqual,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Equal => TokenKind::Equal,
        RawToken::Greater => TokenKind::Greater,
        RawToken::Less => TokenKind::Less,
        RawToken::Period => TokenKind::Period,

        // Delimiters
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LCurlyBracket,
        RawToken::RBrace => TokenKind::RCurlyBracket,
        RawToken::LBracket => TokenKind::LSquareBracket,
        RawToken::RBracket => TokenKind::RSquareBracket,

        RawToken::Comment => TokenKind::Comment,

        // Numbers keep their text; the parser does the conversion
        RawToken::Float => TokenKind::Float,
        RawToken::Integer => TokenKind::Integer,
        RawToken::Ident => TokenKind::Identifier,

        RawToken::String | RawToken::Atom => {
            let kind = if raw == RawToken::String { TokenKind::String } else { TokenKind::Atom };
            let inner = &slice[1..slice.len() - 1]; // Remove quotes
            return match unescape(inner) {
                Some(text) => Token::new(kind, span, text),
                None => Token::new(TokenKind::Illegal, span, slice),
            };
        }
    };
    Token::new(kind, span, slice)
}

/// Process escape sequences in quoted text. `None` on an unknown escape.
fn unescape(s: &str) -> Option<String> {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        let escaped = match chars.next()? {
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            '\\' => '\\',
            '0' => '\0',
            '\'' => '\'',
            '"' => '"',
            _ => return None,
        };
        result.push(escaped);
    }

    Some(result)
}
