// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Expression parsing by precedence climbing.
//!
//! ```text
//! expression  := match
//! match       := equality ( ( "=" | ":=" ) equality )?
//! equality    := comparison ( ( "==" | "!=" ) comparison )*
//! comparison  := term ( ( ">" | ">=" | "<" | "<=" ) term )*
//! term        := factor ( ( "+" | "-" ) factor )*
//! factor      := unary ( ( "*" | "/" ) unary )*
//! unary       := ( "-" | "+" ) unary | call
//! call        := primary ( "(" arguments? ")" | "." IDENTIFIER )*
//! arguments   := expression ( "," expression )*
//! primary     := INTEGER | FLOAT | STRING | ATOM | IDENTIFIER | "(" expression ")"
//! ```

use gar_ast::expr::{BinOp, Expr, ExprKind, Ident, UnaryOp};
use gar_ast::token::TokenKind;
use gar_ast::Span;

use crate::error::PResult;
use crate::parser::Parser;
use crate::recovery::EXPR_END;

/// Most arguments a call may carry.
pub const MAX_ARGS: usize = 255;

const EQUALITY: &[(TokenKind, BinOp)] = &[(TokenKind::EqualEqual, BinOp::Eq), (TokenKind::BangEqual, BinOp::Ne)];

const COMPARISON: &[(TokenKind, BinOp)] = &[
    (TokenKind::Greater, BinOp::Gt),
    (TokenKind::GreaterEqual, BinOp::Ge),
    (TokenKind::Less, BinOp::Lt),
    (TokenKind::LessEqual, BinOp::Le),
];

const TERM: &[(TokenKind, BinOp)] = &[(TokenKind::Plus, BinOp::Add), (TokenKind::Minus, BinOp::Sub)];

const FACTOR: &[(TokenKind, BinOp)] = &[(TokenKind::Star, BinOp::Mul), (TokenKind::Slash, BinOp::Div)];

impl Parser {
    pub(crate) fn parse_expr(&mut self) -> PResult<Expr> {
        self.parse_match()
    }

    /// `=` and `:=`. Rebinding is right-associative; a match-bind takes a
    /// single equality on its right.
    fn parse_match(&mut self) -> PResult<Expr> {
        let left = self.parse_equality()?;
        match self.tokens.peek_kind() {
            TokenKind::Equal => {
                let eq = self.tokens.eat();
                let value = self.parse_match()?;
                let span = left.span.to(value.span);
                match left.kind {
                    ExprKind::Ident(name) => Ok(Expr::new(
                        ExprKind::Assign {
                            target: Ident::new(name, left.span),
                            eq_pos: eq.pos(),
                            value: Box::new(value),
                        },
                        span,
                    )),
                    _ => {
                        self.error(left.pos(), "left hand side of assignment must be an identifier")?;
                        Ok(Expr::bad(span))
                    }
                }
            }
            TokenKind::ColonEqual => {
                let eq = self.tokens.eat();
                let value = self.parse_equality()?;
                let span = left.span.to(value.span);
                Ok(Expr::new(
                    ExprKind::MatchAssign { pattern: Box::new(left), eq_pos: eq.pos(), value: Box::new(value) },
                    span,
                ))
            }
            _ => Ok(left),
        }
    }

    fn parse_equality(&mut self) -> PResult<Expr> {
        self.parse_binary(EQUALITY, Self::parse_comparison)
    }

    fn parse_comparison(&mut self) -> PResult<Expr> {
        self.parse_binary(COMPARISON, Self::parse_term)
    }

    fn parse_term(&mut self) -> PResult<Expr> {
        self.parse_binary(TERM, Self::parse_factor)
    }

    fn parse_factor(&mut self) -> PResult<Expr> {
        self.parse_binary(FACTOR, Self::parse_unary)
    }

    /// One left-associative precedence level.
    fn parse_binary(
        &mut self,
        ops: &[(TokenKind, BinOp)],
        operand: fn(&mut Self) -> PResult<Expr>,
    ) -> PResult<Expr> {
        let mut left = operand(self)?;
        loop {
            let next = self.tokens.peek_kind();
            let Some(&(_, op)) = ops.iter().find(|(kind, _)| *kind == next) else {
                return Ok(left);
            };
            let op_tok = self.tokens.eat();
            let right = operand(self)?;
            let span = left.span.to(right.span);
            left = Expr::new(
                ExprKind::Binary { op, op_span: op_tok.span, left: Box::new(left), right: Box::new(right) },
                span,
            );
        }
    }

    fn parse_unary(&mut self) -> PResult<Expr> {
        let op = match self.tokens.peek_kind() {
            TokenKind::Minus => UnaryOp::Neg,
            TokenKind::Plus => UnaryOp::Plus,
            _ => return self.parse_call(),
        };
        let op_tok = self.tokens.eat();
        let operand = self.parse_unary()?;
        let span = op_tok.span.to(operand.span);
        Ok(Expr::new(ExprKind::Unary { op, operand: Box::new(operand) }, span))
    }

    /// A primary followed by any chain of calls and `.name` accesses.
    fn parse_call(&mut self) -> PResult<Expr> {
        let mut expr = self.parse_primary()?;
        loop {
            match self.tokens.peek_kind() {
                TokenKind::LParen => {
                    let lparen = self.tokens.eat();
                    let args = self.parse_args()?;
                    let rparen = self.eat_only(TokenKind::RParen, "expected ')' after call arguments")?;
                    let span = Span::new(expr.span.start, rparen.span.end.max(lparen.span.end));
                    expr = Expr::new(
                        ExprKind::Call { callee: Box::new(expr), args, lparen: lparen.pos(), rparen: rparen.pos() },
                        span,
                    );
                }
                TokenKind::Period => {
                    self.tokens.eat();
                    let name = self.eat_only(TokenKind::Identifier, "expected identifier after '.'")?;
                    if !name.is(TokenKind::Identifier) {
                        self.tokens.advance(EXPR_END);
                        return Ok(Expr::bad(name.span));
                    }
                    let span = expr.span.to(name.span);
                    expr = Expr::new(
                        ExprKind::Dot { target: Box::new(expr), attr: Ident::new(name.lit, name.span) },
                        span,
                    );
                }
                _ => return Ok(expr),
            }
        }
    }

    /// Call arguments, not including the closing `)`.
    ///
    /// Past `MAX_ARGS` the remaining arguments are still parsed so the token
    /// stream stays aligned, but they are not kept.
    fn parse_args(&mut self) -> PResult<Vec<Expr>> {
        let mut args = Vec::new();
        if self.tokens.matches(&[TokenKind::RParen]) {
            return Ok(args);
        }

        args.push(self.parse_expr()?);
        let mut capped = false;
        while self.tokens.matches(&[TokenKind::Comma]) {
            let comma = self.tokens.eat();
            if !capped && args.len() >= MAX_ARGS {
                capped = true;
                self.error(comma.pos(), format!("cannot have more than {} arguments", MAX_ARGS))?;
            }
            let arg = self.parse_expr()?;
            if !capped {
                args.push(arg);
            }
        }
        Ok(args)
    }

    fn parse_primary(&mut self) -> PResult<Expr> {
        let tok = self.tokens.eat();
        let kind = match tok.kind {
            TokenKind::Integer => {
                let value = match tok.lit.parse::<i64>() {
                    Ok(v) => v,
                    Err(e) => {
                        self.error(tok.pos(), format!("parse int: {}", e))?;
                        0
                    }
                };
                ExprKind::Int { lit: tok.lit, value }
            }
            TokenKind::Float => {
                let value = match tok.lit.parse::<f64>() {
                    Ok(v) => v,
                    Err(e) => {
                        self.error(tok.pos(), format!("parse float: {}", e))?;
                        0.0
                    }
                };
                ExprKind::Float { lit: tok.lit, value }
            }
            TokenKind::Identifier => ExprKind::Ident(tok.lit),
            TokenKind::String => ExprKind::String(tok.lit),
            TokenKind::Atom => ExprKind::Atom(tok.lit),
            TokenKind::LParen => {
                let inner = self.parse_expr()?;
                let rparen = self.eat_only(TokenKind::RParen, "unclosed '(' around expression")?;
                let span = Span::new(tok.pos(), rparen.span.end.max(inner.span.end));
                return Ok(Expr::new(ExprKind::Paren(Box::new(inner)), span));
            }
            _ => {
                self.error(tok.pos(), format!("expected expression, got {}", tok.kind))?;
                self.tokens.advance(EXPR_END);
                let end = self.tokens.prev_end().max(tok.span.end);
                return Ok(Expr::bad(Span::new(tok.pos(), end)));
            }
        };
        Ok(Expr::new(kind, tok.span))
    }
}
