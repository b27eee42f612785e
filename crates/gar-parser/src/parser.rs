// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Declaration and statement parsing, with error recovery.

use gar_ast::decl::{Decl, DeclKind, FuncDecl, ImportDecl, Module, TypeDecl, TypeExpr};
use gar_ast::expr::Ident;
use gar_ast::stmt::{Stmt, StmtKind};
use gar_ast::token::{Token, TokenKind};
use gar_ast::{SourceFile, Span};
use tracing::{debug, debug_span, trace};

use crate::error::{Bailout, ErrorList, Errors, PResult};
use crate::recovery::{DECL_START, EXPR_END, PARAM_START, STMT_START};
use crate::stream::TokenStream;

/// The parser for Garlic source code.
///
/// One parser handles one parse unit and is consumed by the entry point.
pub struct Parser {
    pub(crate) tokens: TokenStream,
    errors: Errors,
    /// Offset where the declaration being parsed began
    decl_start: usize,
}

impl Parser {
    pub fn new(file: SourceFile, tokens: Vec<Token>) -> Self {
        Self { tokens: TokenStream::new(tokens), errors: Errors::new(file), decl_start: 0 }
    }

    /// Parse a whole module: the `module` header, then declarations until
    /// the end of input.
    pub fn parse_module(mut self) -> ParseResult<Module> {
        let mut module = Module::new(self.errors.file().clone());
        let _span = debug_span!("parse_module", unit = module.file.name()).entered();

        if let Err(Bailout) = self.module_body(&mut module) {
            debug!(errors = self.errors.len(), "too many errors, abandoning module");
            module.decls.push(self.interrupted());
        }
        self.finish(module)
    }

    /// Parse a single function declaration.
    pub fn parse_function(mut self) -> ParseResult<Decl> {
        let _span = debug_span!("parse_function", unit = self.errors.file().name()).entered();

        self.decl_start = self.tokens.peek().pos();
        let decl = match self.parse_func_decl() {
            Ok(decl) => decl,
            Err(Bailout) => {
                debug!(errors = self.errors.len(), "too many errors, abandoning function");
                self.interrupted()
            }
        };
        if !self.tokens.at_end() {
            trace!(at = self.tokens.peek().pos(), "ignoring input after function");
        }
        self.finish(decl)
    }

    fn finish<T>(self, node: T) -> ParseResult<T> {
        ParseResult { node, errors: self.errors.into_list() }
    }

    /// Placeholder for the declaration a bailout cut short.
    fn interrupted(&self) -> Decl {
        Decl::bad(Span::new(self.decl_start, self.tokens.prev_end().max(self.decl_start)))
    }

    // =========================================================================
    // Error reporting
    // =========================================================================

    pub(crate) fn error(&mut self, offset: usize, message: impl Into<String>) -> PResult<()> {
        self.errors.record(offset, message)
    }

    /// Consume the next token, reporting `<message>, got <token>` when it is
    /// not of `kind`. The token is returned either way.
    pub(crate) fn eat_only(&mut self, kind: TokenKind, message: &str) -> PResult<Token> {
        let tok = self.tokens.eat();
        if tok.kind != kind {
            self.error(tok.pos(), format!("{}, got {}", message, tok))?;
        }
        Ok(tok)
    }

    /// Skip to the next declaration and cover everything from `start` with
    /// a Bad declaration.
    fn bad_decl_from(&mut self, start: usize) -> Decl {
        self.tokens.advance(DECL_START);
        Decl::bad(Span::new(start, self.tokens.prev_end().max(start)))
    }

    // =========================================================================
    // Module structure
    // =========================================================================

    fn module_body(&mut self, module: &mut Module) -> PResult<()> {
        self.decl_start = self.tokens.peek().pos();
        module.name = self.parse_header(&mut module.decls)?;
        let Some(name) = &module.name else {
            return Ok(());
        };
        trace!(module = %name.name, "parsed header");

        loop {
            self.tokens.eat_all(TokenKind::Semicolon);
            if self.tokens.at_end() {
                return Ok(());
            }
            self.decl_start = self.tokens.peek().pos();
            self.parse_decl(&mut module.decls)?;
        }
    }

    /// `module <name>`, then an optional run of `;`. Returns `None` when the
    /// header is unusable, after skipping to the next declaration.
    fn parse_header(&mut self, decls: &mut Vec<Decl>) -> PResult<Option<Ident>> {
        let module_tok = self.eat_only(TokenKind::Module, "expected 'module' keyword at start of file")?;
        if !module_tok.is(TokenKind::Module) {
            self.tokens.advance(DECL_START);
            return Ok(None);
        }
        let name = self.eat_only(TokenKind::Identifier, "expected module name after 'module' keyword")?;
        if !name.is(TokenKind::Identifier) {
            self.tokens.advance(DECL_START);
            return Ok(None);
        }
        self.end_of_decl("expected ';' after module name", decls)?;
        Ok(Some(Ident::new(name.lit, name.span)))
    }

    /// Accept `;`, the end of input, or nothing but report and drop any other
    /// token as a Bad declaration.
    fn end_of_decl(&mut self, message: &str, decls: &mut Vec<Decl>) -> PResult<()> {
        if !self.tokens.matches(&[TokenKind::Semicolon, TokenKind::Eof]) {
            let tok = self.eat_only(TokenKind::Semicolon, message)?;
            decls.push(Decl::bad(tok.span));
        }
        self.tokens.eat_all(TokenKind::Semicolon);
        Ok(())
    }

    fn parse_decl(&mut self, decls: &mut Vec<Decl>) -> PResult<()> {
        let decl = match self.tokens.peek_kind() {
            TokenKind::Func => self.parse_func_decl()?,
            TokenKind::TypeKeyword => self.parse_type_decl()?,
            TokenKind::Import => {
                let decl = self.parse_import()?;
                let ok = matches!(decl.kind, DeclKind::Import(_));
                decls.push(decl);
                if ok {
                    self.end_of_decl("expected ';' after import declaration", decls)?;
                }
                return Ok(());
            }
            _ => {
                let tok = self.tokens.eat();
                self.error(tok.pos(), format!("expected func, got {}", tok))?;
                self.bad_decl_from(tok.pos())
            }
        };
        trace!(start = decl.span.start, end = decl.span.end, bad = matches!(decl.kind, DeclKind::Bad), "declaration");
        decls.push(decl);
        Ok(())
    }

    /// `import [alias] "path"`
    fn parse_import(&mut self) -> PResult<Decl> {
        let import_tok = self.eat_only(TokenKind::Import, "expected 'import' keyword at start of import declaration")?;
        if !import_tok.is(TokenKind::Import) {
            return Ok(self.bad_decl_from(import_tok.pos()));
        }

        let alias = if self.tokens.matches(&[TokenKind::Identifier]) {
            let tok = self.tokens.eat();
            Some(Ident::new(tok.lit, tok.span))
        } else {
            None
        };

        let path = self.eat_only(TokenKind::String, "expected module path after 'import' keyword")?;
        if !path.is(TokenKind::String) {
            return Ok(self.bad_decl_from(import_tok.pos()));
        }

        let span = Span::new(import_tok.pos(), path.span.end);
        Ok(Decl::new(DeclKind::Import(ImportDecl { alias, path: path.lit, path_span: path.span }), span))
    }

    // =========================================================================
    // Types
    // =========================================================================

    /// `type Name <type>`
    fn parse_type_decl(&mut self) -> PResult<Decl> {
        let type_tok = self.eat_only(TokenKind::TypeKeyword, "expected 'type' keyword at start of type declaration")?;
        if !type_tok.is(TokenKind::TypeKeyword) {
            return Ok(self.bad_decl_from(type_tok.pos()));
        }
        let name = self.eat_only(TokenKind::Identifier, "expected type name after 'type' keyword")?;
        if !name.is(TokenKind::Identifier) {
            return Ok(self.bad_decl_from(type_tok.pos()));
        }

        let reported = self.errors.reported();
        let def_start = self.tokens.peek().pos();
        let mut definition = self.parse_type()?;
        if self.errors.reported() > reported && definition.bad_nodes() == 0 {
            // Punctuation errors inside the type leave no node of their own
            definition = TypeExpr::Bad(Span::new(def_start, self.tokens.prev_end().max(def_start)));
        }

        let span = Span::new(type_tok.pos(), self.tokens.prev_end());
        Ok(Decl::new(DeclKind::Type(TypeDecl { name: Ident::new(name.lit, name.span), definition }), span))
    }

    /// A type expression: `Name`, `module.Name` or `tuple[T, ...]`.
    fn parse_type(&mut self) -> PResult<TypeExpr> {
        let tok = self.tokens.eat();
        match tok.kind {
            TokenKind::Identifier => {
                let ident = Ident::new(tok.lit, tok.span);
                if !self.tokens.matches(&[TokenKind::Period]) {
                    return Ok(TypeExpr::Named(ident));
                }
                let dot = self.tokens.eat();
                let attr = self.eat_only(TokenKind::Identifier, "expected identifier after '.'")?;
                if !attr.is(TokenKind::Identifier) {
                    return Ok(TypeExpr::Bad(Span::new(dot.pos(), attr.span.end.max(dot.span.end))));
                }
                Ok(TypeExpr::External { module: ident, name: Ident::new(attr.lit, attr.span) })
            }
            TokenKind::Tuple => self.parse_tuple_type(tok),
            _ => {
                self.error(tok.pos(), format!("expected type, got {}", tok.kind))?;
                Ok(TypeExpr::Bad(tok.span))
            }
        }
    }

    fn parse_tuple_type(&mut self, tuple_tok: Token) -> PResult<TypeExpr> {
        self.eat_only(TokenKind::LSquareBracket, "expected '[' after 'tuple'")?;

        let mut elements = Vec::new();
        while !self.tokens.matches(&[TokenKind::RSquareBracket, TokenKind::Eof]) {
            elements.push(self.parse_type()?);
            if self.tokens.matches(&[TokenKind::RSquareBracket]) {
                break;
            }
            self.eat_only(TokenKind::Comma, "missing ',' in tuple type list")?;
        }

        let rbracket = self.eat_only(TokenKind::RSquareBracket, "expected ']' after tuple field list")?;
        let span = Span::new(tuple_tok.pos(), rbracket.span.end.max(tuple_tok.span.end));
        Ok(TypeExpr::Tuple { elements, span })
    }

    // =========================================================================
    // Functions
    // =========================================================================

    /// `func name(params) { body }`
    fn parse_func_decl(&mut self) -> PResult<Decl> {
        let reported = self.errors.reported();

        let func_tok = self.eat_only(TokenKind::Func, "expected 'func' keyword at start of function")?;
        if !func_tok.is(TokenKind::Func) {
            return Ok(self.bad_decl_from(func_tok.pos()));
        }
        let name = self.eat_only(TokenKind::Identifier, "expected function name after 'func' keyword")?;
        if !name.is(TokenKind::Identifier) {
            return Ok(self.bad_decl_from(func_tok.pos()));
        }

        self.eat_only(TokenKind::LParen, "expected '(' after function name")?;
        let params = self.parse_params()?;
        let lbrace = self.eat_only(TokenKind::LCurlyBracket, "expected '{' after function parameters")?;
        let mut body = self.parse_body()?;
        let rbrace = self.eat_only(TokenKind::RCurlyBracket, "expected '}' to end function body")?;

        let end = self.tokens.prev_end().max(func_tok.span.end);
        if self.errors.reported() > reported && body.iter().all(|s| s.bad_nodes() == 0) {
            // Damaged frame: mark from the last problem onwards
            let at = self.errors.last_offset().min(end);
            body.push(Stmt::new(StmtKind::Bad, Span::new(at, end)));
        }

        let func = FuncDecl {
            name: Ident::new(name.lit, name.span),
            params,
            body,
            lbrace: lbrace.pos(),
            rbrace: rbrace.pos(),
        };
        Ok(Decl::new(DeclKind::Func(func), Span::new(func_tok.pos(), end)))
    }

    /// Parameter names up to and including the closing `)`.
    fn parse_params(&mut self) -> PResult<Vec<Ident>> {
        let mut params = Vec::new();
        let mut i = 0;
        while !self.tokens.at_end() {
            if self.tokens.matches(&[TokenKind::RParen]) {
                self.tokens.eat();
                break;
            }
            if i > 0 {
                let comma = self.eat_only(TokenKind::Comma, "expected ',' between parameters")?;
                if !comma.is(TokenKind::Comma) {
                    self.tokens.advance(PARAM_START);
                }
            }
            let name = self.eat_only(TokenKind::Identifier, "expected parameter name")?;
            if name.is(TokenKind::Identifier) {
                params.push(Ident::new(name.lit, name.span));
            }
            i += 1;
        }
        Ok(params)
    }

    /// Statements up to, not including, the closing `}`.
    fn parse_body(&mut self) -> PResult<Vec<Stmt>> {
        let mut body = Vec::new();
        while !self.tokens.at_end() {
            // empty statements
            self.tokens.eat_all(TokenKind::Semicolon);
            if self.tokens.matches(&[TokenKind::RCurlyBracket, TokenKind::Eof]) {
                break;
            }

            body.push(self.parse_statement()?);

            if !self.tokens.matches(&[TokenKind::Semicolon, TokenKind::RCurlyBracket, TokenKind::Eof]) {
                let from = self.tokens.eat();
                self.error(from.pos(), "expected ';' at end of statement")?;
                // Clear the rest of the line before looking for a statement
                self.tokens.advance(EXPR_END);
                self.tokens.advance(STMT_START);
                let end = self.tokens.prev_end().max(from.span.end);
                body.push(Stmt::new(StmtKind::Bad, Span::new(from.pos(), end)));
            }
        }
        Ok(body)
    }

    fn parse_statement(&mut self) -> PResult<Stmt> {
        match self.tokens.peek_kind() {
            TokenKind::Return => {
                let ret = self.tokens.eat();
                let value = self.parse_expr()?;
                let span = Span::new(ret.pos(), value.span.end.max(ret.span.end));
                Ok(Stmt::new(StmtKind::Return(value), span))
            }
            _ => {
                let expr = self.parse_expr()?;
                let span = expr.span;
                Ok(Stmt::new(StmtKind::Expr(expr), span))
            }
        }
    }
}

/// The outcome of parsing one unit: always a node, plus the errors found.
///
/// When `errors` is empty the node holds no Bad nodes. Otherwise it holds at
/// least one, unless the module header itself could not be read.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult<T> {
    pub node: T,
    pub errors: ErrorList,
}

impl<T> ParseResult<T> {
    /// Returns true if parsing completed without errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// The errors, or `None` when there were none.
    pub fn errors(&self) -> Option<&ErrorList> {
        if self.errors.is_empty() {
            None
        } else {
            Some(&self.errors)
        }
    }

    pub fn into_result(self) -> Result<T, ErrorList> {
        if self.errors.is_empty() {
            Ok(self.node)
        } else {
            Err(self.errors)
        }
    }
}
