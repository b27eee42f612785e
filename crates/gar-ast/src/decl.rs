// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Declaration AST nodes.

use crate::expr::Ident;
use crate::stmt::Stmt;
use crate::{SourceFile, Span};

/// A parsed source unit.
///
/// `name` is `None` only when the `module <name>` header could not be read;
/// in that case nothing after the header is parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    pub file: SourceFile,
    pub name: Option<Ident>,
    pub decls: Vec<Decl>,
}

impl Module {
    pub fn new(file: SourceFile) -> Self {
        Self { file, name: None, decls: Vec::new() }
    }

    /// The well-formed imports, in source order. Malformed imports are kept
    /// in `decls` as `Bad` and never show up here.
    pub fn imports(&self) -> impl Iterator<Item = &ImportDecl> {
        self.decls.iter().filter_map(|d| match &d.kind {
            DeclKind::Import(imp) => Some(imp),
            _ => None,
        })
    }

    pub fn functions(&self) -> impl Iterator<Item = &FuncDecl> {
        self.decls.iter().filter_map(|d| match &d.kind {
            DeclKind::Func(f) => Some(f),
            _ => None,
        })
    }

    /// Number of `Bad` nodes anywhere in the tree.
    pub fn bad_nodes(&self) -> usize {
        self.decls.iter().map(Decl::bad_nodes).sum()
    }
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Decl {
    pub kind: DeclKind,
    pub span: Span,
}

/// The kind of declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum DeclKind {
    /// Import declaration
    Import(ImportDecl),
    /// Type declaration
    Type(TypeDecl),
    /// Function declaration
    Func(FuncDecl),
    /// Placeholder for a declaration that failed to parse.
    Bad,
}

impl Decl {
    pub fn new(kind: DeclKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn bad(span: Span) -> Self {
        Self { kind: DeclKind::Bad, span }
    }

    pub fn as_func(&self) -> Option<&FuncDecl> {
        match &self.kind {
            DeclKind::Func(f) => Some(f),
            _ => None,
        }
    }

    pub fn bad_nodes(&self) -> usize {
        match &self.kind {
            DeclKind::Import(_) => 0,
            DeclKind::Type(t) => t.definition.bad_nodes(),
            DeclKind::Func(f) => f.body.iter().map(Stmt::bad_nodes).sum(),
            DeclKind::Bad => 1,
        }
    }
}

/// `import [alias] "path"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDecl {
    pub alias: Option<Ident>,
    pub path: String,
    pub path_span: Span,
}

/// `type Name <type>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    pub name: Ident,
    pub definition: TypeExpr,
}

/// A type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// A plain or built-in type name: `int`, `Foo`
    Named(Ident),
    /// A type from another module: `module.Type`
    External { module: Ident, name: Ident },
    /// `tuple[T1, T2, ...]`; the span runs from `tuple` to `]`.
    Tuple { elements: Vec<TypeExpr>, span: Span },
    /// Placeholder for a type that failed to parse.
    Bad(Span),
}

impl TypeExpr {
    pub fn bad_nodes(&self) -> usize {
        match self {
            TypeExpr::Named(_) | TypeExpr::External { .. } => 0,
            TypeExpr::Tuple { elements, .. } => elements.iter().map(TypeExpr::bad_nodes).sum(),
            TypeExpr::Bad(_) => 1,
        }
    }
}

/// A function declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub name: Ident,
    pub params: Vec<Ident>,
    pub body: Vec<Stmt>,
    /// Offset of the opening `{` (or of whatever token stood there).
    pub lbrace: usize,
    /// Offset of the closing `}` (or of whatever token stood there).
    pub rbrace: usize,
}

impl FuncDecl {
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Whether the function is exported from its module.
    ///
    /// Names starting with `_` are private to the module; everything else,
    /// including the generated `module_info` functions, is exported.
    pub fn is_public(&self) -> bool {
        !self.name.name.starts_with('_')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn func(name: &str) -> FuncDecl {
        FuncDecl {
            name: Ident::new(name, Span::new(0, name.len())),
            params: Vec::new(),
            body: Vec::new(),
            lbrace: 0,
            rbrace: 0,
        }
    }

    #[test]
    fn underscore_names_are_private() {
        assert!(func("module_info").is_public());
        assert!(func("Main").is_public());
        assert!(!func("_helper").is_public());
    }

    #[test]
    fn imports_skip_bad_decls() {
        let mut module = Module::new(SourceFile::new("m", ""));
        module.decls.push(Decl::bad(Span::new(0, 1)));
        module.decls.push(Decl::new(
            DeclKind::Import(ImportDecl { alias: None, path: "a/b".into(), path_span: Span::new(2, 7) }),
            Span::new(0, 7),
        ));
        let paths: Vec<_> = module.imports().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, ["a/b"]);
        assert_eq!(module.bad_nodes(), 1);
    }
}
