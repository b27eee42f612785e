//! Parser for the Garlic language.
//!
//! Transforms a token stream into an abstract syntax tree. Parsing never
//! stops at the first problem: malformed constructs become Bad nodes and the
//! errors are returned next to the tree.

mod error;
mod expr;
mod parser;
mod recovery;
mod stream;

use gar_ast::decl::{Decl, Module};
use gar_ast::SourceFile;
use gar_lexer::Lexer;

pub use error::{Bailout, ErrorList, ParseError, MAX_ERRORS};
pub use expr::MAX_ARGS;
pub use parser::{ParseResult, Parser};

/// Parse a complete source unit. `unit_name` is used in error positions.
pub fn parse_module(unit_name: &str, src: &str) -> ParseResult<Module> {
    let tokens = Lexer::new(src).tokenize();
    Parser::new(SourceFile::new(unit_name, src), tokens).parse_module()
}

/// Parse a source fragment holding one function declaration.
pub fn parse_function(src: &str) -> ParseResult<Decl> {
    let tokens = Lexer::new(src).tokenize();
    Parser::new(SourceFile::new("", src), tokens).parse_function()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gar_ast::decl::{DeclKind, FuncDecl, TypeExpr};
    use gar_ast::expr::{ExprKind, UnaryOp};
    use gar_ast::stmt::StmtKind;
    use pretty_assertions::assert_eq;

    fn func(src: &str) -> FuncDecl {
        let result = parse_function(src);
        assert!(result.is_ok(), "Parse errors: {}", result.errors);
        match result.node.kind {
            DeclKind::Func(f) => f,
            other => panic!("Expected function, got {:?}", other),
        }
    }

    fn module(src: &str) -> Module {
        let result = parse_module("<test>", src);
        assert!(result.is_ok(), "Parse errors: {}", result.errors);
        result.node
    }

    #[test]
    fn parse_empty_function() {
        let f = func("func foo() {}");
        assert_eq!(f.name.name, "foo");
        assert!(f.params.is_empty());
        assert!(f.body.is_empty());
        assert_eq!((f.lbrace, f.rbrace), (11, 12));
    }

    #[test]
    fn parse_empty_statements() {
        let f = func("func empty() { ; ; ; ; ; ; ; ; ; }");
        assert!(f.body.is_empty());
    }

    #[test]
    fn parse_return_negation() {
        let f = func("func ret() { return -b }");
        assert_eq!(f.body.len(), 1);
        let StmtKind::Return(ref e) = f.body[0].kind else {
            panic!("Expected return statement");
        };
        let ExprKind::Unary { op, ref operand } = e.kind else {
            panic!("Expected unary expression");
        };
        assert_eq!(op, UnaryOp::Neg);
        assert_eq!(operand.as_ident(), Some("b"));
    }

    #[test]
    fn parse_params() {
        let f = func("func params(a, b, c) {}");
        let names: Vec<_> = f.params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
        assert_eq!(f.arity(), 3);
    }

    #[test]
    fn parse_statements_on_lines() {
        let f = func("func expr() {\n    test = 'hello'\n    a = 3 + 5\n}");
        assert_eq!(f.body.len(), 2);
        assert!(f.body.iter().all(|s| matches!(s.kind, StmtKind::Expr(_))));
    }

    #[test]
    fn parse_assignments() {
        let f = func("func assign() { a = 1.23; b = (2+3)*4; c = 'atom' }");
        assert_eq!(f.body.len(), 3);
        let StmtKind::Expr(ref e) = f.body[1].kind else {
            panic!("Expected expression statement");
        };
        let ExprKind::Assign { ref target, ref value, .. } = e.kind else {
            panic!("Expected assignment");
        };
        assert_eq!(target.name, "b");
        assert!(matches!(value.kind, ExprKind::Binary { .. }));
    }

    #[test]
    fn parse_module_with_function() {
        let m = module("module test\nfunc expr() {\n  test = \"hello world\"\n  a = 3 + 5\n}");
        assert_eq!(m.name.as_ref().map(|n| n.name.as_str()), Some("test"));
        assert_eq!(m.functions().count(), 1);
    }

    #[test]
    fn parse_empty_module() {
        let m = module("module test");
        assert_eq!(m.name.map(|n| n.name), Some("test".to_string()));
        assert!(m.decls.is_empty());
    }

    #[test]
    fn parse_tuple_type() {
        let m = module("module test; type Foo tuple[int, int, int]");
        assert_eq!(m.decls.len(), 1);
        let DeclKind::Type(ref t) = m.decls[0].kind else {
            panic!("Expected type declaration");
        };
        assert_eq!(t.name.name, "Foo");
        let TypeExpr::Tuple { ref elements, .. } = t.definition else {
            panic!("Expected tuple type");
        };
        assert_eq!(elements.len(), 3);
    }

    #[test]
    fn parse_external_type() {
        let m = module("module test; type Id ids.Id");
        let DeclKind::Type(ref t) = m.decls[0].kind else {
            panic!("Expected type declaration");
        };
        assert!(matches!(t.definition, TypeExpr::External { ref module, ref name } if module.name == "ids" && name.name == "Id"));
    }

    #[test]
    fn parse_imports() {
        let m = module(r#"module test; import "a/b/c"; import b "belong""#);
        let imports: Vec<_> = m.imports().map(|i| (i.alias.as_ref().map(|a| a.name.as_str()), i.path.as_str())).collect();
        assert_eq!(imports, [(None, "a/b/c"), (Some("b"), "belong")]);
    }

    #[test]
    fn parse_module_with_comments() {
        let m = module("module test\n    // comment");
        assert!(m.decls.is_empty());
    }

    #[test]
    fn late_import_is_accepted() {
        let m = module("module test\nfunc f() {}\nimport \"late\"");
        assert_eq!(m.imports().count(), 1);
        assert_eq!(m.decls.len(), 2);
    }

    #[test]
    fn error_positions_use_unit_name() {
        let result = parse_module("demo.gar", "module abc\nfn foo() {}");
        assert_eq!(result.errors.to_string(), r#"demo.gar:2:1: expected func, got "fn" (Identifier)"#);
    }

    #[test]
    fn into_result_splits_outcome() {
        assert!(parse_function("func f() {}").into_result().is_ok());
        let err = parse_function("func f( {}").into_result().unwrap_err();
        assert!(!err.is_empty());
    }
}
