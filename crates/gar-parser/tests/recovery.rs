// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Error recovery: malformed input still yields a tree plus the errors.

use gar_ast::decl::{DeclKind, FuncDecl, Module};
use gar_ast::expr::ExprKind;
use gar_ast::stmt::StmtKind;
use gar_parser::{parse_function, parse_module, ParseResult, MAX_ARGS, MAX_ERRORS};
use pretty_assertions::assert_eq;

fn parse(src: &str) -> ParseResult<Module> {
    parse_module("<test>", src)
}

/// Rendered errors, one per line.
fn errors(src: &str) -> Vec<String> {
    let result = parse(src);
    assert!(!result.is_ok(), "expected errors for {:?}", src);
    result.errors.iter().map(|e| e.to_string()).collect()
}

fn only_function(module: &Module) -> &FuncDecl {
    let funcs: Vec<_> = module.functions().collect();
    assert_eq!(funcs.len(), 1, "expected one function in {:#?}", module);
    funcs[0]
}

const MALFORMED: &[&str] = &[
    "",
    "mo",
    "module",
    "module {}",
    "}}}}",
    "module test func",
    "module test 5\nfunc f() {}",
    "module test; import",
    "module test; import 5",
    "module test; import x y",
    "module test; type",
    "module test; type T",
    "module test; type T tuple[",
    "module test; type T tuple[int int]",
    "module test; type T a.",
    "module test; func",
    "module test; func (){}",
    "module test; func f",
    "module test; func f(a,) {}",
    "module test; func f(a b c) {}",
    "module test; func f() {",
    "module test; func f() {}}",
    "module test; func f() { return }",
    "module test; func f() { a b c d e f }",
    "module test; func f() { a.b.(1) }",
    "module test; func f() { f(1, 2 }",
    "module test; func f() { (1 + 2 }",
    "module test; func f() { 1 = 2 }",
    "module test; func f() { () := 10 }",
    "module test; func f() { # }",
    "module test; func f() { \"open }",
    "module test; func f() { return 99999999999999999999 }",
    "module test\nfn bad() { return 1 }\nfunc hello() { return 'abc' }",
];

const WELL_FORMED: &[&str] = &[
    "module test",
    "module test;;;;",
    "module test\n// comment",
    "module test; import \"a/b/c\"; import b \"belong\"",
    "module test; type Foo tuple[int, int, int]",
    "module test; type Empty tuple[]",
    "module test\nfunc f(a, b) {\n  c := a + b\n  return c\n}",
    "module test; func g() { return mod.fn(1).fn(2) }",
];

#[test]
fn clean_parse_has_no_bad_nodes() {
    for src in WELL_FORMED {
        let result = parse(src);
        assert!(result.is_ok(), "{:?}: {}", src, result.errors);
        assert_eq!(result.node.bad_nodes(), 0, "{:?}", src);
    }
}

#[test]
fn errors_leave_bad_nodes_or_no_header() {
    for src in MALFORMED {
        let result = parse(src);
        assert!(!result.is_ok(), "expected errors for {:?}", src);
        assert!(
            result.node.bad_nodes() > 0 || result.node.name.is_none(),
            "{:?} produced errors but a clean tree: {:#?}",
            src,
            result.node
        );
    }
}

#[test]
fn parsing_is_deterministic() {
    for src in MALFORMED.iter().chain(WELL_FORMED) {
        assert_eq!(parse(src), parse(src));
    }
}

#[test]
fn unterminated_body() {
    let errs = errors("module abc; func foo() {");
    let last = errs.last().unwrap();
    assert!(last.ends_with("expected '}' to end function body, got EOF"), "{}", last);
}

#[test]
fn unknown_keyword_at_top_level() {
    let errs = errors("module abc; fn foo() { return 1 }");
    assert!(errs[0].contains(r#"expected func, got "fn" (Identifier)"#), "{}", errs[0]);
}

#[test]
fn bad_function_is_skipped() {
    let result = parse("module test\n\n\nfn bad() { return 1 }\nfunc hello() { return 'abc' }");
    assert_eq!(
        result.errors.iter().map(|e| e.to_string()).collect::<Vec<_>>(),
        [r#"<test>:4:1: expected func, got "fn" (Identifier)"#]
    );
    assert!(matches!(result.node.decls[0].kind, DeclKind::Bad));
    assert_eq!(only_function(&result.node).name.name, "hello");
}

#[test]
fn missing_parameter_commas_keep_function() {
    let result = parse("module test; func bad(a b c) {}");
    assert_eq!(
        result.errors.iter().map(|e| e.to_string()).collect::<Vec<_>>(),
        [r#"<test>:1:25: expected ',' between parameters, got "b" (Identifier)"#]
    );
    let func = only_function(&result.node);
    assert_eq!(func.name.name, "bad");
    let params: Vec<_> = func.params.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(params, ["a", "c"]);
}

#[test]
fn bad_statement_spans_recovery() {
    let src = "module test\nfunc bad() {\n\tgo home {\n\n\t}\n\ta = 12\n}";
    let result = parse(src);
    assert_eq!(result.errors.messages(), ["expected ';' at end of statement"]);
    assert_eq!(result.errors.first().map(|e| (e.pos.line, e.pos.column)), Some((3, 5)));

    let func = only_function(&result.node);
    let kinds: Vec<_> = func.body.iter().map(|s| &s.kind).collect();
    assert_eq!(kinds.len(), 3);
    assert!(matches!(kinds[0], StmtKind::Expr(e) if e.as_ident() == Some("go")));
    assert!(matches!(kinds[1], StmtKind::Bad));
    assert!(matches!(kinds[2], StmtKind::Expr(e) if matches!(e.kind, ExprKind::Assign { .. })));
    // From `home` up to the start of `a = 12`
    assert_eq!(&src[func.body[1].span.start..func.body[1].span.end], "home {\n\n\t}\n");
}

#[test]
fn missing_function_name() {
    let result = parse("module test; func\n\n\nfunc test() {return 1}");
    assert_eq!(
        result.errors.iter().map(|e| e.to_string()).collect::<Vec<_>>(),
        [r#"<test>:4:1: expected function name after 'func' keyword, got "func" (Func)"#]
    );
    assert_eq!(result.node.decls.len(), 1);
    assert!(matches!(result.node.decls[0].kind, DeclKind::Bad));
}

#[test]
fn bad_identifier() {
    assert_eq!(
        errors("module test; func (){}"),
        [r#"<test>:1:19: expected function name after 'func' keyword, got "(" (LParen)"#]
    );
}

#[test]
fn bad_match_pattern() {
    assert_eq!(errors("module test; func bad() { () := 10 }"), ["<test>:1:28: expected expression, got RParen"]);
}

#[test]
fn missing_module_keyword() {
    let result = parse("mo");
    assert!(result.node.name.is_none());
    assert!(result.node.decls.is_empty());
    assert_eq!(
        result.errors.to_string(),
        r#"<test>:1:1: expected 'module' keyword at start of file, got "mo" (Identifier)"#
    );
}

#[test]
fn missing_module_name() {
    let result = parse("module {}");
    assert!(result.node.name.is_none());
    assert_eq!(
        result.errors.to_string(),
        r#"<test>:1:8: expected module name after 'module' keyword, got "{" (LCurlyBracket)"#
    );
}

#[test]
fn assignment_needs_identifier() {
    let result = parse("module test; func f() { 1 = 2 }");
    assert_eq!(result.errors.messages(), ["left hand side of assignment must be an identifier"]);
    assert_eq!(result.errors.first().map(|e| e.pos.column), Some(25));
}

#[test]
fn bad_integer_literal() {
    let errs = parse("module test; func f() { return 99999999999999999999 }").errors;
    assert!(errs.messages()[0].starts_with("parse int: "), "{}", errs);
}

#[test]
fn too_many_arguments() {
    let args: Vec<String> = (0..=MAX_ARGS).map(|i| i.to_string()).collect();
    let src = format!("module test; func f() {{ g({}) }}", args.join(", "));
    let result = parse(&src);

    assert_eq!(result.errors.messages(), ["cannot have more than 255 arguments"]);
    let func = only_function(&result.node);
    let StmtKind::Expr(ref call) = func.body[0].kind else {
        panic!("Expected expression statement");
    };
    let ExprKind::Call { ref args, .. } = call.kind else {
        panic!("Expected call");
    };
    assert_eq!(args.len(), 255);
}

#[test]
fn error_limit_stops_the_parse() {
    let src = format!("module test\nfunc f() {{\n{}}}", "a b\n".repeat(20));
    let result = parse(&src);

    assert_eq!(result.errors.len(), MAX_ERRORS + 1);
    let lines: Vec<u32> = result.errors.iter().map(|e| e.pos.line).collect();
    assert_eq!(lines, (3..=13).collect::<Vec<u32>>());
    assert!(result.errors.iter().all(|e| e.message == "expected ';' at end of statement"));

    // The interrupted function is replaced by a Bad declaration
    assert_eq!(result.node.decls.len(), 1);
    assert!(matches!(result.node.decls[0].kind, DeclKind::Bad));
}

#[test]
fn error_limit_stops_a_fragment() {
    let src = format!("func f() {{\n{}}}", "a b\n".repeat(20));
    let result = parse_function(&src);

    assert_eq!(result.errors.len(), MAX_ERRORS + 1);
    let lines: Vec<u32> = result.errors.iter().map(|e| e.pos.line).collect();
    assert_eq!(lines, (2..=12).collect::<Vec<u32>>());
    assert!(matches!(result.node.kind, DeclKind::Bad));
    assert_eq!(result.node.span.start, 0);
}

#[test]
fn cascading_errors_on_one_line_are_dropped() {
    // Only the first problem on the line is reported
    let errs = errors("module test; func f(a,) {}");
    assert_eq!(errs, [r#"<test>:1:23: expected parameter name, got ")" (RParen)"#]);
}

#[test]
fn fragment_must_start_with_func() {
    let result = parse_function("fn foo() {}");
    assert!(matches!(result.node.kind, DeclKind::Bad));
    assert_eq!(
        result.errors().map(|e| e.to_string()),
        Some(r#"1:1: expected 'func' keyword at start of function, got "fn" (Identifier)"#.to_string())
    );
}
