//! Parser integration tests.
//!
//! Verifies that the parser builds the expected ESTree shapes from Mag
//! source, and rejects the grammar's forbidden forms.

use bumpalo::Bump;
use mag_ast::{expression_to_estree, program_to_estree};
use mag_nodebuilder::*;
use serde_json::Value;

/// Helper: parse a program and project it to ESTree JSON.
fn parse(source: &str) -> Value {
    let arena = Bump::new();
    let program = mag_parser::parse_program(&arena, source)
        .unwrap_or_else(|e| panic!("parse failed for {source:?}: {e}"));
    program_to_estree(&program)
}

/// Helper: a program holding a single expression statement.
fn pe(expression: Value) -> Value {
    prog(vec![expr(expression)])
}

/// Helper: assert that parsing fails.
fn fails(source: &str) {
    let arena = Bump::new();
    assert!(
        mag_parser::parse_program(&arena, source).is_err(),
        "expected parse failure for {source:?}"
    );
}

// ============================================================================
// Arithmetic
// ============================================================================

#[test]
fn test_unary_minus() {
    assert_eq!(parse("-a;"), pe(prefix("-", id("a"))));
}

#[test]
fn test_binary_operators() {
    assert_eq!(parse("1 + 2;"), pe(bin("+", num("1"), num("2"))));
    assert_eq!(parse("2 * a;"), pe(bin("*", num("2"), id("a"))));
    assert_eq!(parse("b - c;"), pe(bin("-", id("b"), id("c"))));
    assert_eq!(parse("pi / 2;"), pe(bin("/", id("pi"), num("2"))));
    assert_eq!(parse("3 ** 2;"), pe(bin("**", num("3"), num("2"))));
    assert_eq!(parse("5 % 3;"), pe(bin("%", num("5"), num("3"))));
}

#[test]
fn test_left_associativity() {
    assert_eq!(
        parse("1 + 2 + 3;"),
        pe(bin("+", bin("+", num("1"), num("2")), num("3")))
    );
    assert_eq!(
        parse("1 - 2 - 3;"),
        pe(bin("-", bin("-", num("1"), num("2")), num("3")))
    );
    assert_eq!(
        parse("1 * 2 * 3;"),
        pe(bin("*", bin("*", num("1"), num("2")), num("3")))
    );
    assert_eq!(
        parse("1 / 2 / 3;"),
        pe(bin("/", bin("/", num("1"), num("2")), num("3")))
    );
}

#[test]
fn test_exponentiation_is_right_associative() {
    assert_eq!(
        parse("1 ** 2 ** 3;"),
        pe(bin("**", num("1"), bin("**", num("2"), num("3"))))
    );
}

#[test]
fn test_precedence() {
    assert_eq!(
        parse("1 + 2 * 3 + 4;"),
        pe(bin("+", bin("+", num("1"), bin("*", num("2"), num("3"))), num("4")))
    );
    assert_eq!(
        parse("a**2 + 0.5 * a * b + b**2;"),
        pe(bin(
            "+",
            bin(
                "+",
                bin("**", id("a"), num("2")),
                bin("*", bin("*", num("0.5"), id("a")), id("b"))
            ),
            bin("**", id("b"), num("2"))
        ))
    );
}

// ============================================================================
// Comparisons
// ============================================================================

#[test]
fn test_comparison_operators() {
    assert_eq!(parse("1 < 2;"), pe(bin("<", num("1"), num("2"))));
    assert_eq!(parse("1 <= a;"), pe(bin("<=", num("1"), id("a"))));
    assert_eq!(parse("a == b;"), pe(bin("==", id("a"), id("b"))));
    assert_eq!(parse("1 != 2;"), pe(bin("!=", num("1"), num("2"))));
    assert_eq!(parse("a >= 1;"), pe(bin(">=", id("a"), num("1"))));
    assert_eq!(parse("2 > 1;"), pe(bin(">", num("2"), num("1"))));
    assert_eq!(parse("1 === a;"), pe(bin("===", num("1"), id("a"))));
    assert_eq!(parse("a !== b;"), pe(bin("!==", id("a"), id("b"))));
}

#[test]
fn test_comparison_chaining_is_rejected() {
    fails("1 < 2 == 3;");
    fails("1 === 2 > 1;");
    fails("a == b == c;");
    fails("a != b == c;");
    fails("a < b == c <= d;");
    fails("x > c < d;");
    fails("a<b>c;");
}

#[test]
fn test_parenthesized_comparison_combines() {
    assert_eq!(
        parse("(a < b) == c;"),
        pe(bin("==", paren(bin("<", id("a"), id("b"))), id("c")))
    );
}

// ============================================================================
// Conditional expressions
// ============================================================================

#[test]
fn test_conditional_expression_forms() {
    assert_eq!(
        parse("(if (a) b else c);"),
        pe(paren(cond(id("a"), id("b"), id("c"))))
    );
    assert_eq!(
        parse("(if a then b else c);"),
        pe(paren(cond_then(id("a"), id("b"), id("c"))))
    );
    assert_eq!(
        parse("(if a { b; } else { c; });"),
        pe(paren(cond(
            id("a"),
            block(vec![expr(id("b"))]),
            block(vec![expr(id("c"))])
        )))
    );
}

#[test]
fn test_chained_conditional_expressions() {
    assert_eq!(
        parse("(if (a) b else if (c) d else e);"),
        pe(paren(cond(id("a"), id("b"), cond(id("c"), id("d"), id("e")))))
    );
    assert_eq!(
        parse("(if a then b else if c then d else e);"),
        pe(paren(cond_then(
            id("a"),
            id("b"),
            cond_then(id("c"), id("d"), id("e"))
        )))
    );
    assert_eq!(
        parse("(if (a) b else if c then d else e);"),
        pe(paren(cond(id("a"), id("b"), cond_then(id("c"), id("d"), id("e")))))
    );
    assert_eq!(
        parse("(if a { b; } else if c { d; } else { e; });"),
        pe(paren(cond(
            id("a"),
            block(vec![expr(id("b"))]),
            cond(
                id("c"),
                block(vec![expr(id("d"))]),
                block(vec![expr(id("e"))])
            )
        )))
    );
}

#[test]
fn test_incomplete_conditional_expressions_are_rejected() {
    fails("(if (a) b);");
    fails("(if a b else c);");
    fails("(if a then b);");
    fails("(if a { b; });");
}

// ============================================================================
// Conditional statements
// ============================================================================

#[test]
fn test_conditional_statements() {
    assert_eq!(
        parse("if (a) b;"),
        prog(vec![cond_st(id("a"), expr(id("b")))])
    );
    assert_eq!(
        parse("if (a) b; else c;"),
        prog(vec![cond_st_else(id("a"), expr(id("b")), expr(id("c")))])
    );
    assert_eq!(
        parse("if a { b; }"),
        prog(vec![cond_st(id("a"), block(vec![expr(id("b"))]))])
    );
    assert_eq!(
        parse("if a { b; } else { c; }"),
        prog(vec![cond_st_else(
            id("a"),
            block(vec![expr(id("b"))]),
            block(vec![expr(id("c"))])
        )])
    );
    assert_eq!(
        parse("if (a) b; else { c; }"),
        prog(vec![cond_st_else(
            id("a"),
            expr(id("b")),
            block(vec![expr(id("c"))])
        )])
    );
    assert_eq!(
        parse("if a { b; } else c;"),
        prog(vec![cond_st_else(
            id("a"),
            block(vec![expr(id("b"))]),
            expr(id("c"))
        )])
    );
}

#[test]
fn test_chained_conditional_statements() {
    assert_eq!(
        parse("if (a) b;\nelse if (c) d;"),
        prog(vec![cond_st_else(
            id("a"),
            expr(id("b")),
            cond_st(id("c"), expr(id("d")))
        )])
    );
    assert_eq!(
        parse("if (a) b;\nelse if (c) d;\nelse e;"),
        prog(vec![cond_st_else(
            id("a"),
            expr(id("b")),
            cond_st_else(id("c"), expr(id("d")), expr(id("e")))
        )])
    );
    assert_eq!(
        parse("if a { b; }\nelse if c { d; }"),
        prog(vec![cond_st_else(
            id("a"),
            block(vec![expr(id("b"))]),
            cond_st(id("c"), block(vec![expr(id("d"))]))
        )])
    );
    assert_eq!(
        parse("if a { b; }\nelse if c { d; }\nelse { e; }"),
        prog(vec![cond_st_else(
            id("a"),
            block(vec![expr(id("b"))]),
            cond_st_else(
                id("c"),
                block(vec![expr(id("d"))]),
                block(vec![expr(id("e"))])
            )
        )])
    );
}

#[test]
fn test_bare_condition_requires_block() {
    fails("if a b;");
    fails("if a b; else { c; }");
}

// ============================================================================
// Assignment
// ============================================================================

#[test]
fn test_simple_assignment() {
    assert_eq!(parse("(a = b);"), pe(paren(assign(id("a"), id("b")))));
    assert_eq!(
        parse("(x = x**2 + 4);"),
        pe(paren(assign(
            id("x"),
            bin("+", bin("**", id("x"), num("2")), num("4"))
        )))
    );
}

#[test]
fn test_member_assignment() {
    assert_eq!(
        parse("(a.b = c);"),
        pe(paren(assign(field(id("a"), id("b")), id("c"))))
    );
    assert_eq!(
        parse("(a().b = c);"),
        pe(paren(assign(field(call(id("a"), vec![]), id("b")), id("c"))))
    );
    assert_eq!(
        parse("(a.b(c).d[e] = f);"),
        pe(paren(assign(
            index(
                field(call(field(id("a"), id("b")), vec![id("c")]), id("d")),
                id("e")
            ),
            id("f")
        )))
    );
}

#[test]
fn test_array_destructuring() {
    assert_eq!(
        parse("(arr = [1, 2]);"),
        pe(paren(assign(id("arr"), arr(vec![num("1"), num("2")]))))
    );
    assert_eq!(
        parse("([a, b] = [1, 2]);"),
        pe(paren(assign(
            arr_pat(vec![id("a"), id("b")]),
            arr(vec![num("1"), num("2")])
        )))
    );
}

#[test]
fn test_invalid_assignment_targets() {
    fails("(1 = a);");
    fails("(a + b = c);");
    fails("(a() = b);");
    fails("([a, 1] = b);");
}

#[test]
fn test_unparenthesized_assignment_statement_is_rejected() {
    fails("a = b;");
}

// ============================================================================
// Variable declarations
// ============================================================================

#[test]
fn test_let_declarations() {
    assert_eq!(
        parse("let x = 2;"),
        prog(vec![let_st(id("x"), Value::Null, num("2"))])
    );
    assert_eq!(
        parse("let x: f32;"),
        prog(vec![let_st(id("x"), id("f32"), Value::Null)])
    );
    assert_eq!(
        parse("let x: f32 = 2;"),
        prog(vec![let_st(id("x"), id("f32"), num("2"))])
    );
}

#[test]
fn test_let_mut_declarations() {
    assert_eq!(
        parse("let mut y = true;"),
        prog(vec![let_mut_st(id("y"), Value::Null, bool_lit(true))])
    );
    assert_eq!(
        parse("let mut y: boolean;"),
        prog(vec![let_mut_st(id("y"), id("boolean"), Value::Null)])
    );
    assert_eq!(
        parse("let mut y: boolean = true;"),
        prog(vec![let_mut_st(id("y"), id("boolean"), bool_lit(true))])
    );
}

#[test]
fn test_const_declarations() {
    assert_eq!(
        parse("const z = 5;"),
        prog(vec![const_st(id("z"), Value::Null, num("5"))])
    );
    assert_eq!(
        parse("const z: number = 5;"),
        prog(vec![const_st(id("z"), id("number"), num("5"))])
    );
}

#[test]
fn test_destructuring_declaration() {
    assert_eq!(
        parse("let [a, b] = [1, 2];"),
        prog(vec![let_st(
            arr_pat(vec![id("a"), id("b")]),
            Value::Null,
            arr(vec![num("1"), num("2")])
        )])
    );
}

#[test]
fn test_malformed_declarations_are_rejected() {
    fails("let;");
    fails("let 1 = 2;");
    fails("let x = 2");
    fails("const mut z = 1;");
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn test_numeric_literal_bases() {
    assert_eq!(parse("0xff;"), pe(num_base("ff", 16)));
    assert_eq!(parse("0b1010;"), pe(num_base("1010", 2)));
    assert_eq!(parse("0o777;"), pe(num_base("777", 8)));
    assert_eq!(parse("1_000_000;"), pe(num("1000000")));
}

#[test]
fn test_string_literals() {
    assert_eq!(parse("\"hello\";"), pe(str_lit("hello")));
    assert_eq!(parse("'it';"), pe(str_lit("it")));
}

#[test]
fn test_boolean_literals() {
    assert_eq!(parse("true;"), pe(bool_lit(true)));
    assert_eq!(parse("false;"), pe(bool_lit(false)));
}

#[test]
fn test_regex_literal() {
    assert_eq!(parse("/a+b/gi;"), pe(regex("a+b", "gi")));
}

#[test]
fn test_unterminated_literals_are_rejected() {
    fails("\"oops;");
    fails("/never");
}

// ============================================================================
// Statements and programs
// ============================================================================

#[test]
fn test_statement_sequence() {
    assert_eq!(
        parse("a; b; c;"),
        prog(vec![expr(id("a")), expr(id("b")), expr(id("c"))])
    );
}

#[test]
fn test_nested_blocks() {
    assert_eq!(
        parse("{ a; { b; } }"),
        prog(vec![block(vec![
            expr(id("a")),
            block(vec![expr(id("b"))])
        ])])
    );
}

#[test]
fn test_comments_are_trivia() {
    assert_eq!(
        parse("// leading\na; /* inline */ b;"),
        prog(vec![expr(id("a")), expr(id("b"))])
    );
}

#[test]
fn test_missing_semicolon_is_rejected() {
    fails("a");
    fails("a b;");
}

#[test]
fn test_empty_program() {
    assert_eq!(parse(""), prog(vec![]));
}

// ============================================================================
// Bare expression entry point
// ============================================================================

#[test]
fn test_parse_expression_entry() {
    let arena = Bump::new();
    let expression = mag_parser::parse_expression(&arena, "1 + 2 * 3").unwrap();
    assert_eq!(
        expression_to_estree(&expression),
        bin("+", num("1"), bin("*", num("2"), num("3")))
    );
}

#[test]
fn test_parse_expression_rejects_trailing_input() {
    let arena = Bump::new();
    assert!(mag_parser::parse_expression(&arena, "a; b").is_err());
    assert!(mag_parser::parse_expression(&arena, "").is_err());
}

#[test]
fn test_error_position_points_at_offending_line() {
    let arena = Bump::new();
    let error = mag_parser::parse_program(&arena, "a;\nb @;").unwrap_err();
    let position = error.position.expect("position attached");
    assert_eq!(position.line, 1);
}

// ============================================================================
// Deeply nested input
// ============================================================================

#[test]
fn test_long_exponent_chain_parses() {
    let mut source = String::from("1");
    for _ in 0..10_000 {
        source.push_str(" ** 1");
    }
    source.push(';');
    let arena = Bump::new();
    assert!(mag_parser::parse_program(&arena, &source).is_ok());
}

#[test]
fn test_long_unary_minus_chain_parses() {
    let mut source = "-".repeat(10_000);
    source.push_str("a;");
    let arena = Bump::new();
    assert!(mag_parser::parse_program(&arena, &source).is_ok());
}

#[test]
fn test_deep_parenthesization_reports_nesting_error() {
    let mut source = "(".repeat(300);
    source.push('a');
    source.push_str(&")".repeat(300));
    source.push(';');
    let arena = Bump::new();
    let error = mag_parser::parse_program(&arena, &source).unwrap_err();
    assert_eq!(error.code, 1175);
}

#[test]
fn test_deep_else_if_expression_cascade_reports_nesting_error() {
    let mut source = String::from("(");
    for _ in 0..300 {
        source.push_str("if a { 1; } else ");
    }
    source.push_str("{ 2; });");
    let arena = Bump::new();
    let error = mag_parser::parse_program(&arena, &source).unwrap_err();
    assert_eq!(error.code, 1175);
}
