//! End-to-end conformance: parser, ESTree projection and printer together.

use mag_nodebuilder::*;
use mag_tests::{parse_expression_to_estree, parse_to_estree, reprint};
use serde_json::Value;

/// Parsing is a pure function: the same input yields the same tree.
#[test]
fn test_parse_is_deterministic() {
    let source = "if a { b; } else { c; }\nlet mut y: boolean = true;";
    let first = parse_to_estree(source).unwrap();
    let second = parse_to_estree(source).unwrap();
    assert_eq!(first, second);
}

/// Printing a parsed program and reparsing the output reproduces the tree.
#[test]
fn test_print_parse_round_trip() {
    let sources = [
        "-a;",
        "1 + 2 * 3 + 4;",
        "1 ** 2 ** 3;",
        "a == b;",
        "(a < b) == c;",
        "a.b(c).d[e];",
        "[1, 2, [3]];",
        "(a = b);",
        "([a, b] = [1, 2]);",
        "(if (a) b else c);",
        "(if a then b else c);",
        "(if a { b; } else { c; });",
        "(if a { b; } else if c { d; } else { e; });",
        "if (a) b; else if (c) d; else e;",
        "if a { b; } else c;",
        "let x = 2;",
        "let x: f32;",
        "let mut y: boolean = true;",
        "const z: number = 5;",
        "let [a, b] = [1, 2];",
        "0xff;",
        "0b1010;",
        "0o777;",
        "3.14;",
        "\"hello\\nworld\";",
        "/[a-z]+/gi;",
        "true; false;",
        "{ a; { b; } }",
    ];
    for source in sources {
        let tree = parse_to_estree(source).unwrap();
        let printed = reprint(source).unwrap();
        let reparsed = parse_to_estree(&printed)
            .unwrap_or_else(|e| panic!("reparse of {printed:?} failed: {e}"));
        assert_eq!(tree, reparsed, "round trip changed shape for {source:?}");
    }
}

/// A printed program is stable: printing the reparsed output is identity.
#[test]
fn test_print_is_idempotent() {
    let source = "if a { b; }\nlet x = 0xff;\n(if c then d else e);";
    let printed = reprint(source).unwrap();
    assert_eq!(reprint(&printed).unwrap(), printed);
}

/// The two entry points agree on shared expression grammar.
#[test]
fn test_entry_points_agree() {
    for source in ["1 + 2 * 3", "a.b(c).d[e]", "[1, [2]]", "-x ** 2"] {
        let via_statement = parse_to_estree(&format!("{source};")).unwrap();
        let via_expression = parse_expression_to_estree(source).unwrap();
        assert_eq!(via_statement, prog(vec![expr(via_expression)]));
    }
}

/// A small program touching every statement form.
#[test]
fn test_full_program() {
    let source = r#"
        let mut total: f32 = 0.0;
        const limit = 10;
        if (total < limit) { (total = total + 1); }
        else { (total = limit); }
        log(total, /sum/g, "done");
    "#;
    let tree = parse_to_estree(source).unwrap();
    assert_eq!(
        tree,
        prog(vec![
            let_mut_st(id("total"), id("f32"), num("0.0")),
            const_st(id("limit"), Value::Null, num("10")),
            cond_st_else(
                bin("<", id("total"), id("limit")),
                block(vec![expr(paren(assign(
                    id("total"),
                    bin("+", id("total"), num("1"))
                )))]),
                block(vec![expr(paren(assign(id("total"), id("limit"))))])
            ),
            expr(call(
                id("log"),
                vec![id("total"), regex("sum", "g"), str_lit("done")]
            )),
        ])
    );
}

/// Errors carry the diagnostic code and the offending position.
#[test]
fn test_error_reporting() {
    let error = parse_to_estree("a == b == c;").unwrap_err();
    assert_eq!(
        error.code,
        mag_diagnostics::messages::COMPARISON_OPERATORS_CANNOT_BE_CHAINED.code
    );

    let error = parse_to_estree("a;\n\"unterminated").unwrap_err();
    assert_eq!(
        error.code,
        mag_diagnostics::messages::UNTERMINATED_STRING_LITERAL.code
    );
    assert_eq!(error.position.unwrap().line, 1);
}

/// A failed parse yields only the error, never a partial tree.
#[test]
fn test_no_partial_results() {
    assert!(parse_to_estree("a; b; @;").is_err());
    assert!(parse_to_estree("let x = ;").is_err());
    assert!(parse_to_estree("{ a;").is_err());
}
