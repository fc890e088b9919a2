//! mag_nodebuilder: Synthetic ESTree node construction.
//!
//! Builds expected ESTree-shaped JSON values for conformance tests, one
//! function per node kind. The shapes match what
//! [`mag_ast::program_to_estree`] produces for a parsed tree.

use serde_json::{json, Value};

/// A `Program` node from a list of statements.
///
/// # Example
/// ```
/// use mag_nodebuilder::*;
/// let tree = prog(vec![expr(id("a"))]);
/// assert_eq!(tree["type"], "Program");
/// ```
pub fn prog(body: Vec<Value>) -> Value {
    json!({ "type": "Program", "body": body })
}

/// An `ExpressionStatement` wrapping an expression.
pub fn expr(expression: Value) -> Value {
    json!({ "type": "ExpressionStatement", "expression": expression })
}

/// A `ParenthesizedExpression`.
pub fn paren(expression: Value) -> Value {
    json!({ "type": "ParenthesizedExpression", "expression": expression })
}

/// A `BooleanLiteral`.
pub fn bool_lit(value: bool) -> Value {
    json!({ "type": "BooleanLiteral", "value": value })
}

/// A decimal `NumericLiteral` keeping its digit text.
pub fn num(value: &str) -> Value {
    num_base(value, 10)
}

/// A `NumericLiteral` in an explicit base.
pub fn num_base(value: &str, base: u32) -> Value {
    json!({ "type": "NumericLiteral", "value": value, "base": base })
}

/// A `StringLiteral`.
pub fn str_lit(value: &str) -> Value {
    json!({ "type": "StringLiteral", "value": value })
}

/// A `RegularExpressionLiteral`.
pub fn regex(pattern: &str, flags: &str) -> Value {
    json!({ "type": "RegularExpressionLiteral", "pattern": pattern, "flags": flags })
}

/// An `Identifier`.
pub fn id(name: &str) -> Value {
    json!({ "type": "Identifier", "name": name })
}

/// A `FieldExpression` (`object.field`).
pub fn field(object: Value, field: Value) -> Value {
    json!({ "type": "FieldExpression", "object": object, "field": field })
}

/// An `IndexExpression` (`object[index]`).
pub fn index(object: Value, index: Value) -> Value {
    json!({ "type": "IndexExpression", "object": object, "index": index })
}

/// A `CallExpression`.
pub fn call(callee: Value, arguments: Vec<Value>) -> Value {
    json!({ "type": "CallExpression", "callee": callee, "arguments": arguments })
}

/// An `ArrayExpression`.
pub fn arr(elements: Vec<Value>) -> Value {
    json!({ "type": "ArrayExpression", "elements": elements })
}

/// An `ArrayPattern` (destructuring target).
pub fn arr_pat(elements: Vec<Value>) -> Value {
    json!({ "type": "ArrayPattern", "elements": elements })
}

/// A prefix `UnaryExpression`.
pub fn prefix(operator: &str, argument: Value) -> Value {
    json!({
        "type": "UnaryExpression",
        "prefix": true,
        "operator": operator,
        "argument": argument,
    })
}

/// A `BinaryExpression`.
pub fn bin(operator: &str, left: Value, right: Value) -> Value {
    json!({
        "type": "BinaryExpression",
        "operator": operator,
        "left": left,
        "right": right,
    })
}

/// A `ConditionalExpression` (paren-condition or block-bodied form).
pub fn cond(condition: Value, consequent: Value, alternate: Value) -> Value {
    json!({
        "type": "ConditionalExpression",
        "condition": condition,
        "consequent": consequent,
        "alternate": alternate,
    })
}

/// A `ConditionalExpression` written with the `then` keyword.
pub fn cond_then(condition: Value, consequent: Value, alternate: Value) -> Value {
    let mut value = cond(condition, consequent, alternate);
    value["explicitThen"] = Value::Bool(true);
    value
}

/// A `ConditionalStatement` without an else branch.
pub fn cond_st(condition: Value, consequent: Value) -> Value {
    cond_st_else(condition, consequent, Value::Null)
}

/// A `ConditionalStatement` with an else branch.
pub fn cond_st_else(condition: Value, consequent: Value, alternate: Value) -> Value {
    json!({
        "type": "ConditionalStatement",
        "condition": condition,
        "consequent": consequent,
        "alternate": alternate,
    })
}

/// A `BlockStatement`.
pub fn block(body: Vec<Value>) -> Value {
    json!({ "type": "BlockStatement", "body": body })
}

/// An `AssignmentExpression` (always operator `=`).
pub fn assign(left: Value, right: Value) -> Value {
    json!({
        "type": "AssignmentExpression",
        "operator": "=",
        "left": left,
        "right": right,
    })
}

/// A `VariableDeclaration` with all parts spelled out.
pub fn variable_declaration(
    left: Value,
    type_annotation: Value,
    right: Value,
    constant: bool,
    mutable: bool,
) -> Value {
    json!({
        "type": "VariableDeclaration",
        "constant": constant,
        "mutable": mutable,
        "left": left,
        "right": right,
        "typeAnnotation": type_annotation,
    })
}

/// `let <left> [: <ty>] [= <right>];`
pub fn let_st(left: Value, type_annotation: Value, right: Value) -> Value {
    variable_declaration(left, type_annotation, right, false, false)
}

/// `let mut <left> [: <ty>] [= <right>];`
pub fn let_mut_st(left: Value, type_annotation: Value, right: Value) -> Value {
    variable_declaration(left, type_annotation, right, false, true)
}

/// `const <left> [: <ty>] [= <right>];`
pub fn const_st(left: Value, type_annotation: Value, right: Value) -> Value {
    variable_declaration(left, type_annotation, right, true, false)
}
