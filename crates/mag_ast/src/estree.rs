//! Projection of the arena AST into ESTree-shaped JSON values.
//!
//! Positions are deliberately left out of the projection so two parses of
//! equivalent source compare equal; consumers that need spans read them off
//! the arena nodes directly.

use serde_json::{json, Value};

use crate::node::*;

pub fn program_to_estree(program: &Program<'_>) -> Value {
    json!({
        "type": "Program",
        "body": program.body.iter().map(statement_to_estree).collect::<Vec<_>>(),
    })
}

pub fn statement_to_estree(statement: &Statement<'_>) -> Value {
    match statement {
        Statement::Expression(s) => json!({
            "type": "ExpressionStatement",
            "expression": expression_to_estree(s.expression),
        }),
        Statement::Block(s) => block_to_estree(s),
        Statement::Conditional(s) => json!({
            "type": "ConditionalStatement",
            "condition": expression_to_estree(s.condition),
            "consequent": statement_to_estree(s.consequent),
            "alternate": s.alternate.map(statement_to_estree).unwrap_or(Value::Null),
        }),
        Statement::VariableDeclaration(s) => json!({
            "type": "VariableDeclaration",
            "constant": s.constant,
            "mutable": s.mutable,
            "left": binding_to_estree(&s.left),
            "right": s.right.map(expression_to_estree).unwrap_or(Value::Null),
            "typeAnnotation": s
                .type_annotation
                .map(expression_to_estree)
                .unwrap_or(Value::Null),
        }),
    }
}

fn block_to_estree(block: &BlockStatement<'_>) -> Value {
    json!({
        "type": "BlockStatement",
        "body": block.body.iter().map(statement_to_estree).collect::<Vec<_>>(),
    })
}

fn binding_to_estree(binding: &BindingPattern<'_>) -> Value {
    match binding {
        BindingPattern::Identifier(id) => identifier_to_estree(id),
        BindingPattern::Array(p) => array_pattern_to_estree(p),
    }
}

fn array_pattern_to_estree(pattern: &ArrayPattern<'_>) -> Value {
    json!({
        "type": "ArrayPattern",
        "elements": pattern.elements.iter().map(expression_to_estree).collect::<Vec<_>>(),
    })
}

fn identifier_to_estree(identifier: &Identifier<'_>) -> Value {
    json!({ "type": "Identifier", "name": identifier.name })
}

pub fn expression_to_estree(expression: &Expression<'_>) -> Value {
    match expression {
        Expression::Identifier(e) => identifier_to_estree(e),
        Expression::NumericLiteral(e) => json!({
            "type": "NumericLiteral",
            "value": e.value,
            "base": e.base,
        }),
        Expression::StringLiteral(e) => json!({
            "type": "StringLiteral",
            "value": e.value,
        }),
        Expression::BooleanLiteral(e) => json!({
            "type": "BooleanLiteral",
            "value": e.value,
        }),
        Expression::RegularExpressionLiteral(e) => json!({
            "type": "RegularExpressionLiteral",
            "pattern": e.pattern,
            "flags": e.flags,
        }),
        Expression::Array(e) => json!({
            "type": "ArrayExpression",
            "elements": e.elements.iter().map(expression_to_estree).collect::<Vec<_>>(),
        }),
        Expression::Parenthesized(e) => json!({
            "type": "ParenthesizedExpression",
            "expression": expression_to_estree(e.expression),
        }),
        Expression::Unary(e) => json!({
            "type": "UnaryExpression",
            "prefix": true,
            "operator": e.operator.punctuation_text(),
            "argument": expression_to_estree(e.argument),
        }),
        Expression::Binary(e) => json!({
            "type": "BinaryExpression",
            "operator": e.operator.punctuation_text(),
            "left": expression_to_estree(e.left),
            "right": expression_to_estree(e.right),
        }),
        Expression::Conditional(e) => conditional_to_estree(e),
        Expression::Assignment(e) => json!({
            "type": "AssignmentExpression",
            "operator": "=",
            "left": pattern_to_estree(&e.left),
            "right": expression_to_estree(e.right),
        }),
        Expression::Field(e) => json!({
            "type": "FieldExpression",
            "object": expression_to_estree(e.object),
            "field": identifier_to_estree(&e.field),
        }),
        Expression::Index(e) => json!({
            "type": "IndexExpression",
            "object": expression_to_estree(e.object),
            "index": expression_to_estree(e.index),
        }),
        Expression::Call(e) => json!({
            "type": "CallExpression",
            "callee": expression_to_estree(e.callee),
            "arguments": e.arguments.iter().map(expression_to_estree).collect::<Vec<_>>(),
        }),
    }
}

fn conditional_to_estree(conditional: &ConditionalExpression<'_>) -> Value {
    let mut value = json!({
        "type": "ConditionalExpression",
        "condition": expression_to_estree(conditional.condition),
        "consequent": branch_to_estree(&conditional.consequent),
        "alternate": branch_to_estree(&conditional.alternate),
    });
    // `explicitThen` is only present on the `then` surface form.
    if conditional.explicit_then {
        value["explicitThen"] = Value::Bool(true);
    }
    value
}

fn branch_to_estree(branch: &ConditionalBranch<'_>) -> Value {
    match branch {
        ConditionalBranch::Expression(e) => expression_to_estree(e),
        ConditionalBranch::Block(b) => block_to_estree(b),
        ConditionalBranch::Conditional(c) => conditional_to_estree(c),
    }
}

fn pattern_to_estree(pattern: &Pattern<'_>) -> Value {
    match pattern {
        Pattern::Target(e) => expression_to_estree(e),
        Pattern::Array(p) => array_pattern_to_estree(p),
    }
}
