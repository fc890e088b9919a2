//! AST node definitions for the Mag language.
//!
//! Nodes follow the ESTree shapes the rest of the pipeline expects. Child
//! nodes are referenced via arena-allocated references, so an entire tree
//! shares a single allocation lifetime.

use crate::syntax_kind::SyntaxKind;
use mag_core::text::TextRange;

/// Common data shared by all AST nodes.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// The kind of this node.
    pub kind: SyntaxKind,
    /// Source position range.
    pub range: TextRange,
}

impl NodeData {
    pub fn new(kind: SyntaxKind, pos: u32, end: u32) -> Self {
        Self {
            kind,
            range: TextRange::new(pos, end),
        }
    }
}

/// A list of nodes, allocated in the arena.
pub type NodeList<'a, T> = &'a [T];

// ============================================================================
// Program
// ============================================================================

/// The root node of a parsed source file.
#[derive(Debug)]
pub struct Program<'a> {
    pub data: NodeData,
    pub body: NodeList<'a, Statement<'a>>,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug)]
pub enum Statement<'a> {
    Expression(ExpressionStatement<'a>),
    Block(BlockStatement<'a>),
    Conditional(ConditionalStatement<'a>),
    VariableDeclaration(VariableDeclaration<'a>),
}

impl<'a> Statement<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            Statement::Expression(s) => &s.data,
            Statement::Block(s) => &s.data,
            Statement::Conditional(s) => &s.data,
            Statement::VariableDeclaration(s) => &s.data,
        }
    }
}

/// An expression in statement position, terminated by `;`.
#[derive(Debug)]
pub struct ExpressionStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

/// A `{ ... }` sequence of statements.
#[derive(Debug)]
pub struct BlockStatement<'a> {
    pub data: NodeData,
    pub body: NodeList<'a, Statement<'a>>,
}

/// `if (cond) cons else alt` or `if cond { ... } else alt`.
///
/// The bare-condition surface requires a block consequent; the parenthesized
/// surface accepts any statement. Either way the alternate is optional.
#[derive(Debug)]
pub struct ConditionalStatement<'a> {
    pub data: NodeData,
    pub condition: &'a Expression<'a>,
    pub consequent: &'a Statement<'a>,
    pub alternate: Option<&'a Statement<'a>>,
}

/// `let x: T = e;`, `let mut x;`, `const x = e;`.
#[derive(Debug)]
pub struct VariableDeclaration<'a> {
    pub data: NodeData,
    /// True for `const`, false for `let`.
    pub constant: bool,
    /// True when declared with `let mut`. Always false for `const`.
    pub mutable: bool,
    pub left: BindingPattern<'a>,
    /// Type annotations are expression-shaped (`f32`, `Vec[T]`, ...).
    pub type_annotation: Option<&'a Expression<'a>>,
    pub right: Option<&'a Expression<'a>>,
}

/// What a declaration can bind: a single name or an array destructuring.
#[derive(Debug)]
pub enum BindingPattern<'a> {
    Identifier(Identifier<'a>),
    Array(ArrayPattern<'a>),
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug)]
pub enum Expression<'a> {
    Identifier(Identifier<'a>),
    NumericLiteral(NumericLiteral<'a>),
    StringLiteral(StringLiteral<'a>),
    BooleanLiteral(BooleanLiteral),
    RegularExpressionLiteral(RegularExpressionLiteral<'a>),
    Array(ArrayExpression<'a>),
    Parenthesized(ParenthesizedExpression<'a>),
    Unary(UnaryExpression<'a>),
    Binary(BinaryExpression<'a>),
    Conditional(ConditionalExpression<'a>),
    Assignment(AssignmentExpression<'a>),
    Field(FieldExpression<'a>),
    Index(IndexExpression<'a>),
    Call(CallExpression<'a>),
}

impl<'a> Expression<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            Expression::Identifier(e) => &e.data,
            Expression::NumericLiteral(e) => &e.data,
            Expression::StringLiteral(e) => &e.data,
            Expression::BooleanLiteral(e) => &e.data,
            Expression::RegularExpressionLiteral(e) => &e.data,
            Expression::Array(e) => &e.data,
            Expression::Parenthesized(e) => &e.data,
            Expression::Unary(e) => &e.data,
            Expression::Binary(e) => &e.data,
            Expression::Conditional(e) => &e.data,
            Expression::Assignment(e) => &e.data,
            Expression::Field(e) => &e.data,
            Expression::Index(e) => &e.data,
            Expression::Call(e) => &e.data,
        }
    }
}

/// Node text lives in the arena alongside the nodes, so dropping the arena
/// releases the whole tree without per-node destructors.
#[derive(Debug, Clone)]
pub struct Identifier<'a> {
    pub data: NodeData,
    pub name: &'a str,
}

/// A numeric literal. `value` keeps the digit text as written (prefix and
/// separators stripped); `base` records the radix (10, 16, 8 or 2).
#[derive(Debug, Clone)]
pub struct NumericLiteral<'a> {
    pub data: NodeData,
    pub value: &'a str,
    pub base: u32,
}

#[derive(Debug, Clone)]
pub struct StringLiteral<'a> {
    pub data: NodeData,
    pub value: &'a str,
}

#[derive(Debug, Clone)]
pub struct BooleanLiteral {
    pub data: NodeData,
    pub value: bool,
}

#[derive(Debug, Clone)]
pub struct RegularExpressionLiteral<'a> {
    pub data: NodeData,
    pub pattern: &'a str,
    pub flags: &'a str,
}

#[derive(Debug)]
pub struct ArrayExpression<'a> {
    pub data: NodeData,
    pub elements: NodeList<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct ParenthesizedExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

/// A prefix unary expression: `-a`, `+a`, `!a`.
#[derive(Debug)]
pub struct UnaryExpression<'a> {
    pub data: NodeData,
    pub operator: SyntaxKind,
    pub argument: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct BinaryExpression<'a> {
    pub data: NodeData,
    pub operator: SyntaxKind,
    pub left: &'a Expression<'a>,
    pub right: &'a Expression<'a>,
}

/// One of the three `if` expression surfaces.
///
/// `explicit_then` distinguishes `if c then a else b` from
/// `if (c) a else b`; the block-bodied form is recognized by its
/// `BlockStatement` branches.
#[derive(Debug)]
pub struct ConditionalExpression<'a> {
    pub data: NodeData,
    pub condition: &'a Expression<'a>,
    pub consequent: ConditionalBranch<'a>,
    pub alternate: ConditionalBranch<'a>,
    pub explicit_then: bool,
}

/// A branch of a conditional expression: either a plain expression or a
/// block (block-bodied form only).
#[derive(Debug)]
pub enum ConditionalBranch<'a> {
    Expression(&'a Expression<'a>),
    Block(&'a BlockStatement<'a>),
    /// An `else if ...` cascade in the block-bodied form.
    Conditional(&'a ConditionalExpression<'a>),
}

/// `target = value`, where the target has been validated (and an array
/// literal reinterpreted as a pattern).
#[derive(Debug)]
pub struct AssignmentExpression<'a> {
    pub data: NodeData,
    pub left: Pattern<'a>,
    pub right: &'a Expression<'a>,
}

/// The left-hand side of an assignment.
#[derive(Debug)]
pub enum Pattern<'a> {
    /// An identifier, field or index expression.
    Target(&'a Expression<'a>),
    /// An array literal reinterpreted as a destructuring pattern.
    Array(ArrayPattern<'a>),
}

#[derive(Debug)]
pub struct ArrayPattern<'a> {
    pub data: NodeData,
    pub elements: NodeList<'a, Expression<'a>>,
}

/// `object.field` member access.
#[derive(Debug)]
pub struct FieldExpression<'a> {
    pub data: NodeData,
    pub object: &'a Expression<'a>,
    pub field: Identifier<'a>,
}

/// `object[index]` computed access.
#[derive(Debug)]
pub struct IndexExpression<'a> {
    pub data: NodeData,
    pub object: &'a Expression<'a>,
    pub index: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct CallExpression<'a> {
    pub data: NodeData,
    pub callee: &'a Expression<'a>,
    pub arguments: NodeList<'a, Expression<'a>>,
}
