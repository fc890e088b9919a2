//! mag_parser: Recursive descent parser for the Mag language.
//!
//! Parses token streams from the scanner into an arena-allocated AST.
//! Ordered-choice grammar points use bounded backtracking over the scanner
//! state; the first syntax error aborts the parse.
//!
//! # Example
//! ```
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let program = mag_parser::parse_program(&arena, "let x = 2;").unwrap();
//! assert_eq!(program.body.len(), 1);
//! ```

mod parser;
mod precedence;

pub use parser::{ParseResult, Parser};

use bumpalo::Bump;
use mag_ast::node::{Expression, Program};
use mag_diagnostics::SyntaxError;

/// Parse a complete source file into a [`Program`].
pub fn parse_program<'a>(arena: &'a Bump, source_text: &str) -> Result<Program<'a>, SyntaxError> {
    Parser::new(arena, source_text).parse_program()
}

/// Parse the source text as a single bare expression (for embedding
/// contexts). Trailing input after the expression is an error.
pub fn parse_expression<'a>(
    arena: &'a Bump,
    source_text: &str,
) -> Result<Expression<'a>, SyntaxError> {
    Parser::new(arena, source_text).parse_expression()
}
