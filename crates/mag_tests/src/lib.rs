//! mag_tests: Cross-crate conformance helpers.
//!
//! Shared helpers for the end-to-end suite in `tests/`: parse source into
//! ESTree JSON, and round-trip a tree through the printer.

use bumpalo::Bump;
use mag_diagnostics::SyntaxError;
use serde_json::Value;

/// Parse a program and project it to ESTree JSON.
pub fn parse_to_estree(source: &str) -> Result<Value, SyntaxError> {
    let arena = Bump::new();
    let program = mag_parser::parse_program(&arena, source)?;
    Ok(mag_ast::program_to_estree(&program))
}

/// Parse a bare expression and project it to ESTree JSON.
pub fn parse_expression_to_estree(source: &str) -> Result<Value, SyntaxError> {
    let arena = Bump::new();
    let expression = mag_parser::parse_expression(&arena, source)?;
    Ok(mag_ast::expression_to_estree(&expression))
}

/// Parse a program and print it back to source text.
pub fn reprint(source: &str) -> Result<String, SyntaxError> {
    let arena = Bump::new();
    let program = mag_parser::parse_program(&arena, source)?;
    Ok(mag_printer::Printer::new().print_program(&program))
}
