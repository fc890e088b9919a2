//! mag_diagnostics: Syntax error messages and error reporting for Mag.
//!
//! Parsing has a single failure taxonomy: a syntax error aborts the whole
//! parse and is surfaced to the caller as a [`SyntaxError`]. Message templates
//! live in the [`messages`] catalog; each carries a stable numeric code.

use mag_core::text::{LineAndColumn, TextSpan};
use thiserror::Error;

/// A diagnostic message template with a stable error code.
/// Templates may contain `{0}`, `{1}`, etc. placeholders.
#[derive(Debug, Clone, Copy)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub message: &'static str,
}

/// Format a message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// A realized syntax error with its source location.
///
/// The grammar has no recovery or partial-result mode, so one `SyntaxError`
/// is all a failed parse produces.
#[derive(Debug, Clone, Error)]
#[error("{}", self.render())]
pub struct SyntaxError {
    /// The resolved message text.
    pub message: String,
    /// The numeric error code from the message catalog.
    pub code: u32,
    /// The span of the offending token, if known.
    pub span: Option<TextSpan>,
    /// Line/column of the span start, resolved against the source text.
    pub position: Option<LineAndColumn>,
}

impl SyntaxError {
    /// Create a syntax error without location info.
    pub fn new(message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            message: format_message(message.message, args),
            code: message.code,
            span: None,
            position: None,
        }
    }

    /// Create a syntax error pointing at a source span.
    pub fn at(span: TextSpan, message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            message: format_message(message.message, args),
            code: message.code,
            span: Some(span),
            position: None,
        }
    }

    /// Attach line/column information resolved from a line map.
    pub fn with_position(mut self, position: LineAndColumn) -> Self {
        self.position = Some(position);
        self
    }

    fn render(&self) -> String {
        match self.position {
            Some(pos) => format!(
                "syntax error MG{}: {} ({}:{})",
                self.code,
                self.message,
                pos.line + 1,
                pos.character + 1
            ),
            None => format!("syntax error MG{}: {}", self.code, self.message),
        }
    }
}

/// Message catalog for the Mag grammar.
pub mod messages {
    use super::DiagnosticMessage;

    macro_rules! diag {
        ($code:expr, $msg:expr) => {
            DiagnosticMessage {
                code: $code,
                message: $msg,
            }
        };
    }

    // Lexical errors (1000-1099)
    pub const UNTERMINATED_STRING_LITERAL: DiagnosticMessage =
        diag!(1002, "Unterminated string literal.");
    pub const IDENTIFIER_EXPECTED: DiagnosticMessage = diag!(1003, "Identifier expected.");
    pub const _0_EXPECTED: DiagnosticMessage = diag!(1005, "'{0}' expected.");
    pub const UNEXPECTED_TOKEN: DiagnosticMessage = diag!(1012, "Unexpected token.");
    pub const INVALID_CHARACTER: DiagnosticMessage = diag!(1127, "Invalid character.");
    pub const UNTERMINATED_REGULAR_EXPRESSION_LITERAL: DiagnosticMessage =
        diag!(1161, "Unterminated regular expression literal.");

    // Grammar errors (1100-1199)
    pub const EXPRESSION_EXPECTED: DiagnosticMessage = diag!(1109, "Expression expected.");
    pub const DECLARATION_OR_STATEMENT_EXPECTED: DiagnosticMessage =
        diag!(1128, "Declaration or statement expected.");
    pub const COMPARISON_OPERATORS_CANNOT_BE_CHAINED: DiagnosticMessage = diag!(
        1170,
        "Comparison operators cannot be chained; parenthesize one side."
    );
    pub const INVALID_ASSIGNMENT_TARGET: DiagnosticMessage =
        diag!(1171, "Invalid assignment target.");
    pub const A_BARE_IF_CONDITION_REQUIRES_A_BLOCK_CONSEQUENT: DiagnosticMessage = diag!(
        1172,
        "An 'if' condition without parentheses requires a block consequent."
    );
    pub const AN_IF_EXPRESSION_REQUIRES_AN_ELSE_BRANCH: DiagnosticMessage =
        diag!(1173, "An 'if' expression requires an 'else' branch.");
    pub const AN_ELSE_BRANCH_OF_A_BLOCK_IF_EXPRESSION_MUST_BE_A_BLOCK_OR_IF: DiagnosticMessage = diag!(
        1174,
        "The 'else' branch of a block-bodied 'if' expression must be a block or another 'if'."
    );
    pub const NESTING_DEPTH_EXCEEDED: DiagnosticMessage =
        diag!(1175, "Expression or statement nesting is too deep.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message() {
        assert_eq!(format_message("'{0}' expected.", &[";"]), "';' expected.");
        assert_eq!(format_message("no args", &[]), "no args");
    }

    #[test]
    fn test_render_without_position() {
        let err = SyntaxError::new(&messages::EXPRESSION_EXPECTED, &[]);
        assert_eq!(err.to_string(), "syntax error MG1109: Expression expected.");
    }

    #[test]
    fn test_render_with_position() {
        let err = SyntaxError::at(TextSpan::new(4, 1), &messages::_0_EXPECTED, &[";"])
            .with_position(LineAndColumn::new(0, 4));
        assert_eq!(err.to_string(), "syntax error MG1005: ';' expected. (1:5)");
    }
}
