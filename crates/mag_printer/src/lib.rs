//! mag_printer: AST to text output.
//!
//! Converts Mag AST nodes back into source text. Printing a parsed tree and
//! reparsing the output yields the same tree shape, which the conformance
//! suite relies on.

use mag_ast::node::*;

/// Options for the printer.
pub struct PrinterOptions {
    /// Indentation string.
    pub indent_str: String,
    /// Newline string.
    pub new_line: String,
    /// Whether to emit a trailing newline.
    pub trailing_newline: bool,
}

impl Default for PrinterOptions {
    fn default() -> Self {
        Self {
            indent_str: "    ".to_string(),
            new_line: "\n".to_string(),
            trailing_newline: true,
        }
    }
}

/// The printer converts AST nodes to text.
pub struct Printer {
    output: String,
    indent_level: u32,
    options: PrinterOptions,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self::with_options(PrinterOptions::default())
    }

    pub fn with_options(options: PrinterOptions) -> Self {
        Self {
            output: String::with_capacity(4096),
            indent_level: 0,
            options,
        }
    }

    /// Print a program to a string.
    pub fn print_program(&mut self, program: &Program<'_>) -> String {
        self.output.clear();
        for (i, statement) in program.body.iter().enumerate() {
            if i > 0 {
                self.write_newline();
            }
            self.write_indent();
            self.print_statement(statement);
        }
        if self.options.trailing_newline && !self.output.is_empty() {
            self.write_newline();
        }
        self.output.clone()
    }

    /// Print a single expression to a string.
    pub fn print_expression_to_string(&mut self, expression: &Expression<'_>) -> String {
        self.output.clear();
        self.print_expression(expression);
        self.output.clone()
    }

    // ========================================================================
    // Statement printing
    // ========================================================================

    fn print_statement(&mut self, statement: &Statement<'_>) {
        match statement {
            Statement::Expression(n) => {
                self.print_expression(n.expression);
                self.write(";");
            }
            Statement::Block(n) => self.print_block(n),
            Statement::Conditional(n) => self.print_conditional_statement(n),
            Statement::VariableDeclaration(n) => self.print_variable_declaration(n),
        }
    }

    fn print_block(&mut self, block: &BlockStatement<'_>) {
        if block.body.is_empty() {
            self.write("{}");
            return;
        }
        self.write("{");
        self.indent_level += 1;
        for statement in block.body {
            self.write_newline();
            self.write_indent();
            self.print_statement(statement);
        }
        self.indent_level -= 1;
        self.write_newline();
        self.write_indent();
        self.write("}");
    }

    /// Statement conditionals always print in the parenthesized-condition
    /// form, which accepts any consequent.
    fn print_conditional_statement(&mut self, statement: &ConditionalStatement<'_>) {
        self.write("if (");
        self.print_expression(statement.condition);
        self.write(") ");
        self.print_statement(statement.consequent);
        if let Some(alternate) = statement.alternate {
            self.write(" else ");
            self.print_statement(alternate);
        }
    }

    fn print_variable_declaration(&mut self, declaration: &VariableDeclaration<'_>) {
        if declaration.constant {
            self.write("const ");
        } else if declaration.mutable {
            self.write("let mut ");
        } else {
            self.write("let ");
        }
        match &declaration.left {
            BindingPattern::Identifier(identifier) => self.write(identifier.name),
            BindingPattern::Array(pattern) => self.print_array_pattern(pattern),
        }
        if let Some(annotation) = declaration.type_annotation {
            self.write(": ");
            self.print_expression(annotation);
        }
        if let Some(initializer) = declaration.right {
            self.write(" = ");
            self.print_expression(initializer);
        }
        self.write(";");
    }

    // ========================================================================
    // Expression printing
    // ========================================================================

    fn print_expression(&mut self, expression: &Expression<'_>) {
        match expression {
            Expression::Identifier(n) => self.write(n.name),
            Expression::NumericLiteral(n) => self.print_numeric_literal(n),
            Expression::StringLiteral(n) => self.print_string_literal(n),
            Expression::BooleanLiteral(n) => {
                self.write(if n.value { "true" } else { "false" })
            }
            Expression::RegularExpressionLiteral(n) => {
                self.write("/");
                self.write(n.pattern);
                self.write("/");
                self.write(n.flags);
            }
            Expression::Array(n) => {
                self.write("[");
                self.print_comma_separated(n.elements);
                self.write("]");
            }
            Expression::Parenthesized(n) => {
                self.write("(");
                self.print_expression(n.expression);
                self.write(")");
            }
            Expression::Unary(n) => {
                self.write(n.operator.punctuation_text().unwrap_or("-"));
                self.print_expression(n.argument);
            }
            Expression::Binary(n) => {
                self.print_expression(n.left);
                self.write(" ");
                self.write(n.operator.punctuation_text().unwrap_or("?"));
                self.write(" ");
                self.print_expression(n.right);
            }
            Expression::Conditional(n) => self.print_conditional_expression(n),
            Expression::Assignment(n) => {
                match &n.left {
                    Pattern::Target(target) => self.print_expression(target),
                    Pattern::Array(pattern) => self.print_array_pattern(pattern),
                }
                self.write(" = ");
                self.print_expression(n.right);
            }
            Expression::Field(n) => {
                self.print_expression(n.object);
                self.write(".");
                self.write(n.field.name);
            }
            Expression::Index(n) => {
                self.print_expression(n.object);
                self.write("[");
                self.print_expression(n.index);
                self.write("]");
            }
            Expression::Call(n) => {
                self.print_expression(n.callee);
                self.write("(");
                self.print_comma_separated(n.arguments);
                self.write(")");
            }
        }
    }

    /// Each conditional expression prints back in the surface form it was
    /// written in: `then` form, block-bodied form, or parenthesized form.
    fn print_conditional_expression(&mut self, conditional: &ConditionalExpression<'_>) {
        if conditional.explicit_then {
            self.write("if ");
            self.print_expression(conditional.condition);
            self.write(" then ");
            self.print_branch(&conditional.consequent);
            self.write(" else ");
            self.print_branch(&conditional.alternate);
        } else if matches!(conditional.consequent, ConditionalBranch::Block(_)) {
            self.write("if ");
            self.print_expression(conditional.condition);
            self.write(" ");
            self.print_branch(&conditional.consequent);
            self.write(" else ");
            self.print_branch(&conditional.alternate);
        } else {
            self.write("if (");
            self.print_expression(conditional.condition);
            self.write(") ");
            self.print_branch(&conditional.consequent);
            self.write(" else ");
            self.print_branch(&conditional.alternate);
        }
    }

    fn print_branch(&mut self, branch: &ConditionalBranch<'_>) {
        match branch {
            ConditionalBranch::Expression(expression) => self.print_expression(expression),
            ConditionalBranch::Block(block) => self.print_block(block),
            ConditionalBranch::Conditional(nested) => self.print_conditional_expression(nested),
        }
    }

    fn print_array_pattern(&mut self, pattern: &ArrayPattern<'_>) {
        self.write("[");
        self.print_comma_separated(pattern.elements);
        self.write("]");
    }

    fn print_comma_separated(&mut self, expressions: &[Expression<'_>]) {
        for (i, expression) in expressions.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.print_expression(expression);
        }
    }

    /// Numeric literals print with their original radix prefix.
    fn print_numeric_literal(&mut self, literal: &NumericLiteral<'_>) {
        match literal.base {
            16 => self.write("0x"),
            8 => self.write("0o"),
            2 => self.write("0b"),
            _ => {}
        }
        self.write(literal.value);
    }

    fn print_string_literal(&mut self, literal: &StringLiteral<'_>) {
        self.write("\"");
        for ch in literal.value.chars() {
            match ch {
                '"' => self.write("\\\""),
                '\\' => self.write("\\\\"),
                '\n' => self.write("\\n"),
                '\r' => self.write("\\r"),
                '\t' => self.write("\\t"),
                _ => self.output.push(ch),
            }
        }
        self.write("\"");
    }

    // ========================================================================
    // Output helpers
    // ========================================================================

    fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn write_newline(&mut self) {
        self.output.push_str(&self.options.new_line);
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str(&self.options.indent_str);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mag_ast::node::NodeData;
    use mag_ast::syntax_kind::SyntaxKind;
    use mag_core::text::TextRange;

    fn data(kind: SyntaxKind) -> NodeData {
        NodeData {
            kind,
            range: TextRange::empty(0),
        }
    }

    #[test]
    fn test_print_numeric_bases() {
        let mut printer = Printer::new();
        let hex = Expression::NumericLiteral(NumericLiteral {
            data: data(SyntaxKind::NumericLiteral),
            value: "ff",
            base: 16,
        });
        assert_eq!(printer.print_expression_to_string(&hex), "0xff");
        let decimal = Expression::NumericLiteral(NumericLiteral {
            data: data(SyntaxKind::NumericLiteral),
            value: "3.14",
            base: 10,
        });
        assert_eq!(printer.print_expression_to_string(&decimal), "3.14");
    }

    #[test]
    fn test_print_string_escapes() {
        let mut printer = Printer::new();
        let string = Expression::StringLiteral(StringLiteral {
            data: data(SyntaxKind::StringLiteral),
            value: "a\"b\nc",
        });
        assert_eq!(printer.print_expression_to_string(&string), "\"a\\\"b\\nc\"");
    }
}
