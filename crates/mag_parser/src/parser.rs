//! The Mag parser implementation.
//!
//! A recursive descent parser with bounded backtracking: ordered-choice
//! points save the scanner state and roll back on failure. It consumes
//! tokens from the scanner and builds an arena-allocated AST. Parsing is
//! fail-fast: the first syntax error aborts the whole parse.

use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;
use mag_ast::node::*;
use mag_ast::syntax_kind::SyntaxKind;
use mag_ast::types::TokenFlags;
use mag_core::text::LineMap;
use mag_diagnostics::{messages, DiagnosticMessage, SyntaxError};
use mag_scanner::Scanner;

use crate::precedence::{
    get_binary_operator_precedence, is_comparison_operator, OperatorPrecedence,
};

/// Maximum recursion depth to prevent stack overflow on deeply nested input.
const MAX_RECURSION_DEPTH: u32 = 200;

pub type ParseResult<T> = Result<T, SyntaxError>;

/// The parser produces a Program AST from Mag source text.
pub struct Parser<'a> {
    arena: &'a Bump,
    scanner: Scanner,
    line_map: LineMap,
    source_len: u32,
    /// End position of the most recently consumed token.
    last_end: u32,
    /// Tracks recursion depth to prevent stack overflow on deeply nested input.
    recursion_depth: u32,
}

impl<'a> Parser<'a> {
    pub fn new(arena: &'a Bump, source_text: &str) -> Self {
        let scanner = Scanner::new(source_text);
        let source_len = scanner.text_len() as u32;
        Self {
            arena,
            scanner,
            line_map: LineMap::new(source_text),
            source_len,
            last_end: 0,
            recursion_depth: 0,
        }
    }

    /// Parse a whole source file into a [`Program`].
    pub fn parse_program(mut self) -> ParseResult<Program<'a>> {
        self.next_token()?;
        let body = self.parse_statements(None)?;
        if self.token() != SyntaxKind::EndOfFileToken {
            return Err(self.error_at_token(&messages::DECLARATION_OR_STATEMENT_EXPECTED, &[]));
        }
        Ok(Program {
            data: NodeData::new(SyntaxKind::Program, 0, self.source_len),
            body,
        })
    }

    /// Parse the source text as a single bare expression.
    pub fn parse_expression(mut self) -> ParseResult<Expression<'a>> {
        self.next_token()?;
        let expression = self.parse_expr()?;
        if self.token() != SyntaxKind::EndOfFileToken {
            return Err(self.error_at_token(&messages::UNEXPECTED_TOKEN, &[]));
        }
        Ok(expression)
    }

    // ========================================================================
    // Token management
    // ========================================================================

    #[inline]
    fn token(&self) -> SyntaxKind {
        self.scanner.token()
    }

    fn next_token(&mut self) -> ParseResult<SyntaxKind> {
        self.last_end = self.scanner.token_end() as u32;
        let kind = self.scanner.scan();
        if let Some(error) = self.scanner.take_error() {
            return Err(self.attach_position(error));
        }
        Ok(kind)
    }

    #[inline]
    fn token_pos(&self) -> u32 {
        self.scanner.token_start() as u32
    }

    #[inline]
    fn token_end(&self) -> u32 {
        self.scanner.token_end() as u32
    }

    fn expect(&mut self, kind: SyntaxKind) -> ParseResult<()> {
        if self.token() == kind {
            self.next_token()?;
            Ok(())
        } else {
            Err(self.error_at_token(&messages::_0_EXPECTED, &[kind.display_text()]))
        }
    }

    fn eat(&mut self, kind: SyntaxKind) -> ParseResult<bool> {
        if self.token() == kind {
            self.next_token()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Try an ordered-choice alternative, rolling the scanner back on failure.
    fn try_parse<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> Option<T> {
        let state = self.scanner.save_state();
        let saved_last_end = self.last_end;
        let saved_depth = self.recursion_depth;
        match f(self) {
            Ok(value) => Some(value),
            Err(_) => {
                self.scanner.restore_state(state);
                self.last_end = saved_last_end;
                self.recursion_depth = saved_depth;
                None
            }
        }
    }

    fn enter_recursion(&mut self) -> ParseResult<()> {
        self.recursion_depth += 1;
        if self.recursion_depth > MAX_RECURSION_DEPTH {
            return Err(self.error_at_token(&messages::NESTING_DEPTH_EXCEEDED, &[]));
        }
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    // ========================================================================
    // Error construction
    // ========================================================================

    fn error_at_token(&self, message: &DiagnosticMessage, args: &[&str]) -> SyntaxError {
        let span = self.scanner.token_span();
        let position = self.line_map.line_and_column_of(span.start);
        SyntaxError::at(span, message, args).with_position(position)
    }

    fn error_at_node(&self, data: &NodeData, message: &DiagnosticMessage) -> SyntaxError {
        let span = data.range.to_span();
        let position = self.line_map.line_and_column_of(span.start);
        SyntaxError::at(span, message, &[]).with_position(position)
    }

    fn attach_position(&self, error: SyntaxError) -> SyntaxError {
        match (error.position.is_none(), error.span) {
            (true, Some(span)) => {
                let position = self.line_map.line_and_column_of(span.start);
                error.with_position(position)
            }
            _ => error,
        }
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn parse_statements(
        &mut self,
        terminator: Option<SyntaxKind>,
    ) -> ParseResult<&'a [Statement<'a>]> {
        let mut statements = BumpVec::new_in(self.arena);
        loop {
            let token = self.token();
            if token == SyntaxKind::EndOfFileToken || Some(token) == terminator {
                break;
            }
            statements.push(self.parse_statement()?);
        }
        Ok(statements.into_bump_slice())
    }

    fn parse_statement(&mut self) -> ParseResult<Statement<'a>> {
        self.enter_recursion()?;
        let result = self.parse_statement_worker();
        self.exit_recursion();
        result
    }

    fn parse_statement_worker(&mut self) -> ParseResult<Statement<'a>> {
        match self.token() {
            SyntaxKind::OpenBraceToken => Ok(Statement::Block(self.parse_block_statement()?)),
            SyntaxKind::IfKeyword => {
                Ok(Statement::Conditional(self.parse_conditional_statement()?))
            }
            SyntaxKind::LetKeyword | SyntaxKind::ConstKeyword => Ok(
                Statement::VariableDeclaration(self.parse_variable_declaration()?),
            ),
            SyntaxKind::EndOfFileToken | SyntaxKind::CloseBraceToken => {
                Err(self.error_at_token(&messages::DECLARATION_OR_STATEMENT_EXPECTED, &[]))
            }
            _ => Ok(Statement::Expression(self.parse_expression_statement()?)),
        }
    }

    fn parse_block_statement(&mut self) -> ParseResult<BlockStatement<'a>> {
        let pos = self.token_pos();
        self.expect(SyntaxKind::OpenBraceToken)?;
        let body = self.parse_statements(Some(SyntaxKind::CloseBraceToken))?;
        self.expect(SyntaxKind::CloseBraceToken)?;
        Ok(BlockStatement {
            data: NodeData::new(SyntaxKind::BlockStatement, pos, self.last_end),
            body,
        })
    }

    /// An expression in statement position parses at comparison level, so an
    /// assignment or `if` expression must be parenthesized to stand alone.
    fn parse_expression_statement(&mut self) -> ParseResult<ExpressionStatement<'a>> {
        let pos = self.token_pos();
        let expression = self.parse_comparison()?;
        self.expect(SyntaxKind::SemicolonToken)?;
        let expression = &*self.arena.alloc(expression);
        Ok(ExpressionStatement {
            data: NodeData::new(SyntaxKind::ExpressionStatement, pos, self.last_end),
            expression,
        })
    }

    fn parse_conditional_statement(&mut self) -> ParseResult<ConditionalStatement<'a>> {
        let pos = self.token_pos();
        self.expect(SyntaxKind::IfKeyword)?;

        if self.token() == SyntaxKind::OpenParenToken {
            // Could be a parenthesized condition, or a parenthesized
            // expression starting a bare-block condition. Ordered choice.
            if let Some(statement) =
                self.try_parse(|p| p.parse_paren_conditional_statement(pos))
            {
                return Ok(statement);
            }
        }

        // Bare condition: the consequent must be a block.
        let condition = self.parse_comparison()?;
        if self.token() != SyntaxKind::OpenBraceToken {
            return Err(self.error_at_token(
                &messages::A_BARE_IF_CONDITION_REQUIRES_A_BLOCK_CONSEQUENT,
                &[],
            ));
        }
        let block = self.parse_block_statement()?;
        let condition = &*self.arena.alloc(condition);
        let consequent = &*self.arena.alloc(Statement::Block(block));
        let alternate = self.parse_else_alternate()?;
        Ok(ConditionalStatement {
            data: NodeData::new(SyntaxKind::ConditionalStatement, pos, self.last_end),
            condition,
            consequent,
            alternate,
        })
    }

    fn parse_paren_conditional_statement(
        &mut self,
        pos: u32,
    ) -> ParseResult<ConditionalStatement<'a>> {
        self.expect(SyntaxKind::OpenParenToken)?;
        let condition = self.parse_expr()?;
        self.expect(SyntaxKind::CloseParenToken)?;
        let consequent = self.parse_statement()?;
        let condition = &*self.arena.alloc(condition);
        let consequent = &*self.arena.alloc(consequent);
        let alternate = self.parse_else_alternate()?;
        Ok(ConditionalStatement {
            data: NodeData::new(SyntaxKind::ConditionalStatement, pos, self.last_end),
            condition,
            consequent,
            alternate,
        })
    }

    fn parse_else_alternate(&mut self) -> ParseResult<Option<&'a Statement<'a>>> {
        if self.eat(SyntaxKind::ElseKeyword)? {
            let statement = self.parse_statement()?;
            Ok(Some(&*self.arena.alloc(statement)))
        } else {
            Ok(None)
        }
    }

    fn parse_variable_declaration(&mut self) -> ParseResult<VariableDeclaration<'a>> {
        let pos = self.token_pos();
        let constant = self.token() == SyntaxKind::ConstKeyword;
        self.next_token()?; // let / const
        let mutable = !constant && self.eat(SyntaxKind::MutKeyword)?;

        let left = match self.token() {
            SyntaxKind::Identifier => BindingPattern::Identifier(self.parse_identifier()?),
            SyntaxKind::OpenBracketToken => BindingPattern::Array(self.parse_binding_array()?),
            _ => return Err(self.error_at_token(&messages::IDENTIFIER_EXPECTED, &[])),
        };

        let type_annotation = if self.eat(SyntaxKind::ColonToken)? {
            let annotation = self.parse_comparison()?;
            Some(&*self.arena.alloc(annotation))
        } else {
            None
        };

        let right = if self.eat(SyntaxKind::EqualsToken)? {
            let initializer = self.parse_expr()?;
            Some(&*self.arena.alloc(initializer))
        } else {
            None
        };

        self.expect(SyntaxKind::SemicolonToken)?;
        Ok(VariableDeclaration {
            data: NodeData::new(SyntaxKind::VariableDeclaration, pos, self.last_end),
            constant,
            mutable,
            left,
            type_annotation,
            right,
        })
    }

    /// `[a, b, c]` in declaration position: every element is a plain name.
    fn parse_binding_array(&mut self) -> ParseResult<ArrayPattern<'a>> {
        let pos = self.token_pos();
        self.expect(SyntaxKind::OpenBracketToken)?;
        let mut elements = BumpVec::new_in(self.arena);
        if self.token() != SyntaxKind::CloseBracketToken {
            loop {
                let identifier = self.parse_identifier()?;
                elements.push(Expression::Identifier(identifier));
                if !self.eat(SyntaxKind::CommaToken)? {
                    break;
                }
            }
        }
        self.expect(SyntaxKind::CloseBracketToken)?;
        Ok(ArrayPattern {
            data: NodeData::new(SyntaxKind::ArrayPattern, pos, self.last_end),
            elements: elements.into_bump_slice(),
        })
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    /// Full expression entry: conditional expressions and assignments live
    /// here, above the comparison ladder.
    fn parse_expr(&mut self) -> ParseResult<Expression<'a>> {
        self.enter_recursion()?;
        let result = self.parse_expr_worker();
        self.exit_recursion();
        result
    }

    fn parse_expr_worker(&mut self) -> ParseResult<Expression<'a>> {
        if self.token() == SyntaxKind::IfKeyword {
            let conditional = self.parse_conditional_expression()?;
            return Ok(Expression::Conditional(conditional));
        }

        let pos = self.token_pos();
        let expression = self.parse_comparison()?;
        if self.token() == SyntaxKind::EqualsToken {
            let left = self.to_assignment_pattern(expression)?;
            self.next_token()?;
            let right = self.parse_expr()?;
            let right = &*self.arena.alloc(right);
            return Ok(Expression::Assignment(AssignmentExpression {
                data: NodeData::new(SyntaxKind::AssignmentExpression, pos, self.last_end),
                left,
                right,
            }));
        }
        Ok(expression)
    }

    /// Reinterpret a parsed expression as an assignment target. Array
    /// literals become array patterns; anything that is not an identifier,
    /// field access or index access is rejected.
    fn to_assignment_pattern(&self, expression: Expression<'a>) -> ParseResult<Pattern<'a>> {
        match expression {
            Expression::Identifier(_) | Expression::Field(_) | Expression::Index(_) => {
                Ok(Pattern::Target(&*self.arena.alloc(expression)))
            }
            Expression::Array(array) => {
                for element in array.elements {
                    if !is_assignment_target(element) {
                        return Err(self
                            .error_at_node(element.data(), &messages::INVALID_ASSIGNMENT_TARGET));
                    }
                }
                Ok(Pattern::Array(ArrayPattern {
                    data: NodeData {
                        kind: SyntaxKind::ArrayPattern,
                        range: array.data.range,
                    },
                    elements: array.elements,
                }))
            }
            other => {
                Err(self.error_at_node(other.data(), &messages::INVALID_ASSIGNMENT_TARGET))
            }
        }
    }

    /// Comparison level: non-associative, so at most one operator from the
    /// comparator group may appear. A second one is a hard error rather
    /// than a silent associativity choice.
    fn parse_comparison(&mut self) -> ParseResult<Expression<'a>> {
        let pos = self.token_pos();
        let left = self.parse_binary(OperatorPrecedence::Additive)?;
        if !is_comparison_operator(self.token()) {
            return Ok(left);
        }
        let operator = self.token();
        self.next_token()?;
        let right = self.parse_binary(OperatorPrecedence::Additive)?;
        if is_comparison_operator(self.token()) {
            return Err(
                self.error_at_token(&messages::COMPARISON_OPERATORS_CANNOT_BE_CHAINED, &[])
            );
        }
        Ok(self.make_binary(pos, operator, left, right))
    }

    /// Precedence climbing over the left-associative arithmetic tiers.
    ///
    /// Recursion here is bounded by the height of the precedence ladder, not
    /// by the length of the operator chain.
    fn parse_binary(
        &mut self,
        min_precedence: OperatorPrecedence,
    ) -> ParseResult<Expression<'a>> {
        let pos = self.token_pos();
        let mut left = self.parse_exponentiation()?;
        loop {
            let precedence = get_binary_operator_precedence(self.token());
            if precedence == OperatorPrecedence::Invalid || precedence < min_precedence {
                break;
            }
            let operator = self.token();
            self.next_token()?;
            let right = self.parse_binary(precedence.next_tighter())?;
            left = self.make_binary(pos, operator, left, right);
        }
        Ok(left)
    }

    /// `**` is right-associative: `1 ** 2 ** 3` is `1 ** (2 ** 3)`. Operands
    /// are collected iteratively and folded from the right, so chain length
    /// does not consume stack.
    fn parse_exponentiation(&mut self) -> ParseResult<Expression<'a>> {
        let mut bases = Vec::new();
        let mut expression = loop {
            let pos = self.token_pos();
            let operand = self.parse_unary()?;
            if self.token() != SyntaxKind::AsteriskAsteriskToken {
                break operand;
            }
            self.next_token()?;
            bases.push((pos, operand));
        };
        while let Some((pos, base)) = bases.pop() {
            expression =
                self.make_binary(pos, SyntaxKind::AsteriskAsteriskToken, base, expression);
        }
        Ok(expression)
    }

    fn make_binary(
        &self,
        pos: u32,
        operator: SyntaxKind,
        left: Expression<'a>,
        right: Expression<'a>,
    ) -> Expression<'a> {
        let left = &*self.arena.alloc(left);
        let right = &*self.arena.alloc(right);
        Expression::Binary(BinaryExpression {
            data: NodeData::new(SyntaxKind::BinaryExpression, pos, self.last_end),
            operator,
            left,
            right,
        })
    }

    /// Prefix minus chains are consumed iteratively and wrapped innermost
    /// first, for the same stack-safety reason as exponentiation.
    fn parse_unary(&mut self) -> ParseResult<Expression<'a>> {
        let mut minus_positions = Vec::new();
        while self.token() == SyntaxKind::MinusToken {
            minus_positions.push(self.token_pos());
            self.next_token()?;
        }
        let mut expression = self.parse_postfix()?;
        while let Some(pos) = minus_positions.pop() {
            let argument = &*self.arena.alloc(expression);
            expression = Expression::Unary(UnaryExpression {
                data: NodeData::new(SyntaxKind::UnaryExpression, pos, self.last_end),
                operator: SyntaxKind::MinusToken,
                argument,
            });
        }
        Ok(expression)
    }

    /// Postfix chain: `.name`, `[index]` and `(args)` compose freely
    /// left-to-right on top of a primary expression.
    fn parse_postfix(&mut self) -> ParseResult<Expression<'a>> {
        let pos = self.token_pos();
        let mut expression = self.parse_primary()?;
        loop {
            match self.token() {
                SyntaxKind::DotToken => {
                    self.next_token()?;
                    let field = self.parse_identifier()?;
                    let object = &*self.arena.alloc(expression);
                    expression = Expression::Field(FieldExpression {
                        data: NodeData::new(SyntaxKind::FieldExpression, pos, self.last_end),
                        object,
                        field,
                    });
                }
                SyntaxKind::OpenBracketToken => {
                    self.next_token()?;
                    let index = self.parse_expr()?;
                    self.expect(SyntaxKind::CloseBracketToken)?;
                    let object = &*self.arena.alloc(expression);
                    let index = &*self.arena.alloc(index);
                    expression = Expression::Index(IndexExpression {
                        data: NodeData::new(SyntaxKind::IndexExpression, pos, self.last_end),
                        object,
                        index,
                    });
                }
                SyntaxKind::OpenParenToken => {
                    let arguments = self.parse_argument_list()?;
                    let callee = &*self.arena.alloc(expression);
                    expression = Expression::Call(CallExpression {
                        data: NodeData::new(SyntaxKind::CallExpression, pos, self.last_end),
                        callee,
                        arguments,
                    });
                }
                _ => break,
            }
        }
        Ok(expression)
    }

    fn parse_argument_list(&mut self) -> ParseResult<&'a [Expression<'a>]> {
        self.expect(SyntaxKind::OpenParenToken)?;
        let mut arguments = BumpVec::new_in(self.arena);
        if self.token() != SyntaxKind::CloseParenToken {
            loop {
                arguments.push(self.parse_expr()?);
                if !self.eat(SyntaxKind::CommaToken)? {
                    break;
                }
            }
        }
        self.expect(SyntaxKind::CloseParenToken)?;
        Ok(arguments.into_bump_slice())
    }

    fn parse_primary(&mut self) -> ParseResult<Expression<'a>> {
        match self.token() {
            SyntaxKind::Identifier => Ok(Expression::Identifier(self.parse_identifier()?)),
            SyntaxKind::NumericLiteral => self.parse_numeric_literal(),
            SyntaxKind::StringLiteral => {
                let pos = self.token_pos();
                let end = self.token_end();
                let value = &*self.arena.alloc_str(self.scanner.token_value());
                self.next_token()?;
                Ok(Expression::StringLiteral(StringLiteral {
                    data: NodeData::new(SyntaxKind::StringLiteral, pos, end),
                    value,
                }))
            }
            SyntaxKind::TrueKeyword | SyntaxKind::FalseKeyword => {
                let pos = self.token_pos();
                let end = self.token_end();
                let value = self.token() == SyntaxKind::TrueKeyword;
                self.next_token()?;
                Ok(Expression::BooleanLiteral(BooleanLiteral {
                    data: NodeData::new(SyntaxKind::BooleanLiteral, pos, end),
                    value,
                }))
            }
            SyntaxKind::SlashToken => self.parse_regular_expression_literal(),
            SyntaxKind::OpenParenToken => {
                let pos = self.token_pos();
                self.next_token()?;
                let inner = self.parse_expr()?;
                self.expect(SyntaxKind::CloseParenToken)?;
                let expression = &*self.arena.alloc(inner);
                Ok(Expression::Parenthesized(ParenthesizedExpression {
                    data: NodeData::new(SyntaxKind::ParenthesizedExpression, pos, self.last_end),
                    expression,
                }))
            }
            SyntaxKind::OpenBracketToken => self.parse_array_literal(),
            SyntaxKind::IfKeyword => {
                Ok(Expression::Conditional(self.parse_conditional_expression()?))
            }
            _ => Err(self.error_at_token(&messages::EXPRESSION_EXPECTED, &[])),
        }
    }

    fn parse_identifier(&mut self) -> ParseResult<Identifier<'a>> {
        if self.token() != SyntaxKind::Identifier {
            return Err(self.error_at_token(&messages::IDENTIFIER_EXPECTED, &[]));
        }
        let pos = self.token_pos();
        let end = self.token_end();
        let name = &*self.arena.alloc_str(self.scanner.token_value());
        self.next_token()?;
        Ok(Identifier {
            data: NodeData::new(SyntaxKind::Identifier, pos, end),
            name,
        })
    }

    /// Numeric literals keep their digit text; the radix prefix and any `_`
    /// separators are stripped, with the radix recorded in `base`.
    fn parse_numeric_literal(&mut self) -> ParseResult<Expression<'a>> {
        let pos = self.token_pos();
        let end = self.token_end();
        let flags = self.scanner.token_flags();
        let base = flags.numeric_base();
        let raw = self.scanner.token_value();
        let mut digits = if base == 10 {
            raw.to_string()
        } else {
            raw[2..].to_string()
        };
        if flags.contains(TokenFlags::CONTAINS_SEPARATOR) {
            digits.retain(|c| c != '_');
        }
        if digits.is_empty() {
            return Err(self.error_at_token(&messages::UNEXPECTED_TOKEN, &[]));
        }
        let value = &*self.arena.alloc_str(&digits);
        self.next_token()?;
        Ok(Expression::NumericLiteral(NumericLiteral {
            data: NodeData::new(SyntaxKind::NumericLiteral, pos, end),
            value,
            base,
        }))
    }

    fn parse_regular_expression_literal(&mut self) -> ParseResult<Expression<'a>> {
        let pos = self.token_pos();
        self.scanner.rescan_slash_token();
        if let Some(error) = self.scanner.take_error() {
            return Err(self.attach_position(error));
        }
        let end = self.token_end();
        let pattern = &*self.arena.alloc_str(self.scanner.token_value());
        let flags = &*self.arena.alloc_str(self.scanner.regex_flags());
        self.next_token()?;
        Ok(Expression::RegularExpressionLiteral(
            RegularExpressionLiteral {
                data: NodeData::new(SyntaxKind::RegularExpressionLiteral, pos, end),
                pattern,
                flags,
            },
        ))
    }

    fn parse_array_literal(&mut self) -> ParseResult<Expression<'a>> {
        let pos = self.token_pos();
        self.expect(SyntaxKind::OpenBracketToken)?;
        let mut elements = BumpVec::new_in(self.arena);
        if self.token() != SyntaxKind::CloseBracketToken {
            loop {
                elements.push(self.parse_expr()?);
                if !self.eat(SyntaxKind::CommaToken)? {
                    break;
                }
            }
        }
        self.expect(SyntaxKind::CloseBracketToken)?;
        Ok(Expression::Array(ArrayExpression {
            data: NodeData::new(SyntaxKind::ArrayExpression, pos, self.last_end),
            elements: elements.into_bump_slice(),
        }))
    }

    // ========================================================================
    // Conditional expressions (three surface forms)
    // ========================================================================

    fn parse_conditional_expression(&mut self) -> ParseResult<ConditionalExpression<'a>> {
        self.enter_recursion()?;
        let result = self.parse_conditional_expression_worker();
        self.exit_recursion();
        result
    }

    fn parse_conditional_expression_worker(
        &mut self,
    ) -> ParseResult<ConditionalExpression<'a>> {
        let pos = self.token_pos();
        self.expect(SyntaxKind::IfKeyword)?;

        if self.token() == SyntaxKind::OpenParenToken {
            if let Some(conditional) =
                self.try_parse(|p| p.parse_paren_conditional_expression(pos))
            {
                return Ok(conditional);
            }
        }

        let condition = self.parse_comparison()?;
        let condition = &*self.arena.alloc(condition);
        match self.token() {
            SyntaxKind::ThenKeyword => {
                self.next_token()?;
                let consequent = self.parse_branch_expression()?;
                self.expect_else()?;
                let alternate = self.parse_branch_expression()?;
                Ok(ConditionalExpression {
                    data: NodeData::new(SyntaxKind::ConditionalExpression, pos, self.last_end),
                    condition,
                    consequent,
                    alternate,
                    explicit_then: true,
                })
            }
            SyntaxKind::OpenBraceToken => {
                let block = self.parse_block_statement()?;
                let consequent = ConditionalBranch::Block(&*self.arena.alloc(block));
                self.expect_else()?;
                let alternate = match self.token() {
                    SyntaxKind::IfKeyword => {
                        let nested = self.parse_conditional_expression()?;
                        ConditionalBranch::Conditional(&*self.arena.alloc(nested))
                    }
                    SyntaxKind::OpenBraceToken => {
                        let block = self.parse_block_statement()?;
                        ConditionalBranch::Block(&*self.arena.alloc(block))
                    }
                    _ => {
                        return Err(self.error_at_token(
                            &messages::AN_ELSE_BRANCH_OF_A_BLOCK_IF_EXPRESSION_MUST_BE_A_BLOCK_OR_IF,
                            &[],
                        ))
                    }
                };
                Ok(ConditionalExpression {
                    data: NodeData::new(SyntaxKind::ConditionalExpression, pos, self.last_end),
                    condition,
                    consequent,
                    alternate,
                    explicit_then: false,
                })
            }
            _ => Err(self.error_at_token(
                &messages::A_BARE_IF_CONDITION_REQUIRES_A_BLOCK_CONSEQUENT,
                &[],
            )),
        }
    }

    fn parse_paren_conditional_expression(
        &mut self,
        pos: u32,
    ) -> ParseResult<ConditionalExpression<'a>> {
        self.expect(SyntaxKind::OpenParenToken)?;
        let condition = self.parse_expr()?;
        self.expect(SyntaxKind::CloseParenToken)?;
        let condition = &*self.arena.alloc(condition);
        let consequent = self.parse_branch_expression()?;
        self.expect_else()?;
        let alternate = self.parse_branch_expression()?;
        Ok(ConditionalExpression {
            data: NodeData::new(SyntaxKind::ConditionalExpression, pos, self.last_end),
            condition,
            consequent,
            alternate,
            explicit_then: false,
        })
    }

    fn parse_branch_expression(&mut self) -> ParseResult<ConditionalBranch<'a>> {
        let expression = self.parse_expr()?;
        Ok(ConditionalBranch::Expression(
            &*self.arena.alloc(expression),
        ))
    }

    fn expect_else(&mut self) -> ParseResult<()> {
        if self.token() != SyntaxKind::ElseKeyword {
            return Err(
                self.error_at_token(&messages::AN_IF_EXPRESSION_REQUIRES_AN_ELSE_BRANCH, &[])
            );
        }
        self.next_token()?;
        Ok(())
    }
}

fn is_assignment_target(expression: &Expression<'_>) -> bool {
    matches!(
        expression,
        Expression::Identifier(_) | Expression::Field(_) | Expression::Index(_)
    )
}
