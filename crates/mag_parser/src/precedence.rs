//! Operator precedence for the Mag expression ladder.

use mag_ast::syntax_kind::SyntaxKind;

/// Binary operator precedence levels from loosest to tightest binding.
///
/// The comparison level is non-associative: at most one comparison operator
/// may appear per expression level, enforced by the parser rather than here.
/// Unary, postfix and primary expressions sit above this ladder and have
/// dedicated parse functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum OperatorPrecedence {
    Comparison = 0,
    Additive = 1,
    Multiplicative = 2,
    Exponentiation = 3,
    Invalid = 255,
}

impl OperatorPrecedence {
    /// The next tighter-binding level, used when climbing into the right
    /// operand of a left-associative operator.
    pub fn next_tighter(self) -> OperatorPrecedence {
        match self {
            OperatorPrecedence::Comparison => OperatorPrecedence::Additive,
            OperatorPrecedence::Additive => OperatorPrecedence::Multiplicative,
            _ => OperatorPrecedence::Exponentiation,
        }
    }
}

/// Get the binary operator precedence for a given token kind.
pub fn get_binary_operator_precedence(kind: SyntaxKind) -> OperatorPrecedence {
    match kind {
        SyntaxKind::EqualsEqualsToken
        | SyntaxKind::ExclamationEqualsToken
        | SyntaxKind::EqualsEqualsEqualsToken
        | SyntaxKind::ExclamationEqualsEqualsToken
        | SyntaxKind::LessThanToken
        | SyntaxKind::GreaterThanToken
        | SyntaxKind::LessThanEqualsToken
        | SyntaxKind::GreaterThanEqualsToken => OperatorPrecedence::Comparison,
        SyntaxKind::PlusToken | SyntaxKind::MinusToken => OperatorPrecedence::Additive,
        SyntaxKind::AsteriskToken | SyntaxKind::SlashToken | SyntaxKind::PercentToken => {
            OperatorPrecedence::Multiplicative
        }
        SyntaxKind::AsteriskAsteriskToken => OperatorPrecedence::Exponentiation,
        _ => OperatorPrecedence::Invalid,
    }
}

/// Whether a token belongs to the non-associative comparison group.
pub fn is_comparison_operator(kind: SyntaxKind) -> bool {
    get_binary_operator_precedence(kind) == OperatorPrecedence::Comparison
}
