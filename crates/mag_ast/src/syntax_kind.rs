//! Token and node kinds for the Mag grammar.

/// Every token and AST node kind in the Mag grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum SyntaxKind {
    Unknown,
    EndOfFileToken,

    // Literals
    NumericLiteral,
    StringLiteral,
    RegularExpressionLiteral,

    // Punctuation
    OpenBraceToken,
    CloseBraceToken,
    OpenParenToken,
    CloseParenToken,
    OpenBracketToken,
    CloseBracketToken,
    DotToken,
    SemicolonToken,
    CommaToken,
    ColonToken,

    // Comparison operators (the non-chainable group)
    LessThanToken,
    GreaterThanToken,
    LessThanEqualsToken,
    GreaterThanEqualsToken,
    EqualsEqualsToken,
    ExclamationEqualsToken,
    EqualsEqualsEqualsToken,
    ExclamationEqualsEqualsToken,

    // Arithmetic operators
    PlusToken,
    MinusToken,
    AsteriskToken,
    AsteriskAsteriskToken,
    SlashToken,
    PercentToken,

    // Assignment
    EqualsToken,

    // Identifiers and keywords
    Identifier,
    IfKeyword,
    ElseKeyword,
    ThenKeyword,
    LetKeyword,
    MutKeyword,
    ConstKeyword,
    TrueKeyword,
    FalseKeyword,

    // Node kinds
    Program,
    ExpressionStatement,
    BlockStatement,
    ConditionalStatement,
    VariableDeclaration,
    ParenthesizedExpression,
    ConditionalExpression,
    AssignmentExpression,
    BinaryExpression,
    UnaryExpression,
    FieldExpression,
    IndexExpression,
    CallExpression,
    ArrayExpression,
    ArrayPattern,
    BooleanLiteral,
}

impl SyntaxKind {
    /// Map keyword text to its token kind, or None for a plain identifier.
    pub fn from_keyword(text: &str) -> Option<SyntaxKind> {
        Some(match text {
            "if" => SyntaxKind::IfKeyword,
            "else" => SyntaxKind::ElseKeyword,
            "then" => SyntaxKind::ThenKeyword,
            "let" => SyntaxKind::LetKeyword,
            "mut" => SyntaxKind::MutKeyword,
            "const" => SyntaxKind::ConstKeyword,
            "true" => SyntaxKind::TrueKeyword,
            "false" => SyntaxKind::FalseKeyword,
            _ => return None,
        })
    }

    /// The source text of a keyword token kind.
    pub fn keyword_text(self) -> Option<&'static str> {
        Some(match self {
            SyntaxKind::IfKeyword => "if",
            SyntaxKind::ElseKeyword => "else",
            SyntaxKind::ThenKeyword => "then",
            SyntaxKind::LetKeyword => "let",
            SyntaxKind::MutKeyword => "mut",
            SyntaxKind::ConstKeyword => "const",
            SyntaxKind::TrueKeyword => "true",
            SyntaxKind::FalseKeyword => "false",
            _ => return None,
        })
    }

    /// The source text of a punctuation or operator token kind.
    pub fn punctuation_text(self) -> Option<&'static str> {
        Some(match self {
            SyntaxKind::OpenBraceToken => "{",
            SyntaxKind::CloseBraceToken => "}",
            SyntaxKind::OpenParenToken => "(",
            SyntaxKind::CloseParenToken => ")",
            SyntaxKind::OpenBracketToken => "[",
            SyntaxKind::CloseBracketToken => "]",
            SyntaxKind::DotToken => ".",
            SyntaxKind::SemicolonToken => ";",
            SyntaxKind::CommaToken => ",",
            SyntaxKind::ColonToken => ":",
            SyntaxKind::LessThanToken => "<",
            SyntaxKind::GreaterThanToken => ">",
            SyntaxKind::LessThanEqualsToken => "<=",
            SyntaxKind::GreaterThanEqualsToken => ">=",
            SyntaxKind::EqualsEqualsToken => "==",
            SyntaxKind::ExclamationEqualsToken => "!=",
            SyntaxKind::EqualsEqualsEqualsToken => "===",
            SyntaxKind::ExclamationEqualsEqualsToken => "!==",
            SyntaxKind::PlusToken => "+",
            SyntaxKind::MinusToken => "-",
            SyntaxKind::AsteriskToken => "*",
            SyntaxKind::AsteriskAsteriskToken => "**",
            SyntaxKind::SlashToken => "/",
            SyntaxKind::PercentToken => "%",
            SyntaxKind::EqualsToken => "=",
            _ => return None,
        })
    }

    /// Text for error messages: punctuation, keyword, or a generic fallback.
    pub fn display_text(self) -> &'static str {
        self.punctuation_text()
            .or_else(|| self.keyword_text())
            .unwrap_or(match self {
                SyntaxKind::Identifier => "identifier",
                SyntaxKind::EndOfFileToken => "end of file",
                _ => "token",
            })
    }
}
