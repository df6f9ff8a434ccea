use std::fmt::Display;

use crate::Span;

/// Every lexical category, in match priority order.
///
/// The declaration order is significant: [`crate::lexer::rules::RULES`] is built
/// from [`TokenKind::ALL`] and the first rule that matches at the cursor wins.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    // Auxiliary
    BlockComment,
    LineComment,
    NewLine,
    Tab,
    WhiteSpace,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,
    Semicolon,
    Colon,
    Comma,

    // Numeric literals
    ScientificLiteral,
    OctalLiteral,
    FloatLiteral,
    DoubleLiteral,
    IntLiteral,
    HexLiteral,
    BinaryLiteral,

    TextBlock,
    StringLiteral,
    CharLiteral,

    // Reserved
    Void,
    Int,
    Double,
    Float,
    Public,
    Private,
    False,
    True,
    Null,
    Return,
    New,
    Class,
    If,
    Else,
    While,
    For,
    Static,
    Var,
    Final,

    EqualEqual, // ==
    Equal,      // =
    NotEqual,   // !=
    Point,
    Plus,
    Minus,
    Multiply,
    Divide,
    Caret,
    Greater,
    Less,

    Identifier,
}

impl TokenKind {
    pub const ALL: [TokenKind; 55] = [
        TokenKind::BlockComment,
        TokenKind::LineComment,
        TokenKind::NewLine,
        TokenKind::Tab,
        TokenKind::WhiteSpace,
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::OpenCurly,
        TokenKind::CloseCurly,
        TokenKind::OpenBracket,
        TokenKind::CloseBracket,
        TokenKind::Semicolon,
        TokenKind::Colon,
        TokenKind::Comma,
        TokenKind::ScientificLiteral,
        TokenKind::OctalLiteral,
        TokenKind::FloatLiteral,
        TokenKind::DoubleLiteral,
        TokenKind::IntLiteral,
        TokenKind::HexLiteral,
        TokenKind::BinaryLiteral,
        TokenKind::TextBlock,
        TokenKind::StringLiteral,
        TokenKind::CharLiteral,
        TokenKind::Void,
        TokenKind::Int,
        TokenKind::Double,
        TokenKind::Float,
        TokenKind::Public,
        TokenKind::Private,
        TokenKind::False,
        TokenKind::True,
        TokenKind::Null,
        TokenKind::Return,
        TokenKind::New,
        TokenKind::Class,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::While,
        TokenKind::For,
        TokenKind::Static,
        TokenKind::Var,
        TokenKind::Final,
        TokenKind::EqualEqual,
        TokenKind::Equal,
        TokenKind::NotEqual,
        TokenKind::Point,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Multiply,
        TokenKind::Divide,
        TokenKind::Caret,
        TokenKind::Greater,
        TokenKind::Less,
        TokenKind::Identifier,
    ];

    /// Comments, whitespace, tabs and newlines are recognised but never
    /// handed to callers of [`crate::lexer::lexer::tokenize`].
    pub fn is_auxiliary(&self) -> bool {
        matches!(
            self,
            TokenKind::BlockComment
                | TokenKind::LineComment
                | TokenKind::NewLine
                | TokenKind::Tab
                | TokenKind::WhiteSpace
        )
    }

    pub fn is_keyword(&self) -> bool {
        (TokenKind::Void..=TokenKind::Final).contains(self)
    }

    pub fn is_literal(&self) -> bool {
        (TokenKind::ScientificLiteral..=TokenKind::CharLiteral).contains(self)
            || matches!(self, TokenKind::True | TokenKind::False | TokenKind::Null)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn start(&self) -> usize {
        self.span.start.0 as usize
    }

    pub fn end(&self) -> usize {
        self.span.end.0 as usize
    }

    pub fn is_auxiliary(&self) -> bool {
        self.kind.is_auxiliary()
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_auxiliary() {
            write!(f, "{} [L{}:{}]", self.kind, self.line, self.start())
        } else {
            write!(
                f,
                "{} '{}' [L{}:{}]",
                self.kind,
                self.value,
                self.line,
                self.start()
            )
        }
    }
}

/// Drops auxiliary tokens, keeping the relative order of the rest.
pub fn filter_auxiliary(tokens: Vec<Token>) -> Vec<Token> {
    tokens.into_iter().filter(|t| !t.is_auxiliary()).collect()
}
