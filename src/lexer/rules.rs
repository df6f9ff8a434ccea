use lazy_static::lazy_static;
use regex::Regex;

use super::tokens::TokenKind;

lazy_static! {
    /// One rule per [`TokenKind`], in declaration (priority) order.
    pub static ref RULES: Vec<Rule> = TokenKind::ALL.iter().map(|kind| Rule::new(*kind)).collect();
}

/// Recognition rule for a single token kind.
///
/// The pattern is anchored at the start of the slice it is run against, so a
/// check only ever looks at text from the cursor onwards.
#[derive(Clone, Debug)]
pub struct Rule {
    pub kind: TokenKind,
    regex: Regex,
    word_bounded: bool,
    signed: bool,
}

impl Rule {
    fn new(kind: TokenKind) -> Rule {
        let (pattern, word_bounded) = pattern_for(kind);
        let anchored = if word_bounded {
            format!("^(?:{})(?-u:\\b)", pattern)
        } else {
            format!("^(?:{})", pattern)
        };

        Rule {
            kind,
            regex: Regex::new(&anchored)
                .unwrap_or_else(|e| panic!("bad pattern for {}: {}", kind, e)),
            word_bounded,
            signed: kind == TokenKind::ScientificLiteral,
        }
    }

    /// Length of the lexeme this rule recognises at the start of `rest`.
    ///
    /// `previous` is the byte just before the cursor. A word-bounded rule
    /// cannot match right after an identifier character, and a leading sign
    /// right after an operand is a binary operator, not part of a literal.
    pub fn recognise(&self, rest: &str, previous: Option<u8>) -> Option<usize> {
        if self.word_bounded && previous.is_some_and(is_word_byte) {
            return None;
        }
        if self.signed
            && previous.is_some_and(ends_operand)
            && rest.starts_with(['+', '-'])
        {
            return None;
        }

        self.regex.find(rest).map(|m| m.end()).filter(|len| *len > 0)
    }
}

fn pattern_for(kind: TokenKind) -> (&'static str, bool) {
    match kind {
        TokenKind::BlockComment => (r"(?s)/\*.*?\*/", false),
        TokenKind::LineComment => (r"//[^\n]*\n?", false),
        TokenKind::NewLine => (r"\r?\n", false),
        TokenKind::Tab => (r"\t", false),
        TokenKind::WhiteSpace => (r" +", false),

        TokenKind::OpenParen => (r"\(", false),
        TokenKind::CloseParen => (r"\)", false),
        TokenKind::OpenCurly => (r"\{", false),
        TokenKind::CloseCurly => (r"\}", false),
        TokenKind::OpenBracket => (r"\[", false),
        TokenKind::CloseBracket => (r"\]", false),
        TokenKind::Semicolon => (r";", false),
        TokenKind::Colon => (r":", false),
        TokenKind::Comma => (r",", false),

        TokenKind::ScientificLiteral => (r"[+-]?[0-9]+(?:\.[0-9]+)?[eE][+-]?[0-9]+", true),
        TokenKind::OctalLiteral => (r"0[0-7]+", true),
        TokenKind::FloatLiteral => (r"[0-9]{1,9}\.[0-9]{1,16}", true),
        TokenKind::DoubleLiteral => (r"[0-9]{1,9}\.[0-9]{1,32}", true),
        TokenKind::IntLiteral => (r"[0-9]{1,9}", true),
        TokenKind::HexLiteral => (r"0[xX][0-9a-fA-F]+", true),
        TokenKind::BinaryLiteral => (r"0[bB][01]+", true),

        TokenKind::TextBlock => (r#"(?s)"""(?:[^\\]|\\.)*?""""#, false),
        TokenKind::StringLiteral => (r#""(?:[^"\\\n]|\\.)*""#, false),
        TokenKind::CharLiteral => (r"'(?:[^'\\\n]|\\[nt])'", false),

        TokenKind::Void => ("void", true),
        TokenKind::Int => ("int", true),
        TokenKind::Double => ("double", true),
        TokenKind::Float => ("float", true),
        TokenKind::Public => ("public", true),
        TokenKind::Private => ("private", true),
        TokenKind::False => ("false", true),
        TokenKind::True => ("true", true),
        TokenKind::Null => ("null", true),
        TokenKind::Return => ("return", true),
        TokenKind::New => ("new", true),
        TokenKind::Class => ("class", true),
        TokenKind::If => ("if", true),
        TokenKind::Else => ("else", true),
        TokenKind::While => ("while", true),
        TokenKind::For => ("for", true),
        TokenKind::Static => ("static", true),
        TokenKind::Var => ("var", true),
        TokenKind::Final => ("final", true),

        TokenKind::EqualEqual => (r"==", false),
        TokenKind::Equal => (r"=", false),
        TokenKind::NotEqual => (r"!=", false),
        TokenKind::Point => (r"\.", false),
        TokenKind::Plus => (r"\+", false),
        TokenKind::Minus => (r"-", false),
        TokenKind::Multiply => (r"\*", false),
        TokenKind::Divide => (r"/", false),
        TokenKind::Caret => (r"\^", false),
        TokenKind::Greater => (r">", false),
        TokenKind::Less => (r"<", false),

        TokenKind::Identifier => (r"[a-zA-Z][0-9a-zA-Z_]{0,31}", true),
    }
}

pub(crate) fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn ends_operand(b: u8) -> bool {
    is_word_byte(b) || b == b')' || b == b']'
}

/// Tries every rule at `offset` in priority order and returns the first hit.
///
/// Panics if `offset` is not inside `source`: the scan loop never asks for a
/// match past the end of the buffer.
pub fn match_at(source: &str, offset: usize) -> Option<(TokenKind, usize)> {
    assert!(
        offset < source.len(),
        "illegal index {} in the input stream of length {}",
        offset,
        source.len()
    );

    let rest = &source[offset..];
    let previous = offset.checked_sub(1).map(|i| source.as_bytes()[i]);

    RULES
        .iter()
        .find_map(|rule| rule.recognise(rest, previous).map(|len| (rule.kind, len)))
}
