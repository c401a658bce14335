//! Token type definitions for the Alma lexer.

use almac_i18n::Keyword;
use almac_util::{Position, Span};

/// The closed set of token tags produced by the lexer.
///
/// Keywords and punctuation carry no value; identifiers and literals
/// carry their text in [`Token::value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of the whole token stream. Repeated requests keep yielding it.
    Eof,

    /// Identifier whose first character is lowercase (or caseless).
    LowerIdent,
    /// Identifier whose first character is uppercase.
    UpperIdent,
    /// Decimal numeric literal (raw digit text as value).
    Number,
    /// String literal (decoded text as value).
    Str,

    // Keywords. Spellings are locale-dependent; see `almac_i18n`.
    /// `program`
    Program,
    /// `interactive`
    Interactive,
    /// `procedure`
    Procedure,
    /// `function`
    Function,
    /// `return`
    Return,
    /// `if`
    If,
    /// `then`
    Then,
    /// `else`
    Else,
    /// `repeat`
    Repeat,
    /// `foreach`
    Foreach,
    /// `in`
    In,
    /// `while`
    While,
    /// `switch` (a second locale spelling is accepted as an alias)
    Switch,
    /// `to`
    To,
    /// `let`
    Let,
    /// `not`
    Not,
    /// `div`
    Div,
    /// `mod`
    Mod,
    /// `type`
    Type,
    /// `is`
    Is,
    /// `record`
    Record,
    /// `variant`
    Variant,
    /// `case`
    Case,
    /// `field`
    Field,
    /// The wildcard `_`
    Underscore,
    /// `timeout`
    Timeout,

    // Punctuation. Spellings are fixed and locale-independent.
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `..`
    DotDot,
    /// `<-`
    ArrowLeft,
    /// `->`
    ArrowRight,
    /// `|`
    Pipe,
    /// `:=`
    Assign,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    Le,
    /// `>=`
    Ge,
    /// `==`
    EqEq,
    /// `/=`
    NotEq,
    /// `&&`
    AndAnd,
    /// `||`
    OrOr,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `++`
    PlusPlus,
    /// `^`
    Caret,
}

impl TokenKind {
    /// Returns true for the kinds that carry a value.
    pub fn has_value(&self) -> bool {
        matches!(
            self,
            TokenKind::LowerIdent | TokenKind::UpperIdent | TokenKind::Number | TokenKind::Str
        )
    }
}

/// Maps an abstract keyword from the locale catalog to its token tag.
pub fn keyword_kind(keyword: Keyword) -> TokenKind {
    match keyword {
        Keyword::Program => TokenKind::Program,
        Keyword::Interactive => TokenKind::Interactive,
        Keyword::Procedure => TokenKind::Procedure,
        Keyword::Function => TokenKind::Function,
        Keyword::Return => TokenKind::Return,
        Keyword::If => TokenKind::If,
        Keyword::Then => TokenKind::Then,
        Keyword::Else => TokenKind::Else,
        Keyword::Repeat => TokenKind::Repeat,
        Keyword::Foreach => TokenKind::Foreach,
        Keyword::In => TokenKind::In,
        Keyword::While => TokenKind::While,
        Keyword::Switch => TokenKind::Switch,
        Keyword::To => TokenKind::To,
        Keyword::Let => TokenKind::Let,
        Keyword::Not => TokenKind::Not,
        Keyword::Div => TokenKind::Div,
        Keyword::Mod => TokenKind::Mod,
        Keyword::Type => TokenKind::Type,
        Keyword::Is => TokenKind::Is,
        Keyword::Record => TokenKind::Record,
        Keyword::Variant => TokenKind::Variant,
        Keyword::Case => TokenKind::Case,
        Keyword::Field => TokenKind::Field,
        Keyword::Timeout => TokenKind::Timeout,
    }
}

/// A classified lexeme with its bracketing source positions.
///
/// `start` points at the token's first character; `end` points one past
/// its last character. End-of-stream tokens are zero-width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The token tag.
    pub kind: TokenKind,
    /// Raw identifier text, raw digit text, or decoded string text;
    /// `None` for keywords, punctuation, and end-of-stream.
    pub value: Option<String>,
    /// Position of the first character of the token.
    pub start: Position,
    /// Position one past the last character of the token.
    pub end: Position,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, value: Option<String>, start: Position, end: Position) -> Self {
        Self {
            kind,
            value,
            start,
            end,
        }
    }

    /// Creates a zero-width end-of-stream token at the given position.
    pub fn eof(pos: Position) -> Self {
        Self {
            kind: TokenKind::Eof,
            value: None,
            start: pos.clone(),
            end: pos,
        }
    }

    /// Returns the carried value as a `&str`, if any.
    pub fn value_str(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Returns the span bracketing this token's characters.
    pub fn span(&self) -> Span {
        Span::new(self.start.clone(), self.end.clone())
    }
}
