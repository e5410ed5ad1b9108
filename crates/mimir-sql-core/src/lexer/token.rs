//! Token types for the SQL lexer.

use core::fmt;

use super::{Keyword, Span};

/// The kind of token.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    // Literals
    /// Integer literal (e.g., 42). Unsigned: a leading `-` is its own token.
    Integer(u64),
    /// Integer literal too long for `u64`, kept as its digit text
    LargeInteger(String),
    /// Double-precision literal (e.g., 3.5, 1e10)
    Double(f64),
    /// String literal with the quotes stripped and `''` collapsed (e.g., 'it''s')
    String(String),

    // Identifiers and keywords
    /// Unquoted identifier, case preserved (e.g., column_name)
    Identifier(String),
    /// Quoted identifier with the delimiters stripped (e.g., "my col")
    QuotedIdentifier(String),
    /// Reserved keyword
    Keyword(Keyword),

    // Trivia, only produced when comments are emitted
    /// -- ...
    LineComment,
    /// /* ... */
    BlockComment,

    // Operators
    /// =
    Eq,
    /// != or <>
    NotEq,
    /// <
    Lt,
    /// <=
    LtEq,
    /// >
    Gt,
    /// >=
    GtEq,
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Star,
    /// /
    Slash,
    /// ^
    Caret,
    /// ||
    Concat,
    /// |
    BitOr,
    /// &
    BitAnd,
    /// @@
    AtAt,

    // Delimiters
    /// ;
    Semicolon,
    /// ,
    Comma,
    /// (
    LeftParen,
    /// )
    RightParen,
    /// .
    Dot,
    /// ?
    Question,

    // ODBC escapes
    /// {d
    EscapeDate,
    /// {t
    EscapeTime,
    /// {ts
    EscapeTimestamp,
    /// {fn
    EscapeFunction,
    /// }
    EscapeClose,

    // Special
    /// End of input
    Eof,
}

impl TokenKind {
    /// Returns the display text of this kind, used by diagnostics.
    ///
    /// Fixed tokens render as their quoted spelling, keywords as their
    /// upper-case text, and payload-carrying kinds as a `<CLASS>` name.
    #[must_use]
    pub const fn image(&self) -> &'static str {
        match self {
            Self::Integer(_) | Self::LargeInteger(_) => "<S_INTEGER>",
            Self::Double(_) => "<S_DOUBLE>",
            Self::String(_) => "<S_CHAR_LITERAL>",
            Self::Identifier(_) => "<S_IDENTIFIER>",
            Self::QuotedIdentifier(_) => "<S_QUOTED_IDENTIFIER>",
            Self::Keyword(kw) => kw.as_str(),
            Self::LineComment => "<LINE_COMMENT>",
            Self::BlockComment => "<MULTI_LINE_COMMENT>",
            Self::Eq => "\"=\"",
            Self::NotEq => "\"<>\"",
            Self::Lt => "\"<\"",
            Self::LtEq => "\"<=\"",
            Self::Gt => "\">\"",
            Self::GtEq => "\">=\"",
            Self::Plus => "\"+\"",
            Self::Minus => "\"-\"",
            Self::Star => "\"*\"",
            Self::Slash => "\"/\"",
            Self::Caret => "\"^\"",
            Self::Concat => "\"||\"",
            Self::BitOr => "\"|\"",
            Self::BitAnd => "\"&\"",
            Self::AtAt => "\"@@\"",
            Self::Semicolon => "\";\"",
            Self::Comma => "\",\"",
            Self::LeftParen => "\"(\"",
            Self::RightParen => "\")\"",
            Self::Dot => "\".\"",
            Self::Question => "\"?\"",
            Self::EscapeDate => "\"{d\"",
            Self::EscapeTime => "\"{t\"",
            Self::EscapeTimestamp => "\"{ts\"",
            Self::EscapeFunction => "\"{fn\"",
            Self::EscapeClose => "\"}\"",
            Self::Eof => "<EOF>",
        }
    }

    /// Returns true for comment kinds.
    #[must_use]
    pub const fn is_trivia(&self) -> bool {
        matches!(self, Self::LineComment | Self::BlockComment)
    }

    /// Returns true for literal kinds.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(
            self,
            Self::Integer(_) | Self::LargeInteger(_) | Self::Double(_) | Self::String(_)
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.image())
    }
}

/// A token with its span in the source code.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    /// The kind of token.
    pub kind: TokenKind,
    /// The location in the source code.
    pub span: Span,
    /// The exact source text covered by `span`.
    pub lexeme: &'a str,
    /// Whitespace and skipped comments between the previous token and this one.
    pub leading_trivia: Span,
}

impl<'a> Token<'a> {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span, lexeme: &'a str, leading_trivia: Span) -> Self {
        Self {
            kind,
            span,
            lexeme,
            leading_trivia,
        }
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns true if this is a keyword.
    #[must_use]
    pub const fn is_keyword(&self) -> bool {
        matches!(self.kind, TokenKind::Keyword(_))
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match &self.kind {
            TokenKind::Keyword(kw) => Some(*kw),
            _ => None,
        }
    }

    /// Returns the identifier text for quoted and unquoted identifiers.
    #[must_use]
    pub fn as_identifier(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Identifier(name) | TokenKind::QuotedIdentifier(name) => Some(name.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TokenKind::Eof => write!(f, "{} at {}", self.kind, self.span),
            kind => write!(f, "{kind} `{}` at {}", self.lexeme, self.span),
        }
    }
}
