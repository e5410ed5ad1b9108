//! Reserved keywords of the Mimir SQL dialect.
//!
//! The table is a `match` compiled into the binary, so it is immutable and
//! shared by every lexer without synchronization.

use core::fmt;

/// Reserved SQL keywords, including the uncertain-data extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Keyword {
    // Uncertain-data extensions
    Uncertain,
    Analyze,
    Explain,
    Assume,
    Lens,
    Feedback,

    // Queries
    Select,
    From,
    Where,
    Group,
    By,
    Having,
    Order,
    Asc,
    Desc,
    Limit,
    Offset,
    Top,
    Distinct,
    All,
    As,
    With,

    // Joins
    Join,
    Inner,
    Outer,
    Left,
    Right,
    Full,
    Natural,
    On,
    Using,

    // Set operations
    Union,
    Intersect,

    // Predicates
    And,
    Or,
    Not,
    Is,
    In,
    Like,
    Escape,
    Between,
    Exists,
    Any,
    Some,
    Null,

    // Conditional expressions
    Case,
    When,
    Then,
    Else,
    End,

    // Data manipulation
    Insert,
    Into,
    Values,
    Update,
    Set,
    Delete,
    Replace,
    Truncate,

    // Data definition
    Create,
    Drop,
    Table,
    View,
    Index,
    Primary,
    Key,

    // Procedural
    Let,
    Do,
    Begin,
    Open,
}

impl Keyword {
    /// Every keyword, in declaration order.
    pub const ALL: [Self; 69] = [
        Self::Uncertain,
        Self::Analyze,
        Self::Explain,
        Self::Assume,
        Self::Lens,
        Self::Feedback,
        Self::Select,
        Self::From,
        Self::Where,
        Self::Group,
        Self::By,
        Self::Having,
        Self::Order,
        Self::Asc,
        Self::Desc,
        Self::Limit,
        Self::Offset,
        Self::Top,
        Self::Distinct,
        Self::All,
        Self::As,
        Self::With,
        Self::Join,
        Self::Inner,
        Self::Outer,
        Self::Left,
        Self::Right,
        Self::Full,
        Self::Natural,
        Self::On,
        Self::Using,
        Self::Union,
        Self::Intersect,
        Self::And,
        Self::Or,
        Self::Not,
        Self::Is,
        Self::In,
        Self::Like,
        Self::Escape,
        Self::Between,
        Self::Exists,
        Self::Any,
        Self::Some,
        Self::Null,
        Self::Case,
        Self::When,
        Self::Then,
        Self::Else,
        Self::End,
        Self::Insert,
        Self::Into,
        Self::Values,
        Self::Update,
        Self::Set,
        Self::Delete,
        Self::Replace,
        Self::Truncate,
        Self::Create,
        Self::Drop,
        Self::Table,
        Self::View,
        Self::Index,
        Self::Primary,
        Self::Key,
        Self::Let,
        Self::Do,
        Self::Begin,
        Self::Open,
    ];

    /// Looks up a keyword (case-insensitive, exact match).
    ///
    /// Text whose length falls outside the keyword lengths is rejected
    /// before any case folding.
    #[must_use]
    pub fn lookup(text: &str) -> Option<Self> {
        if !(2..=9).contains(&text.len()) || !text.is_ascii() {
            return None;
        }
        match text.to_ascii_uppercase().as_str() {
            "AS" => Some(Self::As),
            "UNCERTAIN" => Some(Self::Uncertain),
            "ANALYZE" => Some(Self::Analyze),
            "EXPLAIN" => Some(Self::Explain),
            "ASSUME" => Some(Self::Assume),
            "VIEW" => Some(Self::View),
            "LENS" => Some(Self::Lens),
            "LET" => Some(Self::Let),
            "BY" => Some(Self::By),
            "DO" => Some(Self::Do),
            "IS" => Some(Self::Is),
            "IN" => Some(Self::In),
            "OR" => Some(Self::Or),
            "ON" => Some(Self::On),
            "ALL" => Some(Self::All),
            "AND" => Some(Self::And),
            "ANY" => Some(Self::Any),
            "KEY" => Some(Self::Key),
            "NOT" => Some(Self::Not),
            "SET" => Some(Self::Set),
            "ASC" => Some(Self::Asc),
            "TOP" => Some(Self::Top),
            "END" => Some(Self::End),
            "DESC" => Some(Self::Desc),
            "INTO" => Some(Self::Into),
            "NULL" => Some(Self::Null),
            "LIKE" => Some(Self::Like),
            "DROP" => Some(Self::Drop),
            "JOIN" => Some(Self::Join),
            "LEFT" => Some(Self::Left),
            "FROM" => Some(Self::From),
            "OPEN" => Some(Self::Open),
            "CASE" => Some(Self::Case),
            "WHEN" => Some(Self::When),
            "THEN" => Some(Self::Then),
            "ELSE" => Some(Self::Else),
            "SOME" => Some(Self::Some),
            "FULL" => Some(Self::Full),
            "WITH" => Some(Self::With),
            "TABLE" => Some(Self::Table),
            "WHERE" => Some(Self::Where),
            "USING" => Some(Self::Using),
            "UNION" => Some(Self::Union),
            "GROUP" => Some(Self::Group),
            "BEGIN" => Some(Self::Begin),
            "INDEX" => Some(Self::Index),
            "INNER" => Some(Self::Inner),
            "LIMIT" => Some(Self::Limit),
            "OUTER" => Some(Self::Outer),
            "ORDER" => Some(Self::Order),
            "RIGHT" => Some(Self::Right),
            "DELETE" => Some(Self::Delete),
            "CREATE" => Some(Self::Create),
            "SELECT" => Some(Self::Select),
            "OFFSET" => Some(Self::Offset),
            "EXISTS" => Some(Self::Exists),
            "HAVING" => Some(Self::Having),
            "INSERT" => Some(Self::Insert),
            "UPDATE" => Some(Self::Update),
            "VALUES" => Some(Self::Values),
            "ESCAPE" => Some(Self::Escape),
            "PRIMARY" => Some(Self::Primary),
            "NATURAL" => Some(Self::Natural),
            "REPLACE" => Some(Self::Replace),
            "BETWEEN" => Some(Self::Between),
            "TRUNCATE" => Some(Self::Truncate),
            "DISTINCT" => Some(Self::Distinct),
            "INTERSECT" => Some(Self::Intersect),
            "FEEDBACK" => Some(Self::Feedback),
            _ => None,
        }
    }

    /// Returns the keyword as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Uncertain => "UNCERTAIN",
            Self::Analyze => "ANALYZE",
            Self::Explain => "EXPLAIN",
            Self::Assume => "ASSUME",
            Self::Lens => "LENS",
            Self::Feedback => "FEEDBACK",
            Self::Select => "SELECT",
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::Group => "GROUP",
            Self::By => "BY",
            Self::Having => "HAVING",
            Self::Order => "ORDER",
            Self::Asc => "ASC",
            Self::Desc => "DESC",
            Self::Limit => "LIMIT",
            Self::Offset => "OFFSET",
            Self::Top => "TOP",
            Self::Distinct => "DISTINCT",
            Self::All => "ALL",
            Self::As => "AS",
            Self::With => "WITH",
            Self::Join => "JOIN",
            Self::Inner => "INNER",
            Self::Outer => "OUTER",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Full => "FULL",
            Self::Natural => "NATURAL",
            Self::On => "ON",
            Self::Using => "USING",
            Self::Union => "UNION",
            Self::Intersect => "INTERSECT",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::Is => "IS",
            Self::In => "IN",
            Self::Like => "LIKE",
            Self::Escape => "ESCAPE",
            Self::Between => "BETWEEN",
            Self::Exists => "EXISTS",
            Self::Any => "ANY",
            Self::Some => "SOME",
            Self::Null => "NULL",
            Self::Case => "CASE",
            Self::When => "WHEN",
            Self::Then => "THEN",
            Self::Else => "ELSE",
            Self::End => "END",
            Self::Insert => "INSERT",
            Self::Into => "INTO",
            Self::Values => "VALUES",
            Self::Update => "UPDATE",
            Self::Set => "SET",
            Self::Delete => "DELETE",
            Self::Replace => "REPLACE",
            Self::Truncate => "TRUNCATE",
            Self::Create => "CREATE",
            Self::Drop => "DROP",
            Self::Table => "TABLE",
            Self::View => "VIEW",
            Self::Index => "INDEX",
            Self::Primary => "PRIMARY",
            Self::Key => "KEY",
            Self::Let => "LET",
            Self::Do => "DO",
            Self::Begin => "BEGIN",
            Self::Open => "OPEN",
        }
    }

    /// Returns true for the keywords added by the uncertain-data dialect.
    #[must_use]
    pub const fn is_dialect_extension(&self) -> bool {
        matches!(
            self,
            Self::Uncertain
                | Self::Analyze
                | Self::Explain
                | Self::Assume
                | Self::Lens
                | Self::Feedback
        )
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
