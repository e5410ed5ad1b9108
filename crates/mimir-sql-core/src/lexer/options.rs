//! Lexer configuration.

/// What the lexer does with comments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CommentMode {
    /// Skip comments as trivia.
    #[default]
    Discard,
    /// Return comments as `LineComment` / `BlockComment` tokens.
    Emit,
}

/// How strictly numeric literals are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NumberValidation {
    /// A dangling `.` or exponent marker is a `MalformedNumericLiteral` error.
    #[default]
    Eager,
    /// A dangling `.` or exponent marker ends the number and is scanned
    /// as the next token, leaving the grammar to reject it.
    Deferred,
}

/// Options controlling how input is tokenized.
///
/// ```
/// use mimir_sql_core::lexer::{CommentMode, LexerOptions};
///
/// let options = LexerOptions::new()
///     .with_comments(CommentMode::Emit)
///     .with_bracket_identifiers(true);
/// assert_eq!(options.comments, CommentMode::Emit);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LexerOptions {
    /// Comment handling.
    pub comments: CommentMode,
    /// Numeric literal validation.
    pub numbers: NumberValidation,
    /// Accept `[name]` quoted identifiers.
    pub bracket_identifiers: bool,
    /// Accept `` `name` `` quoted identifiers.
    pub backtick_identifiers: bool,
}

impl LexerOptions {
    /// Creates the default options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            comments: CommentMode::Discard,
            numbers: NumberValidation::Eager,
            bracket_identifiers: false,
            backtick_identifiers: false,
        }
    }

    /// Sets the comment handling.
    #[must_use]
    pub const fn with_comments(mut self, comments: CommentMode) -> Self {
        self.comments = comments;
        self
    }

    /// Sets the numeric literal validation.
    #[must_use]
    pub const fn with_numbers(mut self, numbers: NumberValidation) -> Self {
        self.numbers = numbers;
        self
    }

    /// Enables or disables `[name]` quoted identifiers.
    #[must_use]
    pub const fn with_bracket_identifiers(mut self, enabled: bool) -> Self {
        self.bracket_identifiers = enabled;
        self
    }

    /// Enables or disables `` `name` `` quoted identifiers.
    #[must_use]
    pub const fn with_backtick_identifiers(mut self, enabled: bool) -> Self {
        self.backtick_identifiers = enabled;
        self
    }

    /// Returns the closing delimiter for an identifier opened by `open`,
    /// if `open` starts a quoted identifier under these options.
    pub(crate) const fn identifier_closer(&self, open: char) -> Option<char> {
        match open {
            '"' => Some('"'),
            '`' if self.backtick_identifiers => Some('`'),
            '[' if self.bracket_identifiers => Some(']'),
            _ => None,
        }
    }
}
