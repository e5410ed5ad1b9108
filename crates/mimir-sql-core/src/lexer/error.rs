//! Lexer error types.

use super::Span;

/// Why a numeric literal was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NumericError {
    /// A `.` after the integer part with no digits following it (e.g., `1.`).
    #[error("expected digits after decimal point")]
    MissingFraction,
    /// An exponent marker with no digits following it (e.g., `1e`, `2.5e+`).
    #[error("expected digits in exponent")]
    MissingExponent,
    /// Digits the double parser rejected.
    #[error("invalid double")]
    InvalidDouble,
}

/// Errors produced while scanning.
///
/// Every variant carries the span of the offending text. For unterminated
/// comments and quotes the span covers the opening delimiter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A `/*` comment was never closed.
    #[error("unterminated block comment at {span}")]
    UnterminatedComment {
        /// The `/*` opener.
        span: Span,
    },

    /// A quoted identifier was never closed.
    #[error("unterminated quoted identifier at {span}")]
    UnterminatedQuotedIdentifier {
        /// The opening quote.
        span: Span,
    },

    /// A string literal was never closed.
    #[error("unterminated string literal at {span}")]
    UnterminatedStringLiteral {
        /// The opening quote.
        span: Span,
    },

    /// A character that does not start any token.
    #[error("unrecognized character {ch:?} at {span}")]
    UnrecognizedCharacter {
        /// The character found.
        ch: char,
        /// The character's location.
        span: Span,
    },

    /// A numeric literal that is neither a valid integer nor a valid double.
    #[error("malformed numeric literal at {span}: {reason}")]
    MalformedNumericLiteral {
        /// What was wrong with it.
        reason: NumericError,
        /// The numeric text consumed.
        span: Span,
    },
}

impl LexError {
    /// Returns the location of the error.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::UnterminatedComment { span }
            | Self::UnterminatedQuotedIdentifier { span }
            | Self::UnterminatedStringLiteral { span }
            | Self::UnrecognizedCharacter { span, .. }
            | Self::MalformedNumericLiteral { span, .. } => *span,
        }
    }
}

/// Result type for lexer operations.
pub type Result<T> = core::result::Result<T, LexError>;
