//! Buffered token stream with bounded lookahead for the grammar layer.

use std::collections::VecDeque;

use tracing::debug;

use super::error::Result;
use super::{Keyword, Lexer, LexerOptions, Token, TokenKind};

/// A token stream over a [`Lexer`] that supports `peek(k)` lookahead.
///
/// Scanned results, errors included, are buffered in order, so peeking
/// never changes what `next_token` later returns.
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    lexer: Lexer<'a>,
    buffer: VecDeque<Result<Token<'a>>>,
    /// Set once the iterator has yielded `Eof`.
    exhausted: bool,
}

impl<'a> TokenStream<'a> {
    /// Creates a stream over `input` with default options.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self::from_lexer(Lexer::new(input))
    }

    /// Creates a stream over `input` with explicit options.
    #[must_use]
    pub const fn with_options(input: &'a str, options: LexerOptions) -> Self {
        Self::from_lexer(Lexer::with_options(input, options))
    }

    /// Wraps an existing lexer.
    #[must_use]
    pub const fn from_lexer(lexer: Lexer<'a>) -> Self {
        Self {
            lexer,
            buffer: VecDeque::new(),
            exhausted: false,
        }
    }

    /// Returns the input being scanned.
    #[must_use]
    pub const fn input(&self) -> &'a str {
        self.lexer.input()
    }

    fn eof_buffered(&self) -> bool {
        matches!(self.buffer.back(), Some(Ok(token)) if token.is_eof())
    }

    /// Scans ahead until result `k` is buffered or `Eof` is, and returns
    /// the index to read. The buffer never grows past the first `Eof`.
    fn fill(&mut self, k: usize) -> usize {
        while self.buffer.len() <= k && !self.eof_buffered() {
            self.buffer.push_back(self.lexer.next_token());
        }
        k.min(self.buffer.len().saturating_sub(1))
    }

    /// Consumes and returns the next token.
    ///
    /// # Errors
    ///
    /// Returns the [`LexError`] scanned at this position.
    pub fn next_token(&mut self) -> Result<Token<'a>> {
        match self.buffer.pop_front() {
            Some(result) => result,
            None => self.lexer.next_token(),
        }
    }

    /// Returns the token `k` positions ahead without consuming anything;
    /// `peek(0)` is the token `next_token` would return.
    ///
    /// Any `k` at or past the end of input returns `Eof`, so lookahead is
    /// bounded by the number of tokens left.
    ///
    /// # Errors
    ///
    /// Returns a copy of the [`LexError`] scanned at that position.
    pub fn peek(&mut self, k: usize) -> Result<&Token<'a>> {
        let index = self.fill(k);
        match &self.buffer[index] {
            Ok(token) => Ok(token),
            Err(err) => Err(err.clone()),
        }
    }

    /// Returns true if the next token has the given kind.
    ///
    /// A pending error never matches.
    pub fn check(&mut self, kind: &TokenKind) -> bool {
        self.peek(0).is_ok_and(|token| &token.kind == kind)
    }

    /// Returns true if the next token is the given keyword.
    pub fn check_keyword(&mut self, keyword: Keyword) -> bool {
        self.peek(0)
            .is_ok_and(|token| token.as_keyword() == Some(keyword))
    }

    /// Returns true if the next tokens are exactly the given keywords,
    /// e.g. `[Keyword::Left, Keyword::Join]`.
    pub fn check_keywords(&mut self, keywords: &[Keyword]) -> bool {
        keywords.iter().enumerate().all(|(k, keyword)| {
            self.peek(k)
                .is_ok_and(|token| token.as_keyword() == Some(*keyword))
        })
    }

    /// Consumes the next token if it is the given keyword.
    pub fn eat_keyword(&mut self, keyword: Keyword) -> bool {
        if self.check_keyword(keyword) {
            self.buffer.pop_front();
            true
        } else {
            false
        }
    }

    /// Discards tokens, and any errors among them, through the next `;`.
    ///
    /// Stops in front of `Eof`. Returns the number of errors skipped.
    pub fn synchronize(&mut self) -> usize {
        let mut skipped_errors = 0;
        loop {
            let (at_end, at_semicolon) = match self.peek(0) {
                Ok(token) => (token.is_eof(), token.kind == TokenKind::Semicolon),
                Err(_) => {
                    skipped_errors += 1;
                    (false, false)
                }
            };
            if at_end {
                break;
            }
            self.buffer.pop_front();
            if at_semicolon {
                break;
            }
        }
        debug!(skipped_errors, "synchronized token stream");
        skipped_errors
    }
}

impl<'a> Iterator for TokenStream<'a> {
    type Item = Result<Token<'a>>;

    /// Yields every token through `Eof`, errors included, then stops.
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let result = self.next_token();
        self.exhausted = matches!(&result, Ok(token) if token.is_eof());
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::LexError;

    #[test]
    fn test_peek_does_not_consume() {
        let mut stream = TokenStream::new("LEFT JOIN t");
        assert_eq!(
            stream.peek(1).map(|t| t.kind.clone()),
            Ok(TokenKind::Keyword(Keyword::Join))
        );
        assert_eq!(
            stream.peek(0).map(|t| t.kind.clone()),
            Ok(TokenKind::Keyword(Keyword::Left))
        );
        assert_eq!(
            stream.next_token().map(|t| t.kind),
            Ok(TokenKind::Keyword(Keyword::Left))
        );
        assert_eq!(
            stream.next_token().map(|t| t.kind),
            Ok(TokenKind::Keyword(Keyword::Join))
        );
    }

    #[test]
    fn test_peek_past_end_is_eof() {
        let mut stream = TokenStream::new("x");
        assert!(stream.peek(5).is_ok_and(Token::is_eof));
        assert!(stream.peek(1).is_ok_and(Token::is_eof));
    }

    #[test]
    fn test_peek_huge_offset_stays_bounded() {
        let mut stream = TokenStream::new("x");
        assert!(stream.peek(usize::MAX).is_ok_and(Token::is_eof));
        assert_eq!(stream.buffer.len(), 2);
        assert_eq!(
            stream.next_token().map(|t| t.kind),
            Ok(TokenKind::Identifier(String::from("x")))
        );
        assert!(stream.peek(usize::MAX - 1).is_ok_and(Token::is_eof));
        assert_eq!(stream.buffer.len(), 1);
    }

    #[test]
    fn test_check_keywords() {
        let mut stream = TokenStream::new("left join t");
        assert!(stream.check_keywords(&[Keyword::Left, Keyword::Join]));
        assert!(!stream.check_keywords(&[Keyword::Left, Keyword::Outer]));
        assert!(stream.eat_keyword(Keyword::Left));
        assert!(!stream.eat_keyword(Keyword::Left));
        assert!(stream.check_keyword(Keyword::Join));
    }

    #[test]
    fn test_check_kind() {
        let mut stream = TokenStream::new("; x");
        assert!(stream.check(&TokenKind::Semicolon));
        assert!(!stream.check(&TokenKind::Comma));
    }

    #[test]
    fn test_iterator_continues_past_errors() {
        let results: Vec<_> = TokenStream::new("a # b").collect();
        assert_eq!(results.len(), 4);
        assert!(results[1].is_err());
        assert!(results[3].as_ref().is_ok_and(Token::is_eof));
    }

    #[test]
    fn test_errors_are_buffered_in_order() {
        let mut stream = TokenStream::new("a # b");
        assert!(stream.peek(1).is_err());
        assert!(!stream.check(&TokenKind::Eof));
        assert!(stream.next_token().is_ok());
        assert!(matches!(
            stream.next_token(),
            Err(LexError::UnrecognizedCharacter { ch: '#', .. })
        ));
        assert_eq!(
            stream.next_token().map(|t| t.kind),
            Ok(TokenKind::Identifier(String::from("b")))
        );
    }

    #[test]
    fn test_synchronize() {
        let mut stream = TokenStream::new("SELECT # % FROM; ANALYZE t");
        assert_eq!(stream.synchronize(), 2);
        assert!(stream.check_keyword(Keyword::Analyze));
    }

    #[test]
    fn test_synchronize_stops_at_eof() {
        let mut stream = TokenStream::new("SELECT 1");
        assert_eq!(stream.synchronize(), 0);
        assert!(stream.check(&TokenKind::Eof));
    }

    #[test]
    fn test_iterator_through_eof() {
        let mut stream = TokenStream::new("a b");
        let _ = stream.peek(4);
        let kinds: Vec<_> = stream.by_ref().map(|t| t.map(|t| t.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                Ok(TokenKind::Identifier(String::from("a"))),
                Ok(TokenKind::Identifier(String::from("b"))),
                Ok(TokenKind::Eof),
            ]
        );
        assert!(stream.next().is_none());
    }
}
