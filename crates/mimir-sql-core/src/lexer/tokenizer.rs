//! SQL Tokenizer implementation.

use core::iter::FusedIterator;

use tracing::{debug, trace};

use super::error::{LexError, NumericError, Result};
use super::options::{CommentMode, LexerOptions, NumberValidation};
use super::span::floor_char_boundary;
use super::{Keyword, Span, Token, TokenKind};

/// A lexer that tokenizes SQL input.
///
/// Tokens are produced on demand by [`Lexer::next_token`], or lazily through
/// the `Iterator` impl, which yields every token through `Eof` and stops after
/// `Eof` or the first error.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    options: LexerOptions,
    /// The byte position scanning (re)starts from.
    origin: usize,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
    /// The byte position where the current run of trivia began.
    trivia_start: usize,
    /// Set once `Eof` has been returned.
    finished: bool,
    /// Set once the iterator has yielded an error.
    failed: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self::with_options(input, LexerOptions::new())
    }

    /// Creates a new lexer with explicit options.
    #[must_use]
    pub const fn with_options(input: &'a str, options: LexerOptions) -> Self {
        Self {
            input,
            options,
            origin: 0,
            pos: 0,
            start: 0,
            trivia_start: 0,
            finished: false,
            failed: false,
        }
    }

    /// Starts scanning at `offset` instead of the beginning of the input.
    ///
    /// An offset inside a multi-byte character moves back to that character's
    /// start; an offset past the end is clamped to the end.
    #[must_use]
    pub fn starting_at(mut self, offset: usize) -> Self {
        self.origin = floor_char_boundary(self.input, offset);
        self.reset();
        self
    }

    /// Rewinds the lexer to its starting offset.
    pub fn reset(&mut self) {
        self.pos = self.origin;
        self.start = self.origin;
        self.trivia_start = self.origin;
        self.finished = false;
        self.failed = false;
    }

    /// Returns the input being scanned.
    #[must_use]
    pub const fn input(&self) -> &'a str {
        self.input
    }

    /// Returns the options in effect.
    #[must_use]
    pub const fn options(&self) -> &LexerOptions {
        &self.options
    }

    /// Returns the current byte position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the next character without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Advances past `c` if it is the current character.
    fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Advances past the current character if it equals `c`, ignoring ASCII case.
    fn eat_ignore_case(&mut self, c: char) -> bool {
        if self.peek().is_some_and(|p| p.eq_ignore_ascii_case(&c)) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn eat_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
    }

    fn at_line_comment(&self) -> bool {
        self.input[self.pos..].starts_with("--")
    }

    fn at_block_comment(&self) -> bool {
        self.input[self.pos..].starts_with("/*")
    }

    /// Skips whitespace, and comments unless they are emitted as tokens.
    fn skip_whitespace_and_comments(&mut self) -> Result<()> {
        let discard = self.options.comments == CommentMode::Discard;
        loop {
            while self
                .peek()
                .is_some_and(|c| matches!(c, ' ' | '\t' | '\r' | '\n'))
            {
                self.advance();
            }

            if discard && self.at_line_comment() {
                self.consume_line_comment();
                continue;
            }

            if discard && self.at_block_comment() {
                self.consume_block_comment()?;
                continue;
            }

            return Ok(());
        }
    }

    /// Consumes `--` through the end of the line, leaving the line break.
    fn consume_line_comment(&mut self) {
        let rest = &self.input[self.pos..];
        self.pos += rest.find(['\n', '\r']).unwrap_or(rest.len());
    }

    /// Consumes `/* ... */`. Block comments do not nest.
    fn consume_block_comment(&mut self) -> Result<()> {
        let opener = Span::new(self.pos, self.pos + 2);
        match self.input[opener.end..].find("*/") {
            Some(offset) => {
                self.pos = opener.end + offset + 2;
                Ok(())
            }
            None => {
                self.pos = self.input.len();
                Err(LexError::UnterminatedComment { span: opener })
            }
        }
    }

    /// Creates a span from start to current position.
    const fn make_span(&self) -> Span {
        Span::new(self.start, self.pos)
    }

    /// Creates a token with the current span.
    fn make_token(&self, kind: TokenKind) -> Token<'a> {
        Token::new(
            kind,
            self.make_span(),
            &self.input[self.start..self.pos],
            Span::new(self.trivia_start, self.start),
        )
    }

    /// Creates an `UnrecognizedCharacter` error for the current span.
    const fn unrecognized(&self, ch: char) -> LexError {
        LexError::UnrecognizedCharacter {
            ch,
            span: self.make_span(),
        }
    }

    /// Scans an identifier or keyword.
    fn scan_identifier(&mut self) -> Token<'a> {
        while self
            .peek()
            .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '$')
        {
            self.advance();
        }

        let text = &self.input[self.start..self.pos];

        if let Some(keyword) = Keyword::lookup(text) {
            self.make_token(TokenKind::Keyword(keyword))
        } else {
            self.make_token(TokenKind::Identifier(String::from(text)))
        }
    }

    /// Scans the body of a quoted form whose opener has been consumed, up to
    /// and including `close`. A doubled `close` stands for one literal `close`.
    ///
    /// Returns `None` if the input ends first.
    fn scan_delimited(&mut self, close: char) -> Option<String> {
        let mut value = String::new();

        loop {
            match self.advance() {
                Some(c) if c == close => {
                    if self.eat(close) {
                        value.push(close);
                    } else {
                        return Some(value);
                    }
                }
                Some(c) => value.push(c),
                None => return None,
            }
        }
    }

    /// Scans a quoted identifier (e.g., "column name", or `name` / [name]
    /// when enabled).
    fn scan_quoted_identifier(&mut self, close: char) -> Result<Token<'a>> {
        let opener = self.make_span();
        match self.scan_delimited(close) {
            Some(name) => Ok(self.make_token(TokenKind::QuotedIdentifier(name))),
            None => Err(LexError::UnterminatedQuotedIdentifier { span: opener }),
        }
    }

    /// Scans a string literal.
    fn scan_string(&mut self) -> Result<Token<'a>> {
        let opener = self.make_span();
        match self.scan_delimited('\'') {
            Some(value) => Ok(self.make_token(TokenKind::String(value))),
            None => Err(LexError::UnterminatedStringLiteral { span: opener }),
        }
    }

    /// Scans a number (integer or double). Signs are separate tokens.
    fn scan_number(&mut self) -> Result<Token<'a>> {
        let eager = self.options.numbers == NumberValidation::Eager;
        let mut is_double = false;

        self.eat_digits();

        // Fraction
        if self.peek() == Some('.') {
            if self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
                is_double = true;
                self.advance(); // consume .
                self.eat_digits();
            } else if eager {
                self.advance();
                return Err(self.malformed(NumericError::MissingFraction));
            }
        }

        // Exponent
        if self.peek().is_some_and(|c| c == 'e' || c == 'E') {
            let rest = &self.input.as_bytes()[self.pos + 1..];
            let sign = usize::from(matches!(rest.first(), Some(b'+' | b'-')));
            if rest.get(sign).is_some_and(u8::is_ascii_digit) {
                is_double = true;
                self.pos += 1 + sign;
                self.eat_digits();
            } else if eager {
                self.pos += 1 + sign;
                return Err(self.malformed(NumericError::MissingExponent));
            }
        }

        let text = &self.input[self.start..self.pos];

        if is_double {
            match text.parse::<f64>() {
                Ok(f) => Ok(self.make_token(TokenKind::Double(f))),
                Err(_) => Err(self.malformed(NumericError::InvalidDouble)),
            }
        } else {
            // A digit run only fails to parse when it exceeds u64.
            let kind = text.parse::<u64>().map_or_else(
                |_| TokenKind::LargeInteger(text.to_string()),
                TokenKind::Integer,
            );
            Ok(self.make_token(kind))
        }
    }

    const fn malformed(&self, reason: NumericError) -> LexError {
        LexError::MalformedNumericLiteral {
            reason,
            span: self.make_span(),
        }
    }

    /// Scans an ODBC escape opener after its `{` (`{d`, `{t`, `{ts`, `{fn`).
    fn scan_escape_open(&mut self) -> Result<Token<'a>> {
        if self.eat_ignore_case('d') {
            Ok(self.make_token(TokenKind::EscapeDate))
        } else if self.eat_ignore_case('t') {
            if self.eat_ignore_case('s') {
                Ok(self.make_token(TokenKind::EscapeTimestamp))
            } else {
                Ok(self.make_token(TokenKind::EscapeTime))
            }
        } else if self.peek().is_some_and(|c| c.eq_ignore_ascii_case(&'f'))
            && self.peek_next().is_some_and(|c| c.eq_ignore_ascii_case(&'n'))
        {
            self.pos += 2;
            Ok(self.make_token(TokenKind::EscapeFunction))
        } else {
            Err(self.unrecognized('{'))
        }
    }

    /// Scans the next token.
    ///
    /// Once `Eof` has been returned, every further call returns `Eof` with an
    /// empty span at the end of the input.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] for unterminated comments and quotes, malformed
    /// numbers, and characters that start no token. The lexer is left past the
    /// offending text, so scanning may continue.
    pub fn next_token(&mut self) -> Result<Token<'a>> {
        match self.scan_token() {
            Ok(token) => {
                trace!(kind = ?token.kind, span = %token.span, "token");
                Ok(token)
            }
            Err(err) => {
                debug!(error = %err, "lex error");
                Err(err)
            }
        }
    }

    fn scan_token(&mut self) -> Result<Token<'a>> {
        if self.finished {
            self.trivia_start = self.pos;
            self.start = self.pos;
            return Ok(self.make_token(TokenKind::Eof));
        }

        self.trivia_start = self.pos;
        self.skip_whitespace_and_comments()?;
        self.start = self.pos;

        let Some(c) = self.advance() else {
            debug!(offset = self.pos, "end of input");
            self.finished = true;
            return Ok(self.make_token(TokenKind::Eof));
        };

        let token = match c {
            // Single-character tokens
            ';' => self.make_token(TokenKind::Semicolon),
            ',' => self.make_token(TokenKind::Comma),
            '=' => self.make_token(TokenKind::Eq),
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            '.' => self.make_token(TokenKind::Dot),
            '*' => self.make_token(TokenKind::Star),
            '?' => self.make_token(TokenKind::Question),
            '+' => self.make_token(TokenKind::Plus),
            '&' => self.make_token(TokenKind::BitAnd),
            '^' => self.make_token(TokenKind::Caret),
            '}' => self.make_token(TokenKind::EscapeClose),

            // Comments, reached only when they are emitted
            '-' if self.peek() == Some('-') => {
                self.pos = self.start;
                self.consume_line_comment();
                self.make_token(TokenKind::LineComment)
            }
            '/' if self.peek() == Some('*') => {
                self.pos = self.start;
                self.consume_block_comment()?;
                self.make_token(TokenKind::BlockComment)
            }
            '-' => self.make_token(TokenKind::Minus),
            '/' => self.make_token(TokenKind::Slash),

            // Potentially multi-character tokens
            '>' => {
                if self.eat('=') {
                    self.make_token(TokenKind::GtEq)
                } else {
                    self.make_token(TokenKind::Gt)
                }
            }
            '<' => {
                if self.eat('=') {
                    self.make_token(TokenKind::LtEq)
                } else if self.eat('>') {
                    self.make_token(TokenKind::NotEq)
                } else {
                    self.make_token(TokenKind::Lt)
                }
            }
            '!' => {
                if self.eat('=') {
                    self.make_token(TokenKind::NotEq)
                } else {
                    return Err(self.unrecognized(c));
                }
            }
            '@' => {
                if self.eat('@') {
                    self.make_token(TokenKind::AtAt)
                } else {
                    return Err(self.unrecognized(c));
                }
            }
            '|' => {
                if self.eat('|') {
                    self.make_token(TokenKind::Concat)
                } else {
                    self.make_token(TokenKind::BitOr)
                }
            }
            '{' => self.scan_escape_open()?,

            // String literals
            '\'' => self.scan_string()?,

            // Quoted identifiers
            '"' | '`' | '[' => match self.options.identifier_closer(c) {
                Some(close) => self.scan_quoted_identifier(close)?,
                None => return Err(self.unrecognized(c)),
            },

            // Numbers
            c if c.is_ascii_digit() => self.scan_number()?,

            // Identifiers and keywords
            c if c.is_alphabetic() || c == '_' => self.scan_identifier(),

            _ => return Err(self.unrecognized(c)),
        };

        Ok(token)
    }

    /// Tokenizes the rest of the input and returns all tokens, ending with `Eof`.
    ///
    /// # Errors
    ///
    /// Returns the first [`LexError`] encountered.
    pub fn tokenize(&mut self) -> Result<Vec<Token<'a>>> {
        self.collect()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.failed {
            return None;
        }
        let result = self.next_token();
        self.failed = result.is_err();
        Some(result)
    }
}

impl FusedIterator for Lexer<'_> {}
