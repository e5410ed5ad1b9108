//! # mimir-sql-core
//!
//! The lexical front end of the Mimir uncertain-data SQL dialect.
//!
//! This crate provides:
//! - A hand-written, single-pass lexer producing span-carrying tokens
//! - A case-insensitive keyword table covering standard SQL plus the dialect
//!   extensions (`UNCERTAIN`, `LENS`, `ASSUME`, `FEEDBACK`, `EXPLAIN`, `ANALYZE`)
//! - A buffered token stream with bounded lookahead for the grammar layer
//!
//! ## Pulling tokens
//!
//! ```rust
//! use mimir_sql_core::{Keyword, Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("SELECT * FROM t WHERE x >= 3.5;");
//! let first = lexer.next_token().unwrap();
//! assert_eq!(first.kind, TokenKind::Keyword(Keyword::Select));
//! assert_eq!(first.lexeme, "SELECT");
//! ```
//!
//! ## Lookahead
//!
//! ```rust
//! use mimir_sql_core::{Keyword, TokenStream};
//!
//! let mut stream = TokenStream::new("LEFT OUTER JOIN lens_output");
//! assert!(stream.check_keywords(&[Keyword::Left, Keyword::Outer, Keyword::Join]));
//! ```
//!
//! ## Errors
//!
//! Scanning never panics on bad input; every failure is a [`LexError`]
//! carrying the offending [`Span`]:
//!
//! ```rust
//! use mimir_sql_core::{LexError, Lexer, Span};
//!
//! let err = Lexer::new("/* unterminated").tokenize().unwrap_err();
//! assert_eq!(err, LexError::UnterminatedComment { span: Span::new(0, 2) });
//! ```

pub mod lexer;

pub use lexer::{
    CommentMode, Keyword, LexError, Lexer, LexerOptions, LineCol, LineIndex, NumberValidation,
    Span, Token, TokenKind, TokenStream,
};
