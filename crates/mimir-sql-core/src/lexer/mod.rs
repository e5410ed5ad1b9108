//! SQL Lexer/Tokenizer
//!
//! This module provides a hand-written lexer for the Mimir SQL dialect that
//! produces a stream of tokens for the grammar layer.
//!
//! ```
//! use mimir_sql_core::lexer::{Keyword, Lexer, TokenKind};
//!
//! let tokens = Lexer::new("ANALYZE FEEDBACK ON t").tokenize().unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::Analyze));
//! assert_eq!(tokens[3].kind, TokenKind::Identifier("t".to_string()));
//! assert!(tokens[4].is_eof());
//! ```

mod error;
mod keyword;
mod options;
mod span;
mod stream;
mod token;
mod tokenizer;

pub use error::{LexError, NumericError, Result};
pub use keyword::Keyword;
pub use options::{CommentMode, LexerOptions, NumberValidation};
pub use span::{LineCol, LineIndex, Span};
pub use stream::TokenStream;
pub use token::{Token, TokenKind};
pub use tokenizer::Lexer;
