//! Tests for lexer error cases.

mod common;
use common::*;
use mimir_sql_core::lexer::NumericError;
use mimir_sql_core::{LexError, Lexer, LineCol, LineIndex, Span, TokenKind};

#[test]
fn error_unterminated_comment() {
    assert_eq!(
        lex_err("/* unterminated"),
        LexError::UnterminatedComment {
            span: Span::new(0, 2)
        }
    );
}

#[test]
fn error_unterminated_comment_after_tokens() {
    assert_eq!(
        lex_err("SELECT 1 /* never */ /* closed"),
        LexError::UnterminatedComment {
            span: Span::new(21, 23)
        }
    );
}

#[test]
fn error_unterminated_string() {
    assert_eq!(
        lex_err("SELECT 'it''s"),
        LexError::UnterminatedStringLiteral {
            span: Span::new(7, 8)
        }
    );
}

#[test]
fn error_unterminated_quoted_identifier() {
    assert_eq!(
        lex_err("SELECT \"col"),
        LexError::UnterminatedQuotedIdentifier {
            span: Span::new(7, 8)
        }
    );
}

#[test]
fn error_unrecognized_character() {
    assert_eq!(
        lex_err("SELECT a % b"),
        LexError::UnrecognizedCharacter {
            ch: '%',
            span: Span::new(9, 10)
        }
    );
}

#[test]
fn error_unrecognized_multibyte_character() {
    assert_eq!(
        lex_err("x → y"),
        LexError::UnrecognizedCharacter {
            ch: '→',
            span: Span::new(2, 5)
        }
    );
}

#[test]
fn error_whitespace_outside_space_tab_cr_lf() {
    assert_eq!(
        lex_err("SELECT a\u{0c}FROM t"),
        LexError::UnrecognizedCharacter {
            ch: '\u{0c}',
            span: Span::new(8, 9)
        }
    );
    assert_eq!(
        lex_err("SELECT\u{a0}a"),
        LexError::UnrecognizedCharacter {
            ch: '\u{a0}',
            span: Span::new(6, 8)
        }
    );
}

#[test]
fn error_lone_bang_and_at() {
    assert!(matches!(
        lex_err("a ! b"),
        LexError::UnrecognizedCharacter { ch: '!', .. }
    ));
    assert!(matches!(
        lex_err("@x"),
        LexError::UnrecognizedCharacter { ch: '@', .. }
    ));
}

#[test]
fn error_malformed_numbers() {
    assert!(matches!(
        lex_err("SELECT 3.e5"),
        LexError::MalformedNumericLiteral {
            reason: NumericError::MissingFraction,
            ..
        }
    ));
    assert!(matches!(
        lex_err("SELECT 2.5E-"),
        LexError::MalformedNumericLiteral {
            reason: NumericError::MissingExponent,
            span,
        } if span == Span::new(7, 12)
    ));
}

#[test]
fn error_locates_line_and_column() {
    let sql = "SELECT a\nFROM t\nWHERE b = #";
    let err = lex_err(sql);
    let index = LineIndex::new(sql);
    assert_eq!(
        index.span_start(err.span()),
        LineCol {
            line: 3,
            column: 11
        }
    );
}

#[test]
fn error_does_not_consume_following_tokens() {
    let mut lexer = Lexer::new("SELECT #; SELECT 1");
    assert!(lexer.next_token().is_ok());
    assert!(lexer.next_token().is_err());
    assert_eq!(
        lexer.next_token().map(|t| t.kind),
        Ok(TokenKind::Semicolon)
    );
}

#[test]
fn error_unterminated_comment_then_eof() {
    let mut lexer = Lexer::new("a /* b");
    assert!(lexer.next_token().is_ok());
    assert!(lexer.next_token().is_err());
    let eof = lexer.next_token().expect("eof after error");
    assert!(eof.is_eof());
    assert_eq!(eof.span, Span::new(6, 6));
}
