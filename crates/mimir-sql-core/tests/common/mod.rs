#![allow(dead_code)]

use mimir_sql_core::{Keyword, LexError, Lexer, Token, TokenKind};

pub fn tokens(sql: &str) -> Vec<Token<'_>> {
    Lexer::new(sql)
        .tokenize()
        .unwrap_or_else(|e| panic!("Failed to tokenize: {sql}\nError: {e:?}"))
}

pub fn kinds(sql: &str) -> Vec<TokenKind> {
    tokens(sql).into_iter().map(|t| t.kind).collect()
}

pub fn lex_err(sql: &str) -> LexError {
    Lexer::new(sql)
        .tokenize()
        .expect_err(&format!("Expected lex error for: {sql}"))
}

pub const fn kw(keyword: Keyword) -> TokenKind {
    TokenKind::Keyword(keyword)
}

pub fn ident(name: &str) -> TokenKind {
    TokenKind::Identifier(name.to_string())
}

/// Rebuilds the input from each token's leading trivia and lexeme.
///
/// Panics if the spans do not tile the input in order.
pub fn reassemble(sql: &str, tokens: &[Token<'_>]) -> String {
    let mut out = String::new();
    let mut cursor = 0;
    for token in tokens {
        assert_eq!(token.leading_trivia.start, cursor, "gap before {token}");
        assert_eq!(token.leading_trivia.end, token.span.start, "gap in {token}");
        out.push_str(&sql[token.leading_trivia.start..token.leading_trivia.end]);
        out.push_str(token.lexeme);
        assert_eq!(token.lexeme, &sql[token.span.start..token.span.end]);
        cursor = token.span.end;
    }
    out
}
