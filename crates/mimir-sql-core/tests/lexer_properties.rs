//! Property-based tests for the lexer.
//!
//! Generated inputs check that:
//! 1. Keyword lookup ignores case for every keyword.
//! 2. Non-keyword identifiers come back verbatim.
//! 3. Leading trivia plus lexemes rebuild any input that scans cleanly.
//! 4. `Eof` repeats at the same position once reached.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;
use common::*;
use mimir_sql_core::{Keyword, Lexer, Span, TokenKind};
use proptest::prelude::*;

// -- Strategies --

fn keyword_strategy() -> impl Strategy<Value = Keyword> {
    proptest::sample::select(Keyword::ALL.to_vec())
}

/// A keyword spelled with an arbitrary mix of upper and lower case.
fn mixed_case_keyword() -> impl Strategy<Value = (Keyword, String)> {
    keyword_strategy().prop_flat_map(|keyword| {
        let len = keyword.as_str().len();
        proptest::collection::vec(any::<bool>(), len).prop_map(move |upper| {
            let spelling = keyword
                .as_str()
                .chars()
                .zip(upper)
                .map(|(c, up)| {
                    if up {
                        c.to_ascii_uppercase()
                    } else {
                        c.to_ascii_lowercase()
                    }
                })
                .collect::<String>();
            (keyword, spelling)
        })
    })
}

/// A fragment that scans without error on its own.
fn fragment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z_][A-Za-z0-9_$]{0,8}",
        "[0-9]{1,9}",
        "[0-9]{1,4}\\.[0-9]{1,4}",
        "[0-9]{1,3}[eE][+-]?[0-9]{1,2}",
        "'([^']|'')*'",
        "\"([^\"]|\"\")*\"",
        "-- [a-z ]{0,10}\n",
        "/\\*[a-z *]{0,10}\\*/",
        prop::sample::select(vec![
            ";", ",", "=", "(", ")", ".", "*", "?", ">", "<", ">=", "<=", "<>", "!=", "@@",
            "||", "|", "&", "+", "-", "/", "^", "{d", "{t", "{ts", "{fn", "}",
        ])
        .prop_map(String::from),
    ]
}

fn whitespace_strategy() -> impl Strategy<Value = String> {
    "[ \t\r\n]{1,3}"
}

fn statement_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec((fragment_strategy(), whitespace_strategy()), 0..24).prop_map(
        |parts| {
            parts
                .into_iter()
                .flat_map(|(fragment, space)| [fragment, space])
                .collect()
        },
    )
}

// -- Property Tests --

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_keyword_lookup_ignores_case((keyword, spelling) in mixed_case_keyword()) {
        prop_assert_eq!(Keyword::lookup(&spelling), Some(keyword));
        prop_assert_eq!(kinds(&spelling), vec![TokenKind::Keyword(keyword), TokenKind::Eof]);
    }

    #[test]
    fn prop_identifier_is_verbatim(name in "[A-Za-z_][A-Za-z0-9_$]{0,12}") {
        prop_assume!(Keyword::lookup(&name).is_none());
        let tokens = tokens(&name);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(&tokens[0].kind, &TokenKind::Identifier(name.clone()));
        prop_assert_eq!(tokens[0].lexeme, name.as_str());
    }

    #[test]
    fn prop_spans_cover_input(sql in statement_strategy()) {
        let tokens = tokens(&sql);
        prop_assert_eq!(reassemble(&sql, &tokens), sql.clone());
        let eof = tokens.last().unwrap();
        prop_assert!(eof.is_eof());
        prop_assert_eq!(eof.span, Span::empty(sql.len()));
    }

    #[test]
    fn prop_eof_is_idempotent(sql in statement_strategy(), extra in 1usize..5) {
        let mut lexer = Lexer::new(&sql);
        while !lexer.next_token().unwrap().is_eof() {}
        for _ in 0..extra {
            let token = lexer.next_token().unwrap();
            prop_assert!(token.is_eof());
            prop_assert_eq!(token.span, Span::empty(sql.len()));
        }
    }

    #[test]
    fn prop_never_panics(sql in "\\PC{0,64}") {
        let mut lexer = Lexer::new(&sql);
        for _ in 0..=sql.len() + 1 {
            if let Ok(token) = lexer.next_token() {
                if token.is_eof() {
                    break;
                }
            }
        }
    }
}
