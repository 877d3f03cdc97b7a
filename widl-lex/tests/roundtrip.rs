//! Property-based coverage of §8's universal lexer properties:
//! - lossless: concatenating all lexeme texts reproduces the input exactly.
//! - a pure function of the byte sequence: re-lexing the reproduced input
//!   yields the same lexeme sequence.

use proptest::prelude::*;
use widl_lex::tokenise;

fn idl_shaped_char() -> impl Strategy<Value = char> {
    prop_oneof![
        3 => prop::char::range('a', 'z'),
        1 => prop::char::range('A', 'Z'),
        1 => prop::char::range('0', '9'),
        1 => Just('_'),
        1 => Just('-'),
        1 => Just('.'),
        1 => Just(' '),
        1 => Just('\n'),
        1 => Just('"'),
        1 => Just('/'),
        1 => Just('*'),
        1 => prop_oneof![Just('{'), Just('}'), Just('('), Just(')'), Just(';'), Just(',')],
    ]
}

proptest! {
    #[test]
    fn lexer_is_lossless(chars in prop::collection::vec(idl_shaped_char(), 0..200)) {
        let source: String = chars.into_iter().collect();
        if let Ok(lexemes) = tokenise(&source) {
            let rebuilt: String = lexemes.iter().map(|l| l.text.as_str()).collect();
            prop_assert_eq!(rebuilt, source);
        }
    }

    #[test]
    fn lexer_is_a_function_of_bytes(chars in prop::collection::vec(idl_shaped_char(), 0..200)) {
        let source: String = chars.into_iter().collect();
        if let Ok(lexemes) = tokenise(&source) {
            let rebuilt: String = lexemes.iter().map(|l| l.text.as_str()).collect();
            let relexed = tokenise(&rebuilt).expect("re-lexing a lossless rebuild must not fail");
            prop_assert_eq!(relexed, lexemes);
        }
    }
}
