//! The main `tokenise` entry point (§4.1).
//!
//! Selects a lexeme family from the lookahead character, then runs the
//! matching sticky pattern from `patterns`. Never reorders or drops
//! bytes: concatenating every emitted `Lexeme::text` reproduces `source`
//! exactly (checked by the roundtrip property test).

use widl_util::Span;

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::kind::LexemeKind;
use crate::patterns;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single classified substring of the source.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lexeme {
    pub kind: LexemeKind,
    pub text: String,
    /// The line the lexeme started on.
    pub span: Span,
}

impl Lexeme {
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }
}

/// Tokenise `source` into an ordered sequence of lexemes.
///
/// Total and lossless: every byte of `source` appears in exactly one
/// lexeme's `text`, in order. Only fails if the cursor ever fails to
/// advance, which cannot happen given the `other` fallback below — kept
/// as a `Result` to preserve the documented failure mode rather than a
/// silent `unreachable!()`.
#[tracing::instrument(level = "trace", skip(source), fields(len = source.len()))]
pub fn tokenise(source: &str) -> Result<Vec<Lexeme>, LexError> {
    let mut cursor = Cursor::new(source);
    let mut lexemes = Vec::new();

    while !cursor.is_at_end() {
        let line = cursor.line();
        let rest = cursor.rest();
        let c = cursor.current_char().expect("cursor not at end");

        let (kind, len) = classify(c, rest);
        if len == 0 {
            return Err(LexError { line });
        }

        let text = rest[..len].to_string();
        cursor.advance_bytes(len);
        lexemes.push(Lexeme {
            kind,
            text,
            span: Span::new(line),
        });
    }

    tracing::trace!(lexemes = lexemes.len(), "tokenise complete");
    Ok(lexemes)
}

/// Pick the lexeme family for the lookahead character `c` and run its
/// sticky pattern over `rest` (which starts with `c`). Returns the kind and
/// the matched byte length; a length of `0` only occurs if every pattern,
/// including the single-character `other` fallback, somehow fails.
fn classify(c: char, rest: &str) -> (LexemeKind, usize) {
    if c == '-' || c.is_ascii_digit() || c == '.' {
        if let Some(len) = patterns::match_float(rest) {
            return (LexemeKind::Float, len);
        }
        if let Some(len) = patterns::match_integer(rest) {
            return (LexemeKind::Integer, len);
        }
        return (LexemeKind::Other, c.len_utf8());
    }

    if c.is_alphabetic() || c == '_' {
        if let Some(len) = patterns::match_identifier(rest) {
            return (LexemeKind::Identifier, len);
        }
        return (LexemeKind::Other, c.len_utf8());
    }

    if c == '"' {
        if let Some(len) = patterns::match_string(rest) {
            return (LexemeKind::String, len);
        }
        return (LexemeKind::Other, c.len_utf8());
    }

    if patterns::is_ws_char(c) {
        if let Some(len) = patterns::match_whitespace(rest) {
            return (LexemeKind::Whitespace, len);
        }
        return (LexemeKind::Other, c.len_utf8());
    }

    if c == '/' {
        if let Some(len) = patterns::match_comment_run(rest) {
            return (LexemeKind::Comment, len);
        }
        return (LexemeKind::Other, c.len_utf8());
    }

    (LexemeKind::Other, c.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(lexemes: &[Lexeme]) -> Vec<&str> {
        lexemes.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn lossless_concatenation() {
        let src = "interface Foo : Bar {\n  readonly attribute DOMString x; // hi\n};";
        let lexemes = tokenise(src).unwrap();
        let rebuilt: String = lexemes.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(rebuilt, src);
    }

    #[test]
    fn classifies_keywordish_identifier() {
        let lexemes = tokenise("interface").unwrap();
        assert_eq!(lexemes.len(), 1);
        assert_eq!(lexemes[0].kind, LexemeKind::Identifier);
    }

    #[test]
    fn classifies_punctuation_as_other() {
        let lexemes = tokenise("{};").unwrap();
        assert_eq!(texts(&lexemes), vec!["{", "}", ";"]);
        assert!(lexemes.iter().all(|l| l.kind == LexemeKind::Other));
    }

    #[test]
    fn classifies_underscore_escaped_identifier() {
        let lexemes = tokenise("_interface").unwrap();
        assert_eq!(lexemes[0].kind, LexemeKind::Identifier);
        assert_eq!(lexemes[0].text, "_interface");
    }

    #[test]
    fn tracks_line_numbers_across_newlines() {
        let lexemes = tokenise("a\n\nb").unwrap();
        let b = lexemes.iter().find(|l| l.text == "b").unwrap();
        assert_eq!(b.span.line, 3);
    }

    #[test]
    fn three_dots_lex_as_three_other_lexemes() {
        // The variadic `...` is detected by the parser via three
        // consecutive `other` lexemes, not by the lexer.
        let lexemes = tokenise("...").unwrap();
        assert_eq!(texts(&lexemes), vec![".", ".", "."]);
    }
}
