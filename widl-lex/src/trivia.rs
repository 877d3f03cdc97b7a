//! Fine-grained trivia refinement (§4.2.8).
//!
//! The lexer itself only ever emits coarse `Whitespace`/`Comment` lexemes
//! (§4.1's "Emitted comment runs are coarse"). When the parser captures
//! trivia (`ParserOptions::ws == true`) it re-lexes each such lexeme into
//! the fine-grained pieces a formatting-preserving consumer wants.

use crate::kind::TriviaKind;
use crate::patterns;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One piece of fine-grained trivia, with the "-pea" (post-extended-
/// attribute) marker applied by the caller once it knows whether this
/// trivia immediately precedes a member or argument.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriviaToken {
    pub kind: TriviaKind,
    pub text: String,
    pub post_ea: bool,
}

impl TriviaToken {
    pub fn tag(&self) -> &'static str {
        self.kind.tag(self.post_ea)
    }
}

/// Re-lex a single coarse `Whitespace` lexeme's text into one `Ws` token.
pub fn refine_whitespace(text: &str) -> Vec<TriviaToken> {
    if text.is_empty() {
        return Vec::new();
    }
    vec![TriviaToken {
        kind: TriviaKind::Ws,
        text: text.to_string(),
        post_ea: false,
    }]
}

/// Re-lex a single coarse `Comment` lexeme's text (one or more `//`/`/* */`
/// comments, possibly separated by whitespace) into alternating
/// `Ws`/`LineComment`/`MultilineComment` tokens.
pub fn refine_comment_run(text: &str) -> Vec<TriviaToken> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    let bytes = text.as_bytes();

    while pos < bytes.len() {
        if let Some(ws_len) = patterns::match_whitespace(&text[pos..]) {
            tokens.push(TriviaToken {
                kind: TriviaKind::Ws,
                text: text[pos..pos + ws_len].to_string(),
                post_ea: false,
            });
            pos += ws_len;
            continue;
        }
        let len = patterns::match_one_comment(&text[pos..])
            .expect("comment run text must be composed only of comments and whitespace");
        let kind = if bytes[pos + 1] == b'/' {
            TriviaKind::LineComment
        } else {
            TriviaKind::MultilineComment
        };
        tokens.push(TriviaToken {
            kind,
            text: text[pos..pos + len].to_string(),
            post_ea: false,
        });
        pos += len;
    }

    tokens
}

/// Mark every token in `tokens` as immediately preceding a member or
/// argument, matching the spec's "-pea" suffix.
pub fn mark_post_ea(mut tokens: Vec<TriviaToken>) -> Vec<TriviaToken> {
    for token in &mut tokens {
        token.post_ea = true;
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refines_mixed_comment_run() {
        let tokens = refine_comment_run("// one\n/* two */");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].kind, TriviaKind::LineComment);
        assert_eq!(tokens[1].kind, TriviaKind::Ws);
        assert_eq!(tokens[2].kind, TriviaKind::MultilineComment);
    }

    #[test]
    fn refines_comment_run_with_interstitial_whitespace() {
        let tokens = refine_comment_run("/* a */ /* b */");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].kind, TriviaKind::Ws);
    }

    #[test]
    fn pea_marker_round_trips_tag() {
        let tokens = mark_post_ea(refine_whitespace(" \t"));
        assert_eq!(tokens[0].tag(), "ws-pea");
    }
}
