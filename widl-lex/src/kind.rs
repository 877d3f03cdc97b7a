//! Lexeme and trivia tags (§3 "Lexeme").

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The coarse tag every lexeme carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum LexemeKind {
    Float,
    Integer,
    Identifier,
    String,
    Whitespace,
    Comment,
    Other,
}

impl LexemeKind {
    pub fn is_trivia(self) -> bool {
        matches!(self, LexemeKind::Whitespace | LexemeKind::Comment)
    }
}

/// The fine-grained tag produced when a coarse `Whitespace`/`Comment`
/// lexeme is re-lexed for trivia capture (§4.2.8). `post_ea` is set when
/// the trivia was collected immediately before a member or argument,
/// matching the spec's "-pea" (post-extended-attribute) suffix convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TriviaKind {
    Ws,
    LineComment,
    MultilineComment,
}

impl TriviaKind {
    /// The tag text as the spec names it, e.g. `"ws"` or `"line-comment-pea"`.
    pub fn tag(self, post_ea: bool) -> &'static str {
        match (self, post_ea) {
            (TriviaKind::Ws, false) => "ws",
            (TriviaKind::Ws, true) => "ws-pea",
            (TriviaKind::LineComment, false) => "line-comment",
            (TriviaKind::LineComment, true) => "line-comment-pea",
            (TriviaKind::MultilineComment, false) => "multiline-comment",
            (TriviaKind::MultilineComment, true) => "multiline-comment-pea",
        }
    }
}
