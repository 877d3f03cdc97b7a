//! Source line tracking.
//!
//! The grammar in this crate family never needs byte-accurate spans: per
//! §9 of the design, line numbers only advance when whitespace/comment
//! lexemes are drained, which is an accepted approximation rather than a
//! precise source map. `Span` is kept to that single field so callers
//! can't accidentally rely on more precision than the parser actually
//! tracks.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 1-based source line number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Span {
    pub line: u32,
}

impl Span {
    /// The line a fresh parse/lex starts on.
    pub const START: Span = Span { line: 1 };

    pub fn new(line: u32) -> Self {
        Span { line }
    }
}
