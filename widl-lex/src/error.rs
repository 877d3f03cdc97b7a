//! Lexer-internal error (§4.1 "If no pattern matches the cursor...").

use thiserror::Error;

/// The lexer's only failure mode. In practice every lexeme family falls
/// back to `other`, which always consumes at least one character, so this
/// only fires if that invariant is ever broken.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Token stream not progressing")]
pub struct LexError {
    pub line: u32,
}
