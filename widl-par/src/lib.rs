//! widl-par — the Web IDL recursive-descent parser (§4.2, §6).
//!
//! [`parse`] is the single exported operation: tokenise `source` with
//! [`widl_lex::tokenise`], then run the hand-written parser over the
//! resulting lexemes, producing an ordered list of top-level
//! [`Definition`]s or a structured [`ParseError`]. No other entry points
//! are exposed — validators, emitters, and the public string-in/AST-out
//! wrapper live outside this crate.

mod arguments;
mod ast;
mod consts;
mod containers;
mod error;
mod extended_attributes;
mod members;
mod options;
mod parser;
mod token_stream;
mod top_level;
mod types;

pub use ast::*;
pub use error::{ParseError, ParseErrorKind};
pub use options::ParserOptions;

use parser::Parser;

/// Tokenise and parse `source` into its top-level definitions.
///
/// Total over the grammar this crate accepts; on any failure — lexer or
/// parser — returns a [`ParseError`] describing the first error and
/// aborts without partial results (§7: no local recovery).
#[tracing::instrument(level = "debug", skip(source), fields(len = source.len()))]
pub fn parse(source: &str, options: ParserOptions) -> Result<Vec<Definition>, ParseError> {
    let lexemes = widl_lex::tokenise(source)
        .map_err(|e| ParseError::new(ParseErrorKind::Lexer(e.clone()), e.line, None, &[]))?;

    let mut parser = Parser::new(lexemes, options);
    let definitions = parser.parse_top_level()?;

    tracing::debug!(definitions = definitions.len(), "parse complete");
    Ok(definitions)
}
