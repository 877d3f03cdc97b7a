//! The top-level dispatch loop (§4.2 "Top-level loop").

use crate::ast::{Definition, ExtendedAttribute};
use crate::error::ParseErrorKind;
use crate::parser::{Parser, Result};

impl Parser {
    /// Repeatedly read a leading extended-attribute block then dispatch to
    /// the first matching production. Fails if extended attributes were
    /// read with no definition following, or if lexemes remain unconsumed
    /// once nothing more matches.
    pub(crate) fn parse_top_level(&mut self) -> Result<Vec<Definition>> {
        let mut definitions = Vec::new();

        while !self.stream.is_at_end() {
            let ext_attrs = self.parse_extended_attributes()?;
            let had_ext_attrs = !ext_attrs.is_empty();
            let leading_trivia = self.stream.take_trivia_pea().unwrap_or_default();

            match self.try_parse_top_level_definition(ext_attrs, leading_trivia)? {
                Some(definition) => definitions.push(definition),
                None if had_ext_attrs => {
                    return Err(self.error(ParseErrorKind::StrayExtendedAttributes));
                }
                None => break,
            }
        }

        if !self.stream.is_at_end() {
            return Err(self.error(ParseErrorKind::UnrecognisedTokens));
        }

        Ok(definitions)
    }

    /// The ordered set of top-level productions (§4.2, items 1-9).
    /// `implements`/`includes` share one speculative attempt since both
    /// start with a bare identifier rather than a keyword.
    fn try_parse_top_level_definition(
        &mut self,
        ext_attrs: Vec<ExtendedAttribute>,
        leading_trivia: Vec<widl_lex::TriviaToken>,
    ) -> Result<Option<Definition>> {
        if self.stream.peek_keyword("callback") {
            return Ok(Some(self.parse_callback(ext_attrs, leading_trivia)?));
        }
        if self.stream.peek_keyword("interface") {
            return Ok(Some(self.parse_interface_or_mixin(ext_attrs, false, leading_trivia)?));
        }
        if self.stream.peek_keyword("partial") {
            return Ok(Some(self.parse_partial(ext_attrs, leading_trivia)?));
        }
        if self.stream.peek_keyword("dictionary") {
            return Ok(Some(self.parse_dictionary(ext_attrs, false, leading_trivia)?));
        }
        if self.stream.peek_keyword("enum") {
            return Ok(Some(self.parse_enum(ext_attrs, leading_trivia)?));
        }
        if self.stream.peek_keyword("typedef") {
            return Ok(Some(Definition::Typedef(
                self.parse_typedef(ext_attrs, leading_trivia)?,
            )));
        }
        if let Some(definition) =
            self.try_parse_implements_or_includes(ext_attrs.clone(), leading_trivia.clone())?
        {
            return Ok(Some(definition));
        }
        if self.stream.peek_keyword("namespace") {
            return Ok(Some(self.parse_namespace(ext_attrs, false, leading_trivia)?));
        }
        Ok(None)
    }
}
