//! Extended attribute lists (§4.2.5).
//!
//! Accepted subset: `[ EA ( , EA )* ]`, `EA = NAME ( = RHS )? ( ( args ) )?`.
//! `RHS` is a single lexeme value (identifier/float/integer/string) or a
//! parenthesised identifier list.

use widl_lex::LexemeKind;

use crate::ast::{ExtAttrRhs, ExtendedAttribute, LexemeValue};
use crate::error::ParseErrorKind;
use crate::parser::{Parser, Result};

impl Parser {
    /// Returns an empty vector when no `[` is present — this production is
    /// always optional at every call site.
    pub(crate) fn parse_extended_attributes(&mut self) -> Result<Vec<ExtendedAttribute>> {
        if !self.stream.eat_punct("[") {
            return Ok(Vec::new());
        }
        let mut attrs = vec![self.parse_one_extended_attribute()?];
        while self.stream.eat_punct(",") {
            attrs.push(self.parse_one_extended_attribute()?);
        }
        self.expect_punct("]", "extended attribute list")?;
        Ok(attrs)
    }

    fn parse_one_extended_attribute(&mut self) -> Result<ExtendedAttribute> {
        let span = self.span();
        let name = self.expect_identifier("extended attribute name")?;

        let rhs = if self.stream.eat_punct("=") {
            Some(self.parse_ext_attr_rhs()?)
        } else {
            None
        };

        let arguments = if self.stream.eat_punct("(") {
            let args = self.parse_argument_list()?;
            self.expect_punct(")", "extended attribute arguments")?;
            Some(args)
        } else {
            None
        };

        Ok(ExtendedAttribute {
            name,
            rhs,
            arguments,
            span,
        })
    }

    fn parse_ext_attr_rhs(&mut self) -> Result<ExtAttrRhs> {
        if self.stream.eat_punct("(") {
            let mut names = vec![self.expect_identifier("identifier list")?];
            while self.stream.eat_punct(",") {
                names.push(self.expect_identifier("identifier list")?);
            }
            self.expect_punct(")", "identifier list")?;
            return Ok(ExtAttrRhs::IdentifierList(names));
        }

        let kind = self.stream.peek().map(|l| l.kind);
        match kind {
            Some(LexemeKind::Identifier) => {
                let text = self.stream.eat_identifier().expect("peeked identifier");
                Ok(ExtAttrRhs::Value(LexemeValue::Identifier(text)))
            }
            Some(LexemeKind::Float) => {
                let text = self.stream.advance().expect("peeked float").text;
                Ok(ExtAttrRhs::Value(LexemeValue::Float(text)))
            }
            Some(LexemeKind::Integer) => {
                let text = self.stream.advance().expect("peeked integer").text;
                Ok(ExtAttrRhs::Value(LexemeValue::Integer(text)))
            }
            Some(LexemeKind::String) => {
                let text = self.stream.advance().expect("peeked string").text;
                let inner = text
                    .strip_prefix('"')
                    .and_then(|t| t.strip_suffix('"'))
                    .unwrap_or(&text)
                    .to_string();
                Ok(ExtAttrRhs::Value(LexemeValue::String(inner)))
            }
            _ => Err(self.error(ParseErrorKind::MissingExtendedAttributeRhs)),
        }
    }
}
