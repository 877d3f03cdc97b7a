//! Argument lists (§4.2.4).

use crate::ast::Argument;
use crate::error::ParseErrorKind;
use crate::parser::{Parser, Result};

impl Parser {
    /// `argument_list = argument ( , argument )*`, empty allowed. A
    /// trailing comma (a `,` immediately followed by `)`) is fatal.
    pub(crate) fn parse_argument_list(&mut self) -> Result<Vec<Argument>> {
        let mut arguments = Vec::new();
        if self.stream.peek_punct(")") {
            return Ok(arguments);
        }
        loop {
            arguments.push(self.parse_argument()?);
            if self.stream.eat_punct(",") {
                if self.stream.peek_punct(")") {
                    return Err(self.error(ParseErrorKind::TrailingComma(
                        "argument list".to_string(),
                    )));
                }
                continue;
            }
            break;
        }
        Ok(arguments)
    }

    /// One argument: extended attributes, optional `optional`, type, an
    /// optional `...` (only permitted when not `optional`), name, and an
    /// optional `= default` (only permitted when `optional`).
    fn parse_argument(&mut self) -> Result<Argument> {
        let span = self.span();
        let ext_attrs = self.parse_extended_attributes()?;
        let leading_trivia = self.stream.take_trivia_pea().unwrap_or_default();
        let optional = self.stream.eat_keyword("optional");
        let idl_type = self.parse_type(crate::ast::TypeRole::Argument)?;

        let variadic = if !optional {
            self.stream.eat_ellipsis()
        } else {
            false
        };

        let name = self.expect_identifier("argument name")?;

        let default = if optional && self.stream.eat_punct("=") {
            Some(self.parse_default_value()?)
        } else {
            None
        };

        Ok(Argument {
            ext_attrs,
            optional,
            variadic,
            idl_type,
            name,
            default,
            leading_trivia,
            span,
        })
    }
}
