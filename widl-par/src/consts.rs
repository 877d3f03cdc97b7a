//! `const` members and the shared default-value grammar (§4.2.2).

use widl_lex::{LexemeKind, TriviaToken};

use crate::ast::{Const, DefaultValue, ExtendedAttribute, IdlTypeValue, TypeDescriptor, TypeRole};
use crate::error::ParseErrorKind;
use crate::parser::{Parser, Result};

impl Parser {
    /// `const TYPE ?? NAME = VALUE ;`. `TYPE` is a primitive type or a
    /// user-defined identifier (never a generic or union), with at most
    /// one trailing `?`.
    pub(crate) fn parse_const(
        &mut self,
        ext_attrs: Vec<ExtendedAttribute>,
        leading_trivia: Vec<TriviaToken>,
    ) -> Result<Const> {
        let span = self.span();
        self.expect_keyword("const", "const")?;
        let idl_type = self.parse_const_type()?;
        let name = self.expect_identifier("const name")?;
        self.expect_punct("=", "const")?;
        let value = self.parse_default_value()?;
        self.expect_semicolon("const")?;
        Ok(Const {
            ext_attrs,
            idl_type,
            name,
            value,
            leading_trivia,
            span,
        })
    }

    /// Const types are restricted to a bare primitive or identifier name,
    /// never a generic or union — so we bypass `parse_type`'s identifier
    /// `<` lookahead and build the descriptor directly.
    fn parse_const_type(&mut self) -> Result<TypeDescriptor> {
        let span = self.span();
        if let Some(name) = self.try_primitive_type_name() {
            return self.finish_const_type(name, span);
        }
        let name = self.expect_identifier("const type")?;
        self.finish_const_type(name, span)
    }

    fn finish_const_type(&mut self, name: String, span: widl_util::Span) -> Result<TypeDescriptor> {
        let nullable = self.stream.eat_punct("?");
        if nullable && name == "any" {
            return Err(self.error(ParseErrorKind::NullableAny));
        }
        if nullable && self.stream.eat_punct("?") {
            return Err(self.error(ParseErrorKind::DoubleNullable));
        }
        let value = IdlTypeValue::Name(name);
        let sequence = TypeDescriptor::is_sequence(&value);
        Ok(TypeDescriptor {
            role: TypeRole::Const,
            value,
            nullable,
            sequence,
            ext_attrs: Vec::new(),
            span,
        })
    }

    /// `true | false | null | Infinity | -Infinity | NaN | <numeric literal>
    /// | "<string>" | []`.
    pub(crate) fn parse_default_value(&mut self) -> Result<DefaultValue> {
        if self.stream.eat_keyword("true") {
            return Ok(DefaultValue::Boolean(true));
        }
        if self.stream.eat_keyword("false") {
            return Ok(DefaultValue::Boolean(false));
        }
        if self.stream.eat_keyword("null") {
            return Ok(DefaultValue::Null);
        }
        if self.stream.eat_keyword("NaN") {
            return Ok(DefaultValue::NaN);
        }
        if self.stream.eat_keyword("Infinity") {
            return Ok(DefaultValue::Infinity { negative: false });
        }
        if self.stream.peek_punct("-") && self.stream.peek_significant_n(1).map(|l| l.text.as_str()) == Some("Infinity") {
            self.stream.advance();
            self.stream.advance();
            return Ok(DefaultValue::Infinity { negative: true });
        }
        if self.stream.peek_punct("[") {
            self.stream.advance();
            self.expect_punct("]", "empty sequence default")?;
            return Ok(DefaultValue::EmptySequence);
        }
        if let Some(lexeme) = self.stream.peek() {
            match lexeme.kind {
                LexemeKind::Float | LexemeKind::Integer => {
                    let text = lexeme.text.clone();
                    self.stream.advance();
                    return Ok(DefaultValue::Number(text));
                }
                LexemeKind::String => {
                    let text = lexeme.text.clone();
                    self.stream.advance();
                    let inner = text
                        .strip_prefix('"')
                        .and_then(|t| t.strip_suffix('"'))
                        .unwrap_or(&text)
                        .to_string();
                    return Ok(DefaultValue::String(inner));
                }
                _ => {}
            }
        }
        Err(self.error(ParseErrorKind::MissingToken {
            expected: "default value".to_string(),
            context: "default".to_string(),
        }))
    }

    /// Helper shared with `types.rs`'s primitive dispatch but returning a
    /// plain name with no nullable/ext-attr handling, for `const`'s
    /// simplified type grammar.
    fn try_primitive_type_name(&mut self) -> Option<String> {
        self.try_primitive_type()
    }
}
