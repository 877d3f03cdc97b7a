//! Container productions (§4.2.6): `dictionary`, `enum`, `typedef`,
//! `implements`/`includes`, `callback` (function type), `partial`, and the
//! assembly of `interface`/`interface mixin`/`namespace`/`callback
//! interface` bodies around the member lists `members.rs` parses.

use widl_lex::{LexemeKind, TriviaToken};

use crate::ast::{
    Callback, CallbackInterface, Definition, Dictionary, Enum, EnumValue, ExtendedAttribute,
    Field, Implements, Includes, Interface, InterfaceMixin, Namespace, Typedef, TypeRole,
};
use crate::error::ParseErrorKind;
use crate::members::ContainerKind;
use crate::parser::{Parser, Result};

impl Parser {
    fn parse_member_list(&mut self, kind: ContainerKind) -> Result<Vec<crate::ast::Member>> {
        let mut members = Vec::new();
        while !self.stream.peek_punct("}") {
            if self.stream.is_at_end() {
                return Err(self.error(ParseErrorKind::Unterminated("container body".to_string())));
            }
            members.push(self.parse_member(kind)?);
        }
        self.stream.advance();
        Ok(members)
    }

    /// `interface`, dispatching to a regular interface or (if `mixin`
    /// follows) an interface mixin.
    pub(crate) fn parse_interface_or_mixin(
        &mut self,
        ext_attrs: Vec<ExtendedAttribute>,
        partial: bool,
        leading_trivia: Vec<TriviaToken>,
    ) -> Result<Definition> {
        let span = self.span();
        self.expect_keyword("interface", "interface")?;

        if self.stream.eat_keyword("mixin") {
            let name = self.expect_identifier("interface mixin name")?;
            let label = format!("{}interface mixin {name}", partial_prefix(partial));
            return self.with_current(label, move |parser| {
                parser.expect_punct("{", "interface mixin body")?;
                let members = parser.parse_member_list(ContainerKind::InterfaceMixin)?;
                parser.expect_semicolon("interface mixin")?;
                if !partial {
                    parser.declare(&name, "interface mixin")?;
                }
                Ok(Definition::InterfaceMixin(InterfaceMixin {
                    ext_attrs,
                    partial,
                    name,
                    members,
                    leading_trivia,
                    span,
                }))
            });
        }

        let name = self.expect_identifier("interface name")?;
        let label = format!("{}interface {name}", partial_prefix(partial));
        self.with_current(label, move |parser| {
            let inheritance = if parser.stream.eat_punct(":") {
                Some(parser.expect_identifier("parent interface name")?)
            } else {
                None
            };
            parser.expect_punct("{", "interface body")?;
            let members = parser.parse_member_list(ContainerKind::Interface)?;
            parser.expect_semicolon("interface")?;
            if !partial {
                parser.declare(&name, "interface")?;
            }
            Ok(Definition::Interface(Interface {
                ext_attrs,
                partial,
                name,
                inheritance,
                members,
                leading_trivia,
                span,
            }))
        })
    }

    /// `callback`, dispatching to a callback interface (if `interface`
    /// follows) or a standalone callback function type.
    pub(crate) fn parse_callback(
        &mut self,
        ext_attrs: Vec<ExtendedAttribute>,
        leading_trivia: Vec<TriviaToken>,
    ) -> Result<Definition> {
        let span = self.span();
        self.expect_keyword("callback", "callback")?;

        if self.stream.eat_keyword("interface") {
            let name = self.expect_identifier("callback interface name")?;
            let label = format!("callback interface {name}");
            return self.with_current(label, move |parser| {
                parser.expect_punct("{", "callback interface body")?;
                let members = parser.parse_member_list(ContainerKind::Interface)?;
                parser.expect_semicolon("callback interface")?;
                parser.declare(&name, "callback interface")?;
                Ok(Definition::CallbackInterface(CallbackInterface {
                    ext_attrs,
                    name,
                    members,
                    leading_trivia,
                    span,
                }))
            });
        }

        let name = self.expect_identifier("callback name")?;
        let label = format!("callback {name}");
        self.with_current(label, move |parser| {
            parser.expect_punct("=", "callback")?;
            let return_type = parser.parse_return_type()?;
            parser.expect_punct("(", "callback arguments")?;
            let arguments = parser.parse_argument_list()?;
            parser.expect_punct(")", "callback arguments")?;
            parser.expect_semicolon("callback")?;
            parser.declare(&name, "callback")?;
            Ok(Definition::Callback(Callback {
                ext_attrs,
                name,
                return_type,
                arguments,
                leading_trivia,
                span,
            }))
        })
    }

    /// `partial` alone, before `dictionary`, `interface`, or `namespace`.
    /// The wrapped node's name is never registered.
    pub(crate) fn parse_partial(
        &mut self,
        ext_attrs: Vec<ExtendedAttribute>,
        leading_trivia: Vec<TriviaToken>,
    ) -> Result<Definition> {
        self.expect_keyword("partial", "partial")?;
        if self.stream.peek_keyword("dictionary") {
            self.parse_dictionary(ext_attrs, true, leading_trivia)
        } else if self.stream.peek_keyword("interface") {
            self.parse_interface_or_mixin(ext_attrs, true, leading_trivia)
        } else if self.stream.peek_keyword("namespace") {
            self.parse_namespace(ext_attrs, true, leading_trivia)
        } else {
            Err(self.error(ParseErrorKind::MissingToken {
                expected: "dictionary, interface, or namespace".to_string(),
                context: "partial".to_string(),
            }))
        }
    }

    pub(crate) fn parse_namespace(
        &mut self,
        ext_attrs: Vec<ExtendedAttribute>,
        partial: bool,
        leading_trivia: Vec<TriviaToken>,
    ) -> Result<Definition> {
        let span = self.span();
        self.expect_keyword("namespace", "namespace")?;
        let name = self.expect_identifier("namespace name")?;
        let label = format!("{}namespace {name}", partial_prefix(partial));
        self.with_current(label, move |parser| {
            parser.expect_punct("{", "namespace body")?;
            let members = parser.parse_member_list(ContainerKind::Namespace)?;
            parser.expect_semicolon("namespace")?;
            if !partial {
                parser.declare(&name, "namespace")?;
            }
            Ok(Definition::Namespace(Namespace {
                ext_attrs,
                partial,
                name,
                members,
                leading_trivia,
                span,
            }))
        })
    }

    pub(crate) fn parse_dictionary(
        &mut self,
        ext_attrs: Vec<ExtendedAttribute>,
        partial: bool,
        leading_trivia: Vec<TriviaToken>,
    ) -> Result<Definition> {
        let span = self.span();
        self.expect_keyword("dictionary", "dictionary")?;
        let name = self.expect_identifier("dictionary name")?;
        let label = format!("{}dictionary {name}", partial_prefix(partial));
        self.with_current(label, move |parser| {
            let inheritance = if parser.stream.eat_punct(":") {
                Some(parser.expect_identifier("parent dictionary name")?)
            } else {
                None
            };
            parser.expect_punct("{", "dictionary body")?;
            let fields = parser.parse_field_list()?;
            parser.expect_semicolon("dictionary")?;
            if !partial {
                parser.declare(&name, "dictionary")?;
            }
            Ok(Definition::Dictionary(Dictionary {
                ext_attrs,
                partial,
                name,
                inheritance,
                fields,
                leading_trivia,
                span,
            }))
        })
    }

    fn parse_field_list(&mut self) -> Result<Vec<Field>> {
        let mut fields = Vec::new();
        while !self.stream.peek_punct("}") {
            if self.stream.is_at_end() {
                return Err(self.error(ParseErrorKind::Unterminated("dictionary body".to_string())));
            }
            fields.push(self.parse_field()?);
        }
        self.stream.advance();
        Ok(fields)
    }

    /// `extAttrs required? TYPE NAME ( = default )? ;`. `required` with a
    /// default is fatal.
    fn parse_field(&mut self) -> Result<Field> {
        let span = self.span();
        let ext_attrs = self.parse_extended_attributes()?;
        let leading_trivia = self.stream.take_trivia_pea().unwrap_or_default();
        let required = self.stream.eat_keyword("required");
        let idl_type = self.parse_type(TypeRole::Field)?;
        let name = self.expect_identifier("field name")?;
        let default = if self.stream.eat_punct("=") {
            Some(self.parse_default_value()?)
        } else {
            None
        };
        self.expect_semicolon("dictionary field")?;

        if required && default.is_some() {
            return Err(self.error(ParseErrorKind::RequiredWithDefault));
        }

        Ok(Field {
            ext_attrs,
            required,
            idl_type,
            name,
            default,
            leading_trivia,
            span,
        })
    }

    /// `enum NAME { STRING ( , STRING )* ,? } ;`. Empty bodies are
    /// grammatically permitted.
    pub(crate) fn parse_enum(
        &mut self,
        ext_attrs: Vec<ExtendedAttribute>,
        leading_trivia: Vec<TriviaToken>,
    ) -> Result<Definition> {
        let span = self.span();
        self.expect_keyword("enum", "enum")?;
        let name = self.expect_identifier("enum name")?;
        let label = format!("enum {name}");
        self.with_current(label, move |parser| {
            parser.expect_punct("{", "enum body")?;
            let mut values = Vec::new();
            while !parser.stream.peek_punct("}") {
                values.push(parser.parse_enum_value()?);
                if parser.stream.eat_punct(",") {
                    continue;
                }
                break;
            }
            parser.expect_punct("}", "enum body")?;
            parser.expect_semicolon("enum")?;
            parser.declare(&name, "enum")?;
            Ok(Definition::Enum(Enum {
                ext_attrs,
                name,
                values,
                leading_trivia,
                span,
            }))
        })
    }

    fn parse_enum_value(&mut self) -> Result<EnumValue> {
        let span = self.span();
        match self.stream.peek() {
            Some(lexeme) if lexeme.kind == LexemeKind::String => {
                let text = lexeme.text.clone();
                self.stream.advance();
                let value = text
                    .strip_prefix('"')
                    .and_then(|t| t.strip_suffix('"'))
                    .unwrap_or(&text)
                    .to_string();
                Ok(EnumValue { value, span })
            }
            _ => Err(self.error(ParseErrorKind::MissingToken {
                expected: "string literal".to_string(),
                context: "enum value".to_string(),
            })),
        }
    }

    /// `typedef TYPE NAME ;`. Shared between top-level `typedef` and the
    /// nested form permitted inside interface bodies when
    /// `ParserOptions::allow_nested_typedefs` is set.
    pub(crate) fn parse_typedef(
        &mut self,
        ext_attrs: Vec<ExtendedAttribute>,
        leading_trivia: Vec<TriviaToken>,
    ) -> Result<Typedef> {
        let span = self.span();
        self.expect_keyword("typedef", "typedef")?;
        let idl_type = self.parse_type_with_ext_attrs(TypeRole::Typedef)?;
        let name = self.expect_identifier("typedef name")?;
        self.expect_semicolon("typedef")?;
        self.declare(&name, "typedef")?;
        Ok(Typedef {
            ext_attrs,
            idl_type,
            name,
            leading_trivia,
            span,
        })
    }

    /// Speculative `A implements B ;` / `A includes B ;`. Rolls back to
    /// the checkpoint and returns `None` if the second keyword never
    /// shows up, so a bare leading identifier can be reconsidered by a
    /// later top-level production.
    pub(crate) fn try_parse_implements_or_includes(
        &mut self,
        ext_attrs: Vec<ExtendedAttribute>,
        leading_trivia: Vec<TriviaToken>,
    ) -> Result<Option<Definition>> {
        let span = self.span();
        let checkpoint = self.stream.checkpoint();

        let target = match self.stream.eat_identifier() {
            Some(name) => name,
            None => return Ok(None),
        };

        if self.stream.eat_keyword("implements") {
            let implements = match self.stream.eat_identifier() {
                Some(name) => name,
                None => {
                    self.stream.restore(checkpoint);
                    return Ok(None);
                }
            };
            self.expect_semicolon("implements")?;
            return Ok(Some(Definition::Implements(Implements {
                ext_attrs,
                target,
                implements,
                leading_trivia,
                span,
            })));
        }

        if self.stream.eat_keyword("includes") {
            let includes = match self.stream.eat_identifier() {
                Some(name) => name,
                None => {
                    self.stream.restore(checkpoint);
                    return Ok(None);
                }
            };
            self.expect_semicolon("includes")?;
            return Ok(Some(Definition::Includes(Includes {
                ext_attrs,
                target,
                includes,
                leading_trivia,
                span,
            })));
        }

        self.stream.restore(checkpoint);
        Ok(None)
    }
}

fn partial_prefix(partial: bool) -> &'static str {
    if partial {
        "partial "
    } else {
        ""
    }
}
