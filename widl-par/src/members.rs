//! Interface / interface-mixin / namespace body members (§4.2.3).

use widl_lex::{LexemeKind, TriviaToken};

use crate::ast::{
    Attribute, ExtendedAttribute, IterableDeclaration, IterableKind, Member, Operation,
    Stringifier, TypeRole,
};
use crate::error::ParseErrorKind;
use crate::parser::{Parser, Result};

/// Which container a member list belongs to, since §4.2.3 restricts the
/// allowed productions per container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ContainerKind {
    Interface,
    InterfaceMixin,
    Namespace,
}

impl Parser {
    /// Parse one member, dispatching through the ordered attempts §4.2.3
    /// lists for `kind`. Fails with `UnknownMember` if nothing matches.
    pub(crate) fn parse_member(&mut self, kind: ContainerKind) -> Result<Member> {
        let ext_attrs = self.parse_extended_attributes()?;
        let leading_trivia = self.stream.take_trivia_pea().unwrap_or_default();

        if matches!(kind, ContainerKind::Interface | ContainerKind::InterfaceMixin)
            && self.stream.peek_keyword("const")
        {
            return Ok(Member::Const(self.parse_const(ext_attrs, leading_trivia)?));
        }

        if kind == ContainerKind::Interface
            && self.options.allow_nested_typedefs
            && self.stream.peek_keyword("typedef")
        {
            return Ok(Member::Typedef(self.parse_typedef(ext_attrs, leading_trivia)?));
        }

        if kind == ContainerKind::Interface && self.stream.peek_keyword("static") {
            return self.parse_static_member(ext_attrs, leading_trivia);
        }

        if matches!(kind, ContainerKind::Interface | ContainerKind::InterfaceMixin)
            && self.stream.peek_keyword("stringifier")
        {
            return self.parse_stringifier_member(ext_attrs, leading_trivia);
        }

        if kind == ContainerKind::Interface {
            if let Some(iterable) = self.try_parse_iterable(&ext_attrs, leading_trivia.clone())? {
                return Ok(Member::Iterable(iterable));
            }
        }

        let allow_inherit = kind == ContainerKind::Interface;
        if let Some(attribute) =
            self.try_parse_attribute(ext_attrs.clone(), allow_inherit, leading_trivia.clone())?
        {
            return Ok(Member::Attribute(attribute));
        }

        if !self.stream.peek_punct("(")
            && !matches!(self.stream.peek().map(|l| l.kind), Some(LexemeKind::Identifier))
        {
            return Err(self.error(ParseErrorKind::UnknownMember));
        }

        Ok(Member::Operation(self.parse_operation(ext_attrs, leading_trivia)?))
    }

    /// `static` keyword followed by a non-inherited attribute or a regular
    /// operation, both tagged `is_static: true`.
    fn parse_static_member(
        &mut self,
        ext_attrs: Vec<ExtendedAttribute>,
        leading_trivia: Vec<TriviaToken>,
    ) -> Result<Member> {
        self.expect_keyword("static", "static member")?;
        if self.stream.peek_keyword("inherit") {
            return Err(self.error(ParseErrorKind::InheritConflict));
        }
        if let Some(mut attribute) =
            self.try_parse_attribute(ext_attrs.clone(), false, leading_trivia.clone())?
        {
            attribute.is_static = true;
            return Ok(Member::Attribute(attribute));
        }
        let mut operation = self.parse_operation(ext_attrs, leading_trivia)?;
        operation.is_static = true;
        Ok(Member::Operation(operation))
    }

    /// `stringifier` alone, or followed by a non-inherited attribute or a
    /// regular operation, both tagged `stringifier: true`.
    fn parse_stringifier_member(
        &mut self,
        ext_attrs: Vec<ExtendedAttribute>,
        leading_trivia: Vec<TriviaToken>,
    ) -> Result<Member> {
        let span = self.span();
        self.expect_keyword("stringifier", "stringifier")?;
        if self.stream.eat_punct(";") {
            return Ok(Member::Stringifier(Stringifier {
                ext_attrs,
                leading_trivia,
                span,
            }));
        }
        if self.stream.peek_keyword("inherit") {
            return Err(self.error(ParseErrorKind::InheritConflict));
        }
        if let Some(mut attribute) =
            self.try_parse_attribute(ext_attrs.clone(), false, leading_trivia.clone())?
        {
            attribute.stringifier = true;
            return Ok(Member::Attribute(attribute));
        }
        let mut operation = self.parse_operation(ext_attrs, leading_trivia)?;
        operation.stringifier = true;
        Ok(Member::Operation(operation))
    }

    /// `( inherit )? ( readonly )? attribute TYPE NAME ;`. Returns `None`
    /// without consuming anything if the `attribute` keyword is absent —
    /// this production shares a `readonly` prefix with the iterable family
    /// and needs to roll back cleanly for the caller to try next.
    fn try_parse_attribute(
        &mut self,
        ext_attrs: Vec<ExtendedAttribute>,
        allow_inherit: bool,
        leading_trivia: Vec<TriviaToken>,
    ) -> Result<Option<Attribute>> {
        let span = self.span();
        let checkpoint = self.stream.checkpoint();

        let inherit = allow_inherit && self.stream.eat_keyword("inherit");
        let readonly = self.stream.eat_keyword("readonly");

        if !self.stream.eat_keyword("attribute") {
            self.stream.restore(checkpoint);
            return Ok(None);
        }

        let idl_type = self.parse_type(TypeRole::Attribute)?;
        self.check_attribute_type(&idl_type)?;
        let name = self.expect_identifier("attribute name")?;
        self.expect_semicolon("attribute")?;

        Ok(Some(Attribute {
            ext_attrs,
            is_static: false,
            stringifier: false,
            inherit,
            readonly,
            idl_type,
            name,
            leading_trivia,
            span,
        }))
    }

    /// `{getter|setter|deleter}* return_type name? ( args ) ;`.
    fn parse_operation(
        &mut self,
        ext_attrs: Vec<ExtendedAttribute>,
        leading_trivia: Vec<TriviaToken>,
    ) -> Result<Operation> {
        let span = self.span();
        let mut getter = false;
        let mut setter = false;
        let mut deleter = false;
        loop {
            if !getter && self.stream.eat_keyword("getter") {
                getter = true;
            } else if !setter && self.stream.eat_keyword("setter") {
                setter = true;
            } else if !deleter && self.stream.eat_keyword("deleter") {
                deleter = true;
            } else {
                break;
            }
        }

        let return_type = self.parse_return_type()?;
        let name = self.stream.eat_identifier();

        self.expect_punct("(", "operation arguments")?;
        let arguments = self.parse_argument_list()?;
        self.expect_punct(")", "operation arguments")?;
        self.expect_semicolon("operation")?;

        Ok(Operation {
            ext_attrs,
            is_static: false,
            stringifier: false,
            getter,
            setter,
            deleter,
            return_type,
            name,
            arguments,
            leading_trivia,
            span,
        })
    }

    /// `( readonly )? (iterable|legacyiterable|maplike|setlike) < T (, T)? > ;`.
    /// `readonly` is only accepted before `maplike`/`setlike`; seeing it
    /// before `iterable`/`legacyiterable` rolls the whole attempt back so
    /// the caller falls through to `attribute` (`readonly attribute ...`).
    fn try_parse_iterable(
        &mut self,
        ext_attrs: &[ExtendedAttribute],
        leading_trivia: Vec<TriviaToken>,
    ) -> Result<Option<IterableDeclaration>> {
        let span = self.span();
        let checkpoint = self.stream.checkpoint();

        let readonly = self.stream.eat_keyword("readonly");
        let kind = if self.stream.eat_keyword("iterable") {
            IterableKind::Iterable
        } else if self.stream.eat_keyword("legacyiterable") {
            IterableKind::LegacyIterable
        } else if self.stream.eat_keyword("maplike") {
            IterableKind::Maplike
        } else if self.stream.eat_keyword("setlike") {
            IterableKind::Setlike
        } else {
            self.stream.restore(checkpoint);
            return Ok(None);
        };

        if readonly && matches!(kind, IterableKind::Iterable | IterableKind::LegacyIterable) {
            self.stream.restore(checkpoint);
            return Ok(None);
        }

        self.expect_punct("<", "iterable declaration")?;
        let first = self.parse_type(TypeRole::Iterable)?;
        let (key_type, value_type) = if self.stream.eat_punct(",") {
            let second = self.parse_type(TypeRole::Iterable)?;
            (Some(first), second)
        } else {
            (None, first)
        };
        self.expect_punct(">", "iterable declaration")?;
        self.expect_semicolon("iterable declaration")?;

        match kind {
            IterableKind::Maplike if key_type.is_none() => {
                return Err(self.error(ParseErrorKind::GenericArity {
                    generic: "maplike".to_string(),
                    expected: "two",
                }));
            }
            IterableKind::Setlike if key_type.is_some() => {
                return Err(self.error(ParseErrorKind::GenericArity {
                    generic: "setlike".to_string(),
                    expected: "one",
                }));
            }
            IterableKind::LegacyIterable if key_type.is_some() => {
                return Err(self.error(ParseErrorKind::GenericArity {
                    generic: "legacyiterable".to_string(),
                    expected: "one",
                }));
            }
            _ => {}
        }

        Ok(Some(IterableDeclaration {
            ext_attrs: ext_attrs.to_vec(),
            kind,
            readonly,
            key_type,
            value_type,
            leading_trivia,
            span,
        }))
    }
}
