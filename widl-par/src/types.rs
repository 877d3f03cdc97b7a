//! The type grammar (§4.2.1).
//!
//! `type = single_type | union_type`; `single_type` tries the primitive
//! families first, then falls back to a named (possibly generic) type.
//! Every type ends with the shared nullable-suffix handling, which also
//! enforces the `any` and double-`?` restrictions from §3's invariants.

use crate::ast::{ExtendedAttribute, IdlTypeValue, ReturnType, TypeDescriptor, TypeRole};
use crate::error::ParseErrorKind;
use crate::parser::{Parser, Result};

const RECORD_KEY_NAMES: &[&str] = &["DOMString", "USVString", "ByteString"];

impl Parser {
    /// `type_with_extended_attributes`: a leading `[...]` block attached to
    /// the resulting descriptor.
    pub(crate) fn parse_type_with_ext_attrs(&mut self, role: TypeRole) -> Result<TypeDescriptor> {
        let ext_attrs = self.parse_extended_attributes()?;
        let mut ty = self.parse_type(role)?;
        ty.ext_attrs = ext_attrs;
        Ok(ty)
    }

    pub(crate) fn parse_type(&mut self, role: TypeRole) -> Result<TypeDescriptor> {
        if self.stream.peek_punct("(") {
            self.parse_union_type(role)
        } else {
            self.parse_single_type(role)
        }
    }

    fn parse_single_type(&mut self, role: TypeRole) -> Result<TypeDescriptor> {
        let span = self.span();
        if let Some(name) = self.try_primitive_type() {
            return self.finish_type(role, IdlTypeValue::Name(name), Vec::new(), span);
        }

        let name = self.expect_identifier("type name")?;
        if self.stream.eat_punct("<") {
            let subtypes = self.parse_generic_subtypes(&name)?;
            self.expect_punct(">", &format!("{name}<>"))?;
            return self.finish_type(
                role,
                IdlTypeValue::Generic {
                    generic: name,
                    subtypes,
                },
                Vec::new(),
                span,
            );
        }
        self.finish_type(role, IdlTypeValue::Name(name), Vec::new(), span)
    }

    /// `( T ( or T )+ )`, at least two members.
    fn parse_union_type(&mut self, role: TypeRole) -> Result<TypeDescriptor> {
        let span = self.span();
        self.expect_punct("(", "union type")?;
        let mut members = vec![self.parse_type_with_ext_attrs(TypeRole::UnionMember)?];
        while self.stream.eat_keyword("or") {
            members.push(self.parse_type_with_ext_attrs(TypeRole::UnionMember)?);
        }
        self.expect_punct(")", "union type")?;
        if members.len() < 2 {
            return Err(self.error(ParseErrorKind::MissingToken {
                expected: "`or`".to_string(),
                context: "union type".to_string(),
            }));
        }
        self.finish_type(role, IdlTypeValue::Union(members), Vec::new(), span)
    }

    /// `return_type = type("return-type") | "void"`.
    pub(crate) fn parse_return_type(&mut self) -> Result<ReturnType> {
        let span = self.span();
        if self.stream.eat_keyword("void") {
            return Ok(ReturnType {
                value: IdlTypeValue::Name("void".to_string()),
                is_void: true,
                span,
            });
        }
        let ty = self.parse_type(TypeRole::Return)?;
        Ok(ReturnType {
            value: ty.value,
            is_void: false,
            span: ty.span,
        })
    }

    /// §3: "An attribute's idlType is neither a sequence<…> nor a
    /// record<…, …>."
    pub(crate) fn check_attribute_type(&self, ty: &TypeDescriptor) -> Result<()> {
        if let IdlTypeValue::Generic { generic, .. } = &ty.value {
            if generic == "sequence" || generic == "record" {
                return Err(self.error(ParseErrorKind::AttributeSequenceOrRecord));
            }
        }
        Ok(())
    }

    pub(crate) fn try_primitive_type(&mut self) -> Option<String> {
        let checkpoint = self.stream.checkpoint();

        if self.stream.eat_keyword("unsigned") {
            if self.stream.eat_keyword("short") {
                return Some("unsigned short".to_string());
            }
            if self.stream.eat_keyword("long") {
                if self.stream.eat_keyword("long") {
                    return Some("unsigned long long".to_string());
                }
                return Some("unsigned long".to_string());
            }
            self.stream.restore(checkpoint);
            return None;
        }
        if self.stream.eat_keyword("short") {
            return Some("short".to_string());
        }
        if self.stream.eat_keyword("long") {
            if self.stream.eat_keyword("long") {
                return Some("long long".to_string());
            }
            return Some("long".to_string());
        }
        if self.stream.eat_keyword("unrestricted") {
            if self.stream.eat_keyword("float") {
                return Some("unrestricted float".to_string());
            }
            if self.stream.eat_keyword("double") {
                return Some("unrestricted double".to_string());
            }
            self.stream.restore(checkpoint);
            return None;
        }
        if self.stream.eat_keyword("float") {
            return Some("float".to_string());
        }
        if self.stream.eat_keyword("double") {
            return Some("double".to_string());
        }
        if self.stream.eat_keyword("boolean") {
            return Some("boolean".to_string());
        }
        if self.stream.eat_keyword("byte") {
            return Some("byte".to_string());
        }
        if self.stream.eat_keyword("octet") {
            return Some("octet".to_string());
        }
        None
    }

    fn parse_generic_subtypes(&mut self, generic: &str) -> Result<Vec<TypeDescriptor>> {
        let mut subtypes = Vec::new();
        loop {
            subtypes.push(self.parse_type_with_ext_attrs(TypeRole::Generic)?);
            if self.stream.eat_punct(",") {
                continue;
            }
            break;
        }

        match generic {
            "sequence" if subtypes.len() != 1 => {
                return Err(self.error(ParseErrorKind::GenericArity {
                    generic: "sequence".to_string(),
                    expected: "one",
                }));
            }
            "record" => {
                if subtypes.len() != 2 {
                    return Err(self.error(ParseErrorKind::GenericArity {
                        generic: "record".to_string(),
                        expected: "two",
                    }));
                }
                self.check_record_key(&subtypes[0])?;
            }
            "Promise" => {
                if let Some(first) = subtypes.first() {
                    if !first.ext_attrs.is_empty() {
                        return Err(self.error(ParseErrorKind::PromiseExtendedAttribute));
                    }
                }
            }
            _ => {}
        }
        Ok(subtypes)
    }

    fn check_record_key(&self, key: &TypeDescriptor) -> Result<()> {
        if !key.ext_attrs.is_empty() {
            return Err(self.error(ParseErrorKind::RecordKeyType));
        }
        match &key.value {
            IdlTypeValue::Name(name) if RECORD_KEY_NAMES.contains(&name.as_str()) => Ok(()),
            _ => Err(self.error(ParseErrorKind::RecordKeyType)),
        }
    }

    /// Builds the descriptor and applies the shared `?` suffix handling
    /// (at most one, never on `any`).
    fn finish_type(
        &mut self,
        role: TypeRole,
        value: IdlTypeValue,
        ext_attrs: Vec<ExtendedAttribute>,
        span: widl_util::Span,
    ) -> Result<TypeDescriptor> {
        let nullable = self.parse_nullable_suffix(&value)?;
        let sequence = TypeDescriptor::is_sequence(&value);
        Ok(TypeDescriptor {
            role,
            value,
            nullable,
            sequence,
            ext_attrs,
            span,
        })
    }

    fn parse_nullable_suffix(&mut self, value: &IdlTypeValue) -> Result<bool> {
        if !self.stream.eat_punct("?") {
            return Ok(false);
        }
        if matches!(value, IdlTypeValue::Name(name) if name == "any") {
            return Err(self.error(ParseErrorKind::NullableAny));
        }
        if self.stream.eat_punct("?") {
            return Err(self.error(ParseErrorKind::DoubleNullable));
        }
        Ok(true)
    }
}
