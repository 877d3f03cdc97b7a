//! The AST (§3 "Data model").
//!
//! One tagged union per spec table: `Definition` for top-level forms,
//! `Member` for interface/namespace/mixin bodies, `TypeDescriptor` for the
//! recursive type grammar. Every node that can carry extended attributes
//! stores them as `Vec<ExtendedAttribute>` in declaration order.
//!
//! Trivia capture (§4.2.8) is threaded directly onto the container/member
//! node it precedes (`leading_trivia`, the "-pea" tokens `TokenStream::
//! take_trivia_pea` collects immediately after a node's own extended
//! attributes), rather than kept as a side-table the parser never reads
//! back — see DESIGN.md. When `ParserOptions::ws` is off the field is
//! always empty, matching §9's "stub that still sets empty-string/empty
//! placeholders" fallback.
//!
//! Serialized shape: every enum that stands for one of §3's tagged unions
//! carries `#[serde(tag = "type", ...)]` (or `untagged`/`content` where the
//! variants aren't all struct-shaped), and every struct renames its fields
//! to `camelCase` so the JSON produced matches §3/§8's documented AST shape
//! (`idlType`, `extAttrs`, ...) rather than Rust's own snake_case.

use widl_lex::TriviaToken;
use widl_util::Span;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! ast_derive {
    () => {
        #[derive(Clone, Debug, PartialEq)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    };
}

ast_derive! {}
pub struct ExtendedAttribute {
    pub name: String,
    pub rhs: Option<ExtAttrRhs>,
    /// Nested extended attributes on `rhs`'s argument list, if any (e.g.
    /// `[LegacyFactoryFunction=Foo(long x)]` has none at this level, but
    /// `[Constructor([Clamp] long x)]`'s argument does).
    pub arguments: Option<Vec<Argument>>,
    pub span: Span,
}

/// A single lexeme's kind and text, used where the grammar accepts "any
/// lexeme value" rather than a specific kind (§3's extended-attribute RHS).
///
/// Serialized untagged — just the raw string — matching §3's "a single
/// lexeme value" (not a `{kind, text}` object).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum LexemeValue {
    Identifier(String),
    Float(String),
    Integer(String),
    String(String),
}

/// Serialized untagged: `Value` flattens to the bare lexeme value,
/// `IdentifierList` to a plain JSON array — matching §3's "null, a single
/// lexeme value, ... or an identifier-list" description of `rhs` directly.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ExtAttrRhs {
    Value(LexemeValue),
    /// `[Exposed=(Window,Worker)]`.
    IdentifierList(Vec<String>),
}

ast_derive! {}
pub struct Argument {
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub optional: bool,
    pub variadic: bool,
    pub idl_type: TypeDescriptor,
    pub name: String,
    pub default: Option<DefaultValue>,
    pub leading_trivia: Vec<TriviaToken>,
    pub span: Span,
}

/// Which syntactic position a `TypeDescriptor` was parsed from, carried so
/// error messages and §4.2.1 rules (no sequence/record in attributes, at
/// most one `?`) can be enforced without re-deriving it from context.
///
/// §3 gives this field's serialized form as one of a fixed set of
/// kebab-case strings, or `null` for a nested type with no role of its
/// own — not a representation `#[derive(Serialize)]` can produce directly,
/// so `TypeRole` gets a hand-written `Serialize` impl below instead of
/// going through `ast_derive!`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub enum TypeRole {
    Return,
    Attribute,
    Argument,
    Const,
    /// `dictionary-type`: a dictionary field's type.
    Field,
    Typedef,
    Iterable,
    /// A nested type with no role of its own: a generic subtype, a union
    /// member, or a callback's return/argument types reuse these roles
    /// directly rather than adding another null-role variant.
    Generic,
    UnionMember,
}

#[cfg(feature = "serde")]
impl Serialize for TypeRole {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            TypeRole::Return => serializer.serialize_str("return-type"),
            TypeRole::Attribute => serializer.serialize_str("attribute-type"),
            TypeRole::Argument => serializer.serialize_str("argument-type"),
            TypeRole::Const => serializer.serialize_str("const-type"),
            TypeRole::Field => serializer.serialize_str("dictionary-type"),
            TypeRole::Typedef => serializer.serialize_str("typedef-type"),
            TypeRole::Iterable | TypeRole::Generic | TypeRole::UnionMember => {
                serializer.serialize_none()
            }
        }
    }
}

ast_derive! {}
pub struct TypeDescriptor {
    pub role: TypeRole,
    #[cfg_attr(feature = "serde", serde(rename = "idlType"))]
    pub value: IdlTypeValue,
    pub nullable: bool,
    /// Legacy flag from the original JS AST: `true` iff `value` is
    /// `IdlTypeValue::Generic { generic: "sequence", .. }`. Kept alongside
    /// `value` rather than derived at every read site, since §3 names it as
    /// its own field and §8 asserts `sequence == (generic == "sequence")`
    /// as an invariant over every produced descriptor.
    pub sequence: bool,
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub span: Span,
}

impl TypeDescriptor {
    /// `sequence == (generic == "sequence")`, computed once at construction
    /// so every other reader can trust the field directly (§8).
    pub(crate) fn is_sequence(value: &IdlTypeValue) -> bool {
        matches!(value, IdlTypeValue::Generic { generic, .. } if generic == "sequence")
    }
}

/// The recursive shape described in §3: a type is a bare name, a single
/// generic/union expansion, or (inside a union) a list of alternatives.
///
/// Serialized untagged: a `Name` becomes a plain JSON string, `Generic`
/// becomes `{generic, subtypes}`, `Union` becomes a plain JSON array —
/// matching §3's "either a string name, or a nested descriptor, or a list
/// of descriptors" description of `idlType` directly, rather than wrapping
/// every case in an extra tag object.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum IdlTypeValue {
    /// `DOMString`, `long`, `Foo`, ...
    Name(String),
    /// `sequence<T>`, `Promise<T>`, `FrozenArray<T>`, `record<K, V>`.
    Generic {
        generic: String,
        subtypes: Vec<TypeDescriptor>,
    },
    /// `(A or B or C)`.
    Union(Vec<TypeDescriptor>),
}

/// Tagged with `type` + `value` (adjacently tagged), matching §8 scenario
/// 3's `{type: "string", value: "hi"}` shape exactly. The per-variant tags
/// follow §9's literal casing (`"Infinity"`/`"NaN"` keep their IDL-keyword
/// capitalization; the rest are lowercase), so `rename_all` alone can't
/// express it — each variant is renamed explicitly instead.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "value"))]
pub enum DefaultValue {
    #[cfg_attr(feature = "serde", serde(rename = "boolean"))]
    Boolean(bool),
    #[cfg_attr(feature = "serde", serde(rename = "null"))]
    Null,
    #[cfg_attr(feature = "serde", serde(rename = "Infinity"))]
    Infinity { negative: bool },
    #[cfg_attr(feature = "serde", serde(rename = "NaN"))]
    NaN,
    #[cfg_attr(feature = "serde", serde(rename = "number"))]
    Number(String),
    #[cfg_attr(feature = "serde", serde(rename = "string"))]
    String(String),
    /// `[]`, the only empty-sequence default literal §4.2.2 allows.
    #[cfg_attr(feature = "serde", serde(rename = "sequence"))]
    EmptySequence,
}

ast_derive! {}
pub struct Const {
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub idl_type: TypeDescriptor,
    pub name: String,
    pub value: DefaultValue,
    pub leading_trivia: Vec<TriviaToken>,
    pub span: Span,
}

ast_derive! {}
pub struct ReturnType {
    pub value: IdlTypeValue,
    /// `true` only for the bare keyword `void` used as a return type.
    pub is_void: bool,
    pub span: Span,
}

ast_derive! {}
pub struct Operation {
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub is_static: bool,
    pub stringifier: bool,
    pub getter: bool,
    pub setter: bool,
    pub deleter: bool,
    pub return_type: ReturnType,
    /// Absent for unnamed special operations (anonymous getter/setter/deleter).
    pub name: Option<String>,
    pub arguments: Vec<Argument>,
    pub leading_trivia: Vec<TriviaToken>,
    pub span: Span,
}

ast_derive! {}
pub struct Attribute {
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub is_static: bool,
    pub stringifier: bool,
    pub inherit: bool,
    pub readonly: bool,
    pub idl_type: TypeDescriptor,
    pub name: String,
    pub leading_trivia: Vec<TriviaToken>,
    pub span: Span,
}

/// Serialized lowercase, matching the bare IDL keywords (`legacyiterable`,
/// not `legacy-iterable`) rather than a word-split case convention.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum IterableKind {
    /// `iterable<V>` or `iterable<K, V>`.
    Iterable,
    /// `legacyiterable<V>`.
    LegacyIterable,
    /// `maplike<K, V>`.
    Maplike,
    /// `setlike<V>`.
    Setlike,
}

ast_derive! {}
pub struct IterableDeclaration {
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub kind: IterableKind,
    pub readonly: bool,
    pub key_type: Option<TypeDescriptor>,
    pub value_type: TypeDescriptor,
    pub leading_trivia: Vec<TriviaToken>,
    pub span: Span,
}

ast_derive! {}
pub struct Stringifier {
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub leading_trivia: Vec<TriviaToken>,
    pub span: Span,
}

/// One member of an interface, interface mixin, or namespace body (§4.2.3).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "kebab-case"))]
pub enum Member {
    Const(Const),
    Attribute(Attribute),
    Operation(Operation),
    Iterable(IterableDeclaration),
    /// A bare `stringifier;` with no attribute/operation attached.
    Stringifier(Stringifier),
    /// A `typedef` nested in a container body, permitted only when
    /// `ParserOptions::allow_nested_typedefs` is set.
    Typedef(Typedef),
}

ast_derive! {}
pub struct Field {
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub required: bool,
    pub idl_type: TypeDescriptor,
    pub name: String,
    pub default: Option<DefaultValue>,
    pub leading_trivia: Vec<TriviaToken>,
    pub span: Span,
}

ast_derive! {}
pub struct EnumValue {
    pub value: String,
    pub span: Span,
}

ast_derive! {}
pub struct Interface {
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub partial: bool,
    pub name: String,
    pub inheritance: Option<String>,
    pub members: Vec<Member>,
    pub leading_trivia: Vec<TriviaToken>,
    pub span: Span,
}

ast_derive! {}
pub struct InterfaceMixin {
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub partial: bool,
    pub name: String,
    pub members: Vec<Member>,
    pub leading_trivia: Vec<TriviaToken>,
    pub span: Span,
}

ast_derive! {}
pub struct CallbackInterface {
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub name: String,
    pub members: Vec<Member>,
    pub leading_trivia: Vec<TriviaToken>,
    pub span: Span,
}

ast_derive! {}
pub struct Namespace {
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub partial: bool,
    pub name: String,
    pub members: Vec<Member>,
    pub leading_trivia: Vec<TriviaToken>,
    pub span: Span,
}

ast_derive! {}
pub struct Dictionary {
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub partial: bool,
    pub name: String,
    pub inheritance: Option<String>,
    pub fields: Vec<Field>,
    pub leading_trivia: Vec<TriviaToken>,
    pub span: Span,
}

ast_derive! {}
pub struct Enum {
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub name: String,
    pub values: Vec<EnumValue>,
    pub leading_trivia: Vec<TriviaToken>,
    pub span: Span,
}

ast_derive! {}
pub struct Typedef {
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub idl_type: TypeDescriptor,
    pub name: String,
    pub leading_trivia: Vec<TriviaToken>,
    pub span: Span,
}

ast_derive! {}
pub struct Callback {
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub name: String,
    pub return_type: ReturnType,
    pub arguments: Vec<Argument>,
    pub leading_trivia: Vec<TriviaToken>,
    pub span: Span,
}

/// The legacy `A implements B;` form.
ast_derive! {}
pub struct Implements {
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub target: String,
    pub implements: String,
    pub leading_trivia: Vec<TriviaToken>,
    pub span: Span,
}

/// `A includes B;`.
ast_derive! {}
pub struct Includes {
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub target: String,
    pub includes: String,
    pub leading_trivia: Vec<TriviaToken>,
    pub span: Span,
}

/// One top-level form (§3 "Definition").
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "kebab-case"))]
pub enum Definition {
    Interface(Interface),
    InterfaceMixin(InterfaceMixin),
    CallbackInterface(CallbackInterface),
    Namespace(Namespace),
    Dictionary(Dictionary),
    Enum(Enum),
    Typedef(Typedef),
    Callback(Callback),
    Implements(Implements),
    Includes(Includes),
}

impl Definition {
    /// The kind label used by the name registry and by §7 error messages,
    /// e.g. `"interface"`, `"callback interface"`.
    pub fn kind_label(&self) -> &'static str {
        match self {
            Definition::Interface(_) => "interface",
            Definition::InterfaceMixin(_) => "interface mixin",
            Definition::CallbackInterface(_) => "callback interface",
            Definition::Namespace(_) => "namespace",
            Definition::Dictionary(_) => "dictionary",
            Definition::Enum(_) => "enum",
            Definition::Typedef(_) => "typedef",
            Definition::Callback(_) => "callback",
            Definition::Implements(_) => "implements",
            Definition::Includes(_) => "includes",
        }
    }

    /// The declared name, for registry purposes. `implements`/`includes`
    /// have no name of their own and are never registered.
    pub fn declared_name(&self) -> Option<&str> {
        match self {
            Definition::Interface(d) => Some(&d.name),
            Definition::InterfaceMixin(d) => Some(&d.name),
            Definition::CallbackInterface(d) => Some(&d.name),
            Definition::Namespace(d) => Some(&d.name),
            Definition::Dictionary(d) => Some(&d.name),
            Definition::Enum(d) => Some(&d.name),
            Definition::Typedef(d) => Some(&d.name),
            Definition::Callback(d) => Some(&d.name),
            Definition::Implements(_) | Definition::Includes(_) => None,
        }
    }

    /// Whether this definition is exempt from uniqueness (§4.2.7): marked
    /// `partial`, or one of the nameless `implements`/`includes` forms.
    pub fn is_partial(&self) -> bool {
        match self {
            Definition::Interface(d) => d.partial,
            Definition::InterfaceMixin(d) => d.partial,
            Definition::Namespace(d) => d.partial,
            Definition::Dictionary(d) => d.partial,
            Definition::CallbackInterface(_)
            | Definition::Enum(_)
            | Definition::Typedef(_)
            | Definition::Callback(_) => false,
            Definition::Implements(_) | Definition::Includes(_) => true,
        }
    }
}
