//! End-to-end scenarios (§8).

use widl_par::{parse, Definition, DefaultValue, IdlTypeValue, Member, ParserOptions};

fn parse_ok(source: &str) -> Vec<Definition> {
    parse(source, ParserOptions::new()).expect("expected a successful parse")
}

#[test]
fn empty_interface() {
    let defs = parse_ok("interface Foo { };");
    assert_eq!(defs.len(), 1);
    match &defs[0] {
        Definition::Interface(i) => {
            assert_eq!(i.name, "Foo");
            assert!(!i.partial);
            assert!(i.inheritance.is_none());
            assert!(i.members.is_empty());
        }
        other => panic!("expected interface, got {other:?}"),
    }
}

#[test]
fn inheriting_interface_with_readonly_attribute() {
    let defs = parse_ok("interface Foo : Bar { readonly attribute DOMString baz; };");
    let Definition::Interface(interface) = &defs[0] else {
        panic!("expected interface");
    };
    assert_eq!(interface.inheritance.as_deref(), Some("Bar"));
    assert_eq!(interface.members.len(), 1);
    let Member::Attribute(attr) = &interface.members[0] else {
        panic!("expected attribute member");
    };
    assert!(attr.readonly);
    assert!(!attr.inherit);
    assert!(!attr.is_static);
    assert!(!attr.stringifier);
    assert_eq!(attr.name, "baz");
    assert_eq!(attr.idl_type.value, IdlTypeValue::Name("DOMString".to_string()));
    assert!(!attr.idl_type.nullable);
}

#[test]
fn dictionary_with_required_and_defaulted_fields() {
    let defs = parse_ok(r#"dictionary D { required long x; DOMString y = "hi"; };"#);
    let Definition::Dictionary(dict) = &defs[0] else {
        panic!("expected dictionary");
    };
    assert_eq!(dict.fields.len(), 2);
    assert!(dict.fields[0].required);
    assert!(dict.fields[0].default.is_none());
    assert!(!dict.fields[1].required);
    assert_eq!(
        dict.fields[1].default,
        Some(DefaultValue::String("hi".to_string()))
    );
}

#[test]
fn typedef_of_a_sequence() {
    let defs = parse_ok("typedef sequence<DOMString> Names;");
    let Definition::Typedef(typedef) = &defs[0] else {
        panic!("expected typedef");
    };
    assert_eq!(typedef.name, "Names");
    assert!(typedef.idl_type.sequence);
    match &typedef.idl_type.value {
        IdlTypeValue::Generic { generic, subtypes } => {
            assert_eq!(generic, "sequence");
            assert_eq!(subtypes.len(), 1);
            assert_eq!(subtypes[0].value, IdlTypeValue::Name("DOMString".to_string()));
            assert!(!subtypes[0].sequence);
        }
        other => panic!("expected a generic sequence type, got {other:?}"),
    }
}

#[test]
fn sequence_flag_is_false_for_non_sequence_generics() {
    let defs = parse_ok("typedef record<DOMString, long> R;");
    let Definition::Typedef(typedef) = &defs[0] else {
        panic!("expected typedef");
    };
    assert!(!typedef.idl_type.sequence);
}

#[test]
fn duplicate_top_level_name_is_rejected() {
    let err = parse("interface A {}; interface A {};", ParserOptions::new()).unwrap_err();
    assert!(err.message.contains(r#"The name "A" of type "interface" is already seen"#));
}

#[test]
fn nullable_any_is_rejected() {
    let err = parse("interface X { attribute any? v; };", ParserOptions::new()).unwrap_err();
    assert!(err.message.contains("Type any cannot be made nullable"));
}

#[test]
fn partial_interface_is_not_registered_and_can_coexist() {
    let defs = parse_ok("interface Foo { }; partial interface Foo { readonly attribute long x; };");
    assert_eq!(defs.len(), 2);
}

#[test]
fn interface_mixin_and_includes() {
    let defs = parse_ok(
        "interface mixin Mixable { attribute boolean flag; }; interface Foo {}; Foo includes Mixable;",
    );
    assert_eq!(defs.len(), 3);
    matches!(defs[0], Definition::InterfaceMixin(_));
    let Definition::Includes(includes) = &defs[2] else {
        panic!("expected includes");
    };
    assert_eq!(includes.target, "Foo");
    assert_eq!(includes.includes, "Mixable");
}

#[test]
fn legacy_implements_form() {
    let defs = parse_ok("interface Foo {}; interface Bar {}; Foo implements Bar;");
    let Definition::Implements(implements) = &defs[2] else {
        panic!("expected implements");
    };
    assert_eq!(implements.target, "Foo");
    assert_eq!(implements.implements, "Bar");
}

#[test]
fn namespace_with_operation() {
    let defs = parse_ok("namespace Console { undefined log(DOMString message); };");
    let Definition::Namespace(ns) = &defs[0] else {
        panic!("expected namespace");
    };
    assert_eq!(ns.members.len(), 1);
    assert!(matches!(ns.members[0], Member::Operation(_)));
}

#[test]
fn callback_function_type() {
    let defs = parse_ok("callback AsyncOperationCallback = undefined (DOMString status);");
    let Definition::Callback(callback) = &defs[0] else {
        panic!("expected callback");
    };
    assert_eq!(callback.arguments.len(), 1);
    assert_eq!(callback.arguments[0].name, "status");
}

#[test]
fn callback_interface() {
    let defs = parse_ok("callback interface EventListener { undefined handleEvent(Event event); };");
    let Definition::CallbackInterface(ci) = &defs[0] else {
        panic!("expected callback interface");
    };
    assert_eq!(ci.name, "EventListener");
}

#[test]
fn enum_with_trailing_comma() {
    let defs = parse_ok(r#"enum DocumentReadyState { "loading", "interactive", "complete", };"#);
    let Definition::Enum(e) = &defs[0] else {
        panic!("expected enum");
    };
    assert_eq!(e.values.len(), 3);
    assert_eq!(e.values[0].value, "loading");
}

#[test]
fn empty_enum_body_is_permitted() {
    let defs = parse_ok("enum Empty { };");
    let Definition::Enum(e) = &defs[0] else {
        panic!("expected enum");
    };
    assert!(e.values.is_empty());
}

#[test]
fn maplike_and_setlike_and_iterable() {
    let defs = parse_ok(
        "interface M { maplike<DOMString, long>; };
         interface S { setlike<DOMString>; };
         interface I { iterable<DOMString, long>; };",
    );
    assert_eq!(defs.len(), 3);
}

#[test]
fn union_type_requires_at_least_two_members() {
    let defs = parse_ok("typedef (Node or DOMString) NodeOrString;");
    let Definition::Typedef(typedef) = &defs[0] else {
        panic!("expected typedef");
    };
    match &typedef.idl_type.value {
        IdlTypeValue::Union(members) => assert_eq!(members.len(), 2),
        other => panic!("expected union, got {other:?}"),
    }
}

#[test]
fn record_requires_domstring_like_key() {
    let err = parse("typedef record<long, DOMString> Bad;", ParserOptions::new()).unwrap_err();
    assert!(err.message.contains("Record key must be"));
}

#[test]
fn sequence_with_two_subtypes_is_rejected() {
    let err = parse("typedef sequence<long, long> Bad;", ParserOptions::new()).unwrap_err();
    assert!(err.message.contains("must have exactly one subtype"));
}

#[test]
fn required_field_with_default_is_rejected() {
    let err = parse("dictionary D { required long x = 1; };", ParserOptions::new()).unwrap_err();
    assert!(err.message.contains("Required member must not have a default"));
}

#[test]
fn attribute_cannot_be_a_sequence() {
    let err = parse(
        "interface Foo { attribute sequence<long> xs; };",
        ParserOptions::new(),
    )
    .unwrap_err();
    assert!(err.message.contains("Attributes cannot accept sequence/record types"));
}

#[test]
fn stray_extended_attributes_is_rejected() {
    let err = parse("[Exposed=Window]", ParserOptions::new()).unwrap_err();
    assert!(err.message.contains("Stray extended attributes"));
}

#[test]
fn trailing_unrecognised_tokens_are_rejected() {
    let err = parse("interface Foo {}; %%%", ParserOptions::new()).unwrap_err();
    assert!(err.message.contains("Unrecognised tokens"));
}

#[test]
fn variadic_argument_via_three_consecutive_dots() {
    let defs = parse_ok("interface Foo { undefined bar(long... rest); };");
    let Definition::Interface(interface) = &defs[0] else {
        panic!("expected interface");
    };
    let Member::Operation(op) = &interface.members[0] else {
        panic!("expected operation");
    };
    assert!(op.arguments[0].variadic);
}

#[test]
fn underscore_escaped_identifier_used_as_a_name() {
    let defs = parse_ok("interface _interface { };");
    let Definition::Interface(interface) = &defs[0] else {
        panic!("expected interface");
    };
    assert_eq!(interface.name, "interface");
}

#[test]
fn extended_attribute_with_identifier_list_rhs() {
    let defs = parse_ok("[Exposed=(Window,Worker)] interface Foo { };");
    let Definition::Interface(interface) = &defs[0] else {
        panic!("expected interface");
    };
    assert_eq!(interface.ext_attrs.len(), 1);
    assert_eq!(interface.ext_attrs[0].name, "Exposed");
}

#[test]
fn nested_typedef_requires_option() {
    let src = "interface Foo { typedef long Count; };";
    assert!(parse(src, ParserOptions::new()).is_err());
    let defs = parse(src, ParserOptions::new().with_allow_nested_typedefs(true)).unwrap();
    let Definition::Interface(interface) = &defs[0] else {
        panic!("expected interface");
    };
    assert!(matches!(interface.members[0], Member::Typedef(_)));
}

#[test]
fn trivia_capture_records_leading_whitespace_count() {
    let src = "// doc comment\ninterface Foo { };";

    let defs = parse(src, ParserOptions::new().with_ws(true)).unwrap();
    let Definition::Interface(interface) = &defs[0] else {
        panic!("expected interface");
    };
    assert!(
        !interface.leading_trivia.is_empty(),
        "ws=true should attach the leading comment to the definition"
    );

    let defs = parse(src, ParserOptions::new().with_ws(false)).unwrap();
    let Definition::Interface(interface) = &defs[0] else {
        panic!("expected interface");
    };
    assert!(
        interface.leading_trivia.is_empty(),
        "ws=false should never populate leading_trivia"
    );
}

#[test]
fn static_inherit_attribute_is_rejected() {
    let err = parse(
        "interface Foo { static inherit attribute long x; };",
        ParserOptions::new(),
    )
    .unwrap_err();
    assert!(err.message.contains("Cannot have a static or stringifier inherit"));
}

#[test]
fn stringifier_inherit_attribute_is_rejected() {
    let err = parse(
        "interface Foo { stringifier inherit attribute long x; };",
        ParserOptions::new(),
    )
    .unwrap_err();
    assert!(err.message.contains("Cannot have a static or stringifier inherit"));
}

#[test]
fn unterminated_interface_body_is_rejected() {
    let err = parse("interface Foo { ", ParserOptions::new()).unwrap_err();
    assert!(err.message.contains("Unterminated"));
}

#[test]
fn missing_semicolon_after_interface_is_rejected() {
    let err = parse("interface Foo { }", ParserOptions::new()).unwrap_err();
    assert!(err.message.contains("Missing semicolon after interface"));
    assert!(err.message.contains("Got an error during or right after parsing `interface Foo`"));
}

#[test]
fn legacyiterable_is_accepted() {
    let defs = parse_ok("interface Foo { legacyiterable<long>; };");
    let Definition::Interface(interface) = &defs[0] else {
        panic!("expected interface");
    };
    assert!(matches!(interface.members[0], Member::Iterable(_)));
}

#[test]
fn unknown_member_starting_with_a_literal_is_rejected() {
    let err = parse("interface Foo { 123 x(); };", ParserOptions::new()).unwrap_err();
    assert!(err.message.contains("Unknown member"));
}

#[test]
fn promise_subtype_with_extended_attributes_is_rejected() {
    let err = parse(
        "typedef Promise<[Clamp] long> P;",
        ParserOptions::new(),
    )
    .unwrap_err();
    assert!(err.message.contains("Promise type cannot have extended attribute"));
}

#[test]
fn readonly_before_legacyiterable_is_rejected() {
    // `readonly` is only grammatically valid before `maplike`/`setlike`
    // (§4.2.3); seeing it before `legacyiterable` rolls the iterable
    // attempt back, and the `attribute` production it falls through to
    // also refuses "readonly ... legacyiterable<...>" input.
    let result = parse(
        "interface Foo { readonly legacyiterable<long>; };",
        ParserOptions::new(),
    );
    assert!(result.is_err());
}
