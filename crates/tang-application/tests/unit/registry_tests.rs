//! Unit tests for the declaration registry

use crate::fixtures::{self, HOST, PORT, SET_OF_CLASSES, SET_OF_NUMBERS};
use tang_application::registry::DeclaredName;
use tang_application::{ClassDeclaration, DeclarationRegistry, ParameterDeclaration};
use tang_domain::value_objects::{ElementType, Literal, ParameterKind, TypeName, Value};
use tang_domain::Error;

#[test]
fn test_lookup_declared_parameter() {
    let registry = fixtures::registry();
    let decl = registry.lookup(SET_OF_NUMBERS).unwrap();
    assert_eq!(decl.kind(), ParameterKind::Set);
    assert_eq!(decl.element(), &ElementType::String);
    assert_eq!(decl.defaults(), ["one", "two", "three"]);
    assert_eq!(decl.default_literal(), Some("one,two,three"));
}

#[test]
fn test_lookup_unknown_parameter() {
    let registry = fixtures::registry();
    let err = registry.lookup("com.example.Missing").unwrap_err();
    assert!(matches!(err, Error::UnknownParameter { ref parameter } if parameter.as_str() == "com.example.Missing"));
}

#[test]
fn test_identical_redeclaration_is_accepted() {
    let mut registry = fixtures::registry();
    registry
        .declare(PORT, ParameterKind::Scalar, ElementType::Integer, Some("8080"))
        .unwrap();
    assert_eq!(registry.parameters().count(), 5);
}

#[test]
fn test_conflicting_redeclaration_is_rejected() {
    let mut registry = fixtures::registry();

    let kind = registry
        .declare(PORT, ParameterKind::Set, ElementType::Integer, Some("8080"))
        .unwrap_err();
    assert!(matches!(kind, Error::ConflictingDeclaration { .. }));

    let default = registry
        .declare(PORT, ParameterKind::Scalar, ElementType::Integer, Some("9090"))
        .unwrap_err();
    assert!(matches!(default, Error::ConflictingDeclaration { ref name, .. } if name == PORT));
}

#[test]
fn test_parameter_and_class_names_do_not_overlap() {
    let mut registry = fixtures::registry();
    let err = registry
        .declare("Number", ParameterKind::Scalar, ElementType::String, None)
        .unwrap_err();
    assert!(matches!(err, Error::ConflictingDeclaration { .. }));

    let err = registry
        .declare_class(ClassDeclaration::concrete(HOST))
        .unwrap_err();
    assert!(matches!(err, Error::ConflictingDeclaration { .. }));
}

#[test]
fn test_invalid_names_are_rejected() {
    let mut registry = DeclarationRegistry::new();
    for name in ["", "has space", "key=value", "#comment"] {
        let err = registry
            .declare(name, ParameterKind::Scalar, ElementType::String, None)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidName { .. }), "{name:?}");
    }
}

#[test]
fn test_invalid_scalar_default_is_rejected() {
    let mut registry = DeclarationRegistry::new();
    let err = registry
        .declare("Retries", ParameterKind::Scalar, ElementType::Integer, Some("many"))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidValue { ref value, .. } if value == "many"));
}

#[test]
fn test_set_default_is_trimmed_and_skips_empty_segments() {
    let decl = ParameterDeclaration::set("Names", ElementType::String).with_default(" one, ,two,, three ");
    assert_eq!(decl.defaults(), ["one", "two", "three"]);

    let empty = ParameterDeclaration::set("Nothing", ElementType::String).with_default("");
    assert!(empty.has_default());
    assert!(empty.defaults().is_empty());
}

#[test]
fn test_find_distinguishes_parameters_and_classes() {
    let registry = fixtures::registry();
    assert!(matches!(registry.find(PORT), Some(DeclaredName::Parameter(_))));
    assert!(matches!(registry.find("Integer"), Some(DeclaredName::Class(_))));
    assert!(registry.find("Nope").is_none());
}

#[test]
fn test_subtyping_is_transitive() {
    let mut registry = fixtures::registry();
    registry
        .declare_class(ClassDeclaration::interface("Scalar"))
        .unwrap()
        .declare_class(ClassDeclaration::interface("Real").implements("Scalar"))
        .unwrap()
        .declare_class(ClassDeclaration::concrete("Double").implements("Real"))
        .unwrap();

    assert!(registry.is_subtype("Double", "Scalar"));
    assert!(registry.is_subtype("Double", "Double"));
    assert!(!registry.is_subtype("Scalar", "Double"));
    assert!(!registry.is_subtype("Integer", "Scalar"));
}

#[test]
fn test_class_redeclaration_may_add_constructor() {
    let mut registry = fixtures::registry();
    assert!(!registry.lookup_class("Integer").unwrap().is_constructible());

    registry
        .declare_class(
            ClassDeclaration::concrete("Integer")
                .implements("Number")
                .with_constructor(|_| Ok(7_i64)),
        )
        .unwrap();
    assert!(registry.lookup_class("Integer").unwrap().is_constructible());

    let err = registry
        .declare_class(ClassDeclaration::concrete("Integer"))
        .unwrap_err();
    assert!(matches!(err, Error::ConflictingDeclaration { .. }));
}

#[test]
fn test_parse_literal_checks_type_elements() {
    let registry = fixtures::registry();
    let classes = registry.lookup(SET_OF_CLASSES).unwrap();

    assert_eq!(
        registry.parse_literal(classes, "Float").unwrap(),
        Literal::Type(TypeName::from("Float"))
    );
    assert!(matches!(
        registry.parse_literal(classes, "Text").unwrap_err(),
        Error::InvalidValue { .. }
    ));
    assert!(matches!(
        registry.parse_literal(classes, "Complex").unwrap_err(),
        Error::UnknownType { .. }
    ));

    let port = registry.lookup(PORT).unwrap();
    assert_eq!(
        registry.parse_literal(port, "443").unwrap(),
        Literal::Value(Value::Integer(443))
    );
}
