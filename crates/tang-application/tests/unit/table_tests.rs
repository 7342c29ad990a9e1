//! Unit tests for declaration tables

use tang_application::registry::{ClassSpec, DependencySpec, ParameterSpec};
use tang_application::DeclarationTable;
use tang_domain::value_objects::{ElementType, ParameterKind};
use tang_domain::Error;

const TABLE: &str = r#"{
    "parameter": [
        {"name": "com.example.SetOfNumbers", "kind": "set", "element": "string", "default": "one,two,three"},
        {"name": "com.example.SetOfClasses", "kind": "set", "element": {"type": "Number"}, "default": "Integer,Float"}
    ],
    "class": [
        {"name": "Number", "abstract": true},
        {"name": "Integer", "implements": ["Number"]},
        {"name": "Float", "implements": ["Number"]},
        {"name": "Pool", "dependencies": [{"parameter": "com.example.SetOfClasses"}]}
    ]
}"#;

#[test]
fn test_table_builds_registry() {
    let table: DeclarationTable = serde_json::from_str(TABLE).unwrap();
    assert_eq!(table.parameters.len(), 2);
    assert_eq!(table.classes.len(), 4);

    let registry = table.into_registry().unwrap();
    let classes = registry.lookup("com.example.SetOfClasses").unwrap();
    assert_eq!(classes.element(), &ElementType::Type("Number".into()));
    assert!(registry.lookup_class("Number").unwrap().is_abstract());
    assert!(registry.is_subtype("Float", "Number"));
    assert_eq!(
        registry.lookup_class("Pool").unwrap().dependencies(),
        [DependencySpec::Parameter("com.example.SetOfClasses".into())]
    );
}

#[test]
fn test_table_classes_have_no_constructor() {
    let table: DeclarationTable = serde_json::from_str(TABLE).unwrap();
    let registry = table.into_registry().unwrap();
    assert!(!registry.lookup_class("Integer").unwrap().is_constructible());
}

#[test]
fn test_table_propagates_declaration_errors() {
    let table = DeclarationTable {
        parameters: vec![
            ParameterSpec {
                name: "Port".into(),
                kind: ParameterKind::Scalar,
                element: ElementType::Integer,
                default: Some("80".to_string()),
            },
            ParameterSpec {
                name: "Port".into(),
                kind: ParameterKind::Set,
                element: ElementType::Integer,
                default: None,
            },
        ],
        classes: vec![ClassSpec {
            name: "Server".into(),
            is_abstract: false,
            implements: Vec::new(),
            dependencies: vec![DependencySpec::Parameter("Port".into())],
        }],
    };
    let err = table.into_registry().unwrap_err();
    assert!(matches!(err, Error::ConflictingDeclaration { .. }));
}
