//! Unit tests for domain error types

use tang_domain::{Error, ParameterKind, TypeName};

#[test]
fn test_unknown_parameter_error() {
    let error = Error::unknown_parameter("com.example.Missing");
    match &error {
        Error::UnknownParameter { parameter } => assert_eq!(parameter.as_str(), "com.example.Missing"),
        _ => panic!("Expected UnknownParameter error"),
    }
    assert_eq!(error.to_string(), "Unknown parameter: com.example.Missing");
}

#[test]
fn test_kind_mismatch_display() {
    let error = Error::KindMismatch {
        parameter: "com.example.Port".into(),
        expected: ParameterKind::Scalar,
        found: ParameterKind::Set,
    };
    assert_eq!(
        error.to_string(),
        "Parameter com.example.Port is declared as scalar, not set"
    );
}

#[test]
fn test_cyclic_dependency_names_the_chain() {
    let error = Error::CyclicDependency {
        cycle: vec![TypeName::from("A"), TypeName::from("B"), TypeName::from("A")],
    };
    assert_eq!(error.to_string(), "Cyclic dependency: A -> B -> A");
}

#[test]
fn test_already_bound_display() {
    let error = Error::AlreadyBound {
        type_name: TypeName::from("Integer"),
    };
    assert_eq!(error.to_string(), "A different instance is already bound to Integer");
}

#[test]
fn test_malformed_configuration_reports_line() {
    let error = Error::malformed(7, "missing '='");
    match error {
        Error::MalformedConfiguration { line, message } => {
            assert_eq!(line, 7);
            assert_eq!(message, "missing '='");
        }
        _ => panic!("Expected MalformedConfiguration error"),
    }
}

#[test]
fn test_io_error_with_source() {
    let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let error = Error::io_with_source("Failed to read bindings", source);
    assert!(std::error::Error::source(&error).is_some());
    assert!(error.to_string().contains("Failed to read bindings"));
}
