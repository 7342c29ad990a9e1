//! Unit tests for values, value sets and instances

use tang_domain::{ElementType, Instance, Literal, ParameterValue, TypeName, Value, ValueSet};

#[test]
fn test_value_set_collapses_duplicates() {
    let mut set = ValueSet::new();
    assert!(set.insert(Value::from("one")));
    assert!(!set.insert(Value::from("one")));
    assert_eq!(set.len(), 1);
}

#[test]
fn test_value_set_equality_ignores_order() {
    let a: ValueSet = ["one", "two", "three"].into_iter().collect();
    let b: ValueSet = ["three", "one", "two"].into_iter().collect();
    let c: ValueSet = ["one", "two"].into_iter().collect();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_float_values_are_reflexive() {
    let nan = Value::Float(f64::NAN);
    assert_eq!(nan, nan.clone());
}

#[test]
fn test_instances_compare_by_identity() {
    let first = Instance::new("Short", 4_i16);
    let second = Instance::new("Short", 4_i16);
    assert_eq!(first, first.clone());
    assert_ne!(first, second);

    let set: ValueSet = [first.clone(), first.clone(), second].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_instance_downcast() {
    let instance = Instance::new("Float", 42.0001_f32);
    assert_eq!(instance.type_name(), &TypeName::from("Float"));
    assert_eq!(instance.downcast_ref::<f32>(), Some(&42.0001_f32));
    assert!(instance.downcast_ref::<i32>().is_none());
    assert_eq!(instance.downcast::<f32>().as_deref(), Some(&42.0001_f32));
}

#[test]
fn test_element_type_parsing() {
    assert_eq!(
        ElementType::String.parse("four"),
        Ok(Literal::Value(Value::from("four")))
    );
    assert_eq!(
        ElementType::Float.parse("1.5"),
        Ok(Literal::Value(Value::Float(1.5)))
    );
    assert_eq!(
        ElementType::Boolean.parse("true"),
        Ok(Literal::Value(Value::Boolean(true)))
    );
    assert!(ElementType::Integer.parse("four").is_err());
    assert_eq!(
        ElementType::Type(TypeName::from("Number")).parse("Integer"),
        Ok(Literal::Type(TypeName::from("Integer")))
    );
    assert!(ElementType::Type(TypeName::from("Number")).parse("not a type").is_err());
}

#[test]
fn test_parameter_value_accessors() {
    let scalar = ParameterValue::Scalar(Value::Integer(8080));
    assert_eq!(scalar.as_scalar().and_then(Value::as_integer), Some(8080));
    assert!(scalar.as_set().is_none());

    let set = ParameterValue::Set(["a", "b"].into_iter().collect());
    let mut strings = set.as_set().and_then(ValueSet::strings).unwrap();
    strings.sort_unstable();
    assert_eq!(strings, vec!["a", "b"]);
}
