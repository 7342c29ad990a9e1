//! Configuration file tests

use std::sync::Arc;
use tang_application::{ConfigurationBuilder, Injector};
use tang_domain::Error;
use tang_domain::value_objects::{ParameterValue, Value, ValueSet};
use tang_infrastructure::files::{
    load_declaration_table, load_registry, read_configuration_file, write_configuration_file,
};
use tempfile::TempDir;

const DECLARATIONS: &str = r#"
[[parameter]]
name = "com.example.SetOfNumbers"
kind = "set"
element = "string"
default = "one,two,three"

[[parameter]]
name = "com.example.Port"
kind = "scalar"
element = "integer"
default = "8080"

[[parameter]]
name = "com.example.SetOfClasses"
kind = "set"
element = { type = "Number" }
default = "Integer,Float"

[[class]]
name = "Number"
abstract = true

[[class]]
name = "Integer"
implements = ["Number"]

[[class]]
name = "Float"
implements = ["Number"]

[[class]]
name = "Server"
dependencies = [{ parameter = "com.example.Port" }]
"#;

fn declarations(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("declarations.toml");
    std::fs::write(&path, DECLARATIONS).unwrap();
    path
}

#[test]
fn test_load_declaration_table() {
    let dir = TempDir::new().unwrap();
    let table = load_declaration_table(declarations(&dir)).unwrap();
    assert_eq!(table.parameters.len(), 3);
    assert_eq!(table.classes.len(), 4);
    assert!(table.classes[0].is_abstract);
}

#[test]
fn test_invalid_declaration_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "[[parameter]]\nname = \"x\"\nkind = \"list\"\nelement = \"string\"\n").unwrap();
    assert!(matches!(
        load_declaration_table(&path).unwrap_err(),
        Error::Configuration { .. }
    ));

    assert!(matches!(
        load_declaration_table(dir.path().join("missing.toml")).unwrap_err(),
        Error::Io { .. }
    ));
}

#[test]
fn test_configuration_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let registry = Arc::new(load_registry(declarations(&dir)).unwrap());

    let mut builder = ConfigurationBuilder::new(registry.clone());
    builder
        .bind_set_entry("com.example.SetOfNumbers", "four")
        .unwrap()
        .bind_set_entry("com.example.SetOfNumbers", "five")
        .unwrap()
        .bind_set_entry("com.example.SetOfNumbers", "six")
        .unwrap()
        .bind_value("com.example.Port", "443")
        .unwrap();

    let path = dir.path().join("nested").join("bindings.conf");
    write_configuration_file(&path, &builder.build()).unwrap();

    let mut rebuilt = ConfigurationBuilder::new(registry.clone());
    read_configuration_file(&path, &mut rebuilt).unwrap();
    let mut injector = Injector::new(registry, [Arc::new(rebuilt.build())]);

    let expected: ValueSet = ["four", "five", "six"].into_iter().collect();
    assert_eq!(
        injector.parameter_value("com.example.SetOfNumbers").unwrap(),
        ParameterValue::Set(expected)
    );
    assert_eq!(
        injector.parameter_value("com.example.Port").unwrap(),
        ParameterValue::Scalar(Value::Integer(443))
    );
}

#[test]
fn test_read_configuration_file_reports_line() {
    let dir = TempDir::new().unwrap();
    let registry = Arc::new(load_registry(declarations(&dir)).unwrap());
    let path = dir.path().join("bindings.conf");
    std::fs::write(&path, "# header\ncom.example.Port=80\ngarbage\n").unwrap();

    let mut builder = ConfigurationBuilder::new(registry);
    let err = read_configuration_file(&path, &mut builder).unwrap_err();
    assert!(matches!(err, Error::MalformedConfiguration { line: 3, .. }));
}
