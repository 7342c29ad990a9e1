//! Error extension tests

use std::io;
use tang_domain::error::{Error, Result};
use tang_infrastructure::error_ext::ErrorContext;

#[test]
fn test_io_context_keeps_source() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

    let result: Result<()> = Err(io_error).io_context("failed to read file");
    match result {
        Err(Error::Io { message, source }) => {
            assert!(message.contains("failed to read file"));
            assert!(message.contains("file not found"));
            assert!(source.is_some());
        }
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn test_context_wraps_any_error() {
    let toml_error = toml::from_str::<toml::Table>("= broken").unwrap_err();
    let result: Result<toml::Table> = Err(toml_error).context("failed to parse declarations");
    match result {
        Err(Error::Io { message, source }) => {
            assert!(message.starts_with("failed to parse declarations: "));
            assert!(source.is_some());
        }
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn test_config_context() {
    let parse_error = "x".parse::<u32>().unwrap_err();
    let result: Result<u32> = Err(parse_error).config_context("bad depth");
    assert!(matches!(result, Err(Error::Configuration { source: Some(_), .. })));
}

#[test]
fn test_with_io_context_is_lazy() {
    let ok: std::result::Result<u8, io::Error> = Ok(1);
    let value = ok
        .with_io_context(|| -> String { panic!("context built for a success") })
        .unwrap();
    assert_eq!(value, 1);
}
