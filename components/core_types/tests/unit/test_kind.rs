//! Unit tests for kind classification

use core_types::{classify, parse_literal, Kind, ObjectRef, ResourceHandle, TypeNameStyle, Value};

fn sample_values() -> Vec<Value> {
    vec![
        Value::Int(0),
        Value::Float(-10.5),
        Value::Bool(false),
        Value::Null,
        Value::string(""),
        Value::string("string"),
        Value::empty_array(),
        Value::Object(ObjectRef::new(1, "classA", || Ok("Class A object".to_string()))),
        Value::Undefined,
        Value::Resource(ResourceHandle::new(5, "stream")),
    ]
}

#[test]
fn test_every_kind_is_reachable() {
    let kinds: Vec<Kind> = sample_values().iter().map(classify).collect();
    assert_eq!(kinds, Kind::ALL.to_vec());
}

#[test]
fn test_classification_is_idempotent() {
    for value in sample_values() {
        assert_eq!(classify(&value), classify(&value));
    }
}

#[test]
fn test_boolean_spellings_classify_alike() {
    for literal in ["true", "TRUE", "false", "FALSE"] {
        let value = parse_literal(literal).unwrap();
        assert_eq!(classify(&value), Kind::Boolean, "literal {}", literal);
    }
}

#[test]
fn test_undefined_is_not_null() {
    assert_eq!(classify(&Value::Undefined), Kind::UndefinedSlot);
    assert_ne!(classify(&Value::Undefined), classify(&Value::Null));
}

#[test]
fn test_empty_container_is_container() {
    assert_eq!(classify(&parse_literal("array()").unwrap()), Kind::Container);
    assert_eq!(classify(&parse_literal("[]").unwrap()), Kind::Container);
}

#[test]
fn test_multiline_text_classifies_by_length() {
    let heredoc = "hello world\nsecond line".to_string();
    assert_eq!(classify(&Value::String(heredoc)), Kind::NonEmptyString);
    assert_eq!(classify(&Value::String(String::new())), Kind::EmptyString);
}

#[test]
fn test_modern_names() {
    let names: Vec<&str> = Kind::ALL.iter().map(|k| k.display_name(TypeNameStyle::Modern)).collect();
    assert_eq!(
        names,
        vec!["int", "float", "bool", "null", "string", "string", "array", "object", "unset", "resource"]
    );
}

#[test]
fn test_legacy_names() {
    let names: Vec<&str> = Kind::ALL.iter().map(|k| k.display_name(TypeNameStyle::Legacy)).collect();
    assert_eq!(
        names,
        vec!["integer", "double", "boolean", "NULL", "string", "string", "array", "object", "unset", "resource"]
    );
}

#[test]
fn test_kind_display() {
    assert_eq!(Kind::Float.to_string(), "float");
}
