//! Unit tests for the ordered container

use core_types::{ArrayKey, Container, Value};

#[test]
fn test_insertion_order_preserved() {
    let mut c = Container::new();
    c.insert("b".into(), Value::Int(1));
    c.insert(ArrayKey::Int(10), Value::Int(2));
    c.insert("a".into(), Value::Int(3));
    let keys: Vec<String> = c.iter().map(|(k, _)| k.to_string()).collect();
    assert_eq!(keys, vec!["\"b\"", "10", "\"a\""]);
}

#[test]
fn test_numeric_string_keys_normalize() {
    let mut c = Container::new();
    c.insert("1".into(), Value::string("x"));
    assert_eq!(c.get(&ArrayKey::Int(1)), Some(&Value::string("x")));
}

#[test]
fn test_keys_are_unique() {
    let mut c = Container::new();
    c.insert(ArrayKey::Int(0), Value::Int(1));
    c.insert(ArrayKey::Int(0), Value::Int(2));
    assert_eq!(c.len(), 1);
    assert_eq!(c.get(&ArrayKey::Int(0)), Some(&Value::Int(2)));
}

#[test]
fn test_push_after_negative_key() {
    let mut c = Container::new();
    c.insert(ArrayKey::Int(-5), Value::Int(1));
    c.push(Value::Int(2));
    assert_eq!(c.get(&ArrayKey::Int(0)), Some(&Value::Int(2)));
}

#[test]
fn test_collect_from_pairs() {
    let c: Container = vec![(ArrayKey::Int(3), Value::Null), ("k".into(), Value::Bool(true))]
        .into_iter()
        .collect();
    assert_eq!(c.len(), 2);
}
