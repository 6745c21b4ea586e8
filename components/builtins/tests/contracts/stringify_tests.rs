//! Scalar stringifier contract tests

use builtins::stringify::{format_float, to_string};
use core_types::{ObjectRef, ResourceHandle, RuntimeError, Value};

#[test]
fn test_integer_forms() {
    assert_eq!(to_string(&Value::Int(0)).unwrap(), "0");
    assert_eq!(to_string(&Value::Int(12345)).unwrap(), "12345");
    assert_eq!(to_string(&Value::Int(-2345)).unwrap(), "-2345");
    assert_eq!(to_string(&Value::Int(i64::MIN)).unwrap(), "-9223372036854775808");
}

#[test]
fn test_float_forms() {
    assert_eq!(format_float(10.5), "10.5");
    assert_eq!(format_float(-10.5), "-10.5");
    assert_eq!(format_float(0.5), "0.5");
    assert_eq!(format_float(0.1 + 0.2), "0.30000000000000004");
    assert_eq!(format_float(1.5e25), "1.5E+25");
    assert_eq!(format_float(1e15), "1000000000000000");
    assert_eq!(format_float(-1.5e-7), "-1.5E-7");
}

#[test]
fn test_boolean_asymmetry() {
    assert_eq!(to_string(&Value::Bool(true)).unwrap(), "1");
    assert_eq!(to_string(&Value::Bool(false)).unwrap(), "");
}

#[test]
fn test_null_and_undefined_alike() {
    assert_eq!(to_string(&Value::Null).unwrap(), "");
    assert_eq!(to_string(&Value::Undefined).unwrap(), "");
}

#[test]
fn test_strings_unchanged() {
    assert_eq!(to_string(&Value::string("UTF-8")).unwrap(), "UTF-8");
    assert_eq!(to_string(&Value::string("")).unwrap(), "");
}

#[test]
fn test_objects_defer_to_hook() {
    let a = ObjectRef::new(1, "classA", || Ok("Class A object".to_string()));
    let b = ObjectRef::new(1, "classA", || Ok("UTF-8".to_string()));
    assert_eq!(to_string(&Value::Object(a)).unwrap(), "Class A object");
    assert_eq!(to_string(&Value::Object(b)).unwrap(), "UTF-8");
}

#[test]
fn test_failing_hook_propagates() {
    let broken = ObjectRef::new(3, "Broken", || Err("no".to_string()));
    assert!(matches!(
        to_string(&Value::Object(broken)),
        Err(RuntimeError::ConversionHook { .. })
    ));
}

#[test]
fn test_resource_label() {
    let fp = ResourceHandle::new(5, "stream");
    assert_eq!(to_string(&Value::Resource(fp)).unwrap(), "Resource id #5");
}
