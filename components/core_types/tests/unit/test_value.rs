//! Unit tests for the Value enum

use core_types::{Container, ObjectRef, ResourceHandle, Value};

#[cfg(test)]
mod value_creation_tests {
    use super::*;

    #[test]
    fn test_value_int() {
        let val = Value::Int(-2345);
        assert!(matches!(val, Value::Int(-2345)));
    }

    #[test]
    fn test_value_float() {
        let val = Value::Float(10.5);
        assert!(matches!(val, Value::Float(n) if n == 10.5));
    }

    #[test]
    fn test_value_string_helper() {
        assert_eq!(Value::string("hello world"), Value::String("hello world".to_string()));
    }

    #[test]
    fn test_value_list_helper() {
        let val = Value::list(vec![Value::Int(1), Value::Int(2)]);
        let arr = val.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr.values().cloned().collect::<Vec<_>>(), vec![Value::Int(1), Value::Int(2)]);
    }

    #[test]
    fn test_empty_array_is_empty() {
        assert!(Value::empty_array().as_array().unwrap().is_empty());
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from(3i64), Value::Int(3));
        assert_eq!(Value::from(0.5f64), Value::Float(0.5));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from("x"), Value::string("x"));
        assert_eq!(Value::from(Container::new()), Value::empty_array());
    }
}

#[cfg(test)]
mod value_equality_tests {
    use super::*;

    #[test]
    fn test_int_and_float_not_equal() {
        assert_ne!(Value::Int(1), Value::Float(1.0));
    }

    #[test]
    fn test_null_not_undefined() {
        assert_ne!(Value::Null, Value::Undefined);
    }

    #[test]
    fn test_objects_compare_by_identity() {
        let obj = ObjectRef::new(1, "classA", || Ok("Class A object".to_string()));
        let twin = ObjectRef::new(1, "classA", || Ok("Class A object".to_string()));
        assert_eq!(Value::Object(obj.clone()), Value::Object(obj.clone()));
        assert_ne!(Value::Object(obj), Value::Object(twin));
    }

    #[test]
    fn test_resources_compare_by_id() {
        assert_eq!(
            Value::Resource(ResourceHandle::new(5, "stream")),
            Value::Resource(ResourceHandle::new(5, "stream"))
        );
        assert_ne!(
            Value::Resource(ResourceHandle::new(5, "stream")),
            Value::Resource(ResourceHandle::new(6, "stream"))
        );
    }
}

#[cfg(test)]
mod object_hook_tests {
    use super::*;

    #[test]
    fn test_hook_result_is_returned() {
        let obj = ObjectRef::new(2, "classA", || Ok("UTF-8".to_string()));
        assert_eq!(obj.convert(), Ok("UTF-8".to_string()));
        assert_eq!(obj.handle(), 2);
    }

    #[test]
    fn test_hook_failure_is_returned() {
        let obj = ObjectRef::new(3, "Broken", || Err("cannot convert".to_string()));
        assert_eq!(obj.convert(), Err("cannot convert".to_string()));
    }
}
