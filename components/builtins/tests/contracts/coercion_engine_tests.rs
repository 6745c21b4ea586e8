//! Coercion engine contract tests

use builtins::{Adapted, CoercionEngine, CoercionOutcome, ParamClass, Policy, Signature};
use core_types::{Kind, RuntimeError, TypeNameStyle, Value};

use super::{non_container_inputs, one_two};

#[test]
fn test_container_slot_policy_table() {
    let engine = CoercionEngine::default();
    for kind in Kind::ALL {
        let policy = engine.rule("array_merge", 1, ParamClass::Container, kind);
        if kind == Kind::Container {
            assert_eq!(policy, Policy::Accept);
        } else {
            assert_eq!(policy, Policy::RejectWithWarningReturnNull, "kind {:?}", kind);
        }
    }
}

#[test]
fn test_string_slot_policy_table() {
    let engine = CoercionEngine::default();
    for kind in Kind::ALL {
        let policy = engine.rule("mb_ereg_replace", 1, ParamClass::String, kind);
        match kind {
            Kind::Container => assert_eq!(policy, Policy::RejectWithWarningReturnNull),
            Kind::EmptyString | Kind::NonEmptyString => assert_eq!(policy, Policy::Accept),
            _ => assert!(matches!(policy, Policy::AcceptWithConversion(_)), "kind {:?}", kind),
        }
    }
}

#[test]
fn test_argument_independence() {
    let engine = CoercionEngine::default();
    let signature = Signature::new("array_intersect", vec![ParamClass::Container], 1)
        .variadic(ParamClass::Container);
    let others = [
        vec![one_two()],
        vec![Value::Int(9)],
        vec![one_two(), Value::string("x")],
        vec![Value::Null, Value::Null],
    ];
    for (input, _) in non_container_inputs() {
        let alone = engine
            .coerce("array_intersect", 1, ParamClass::Container, &input)
            .unwrap();
        for tail in &others {
            let mut args = vec![input.clone()];
            args.extend(tail.iter().cloned());
            let outcome = engine.coerce_args(&signature, &args).unwrap();
            assert_eq!(outcome.rejection(), alone.rejection());
        }
    }
}

#[test]
fn test_legacy_type_names() {
    let engine = CoercionEngine::default().with_type_names(TypeNameStyle::Legacy);
    let outcome = engine
        .coerce("array_merge", 1, ParamClass::Container, &Value::Float(0.5))
        .unwrap();
    assert_eq!(
        outcome.rejection().unwrap().to_string(),
        "array_merge(): Argument #1 must be of type array, double given"
    );
}

#[test]
fn test_reject_fatal_override() {
    let engine = CoercionEngine::default().with_rule("array_merge", 2, ParamClass::Container, Policy::RejectFatal);
    let err = engine
        .coerce("array_merge", 2, ParamClass::Container, &Value::Null)
        .unwrap_err();
    assert_eq!(
        err,
        RuntimeError::TypeError("array_merge(): Argument #2 must be of type array, null given".to_string())
    );
    // other positions keep the default policy
    assert!(!engine
        .coerce("array_merge", 1, ParamClass::Container, &Value::Null)
        .unwrap()
        .is_proceed());
}

#[test]
fn test_proceed_carries_adapted_string() {
    let engine = CoercionEngine::default();
    let outcome = engine
        .coerce("mb_ereg_replace", 4, ParamClass::String, &Value::Float(12.3456789000e10))
        .unwrap();
    assert_eq!(
        outcome,
        CoercionOutcome::Proceed {
            value: Adapted::String("123456789000".to_string()),
            diagnostics: vec![],
        }
    );
}

#[test]
fn test_coerce_args_collects_all_adapted_values() {
    let engine = CoercionEngine::default();
    let signature = Signature::new("f", vec![ParamClass::String, ParamClass::Container], 2);
    match engine.coerce_args(&signature, &[Value::Int(3), one_two()]).unwrap() {
        CoercionOutcome::Proceed { value, .. } => {
            assert_eq!(value[0], Adapted::String("3".to_string()));
            assert!(value[1].as_array().is_some());
        }
        other => panic!("expected proceed, got {:?}", other),
    }
}

#[test]
fn test_accept_override_cannot_stringify_container() {
    let engine = CoercionEngine::default()
        .with_rule("mb_ereg_replace", 1, ParamClass::String, Policy::Accept)
        .with_rule(
            "mb_ereg_replace",
            2,
            ParamClass::String,
            Policy::AcceptWithConversion(builtins::Conversion::ArrayCast),
        );
    assert_eq!(
        engine.rule("mb_ereg_replace", 1, ParamClass::String, Kind::Container),
        Policy::RejectWithWarningReturnNull
    );
    for position in [1, 2] {
        let outcome = engine
            .coerce("mb_ereg_replace", position, ParamClass::String, &Value::empty_array())
            .unwrap();
        assert_eq!(
            outcome.rejection().unwrap().to_string(),
            format!("mb_ereg_replace(): Argument #{} must be of type string, array given", position)
        );
    }
    // scalars in the overridden slot still convert to strings
    let outcome = engine
        .coerce("mb_ereg_replace", 2, ParamClass::String, &Value::Int(5))
        .unwrap();
    assert_eq!(
        outcome,
        CoercionOutcome::Proceed {
            value: Adapted::String("5".to_string()),
            diagnostics: vec![],
        }
    );
}
