//! Container functions: `array_merge` and `array_intersect`.

use std::collections::HashSet;

use core_types::{ArrayKey, Container, RuntimeResult, Value};

use crate::coercion::{Adapted, ParamClass, Signature};
use crate::registry::CallFrame;
use crate::stringify::to_string_lossy;

/// Container builtins
pub struct ArrayFunctions;

impl ArrayFunctions {
    /// `array_merge(array ...$arrays)`
    pub fn merge_signature() -> Signature {
        Signature::new("array_merge", vec![], 0).variadic(ParamClass::Container)
    }

    /// `array_intersect(array $array, array ...$arrays)`
    pub fn intersect_signature() -> Signature {
        Signature::new("array_intersect", vec![ParamClass::Container], 1).variadic(ParamClass::Container)
    }

    /// Merge containers in order.
    ///
    /// Integer keys are renumbered from zero; string keys keep the position
    /// where they first appeared and take the last value written.
    pub fn merge(frame: &mut CallFrame) -> RuntimeResult<Value> {
        let mut merged = Container::new();
        for array in frame.args().iter().filter_map(Adapted::as_array) {
            for (key, value) in array.iter() {
                match key {
                    // renumbered keys count up from zero and cannot reach i64::MAX
                    ArrayKey::Int(_) => {
                        merged.push(value.clone());
                    }
                    ArrayKey::Str(_) => merged.insert(key.clone(), value.clone()),
                }
            }
        }
        Ok(Value::Array(merged))
    }

    /// Keep the entries of the first container whose value is present in
    /// every other container.
    ///
    /// Values are compared by their string form; keys of the first container
    /// are preserved.
    pub fn intersect(frame: &mut CallFrame) -> RuntimeResult<Value> {
        let mut notices = Vec::new();
        let arrays: Vec<&Container> = frame.args().iter().filter_map(Adapted::as_array).collect();
        let Some((first, others)) = arrays.split_first() else {
            return Ok(Value::empty_array());
        };

        let mut present = Vec::with_capacity(others.len());
        for other in others {
            let mut set = HashSet::with_capacity(other.len());
            for value in other.values() {
                set.insert(to_string_lossy(value, &mut notices)?);
            }
            present.push(set);
        }

        let mut result = Container::new();
        for (key, value) in first.iter() {
            let needle = to_string_lossy(value, &mut notices)?;
            if present.iter().all(|set| set.contains(&needle)) {
                result.insert(key.clone(), value.clone());
            }
        }

        frame.diagnostics_mut().extend(notices);
        Ok(Value::Array(result))
    }
}
