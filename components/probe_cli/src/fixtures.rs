//! Usage-variation fixtures.
//!
//! Each fixture feeds one value of every kind to the first parameter of a
//! builtin while the remaining arguments stay fixed, the way the runtime's
//! own regression tests exercise argument validation.

use core_types::{ArrayKey, Container, ObjectRef, ResourceHandle, Value};

/// Allocator for resource ids.
///
/// Resource ids are owned by whoever opens resources, not by the builtins,
/// so the CLI hands them out.
#[derive(Debug, Clone)]
pub struct ResourceIds {
    next: u64,
}

impl ResourceIds {
    /// Allocator whose first id is `first`.
    pub fn starting_at(first: u64) -> Self {
        ResourceIds { next: first }
    }

    /// Open a new resource of the given type.
    pub fn open(&mut self, type_name: &str) -> ResourceHandle {
        let handle = ResourceHandle::new(self.next, type_name);
        self.next += 1;
        handle
    }
}

impl Default for ResourceIds {
    fn default() -> Self {
        ResourceIds::starting_at(1)
    }
}

/// A replayable variation table for one function.
#[derive(Debug, Clone)]
pub struct Fixture {
    function: &'static str,
    header: &'static str,
    iteration_label: &'static str,
    inputs: Vec<Value>,
    tails: Vec<Vec<Value>>,
}

impl Fixture {
    /// Functions with a fixture.
    pub const NAMES: [&'static str; 3] = ["array_merge", "array_intersect", "mb_ereg_replace"];

    /// Look up a fixture by function name.
    pub fn named(name: &str, resources: &mut ResourceIds) -> Option<Fixture> {
        match name {
            "array_merge" => Some(Fixture::array_merge(resources)),
            "array_intersect" => Some(Fixture::array_intersect(resources)),
            "mb_ereg_replace" => Some(Fixture::mb_ereg_replace()),
            _ => None,
        }
    }

    /// `array_merge($input, [1, 2])`
    pub fn array_merge(resources: &mut ResourceIds) -> Fixture {
        let fp = resources.open("stream");
        let mut inputs = scalar_variations("string", "hello world", "Class A object");
        // the empty container follows the two empty strings
        inputs.insert(17, Value::empty_array());
        inputs.push(Value::Resource(fp));
        Fixture {
            function: "array_merge",
            header: "*** Testing array_merge() : usage variations ***",
            iteration_label: "Iteration",
            inputs,
            tails: vec![vec![one_two()]],
        }
    }

    /// `array_intersect($input, [1, 2])` and `array_intersect($input, [1, 2], $arr3)`
    pub fn array_intersect(resources: &mut ResourceIds) -> Fixture {
        let fp = resources.open("stream");
        let mut inputs = scalar_variations("string", "hello world", "Class A object");
        inputs.push(Value::Resource(fp));

        let arr3: Container = [
            (ArrayKey::Int(0), Value::Int(1)),
            (ArrayKey::Int(1), Value::Int(2)),
            (ArrayKey::from("one"), Value::Int(1)),
            (ArrayKey::from("two"), Value::Int(2)),
        ]
        .into_iter()
        .collect();

        Fixture {
            function: "array_intersect",
            header: "*** Testing array_intersect() : Passing non-array values to $arr1 argument ***",
            iteration_label: "Iterator",
            inputs,
            tails: vec![vec![one_two()], vec![one_two(), Value::Array(arr3)]],
        }
    }

    /// `mb_ereg_replace($input, 'string_val', 'string_val', '')`
    pub fn mb_ereg_replace() -> Fixture {
        let fixed = Value::string("string_val");
        Fixture {
            function: "mb_ereg_replace",
            header: "*** Testing mb_ereg_replace() : usage variations ***",
            iteration_label: "Iteration",
            inputs: scalar_variations("UTF-8", "UTF-8", "UTF-8"),
            tails: vec![vec![fixed.clone(), fixed, Value::string("")]],
        }
    }

    /// The function under test.
    pub fn function(&self) -> &'static str {
        self.function
    }

    /// Banner printed before the first iteration.
    pub fn header(&self) -> &'static str {
        self.header
    }

    /// Heading of iteration `number` (1-based), e.g. `-- Iteration 3 --`.
    pub fn iteration_heading(&self, number: usize) -> String {
        format!("-- {} {} --", self.iteration_label, number)
    }

    /// Values substituted into the first parameter, one per iteration.
    pub fn inputs(&self) -> &[Value] {
        &self.inputs
    }

    /// Argument lists of every call, grouped by iteration.
    pub fn iterations(&self) -> impl Iterator<Item = Vec<Vec<Value>>> + '_ {
        self.inputs.iter().map(move |input| {
            self.tails
                .iter()
                .map(|tail| {
                    let mut args = Vec::with_capacity(tail.len() + 1);
                    args.push(input.clone());
                    args.extend(tail.iter().cloned());
                    args
                })
                .collect()
        })
    }
}

/// Int, float, null, bool, empty, string, heredoc, object, undefined and unset inputs.
fn scalar_variations(text: &str, heredoc: &str, object_text: &'static str) -> Vec<Value> {
    let class_a = ObjectRef::new(1, "classA", move || Ok(object_text.to_string()));
    vec![
        // int
        Value::Int(0),
        Value::Int(1),
        Value::Int(12345),
        Value::Int(-2345),
        // float
        Value::Float(10.5),
        Value::Float(-10.5),
        Value::Float(12.3456789000e10),
        Value::Float(12.3456789000E-10),
        Value::Float(0.5),
        // null
        Value::Null,
        Value::Null,
        // bool
        Value::Bool(true),
        Value::Bool(false),
        Value::Bool(true),
        Value::Bool(false),
        // empty
        Value::string(""),
        Value::string(""),
        // string
        Value::string(text),
        Value::string(text),
        Value::string(heredoc),
        // object
        Value::Object(class_a),
        // undefined, unset
        Value::Undefined,
        Value::Undefined,
    ]
}

fn one_two() -> Value {
    Value::list(vec![Value::Int(1), Value::Int(2)])
}
