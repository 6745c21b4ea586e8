//! Structural dump of values in the runtime's `var_dump` layout.

use std::fmt::Write;

use core_types::{ArrayKey, Value};

use crate::stringify::format_float;

/// Render a value the way `var_dump` prints it, including the trailing newline.
///
/// # Examples
///
/// ```
/// use builtins::dump::var_dump;
/// use core_types::Value;
///
/// assert_eq!(var_dump(&Value::Null), "NULL\n");
/// assert_eq!(var_dump(&Value::string("hello")), "string(5) \"hello\"\n");
/// assert_eq!(
///     var_dump(&Value::list(vec![Value::Int(1), Value::Int(2)])),
///     "array(2) {\n  [0]=>\n  int(1)\n  [1]=>\n  int(2)\n}\n"
/// );
/// ```
pub fn var_dump(value: &Value) -> String {
    let mut out = String::new();
    dump_into(&mut out, value, 0);
    out
}

fn dump_into(out: &mut String, value: &Value, depth: usize) {
    let pad = "  ".repeat(depth);
    // Writing into a String cannot fail.
    let _ = match value {
        Value::Int(n) => writeln!(out, "{}int({})", pad, n),
        Value::Float(f) => writeln!(out, "{}float({})", pad, format_float(*f)),
        Value::Bool(b) => writeln!(out, "{}bool({})", pad, b),
        Value::Null | Value::Undefined => writeln!(out, "{}NULL", pad),
        Value::String(s) => writeln!(out, "{}string({}) \"{}\"", pad, s.len(), s),
        Value::Resource(r) => writeln!(out, "{}resource({}) of type ({})", pad, r.id(), r.type_name()),
        Value::Object(o) => writeln!(out, "{}object({})#{} (0) {{\n{}}}", pad, o.class_name(), o.handle(), pad),
        Value::Array(c) => {
            let _ = writeln!(out, "{}array({}) {{", pad, c.len());
            for (key, item) in c.iter() {
                let _ = match key {
                    ArrayKey::Int(n) => writeln!(out, "{}  [{}]=>", pad, n),
                    ArrayKey::Str(s) => writeln!(out, "{}  [\"{}\"]=>", pad, s),
                };
                dump_into(out, item, depth + 1);
            }
            writeln!(out, "{}}}", pad)
        }
    };
}
