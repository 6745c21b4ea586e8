//! Scalar to string conversion.
//!
//! Used whenever a value has to be treated as a string: string-typed
//! parameters, intersection comparisons and structural dumps.

use core_types::{RuntimeError, RuntimeResult, Value};

use crate::diagnostic::Diagnostic;

/// Convert a scalar value to its string form.
///
/// Containers have no scalar string form; callers must reject them before
/// getting here. An object's failing conversion hook is fatal.
///
/// # Examples
///
/// ```
/// use builtins::stringify::to_string;
/// use core_types::Value;
///
/// assert_eq!(to_string(&Value::Bool(true)).unwrap(), "1");
/// assert_eq!(to_string(&Value::Bool(false)).unwrap(), "");
/// assert_eq!(to_string(&Value::Float(-10.5)).unwrap(), "-10.5");
/// assert_eq!(to_string(&Value::Undefined).unwrap(), "");
/// ```
pub fn to_string(value: &Value) -> RuntimeResult<String> {
    match value {
        Value::Int(n) => Ok(n.to_string()),
        Value::Float(f) => Ok(format_float(*f)),
        Value::Bool(true) => Ok("1".to_string()),
        Value::Bool(false) | Value::Null | Value::Undefined => Ok(String::new()),
        Value::String(s) => Ok(s.clone()),
        Value::Object(obj) => obj.convert().map_err(|message| RuntimeError::ConversionHook {
            class: obj.class_name().to_string(),
            message,
        }),
        Value::Resource(handle) => Ok(format!("Resource id #{}", handle.id())),
        Value::Array(_) => Err(RuntimeError::NotStringifiable("array")),
    }
}

/// Convert any value to a string, rendering containers as `Array`.
///
/// Each container conversion appends an `Array to string conversion` notice.
pub fn to_string_lossy(value: &Value, notices: &mut Vec<Diagnostic>) -> RuntimeResult<String> {
    match value {
        Value::Array(_) => {
            notices.push(Diagnostic::bare_notice("Array to string conversion"));
            Ok("Array".to_string())
        }
        other => to_string(other),
    }
}

/// Format a float the way the runtime prints it.
///
/// Uses the shortest digit string that round-trips, in fixed notation for
/// magnitudes in `[1e-4, 1e17)`, otherwise as `d.dddE±x`.
///
/// # Examples
///
/// ```
/// use builtins::stringify::format_float;
///
/// assert_eq!(format_float(10.0), "10");
/// assert_eq!(format_float(0.5), "0.5");
/// assert_eq!(format_float(12.3456789000e10), "123456789000");
/// assert_eq!(format_float(12.3456789000E-10), "1.23456789E-9");
/// assert_eq!(format_float(1e25), "1.0E+25");
/// ```
pub fn format_float(f: f64) -> String {
    if f.is_nan() {
        return "NAN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "INF" } else { "-INF" }.to_string();
    }
    if f == 0.0 {
        return if f.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let (digits, decpt) = decompose(f.abs());
    let digits = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + 8);
    if f < 0.0 {
        out.push('-');
    }

    if decpt < -3 || decpt > 17 {
        out.push(digits[0] as char);
        out.push('.');
        if digits.len() > 1 {
            out.extend(digits[1..].iter().map(|&b| b as char));
        } else {
            out.push('0');
        }
        let exponent = decpt - 1;
        out.push('E');
        out.push(if exponent < 0 { '-' } else { '+' });
        out.push_str(&exponent.abs().to_string());
    } else if decpt <= 0 {
        out.push_str("0.");
        for _ in 0..-decpt {
            out.push('0');
        }
        out.extend(digits.iter().map(|&b| b as char));
    } else {
        let decpt = decpt as usize;
        for i in 0..decpt {
            out.push(digits.get(i).map_or('0', |&b| b as char));
        }
        if digits.len() > decpt {
            out.push('.');
            out.extend(digits[decpt..].iter().map(|&b| b as char));
        }
    }
    out
}

/// Split a positive finite float into significant digits and decimal point
/// position, so that `value = 0.d1d2d3... * 10^decpt`.
fn decompose(abs: f64) -> (String, i32) {
    let mut buffer = ryu::Buffer::new();
    let text = buffer.format_finite(abs);
    let (mantissa, exponent) = match text.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (text, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let mut digits = String::with_capacity(int_part.len() + frac_part.len());
    digits.push_str(int_part);
    digits.push_str(frac_part);
    let mut decpt = int_part.len() as i32 + exponent;

    let leading = digits.len() - digits.trim_start_matches('0').len();
    digits.drain(..leading);
    decpt -= leading as i32;
    let significant = digits.trim_end_matches('0').len();
    digits.truncate(significant);
    (digits, decpt)
}
