//! Builtin functions and their argument coercion.
//!
//! This crate provides:
//! - the scalar stringifier used wherever a value must be treated as a string
//! - the parameter coercion engine that validates arguments against a
//!   function's declared parameter classes
//! - the `array_merge`, `array_intersect` and `mb_ereg_replace` builtins
//! - a `var_dump`-style structural dump
//!
//! # Example
//!
//! ```
//! use builtins::Builtins;
//! use core_types::Value;
//!
//! let builtins = Builtins::new();
//!
//! // A non-container in a container slot: warning, null result
//! let result = builtins
//!     .call("array_merge", &[Value::string(""), Value::list(vec![Value::Int(1), Value::Int(2)])])
//!     .unwrap();
//! assert_eq!(result.value, Value::Null);
//! assert_eq!(
//!     result.diagnostics[0].to_string(),
//!     "array_merge(): Argument #1 must be of type array, string given"
//! );
//!
//! // A scalar in a string slot is converted
//! let result = builtins
//!     .call("mb_ereg_replace", &[Value::Bool(true), Value::string("r"), Value::string("s1"), Value::string("")])
//!     .unwrap();
//! assert_eq!(result.value, Value::string("sr"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod array;
pub mod coercion;
pub mod diagnostic;
pub mod dump;
pub mod mbregex;
pub mod registry;
pub mod stringify;

// Re-export main types for convenience
pub use array::ArrayFunctions;
pub use coercion::{
    Adapted, CoercionEngine, CoercionOutcome, Conversion, EngineConfig, ParamClass, Policy, Signature,
};
pub use diagnostic::{CallResult, CaptureWriter, Diagnostic, DiagnosticWriter, Severity, StdoutWriter};
pub use mbregex::MbRegex;
pub use registry::{Builtin, BuiltinFn, Builtins, CallFrame};
