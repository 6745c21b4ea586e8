//! Builtin function registry.
//!
//! Maps a function name to its [`Signature`] and body. Calling through the
//! registry always runs the coercion engine first; a body only ever sees
//! arguments that were accepted.

use std::collections::HashMap;

use core_types::{RuntimeError, RuntimeResult, Value};

use crate::array::ArrayFunctions;
use crate::coercion::{Adapted, CoercionEngine, CoercionOutcome, Signature};
use crate::diagnostic::{CallResult, Diagnostic};
use crate::mbregex::MbRegex;

/// Body of a builtin, run after argument coercion succeeded.
pub type BuiltinFn = fn(&mut CallFrame) -> RuntimeResult<Value>;

/// Arguments and diagnostics of one call in progress.
#[derive(Debug)]
pub struct CallFrame {
    function: &'static str,
    args: Vec<Adapted>,
    diagnostics: Vec<Diagnostic>,
}

impl CallFrame {
    /// Create a frame for already-coerced arguments.
    pub fn new(function: &'static str, args: Vec<Adapted>) -> Self {
        CallFrame {
            function,
            args,
            diagnostics: Vec::new(),
        }
    }

    /// Name of the function being called.
    pub fn function(&self) -> &'static str {
        self.function
    }

    /// The coerced arguments.
    pub fn args(&self) -> &[Adapted] {
        &self.args
    }

    /// String argument at a 0-based index.
    pub fn str_arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).and_then(Adapted::as_str)
    }

    /// Raise a warning attributed to the current function.
    pub fn warn(&mut self, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(self.function, message));
    }

    /// Mutable access to the diagnostics raised so far.
    pub fn diagnostics_mut(&mut self) -> &mut Vec<Diagnostic> {
        &mut self.diagnostics
    }

    /// Consume the frame, returning its diagnostics.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

/// A registered builtin.
#[derive(Clone)]
pub struct Builtin {
    signature: Signature,
    body: BuiltinFn,
}

impl std::fmt::Debug for Builtin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builtin")
            .field("signature", &self.signature)
            .finish()
    }
}

impl Builtin {
    /// The declared signature.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }
}

/// Registry of builtins sharing one coercion engine.
///
/// # Examples
///
/// ```
/// use builtins::Builtins;
/// use core_types::Value;
///
/// let builtins = Builtins::new();
/// let result = builtins
///     .call("array_merge", &[Value::Int(0), Value::list(vec![Value::Int(1)])])
///     .unwrap();
/// assert_eq!(result.value, Value::Null);
/// assert_eq!(result.diagnostics.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Builtins {
    engine: CoercionEngine,
    functions: HashMap<&'static str, Builtin>,
}

impl Builtins {
    /// Registry with the default engine and the standard functions.
    pub fn new() -> Self {
        Builtins::with_engine(CoercionEngine::default())
    }

    /// Registry with a configured engine and the standard functions.
    pub fn with_engine(engine: CoercionEngine) -> Self {
        let mut builtins = Builtins::empty(engine);
        builtins.register(ArrayFunctions::merge_signature(), ArrayFunctions::merge);
        builtins.register(ArrayFunctions::intersect_signature(), ArrayFunctions::intersect);
        builtins.register(MbRegex::replace_signature(), MbRegex::replace);
        builtins
    }

    /// Registry with no functions.
    pub fn empty(engine: CoercionEngine) -> Self {
        Builtins {
            engine,
            functions: HashMap::new(),
        }
    }

    /// Register a function; a previous registration under the same name is replaced.
    pub fn register(&mut self, signature: Signature, body: BuiltinFn) {
        tracing::trace!(function = signature.name(), "registering builtin");
        self.functions.insert(signature.name(), Builtin { signature, body });
    }

    /// Look up a registered function.
    pub fn get(&self, name: &str) -> Option<&Builtin> {
        self.functions.get(name)
    }

    /// Names of all registered functions, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.functions.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// The coercion engine.
    pub fn engine(&self) -> &CoercionEngine {
        &self.engine
    }

    /// Call a function by name.
    ///
    /// A rejected argument returns `Ok` with a null value and the warning;
    /// only fatal errors are returned as `Err`.
    #[tracing::instrument(level = "debug", skip(self, args), fields(argc = args.len()))]
    pub fn call(&self, name: &str, args: &[Value]) -> RuntimeResult<CallResult> {
        let builtin = self
            .functions
            .get(name)
            .ok_or_else(|| RuntimeError::UnknownFunction(name.to_string()))?;

        match self.engine.coerce_args(&builtin.signature, args)? {
            CoercionOutcome::Fail { diagnostics, sentinel } => Ok(CallResult {
                value: sentinel,
                diagnostics,
            }),
            CoercionOutcome::Proceed { value, diagnostics } => {
                let mut frame = CallFrame::new(builtin.signature.name(), value);
                frame.diagnostics_mut().extend(diagnostics);
                let value = (builtin.body)(&mut frame)?;
                Ok(CallResult {
                    value,
                    diagnostics: frame.into_diagnostics(),
                })
            }
        }
    }
}

impl Default for Builtins {
    fn default() -> Self {
        Builtins::new()
    }
}
