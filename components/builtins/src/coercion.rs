//! Parameter coercion engine.
//!
//! Every builtin declares, per parameter position, whether it needs a
//! container or a string. Before the body runs, each argument is classified
//! and looked up in the rule table, which decides whether it is accepted
//! as-is, accepted after conversion, or rejected. A rejection either yields
//! a warning plus a null sentinel (the call is abandoned but the program
//! goes on) or a fatal [`RuntimeError`].
//!
//! Coercion of one position never looks at the value in any other position,
//! and validation stops at the first rejected argument.

use std::collections::HashMap;

use core_types::{classify, Container, Kind, RuntimeError, RuntimeResult, TypeNameStyle, Value};

use crate::diagnostic::{Diagnostic, Severity};
use crate::stringify;

/// Class of value a parameter requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamClass {
    /// Ordered key/value container (`array`)
    Container,
    /// String
    String,
}

impl ParamClass {
    /// Name used for the expected type in diagnostics.
    pub fn expected_name(&self) -> &'static str {
        match self {
            ParamClass::Container => "array",
            ParamClass::String => "string",
        }
    }

    /// Whether a value of `kind` already belongs to this class.
    pub fn admits(&self, kind: Kind) -> bool {
        match self {
            ParamClass::Container => kind == Kind::Container,
            ParamClass::String => kind.is_string(),
        }
    }

    fn default_conversion(&self) -> Conversion {
        match self {
            ParamClass::Container => Conversion::ArrayCast,
            ParamClass::String => Conversion::Stringify,
        }
    }

    /// Conversion bringing a value of `kind` into this class, if one exists.
    ///
    /// Containers have no string form.
    fn conversion_for(&self, kind: Kind) -> Option<Conversion> {
        match self {
            ParamClass::String if kind == Kind::Container => None,
            _ => Some(self.default_conversion()),
        }
    }
}

/// How a value outside the required class is turned into one inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// Scalar string conversion
    Stringify,
    /// Wrap into a one-element container; null becomes an empty container
    ArrayCast,
}

/// Decision for a (function, position, class) slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Use the value unchanged
    Accept,
    /// Convert the value, then use it
    AcceptWithConversion(Conversion),
    /// Warn and return null from the call
    RejectWithWarningReturnNull,
    /// Abort with a fatal type error
    RejectFatal,
}

/// An argument after coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum Adapted {
    /// Container argument
    Array(Container),
    /// String argument
    String(String),
}

impl Adapted {
    /// Borrow the container, if this argument is one.
    pub fn as_array(&self) -> Option<&Container> {
        match self {
            Adapted::Array(c) => Some(c),
            Adapted::String(_) => None,
        }
    }

    /// Borrow the string, if this argument is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Adapted::String(s) => Some(s),
            Adapted::Array(_) => None,
        }
    }
}

/// Result of coercing one argument (or a whole argument list).
#[derive(Debug, Clone, PartialEq)]
pub enum CoercionOutcome<T = Adapted> {
    /// The value may be handed to the function body
    Proceed {
        /// The adapted value
        value: T,
        /// Non-fatal diagnostics raised while adapting
        diagnostics: Vec<Diagnostic>,
    },
    /// The call is abandoned and `sentinel` is returned in its place
    Fail {
        /// Diagnostics raised; the last one is the rejection
        diagnostics: Vec<Diagnostic>,
        /// Value returned by the abandoned call
        sentinel: Value,
    },
}

impl<T> CoercionOutcome<T> {
    /// Whether the argument was accepted.
    pub fn is_proceed(&self) -> bool {
        matches!(self, CoercionOutcome::Proceed { .. })
    }

    /// The rejection diagnostic, if the argument was rejected.
    pub fn rejection(&self) -> Option<&Diagnostic> {
        match self {
            CoercionOutcome::Fail { diagnostics, .. } => diagnostics.last(),
            CoercionOutcome::Proceed { .. } => None,
        }
    }

    /// All diagnostics raised, in order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            CoercionOutcome::Proceed { diagnostics, .. } | CoercionOutcome::Fail { diagnostics, .. } => {
                diagnostics
            }
        }
    }
}

/// Tunables of the coercion engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Label family for the actual type in diagnostics
    pub type_names: TypeNameStyle,
    /// Reject non-string scalars in string slots instead of converting them
    pub strict_types: bool,
    /// Raise a deprecation when null reaches a string slot
    pub deprecate_null_to_string: bool,
}

/// Declared parameters of a builtin.
///
/// # Examples
///
/// ```
/// use builtins::{ParamClass, Signature};
///
/// let sig = Signature::new("array_intersect", vec![ParamClass::Container], 1)
///     .variadic(ParamClass::Container);
/// assert_eq!(sig.class_at(3), Some(ParamClass::Container));
/// assert_eq!(sig.max_args(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    name: &'static str,
    params: Vec<ParamClass>,
    required: usize,
    variadic: Option<ParamClass>,
}

impl Signature {
    /// Declare positional parameters, the first `required` of them mandatory.
    pub fn new(name: &'static str, params: Vec<ParamClass>, required: usize) -> Self {
        Signature {
            name,
            params,
            required,
            variadic: None,
        }
    }

    /// Accept any number of trailing arguments of `class`.
    pub fn variadic(mut self, class: ParamClass) -> Self {
        self.variadic = Some(class);
        self
    }

    /// Function name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Minimum number of arguments.
    pub fn min_args(&self) -> usize {
        self.required
    }

    /// Maximum number of arguments, `None` when variadic.
    pub fn max_args(&self) -> Option<usize> {
        match self.variadic {
            Some(_) => None,
            None => Some(self.params.len()),
        }
    }

    /// Required class at a 1-based position.
    pub fn class_at(&self, position: usize) -> Option<ParamClass> {
        position
            .checked_sub(1)
            .and_then(|index| self.params.get(index).copied())
            .or(if position > 0 { self.variadic } else { None })
    }

    /// Check the argument count, producing the fatal arity error.
    pub fn check_arity(&self, given: usize) -> RuntimeResult<()> {
        let min = self.min_args();
        let max = self.max_args();
        let (bound, expected) = if given < min {
            (if max == Some(min) { "exactly" } else { "at least" }, min)
        } else if let Some(max) = max.filter(|&max| given > max) {
            (if max == min { "exactly" } else { "at most" }, max)
        } else {
            return Ok(());
        };
        Err(RuntimeError::ArgumentCount(format!(
            "{}() expects {} {} argument{}, {} given",
            self.name,
            bound,
            expected,
            if expected == 1 { "" } else { "s" },
            given
        )))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct RuleKey {
    function: String,
    position: usize,
    class: ParamClass,
}

/// The coercion rule table plus its configuration.
///
/// # Examples
///
/// ```
/// use builtins::{CoercionEngine, ParamClass};
/// use core_types::Value;
///
/// let engine = CoercionEngine::default();
/// let outcome = engine.coerce("array_merge", 1, ParamClass::Container, &Value::Int(0)).unwrap();
/// assert_eq!(
///     outcome.rejection().unwrap().to_string(),
///     "array_merge(): Argument #1 must be of type array, int given"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CoercionEngine {
    config: EngineConfig,
    rules: HashMap<RuleKey, Policy>,
}

impl CoercionEngine {
    /// Create an engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        CoercionEngine {
            config,
            rules: HashMap::new(),
        }
    }

    /// Select the type label family.
    pub fn with_type_names(mut self, style: TypeNameStyle) -> Self {
        self.config.type_names = style;
        self
    }

    /// Enable or disable strict string slots.
    pub fn with_strict_types(mut self, enabled: bool) -> Self {
        self.config.strict_types = enabled;
        self
    }

    /// Enable or disable the null-to-string deprecation.
    pub fn with_null_deprecation(mut self, enabled: bool) -> Self {
        self.config.deprecate_null_to_string = enabled;
        self
    }

    /// Override how one slot treats values outside its class.
    ///
    /// Values already in the slot's class are always accepted as-is.
    /// An accepting override converts with the class's own conversion; a
    /// container in a string slot has none and is still rejected with a warning.
    pub fn with_rule(mut self, function: &str, position: usize, class: ParamClass, policy: Policy) -> Self {
        self.rules.insert(
            RuleKey {
                function: function.to_string(),
                position,
                class,
            },
            policy,
        );
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Look up the policy for a value of `kind` in the given slot.
    pub fn rule(&self, function: &str, position: usize, class: ParamClass, kind: Kind) -> Policy {
        if class.admits(kind) {
            return Policy::Accept;
        }
        let key = RuleKey {
            function: function.to_string(),
            position,
            class,
        };
        match self.rules.get(&key) {
            Some(Policy::Accept | Policy::AcceptWithConversion(_)) => match class.conversion_for(kind) {
                Some(conversion) => Policy::AcceptWithConversion(conversion),
                None => Policy::RejectWithWarningReturnNull,
            },
            Some(policy) => *policy,
            None => self.default_policy(class, kind),
        }
    }

    fn default_policy(&self, class: ParamClass, kind: Kind) -> Policy {
        match class {
            ParamClass::Container => Policy::RejectWithWarningReturnNull,
            ParamClass::String if kind == Kind::Container => Policy::RejectWithWarningReturnNull,
            ParamClass::String if self.config.strict_types => Policy::RejectFatal,
            ParamClass::String => Policy::AcceptWithConversion(Conversion::Stringify),
        }
    }

    /// Coerce one argument.
    ///
    /// Returns `Err` only for fatal outcomes: a `RejectFatal` rule or an
    /// object whose string-conversion hook fails.
    pub fn coerce(
        &self,
        function: &str,
        position: usize,
        class: ParamClass,
        value: &Value,
    ) -> RuntimeResult<CoercionOutcome> {
        let kind = classify(value);
        let policy = self.rule(function, position, class, kind);
        tracing::trace!(function, position, ?kind, ?policy, "coercing argument");

        match policy {
            Policy::Accept => Ok(CoercionOutcome::Proceed {
                value: adapt_native(class, value)?,
                diagnostics: Vec::new(),
            }),
            Policy::AcceptWithConversion(conversion) => {
                let adapted = convert(conversion, value)?;
                let mut diagnostics = Vec::new();
                if class == ParamClass::String && kind.is_null_like() && self.config.deprecate_null_to_string {
                    diagnostics.push(Diagnostic::new(
                        Severity::Deprecated,
                        function,
                        format!("Passing null to parameter #{} of type string is deprecated", position),
                    ));
                }
                Ok(CoercionOutcome::Proceed {
                    value: adapted,
                    diagnostics,
                })
            }
            Policy::RejectWithWarningReturnNull => {
                let diagnostic = self.mismatch(function, position, class, kind);
                tracing::debug!(function, position, %diagnostic, "argument rejected");
                Ok(CoercionOutcome::Fail {
                    diagnostics: vec![diagnostic],
                    sentinel: Value::Null,
                })
            }
            Policy::RejectFatal => {
                let diagnostic = self.mismatch(function, position, class, kind);
                Err(RuntimeError::TypeError(diagnostic.to_string()))
            }
        }
    }

    /// Check arity, then coerce arguments in order, stopping at the first rejection.
    #[tracing::instrument(level = "debug", skip_all, fields(function = signature.name(), argc = args.len()))]
    pub fn coerce_args(&self, signature: &Signature, args: &[Value]) -> RuntimeResult<CoercionOutcome<Vec<Adapted>>> {
        signature.check_arity(args.len())?;

        let mut adapted = Vec::with_capacity(args.len());
        let mut diagnostics = Vec::new();
        for (index, arg) in args.iter().enumerate() {
            let position = index + 1;
            let Some(class) = signature.class_at(position) else {
                break;
            };
            match self.coerce(signature.name(), position, class, arg)? {
                CoercionOutcome::Proceed {
                    value,
                    diagnostics: mut raised,
                } => {
                    adapted.push(value);
                    diagnostics.append(&mut raised);
                }
                CoercionOutcome::Fail {
                    diagnostics: mut raised,
                    sentinel,
                } => {
                    diagnostics.append(&mut raised);
                    return Ok(CoercionOutcome::Fail { diagnostics, sentinel });
                }
            }
        }
        Ok(CoercionOutcome::Proceed {
            value: adapted,
            diagnostics,
        })
    }

    fn mismatch(&self, function: &str, position: usize, class: ParamClass, kind: Kind) -> Diagnostic {
        Diagnostic::warning(
            function,
            format!(
                "Argument #{} must be of type {}, {} given",
                position,
                class.expected_name(),
                kind.display_name(self.config.type_names)
            ),
        )
    }
}

fn adapt_native(class: ParamClass, value: &Value) -> RuntimeResult<Adapted> {
    match (class, value) {
        (ParamClass::Container, Value::Array(c)) => Ok(Adapted::Array(c.clone())),
        (ParamClass::String, Value::String(s)) => Ok(Adapted::String(s.clone())),
        (class, value) => convert(class.default_conversion(), value),
    }
}

fn convert(conversion: Conversion, value: &Value) -> RuntimeResult<Adapted> {
    match conversion {
        Conversion::Stringify => stringify::to_string(value).map(Adapted::String),
        Conversion::ArrayCast => Ok(Adapted::Array(match value {
            Value::Array(c) => c.clone(),
            Value::Null | Value::Undefined => Container::new(),
            other => Container::from_values(vec![other.clone()]),
        })),
    }
}
