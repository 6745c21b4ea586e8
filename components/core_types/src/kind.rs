//! Closed classification of runtime values.
//!
//! Every value maps to exactly one [`Kind`] before any function-specific
//! logic runs. Coercion rules are written against kinds, never against
//! the raw value.

use std::fmt;

use crate::value::Value;

/// The kind of a runtime value as seen by argument coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Integer value
    Integer,
    /// Floating point value
    Float,
    /// `true` or `false`
    Boolean,
    /// Explicit null
    Null,
    /// Zero-length string
    EmptyString,
    /// String with at least one byte
    NonEmptyString,
    /// Ordered key/value container, empty or not
    Container,
    /// Object that carries a string-conversion hook
    ObjectWithStringConversion,
    /// Never-assigned or destroyed variable
    UndefinedSlot,
    /// External resource handle
    ResourceHandle,
}

/// Which family of type labels diagnostics use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeNameStyle {
    /// `int`, `float`, `bool`, `null`, ...
    #[default]
    Modern,
    /// `integer`, `double`, `boolean`, `NULL`, ...
    Legacy,
}

impl Kind {
    /// All kinds, in declaration order.
    pub const ALL: [Kind; 10] = [
        Kind::Integer,
        Kind::Float,
        Kind::Boolean,
        Kind::Null,
        Kind::EmptyString,
        Kind::NonEmptyString,
        Kind::Container,
        Kind::ObjectWithStringConversion,
        Kind::UndefinedSlot,
        Kind::ResourceHandle,
    ];

    /// Label used in argument diagnostics.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::Kind;
    ///
    /// assert_eq!(Kind::Integer.type_name(), "int");
    /// assert_eq!(Kind::EmptyString.type_name(), "string");
    /// assert_eq!(Kind::UndefinedSlot.type_name(), "unset");
    /// ```
    pub fn type_name(&self) -> &'static str {
        match self {
            Kind::Integer => "int",
            Kind::Float => "float",
            Kind::Boolean => "bool",
            Kind::Null => "null",
            Kind::EmptyString | Kind::NonEmptyString => "string",
            Kind::Container => "array",
            Kind::ObjectWithStringConversion => "object",
            Kind::UndefinedSlot => "unset",
            Kind::ResourceHandle => "resource",
        }
    }

    /// Label in the older `gettype()` spelling.
    pub fn legacy_type_name(&self) -> &'static str {
        match self {
            Kind::Integer => "integer",
            Kind::Float => "double",
            Kind::Boolean => "boolean",
            Kind::Null => "NULL",
            other => other.type_name(),
        }
    }

    /// Label in the requested style.
    pub fn display_name(&self, style: TypeNameStyle) -> &'static str {
        match style {
            TypeNameStyle::Modern => self.type_name(),
            TypeNameStyle::Legacy => self.legacy_type_name(),
        }
    }

    /// Whether the kind is `Null` or `UndefinedSlot`.
    pub fn is_null_like(&self) -> bool {
        matches!(self, Kind::Null | Kind::UndefinedSlot)
    }

    /// Whether the kind is one of the two string kinds.
    pub fn is_string(&self) -> bool {
        matches!(self, Kind::EmptyString | Kind::NonEmptyString)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// Classify a value.
///
/// Total and pure: the result depends only on the value itself.
///
/// # Examples
///
/// ```
/// use core_types::{classify, Kind, Value};
///
/// assert_eq!(classify(&Value::Bool(true)), Kind::Boolean);
/// assert_eq!(classify(&Value::empty_array()), Kind::Container);
/// assert_eq!(classify(&Value::Undefined), Kind::UndefinedSlot);
/// ```
pub fn classify(value: &Value) -> Kind {
    match value {
        Value::Int(_) => Kind::Integer,
        Value::Float(_) => Kind::Float,
        Value::Bool(_) => Kind::Boolean,
        Value::Null => Kind::Null,
        Value::Undefined => Kind::UndefinedSlot,
        Value::String(s) if s.is_empty() => Kind::EmptyString,
        Value::String(_) => Kind::NonEmptyString,
        Value::Array(_) => Kind::Container,
        Value::Object(_) => Kind::ObjectWithStringConversion,
        Value::Resource(_) => Kind::ResourceHandle,
    }
}
