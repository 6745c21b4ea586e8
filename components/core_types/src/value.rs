//! Runtime value representation.
//!
//! This module provides the `Value` enum that represents every value a
//! caller can place in an argument slot, including the two pseudo-values
//! the runtime distinguishes from plain data: an undefined slot and an
//! opaque resource handle.

use std::fmt;
use std::rc::Rc;

use crate::container::Container;

/// String-conversion hook carried by objects.
///
/// The hook returns the object's string form, or an error message when the
/// conversion itself fails.
pub type StringHook = dyn Fn() -> Result<String, String>;

struct ObjectData {
    handle: u32,
    class_name: String,
    to_string: Box<StringHook>,
}

/// Shared reference to an object that knows how to convert itself to a string.
///
/// Cloning an `ObjectRef` shares the underlying object; two references are
/// equal only when they point at the same object.
#[derive(Clone)]
pub struct ObjectRef {
    inner: Rc<ObjectData>,
}

impl ObjectRef {
    /// Create a new object with the given handle, class name and conversion hook.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::ObjectRef;
    ///
    /// let obj = ObjectRef::new(1, "classA", || Ok("Class A object".to_string()));
    /// assert_eq!(obj.class_name(), "classA");
    /// assert_eq!(obj.convert().unwrap(), "Class A object");
    /// ```
    pub fn new<F>(handle: u32, class_name: impl Into<String>, to_string: F) -> Self
    where
        F: Fn() -> Result<String, String> + 'static,
    {
        ObjectRef {
            inner: Rc::new(ObjectData {
                handle,
                class_name: class_name.into(),
                to_string: Box::new(to_string),
            }),
        }
    }

    /// The object's handle as shown by structural dumps (`#1`).
    pub fn handle(&self) -> u32 {
        self.inner.handle
    }

    /// The object's class name.
    pub fn class_name(&self) -> &str {
        &self.inner.class_name
    }

    /// Invoke the string-conversion hook.
    pub fn convert(&self) -> Result<String, String> {
        (self.inner.to_string)()
    }

    /// Whether both references point at the same object.
    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectRef")
            .field("handle", &self.inner.handle)
            .field("class_name", &self.inner.class_name)
            .finish()
    }
}

/// Opaque handle to an external resource.
///
/// Ids are allocated by whoever owns the resource; this crate only reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceHandle {
    id: u64,
    type_name: String,
}

impl ResourceHandle {
    /// Wrap an already-allocated resource id.
    pub fn new(id: u64, type_name: impl Into<String>) -> Self {
        ResourceHandle {
            id,
            type_name: type_name.into(),
        }
    }

    /// The resource's numeric id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The resource type, e.g. `stream`.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

/// Represents any runtime value that can be passed as an argument.
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// let int = Value::Int(42);
/// let text = Value::string("hello");
///
/// assert!(!int.is_null_like());
/// assert!(Value::Undefined.is_null_like());
/// assert_eq!(text.as_str(), Some("hello"));
/// ```
#[derive(Clone)]
pub enum Value {
    /// Signed 64-bit integer
    Int(i64),
    /// IEEE 754 double-precision floating point
    Float(f64),
    /// Boolean (true or false)
    Bool(bool),
    /// Explicit null
    Null,
    /// A slot that was never assigned, or was assigned and then destroyed
    Undefined,
    /// String value
    String(String),
    /// Ordered key/value container
    Array(Container),
    /// Object carrying a string-conversion hook
    Object(ObjectRef),
    /// External resource handle
    Resource(ResourceHandle),
}

impl Value {
    /// Create a string value.
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Create a list-shaped container value from the given elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// let arr = Value::list(vec![Value::Int(1), Value::Int(2)]);
    /// assert_eq!(arr.as_array().unwrap().len(), 2);
    /// ```
    pub fn list(elements: Vec<Value>) -> Self {
        Value::Array(Container::from_values(elements))
    }

    /// Create an empty container value.
    pub fn empty_array() -> Self {
        Value::Array(Container::new())
    }

    /// Whether this value is `Null` or an undefined slot.
    pub fn is_null_like(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    /// Borrow the container, if this is one.
    pub fn as_array(&self) -> Option<&Container> {
        match self {
            Value::Array(c) => Some(c),
            _ => None,
        }
    }

    /// Borrow the string contents, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Value::Float(n) => f.debug_tuple("Float").field(n).finish(),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Null => write!(f, "Null"),
            Value::Undefined => write!(f, "Undefined"),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Array(c) => f.debug_tuple("Array").field(c).finish(),
            Value::Object(o) => f.debug_tuple("Object").field(o).finish(),
            Value::Resource(r) => f.debug_tuple("Resource").field(r).finish(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Undefined, Value::Undefined) => true,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            (Value::Resource(a), Value::Resource(b)) => a == b,
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Container> for Value {
    fn from(c: Container) -> Self {
        Value::Array(c)
    }
}
