//! Core runtime value types, kind classification and error handling.
//!
//! This crate provides the foundational types shared by the builtin
//! functions: the tagged [`Value`] union, the closed [`Kind`]
//! classification used for argument coercion, and the fatal
//! [`RuntimeError`] channel.
//!
//! # Overview
//!
//! - [`Value`] - Tagged representation of runtime values
//! - [`Container`] - Ordered key/value mapping (the runtime's array)
//! - [`Kind`] - Closed classification consumed by coercion rules
//! - [`RuntimeError`] - Unrecoverable errors
//! - [`parse_literal`] - Reader for literal values typed on a command line
//!
//! # Examples
//!
//! ```
//! use core_types::{classify, Kind, Value};
//!
//! assert_eq!(classify(&Value::Int(42)), Kind::Integer);
//! assert_eq!(classify(&Value::string("")), Kind::EmptyString);
//! assert_eq!(Kind::Float.type_name(), "float");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod container;
mod error;
mod kind;
pub mod literal;
mod value;

pub use container::{ArrayKey, Container};
pub use error::{RuntimeError, RuntimeResult};
pub use kind::{classify, Kind, TypeNameStyle};
pub use literal::{parse_literal, LiteralError};
pub use value::{ObjectRef, ResourceHandle, Value};
