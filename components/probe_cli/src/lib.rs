//! Coercion probe CLI library
//!
//! Provides the Runtime struct and supporting modules for the `coerce-probe`
//! binary, which replays the usage-variation fixtures of the container and
//! regex builtins and evaluates single calls.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod fixtures;
pub mod report;
pub mod runtime;

pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use fixtures::{Fixture, ResourceIds};
pub use report::{CallRecord, Report};
pub use runtime::Runtime;
