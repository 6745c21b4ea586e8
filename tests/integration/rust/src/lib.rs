//! Integration test suite for the coercion probe
//!
//! This crate provides integration tests that verify the value model,
//! builtins and CLI runtime work together across component boundaries.

use std::cell::RefCell;
use std::rc::Rc;

use builtins::{CaptureWriter, CoercionEngine};
use probe_cli::Runtime;

/// Re-export components for test convenience
pub mod components {
    pub use builtins;
    pub use core_types;
    pub use probe_cli;
}

/// A runtime whose output lines are captured in the returned buffer.
pub fn capturing_runtime(engine: CoercionEngine) -> (Runtime, Rc<RefCell<Vec<String>>>) {
    let output = Rc::new(RefCell::new(Vec::new()));
    let runtime = Runtime::new(engine).with_writer(CaptureWriter::new(output.clone()));
    (runtime, output)
}
