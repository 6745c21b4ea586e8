//! Recoverable diagnostics and the per-call result channel.
//!
//! A builtin call that recovers from a bad argument still returns normally:
//! the [`CallResult`] carries the substituted value together with the
//! diagnostics raised along the way. Output is routed through a
//! [`DiagnosticWriter`], so callers can print or capture it.

use core_types::Value;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Severity of a recoverable diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Recoverable problem; the call returned a substitute value
    Warning,
    /// Informational problem, e.g. an implicit conversion
    Notice,
    /// Behavior that still works but is slated for removal
    Deprecated,
}

impl Severity {
    /// Label printed in front of the diagnostic text.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Warning => "Warning",
            Severity::Notice => "Notice",
            Severity::Deprecated => "Deprecated",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single recoverable diagnostic.
///
/// # Examples
///
/// ```
/// use builtins::{Diagnostic, Severity};
///
/// let d = Diagnostic::warning("array_merge", "Argument #1 must be of type array, int given");
/// assert_eq!(d.to_string(), "array_merge(): Argument #1 must be of type array, int given");
/// assert_eq!(d.severity, Severity::Warning);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// How serious the diagnostic is
    pub severity: Severity,
    /// Function that raised it, if any
    pub function: Option<String>,
    /// Message text without the function prefix
    pub message: String,
}

impl Diagnostic {
    /// Create a diagnostic attributed to a function.
    pub fn new(severity: Severity, function: &str, message: impl Into<String>) -> Self {
        Diagnostic {
            severity,
            function: Some(function.to_string()),
            message: message.into(),
        }
    }

    /// Create a warning attributed to a function.
    pub fn warning(function: &str, message: impl Into<String>) -> Self {
        Diagnostic::new(Severity::Warning, function, message)
    }

    /// Create a notice that is not attributed to any function.
    pub fn bare_notice(message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Notice,
            function: None,
            message: message.into(),
        }
    }

    /// Render as a full output line: `Warning: <text>`.
    pub fn render_line(&self) -> String {
        format!("{}: {}", self.severity, self)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.function {
            Some(function) => write!(f, "{}(): {}", function, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Outcome of a builtin call that did not fail fatally.
#[derive(Debug, Clone, PartialEq)]
pub struct CallResult {
    /// Returned value (Null when an argument was rejected)
    pub value: Value,
    /// Diagnostics raised during the call, in order
    pub diagnostics: Vec<Diagnostic>,
}

impl CallResult {
    /// Whether the call raised at least one warning.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Warning)
    }
}

/// Diagnostic output writer trait
pub trait DiagnosticWriter {
    /// Write one rendered diagnostic line
    fn write(&self, line: &str);
}

/// Writer that prints diagnostics to stdout, interleaved with program output
pub struct StdoutWriter;

impl DiagnosticWriter for StdoutWriter {
    fn write(&self, line: &str) {
        println!("{}", line);
    }
}

/// Writer that captures diagnostics for later inspection
pub struct CaptureWriter {
    output: Rc<RefCell<Vec<String>>>,
}

impl CaptureWriter {
    /// Create a writer appending to the shared buffer
    pub fn new(output: Rc<RefCell<Vec<String>>>) -> Self {
        CaptureWriter { output }
    }
}

impl DiagnosticWriter for CaptureWriter {
    fn write(&self, line: &str) {
        self.output.borrow_mut().push(line.to_string());
    }
}
