//! Runtime orchestration for probe runs
//!
//! The Runtime struct ties together:
//! - the builtin registry and its configured coercion engine
//! - the output writer receiving warnings and dumps
//! - the resource id allocator used by fixtures
//! - the report of every call made

use builtins::dump::var_dump;
use builtins::{Builtins, CallResult, CoercionEngine, DiagnosticWriter, StdoutWriter};
use core_types::{parse_literal, Value};

use crate::error::{CliError, CliResult};
use crate::fixtures::{Fixture, ResourceIds};
use crate::report::{CallRecord, Report};

/// Main runtime that evaluates builtin calls and prints their output
pub struct Runtime {
    /// Registered builtins
    builtins: Builtins,
    /// Sink for every output line
    writer: Box<dyn DiagnosticWriter>,
    /// Resource id allocator
    resources: ResourceIds,
    /// Calls made so far
    report: Report,
}

impl Runtime {
    /// Create a runtime printing to stdout
    ///
    /// # Example
    /// ```
    /// use builtins::CoercionEngine;
    /// use probe_cli::Runtime;
    ///
    /// let runtime = Runtime::new(CoercionEngine::default());
    /// assert!(runtime.report().calls.is_empty());
    /// ```
    pub fn new(engine: CoercionEngine) -> Self {
        Self {
            builtins: Builtins::with_engine(engine),
            writer: Box::new(StdoutWriter),
            resources: ResourceIds::default(),
            report: Report::default(),
        }
    }

    /// Send output to another writer
    pub fn with_writer(mut self, writer: impl DiagnosticWriter + 'static) -> Self {
        self.writer = Box::new(writer);
        self
    }

    /// Use a specific resource id allocator
    pub fn with_resources(mut self, resources: ResourceIds) -> Self {
        self.resources = resources;
        self
    }

    /// The builtin registry
    pub fn builtins(&self) -> &Builtins {
        &self.builtins
    }

    /// Calls made so far
    pub fn report(&self) -> &Report {
        &self.report
    }

    /// Call a builtin, print its diagnostics and the dump of its result
    ///
    /// # Errors
    /// Returns `CliError::Runtime` after printing `Fatal error: ...` when the
    /// call fails fatally.
    pub fn call(&mut self, function: &str, args: &[Value]) -> CliResult<CallResult> {
        match self.builtins.call(function, args) {
            Ok(result) => {
                for diagnostic in &result.diagnostics {
                    self.writer.write(&diagnostic.render_line());
                }
                self.write_block(&var_dump(&result.value));
                self.report
                    .calls
                    .push(CallRecord::completed(function, args, &result));
                Ok(result)
            }
            Err(err) => {
                tracing::debug!(function, %err, "fatal call");
                self.writer.write(&format!("Fatal error: {}", err));
                self.report
                    .calls
                    .push(CallRecord::fatal(function, args, err.to_string()));
                Err(CliError::Runtime(err))
            }
        }
    }

    /// Read each argument literal, then call the builtin
    ///
    /// # Example
    /// ```
    /// use std::cell::RefCell;
    /// use std::rc::Rc;
    ///
    /// use builtins::{CaptureWriter, CoercionEngine};
    /// use probe_cli::Runtime;
    ///
    /// let output = Rc::new(RefCell::new(Vec::new()));
    /// let mut runtime = Runtime::new(CoercionEngine::default())
    ///     .with_writer(CaptureWriter::new(output.clone()));
    /// runtime.call_literals("array_merge", &["0", "[1, 2]"]).unwrap();
    /// assert_eq!(
    ///     output.borrow().as_slice(),
    ///     ["Warning: array_merge(): Argument #1 must be of type array, int given", "NULL"]
    /// );
    /// ```
    pub fn call_literals<S: AsRef<str>>(&mut self, function: &str, literals: &[S]) -> CliResult<CallResult> {
        let args = literals
            .iter()
            .map(|literal| {
                let literal = literal.as_ref();
                parse_literal(literal).map_err(|source| CliError::Literal {
                    literal: literal.to_string(),
                    source,
                })
            })
            .collect::<CliResult<Vec<_>>>()?;
        self.call(function, &args)
    }

    /// Replay the usage-variation fixture of a function
    ///
    /// Stops at the first fatal error, like the runtime aborting the script.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn run_fixture(&mut self, function: &str) -> CliResult<()> {
        let fixture = Fixture::named(function, &mut self.resources)
            .ok_or_else(|| CliError::UnknownFixture(function.to_string()))?;

        self.writer.write(fixture.header());
        for (index, calls) in fixture.iterations().enumerate() {
            self.writer.write("");
            self.writer.write(&fixture.iteration_heading(index + 1));
            for args in calls {
                self.call(fixture.function(), &args)?;
            }
        }
        self.writer.write("Done");
        tracing::debug!(calls = self.report.calls.len(), warned = self.report.warned_calls(), "fixture done");
        Ok(())
    }

    fn write_block(&self, text: &str) {
        for line in text.lines() {
            self.writer.write(line);
        }
    }
}
