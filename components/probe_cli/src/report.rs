//! JSON call report

use std::path::Path;

use builtins::dump::var_dump;
use builtins::CallResult;
use core_types::{classify, Value};
use serde::{Deserialize, Serialize};

use crate::error::CliResult;

/// One evaluated call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallRecord {
    /// Function name
    pub function: String,
    /// Kind label of every argument, in order
    pub argument_kinds: Vec<String>,
    /// Rendered diagnostic lines
    pub diagnostics: Vec<String>,
    /// `var_dump` of the result, absent when the call failed fatally
    pub result: Option<String>,
    /// Fatal error message, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fatal: Option<String>,
}

impl CallRecord {
    /// Record a call that returned.
    pub fn completed(function: &str, args: &[Value], result: &CallResult) -> Self {
        CallRecord {
            function: function.to_string(),
            argument_kinds: kinds(args),
            diagnostics: result.diagnostics.iter().map(|d| d.render_line()).collect(),
            result: Some(var_dump(&result.value)),
            fatal: None,
        }
    }

    /// Record a call that failed fatally.
    pub fn fatal(function: &str, args: &[Value], message: impl Into<String>) -> Self {
        CallRecord {
            function: function.to_string(),
            argument_kinds: kinds(args),
            diagnostics: Vec::new(),
            result: None,
            fatal: Some(message.into()),
        }
    }
}

fn kinds(args: &[Value]) -> Vec<String> {
    args.iter().map(|arg| classify(arg).to_string()).collect()
}

/// Every call made during one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Calls in evaluation order
    pub calls: Vec<CallRecord>,
}

impl Report {
    /// Number of calls that raised at least one warning.
    pub fn warned_calls(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| c.diagnostics.iter().any(|d| d.starts_with("Warning:")))
            .count()
    }

    /// Write the report as pretty-printed JSON.
    pub fn write_to(&self, path: impl AsRef<Path>) -> CliResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Read a report written by [`Report::write_to`].
    pub fn read_from(path: impl AsRef<Path>) -> CliResult<Report> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}
