//! Command-line arguments

use builtins::CoercionEngine;
use clap::Parser as ClapParser;
use core_types::TypeNameStyle;
use tracing_subscriber::EnvFilter;

/// Probe the argument coercion of the runtime's builtins
#[derive(Debug, ClapParser)]
#[command(name = "coerce-probe", version, about)]
pub struct Cli {
    /// Replay the usage-variation fixture of a function
    #[arg(short = 'f', long, value_name = "FUNCTION", conflicts_with = "call")]
    pub fixture: Option<String>,

    /// Call a single function
    #[arg(short = 'c', long, value_name = "FUNCTION")]
    pub call: Option<String>,

    /// Argument literal for --call, repeatable
    #[arg(short = 'a', long = "arg", value_name = "LITERAL", requires = "call", allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Use legacy type labels (integer, double, boolean, NULL)
    #[arg(long)]
    pub legacy_names: bool,

    /// Reject non-string scalars in string parameters
    #[arg(long)]
    pub strict_types: bool,

    /// Raise a deprecation when null reaches a string parameter
    #[arg(long)]
    pub deprecate_null: bool,

    /// Write a JSON report of every call to this path
    #[arg(long, value_name = "PATH")]
    pub report: Option<String>,

    /// Log filter for tracing output on stderr (e.g. "builtins=debug"); defaults to RUST_LOG
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,
}

impl Cli {
    /// Build the coercion engine the flags describe.
    pub fn engine(&self) -> CoercionEngine {
        let style = if self.legacy_names {
            TypeNameStyle::Legacy
        } else {
            TypeNameStyle::Modern
        };
        CoercionEngine::default()
            .with_type_names(style)
            .with_strict_types(self.strict_types)
            .with_null_deprecation(self.deprecate_null)
    }
}

/// Tracing filter from the `--log` flag, falling back to `RUST_LOG`.
///
/// `None` when neither is set or the environment filter does not parse.
pub fn log_filter(flag: Option<&str>) -> Option<EnvFilter> {
    match flag {
        Some(directives) => Some(EnvFilter::new(directives)),
        None => EnvFilter::try_from_default_env().ok(),
    }
}
