//! Coercion probe CLI
//!
//! Entry point for `coerce-probe`. Parses CLI arguments and delegates to
//! the Runtime for execution.

use clap::Parser as ClapParser;
use probe_cli::{Cli, CliError, Runtime};
use tracing_subscriber::{fmt, prelude::*};

/// Exit status of a script aborted by a fatal error.
const FATAL_EXIT: i32 = 255;

/// Install the stderr subscriber when `--log` or `RUST_LOG` asks for output.
fn init_tracing(filter: Option<&str>) {
    let Some(filter) = probe_cli::cli::log_filter(filter) else {
        return;
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log.as_deref());

    let mut runtime = Runtime::new(cli.engine());

    let outcome = if let Some(function) = cli.fixture.as_deref() {
        runtime.run_fixture(function)
    } else if let Some(function) = cli.call.as_deref() {
        runtime.call_literals(function, &cli.args).map(|_| ())
    } else {
        println!("Coercion probe v{}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Usage:");
        println!("  coerce-probe --fixture <FUNCTION>             Replay a usage-variation fixture");
        println!("  coerce-probe --call <FUNCTION> --arg <LIT>... Call one builtin");
        println!();
        println!("Functions: {}", runtime.builtins().names().join(", "));
        return;
    };

    if let Some(path) = cli.report.as_deref() {
        if let Err(e) = runtime.report().write_to(path) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    match outcome {
        Ok(()) => {}
        // already printed as "Fatal error: ..." by the runtime
        Err(e) if e.is_fatal() => std::process::exit(FATAL_EXIT),
        Err(CliError::UnknownFixture(name)) => {
            eprintln!(
                "Error: no fixture for '{}' (expected one of: {})",
                name,
                probe_cli::Fixture::NAMES.join(", ")
            );
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
