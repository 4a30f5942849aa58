// ============================================================================
// Calculator Binary
// Interactive menu calculator on stdin/stdout
// ============================================================================

use advanced_calculator::prelude::*;
use std::io;
use std::process::ExitCode;
use std::sync::Arc;

#[cfg(feature = "logging")]
fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

#[cfg(not(feature = "logging"))]
fn init_logging() {}

fn main() -> ExitCode {
    init_logging();

    let calculator = match create_from_config(
        CalculatorConfig::classic(),
        Arc::new(LoggingEventHandler),
    ) {
        Ok(calculator) => calculator,
        Err(err) => {
            eprintln!("invalid calculator configuration: {}", err);
            return ExitCode::FAILURE;
        },
    };

    let stdin = io::stdin();
    let mut shell = Shell::new(calculator, stdin.lock(), io::stdout());
    match shell.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("calculator stopped: {}", err);
            ExitCode::FAILURE
        },
    }
}
