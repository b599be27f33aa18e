//! CLI entry point for befriend.
//!
//! Parses command-line arguments with clap, executes the requested command,
//! renders the result to stdout, and maps errors and failed checks to a
//! non-zero exit code. Logging is initialised eagerly so later operations can
//! emit structured diagnostics via `tracing`.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use befriend_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

/// Parse CLI arguments, execute the command, render the summary, and flush the
/// output stream. Returns whether the command succeeded.
fn try_main() -> Result<bool> {
    let cli = Cli::parse();
    let summary = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_summary(&summary, &mut writer).context("failed to render summary")?;
    writer.flush().context("failed to flush output")?;
    Ok(summary.succeeded())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    match try_main() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            let (code, graph_code) = err
                .downcast_ref::<CliError>()
                .map_or((None, None), |cli_error| {
                    (cli_error.input_code(), cli_error.graph_code())
                });

            error!(
                error = %err,
                code = code.map(field::display),
                graph_code = graph_code.map(field::display),
                "command execution failed"
            );
            ExitCode::FAILURE
        }
    }
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
