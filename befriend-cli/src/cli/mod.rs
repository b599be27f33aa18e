//! Command-line interface orchestration for befriend.
//!
//! `run` reads an `N M K` graph description from a file or stdin and prints
//! one suggestion count per node; `check` compares those counts with an
//! expected answer file.

mod commands;

pub use commands::{
    CheckCommand, Cli, CliError, Command, ExecutionSummary, OutputFormat, PolicyArg, RunCommand,
    render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
