//! Fixtures shared across the CLI unit tests.
//!
//! Tests write graph descriptions and answer files into a scratch directory,
//! then drive `run` and `check` against them. Graph text uses the `N M K`
//! token format read by `befriend_core::parse_graph`.

use std::fs;
use std::io::{self, Cursor};
use std::path::PathBuf;

use tempfile::TempDir;

use super::commands::run_command_with_stdin;
use super::{
    CheckCommand, Cli, CliError, Command, ExecutionSummary, OutputFormat, PolicyArg, RunCommand,
    run_cli,
};

/// Path-based graph on four nodes: 1-2-3 plus an isolated node 4.
pub(super) const FRIEND_OF_FRIEND: &str = "4 2 0\n1 2\n2 3\n";
/// Two nodes joined by the same friendship twice.
pub(super) const DUPLICATE_EDGE: &str = "2 2 0\n1 2\n1 2\n";

/// Scratch directory holding graph and answer files for one test.
pub(super) struct Scratch {
    dir: TempDir,
}

impl Scratch {
    pub(super) fn new() -> Self {
        match TempDir::new() {
            Ok(dir) => Self { dir },
            Err(err) => panic!("failed to create scratch dir: {err}"),
        }
    }

    /// Writes `text` to `graph.txt` and returns its path.
    pub(super) fn write_graph(&self, text: &str) -> io::Result<PathBuf> {
        self.write("graph.txt", text)
    }

    /// Writes expected counts to `graph.ans` and returns its path.
    pub(super) fn write_answer(&self, text: &str) -> io::Result<PathBuf> {
        self.write("graph.ans", text)
    }

    pub(super) fn write(&self, name: &str, text: &str) -> io::Result<PathBuf> {
        let path = self.dir.path().join(name);
        fs::write(&path, text)?;
        Ok(path)
    }

    /// Path inside the scratch directory that is never created.
    pub(super) fn absent(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

pub(super) fn run_file(path: PathBuf, edge_policy: PolicyArg, format: OutputFormat) -> Cli {
    Cli::from(Command::Run(RunCommand {
        input: Some(path),
        edge_policy,
        format,
    }))
}

pub(super) fn check_files(input: PathBuf, expected: PathBuf, edge_policy: PolicyArg) -> Cli {
    Cli::from(Command::Check(CheckCommand {
        input,
        expected,
        edge_policy,
    }))
}

/// Runs `run` without an input file, feeding `text` as standard input.
pub(super) fn run_stdin(text: &str, edge_policy: PolicyArg) -> Result<ExecutionSummary, CliError> {
    let command = RunCommand {
        input: None,
        edge_policy,
        format: OutputFormat::Plain,
    };
    run_command_with_stdin(command, Cursor::new(text.to_owned()))
}

pub(super) fn expect_cli_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(summary) => panic!("{panic_msg}; produced {:?}", summary.report.counts()),
        Err(err) => err,
    }
}
