//! Command implementations and argument parsing for the befriend CLI.

use std::fs::{self, File};
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use befriend_core::{
    EdgePolicy, InputError, SocialGraph, SuggesterBuilder, SuggestionReport, Verdict,
    parse_expected, parse_graph,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const STDIN_SOURCE_NAME: &str = "stdin";

/// Top-level CLI options parsed by [`clap`].
///
/// Without a subcommand the `run` options are read from the top level, so
/// `befriend < graph.txt` behaves like `befriend run`.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "befriend",
    about = "Count friend suggestions for every node of a social graph.",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Options for the implicit `run` command.
    #[command(flatten)]
    pub run: RunCommand,
}

impl Cli {
    /// Resolves the command to execute, falling back to the top-level `run`
    /// options.
    #[must_use]
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Run(self.run))
    }
}

impl From<Command> for Cli {
    fn from(command: Command) -> Self {
        Self {
            command: Some(command),
            run: RunCommand::default(),
        }
    }
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print the suggestion count of every node.
    Run(RunCommand),
    /// Compare the suggestion counts with an expected answer file.
    Check(CheckCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Default, Args, Clone)]
pub struct RunCommand {
    /// Graph description to read; stdin when omitted.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// How duplicate edges and self-loops are charged.
    #[arg(long = "edge-policy", value_enum, default_value_t = PolicyArg::Verbatim)]
    pub edge_policy: PolicyArg,

    /// Layout of the printed counts.
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,
}

/// Options accepted by the `check` command.
#[derive(Debug, Args, Clone)]
pub struct CheckCommand {
    /// Graph description to read.
    #[arg(long)]
    pub input: PathBuf,

    /// File holding the expected counts, whitespace separated.
    #[arg(long)]
    pub expected: PathBuf,

    /// How duplicate edges and self-loops are charged.
    #[arg(long = "edge-policy", value_enum, default_value_t = PolicyArg::Verbatim)]
    pub edge_policy: PolicyArg,
}

/// Command-line spelling of [`EdgePolicy`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Charge every adjacency entry, repeats included.
    #[default]
    Verbatim,
    /// Charge each distinct neighbour once.
    Distinct,
}

impl From<PolicyArg> for EdgePolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Verbatim => Self::Verbatim,
            PolicyArg::Distinct => Self::Distinct,
        }
    }
}

/// Supported layouts for `run` output.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// All counts on one line, separated by spaces.
    #[default]
    Plain,
    /// One `node<TAB>count` line per node.
    Lines,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// A named input file could not be read.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The graph description was malformed.
    #[error("invalid graph input from `{source_name}`: {source}")]
    Input {
        /// File name or `stdin`.
        source_name: String,
        /// Parser failure.
        #[source]
        source: InputError,
    },
    /// The expected answer file was malformed.
    #[error("invalid expected answer `{path}`: {source}")]
    Expected {
        /// Path of the answer file.
        path: PathBuf,
        /// Parser failure.
        #[source]
        source: InputError,
    },
}

impl CliError {
    /// Stable code of the underlying parser failure, if any.
    #[must_use]
    pub const fn input_code(&self) -> Option<&'static str> {
        match self {
            Self::Input { source, .. } | Self::Expected { source, .. } => {
                Some(source.code().as_str())
            }
            Self::Io { .. } => None,
        }
    }

    /// Stable code of the graph validation failure, if any.
    #[must_use]
    pub const fn graph_code(&self) -> Option<&'static str> {
        match self {
            Self::Input { source, .. } => match source.graph_code() {
                Some(code) => Some(code.as_str()),
                None => None,
            },
            _ => None,
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Input file name, or `stdin`.
    pub source_name: String,
    /// Suggestion counts.
    pub report: SuggestionReport,
    /// Output layout requested by `run`.
    pub format: OutputFormat,
    /// Comparison outcome, present for `check`.
    pub verdict: Option<Verdict>,
}

impl ExecutionSummary {
    /// Whether the command should exit successfully.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.verdict.as_ref().is_none_or(Verdict::is_accepted)
    }
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when an input cannot be read or parsed.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use befriend_cli::cli::{Cli, Command, OutputFormat, PolicyArg, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "4 2 0\n1 2\n2 3\n")?;
/// let cli = Cli::from(Command::Run(RunCommand {
///     input: Some(file.path().to_path_buf()),
///     edge_policy: PolicyArg::Verbatim,
///     format: OutputFormat::Plain,
/// }));
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.report.counts(), &[1, 0, 1, 0]);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.into_command() {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
        Command::Check(check) => {
            Span::current().record("command", field::display("check"));
            check_command(&check)
        }
    }
}

pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    run_command_with_stdin(command, io::stdin().lock())
}

/// Executes `run`, reading the graph from `stdin` when no input file is named.
#[instrument(
    name = "cli.execute",
    err,
    skip(command, stdin),
    fields(source = field::Empty, policy = field::Empty),
)]
pub(super) fn run_command_with_stdin<R: Read>(
    command: RunCommand,
    stdin: R,
) -> Result<ExecutionSummary, CliError> {
    let RunCommand {
        input,
        edge_policy,
        format,
    } = command;
    let source_name = derive_source_name(input.as_deref());
    let policy = EdgePolicy::from(edge_policy);
    let span = Span::current();
    span.record("source", field::display(&source_name));
    span.record("policy", field::display(policy));

    let graph = match input.as_deref() {
        Some(path) => load_graph(path, &source_name)?,
        None => read_graph(stdin, &source_name)?,
    };
    let report = SuggesterBuilder::new()
        .with_edge_policy(policy)
        .build()
        .run(&graph);

    info!(
        source = source_name.as_str(),
        nodes = report.len(),
        components = report.component_count(),
        "command completed"
    );
    Ok(ExecutionSummary {
        source_name,
        report,
        format,
        verdict: None,
    })
}

#[instrument(
    name = "cli.check",
    err,
    skip(command),
    fields(input = field::Empty, expected = field::Empty),
)]
pub(super) fn check_command(command: &CheckCommand) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    span.record("input", field::display(command.input.display()));
    span.record("expected", field::display(command.expected.display()));

    let source_name = derive_source_name(Some(&command.input));
    let graph = load_graph(&command.input, &source_name)?;
    let expected = load_expected(&command.expected)?;
    let report = SuggesterBuilder::new()
        .with_edge_policy(command.edge_policy.into())
        .build()
        .run(&graph);
    let verdict = report.compare(&expected);

    info!(
        source = source_name.as_str(),
        verdict = %verdict,
        "check completed"
    );
    Ok(ExecutionSummary {
        source_name,
        report,
        format: OutputFormat::Plain,
        verdict: Some(verdict),
    })
}

#[instrument(name = "cli.load_graph", err, skip(source_name), fields(path = field::Empty))]
pub(super) fn load_graph(path: &Path, source_name: &str) -> Result<SocialGraph, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_graph(BufReader::new(file), source_name)
}

fn read_graph<R: Read>(reader: R, source_name: &str) -> Result<SocialGraph, CliError> {
    parse_graph(reader).map_err(|source| CliError::Input {
        source_name: source_name.to_owned(),
        source,
    })
}

fn load_expected(path: &Path) -> Result<Vec<i64>, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_expected(&text).map_err(|source| CliError::Expected {
        path: path.to_path_buf(),
        source,
    })
}

pub(super) fn derive_source_name(path: Option<&Path>) -> String {
    let Some(path) = path else {
        return STDIN_SOURCE_NAME.to_owned();
    };

    path.file_name()
        .and_then(|value| value.to_str())
        .map_or_else(|| path.display().to_string(), ToOwned::to_owned)
}

/// Renders `summary` to `writer`.
///
/// `run` prints the counts in the requested layout; `check` prints the
/// verdict on a single line.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use befriend_cli::cli::{ExecutionSummary, OutputFormat, render_summary};
/// # use befriend_core::{SocialGraph, SuggesterBuilder};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let graph = SocialGraph::from_edges(3, &[(1, 2)], &[])?;
/// let summary = ExecutionSummary {
///     source_name: "demo".into(),
///     report: SuggesterBuilder::new().build().run(&graph),
///     format: OutputFormat::Plain,
///     verdict: None,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "0 0 0\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    if let Some(verdict) = &summary.verdict {
        return writeln!(writer, "{verdict}");
    }

    let counts = summary.report.counts();
    match summary.format {
        OutputFormat::Plain => {
            let line: Vec<String> = counts.iter().map(ToString::to_string).collect();
            writeln!(writer, "{}", line.join(" "))
        }
        OutputFormat::Lines => {
            for (index, count) in counts.iter().enumerate() {
                writeln!(writer, "{}\t{count}", index + 1)?;
            }
            Ok(())
        }
    }
}
