//! Argument parsing and command execution.

use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use mstgraph_core::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_INITIAL_VERTICES, Direction, GraphError,
    GraphErrorCode, GraphSession, GraphSnapshot, SessionBuilder,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::script::{ScriptError, apply_script, parse_script};

/// Top-level options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "mstgraph",
    about = "Build random geometric graphs and print their spanning trees."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Output format for the final graph.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
}

/// Supported commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Build a session and print its graph and spanning tree.
    Show(SessionArgs),
    /// Build a session, replay a mutation script, and print the result.
    Replay(ReplayArgs),
}

/// Options shared by every command that creates a session.
#[derive(Debug, Args, Clone)]
pub struct SessionArgs {
    /// Number of randomly placed vertices.
    #[arg(long, default_value_t = DEFAULT_INITIAL_VERTICES)]
    pub vertices: usize,

    /// Seed for reproducible placement.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Build a maximum spanning tree instead of a minimum one.
    #[arg(long)]
    pub maximize: bool,

    /// Canvas width used for random placement.
    #[arg(long, default_value_t = DEFAULT_CANVAS_WIDTH)]
    pub width: f64,

    /// Canvas height used for random placement.
    #[arg(long, default_value_t = DEFAULT_CANVAS_HEIGHT)]
    pub height: f64,
}

impl SessionArgs {
    fn build_session(&self) -> Result<GraphSession, GraphError> {
        let direction = if self.maximize {
            Direction::Maximize
        } else {
            Direction::Minimize
        };
        let builder = SessionBuilder::new()
            .with_canvas(self.width, self.height)
            .with_initial_vertices(self.vertices)
            .with_direction(direction);
        match self.seed {
            Some(seed) => builder.with_seed(seed),
            None => builder,
        }
        .build()
    }
}

/// Options accepted by `replay`.
#[derive(Debug, Args, Clone)]
pub struct ReplayArgs {
    /// Path to a script with one mutation per line.
    pub script: PathBuf,

    /// Session options.
    #[command(flatten)]
    pub session: SessionArgs,
}

/// Rendering formats for [`super::render_summary`].
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned, human-readable text.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

/// Errors surfaced while executing commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The script file could not be read.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: std::io::Error,
    },
    /// The script could not be parsed or referenced a missing vertex.
    #[error(transparent)]
    Script(#[from] ScriptError),
    /// A script step was rejected by the session.
    #[error("script line {line} failed: {source}")]
    Step {
        /// One-based line number of the failing step.
        line: usize,
        /// Error raised by the session.
        #[source]
        source: GraphError,
    },
    /// The session could not be created.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl CliError {
    /// Returns the stable code of the underlying [`GraphError`], if any.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph(source) | Self::Step { source, .. } => Some(source.code()),
            Self::Io { .. } | Self::Script(_) => None,
        }
    }
}

/// Outcome of a command, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionSummary {
    /// Seed the session was built with, if any.
    pub seed: Option<u64>,
    /// Number of script steps applied; zero for `show`.
    pub steps: usize,
    /// Final state of the session.
    pub snapshot: GraphSnapshot,
}

/// Executes the command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the session cannot be built, the script cannot be
/// read or parsed, or a script step fails.
///
/// # Examples
/// ```
/// use clap::Parser;
/// use mstgraph_cli::cli::{Cli, run_cli};
///
/// let cli = Cli::parse_from(["mstgraph", "show", "--vertices", "5", "--seed", "3"]);
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.snapshot.edges().len(), 10);
/// assert_eq!(summary.snapshot.spanning_tree().len(), 4);
/// # Ok::<(), mstgraph_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Show(args) => {
            span.record("command", "show");
            run_show(&args)
        }
        Command::Replay(args) => {
            span.record("command", "replay");
            run_replay(&args)
        }
    }
}

fn run_show(args: &SessionArgs) -> Result<ExecutionSummary, CliError> {
    let session = args.build_session()?;
    Ok(summarise(args, 0, &session))
}

#[instrument(
    name = "cli.replay",
    err,
    skip(args),
    fields(path = %args.script.display(), steps = field::Empty),
)]
fn run_replay(args: &ReplayArgs) -> Result<ExecutionSummary, CliError> {
    let source = fs::read_to_string(&args.script).map_err(|source| CliError::Io {
        path: args.script.clone(),
        source,
    })?;
    let lines = parse_script(&source)?;
    Span::current().record("steps", lines.len());

    let mut session = args.session.build_session()?;
    apply_script(&mut session, &lines)?;
    Ok(summarise(&args.session, lines.len(), &session))
}

fn summarise(args: &SessionArgs, steps: usize, session: &GraphSession) -> ExecutionSummary {
    let snapshot = session.snapshot();
    info!(
        vertices = snapshot.vertices().len(),
        tree_edges = snapshot.spanning_tree().len(),
        total_weight = snapshot.spanning_tree().total_weight(),
        direction = %snapshot.direction(),
        "command completed"
    );
    ExecutionSummary {
        seed: args.seed,
        steps,
        snapshot,
    }
}
