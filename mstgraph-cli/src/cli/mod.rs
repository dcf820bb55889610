//! Command-line interface for exploring spanning trees of random geometric
//! graphs.
//!
//! `show` builds a session and prints it; `replay` additionally applies a
//! script of mutations first.

mod commands;
mod output;
mod script;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, OutputFormat, ReplayArgs, SessionArgs, run_cli,
};
pub use output::{SnapshotDocument, TreeEdgeDocument, VertexDocument, render_summary};
pub use script::{ScriptError, ScriptLine, ScriptStep, apply_script, parse_script};
