//! Mutation scripts for `replay`.
//!
//! One command per line; blank lines and text after `#` are ignored:
//!
//! ```text
//! add X Y              place a vertex
//! move LABEL X Y       move the vertex currently labelled LABEL
//! remove LABEL         remove it and renumber the rest
//! click X Y            remove the vertex under the pointer, if any
//! drag X0 Y0 X1 Y1     move the vertex under (X0, Y0) to (X1, Y1), if any
//! clear                remove every vertex
//! regenerate N         replace the graph with N random vertices
//! reroll               replace the graph with a random number of vertices
//! toggle               switch between minimum and maximum trees
//! resize W H           change the canvas used for random placement
//! ```
//!
//! Labels are resolved when their line runs, so a `remove` shifts the labels
//! seen by every later line.

use std::str::FromStr;

use mstgraph_core::{GraphSession, Point, VertexId, VertexLabel};
use thiserror::Error;
use tracing::{debug, instrument};

use super::commands::CliError;

/// A script line that could not be parsed or resolved.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("script line {line}: {reason}")]
pub struct ScriptError {
    /// One-based line number.
    pub line: usize,
    /// What was wrong with the line.
    pub reason: String,
}

impl ScriptError {
    fn new(line: usize, reason: impl Into<String>) -> Self {
        Self {
            line,
            reason: reason.into(),
        }
    }
}

/// One parsed mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptStep {
    /// Add a vertex.
    Add(Point),
    /// Move the vertex carrying `label`.
    Move {
        /// Label at the time the step runs.
        label: VertexLabel,
        /// Destination.
        to: Point,
    },
    /// Remove the vertex carrying `label`.
    Remove(VertexLabel),
    /// Remove whichever vertex lies under the pointer.
    Click(Point),
    /// Move whichever vertex lies under `from` to `to`.
    Drag {
        /// Pointer position when the drag starts.
        from: Point,
        /// Pointer position when the drag ends.
        to: Point,
    },
    /// Remove every vertex.
    Clear,
    /// Replace the graph with this many random vertices.
    Regenerate(usize),
    /// Replace the graph with a random number of random vertices.
    Reroll,
    /// Flip the tree direction.
    Toggle,
    /// Change the canvas size.
    Resize {
        /// New width.
        width: f64,
        /// New height.
        height: f64,
    },
}

/// A step together with the line it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptLine {
    /// One-based line number.
    pub line: usize,
    /// Parsed step.
    pub step: ScriptStep,
}

/// Parses a whole script.
///
/// # Errors
/// Returns [`ScriptError`] for the first line with an unknown command, the
/// wrong number of arguments, or an argument that does not parse.
///
/// # Examples
/// ```
/// use mstgraph_cli::cli::{ScriptStep, parse_script};
///
/// let lines = parse_script("# warm-up\nadd 1 2\n\ntoggle\n")?;
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines[1].line, 4);
/// assert_eq!(lines[1].step, ScriptStep::Toggle);
/// # Ok::<(), mstgraph_cli::cli::ScriptError>(())
/// ```
pub fn parse_script(source: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut parsed = Vec::new();
    for (index, text) in source.lines().enumerate() {
        let line = index + 1;
        let code = text.split('#').next().unwrap_or_default();
        let words: Vec<&str> = code.split_whitespace().collect();
        if let Some((&command, rest)) = words.split_first() {
            let step = parse_words(line, command, rest)?;
            parsed.push(ScriptLine { line, step });
        }
    }
    Ok(parsed)
}

fn parse_words(line: usize, command: &str, rest: &[&str]) -> Result<ScriptStep, ScriptError> {
    let args = Args {
        line,
        command,
        args: rest,
    };
    let step = match command {
        "add" => {
            args.expect_count(2)?;
            ScriptStep::Add(args.point(0)?)
        }
        "move" => {
            args.expect_count(3)?;
            ScriptStep::Move {
                label: args.label(0)?,
                to: args.point(1)?,
            }
        }
        "remove" => {
            args.expect_count(1)?;
            ScriptStep::Remove(args.label(0)?)
        }
        "click" => {
            args.expect_count(2)?;
            ScriptStep::Click(args.point(0)?)
        }
        "drag" => {
            args.expect_count(4)?;
            ScriptStep::Drag {
                from: args.point(0)?,
                to: args.point(2)?,
            }
        }
        "clear" => {
            args.expect_count(0)?;
            ScriptStep::Clear
        }
        "regenerate" => {
            args.expect_count(1)?;
            ScriptStep::Regenerate(args.parse(0)?)
        }
        "reroll" => {
            args.expect_count(0)?;
            ScriptStep::Reroll
        }
        "toggle" => {
            args.expect_count(0)?;
            ScriptStep::Toggle
        }
        "resize" => {
            args.expect_count(2)?;
            ScriptStep::Resize {
                width: args.parse(0)?,
                height: args.parse(1)?,
            }
        }
        other => return Err(ScriptError::new(line, format!("unknown command `{other}`"))),
    };
    Ok(step)
}

struct Args<'a> {
    line: usize,
    command: &'a str,
    args: &'a [&'a str],
}

impl Args<'_> {
    fn expect_count(&self, expected: usize) -> Result<(), ScriptError> {
        if self.args.len() == expected {
            return Ok(());
        }
        Err(ScriptError::new(
            self.line,
            format!(
                "`{}` takes {expected} argument(s), found {}",
                self.command,
                self.args.len()
            ),
        ))
    }

    fn parse<T: FromStr>(&self, index: usize) -> Result<T, ScriptError> {
        let raw = self.args.get(index).copied().unwrap_or_default();
        raw.parse().map_err(|_| {
            ScriptError::new(
                self.line,
                format!("`{}` argument {} is not valid: `{raw}`", self.command, index + 1),
            )
        })
    }

    fn point(&self, index: usize) -> Result<Point, ScriptError> {
        Ok(Point::new(self.parse(index)?, self.parse(index + 1)?))
    }

    fn label(&self, index: usize) -> Result<VertexLabel, ScriptError> {
        match self.parse::<usize>(index)? {
            0 => Err(ScriptError::new(self.line, "labels start at 1")),
            label => Ok(VertexLabel::new(label)),
        }
    }
}

/// Applies `lines` to `session` in order, stopping at the first failure.
///
/// Steps before the failing line stay applied; the failing step itself
/// leaves the session unchanged.
///
/// # Errors
/// Returns [`CliError::Script`] when a label names no vertex, or
/// [`CliError::Step`] when the session rejects a step.
#[instrument(name = "cli.apply_script", err, skip_all, fields(steps = lines.len()))]
pub fn apply_script(session: &mut GraphSession, lines: &[ScriptLine]) -> Result<(), CliError> {
    for &ScriptLine { line, step } in lines {
        apply_step(session, line, step)?;
    }
    Ok(())
}

fn apply_step(session: &mut GraphSession, line: usize, step: ScriptStep) -> Result<(), CliError> {
    let failed = |source| CliError::Step { line, source };
    match step {
        ScriptStep::Add(at) => {
            session.add_vertex(at.x, at.y).map_err(failed)?;
        }
        ScriptStep::Move { label, to } => {
            let handle = resolve(session, line, label)?;
            session.move_vertex(handle, to.x, to.y).map_err(failed)?;
        }
        ScriptStep::Remove(label) => {
            let handle = resolve(session, line, label)?;
            session.remove_vertex(handle).map_err(failed)?;
        }
        ScriptStep::Click(at) => match session.vertex_at(at.x, at.y) {
            Some(handle) => {
                session.remove_vertex(handle).map_err(failed)?;
            }
            None => debug!(line, x = at.x, y = at.y, "click hit no vertex"),
        },
        ScriptStep::Drag { from, to } => match session.vertex_at(from.x, from.y) {
            Some(handle) => session.move_vertex(handle, to.x, to.y).map_err(failed)?,
            None => debug!(line, x = from.x, y = from.y, "drag started on empty canvas"),
        },
        ScriptStep::Clear => session.clear().map_err(failed)?,
        ScriptStep::Regenerate(count) => session.regenerate_random(count).map_err(failed)?,
        ScriptStep::Reroll => {
            let count = session.regenerate_random_count().map_err(failed)?;
            debug!(line, count, "rerolled vertex count");
        }
        ScriptStep::Toggle => {
            session.toggle_direction().map_err(failed)?;
        }
        ScriptStep::Resize { width, height } => session.resize(width, height).map_err(failed)?,
    }
    Ok(())
}

fn resolve(session: &GraphSession, line: usize, label: VertexLabel) -> Result<VertexId, CliError> {
    session
        .vertex_by_label(label)
        .ok_or_else(|| ScriptError::new(line, format!("no vertex is labelled {label}")).into())
}
