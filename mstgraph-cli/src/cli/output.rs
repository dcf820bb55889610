//! Text and JSON rendering of command results.

use std::collections::HashMap;
use std::io::{self, Write};

use mstgraph_core::{GraphSnapshot, VertexId};
use serde::Serialize;

use super::commands::{ExecutionSummary, OutputFormat};

/// Serialisable view of a final graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotDocument {
    /// `"minimize"` or `"maximize"`.
    pub direction: &'static str,
    /// Seed the session was built with, if any.
    pub seed: Option<u64>,
    /// Number of script steps applied.
    pub steps: usize,
    /// Vertices in storage order.
    pub vertices: Vec<VertexDocument>,
    /// Number of edges in the complete graph.
    pub edge_count: usize,
    /// Spanning-tree edges in selection order.
    pub tree: Vec<TreeEdgeDocument>,
    /// Sum of the tree edge weights.
    pub total_weight: f64,
}

/// Serialisable vertex.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VertexDocument {
    /// Stable handle.
    pub handle: u64,
    /// Display label.
    pub label: usize,
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

/// Serialisable tree edge, with endpoints given by label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeEdgeDocument {
    /// Label of the first endpoint.
    pub source: usize,
    /// Label of the second endpoint.
    pub target: usize,
    /// Euclidean length.
    pub weight: f64,
}

impl SnapshotDocument {
    /// Builds the document for `summary`.
    #[must_use]
    pub fn from_summary(summary: &ExecutionSummary) -> Self {
        let snapshot = &summary.snapshot;
        let labels = labels_by_handle(snapshot);
        let label_of = |handle: VertexId| labels.get(&handle).copied().unwrap_or_default();
        Self {
            direction: snapshot.direction().as_str(),
            seed: summary.seed,
            steps: summary.steps,
            vertices: snapshot
                .vertices()
                .iter()
                .map(|vertex| VertexDocument {
                    handle: vertex.id().get(),
                    label: vertex.label().get(),
                    x: vertex.position().x,
                    y: vertex.position().y,
                })
                .collect(),
            edge_count: snapshot.edges().len(),
            tree: snapshot
                .spanning_tree()
                .edges()
                .iter()
                .map(|edge| TreeEdgeDocument {
                    source: label_of(edge.source()),
                    target: label_of(edge.target()),
                    weight: edge.weight(),
                })
                .collect(),
            total_weight: snapshot.spanning_tree().total_weight(),
        }
    }
}

fn labels_by_handle(snapshot: &GraphSnapshot) -> HashMap<VertexId, usize> {
    snapshot
        .vertices()
        .iter()
        .map(|vertex| (vertex.id(), vertex.label().get()))
        .collect()
}

/// Renders `summary` to `writer` in the requested format.
///
/// # Errors
/// Returns [`io::Error`] if writing fails.
///
/// # Examples
/// ```
/// use clap::Parser;
/// use mstgraph_cli::cli::{Cli, OutputFormat, render_summary, run_cli};
///
/// let summary = run_cli(Cli::parse_from(["mstgraph", "show", "--vertices", "1"]))?;
/// let mut buffer = Vec::new();
/// render_summary(&summary, OutputFormat::Text, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.starts_with("direction: minimize\n"));
/// assert!(text.contains("tree edges: 0\n"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_summary(
    summary: &ExecutionSummary,
    format: OutputFormat,
    mut writer: impl Write,
) -> io::Result<()> {
    let document = SnapshotDocument::from_summary(summary);
    match format {
        OutputFormat::Text => render_text(&document, writer),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &document)?;
            writeln!(writer)
        }
    }
}

fn render_text(document: &SnapshotDocument, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "direction: {}", document.direction)?;
    match document.seed {
        Some(seed) => writeln!(writer, "seed: {seed}")?,
        None => writeln!(writer, "seed: random")?,
    }
    if document.steps > 0 {
        writeln!(writer, "steps: {}", document.steps)?;
    }
    writeln!(writer, "vertices: {}", document.vertices.len())?;
    writeln!(writer, "edges: {}", document.edge_count)?;
    writeln!(writer, "tree edges: {}", document.tree.len())?;
    writeln!(writer, "total weight: {:.3}", document.total_weight)?;
    for vertex in &document.vertices {
        writeln!(
            writer,
            "vertex\t{}\t({:.3}, {:.3})",
            vertex.label, vertex.x, vertex.y
        )?;
    }
    for edge in &document.tree {
        writeln!(
            writer,
            "tree\t{}\t{}\t{:.3}",
            edge.source, edge.target, edge.weight
        )?;
    }
    Ok(())
}
