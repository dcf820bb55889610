//! Properties checked against the exhaustive oracle and structural
//! invariants.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Direction, Edge, SpanningTree, SpanningTreeBuilder};

use super::oracle::{approx_eq, enumerate_spanning_trees, is_acyclic};
use super::types::GraphFixture;

fn build(fixture: &GraphFixture, direction: Direction) -> Result<SpanningTree, TestCaseError> {
    SpanningTreeBuilder::new(direction)
        .build(&fixture.graph)
        .map_err(|err| {
            TestCaseError::fail(format!(
                "build failed: {err} (layout={:?}, vertices={})",
                fixture.layout,
                fixture.graph.len()
            ))
        })
}

/// The minimise tree is the lightest spanning tree and the maximise tree the
/// heaviest.
pub(super) fn run_oracle_property(fixture: &GraphFixture) -> TestCaseResult {
    let bounds = enumerate_spanning_trees(&fixture.graph);
    let lightest = build(fixture, Direction::Minimize)?.total_weight();
    let heaviest = build(fixture, Direction::Maximize)?.total_weight();

    if !approx_eq(lightest, bounds.minimum) {
        return Err(TestCaseError::fail(format!(
            "minimize total {lightest} differs from oracle {} ({:?})",
            bounds.minimum, fixture.layout
        )));
    }
    if !approx_eq(heaviest, bounds.maximum) {
        return Err(TestCaseError::fail(format!(
            "maximize total {heaviest} differs from oracle {} ({:?})",
            bounds.maximum, fixture.layout
        )));
    }
    Ok(())
}

/// Edge counts, acyclicity, membership in the graph, and determinism.
pub(super) fn run_structural_property(fixture: &GraphFixture) -> TestCaseResult {
    let vertex_count = fixture.graph.len();
    let expected_edges = vertex_count * vertex_count.saturating_sub(1) / 2;
    if fixture.graph.edges().len() != expected_edges {
        return Err(TestCaseError::fail(format!(
            "graph has {} edges, expected {expected_edges}",
            fixture.graph.edges().len()
        )));
    }

    let handles = fixture.handles();
    for direction in [Direction::Minimize, Direction::Maximize] {
        let tree = build(fixture, direction)?;
        if tree.len() != vertex_count.saturating_sub(1) {
            return Err(TestCaseError::fail(format!(
                "{direction} tree has {} edges for {vertex_count} vertices",
                tree.len()
            )));
        }

        let chosen: Vec<&Edge> = tree.edges().iter().collect();
        if !is_acyclic(&handles, &chosen) {
            return Err(TestCaseError::fail(format!("{direction} tree has a cycle")));
        }

        if let Some(stray) = tree
            .edges()
            .iter()
            .find(|edge| !fixture.graph.edges().contains(*edge))
        {
            return Err(TestCaseError::fail(format!(
                "{direction} tree edge {stray:?} is not a graph edge"
            )));
        }

        let rebuilt = build(fixture, direction)?;
        if rebuilt != tree {
            return Err(TestCaseError::fail(format!(
                "{direction} rebuild differs from the first build"
            )));
        }
    }
    Ok(())
}
