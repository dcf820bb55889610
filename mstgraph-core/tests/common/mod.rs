use mstgraph_core::{GraphSession, SessionBuilder, VertexId};

/// Builds an empty, seeded session and adds `points` in order.
#[must_use]
pub fn session_with(points: &[(f64, f64)]) -> (GraphSession, Vec<VertexId>) {
    let mut session = SessionBuilder::new()
        .with_initial_vertices(0)
        .with_seed(5)
        .build()
        .expect("default configuration is valid");
    let handles = points
        .iter()
        .map(|&(x, y)| session.add_vertex(x, y).expect("add never fails"))
        .collect();
    (session, handles)
}

/// Returns the display labels in storage order.
#[must_use]
pub fn labels(session: &GraphSession) -> Vec<String> {
    session
        .vertices()
        .iter()
        .map(|vertex| vertex.label().to_string())
        .collect()
}
