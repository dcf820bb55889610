//! Unit and property tests for session orchestration.

use proptest::prelude::*;
use rstest::{fixture, rstest};

use super::{GraphSession, REROLL_MAX_VERTICES, REROLL_MIN_VERTICES};
use crate::{
    Direction, GraphError, MAX_RANDOM_VERTICES, Point, SessionBuilder, SpanningTreeBuilder,
    VertexId, test_utils::suite_proptest_config,
};

#[fixture]
fn empty_session() -> GraphSession {
    SessionBuilder::new()
        .with_initial_vertices(0)
        .with_seed(11)
        .build()
        .expect("default configuration is valid")
}

#[fixture]
fn triangle_session() -> (GraphSession, Vec<VertexId>) {
    let mut session = empty_session();
    let handles = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]
        .into_iter()
        .map(|(x, y)| session.add_vertex(x, y).expect("add never fails"))
        .collect();
    (session, handles)
}

fn labels(session: &GraphSession) -> Vec<usize> {
    session
        .vertices()
        .iter()
        .map(|vertex| vertex.label().get())
        .collect()
}

fn assert_consistent(session: &GraphSession) {
    let count = session.vertices().len();
    assert_eq!(session.edges().len(), count * count.saturating_sub(1) / 2);
    assert_eq!(session.spanning_tree().len(), count.saturating_sub(1));
    let rebuilt = SpanningTreeBuilder::new(session.direction())
        .build(session.graph())
        .expect("graph is consistent");
    assert_eq!(&rebuilt, session.spanning_tree());
}

#[rstest]
fn new_session_places_initial_vertices_inside_central_band() {
    let session = SessionBuilder::new()
        .with_canvas(400.0, 200.0)
        .with_initial_vertices(25)
        .with_seed(3)
        .build()
        .expect("configuration is valid");
    assert_eq!(labels(&session), (1..=25).collect::<Vec<_>>());
    for vertex in session.vertices() {
        let position = vertex.position();
        assert!((50.0..350.0).contains(&position.x));
        assert!((25.0..175.0).contains(&position.y));
    }
    assert_consistent(&session);
}

#[rstest]
fn add_vertex_labels_one_past_count(mut empty_session: GraphSession) {
    empty_session.add_vertex(1.0, 1.0).expect("add never fails");
    empty_session.add_vertex(2.0, 2.0).expect("add never fails");
    assert_eq!(labels(&empty_session), vec![1, 2]);
    assert_consistent(&empty_session);
}

#[rstest]
fn triangle_tree_totals(triangle_session: (GraphSession, Vec<VertexId>)) {
    let (mut session, _) = triangle_session;
    assert!((session.spanning_tree().total_weight() - 20.0).abs() < 1e-9);
    assert_eq!(session.toggle_direction(), Ok(Direction::Maximize));
    assert!((session.spanning_tree().total_weight() - 24.142_135_623_730_95).abs() < 1e-9);
    assert_eq!(session.toggle_direction(), Ok(Direction::Minimize));
    assert!((session.spanning_tree().total_weight() - 20.0).abs() < 1e-9);
}

#[rstest]
fn remove_vertex_renumbers_survivors(triangle_session: (GraphSession, Vec<VertexId>)) {
    let (mut session, handles) = triangle_session;
    let removed = session
        .remove_vertex(handles[0])
        .expect("removal succeeds")
        .expect("vertex was present");
    assert_eq!(removed.label().get(), 1);
    assert_eq!(labels(&session), vec![1, 2]);
    assert_eq!(session.vertex_by_label(crate::VertexLabel::new(1)), Some(handles[1]));
    assert_consistent(&session);
}

#[rstest]
fn removing_twice_is_a_no_op(triangle_session: (GraphSession, Vec<VertexId>)) {
    let (mut session, handles) = triangle_session;
    session.remove_vertex(handles[1]).expect("removal succeeds");
    let before = session.snapshot();
    assert_eq!(session.remove_vertex(handles[1]), Ok(None));
    assert_eq!(session.snapshot(), before);
}

#[rstest]
fn failed_move_leaves_session_unchanged(triangle_session: (GraphSession, Vec<VertexId>)) {
    let (mut session, handles) = triangle_session;
    session.remove_vertex(handles[2]).expect("removal succeeds");
    let before = session.snapshot();
    let err = session
        .move_vertex(handles[2], 50.0, 50.0)
        .expect_err("removed vertex cannot move");
    assert_eq!(err, GraphError::UnknownVertex { handle: handles[2] });
    assert_eq!(session.snapshot(), before);
}

#[rstest]
fn move_vertex_rebuilds_tree(triangle_session: (GraphSession, Vec<VertexId>)) {
    let (mut session, handles) = triangle_session;
    // Pull the far corner next to the origin: the origin now anchors both
    // short edges.
    session
        .move_vertex(handles[2], 0.0, 3.0)
        .expect("vertex exists");
    let tree = session.spanning_tree();
    assert!(tree.contains(handles[0], handles[2]));
    assert!((tree.total_weight() - 13.0).abs() < 1e-9);
    assert_consistent(&session);
}

#[rstest]
fn clear_empties_graph_and_tree(triangle_session: (GraphSession, Vec<VertexId>)) {
    let (mut session, handles) = triangle_session;
    session.clear().expect("clear succeeds");
    assert!(session.vertices().is_empty());
    assert!(session.spanning_tree().is_empty());
    assert_eq!(session.remove_vertex(handles[0]), Ok(None));
    let fresh = session.add_vertex(5.0, 5.0).expect("add never fails");
    assert!(!handles.contains(&fresh));
}

#[rstest]
fn regenerate_rejects_zero_without_changes(triangle_session: (GraphSession, Vec<VertexId>)) {
    let (mut session, _) = triangle_session;
    let before = session.snapshot();
    let err = session
        .regenerate_random(0)
        .expect_err("zero vertices must be rejected");
    assert!(matches!(err, GraphError::InvalidConfiguration { parameter: "count", .. }));
    assert_eq!(session.snapshot(), before);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(9)]
fn regenerate_replaces_vertices(
    triangle_session: (GraphSession, Vec<VertexId>),
    #[case] count: usize,
) {
    let (mut session, handles) = triangle_session;
    session.regenerate_random(count).expect("count is positive");
    assert_eq!(labels(&session), (1..=count).collect::<Vec<_>>());
    assert!(handles.iter().all(|handle| !session.graph().contains(*handle)));
    assert_consistent(&session);
}

#[rstest]
fn reroll_draws_count_from_range(mut empty_session: GraphSession) {
    for _ in 0..20 {
        let count = empty_session
            .regenerate_random_count()
            .expect("drawn counts are positive");
        assert!((REROLL_MIN_VERTICES..REROLL_MAX_VERTICES).contains(&count));
        assert_eq!(empty_session.vertices().len(), count);
    }
}

#[rstest]
fn seeded_sessions_are_reproducible() {
    let build = || {
        SessionBuilder::new()
            .with_initial_vertices(8)
            .with_seed(2024)
            .build()
            .expect("configuration is valid")
    };
    let mut first = build();
    let mut second = build();
    assert_eq!(first.snapshot(), second.snapshot());
    first.regenerate_random(5).expect("count is positive");
    second.regenerate_random(5).expect("count is positive");
    assert_eq!(first.snapshot(), second.snapshot());
}

#[rstest]
fn vertex_at_respects_pick_radius(triangle_session: (GraphSession, Vec<VertexId>)) {
    let (session, handles) = triangle_session;
    assert_eq!(session.vertex_at(10.0, 11.0), Some(handles[2]));
    assert_eq!(session.vertex_at(10.0, 5.0), Some(handles[1]));
    assert_eq!(session.vertex_at(30.0, 30.0), None);
}

#[rstest]
fn resize_validates_and_updates_canvas(mut empty_session: GraphSession) {
    empty_session.resize(160.0, 80.0).expect("dimensions are valid");
    assert_eq!(empty_session.config().canvas().width(), 160.0);
    let err = empty_session
        .resize(f64::NAN, 80.0)
        .expect_err("NaN width must be rejected");
    assert!(matches!(err, GraphError::InvalidConfiguration { parameter: "width", .. }));
    assert_eq!(empty_session.config().canvas().width(), 160.0);

    empty_session.regenerate_random(12).expect("count is positive");
    for vertex in empty_session.vertices() {
        assert!((20.0..140.0).contains(&vertex.position().x));
        assert!((10.0..70.0).contains(&vertex.position().y));
    }
}

fn assert_inside_band(session: &GraphSession, width: f64, height: f64) {
    for vertex in session.vertices() {
        let Point { x, y } = vertex.position();
        assert!(x.is_finite() && y.is_finite());
        assert!(x >= width / 8.0 && x < width - width / 8.0);
        assert!(y >= height / 8.0 && y < height - height / 8.0);
    }
}

#[rstest]
#[case::wide(1e308, 600.0)]
#[case::tall(800.0, f64::MAX)]
#[case::both(f64::MAX, f64::MAX)]
fn huge_canvas_places_vertices_without_overflow(#[case] width: f64, #[case] height: f64) {
    let session = SessionBuilder::new()
        .with_canvas(width, height)
        .with_initial_vertices(6)
        .with_seed(1)
        .build()
        .expect("finite canvas is valid");
    assert_eq!(session.vertices().len(), 6);
    assert_inside_band(&session, width, height);
}

#[rstest]
fn huge_canvas_after_resize_keeps_regeneration_working(mut empty_session: GraphSession) {
    empty_session
        .resize(1e308, f64::MAX)
        .expect("finite canvas is valid");
    empty_session.regenerate_random(3).expect("count is positive");
    assert_inside_band(&empty_session, 1e308, f64::MAX);
    let count = empty_session
        .regenerate_random_count()
        .expect("drawn counts are positive");
    assert_eq!(empty_session.vertices().len(), count);
    assert_inside_band(&empty_session, 1e308, f64::MAX);
}

#[rstest]
fn oversized_regeneration_is_rejected_without_changes(
    triangle_session: (GraphSession, Vec<VertexId>),
) {
    let (mut session, _) = triangle_session;
    let before = session.snapshot();
    let err = session
        .regenerate_random(MAX_RANDOM_VERTICES + 1)
        .expect_err("count above the cap must be rejected");
    assert!(matches!(err, GraphError::InvalidConfiguration { parameter: "count", .. }));
    assert_eq!(session.snapshot(), before);
}

#[rstest]
fn builder_rejects_oversized_initial_vertex_count() {
    let err = SessionBuilder::new()
        .with_initial_vertices(MAX_RANDOM_VERTICES + 1)
        .build()
        .expect_err("count above the cap must be rejected");
    assert!(matches!(
        err,
        GraphError::InvalidConfiguration {
            parameter: "initial_vertices",
            ..
        }
    ));
}

#[rstest]
fn snapshot_is_detached_from_later_mutations(
    triangle_session: (GraphSession, Vec<VertexId>),
) {
    let (mut session, handles) = triangle_session;
    let snapshot = session.snapshot();
    session.remove_vertex(handles[0]).expect("removal succeeds");
    assert_eq!(snapshot.vertices().len(), 3);
    assert_eq!(snapshot.edges().len(), 3);
    assert_eq!(snapshot.spanning_tree().len(), 2);
    assert_eq!(snapshot.direction(), Direction::Minimize);
}

// ── Mutation sequences ──────────────────────────────────────────────────

#[derive(Clone, Debug)]
enum Mutation {
    Add(f64, f64),
    Remove(usize),
    Move(usize, f64, f64),
    Clear,
    Regenerate(usize),
    Toggle,
}

fn mutation_strategy() -> impl Strategy<Value = Mutation> {
    let coordinate = 0.0_f64..800.0;
    prop_oneof![
        4 => (coordinate.clone(), coordinate.clone()).prop_map(|(x, y)| Mutation::Add(x, y)),
        3 => (0_usize..16).prop_map(Mutation::Remove),
        3 => (0_usize..16, coordinate.clone(), coordinate).prop_map(|(i, x, y)| Mutation::Move(i, x, y)),
        1 => Just(Mutation::Clear),
        1 => (0_usize..12).prop_map(Mutation::Regenerate),
        2 => Just(Mutation::Toggle),
    ]
}

fn apply(
    session: &mut GraphSession,
    issued: &mut Vec<VertexId>,
    mutation: &Mutation,
) -> Result<(), TestCaseError> {
    let pick = |index: usize| issued.get(index % issued.len().max(1)).copied();
    match *mutation {
        Mutation::Add(x, y) => {
            let handle = session
                .add_vertex(x, y)
                .map_err(|err| TestCaseError::fail(err.to_string()))?;
            issued.push(handle);
        }
        Mutation::Remove(index) => {
            if let Some(handle) = pick(index) {
                let present = session.graph().contains(handle);
                let count = session.vertices().len();
                let removed = session
                    .remove_vertex(handle)
                    .map_err(|err| TestCaseError::fail(err.to_string()))?;
                prop_assert_eq!(removed.is_some(), present);
                prop_assert_eq!(session.vertices().len(), count - usize::from(present));
                let current = labels(session);
                prop_assert_eq!(current, (1..=session.vertices().len()).collect::<Vec<_>>());
            }
        }
        Mutation::Move(index, x, y) => {
            if let Some(handle) = pick(index) {
                let present = session.graph().contains(handle);
                let before = session.snapshot();
                let result = session.move_vertex(handle, x, y);
                prop_assert_eq!(result.is_ok(), present);
                if !present {
                    prop_assert_eq!(session.snapshot(), before);
                }
            }
        }
        Mutation::Clear => session
            .clear()
            .map_err(|err| TestCaseError::fail(err.to_string()))?,
        Mutation::Regenerate(count) => {
            let result = session.regenerate_random(count);
            prop_assert_eq!(result.is_ok(), count > 0);
        }
        Mutation::Toggle => {
            let previous = session.direction();
            let next = session
                .toggle_direction()
                .map_err(|err| TestCaseError::fail(err.to_string()))?;
            prop_assert_eq!(next, previous.toggled());
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(suite_proptest_config(64))]

    #[test]
    fn session_stays_consistent_under_mutation(
        seed in any::<u64>(),
        mutations in prop::collection::vec(mutation_strategy(), 1..40),
    ) {
        let mut session = SessionBuilder::new()
            .with_initial_vertices(3)
            .with_seed(seed)
            .build()
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        let mut issued: Vec<VertexId> = session.vertices().iter().map(|v| v.id()).collect();
        for mutation in &mutations {
            apply(&mut session, &mut issued, mutation)?;
            let count = session.vertices().len();
            prop_assert_eq!(session.edges().len(), count * count.saturating_sub(1) / 2);
            prop_assert_eq!(session.spanning_tree().len(), count.saturating_sub(1));
            prop_assert_eq!(session.spanning_tree().direction(), session.direction());
        }
    }
}
