//! Strategy builders for spanning-tree property tests.

use proptest::prelude::*;

use super::types::{GraphFixture, PointLayout};

/// Largest vertex count the brute-force oracle enumerates.
pub(super) const ORACLE_MAX_VERTICES: usize = 6;
/// Largest vertex count used by the structural suite.
const STRUCTURAL_MAX_VERTICES: usize = 40;
/// Side length of the integer lattice used to provoke weight ties.
const LATTICE_SIDE: u8 = 5;

fn points(layout: PointLayout, max: usize) -> BoxedStrategy<Vec<(f64, f64)>> {
    match layout {
        PointLayout::Scattered => {
            prop::collection::vec((0.0_f64..800.0, 0.0_f64..600.0), 0..=max).boxed()
        }
        PointLayout::Lattice => {
            prop::collection::vec((0..LATTICE_SIDE, 0..LATTICE_SIDE), 0..=max)
                .prop_map(|cells| {
                    cells
                        .into_iter()
                        .map(|(x, y)| (f64::from(x), f64::from(y)))
                        .collect()
                })
                .boxed()
        }
    }
}

fn fixture_strategy(max: usize) -> impl Strategy<Value = GraphFixture> {
    prop_oneof![
        1 => Just(PointLayout::Scattered),
        // Lattices are the interesting case for tie-breaking.
        2 => Just(PointLayout::Lattice),
    ]
    .prop_flat_map(move |layout| {
        points(layout, max).prop_map(move |raw| GraphFixture::from_points(&raw, layout))
    })
}

/// Graphs small enough for exhaustive spanning-tree enumeration.
pub(super) fn oracle_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    fixture_strategy(ORACLE_MAX_VERTICES)
}

/// Larger graphs for structural invariants.
pub(super) fn structural_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    fixture_strategy(STRUCTURAL_MAX_VERTICES)
}
