//! Shared test utilities for `mstgraph-core`.

use mstgraph_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

/// Builds a standard proptest configuration from the shared run profile.
///
/// Keeps property suites aligned on the same `MSTGRAPH_PBT_CASES` and
/// `MSTGRAPH_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}
