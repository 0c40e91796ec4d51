//! Property 1: equivalence with a sequential Kruskal oracle.
//!
//! For any generated input graph, the driver must produce a forest with the
//! same total weight, edge count, and component count as the oracle.

use proptest::test_runner::TestCaseResult;

use super::helpers::{check_eq, run_fixture};
use super::oracle::sequential_kruskal;
use super::types::GraphFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let result = run_fixture(fixture, 4)?;
    let oracle = sequential_kruskal(fixture);

    check_eq(
        "total weight",
        result.total_weight(),
        oracle.total_weight,
        fixture,
    )?;
    check_eq(
        "edge count",
        result.edges().len() as u64,
        oracle.edge_count as u64,
        fixture,
    )?;
    check_eq(
        "component count",
        result.component_count() as u64,
        oracle.component_count as u64,
        fixture,
    )?;
    Ok(())
}
