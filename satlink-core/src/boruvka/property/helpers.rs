//! Shared helpers for the Borůvka property suites.

use std::num::NonZeroUsize;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::graph::ComponentGraph;
use crate::result::MstResult;

use super::types::GraphFixture;

/// Builds a component graph from a fixture's edge list.
pub(super) fn build_fixture_graph(fixture: &GraphFixture) -> ComponentGraph {
    let mut graph = ComponentGraph::with_capacity(fixture.node_count);
    for _ in 0..fixture.node_count {
        graph.add_node();
    }
    for &(u, v, w) in &fixture.edges {
        graph
            .add_edge(u, v, w)
            .expect("fixture generators emit unique non-loop pairs");
    }
    graph
}

/// Runs the driver over a fixture with the given scan parallelism.
pub(super) fn run_fixture(fixture: &GraphFixture, workers: usize) -> Result<MstResult, TestCaseError> {
    let parallelism = NonZeroUsize::new(workers)
        .ok_or_else(|| TestCaseError::fail("test requested zero workers"))?;
    build_fixture_graph(fixture)
        .build_mst(parallelism)
        .map_err(|e| {
            TestCaseError::fail(format!(
                "build_mst failed: {e} (distribution={:?}, nodes={}, edges={})",
                fixture.distribution,
                fixture.node_count,
                fixture.edges.len(),
            ))
        })
}

/// Formats the fixture context appended to failure messages.
pub(super) fn fixture_context(fixture: &GraphFixture) -> String {
    format!(
        "distribution={:?}, nodes={}, edges={}",
        fixture.distribution,
        fixture.node_count,
        fixture.edges.len(),
    )
}

/// Path-compressing find for union-find verification.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Counts connected components of the raw fixture edges with union-find.
pub(super) fn count_input_components(fixture: &GraphFixture) -> usize {
    let mut parent: Vec<usize> = (0..fixture.node_count).collect();
    let mut components = fixture.node_count;
    for &(u, v, _) in &fixture.edges {
        let ru = find_root(&mut parent, u);
        let rv = find_root(&mut parent, v);
        if ru != rv {
            parent[rv] = ru;
            components -= 1;
        }
    }
    components
}

/// Asserts a named count matches, with fixture context on failure.
pub(super) fn check_eq(name: &str, actual: u64, expected: u64, fixture: &GraphFixture) -> TestCaseResult {
    if actual != expected {
        return Err(TestCaseError::fail(format!(
            "{name} mismatch: got {actual}, expected {expected} ({})",
            fixture_context(fixture),
        )));
    }
    Ok(())
}
