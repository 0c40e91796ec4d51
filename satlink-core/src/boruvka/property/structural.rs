//! Property 2: structural invariants of the emitted forest.
//!
//! For any forest produced by the driver:
//!
//! - **Canonical form** — `source < target` for all edges.
//! - **Acyclicity** — no cycles (union-find detection).
//! - **Edge count** — `n - c` edges for `c` connected components.
//! - **Connectivity** — connected input produces a single tree.
//! - **Membership** — every emitted edge exists in the input.

use std::collections::HashSet;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::result::MstResult;

use super::helpers::{count_input_components, find_root, fixture_context, run_fixture};
use super::types::GraphFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &GraphFixture) -> TestCaseResult {
    let result = run_fixture(fixture, 4)?;

    validate_canonical_form(&result, fixture)?;
    validate_membership(&result, fixture)?;
    validate_acyclicity(&result, fixture)?;
    validate_edge_count(&result, fixture)?;
    validate_connectivity(&result, fixture)?;
    Ok(())
}

fn validate_canonical_form(result: &MstResult, fixture: &GraphFixture) -> TestCaseResult {
    for (index, edge) in result.edges().iter().enumerate() {
        if edge.source() >= edge.target() {
            return Err(TestCaseError::fail(format!(
                "edge {index}: not canonical ({} >= {}) ({})",
                edge.source(),
                edge.target(),
                fixture_context(fixture),
            )));
        }
    }
    Ok(())
}

/// Every forest edge must be one of the input edges, weight included.
fn validate_membership(result: &MstResult, fixture: &GraphFixture) -> TestCaseResult {
    let input: HashSet<(usize, usize, u64)> = fixture
        .edges
        .iter()
        .map(|&(u, v, w)| if u <= v { (u, v, w) } else { (v, u, w) })
        .collect();
    for edge in result.edges() {
        let triple = (edge.source(), edge.target(), edge.weight());
        if !input.contains(&triple) {
            return Err(TestCaseError::fail(format!(
                "edge {triple:?} does not exist in the input ({})",
                fixture_context(fixture),
            )));
        }
    }
    Ok(())
}

fn validate_acyclicity(result: &MstResult, fixture: &GraphFixture) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..fixture.node_count).collect();
    for edge in result.edges() {
        let ru = find_root(&mut parent, edge.source());
        let rv = find_root(&mut parent, edge.target());
        if ru == rv {
            return Err(TestCaseError::fail(format!(
                "edge ({}, {}) creates a cycle ({})",
                edge.source(),
                edge.target(),
                fixture_context(fixture),
            )));
        }
        parent[rv] = ru;
    }
    Ok(())
}

fn validate_edge_count(result: &MstResult, fixture: &GraphFixture) -> TestCaseResult {
    let expected = fixture.node_count - count_input_components(fixture);
    if result.edges().len() != expected {
        return Err(TestCaseError::fail(format!(
            "edge count {}, expected n - c = {expected} ({})",
            result.edges().len(),
            fixture_context(fixture),
        )));
    }
    Ok(())
}

fn validate_connectivity(result: &MstResult, fixture: &GraphFixture) -> TestCaseResult {
    if count_input_components(fixture) == 1 && !result.is_spanning_tree() {
        return Err(TestCaseError::fail(format!(
            "input is connected but output has {} components ({})",
            result.component_count(),
            fixture_context(fixture),
        )));
    }
    Ok(())
}
