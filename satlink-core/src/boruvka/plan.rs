//! The contraction planner: from cached minimum edges to a safe merge order.
//!
//! Every active component nominates its cheapest outgoing edge. The
//! deduplicated nominations form a pseudoforest over components; merging them
//! all at once is unsafe because one component can be both source and target
//! of contractions in the same round. The planner instead peels *leaves* —
//! candidate edges with an endpoint nominated exactly once — until the set is
//! exhausted, yielding an ordered sequence in which every absorbed component
//! is still alive when its turn comes.

use std::collections::{HashMap, HashSet};

use crate::graph::{ComponentGraph, EdgeKey};

use super::collect::MstCollector;

/// One ordered contraction: `absorbed` merges into `survivor`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct ContractionStep {
    pub(crate) absorbed: usize,
    pub(crate) survivor: usize,
}

/// Gathers this round's candidate edges, records them as tree edges, and
/// derives a safe contraction order.
///
/// Returns an empty plan when no component nominated an edge, which tells
/// the driver that every connected subgraph is fully contracted.
pub(crate) fn plan_contractions(
    graph: &ComponentGraph,
    collector: &mut MstCollector,
) -> Vec<ContractionStep> {
    let candidates = gather_candidates(graph, collector);
    peel_order(candidates)
}

/// Walks active components in slot order and collects their nominations,
/// deduplicated by canonical key.
///
/// Each candidate goes into the collector immediately: a component's
/// cheapest outgoing edge crosses the cut around that component, so it
/// belongs to some MST regardless of how the round's merges play out.
fn gather_candidates(graph: &ComponentGraph, collector: &mut MstCollector) -> Vec<EdgeKey> {
    let mut seen: HashSet<EdgeKey> = HashSet::new();
    let mut candidates: Vec<EdgeKey> = Vec::new();
    for node in graph.nodes().iter().filter(|node| node.is_active()) {
        let Some(min_edge) = node.min_edge() else {
            continue;
        };
        if seen.insert(min_edge.key) {
            collector.record(min_edge.record);
            candidates.push(min_edge.key);
        }
    }
    candidates
}

/// Orders the candidate set by repeated leaf peeling.
///
/// A pass scans the remaining candidates against a degree snapshot and emits
/// every edge with a degree-1 endpoint, absorbed endpoint first. Passes
/// repeat until nothing peels. Mutual selections collapse to a single
/// candidate during dedup, so after peeling the remainder is empty; the
/// trailing loop only guards against a malformed candidate set.
#[expect(
    clippy::indexing_slicing,
    reason = "the degree map is rebuilt from the remaining keys each pass"
)]
fn peel_order(candidates: Vec<EdgeKey>) -> Vec<ContractionStep> {
    let mut steps = Vec::with_capacity(candidates.len());
    let mut remaining: Vec<Option<EdgeKey>> = candidates.into_iter().map(Some).collect();
    let mut left = remaining.len();

    while left > 0 {
        let degree = endpoint_degrees(&remaining);
        let mut peeled = Vec::new();
        for (index, key) in remaining.iter().enumerate() {
            let Some(key) = key else { continue };
            if degree[&key.lo()] == 1 {
                peeled.push((index, key.lo(), key.hi()));
            } else if degree[&key.hi()] == 1 {
                peeled.push((index, key.hi(), key.lo()));
            }
        }
        if peeled.is_empty() {
            break;
        }
        for (index, absorbed, survivor) in peeled {
            steps.push(ContractionStep { absorbed, survivor });
            remaining[index] = None;
            left -= 1;
        }
    }

    for key in remaining.into_iter().flatten() {
        debug_assert!(false, "candidate cycle survived dedup: {key:?}");
        steps.push(ContractionStep {
            absorbed: key.lo(),
            survivor: key.hi(),
        });
    }
    steps
}

fn endpoint_degrees(remaining: &[Option<EdgeKey>]) -> HashMap<usize, usize> {
    let mut degree: HashMap<usize, usize> = HashMap::new();
    for key in remaining.iter().flatten() {
        *degree.entry(key.lo()).or_insert(0) += 1;
        *degree.entry(key.hi()).or_insert(0) += 1;
    }
    degree
}
