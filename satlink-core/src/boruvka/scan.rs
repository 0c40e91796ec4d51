//! The parallel min-edge scan.
//!
//! Each round starts by computing, for every active component, its cheapest
//! outgoing edge. The node range is split into disjoint slices and each slice
//! is scanned by its own worker; a worker reads only its own components'
//! adjacency maps and writes only their cached minimum and absorbed flag, so
//! the scan needs no locking. Components whose adjacency emptied out (their
//! connected subgraph is fully contracted) are flagged absorbed here — the
//! active count itself is reconciled sequentially after the join.

use std::num::NonZeroUsize;

use rayon::prelude::*;

use crate::graph::{ComponentGraph, ComponentNode, MinEdge};

/// Scans all active components and refreshes their cached minimum edges.
///
/// Splits the slot range into `parallelism` slices. Returns after all
/// workers have joined and the absorbed count has been folded into the
/// graph's active count.
pub(crate) fn scan_min_edges(graph: &mut ComponentGraph, parallelism: NonZeroUsize) {
    let workers = parallelism.get();
    let absorbed = if workers == 1 {
        scan_slice(graph.nodes_mut())
    } else {
        let len = graph.node_count();
        let chunk = len.div_ceil(workers).max(1);
        graph
            .nodes_mut()
            .par_chunks_mut(chunk)
            .map(scan_slice)
            .sum()
    };
    graph.reconcile_absorbed(absorbed);
}

/// Scans one worker's slice; returns how many components it flagged
/// absorbed.
fn scan_slice(nodes: &mut [ComponentNode]) -> usize {
    let mut absorbed = 0;
    for node in nodes.iter_mut().filter(|node| node.is_active()) {
        if node.edge_count() == 0 {
            node.mark_absorbed();
            absorbed += 1;
        } else {
            let min_edge = cheapest_edge(node);
            node.set_min_edge(min_edge);
        }
    }
    absorbed
}

/// Finds the minimum-weight edge of a non-empty adjacency map.
///
/// Ties on weight break by the canonical key's lexicographic order, which is
/// independent of map iteration order, so the result is stable across runs
/// and across slice boundaries.
fn cheapest_edge(node: &ComponentNode) -> Option<MinEdge> {
    node.edges()
        .map(|(key, record)| MinEdge { key, record })
        .min_by(|a, b| {
            a.record
                .weight()
                .cmp(&b.record.weight())
                .then_with(|| a.key.cmp(&b.key))
        })
}
