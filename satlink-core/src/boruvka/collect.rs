//! Accumulation of chosen tree edges across contraction rounds.

use std::collections::HashMap;

use crate::graph::{EdgeKey, EdgeRecord};
use crate::result::{MstEdge, MstResult};

/// Collects the edges selected by each round's planner.
///
/// Keyed by the canonical pair of *original* endpoints, so recording the
/// same edge twice (two components selecting each other across rounds) is
/// idempotent. Grows monotonically; the cut property guarantees every
/// recorded edge belongs to some MST, so nothing is ever retracted.
#[derive(Debug, Default)]
pub(crate) struct MstCollector {
    edges: HashMap<EdgeKey, EdgeRecord>,
}

impl MstCollector {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records a chosen edge; reinsertion of the same original pair is a
    /// no-op.
    pub(crate) fn record(&mut self, record: EdgeRecord) {
        let key = EdgeKey::new(record.source(), record.target());
        self.edges.entry(key).or_insert(record);
    }

    pub(crate) fn len(&self) -> usize {
        self.edges.len()
    }

    /// Emits the collected forest sorted ascending by original endpoints.
    pub(crate) fn into_result(self, node_count: usize) -> MstResult {
        let mut edges: Vec<MstEdge> = self
            .edges
            .into_values()
            .map(|record| MstEdge::new(record.source(), record.target(), record.weight()))
            .collect();
        edges.sort_unstable();
        MstResult::new(node_count, edges)
    }
}
