//! Per-component state: the adjacency map and the cached minimum edge.

use std::collections::HashMap;

use super::edge::{EdgeKey, EdgeRecord, MinEdge};

/// Whether a component slot still participates in the algorithm.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ComponentState {
    /// The slot represents a live component.
    Active,
    /// The slot was merged into another component and will never return.
    Absorbed,
}

/// One slot of the component graph.
///
/// While active, a node's identity is its slot index. Contraction absorbs a
/// node exactly once; an absorbed node keeps its slot (the original vertex
/// ids inside [`EdgeRecord`]s may still reference it) but drops its adjacency
/// and cached minimum.
#[derive(Clone, Debug)]
pub(crate) struct ComponentNode {
    slot: usize,
    state: ComponentState,
    edges: HashMap<EdgeKey, EdgeRecord>,
    min_edge: Option<MinEdge>,
}

impl ComponentNode {
    pub(crate) fn new(slot: usize) -> Self {
        Self {
            slot,
            state: ComponentState::Active,
            edges: HashMap::new(),
            min_edge: None,
        }
    }

    #[rustfmt::skip]
    pub(crate) fn slot(&self) -> usize { self.slot }

    pub(crate) fn is_active(&self) -> bool {
        self.state == ComponentState::Active
    }

    /// Drops the adjacency and cached minimum and retires the slot.
    pub(crate) fn mark_absorbed(&mut self) {
        self.state = ComponentState::Absorbed;
        self.edges.clear();
        self.min_edge = None;
    }

    pub(crate) fn insert_edge(&mut self, key: EdgeKey, record: EdgeRecord) {
        self.edges.insert(key, record);
    }

    pub(crate) fn remove_edge(&mut self, key: &EdgeKey) -> Option<EdgeRecord> {
        self.edges.remove(key)
    }

    pub(crate) fn edge(&self, key: &EdgeKey) -> Option<EdgeRecord> {
        self.edges.get(key).copied()
    }

    pub(crate) fn has_edge(&self, key: &EdgeKey) -> bool {
        self.edges.contains_key(key)
    }

    pub(crate) fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn edges(&self) -> impl Iterator<Item = (EdgeKey, EdgeRecord)> + '_ {
        self.edges.iter().map(|(key, record)| (*key, *record))
    }

    pub(crate) fn min_edge(&self) -> Option<MinEdge> {
        self.min_edge
    }

    pub(crate) fn set_min_edge(&mut self, min_edge: Option<MinEdge>) {
        self.min_edge = min_edge;
    }
}
