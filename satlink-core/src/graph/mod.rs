//! The component graph: a dense slot array of components whose adjacency
//! maps are merged in place by edge contraction.
//!
//! Vertices receive dense ids at insertion and double as component slots.
//! Every undirected edge is stored symmetrically in both endpoints' adjacency
//! maps under the same canonical key; contraction rewrites keys to reference
//! surviving slots while the records keep the original endpoints.

mod edge;
mod node;

use std::num::NonZeroUsize;

use crate::error::{GraphError, Result};
use crate::result::MstResult;

pub use self::edge::{EdgeKey, EdgeRecord, MinEdge};
pub(crate) use self::node::ComponentNode;

/// An undirected weighted graph whose vertices merge into components during
/// Borůvka contraction.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use satlink_core::ComponentGraph;
///
/// let mut graph = ComponentGraph::new();
/// let a = graph.add_node();
/// let b = graph.add_node();
/// graph.add_edge(a, b, 7)?;
///
/// let mst = graph.build_mst(NonZeroUsize::new(2).expect("2 is non-zero"))?;
/// assert_eq!(mst.total_weight(), 7);
/// # Ok::<(), satlink_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct ComponentGraph {
    nodes: Vec<ComponentNode>,
    active: usize,
}

impl ComponentGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `capacity` vertices.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            active: 0,
        }
    }

    /// Appends a new active component and returns its vertex id.
    pub fn add_node(&mut self) -> usize {
        let id = self.nodes.len();
        self.nodes.push(ComponentNode::new(id));
        self.active += 1;
        id
    }

    /// Inserts the undirected edge `{u, v}` with the given weight into both
    /// endpoints' adjacency maps.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when an endpoint is out of
    /// range, [`GraphError::SelfLoop`] when `u == v`, and
    /// [`GraphError::DuplicateEdge`] when the pair already carries an edge.
    #[expect(
        clippy::indexing_slicing,
        reason = "both endpoints are range-checked before any slot access"
    )]
    pub fn add_edge(&mut self, u: usize, v: usize, weight: u64) -> Result<()> {
        let vertex_count = self.nodes.len();
        for vertex in [u, v] {
            if vertex >= vertex_count {
                return Err(GraphError::UnknownVertex {
                    vertex,
                    vertex_count,
                });
            }
        }
        if u == v {
            return Err(GraphError::SelfLoop { vertex: u });
        }

        let key = EdgeKey::new(u, v);
        if self.nodes[key.lo()].has_edge(&key) {
            return Err(GraphError::DuplicateEdge {
                lo: key.lo(),
                target: key.hi(),
            });
        }

        let record = EdgeRecord::new(u, v, weight);
        self.nodes[key.lo()].insert_edge(key, record);
        self.nodes[key.hi()].insert_edge(key, record);
        Ok(())
    }

    /// Returns the total number of vertex slots, absorbed ones included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of components that have not been absorbed.
    #[must_use]
    pub fn active_component_count(&self) -> usize {
        self.active
    }

    /// Returns the component neighbors of an active slot, sorted ascending.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when `id` is out of range.
    pub fn neighbors(&self, id: usize) -> Result<Vec<usize>> {
        let node = self.checked_node(id)?;
        let mut neighbors: Vec<usize> = node.edges().map(|(key, _)| key.other(id)).collect();
        neighbors.sort_unstable();
        neighbors.dedup();
        Ok(neighbors)
    }

    /// Returns the edges incident to a slot, sorted by canonical key.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when `id` is out of range.
    pub fn edges_from(&self, id: usize) -> Result<Vec<(EdgeKey, EdgeRecord)>> {
        let node = self.checked_node(id)?;
        let mut edges: Vec<(EdgeKey, EdgeRecord)> = node.edges().collect();
        edges.sort_unstable_by_key(|(key, _)| *key);
        Ok(edges)
    }

    /// Returns every edge in the graph exactly once, sorted by canonical key.
    ///
    /// Symmetric storage means each edge appears in two adjacency maps; the
    /// canonical key collapses the pair.
    #[must_use]
    pub fn edges_all(&self) -> Vec<(EdgeKey, EdgeRecord)> {
        let mut edges: Vec<(EdgeKey, EdgeRecord)> = self
            .nodes
            .iter()
            .filter(|node| node.is_active())
            .flat_map(|node| node.edges())
            .collect();
        edges.sort_unstable_by_key(|(key, _)| *key);
        edges.dedup_by_key(|(key, _)| *key);
        edges
    }

    /// Returns the number of undirected edges.
    ///
    /// Computed as half the summed adjacency sizes, which doubles as a cheap
    /// symmetry check.
    ///
    /// # Errors
    /// Returns [`GraphError::AsymmetryDetected`] when the directed entry
    /// count is odd.
    #[expect(
        clippy::integer_division,
        clippy::integer_division_remainder_used,
        reason = "halving is exact once the even-count check has passed"
    )]
    pub fn edge_count(&self) -> Result<usize> {
        let directed_count: usize = self.nodes.iter().map(ComponentNode::edge_count).sum();
        if directed_count % 2 != 0 {
            return Err(GraphError::AsymmetryDetected { directed_count });
        }
        Ok(directed_count / 2)
    }

    /// Computes the minimum spanning forest with the given number of scan
    /// workers.
    ///
    /// Consumes the graph: contraction rewrites the adjacency maps beyond
    /// recovery. The result is sorted ascending by original endpoints.
    ///
    /// # Errors
    /// Infallible on well-formed input today; the `Result` reserves room for
    /// invariant surfacing.
    pub fn build_mst(self, parallelism: NonZeroUsize) -> Result<MstResult> {
        crate::boruvka::run(self, parallelism)
    }

    /// Computes the minimum spanning forest on the calling thread.
    ///
    /// Equivalent to [`Self::build_mst`] with parallelism 1.
    ///
    /// # Errors
    /// See [`Self::build_mst`].
    pub fn build_mst_sequential(self) -> Result<MstResult> {
        crate::boruvka::run(self, NonZeroUsize::MIN)
    }

    fn checked_node(&self, id: usize) -> Result<&ComponentNode> {
        self.nodes.get(id).ok_or(GraphError::UnknownVertex {
            vertex: id,
            vertex_count: self.nodes.len(),
        })
    }

    #[expect(
        clippy::indexing_slicing,
        reason = "crate-internal callers only pass slot ids issued by add_node"
    )]
    pub(crate) fn node(&self, id: usize) -> &ComponentNode {
        &self.nodes[id]
    }

    #[expect(
        clippy::indexing_slicing,
        reason = "crate-internal callers only pass slot ids issued by add_node"
    )]
    pub(crate) fn node_mut(&mut self, id: usize) -> &mut ComponentNode {
        &mut self.nodes[id]
    }

    pub(crate) fn nodes(&self) -> &[ComponentNode] {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [ComponentNode] {
        &mut self.nodes
    }

    /// Applies the absorption count reported by scan workers after the
    /// barrier.
    pub(crate) fn reconcile_absorbed(&mut self, absorbed: usize) {
        debug_assert!(absorbed <= self.active, "absorbed more slots than active");
        self.active -= absorbed;
    }

    /// Marks a slot absorbed during contraction and keeps the active count
    /// in step.
    #[expect(
        clippy::indexing_slicing,
        reason = "contraction steps reference slots issued by add_node"
    )]
    pub(crate) fn absorb(&mut self, id: usize) {
        debug_assert!(self.nodes[id].is_active(), "slot {id} absorbed twice");
        self.nodes[id].mark_absorbed();
        self.active -= 1;
    }

    /// Validates the multi-node invariants: symmetric storage, no dangling
    /// keys, no self-loops, and an accurate active count.
    ///
    /// Violations are programmer bugs and abort with a diagnostic. Compiled
    /// only into debug builds; the driver calls this between rounds.
    #[cfg(debug_assertions)]
    #[expect(
        clippy::indexing_slicing,
        reason = "adjacency keys are built from slot ids issued by add_node"
    )]
    pub(crate) fn debug_validate(&self) {
        let mut counted_active = 0;
        for node in &self.nodes {
            if !node.is_active() {
                assert_eq!(
                    node.edge_count(),
                    0,
                    "invariant violated: absorbed slot {} retains edges",
                    node.slot(),
                );
                continue;
            }
            counted_active += 1;
            for (key, record) in node.edges() {
                assert!(
                    key.lo() != key.hi(),
                    "invariant violated: self-loop key on slot {}",
                    node.slot(),
                );
                assert!(
                    key.touches(node.slot()),
                    "invariant violated: slot {} stores foreign key ({}, {})",
                    node.slot(),
                    key.lo(),
                    key.hi(),
                );
                let other = key.other(node.slot());
                assert!(
                    self.nodes[other].is_active(),
                    "invariant violated: key ({}, {}) references absorbed slot {other}",
                    key.lo(),
                    key.hi(),
                );
                assert_eq!(
                    self.nodes[other].edge(&key),
                    Some(record),
                    "invariant violated: edge ({}, {}) is not stored symmetrically",
                    key.lo(),
                    key.hi(),
                );
            }
        }
        assert_eq!(
            counted_active, self.active,
            "invariant violated: active count drifted",
        );
    }
}
