//! Type definitions for the Borůvka property-based tests.

/// Weight distribution strategy for generated graphs.
///
/// Controls how edge weights are assigned during graph generation, producing
/// inputs that stress different aspects of the contraction pipeline.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Every edge has a distinct weight, so the MST is unique.
    Unique,
    /// Large groups of edges share identical weights, stressing tie-breaking.
    ManyIdentical,
    /// Sparse graph: a random spanning tree plus a handful of extra edges.
    Sparse,
    /// Dense graph approaching a complete graph.
    Dense,
    /// Multiple components with no cross-component edges.
    Disconnected,
}

/// Fixture for Borůvka property tests.
///
/// Captures the vertex count, the generated edge list (no duplicates, no
/// self-loops), and the weight distribution used during generation for
/// failure diagnosis.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// Number of vertices in the graph.
    pub node_count: usize,
    /// Generated `(u, v, weight)` triples with unique unordered pairs.
    pub edges: Vec<(usize, usize, u64)>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}
