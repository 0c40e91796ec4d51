//! Builder utilities for configuring MST construction.
//!
//! Validates the scan parallelism once, up front, so repeated runs over
//! regenerated graphs share one checked configuration.

use std::num::NonZeroUsize;

use crate::error::{GraphError, Result};
use crate::graph::ComponentGraph;
use crate::result::MstResult;

/// Configures and constructs [`Boruvka`] runners.
///
/// # Examples
/// ```
/// use satlink_core::BoruvkaBuilder;
///
/// let runner = BoruvkaBuilder::new()
///     .with_parallelism(4)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(runner.parallelism().get(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct BoruvkaBuilder {
    parallelism: usize,
}

impl Default for BoruvkaBuilder {
    fn default() -> Self {
        Self { parallelism: 1 }
    }
}

impl BoruvkaBuilder {
    /// Creates a builder populated with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of disjoint slices the min-edge scan is split into.
    #[must_use]
    pub fn with_parallelism(mut self, parallelism: usize) -> Self {
        self.parallelism = parallelism;
        self
    }

    /// Returns the currently configured parallelism.
    #[must_use]
    pub fn parallelism(&self) -> usize {
        self.parallelism
    }

    /// Validates the configuration and constructs a [`Boruvka`] runner.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidParallelism`] when the configured worker
    /// count is zero.
    pub fn build(self) -> Result<Boruvka> {
        let parallelism = NonZeroUsize::new(self.parallelism)
            .ok_or(GraphError::InvalidParallelism { got: self.parallelism })?;
        Ok(Boruvka { parallelism })
    }
}

/// A validated MST runner.
///
/// # Examples
/// ```
/// use satlink_core::{BoruvkaBuilder, ComponentGraph};
///
/// let mut graph = ComponentGraph::new();
/// let a = graph.add_node();
/// let b = graph.add_node();
/// graph.add_edge(a, b, 2)?;
///
/// let runner = BoruvkaBuilder::new().build().expect("default configuration is valid");
/// let mst = runner.run(graph)?;
/// assert_eq!(mst.edges().len(), 1);
/// # Ok::<(), satlink_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Boruvka {
    parallelism: NonZeroUsize,
}

impl Boruvka {
    /// Returns the scan parallelism this runner was built with.
    #[must_use]
    pub const fn parallelism(&self) -> NonZeroUsize {
        self.parallelism
    }

    /// Computes the minimum spanning forest of `graph`.
    ///
    /// # Errors
    /// See [`ComponentGraph::build_mst`].
    pub fn run(&self, graph: ComponentGraph) -> Result<MstResult> {
        graph.build_mst(self.parallelism)
    }
}
