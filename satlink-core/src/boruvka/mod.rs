//! The Borůvka round driver.
//!
//! Each round is bulk-synchronous: a parallel min-edge scan over disjoint
//! node slices, a barrier, then sequential planning and contraction. Rounds
//! repeat until one component survives or a round yields no candidates
//! (disconnected input whose subgraphs are each fully contracted).

mod collect;
mod contract;
mod plan;
mod scan;

use std::num::NonZeroUsize;

use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::graph::ComponentGraph;
use crate::result::MstResult;

use self::collect::MstCollector;

/// Runs Borůvka's algorithm to completion and returns the sorted minimum
/// spanning forest.
///
/// Consumes the graph; contraction rewrites it beyond recovery. `parallelism`
/// is the number of disjoint slices the scan is split into each round.
#[instrument(
    name = "boruvka.run",
    skip(graph),
    fields(nodes = graph.node_count(), parallelism = parallelism.get()),
)]
pub(crate) fn run(mut graph: ComponentGraph, parallelism: NonZeroUsize) -> Result<MstResult> {
    let node_count = graph.node_count();
    let mut collector = MstCollector::new();
    let mut round = 0u32;

    while graph.active_component_count() > 1 {
        round += 1;

        scan::scan_min_edges(&mut graph, parallelism);
        if graph.active_component_count() <= 1 {
            debug!(round, "scan absorbed the remaining components");
            break;
        }

        let steps = plan::plan_contractions(&graph, &mut collector);
        if steps.is_empty() {
            debug!(round, "no candidates left, input is a contracted forest");
            break;
        }
        debug!(
            round,
            active = graph.active_component_count(),
            contractions = steps.len(),
            tree_edges = collector.len(),
            "contracting round candidates"
        );

        for step in &steps {
            contract::contract(&mut graph, step.absorbed, step.survivor);
        }

        #[cfg(debug_assertions)]
        graph.debug_validate();
    }

    let result = collector.into_result(node_count);
    info!(
        rounds = round,
        edges = result.edges().len(),
        total_weight = result.total_weight(),
        components = result.component_count(),
        "minimum spanning forest complete"
    );
    Ok(result)
}

#[cfg(test)]
mod property;
