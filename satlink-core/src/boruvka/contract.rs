//! Edge contraction: merging one component's adjacency into another's.

use crate::graph::{ComponentGraph, EdgeKey};

/// Contracts `absorbed` into `survivor`.
///
/// Both slots must be active and distinct. The direct edge between the pair
/// disappears; every other edge of `absorbed` is relinked so its key
/// references `survivor` instead, with parallel edges collapsing to the
/// cheaper record. Runs single-threaded: relinking writes into arbitrary
/// neighbors' maps, which the scan-phase ownership discipline cannot cover.
pub(crate) fn contract(graph: &mut ComponentGraph, absorbed: usize, survivor: usize) {
    debug_assert_ne!(absorbed, survivor, "contraction of a slot into itself");
    debug_assert!(graph.node(absorbed).is_active(), "absorbed slot is dead");
    debug_assert!(graph.node(survivor).is_active(), "survivor slot is dead");

    let direct = EdgeKey::new(absorbed, survivor);
    graph.node_mut(absorbed).remove_edge(&direct);
    graph.node_mut(survivor).remove_edge(&direct);

    let moved: Vec<_> = graph.node(absorbed).edges().collect();
    for (key, record) in moved {
        let neighbor = key.other(absorbed);
        graph.node_mut(absorbed).remove_edge(&key);
        graph.node_mut(neighbor).remove_edge(&key);

        if neighbor == survivor {
            // A second direct edge would mean the parallel-edge invariant
            // already broke; relinking it would manufacture a self-loop.
            debug_assert!(false, "self-loop after contract: {key:?}");
            continue;
        }

        let relink = EdgeKey::new(neighbor, survivor);
        let winner = match graph.node(neighbor).edge(&relink) {
            Some(existing) => existing.min(record),
            None => record,
        };
        graph.node_mut(neighbor).insert_edge(relink, winner);
        graph.node_mut(survivor).insert_edge(relink, winner);
    }

    graph.absorb(absorbed);
}
