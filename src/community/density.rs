//! Internal edge density of a node subset

use crate::graph::CompressedGraph;

/// Fraction of the possible node pairs in `members` that are joined by an edge
///
/// Returns `2e / (k(k-1))` where `k = members.len()` and `e` counts the edges of the
/// induced subgraph. Subsets with fewer than two nodes have density 0.
///
/// `members` must hold distinct nodes of `graph`.
pub fn internal_edge_density(graph: &CompressedGraph, members: &[u32]) -> f64 {
    debug_assert!(members.iter().all(|&v| graph.contains_node(v)));

    let k = members.len();
    if k <= 1 {
        return 0.0;
    }

    let inside = induced_edge_count(graph, members);
    2.0 * inside as f64 / (k * (k - 1)) as f64
}

/// Number of edges with both endpoints in `members`
pub fn induced_edge_count(graph: &CompressedGraph, members: &[u32]) -> usize {
    let mut count = 0;
    for (i, &u) in members.iter().enumerate() {
        for &v in &members[i + 1..] {
            if graph.has_edge(u, v) {
                count += 1;
            }
        }
    }
    count
}
