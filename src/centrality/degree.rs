//! Degree centrality

use std::collections::BTreeMap;

use crate::graph::CompressedGraph;

/// Fraction of the other nodes each node is connected to, `deg(v) / (n-1)`
///
/// A lone node scores 1 by convention.
pub fn degree_centrality(graph: &CompressedGraph) -> BTreeMap<u32, f64> {
    let n = graph.node_count;
    if n <= 1 {
        return graph.nodes().map(|v| (v, 1.0)).collect();
    }

    let scale = 1.0 / (n - 1) as f64;
    graph
        .nodes()
        .map(|v| (v, graph.degree(v) as f64 * scale))
        .collect()
}
