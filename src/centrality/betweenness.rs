//! Betweenness centrality for nodes and edges (Brandes, 2001)
//!
//! One BFS per source counts shortest paths (`sigma`) and records shortest-path
//! predecessors. Walking the BFS order backwards then accumulates each node's
//! dependency
//!
//! ```text
//! δ_s(v) = Σ_{w: v ∈ P_s(w)} (σ_sv / σ_sw) · (1 + δ_s(w))
//! ```
//!
//! and the same coefficient credited to the edge `(v, w)` gives edge betweenness.
//! Sources run on the rayon pool; their contributions are summed in source order so
//! the result does not depend on the thread count.

use std::collections::{BTreeMap, VecDeque};

use rayon::prelude::*;

use crate::graph::CompressedGraph;

/// Per-source contribution: dependency per node and per CSR adjacency slot
struct SourcePass {
    node_delta: Vec<f64>,
    slot_credit: Vec<(usize, f64)>,
}

fn single_source(graph: &CompressedGraph, source: u32) -> SourcePass {
    let n = graph.node_count;
    let mut sigma = vec![0.0_f64; n];
    let mut dist = vec![-1_i64; n];
    // (predecessor, CSR slot of predecessor -> node)
    let mut preds: Vec<Vec<(u32, usize)>> = vec![Vec::new(); n];
    let mut order = Vec::with_capacity(n);

    sigma[source as usize] = 1.0;
    dist[source as usize] = 0;

    let mut queue = VecDeque::new();
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        order.push(v);
        let base = graph.offsets[v as usize] as usize;
        let v_dist = dist[v as usize];

        for (i, &w) in graph.neighbors(v).iter().enumerate() {
            let w_idx = w as usize;
            if dist[w_idx] < 0 {
                dist[w_idx] = v_dist + 1;
                queue.push_back(w);
            }
            if dist[w_idx] == v_dist + 1 {
                sigma[w_idx] += sigma[v as usize];
                preds[w_idx].push((v, base + i));
            }
        }
    }

    let mut delta = vec![0.0_f64; n];
    let mut slot_credit = Vec::new();
    for &w in order.iter().rev() {
        let w_idx = w as usize;
        for &(v, slot) in &preds[w_idx] {
            let credit = sigma[v as usize] / sigma[w_idx] * (1.0 + delta[w_idx]);
            delta[v as usize] += credit;
            slot_credit.push((slot, credit));
        }
    }
    delta[source as usize] = 0.0;

    SourcePass {
        node_delta: delta,
        slot_credit,
    }
}

fn all_sources(graph: &CompressedGraph) -> Vec<SourcePass> {
    graph
        .nodes()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|s| single_source(graph, s))
        .collect()
}

/// Normalized node betweenness centrality of an undirected graph
///
/// `C_B(v) = Σ_{s<t} σ_st(v)/σ_st · 2/((n-1)(n-2))`; every node scores 0 when `n ≤ 2`.
pub fn betweenness_centrality(graph: &CompressedGraph) -> BTreeMap<u32, f64> {
    let n = graph.node_count;
    if n <= 2 {
        return graph.nodes().map(|v| (v, 0.0)).collect();
    }

    let mut totals = vec![0.0_f64; n];
    for pass in all_sources(graph) {
        for (total, delta) in totals.iter_mut().zip(&pass.node_delta) {
            *total += delta;
        }
    }

    // Each unordered pair was visited from both ends
    let scale = 1.0 / ((n - 1) * (n - 2)) as f64;
    graph
        .nodes()
        .map(|v| (v, totals[v as usize] * scale))
        .collect()
}

/// Normalized edge betweenness centrality, keyed by `(u, v)` with `u < v`
///
/// The share of all-pairs shortest paths crossing each edge, scaled by `1/(n(n-1))`
/// over the both-direction totals.
pub fn edge_betweenness(graph: &CompressedGraph) -> BTreeMap<(u32, u32), f64> {
    let n = graph.node_count;
    let mut slots = vec![0.0_f64; graph.edges.len()];
    for pass in all_sources(graph) {
        for (slot, credit) in pass.slot_credit {
            slots[slot] += credit;
        }
    }

    let scale = if n > 1 { 1.0 / (n * (n - 1)) as f64 } else { 1.0 };
    let mut scores: BTreeMap<(u32, u32), f64> = graph.edges().map(|e| (e, 0.0)).collect();
    for u in graph.nodes() {
        let base = graph.offsets[u as usize] as usize;
        for (i, &v) in graph.neighbors(u).iter().enumerate() {
            let key = (u.min(v), u.max(v));
            *scores.entry(key).or_insert(0.0) += slots[base + i] * scale;
        }
    }
    scores
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(n: u32) -> CompressedGraph {
        CompressedGraph::from_edges(n as usize, (0..n - 1).map(|v| (v, v + 1)))
    }

    #[test]
    fn path_middle_nodes_carry_the_paths() {
        let scores = betweenness_centrality(&path(3));
        // node 1 lies on the only 0-2 path: 1 pair * 2 / (2 * 1)
        assert_eq!(scores[&0], 0.0);
        assert!((scores[&1] - 1.0).abs() < 1e-12);
        assert_eq!(scores[&2], 0.0);
    }

    #[test]
    fn star_center_has_full_betweenness() {
        let graph = CompressedGraph::from_edges(5, (1..5).map(|v| (0, v)));
        let scores = betweenness_centrality(&graph);
        assert!((scores[&0] - 1.0).abs() < 1e-12);
        assert!((1..5).all(|v| scores[&v] == 0.0));
    }

    #[test]
    fn split_shortest_paths_share_credit() {
        // 4-cycle: the 0-2 pair has two shortest paths, via 1 and via 3
        let graph = CompressedGraph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
        let scores = betweenness_centrality(&graph);
        // each node gets half of one pair: 0.5 * 2 / (3 * 2)
        for v in 0..4 {
            assert!((scores[&v] - 1.0 / 6.0).abs() < 1e-12);
        }
    }

    #[test]
    fn tiny_graphs_score_zero() {
        let scores = betweenness_centrality(&path(2));
        assert_eq!(scores.len(), 2);
        assert!(scores.values().all(|&s| s == 0.0));
    }

    #[test]
    fn bridge_edge_has_highest_edge_betweenness() {
        // two triangles joined by the bridge 2-3
        let graph = CompressedGraph::from_edges(
            6,
            [(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5), (2, 3)],
        );
        let scores = edge_betweenness(&graph);
        assert_eq!(scores.len(), 7);
        let (best, _) = scores
            .iter()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .unwrap();
        assert_eq!(*best, (2, 3));
        // the bridge carries 3 * 3 pairs out of 15
        assert!((scores[&(2, 3)] - 9.0 / 15.0).abs() < 1e-12);
    }

    #[test]
    fn path_edge_betweenness() {
        let scores = edge_betweenness(&path(3));
        // each edge carries two of the three pairs
        assert!((scores[&(0, 1)] - 2.0 / 3.0).abs() < 1e-12);
        assert!((scores[&(1, 2)] - 2.0 / 3.0).abs() < 1e-12);
    }
}
