//! Closeness centrality

use std::collections::{BTreeMap, VecDeque};

use rayon::prelude::*;

use crate::graph::CompressedGraph;

/// Closeness centrality with the Wasserman–Faust correction for disconnected graphs
///
/// With `r` nodes reachable from `v` (excluding `v`) at total distance `d`, the score
/// is `(r / (n-1)) · (r / d)`. On a connected graph this is the usual inverse mean
/// distance `(n-1) / d`. Nodes that reach nothing score 0.
pub fn closeness_centrality(graph: &CompressedGraph) -> BTreeMap<u32, f64> {
    let n = graph.node_count;
    let nodes: Vec<u32> = graph.nodes().collect();

    let scores: Vec<f64> = nodes
        .par_iter()
        .map(|&source| {
            let (reached, total_distance) = bfs_distances(graph, source);
            if total_distance == 0 || n <= 1 {
                return 0.0;
            }
            let r = reached as f64;
            (r / (n - 1) as f64) * (r / total_distance as f64)
        })
        .collect();

    nodes.into_iter().zip(scores).collect()
}

/// Count of reachable nodes and their summed hop distance from `source`
fn bfs_distances(graph: &CompressedGraph, source: u32) -> (usize, usize) {
    let mut dist = vec![usize::MAX; graph.node_count];
    dist[source as usize] = 0;

    let mut queue = VecDeque::new();
    queue.push_back(source);

    let mut reached = 0;
    let mut total = 0;
    while let Some(u) = queue.pop_front() {
        let d = dist[u as usize];
        if u != source {
            reached += 1;
            total += d;
        }
        for &v in graph.neighbors(u) {
            if dist[v as usize] == usize::MAX {
                dist[v as usize] = d + 1;
                queue.push_back(v);
            }
        }
    }

    (reached, total)
}
