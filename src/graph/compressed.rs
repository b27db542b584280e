//! Compact undirected graph representation

use serde::{Deserialize, Serialize};

/// Largest node count addressable with `u32` node ids
pub const MAX_NODES: usize = u32::MAX as usize;

/// Compressed sparse representation of a simple undirected graph
///
/// Every edge `{u, v}` is stored twice, once in each endpoint's adjacency list.
/// Adjacency lists are sorted and free of duplicates and self-loops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressedGraph {
    /// Number of nodes in the graph; nodes are `0..node_count`
    pub node_count: usize,

    /// Offset array: index where each node's neighbors begin
    /// offsets[i] to offsets[i+1] defines the neighbor range for node i
    pub offsets: Vec<u32>,

    /// Neighbor array: concatenated sorted adjacency lists
    pub edges: Vec<u32>,
}

impl CompressedGraph {
    /// A graph with `node_count` nodes and no edges
    pub fn empty(node_count: usize) -> Self {
        Self {
            node_count,
            offsets: vec![0; node_count + 1],
            edges: Vec::new(),
        }
    }

    /// Iterate over node ids in ascending order
    pub fn nodes(&self) -> impl Iterator<Item = u32> {
        0..self.node_count as u32
    }

    pub fn contains_node(&self, node: u32) -> bool {
        (node as usize) < self.node_count
    }

    /// Get the neighbors of a node
    pub fn neighbors(&self, node: u32) -> &[u32] {
        let start = self.offsets[node as usize] as usize;
        let end = self.offsets[node as usize + 1] as usize;
        &self.edges[start..end]
    }

    /// Check if `u` and `v` are adjacent
    pub fn has_edge(&self, u: u32, v: u32) -> bool {
        self.neighbors(u).binary_search(&v).is_ok()
    }

    pub fn degree(&self, node: u32) -> usize {
        let start = self.offsets[node as usize] as usize;
        let end = self.offsets[node as usize + 1] as usize;
        end - start
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.edges.len() / 2
    }

    /// Each undirected edge once, as `(u, v)` with `u < v`, in ascending order
    pub fn edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.nodes().flat_map(move |u| {
            self.neighbors(u)
                .iter()
                .copied()
                .filter(move |&v| u < v)
                .map(move |v| (u, v))
        })
    }

    /// Largest number of edges a simple graph on `node_count` nodes can hold
    ///
    /// Saturates at `usize::MAX` when the count does not fit.
    pub fn max_edges(node_count: usize) -> usize {
        let n = node_count as u128;
        usize::try_from(n * n.saturating_sub(1) / 2).unwrap_or(usize::MAX)
    }

    /// Mirror this graph into a petgraph `UnGraph`, keeping node indices
    pub fn to_petgraph(&self) -> petgraph::graph::UnGraph<u32, ()> {
        let mut graph = petgraph::graph::UnGraph::with_capacity(self.node_count, self.edge_count());
        for node in self.nodes() {
            graph.add_node(node);
        }
        graph.extend_with_edges(self.edges());
        graph
    }
}
