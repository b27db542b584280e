//! Graph construction module

use crate::graph::CompressedGraph;

/// Builder for incrementally constructing a CompressedGraph
pub struct GraphBuilder {
    /// Number of nodes
    node_count: usize,

    /// Adjacency lists for each node
    adjacency_lists: Vec<Vec<u32>>,
}

impl GraphBuilder {
    /// Create a builder for a graph on nodes `0..node_count`
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            adjacency_lists: vec![Vec::new(); node_count],
        }
    }

    /// Add the undirected edge `{u, v}`
    ///
    /// Self-loops are ignored and repeated edges collapse on `build`.
    pub fn add_edge(&mut self, u: u32, v: u32) {
        debug_assert!((u as usize) < self.node_count && (v as usize) < self.node_count);
        if u == v {
            return;
        }
        self.adjacency_lists[u as usize].push(v);
        self.adjacency_lists[v as usize].push(u);
    }

    /// Build the compressed graph
    pub fn build(mut self) -> CompressedGraph {
        let mut offsets = Vec::with_capacity(self.node_count + 1);
        offsets.push(0);

        let mut edges = Vec::new();
        for list in &mut self.adjacency_lists {
            // Sorted lists make has_edge a binary search
            list.sort_unstable();
            list.dedup();
            edges.extend_from_slice(list);
            offsets.push(edges.len() as u32);
        }

        CompressedGraph {
            node_count: self.node_count,
            offsets,
            edges,
        }
    }
}

impl CompressedGraph {
    /// Build a graph on `node_count` nodes from an edge list
    pub fn from_edges<I>(node_count: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        let mut builder = GraphBuilder::new(node_count);
        for (u, v) in edges {
            builder.add_edge(u, v);
        }
        builder.build()
    }
}
