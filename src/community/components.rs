//! Connected components via union-find

use std::collections::BTreeMap;

use crate::graph::CompressedGraph;

/// Union-Find data structure for connected component analysis
pub struct DisjointSets {
    /// Parent pointers (parent[i] = parent of node i)
    parent: Vec<u32>,

    /// Size of each set, valid at roots (for union by size)
    size: Vec<u32>,
}

impl DisjointSets {
    /// Create a new DisjointSets data structure
    pub fn new(count: usize) -> Self {
        Self {
            parent: (0..count as u32).collect(),
            size: vec![1; count],
        }
    }

    /// Find the root of the set containing x with path compression
    pub fn find(&mut self, x: u32) -> u32 {
        let px = self.parent[x as usize];
        if px != x {
            self.parent[x as usize] = self.find(px);
        }
        self.parent[x as usize]
    }

    /// Union the sets containing x and y; returns false if they were already joined
    pub fn union(&mut self, x: u32, y: u32) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        // Attach smaller tree under root of larger tree
        let (big, small) = if self.size[root_x as usize] >= self.size[root_y as usize] {
            (root_x, root_y)
        } else {
            (root_y, root_x)
        };
        self.parent[small as usize] = big;
        self.size[big as usize] += self.size[small as usize];
        true
    }
}

/// Group nodes `0..node_count` into connected components under `edges`
///
/// Members are ascending and components are ordered by their smallest member.
pub fn connected_components<I>(node_count: usize, edges: I) -> Vec<Vec<u32>>
where
    I: IntoIterator<Item = (u32, u32)>,
{
    let mut sets = DisjointSets::new(node_count);
    for (u, v) in edges {
        sets.union(u, v);
    }

    // Keyed by first member seen, which is the smallest since nodes are visited in order
    let mut first_member: Vec<Option<u32>> = vec![None; node_count];
    let mut grouped: BTreeMap<u32, Vec<u32>> = BTreeMap::new();
    for node in 0..node_count as u32 {
        let root = sets.find(node) as usize;
        let key = *first_member[root].get_or_insert(node);
        grouped.entry(key).or_default().push(node);
    }

    grouped.into_values().collect()
}

/// Connected components of a compressed graph
pub fn graph_components(graph: &CompressedGraph) -> Vec<Vec<u32>> {
    connected_components(graph.node_count, graph.edges())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_find_joins_sets_once() {
        let mut sets = DisjointSets::new(5);
        assert!(sets.union(0, 1));
        assert!(sets.union(3, 1));
        assert!(!sets.union(0, 3));
        assert_eq!(sets.find(0), sets.find(3));
        assert_ne!(sets.find(4), sets.find(0));
    }

    #[test]
    fn components_are_ordered_by_smallest_member() {
        let components = connected_components(6, [(4, 2), (5, 0), (3, 1)]);
        assert_eq!(components, vec![vec![0, 5], vec![1, 3], vec![2, 4]]);
    }

    #[test]
    fn isolated_nodes_are_singletons() {
        let graph = CompressedGraph::empty(3);
        assert_eq!(graph_components(&graph), vec![vec![0], vec![1], vec![2]]);
    }
}
