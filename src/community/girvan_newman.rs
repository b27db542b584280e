//! Girvan–Newman divisive community detection
//!
//! The edge with the highest betweenness is removed, betweenness is recomputed, and
//! this repeats until the graph falls into more connected components. Each such
//! split yields the current components as one partition, so successive partitions
//! are strictly finer.

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::centrality::edge_betweenness;
use crate::community::components::graph_components;
use crate::graph::CompressedGraph;

/// Largest partition the lab reports
pub const DEFAULT_MAX_PARTITIONS: usize = 10;

/// Iterator over the successive Girvan–Newman partitions of a graph
///
/// Each partition lists components by smallest member, members ascending. A graph
/// without edges yields its components once.
pub struct GirvanNewman {
    node_count: usize,
    working: UnGraph<u32, ()>,
    started: bool,
    finished: bool,
}

/// Start the Girvan–Newman sequence on a copy of `graph`
pub fn girvan_newman(graph: &CompressedGraph) -> GirvanNewman {
    GirvanNewman {
        node_count: graph.node_count,
        working: graph.to_petgraph(),
        started: false,
        finished: false,
    }
}

impl GirvanNewman {
    fn snapshot(&self) -> CompressedGraph {
        CompressedGraph::from_edges(
            self.node_count,
            self.working
                .edge_references()
                .map(|e| (e.source().index() as u32, e.target().index() as u32)),
        )
    }

    /// Remove the edge of highest betweenness; ties go to the smallest `(u, v)`
    fn remove_most_central_edge(&mut self) -> bool {
        let scores = edge_betweenness(&self.snapshot());

        let mut best: Option<((u32, u32), f64)> = None;
        for (&edge, &score) in &scores {
            match best {
                Some((_, top)) if top >= score => {}
                _ => best = Some((edge, score)),
            }
        }

        let Some(((u, v), score)) = best else {
            return false;
        };
        log::debug!("Removing edge ({}, {}) with betweenness {:.4}", u, v, score);

        match self
            .working
            .find_edge(NodeIndex::new(u as usize), NodeIndex::new(v as usize))
        {
            Some(edge) => {
                self.working.remove_edge(edge);
                true
            }
            None => {
                debug_assert!(false, "scored edge ({}, {}) missing from working graph", u, v);
                false
            }
        }
    }
}

impl Iterator for GirvanNewman {
    type Item = Vec<Vec<u32>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if self.working.edge_count() == 0 {
            self.finished = true;
            if self.started {
                return None;
            }
            self.started = true;
            return Some(graph_components(&self.snapshot()));
        }
        self.started = true;

        let before = petgraph::algo::connected_components(&self.working);
        while petgraph::algo::connected_components(&self.working) <= before {
            if !self.remove_most_central_edge() {
                break;
            }
        }

        Some(graph_components(&self.snapshot()))
    }
}

/// First Girvan–Newman partition, if it has at most `max_partitions` communities
///
/// Returns `None` when the first split already produces more communities than
/// that; this is the normal "no result" outcome, not an error. Communities are
/// ordered by descending size, equal sizes keeping partition order.
pub fn girvan_newman_communities(
    graph: &CompressedGraph,
    max_partitions: usize,
) -> Option<Vec<Vec<u32>>> {
    let mut partition = girvan_newman(graph)
        .take_while(|partition| partition.len() <= max_partitions)
        .next()?;

    partition.sort_by(|a, b| b.len().cmp(&a.len()));
    log::info!("Girvan–Newman produced {} communities", partition.len());
    Some(partition)
}
