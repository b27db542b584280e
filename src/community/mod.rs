//! Community detection module

pub mod brute_force;
pub mod components;
pub mod density;
pub mod girvan_newman;

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::graph::CompressedGraph;

pub use brute_force::{brute_force_communities, find_communities};
pub use density::internal_edge_density;
pub use girvan_newman::{girvan_newman, girvan_newman_communities};

/// Community detection algorithm offered by the lab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Exhaustive search for maximal dense node subsets
    BruteForce,
    /// Divisive splitting by edge betweenness
    GirvanNewman,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::BruteForce => write!(f, "brute_force"),
            Method::GirvanNewman => write!(f, "girvan_newman"),
        }
    }
}

/// A detected community
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Community {
    /// Position in the reported list, starting at 1
    pub id: u32,

    /// Members of this community, ascending
    pub members: Vec<u32>,

    /// Size of the community
    pub size: usize,

    /// Internal edge density
    pub density: f64,
}

impl Community {
    fn new(id: u32, members: Vec<u32>, graph: &CompressedGraph) -> Self {
        let density = internal_edge_density(graph, &members);
        Self {
            id,
            size: members.len(),
            members,
            density,
        }
    }
}

/// Run `method` on `graph` and package the communities for reporting
///
/// Communities are listed largest first, equal sizes keeping the algorithm's own
/// order. `None` means the method found no reportable partition.
pub fn detect(graph: &CompressedGraph, method: Method, config: &Config) -> Option<Vec<Community>> {
    log::info!(
        "Detecting communities with {} on {} nodes and {} edges",
        method,
        graph.node_count,
        graph.edge_count()
    );

    let mut node_sets: Vec<Vec<u32>> = match method {
        Method::BruteForce => {
            find_communities(graph, config.density_threshold, config.search_mode)
                .into_iter()
                .map(|set: BTreeSet<u32>| set.into_iter().collect())
                .collect()
        }
        Method::GirvanNewman => {
            girvan_newman_communities(graph, config.max_girvan_newman_partitions)?
        }
    };
    node_sets.sort_by(|a, b| b.len().cmp(&a.len()));

    let communities: Vec<Community> = node_sets
        .into_iter()
        .enumerate()
        .map(|(i, members)| Community::new(i as u32 + 1, members, graph))
        .collect();

    log::info!("Found {} communities", communities.len());
    Some(communities)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brute_force_report_is_largest_first() {
        let graph = CompressedGraph::from_edges(6, [(1, 2), (2, 3), (1, 3), (4, 5)]);
        let communities = detect(&graph, Method::BruteForce, &Config::default()).unwrap();

        let members: Vec<_> = communities.iter().map(|c| c.members.clone()).collect();
        assert_eq!(members, vec![vec![1, 2, 3], vec![4, 5]]);
        assert_eq!(communities[0].id, 1);
        assert_eq!(communities[0].density, 1.0);
        assert_eq!(communities[1].size, 2);
    }

    #[test]
    fn girvan_newman_no_result_propagates() {
        let graph = CompressedGraph::empty(12);
        assert!(detect(&graph, Method::GirvanNewman, &Config::default()).is_none());
    }

    #[test]
    fn brute_force_on_edgeless_graph_is_empty_not_none() {
        let graph = CompressedGraph::empty(4);
        assert_eq!(detect(&graph, Method::BruteForce, &Config::default()), Some(Vec::new()));
    }
}
