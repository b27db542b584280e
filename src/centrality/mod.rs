//! Node centrality measures and the influencer heuristic

pub mod betweenness;
pub mod closeness;
pub mod degree;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::graph::CompressedGraph;

pub use betweenness::{betweenness_centrality, edge_betweenness};
pub use closeness::closeness_centrality;
pub use degree::degree_centrality;

/// Score per node, iterated in ascending node order
pub type CentralityMap = BTreeMap<u32, f64>;

/// The three measures reported for a social network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CentralityMeasures {
    pub degree: CentralityMap,
    pub closeness: CentralityMap,
    pub betweenness: CentralityMap,
}

/// Highest-ranked nodes under each measure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CentralNodes {
    pub degree: Vec<u32>,
    pub closeness: Vec<u32>,
    pub betweenness: Vec<u32>,
}

/// Compute degree, closeness and betweenness centrality, each independently
pub fn centrality_measures(graph: &CompressedGraph) -> CentralityMeasures {
    log::info!(
        "Computing centrality measures for {} nodes and {} edges",
        graph.node_count,
        graph.edge_count()
    );

    CentralityMeasures {
        degree: degree_centrality(graph),
        closeness: closeness_centrality(graph),
        betweenness: betweenness_centrality(graph),
    }
}

impl CentralityMeasures {
    /// Top `k` nodes for every measure
    pub fn central_nodes(&self, k: usize) -> CentralNodes {
        CentralNodes {
            degree: top_nodes(&self.degree, k),
            closeness: top_nodes(&self.closeness, k),
            betweenness: top_nodes(&self.betweenness, k),
        }
    }
}

/// The node with the highest degree centrality
///
/// Ties go to the first maximum in map order, i.e. the smallest node id among the
/// tied nodes. Several nodes may share the top score; only one is reported.
/// Returns `None` for a graph without nodes.
pub fn find_influencer(graph: &CompressedGraph) -> Option<u32> {
    first_max(&degree_centrality(graph))
}

/// First key holding the maximum value, in map order
fn first_max(scores: &CentralityMap) -> Option<u32> {
    let mut best: Option<(u32, f64)> = None;
    for (&node, &score) in scores {
        match best {
            Some((_, top)) if top >= score => {}
            _ => best = Some((node, score)),
        }
    }
    best.map(|(node, _)| node)
}

/// The `k` highest-scoring nodes, best first; equal scores keep node order
pub fn top_nodes(scores: &CentralityMap, k: usize) -> Vec<u32> {
    let mut ranked: Vec<(u32, f64)> = scores.iter().map(|(&v, &s)| (v, s)).collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.into_iter().take(k).map(|(v, _)| v).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn influencer_is_the_hub() {
        let graph = CompressedGraph::from_edges(6, [(0, 1), (2, 1), (3, 1), (4, 5)]);
        assert_eq!(find_influencer(&graph), Some(1));
    }

    #[test]
    fn influencer_ties_go_to_smallest_id() {
        let graph = CompressedGraph::from_edges(4, [(2, 3), (0, 1)]);
        assert_eq!(find_influencer(&graph), Some(0));
        assert_eq!(find_influencer(&CompressedGraph::empty(0)), None);
    }

    #[test]
    fn measures_cover_every_node() {
        let graph = CompressedGraph::from_edges(5, [(0, 1), (1, 2)]);
        let measures = centrality_measures(&graph);
        for map in [&measures.degree, &measures.closeness, &measures.betweenness] {
            assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
        }
    }

    #[test]
    fn top_nodes_are_stable_on_ties() {
        let scores: CentralityMap = [(0, 0.5), (1, 0.9), (2, 0.5), (3, 0.1)].into_iter().collect();
        assert_eq!(top_nodes(&scores, 3), vec![1, 0, 2]);
        assert_eq!(top_nodes(&scores, 10).len(), 4);
    }
}
