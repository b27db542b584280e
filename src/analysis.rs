//! One-shot analysis requests: validate parameters, build a graph, run the algorithm
//!
//! Each request owns everything it creates. A rejected or finished request leaves
//! nothing behind for the next one.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::centrality::{self, CentralNodes, CentralityMeasures};
use crate::community::{self, Community, Method};
use crate::config::Config;
use crate::error::{LabError, Result};
use crate::graph::generator::{check_node_count, erdos_renyi_graph, gnm_random_graph};
use crate::graph::CompressedGraph;

/// Smallest graph the community page accepts
pub const MIN_COMMUNITY_NODES: usize = 3;

/// Parameters for a community detection run on a random G(n, m) graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityRequest {
    pub node_count: usize,
    pub edge_count: usize,
    pub method: Method,
    /// Seed for graph generation; drawn at random when absent
    pub seed: Option<u64>,
}

/// Outcome of a community detection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityReport {
    pub method: Method,
    pub seed: u64,
    pub graph: CompressedGraph,
    /// `None` when the method produced no reportable partition
    pub communities: Option<Vec<Community>>,
}

impl CommunityRequest {
    /// Check the parameters before any graph is built
    pub fn validate(&self, config: &Config) -> Result<()> {
        config.validate()?;

        if self.node_count < MIN_COMMUNITY_NODES {
            return Err(LabError::InvalidParameter {
                name: "node_count",
                message: format!(
                    "must be at least {}, got {}",
                    MIN_COMMUNITY_NODES, self.node_count
                ),
            });
        }
        check_node_count(self.node_count)?;

        let max = CompressedGraph::max_edges(self.node_count);
        if self.edge_count > max {
            return Err(LabError::TooManyEdges {
                requested: self.edge_count,
                max,
            });
        }

        if self.method == Method::BruteForce && self.node_count > config.max_brute_force_nodes {
            return Err(LabError::TooManyNodes {
                requested: self.node_count,
                max: config.max_brute_force_nodes,
            });
        }

        Ok(())
    }

    /// Validate, generate the graph and detect communities
    pub fn run(&self, config: &Config) -> Result<CommunityReport> {
        self.validate(config)?;

        let seed = self.seed.unwrap_or_else(rand::random);
        log::info!(
            "Community request: G({}, {}) with seed {}, method {}",
            self.node_count,
            self.edge_count,
            seed,
            self.method
        );

        let mut rng = StdRng::seed_from_u64(seed);
        let graph = gnm_random_graph(self.node_count, self.edge_count, &mut rng)?;
        let communities = community::detect(&graph, self.method, config);
        if communities.is_none() {
            log::info!("No partition with at most {} communities", config.max_girvan_newman_partitions);
        }

        Ok(CommunityReport {
            method: self.method,
            seed,
            graph,
            communities,
        })
    }
}

/// Parameters for a social network analysis on a random G(n, p) graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialRequest {
    pub node_count: usize,
    pub probability: f64,
    /// Seed for graph generation; drawn at random when absent
    pub seed: Option<u64>,
}

/// Outcome of a social network analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialReport {
    pub seed: u64,
    pub graph: CompressedGraph,
    /// Highest degree centrality node, smallest id on ties
    pub influencer: Option<u32>,
    pub measures: CentralityMeasures,
    pub central_nodes: CentralNodes,
}

impl SocialRequest {
    /// Check the parameters before any graph is built
    pub fn validate(&self) -> Result<()> {
        if self.node_count < 1 {
            return Err(LabError::InvalidParameter {
                name: "node_count",
                message: "must be at least 1".to_string(),
            });
        }
        check_node_count(self.node_count)?;
        if !(0.0..=1.0).contains(&self.probability) {
            return Err(LabError::InvalidProbability(self.probability));
        }
        Ok(())
    }

    /// Validate, generate the graph and compute the centrality report
    pub fn run(&self, config: &Config) -> Result<SocialReport> {
        self.validate()?;

        let seed = self.seed.unwrap_or_else(rand::random);
        log::info!(
            "Social request: G({}, {}) with seed {}",
            self.node_count,
            self.probability,
            seed
        );

        let mut rng = StdRng::seed_from_u64(seed);
        let graph = erdos_renyi_graph(self.node_count, self.probability, &mut rng)?;

        let measures = centrality::centrality_measures(&graph);
        let influencer = centrality::find_influencer(&graph);
        let central_nodes = measures.central_nodes(config.top_k);
        if let Some(node) = influencer {
            log::info!("Influencer node: {}", node);
        }

        Ok(SocialReport {
            seed,
            graph,
            influencer,
            measures,
            central_nodes,
        })
    }
}
