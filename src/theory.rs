//! Explanatory text shown alongside the analyses

use std::fmt;

use serde::{Deserialize, Serialize};

/// Subjects the lab can explain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum Topic {
    BruteForce,
    GirvanNewman,
    InfluencerNodes,
    NetworkMeasures,
    UserGuide,
}

impl Topic {
    pub const ALL: [Topic; 5] = [
        Topic::BruteForce,
        Topic::GirvanNewman,
        Topic::InfluencerNodes,
        Topic::NetworkMeasures,
        Topic::UserGuide,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Topic::BruteForce => "Brute-force community detection",
            Topic::GirvanNewman => "Girvan-Newman community detection",
            Topic::InfluencerNodes => "Influencer nodes",
            Topic::NetworkMeasures => "Network measures",
            Topic::UserGuide => "User guide",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

const BRUTE_FORCE: &str = "\
The brute-force method looks at every non-empty group of nodes, smallest groups first.
For each group it measures the internal edge density: the number of edges between
members divided by the number of member pairs, k(k-1)/2 for k members. A single node
has density 0.

A group whose density is above the threshold (0.5 by default) is kept as a candidate
community. Once every group has been scored, candidates that sit entirely inside a
larger candidate are discarded, so no reported community is contained in another.
Nodes that belong to no dense group are left unassigned.

Example: in a triangle {1, 2, 3} plus a separate edge {4, 5}, both the triangle and the
edge have density 1 and are reported. Adding any outside node to the triangle lowers
its density to at most 0.5, so no larger community appears.

The search visits 2^n - 1 groups for n nodes, which is why the lab limits the node
count for this method.";

const GIRVAN_NEWMAN: &str = "\
The Girvan-Newman method splits a graph by cutting the edges that connect communities.

1. Compute the edge betweenness of every edge: the share of all shortest paths
   between node pairs that run through that edge.
2. Remove the edge with the highest betweenness. Edges bridging two dense regions
   carry the most shortest paths and go first.
3. Recompute betweenness on the remaining graph, since removing an edge reroutes
   shortest paths.
4. Repeat until the graph breaks into more connected components; those components
   form the next partition.

Each partition is finer than the previous one. The lab reports the first partition,
as long as it has at most 10 communities, listed from largest to smallest.";

const INFLUENCER_NODES: &str = "\
An influencer node is a node with an outsized reach over the rest of the network.
The lab measures reach with degree centrality, the fraction of the other nodes a node
is directly connected to. The influencer is the node with the highest degree
centrality. When several nodes share the highest score, the one with the smallest id
is reported.";

const NETWORK_MEASURES: &str = "\
Degree centrality: deg(v) / (n - 1), the fraction of other nodes adjacent to v.

Closeness centrality: (n - 1) / sum of d(v, u) over all other nodes u, the inverse of
the average shortest-path distance from v. In a disconnected graph only the r nodes v
can reach count, and the score is scaled by r / (n - 1).

Betweenness centrality: the sum over node pairs (s, t) of sigma(s, t | v) / sigma(s, t),
where sigma(s, t) counts shortest paths from s to t and sigma(s, t | v) counts those
passing through v, normalized by the number of pairs not involving v.";

const USER_GUIDE: &str = "\
communities  Generate a random graph with a fixed number of nodes and edges and
             detect its communities with brute force or Girvan-Newman.
social       Generate a random social network where each pair of nodes is linked
             with a given probability, then report degree, closeness and
             betweenness centrality and the influencer node.
theory       Print the explanation of an algorithm or measure.

Results are written as JSON to the output directory, together with Graphviz DOT,
GraphML and an HTML summary for drawing the network. Pass --seed to reproduce a
graph.";

/// Static explanation for `topic`
pub fn explain(topic: Topic) -> &'static str {
    match topic {
        Topic::BruteForce => BRUTE_FORCE,
        Topic::GirvanNewman => GIRVAN_NEWMAN,
        Topic::InfluencerNodes => INFLUENCER_NODES,
        Topic::NetworkMeasures => NETWORK_MEASURES,
        Topic::UserGuide => USER_GUIDE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_topic_has_text() {
        for topic in Topic::ALL {
            assert!(!explain(topic).trim().is_empty(), "{topic}");
        }
    }
}
