//! Random graph models used to seed each analysis

use rand::seq::index;
use rand::Rng;

use crate::error::{LabError, Result};
use crate::graph::builder::GraphBuilder;
use crate::graph::compressed::MAX_NODES;
use crate::graph::CompressedGraph;

/// Reject node counts whose ids would not fit in `u32`
pub fn check_node_count(node_count: usize) -> Result<()> {
    if node_count > MAX_NODES {
        return Err(LabError::InvalidParameter {
            name: "node_count",
            message: format!("must be at most {}, got {}", MAX_NODES, node_count),
        });
    }
    Ok(())
}

/// Uniform random graph with exactly `edge_count` edges (the G(n, m) model)
///
/// Every simple graph on `node_count` nodes with `edge_count` edges is equally likely.
pub fn gnm_random_graph<R: Rng + ?Sized>(
    node_count: usize,
    edge_count: usize,
    rng: &mut R,
) -> Result<CompressedGraph> {
    check_node_count(node_count)?;
    let max = CompressedGraph::max_edges(node_count);
    if edge_count > max {
        return Err(LabError::TooManyEdges {
            requested: edge_count,
            max,
        });
    }

    log::debug!("Sampling G({}, {}) from {} candidate pairs", node_count, edge_count, max);

    let mut builder = GraphBuilder::new(node_count);
    for pair in index::sample(rng, max, edge_count).into_iter() {
        let (u, v) = pair_from_index(node_count, pair);
        builder.add_edge(u, v);
    }

    Ok(builder.build())
}

/// Random graph where each pair is joined independently with `probability` (the G(n, p) model)
pub fn erdos_renyi_graph<R: Rng + ?Sized>(
    node_count: usize,
    probability: f64,
    rng: &mut R,
) -> Result<CompressedGraph> {
    check_node_count(node_count)?;
    if !(0.0..=1.0).contains(&probability) {
        return Err(LabError::InvalidProbability(probability));
    }

    log::debug!("Sampling G({}, {})", node_count, probability);

    let mut builder = GraphBuilder::new(node_count);
    for u in 0..node_count as u32 {
        for v in (u + 1)..node_count as u32 {
            if rng.gen_bool(probability) {
                builder.add_edge(u, v);
            }
        }
    }

    Ok(builder.build())
}

/// Map a position in the lexicographic list of pairs `u < v` back to the pair
fn pair_from_index(node_count: usize, mut index: usize) -> (u32, u32) {
    let mut u = 0;
    loop {
        let row = node_count - 1 - u;
        if index < row {
            return (u as u32, (u + 1 + index) as u32);
        }
        index -= row;
        u += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn pair_index_covers_all_pairs_in_order() {
        let pairs: Vec<_> = (0..6).map(|i| pair_from_index(4, i)).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn gnm_has_exactly_the_requested_edges() {
        let mut rng = StdRng::seed_from_u64(7);
        let graph = gnm_random_graph(10, 15, &mut rng).unwrap();
        assert_eq!(graph.node_count, 10);
        assert_eq!(graph.edge_count(), 15);
    }

    #[test]
    fn gnm_at_capacity_is_complete() {
        let mut rng = StdRng::seed_from_u64(1);
        let graph = gnm_random_graph(5, 10, &mut rng).unwrap();
        assert!(graph.nodes().all(|v| graph.degree(v) == 4));
    }

    #[test]
    fn gnm_rejects_too_many_edges() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = gnm_random_graph(4, 7, &mut rng).unwrap_err();
        assert_eq!(err, LabError::TooManyEdges { requested: 7, max: 6 });
    }

    #[test]
    fn generators_reject_unaddressable_node_counts() {
        let mut rng = StdRng::seed_from_u64(1);
        let too_many = MAX_NODES + 1;
        assert!(matches!(
            gnm_random_graph(too_many, 1, &mut rng),
            Err(LabError::InvalidParameter { name: "node_count", .. })
        ));
        assert!(matches!(
            erdos_renyi_graph(too_many, 0.5, &mut rng),
            Err(LabError::InvalidParameter { name: "node_count", .. })
        ));
    }

    #[test]
    fn same_seed_gives_same_graph() {
        let a = gnm_random_graph(12, 20, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = gnm_random_graph(12, 20, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn erdos_renyi_extremes() {
        let mut rng = StdRng::seed_from_u64(3);
        let none = erdos_renyi_graph(8, 0.0, &mut rng).unwrap();
        assert_eq!(none.edge_count(), 0);
        let all = erdos_renyi_graph(8, 1.0, &mut rng).unwrap();
        assert_eq!(all.edge_count(), 28);
    }

    #[test]
    fn erdos_renyi_rejects_bad_probability() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            erdos_renyi_graph(8, 1.5, &mut rng).unwrap_err(),
            LabError::InvalidProbability(1.5)
        );
    }
}
