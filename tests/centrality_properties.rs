//! Property-based tests for centrality measures and graph generation.

use graph_community_lab::centrality::{centrality_measures, find_influencer};
use graph_community_lab::graph::generator::{erdos_renyi_graph, gnm_random_graph};
use graph_community_lab::graph::CompressedGraph;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn arb_graph() -> impl Strategy<Value = CompressedGraph> {
    (1usize..=12).prop_flat_map(|n| {
        prop::collection::vec((0..n as u32, 0..n as u32), 0..=30)
            .prop_map(move |edges| CompressedGraph::from_edges(n, edges))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn one_entry_per_node(graph in arb_graph()) {
        let measures = centrality_measures(&graph);
        prop_assert_eq!(measures.degree.len(), graph.node_count);
        prop_assert_eq!(measures.closeness.len(), graph.node_count);
        prop_assert_eq!(measures.betweenness.len(), graph.node_count);
    }

    #[test]
    fn scores_are_normalized(graph in arb_graph()) {
        let measures = centrality_measures(&graph);
        let eps = 1e-9;
        for map in [&measures.degree, &measures.closeness, &measures.betweenness] {
            prop_assert!(map.values().all(|&s| (-eps..=1.0 + eps).contains(&s)));
        }
    }

    #[test]
    fn influencer_has_maximum_degree_centrality(graph in arb_graph()) {
        let measures = centrality_measures(&graph);
        let influencer = find_influencer(&graph).unwrap();
        let top = measures.degree.values().cloned().fold(f64::MIN, f64::max);
        prop_assert_eq!(measures.degree[&influencer], top);
        // smallest id among the tied nodes
        prop_assert!(measures.degree.iter().all(|(&v, &s)| v >= influencer || s < top));
    }

    #[test]
    fn gnm_edge_count_is_exact(n in 0usize..15, frac in 0.0f64..=1.0, seed in any::<u64>()) {
        let m = (CompressedGraph::max_edges(n) as f64 * frac) as usize;
        let graph = gnm_random_graph(n, m, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(graph.node_count, n);
        prop_assert_eq!(graph.edge_count(), m);
    }

    #[test]
    fn gnp_is_simple(n in 1usize..20, p in 0.0f64..=1.0, seed in any::<u64>()) {
        let graph = erdos_renyi_graph(n, p, &mut StdRng::seed_from_u64(seed)).unwrap();
        for (u, v) in graph.edges() {
            prop_assert!(u < v);
            prop_assert!(graph.has_edge(v, u));
        }
    }
}
