//! Exhaustive density-based community search
//!
//! Every non-empty node subset is scored, smallest subsets first. Subsets whose
//! internal edge density is strictly above the threshold are collected, and the
//! collection is then reduced to its maximal members so that no reported community
//! is a proper subset of another.
//!
//! The search visits `2^n - 1` subsets; callers bound `n` before getting here.

use std::cmp::Reverse;
use std::collections::{BTreeSet, HashSet};

use itertools::Itertools;

use crate::community::density::internal_edge_density;
use crate::config::SearchMode;
use crate::graph::CompressedGraph;

/// Density threshold used by the lab
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Brute-force search with the lab's default threshold and incremental subsumption
pub fn brute_force_communities(graph: &CompressedGraph) -> Vec<BTreeSet<u32>> {
    find_communities(graph, DEFAULT_THRESHOLD, SearchMode::Incremental)
}

/// Find the maximal node subsets with internal density above `threshold`
///
/// Subsets are enumerated by ascending size and, within a size, in lexicographic
/// order over the ascending node list. In [`SearchMode::Incremental`] a dense subset
/// already contained in an accepted community is skipped on the spot. Either way,
/// accepted communities that are proper subsets of another accepted community are
/// dropped at the end. The result keeps acceptance order.
pub fn find_communities(
    graph: &CompressedGraph,
    threshold: f64,
    mode: SearchMode,
) -> Vec<BTreeSet<u32>> {
    let nodes: Vec<u32> = graph.nodes().collect();
    let mut accepted: Vec<BTreeSet<u32>> = Vec::new();

    for size in 1..=nodes.len() {
        let before = accepted.len();
        // Accepted communities are never larger than the current candidates, so a
        // candidate can only be contained in one of this round's equal-size sets
        let mut this_round: HashSet<BTreeSet<u32>> = HashSet::new();

        for subset in nodes.iter().copied().combinations(size) {
            if internal_edge_density(graph, &subset) <= threshold {
                continue;
            }

            let candidate: BTreeSet<u32> = subset.into_iter().collect();
            if mode == SearchMode::Incremental && !this_round.insert(candidate.clone()) {
                continue;
            }
            accepted.push(candidate);
        }

        log::debug!(
            "Size {}: accepted {} dense subsets ({} total)",
            size,
            accepted.len() - before,
            accepted.len()
        );
    }

    keep_maximal(accepted)
}

/// Drop every set that is a proper subset of another set in the collection
///
/// A set has a proper superset in the collection exactly when it has one among the
/// maximal sets, so sets are checked largest first against the maximal ones found so
/// far. Surviving sets keep their original order.
pub fn keep_maximal(sets: Vec<BTreeSet<u32>>) -> Vec<BTreeSet<u32>> {
    let mut by_size: Vec<usize> = (0..sets.len()).collect();
    by_size.sort_by_key(|&idx| Reverse(sets[idx].len()));

    let mut keep = vec![false; sets.len()];
    let mut maximal: Vec<usize> = Vec::new();
    for idx in by_size {
        let set = &sets[idx];
        let dominated = maximal
            .iter()
            .any(|&m| set.len() < sets[m].len() && set.is_subset(&sets[m]));
        if !dominated {
            keep[idx] = true;
            maximal.push(idx);
        }
    }

    sets.into_iter()
        .zip(keep)
        .filter_map(|(set, keep)| keep.then_some(set))
        .collect()
}
