//! Results persistence module

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use serde_json::{json, to_string_pretty, Value};
use statrs::statistics::Statistics;

use crate::analysis::{CommunityReport, SocialReport};
use crate::centrality::CentralityMap;
use crate::graph::CompressedGraph;

/// Save community detection results to the specified directory
pub fn save_community_results(report: &CommunityReport, output_dir: &Path) -> Result<()> {
    log::info!("Saving community results to {}", output_dir.display());
    fs::create_dir_all(output_dir)?;

    let communities = report.communities.as_deref().unwrap_or(&[]);
    let sizes: Vec<f64> = communities.iter().map(|c| c.size as f64).collect();
    let densities: Vec<f64> = communities.iter().map(|c| c.density).collect();
    let covered: usize = {
        let mut nodes: Vec<u32> = communities.iter().flat_map(|c| c.members.iter().copied()).collect();
        nodes.sort_unstable();
        nodes.dedup();
        nodes.len()
    };

    let result = if report.communities.is_some() {
        "communities"
    } else {
        "no_result"
    };
    let summary = json!({
        "method": report.method,
        "seed": report.seed,
        "graph_stats": graph_stats(&report.graph),
        "result": result,
        "community_stats": {
            "community_count": communities.len(),
            "covered_nodes": covered,
            "largest_community_size": communities.first().map_or(0, |c| c.size),
            "smallest_community_size": communities.last().map_or(0, |c| c.size),
            "avg_community_size": Statistics::mean(&sizes),
            "avg_density": Statistics::mean(&densities),
        }
    });
    write_json(&output_dir.join("summary.json"), &summary)?;

    let listing = json!({
        "communities": communities,
        "edges": report.graph.edges().collect::<Vec<_>>(),
    });
    write_json(&output_dir.join("communities.json"), &listing)?;

    log::info!("Results saved successfully");
    Ok(())
}

/// Save social network analysis results to the specified directory
pub fn save_social_results(report: &SocialReport, output_dir: &Path) -> Result<()> {
    log::info!("Saving social network results to {}", output_dir.display());
    fs::create_dir_all(output_dir)?;

    let summary = json!({
        "seed": report.seed,
        "graph_stats": graph_stats(&report.graph),
        "influencer": report.influencer,
        "central_nodes": report.central_nodes,
        "measure_stats": {
            "degree": measure_stats(&report.measures.degree),
            "closeness": measure_stats(&report.measures.closeness),
            "betweenness": measure_stats(&report.measures.betweenness),
        }
    });
    write_json(&output_dir.join("summary.json"), &summary)?;

    let per_node: Vec<Value> = report
        .graph
        .nodes()
        .map(|v| {
            json!({
                "node": v,
                "degree": report.measures.degree.get(&v),
                "closeness": report.measures.closeness.get(&v),
                "betweenness": report.measures.betweenness.get(&v),
            })
        })
        .collect();
    write_json(&output_dir.join("centrality.json"), &json!({ "nodes": per_node }))?;

    log::info!("Results saved successfully");
    Ok(())
}

fn graph_stats(graph: &CompressedGraph) -> Value {
    let degrees: Vec<f64> = graph.nodes().map(|v| graph.degree(v) as f64).collect();
    json!({
        "node_count": graph.node_count,
        "edge_count": graph.edge_count(),
        "avg_degree": Statistics::mean(&degrees),
        "max_degree": graph.nodes().map(|v| graph.degree(v)).max().unwrap_or(0),
    })
}

/// Mean and spread of one centrality measure; undefined values become null
fn measure_stats(scores: &CentralityMap) -> Value {
    json!({
        "mean": Statistics::mean(scores.values()),
        "std_dev": Statistics::std_dev(scores.values()),
    })
}

fn write_json(path: &Path, value: &Value) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(to_string_pretty(value)?.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{CommunityRequest, SocialRequest};
    use crate::community::Method;
    use crate::config::Config;

    #[test]
    fn community_files_are_written() {
        let dir = tempfile::tempdir().unwrap();
        let report = CommunityRequest {
            node_count: 8,
            edge_count: 10,
            method: Method::BruteForce,
            seed: Some(3),
        }
        .run(&Config::default())
        .unwrap();

        save_community_results(&report, dir.path()).unwrap();

        let summary: Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("summary.json")).unwrap()).unwrap();
        assert_eq!(summary["graph_stats"]["edge_count"], 10);
        assert_eq!(summary["method"], "brute_force");
        assert_eq!(summary["result"], "communities");
        assert!(dir.path().join("communities.json").exists());
    }

    #[test]
    fn no_result_is_recorded() {
        let dir = tempfile::tempdir().unwrap();
        let report = CommunityReport {
            method: Method::GirvanNewman,
            seed: 0,
            graph: CompressedGraph::empty(15),
            communities: None,
        };

        save_community_results(&report, dir.path()).unwrap();

        let summary: Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("summary.json")).unwrap()).unwrap();
        assert_eq!(summary["result"], "no_result");
        assert_eq!(summary["community_stats"]["community_count"], 0);
    }

    #[test]
    fn social_files_are_written() {
        let dir = tempfile::tempdir().unwrap();
        let report = SocialRequest {
            node_count: 6,
            probability: 0.5,
            seed: Some(9),
        }
        .run(&Config::default())
        .unwrap();

        save_social_results(&report, dir.path()).unwrap();

        let centrality: Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("centrality.json")).unwrap()).unwrap();
        assert_eq!(centrality["nodes"].as_array().map(Vec::len), Some(6));
        assert!(dir.path().join("summary.json").exists());
    }
}
